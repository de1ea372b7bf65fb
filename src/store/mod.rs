//! Content store abstraction / 内容存储抽象
//!
//! The search core only reads through this trait. All substring lookups are
//! case-insensitive; the hashtag lookup is exact on the `#`-prefixed value.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::ArticleRecord;
use crate::search::types::{Page, PageRequest};

pub mod sqlite;

pub use sqlite::SqliteStore;

#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn find_all(&self, page: &PageRequest) -> Result<Page<ArticleRecord>>;

    async fn find_by_title_contains(&self, keyword: &str, page: &PageRequest) -> Result<Page<ArticleRecord>>;

    async fn find_by_content_contains(&self, keyword: &str, page: &PageRequest) -> Result<Page<ArticleRecord>>;

    async fn find_by_author_id_contains(&self, keyword: &str, page: &PageRequest) -> Result<Page<ArticleRecord>>;

    async fn find_by_author_nickname_contains(&self, keyword: &str, page: &PageRequest) -> Result<Page<ArticleRecord>>;

    /// `hashtag` carries its `#` prefix
    async fn find_by_hashtag_equals(&self, hashtag: &str, page: &PageRequest) -> Result<Page<ArticleRecord>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<ArticleRecord>>;

    async fn count(&self) -> Result<i64>;

    /// Distinct stored hashtag values, `#`-prefixed
    async fn list_distinct_hashtag_values(&self) -> Result<Vec<String>>;
}
