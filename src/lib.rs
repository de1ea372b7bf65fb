//! Article search and listing for a content board / 内容看板文章搜索
//!
//! - `search`: search dispatch, pagination bar, hashtag extraction
//! - `store`: content store trait and its SQLite implementation
//! - `articles`: single-article lookups and writes
//! - `api`: JSON endpoints over the above

pub mod api;
pub mod articles;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod search;
pub mod state;
pub mod store;

pub use error::{BoardError, Result};
