//! Search dispatcher / 搜索分发
//!
//! Resolves a search type to exactly one store query through a strategy
//! table. Adding a searchable field means one `SearchType` case plus one
//! entry in [`strategy`].

use futures::future::BoxFuture;
use futures::FutureExt;
use std::sync::Arc;

use super::hashtag;
use super::types::{non_blank, Page, PageRequest, SearchRequest, SearchType};
use crate::error::Result;
use crate::models::{ArticleRecord, ArticleResponse};
use crate::store::ContentStore;

/// Store query for one search type
pub type QueryFn = for<'a> fn(&'a dyn ContentStore, &'a str, &'a PageRequest) -> BoxFuture<'a, Result<Page<ArticleRecord>>>;

fn by_title<'a>(store: &'a dyn ContentStore, keyword: &'a str, page: &'a PageRequest) -> BoxFuture<'a, Result<Page<ArticleRecord>>> {
    store.find_by_title_contains(keyword, page)
}

fn by_content<'a>(store: &'a dyn ContentStore, keyword: &'a str, page: &'a PageRequest) -> BoxFuture<'a, Result<Page<ArticleRecord>>> {
    store.find_by_content_contains(keyword, page)
}

fn by_author_id<'a>(store: &'a dyn ContentStore, keyword: &'a str, page: &'a PageRequest) -> BoxFuture<'a, Result<Page<ArticleRecord>>> {
    store.find_by_author_id_contains(keyword, page)
}

fn by_author_nickname<'a>(store: &'a dyn ContentStore, keyword: &'a str, page: &'a PageRequest) -> BoxFuture<'a, Result<Page<ArticleRecord>>> {
    store.find_by_author_nickname_contains(keyword, page)
}

/// Exact match on the stored `#name`. Surrounding whitespace and a leading
/// `#` from the caller are dropped, since a hashtag name never holds either.
fn by_hashtag<'a>(store: &'a dyn ContentStore, keyword: &'a str, page: &'a PageRequest) -> BoxFuture<'a, Result<Page<ArticleRecord>>> {
    async move {
        let value = hashtag::to_stored(hashtag::from_stored(keyword.trim()).trim());
        store.find_by_hashtag_equals(&value, page).await
    }
    .boxed()
}

/// Strategy table: search type -> store query
pub fn strategy(search_type: SearchType) -> QueryFn {
    match search_type {
        SearchType::Title => by_title,
        SearchType::Content => by_content,
        SearchType::AuthorId => by_author_id,
        SearchType::AuthorNickname => by_author_nickname,
        SearchType::Hashtag => by_hashtag,
    }
}

/// Article search over a content store / 文章搜索
#[derive(Clone)]
pub struct SearchDispatcher {
    store: Arc<dyn ContentStore>,
}

impl SearchDispatcher {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    /// Search by type and keyword / 按类型搜索
    ///
    /// A blank or absent keyword ignores `search_type` and lists everything.
    /// A keyword without a type searches titles.
    pub async fn search(
        &self,
        search_type: Option<SearchType>,
        keyword: Option<&str>,
        page: &PageRequest,
    ) -> Result<Page<ArticleResponse>> {
        let store = self.store.as_ref();
        let records = match non_blank(keyword) {
            None => store.find_all(page).await?,
            Some(keyword) => {
                let search_type = search_type.unwrap_or(SearchType::Title);
                tracing::debug!("Searching articles: type={} keyword={:?}", search_type, keyword);
                strategy(search_type)(store, keyword, page).await?
            }
        };
        Ok(records.map(ArticleResponse::from_record))
    }

    pub async fn search_request(&self, request: &SearchRequest) -> Result<Page<ArticleResponse>> {
        self.search(request.search_type, request.keyword.as_deref(), &request.page).await
    }

    /// Search by hashtag name / 按标签搜索
    ///
    /// Unlike [`search`](Self::search), a blank keyword yields an empty page.
    pub async fn search_by_hashtag(&self, keyword: Option<&str>, page: &PageRequest) -> Result<Page<ArticleResponse>> {
        let Some(keyword) = non_blank(keyword) else {
            return Ok(Page::empty(page.clone()));
        };
        let records = strategy(SearchType::Hashtag)(self.store.as_ref(), keyword, page).await?;
        Ok(records.map(ArticleResponse::from_record))
    }

    /// Distinct hashtag names in use, without `#`, sorted
    pub async fn list_distinct_hashtags(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self
            .store
            .list_distinct_hashtag_values()
            .await?
            .iter()
            .map(|v| hashtag::from_stored(v).to_string())
            .collect();
        names.sort();
        names.dedup();
        Ok(names)
    }
}
