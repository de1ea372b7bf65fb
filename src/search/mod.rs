//! Search module - article search primitives / 搜索模块
//!
//! - `dispatcher`: search type -> store query, result mapping
//! - `pagination`: page numbers shown in the paging bar
//! - `hashtag`: hashtag extraction from free text
//! - `types`: search request, page request and page types

pub mod dispatcher;
pub mod hashtag;
pub mod pagination;
pub mod types;

pub use dispatcher::SearchDispatcher;
pub use hashtag::{extract, HashtagSet};
pub use pagination::{window, PaginationWindow};
pub use types::{Page, PageRequest, SearchRequest, SearchType, SortField, SortOrder};
