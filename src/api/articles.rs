use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::{ApiResponse, ApiResult};
use crate::config::BoardConfig;
use crate::error::{BoardError, Result};
use crate::models::{ArticleCommentResponse, ArticleRequest, ArticleResponse, CommentRequest, UserAccount};
use crate::search::{Page, PageRequest, SearchType, SortOrder};
use crate::state::AppState;

/// Listing query string / 列表查询参数
///
/// `sort` takes `field,direction` pairs separated by `;`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListQuery {
    pub search_type: Option<String>,
    pub search_value: Option<String>,
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub sort: Option<String>,
}

impl ArticleListQuery {
    fn search_type(&self) -> Result<Option<SearchType>> {
        match self.search_type.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(name) => name.parse().map(Some),
        }
    }

    fn page_request(&self, board: &BoardConfig) -> Result<PageRequest> {
        let size = self.size.unwrap_or(board.page_size);
        if size > board.max_page_size {
            return Err(BoardError::invalid(format!(
                "page size must be <= {}, got {}",
                board.max_page_size, size
            )));
        }
        let sort = match self.sort.as_deref() {
            Some(spec) if !spec.trim().is_empty() => spec
                .split(';')
                .filter(|s| !s.trim().is_empty())
                .map(SortOrder::parse)
                .collect::<Result<Vec<_>>>()?,
            _ => Vec::new(),
        };
        PageRequest::new(self.page.unwrap_or(0), size, sort)
    }
}

#[derive(Debug, Serialize)]
pub struct SearchTypeOption {
    pub name: &'static str,
    pub description: &'static str,
}

impl From<SearchType> for SearchTypeOption {
    fn from(search_type: SearchType) -> Self {
        Self {
            name: search_type.name(),
            description: search_type.description(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListData {
    pub articles: Page<ArticleResponse>,
    pub pagination_bar_numbers: Vec<i64>,
    pub search_types: Vec<SearchTypeOption>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HashtagSearchData {
    pub articles: Page<ArticleResponse>,
    pub hashtags: Vec<String>,
    pub pagination_bar_numbers: Vec<i64>,
    pub search_type: SearchType,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDetailData {
    pub article: ArticleResponse,
    pub article_comments: Vec<ArticleCommentResponse>,
    pub total_count: i64,
}

#[derive(Debug, Serialize)]
pub struct CreatedArticle {
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct CreatedComment {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct DeleteArticleRequest {
    pub user_id: String,
}

/// GET /api/articles - 文章列表与搜索
pub async fn list_articles(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ArticleListQuery>,
) -> ApiResult<ArticleListData> {
    let page_request = query.page_request(&state.board)?;
    let articles = state
        .search
        .search(query.search_type()?, query.search_value.as_deref(), &page_request)
        .await?;
    let bar = state.pagination.numbers(page_request.index(), articles.total_pages)?;

    Ok(Json(ApiResponse::success(ArticleListData {
        articles,
        pagination_bar_numbers: bar,
        search_types: SearchType::ALL.into_iter().map(SearchTypeOption::from).collect(),
    })))
}

/// GET /api/articles/search-hashtag - 按标签搜索
pub async fn search_hashtag(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ArticleListQuery>,
) -> ApiResult<HashtagSearchData> {
    let page_request = query.page_request(&state.board)?;
    let articles = state
        .search
        .search_by_hashtag(query.search_value.as_deref(), &page_request)
        .await?;
    let bar = state.pagination.numbers(page_request.index(), articles.total_pages)?;
    let hashtags = state.search.list_distinct_hashtags().await?;

    Ok(Json(ApiResponse::success(HashtagSearchData {
        articles,
        hashtags,
        pagination_bar_numbers: bar,
        search_type: SearchType::Hashtag,
    })))
}

/// GET /api/articles/:id - 文章详情与评论
pub async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<ArticleDetailData> {
    let detail = state.articles.get_article_with_comments(id).await?;
    let total_count = state.articles.article_count().await?;
    Ok(Json(ApiResponse::success(ArticleDetailData {
        article: detail.article,
        article_comments: detail.comments,
        total_count,
    })))
}

/// POST /api/articles/:id/comments - 发表评论
pub async fn create_comment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<CommentRequest>,
) -> ApiResult<CreatedComment> {
    let id = state.articles.save_comment(id, req).await?;
    Ok(Json(ApiResponse::success(CreatedComment { id })))
}

/// POST /api/articles - 新建文章
pub async fn create_article(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ArticleRequest>,
) -> ApiResult<CreatedArticle> {
    let id = state.articles.save_article(req).await?;
    Ok(Json(ApiResponse::success(CreatedArticle { id })))
}

/// POST /api/articles/:id - 编辑文章
pub async fn update_article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<ArticleRequest>,
) -> ApiResult<()> {
    state.articles.update_article(id, req).await?;
    Ok(Json(ApiResponse::success(())))
}

/// POST /api/articles/:id/delete - 删除文章
pub async fn delete_article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<DeleteArticleRequest>,
) -> ApiResult<()> {
    state.articles.delete_article(id, &req.user_id).await?;
    Ok(Json(ApiResponse::success(())))
}

/// GET /api/hashtags - 标签列表
pub async fn list_hashtags(State(state): State<Arc<AppState>>) -> ApiResult<Vec<String>> {
    let hashtags = state.search.list_distinct_hashtags().await?;
    Ok(Json(ApiResponse::success(hashtags)))
}

/// POST /api/accounts - 新增或更新作者
pub async fn save_account(
    State(state): State<Arc<AppState>>,
    Json(account): Json<UserAccount>,
) -> ApiResult<UserAccount> {
    let account = state.articles.save_user_account(account).await?;
    Ok(Json(ApiResponse::success(account)))
}
