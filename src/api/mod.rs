pub mod articles;
pub mod server;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::error::BoardError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: 200,
            message: "success".to_string(),
            data: Some(data),
        }
    }

    pub fn error(code: i32, message: &str) -> Self {
        Self {
            code,
            message: message.to_string(),
            data: None,
        }
    }
}

/// Handler error; maps each error kind to its HTTP status
#[derive(Debug)]
pub struct ApiError(pub BoardError);

impl From<BoardError> for ApiError {
    fn from(err: BoardError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            BoardError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            BoardError::NotFound(_) => StatusCode::NOT_FOUND,
            BoardError::Store(e) => {
                tracing::warn!("Store failure: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = ApiResponse::<()>::error(status.as_u16() as i32, &self.0.to_string());
        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

/// Build the board router / 构建路由
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(server::health_check))
        .route("/api/accounts", post(articles::save_account))
        .route(
            "/api/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route("/api/articles/search-hashtag", get(articles::search_hashtag))
        .route(
            "/api/articles/:id",
            get(articles::get_article).post(articles::update_article),
        )
        .route("/api/articles/:id/delete", post(articles::delete_article))
        .route("/api/articles/:id/comments", post(articles::create_comment))
        .route("/api/hashtags", get(articles::list_hashtags))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
