use std::sync::Arc;

use crate::articles::ArticleService;
use crate::config::BoardConfig;
use crate::error::Result;
use crate::search::{PaginationWindow, SearchDispatcher};
use crate::store::SqliteStore;

/// Shared handler state / 共享状态
///
/// Every member is read-only after startup.
pub struct AppState {
    pub search: SearchDispatcher,
    pub articles: ArticleService,
    pub pagination: PaginationWindow,
    pub board: BoardConfig,
}

impl AppState {
    pub fn new(store: SqliteStore, board: BoardConfig) -> Result<Self> {
        Ok(Self {
            search: SearchDispatcher::new(Arc::new(store.clone())),
            articles: ArticleService::new(store),
            pagination: PaginationWindow::new(board.bar_length)?,
            board,
        })
    }
}
