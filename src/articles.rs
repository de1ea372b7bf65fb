//! Article lookups and writes / 文章读写
//!
//! Hashtags are re-derived from the submitted text on every write, so the
//! stored set always matches what the article body and hashtag field say.

use crate::error::{BoardError, Result};
use crate::models::{
    ArticleCommentResponse, ArticleRecord, ArticleRequest, ArticleResponse, ArticleUpdate, CommentRequest,
    NewArticle, NewComment, UserAccount,
};
use crate::search::hashtag::{self, HashtagSet};
use crate::store::{ContentStore, SqliteStore};

/// Article with its comments, newest comment first
#[derive(Debug, Clone)]
pub struct ArticleWithComments {
    pub article: ArticleResponse,
    pub comments: Vec<ArticleCommentResponse>,
}

#[derive(Clone)]
pub struct ArticleService {
    store: SqliteStore,
}

/// Hashtags from the body and the free-text hashtag field
fn collect_hashtags(content: &str, hashtag_field: Option<&str>) -> Vec<String> {
    let mut names: HashtagSet = hashtag::extract(Some(content));
    names.extend(hashtag::extract(hashtag_field));
    names.into_iter().collect()
}

fn required(field: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(BoardError::invalid(format!("{} is required", field))),
    }
}

impl ArticleService {
    pub fn new(store: SqliteStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &SqliteStore {
        &self.store
    }

    async fn record(&self, id: i64) -> Result<ArticleRecord> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| BoardError::not_found(format!("article {}", id)))
    }

    /// Single article / 获取文章
    pub async fn get_article(&self, id: i64) -> Result<ArticleResponse> {
        Ok(ArticleResponse::from_record(self.record(id).await?))
    }

    /// Article detail with comments / 文章详情与评论
    pub async fn get_article_with_comments(&self, id: i64) -> Result<ArticleWithComments> {
        let article = ArticleResponse::from_record(self.record(id).await?);
        let comments = self
            .store
            .find_comments_by_article_id(id)
            .await?
            .into_iter()
            .map(ArticleCommentResponse::from_record)
            .collect();
        Ok(ArticleWithComments { article, comments })
    }

    pub async fn article_count(&self) -> Result<i64> {
        self.store.count().await
    }

    pub async fn save_user_account(&self, account: UserAccount) -> Result<UserAccount> {
        let user_id = required("user_id", Some(account.user_id))?;
        let account = UserAccount { user_id, ..account };
        self.store.upsert_user_account(&account).await?;
        Ok(account)
    }

    /// Create an article; returns its id / 新建文章
    pub async fn save_article(&self, request: ArticleRequest) -> Result<i64> {
        if self.store.find_user_account(&request.user_id).await?.is_none() {
            return Err(BoardError::not_found(format!("user account {}", request.user_id)));
        }

        let title = required("title", request.title)?;
        let content = required("content", request.content)?;
        let hashtags = collect_hashtags(&content, request.hashtag.as_deref());

        let id = self
            .store
            .insert_article(&NewArticle {
                user_id: request.user_id,
                title,
                content,
                hashtags,
            })
            .await?;
        tracing::info!("Article {} created", id);
        Ok(id)
    }

    /// Edit an article; only its author may change it / 编辑文章
    ///
    /// Absent title/content keep the stored value. Blank ones are rejected.
    pub async fn update_article(&self, id: i64, request: ArticleRequest) -> Result<()> {
        let current = self.record(id).await?;
        if current.author.user_id != request.user_id {
            tracing::warn!("Article {} update rejected: {} is not the author", id, request.user_id);
            return Err(BoardError::not_found(format!("article {} for user {}", id, request.user_id)));
        }

        let title = request.title.map(|t| required("title", Some(t))).transpose()?;
        let content = request.content.map(|c| required("content", Some(c))).transpose()?;
        let body = content.as_deref().unwrap_or(&current.content);
        let update = ArticleUpdate {
            hashtags: collect_hashtags(body, request.hashtag.as_deref()),
            title,
            content,
        };

        if !self.store.update_article(id, &request.user_id, &update).await? {
            return Err(BoardError::not_found(format!("article {}", id)));
        }
        Ok(())
    }

    /// Comment on an article; returns the comment id / 发表评论
    ///
    /// A reply's parent must be a comment on the same article.
    pub async fn save_comment(&self, article_id: i64, request: CommentRequest) -> Result<i64> {
        self.record(article_id).await?;
        if self.store.find_user_account(&request.user_id).await?.is_none() {
            return Err(BoardError::not_found(format!("user account {}", request.user_id)));
        }
        let content = required("content", request.content)?;

        if let Some(parent) = request.parent_comment_id {
            if self.store.find_comment_article_id(parent).await? != Some(article_id) {
                return Err(BoardError::invalid(format!(
                    "comment {} is not on article {}",
                    parent, article_id
                )));
            }
        }

        let id = self
            .store
            .insert_comment(&NewComment {
                article_id,
                user_id: request.user_id,
                parent_comment_id: request.parent_comment_id,
                content,
            })
            .await?;
        tracing::info!("Comment {} added to article {}", id, article_id);
        Ok(id)
    }

    /// Delete an article owned by `user_id`
    pub async fn delete_article(&self, id: i64, user_id: &str) -> Result<()> {
        if self.store.delete_article(id, user_id).await? == 0 {
            return Err(BoardError::not_found(format!("article {} for user {}", id, user_id)));
        }
        tracing::info!("Article {} deleted by {}", id, user_id);
        Ok(())
    }
}
