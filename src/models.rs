use serde::{Deserialize, Serialize};

use crate::search::hashtag;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct UserAccount {
    pub user_id: String,
    pub email: Option<String>,
    pub nickname: Option<String>,
}

/// Stored article as returned by the content store / 存储层文章记录
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleRecord {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: UserAccount,
    /// `#`-prefixed values, sorted
    pub hashtags: Vec<String>,
    pub created_at: String,
    pub created_by: String,
    pub modified_at: String,
    pub modified_by: String,
}

/// Display-safe article DTO / 文章响应
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArticleResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub hashtags: Vec<String>,
    pub created_at: String,
    pub email: Option<String>,
    pub nickname: String,
}

impl ArticleResponse {
    /// Map a record; a blank or missing nickname falls back to the user id
    pub fn from_record(record: ArticleRecord) -> Self {
        let nickname = display_name(&record.author);
        Self {
            id: record.id,
            title: record.title,
            content: record.content,
            hashtags: record
                .hashtags
                .iter()
                .map(|h| hashtag::from_stored(h).to_string())
                .collect(),
            created_at: record.created_at,
            email: record.author.email,
            nickname,
        }
    }
}

/// Nickname, or the user id when the nickname is absent/blank
pub fn display_name(account: &UserAccount) -> String {
    match account.nickname.as_deref() {
        Some(nickname) if !nickname.trim().is_empty() => nickname.to_string(),
        _ => account.user_id.clone(),
    }
}

/// Create/edit form payload / 文章表单
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleRequest {
    pub user_id: String,
    pub title: Option<String>,
    pub content: Option<String>,
    /// Free text; every `#name` token in it is stored
    #[serde(default)]
    pub hashtag: Option<String>,
}

/// Validated article ready for the store
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub user_id: String,
    pub title: String,
    pub content: String,
    /// Bare names
    pub hashtags: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ArticleUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub hashtags: Vec<String>,
}

/// Stored comment with its author / 存储层评论记录
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleCommentRecord {
    pub id: i64,
    pub article_id: i64,
    /// Set on replies
    pub parent_comment_id: Option<i64>,
    pub content: String,
    pub author: UserAccount,
    pub created_at: String,
    pub created_by: String,
    pub modified_at: String,
    pub modified_by: String,
}

/// Comment DTO / 评论响应
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArticleCommentResponse {
    pub id: i64,
    pub content: String,
    pub created_at: String,
    pub email: Option<String>,
    pub nickname: String,
    pub user_id: String,
    pub parent_comment_id: Option<i64>,
}

impl ArticleCommentResponse {
    pub fn from_record(record: ArticleCommentRecord) -> Self {
        let nickname = display_name(&record.author);
        Self {
            id: record.id,
            content: record.content,
            created_at: record.created_at,
            email: record.author.email,
            nickname,
            user_id: record.author.user_id,
            parent_comment_id: record.parent_comment_id,
        }
    }
}

/// Comment form payload / 评论表单
#[derive(Debug, Clone, Deserialize)]
pub struct CommentRequest {
    pub user_id: String,
    pub content: Option<String>,
    #[serde(default)]
    pub parent_comment_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub article_id: i64,
    pub user_id: String,
    pub parent_comment_id: Option<i64>,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(nickname: Option<&str>) -> ArticleRecord {
        ArticleRecord {
            id: 1,
            title: "title".to_string(),
            content: "content".to_string(),
            author: UserAccount {
                user_id: "uno".to_string(),
                email: Some("uno@mail.com".to_string()),
                nickname: nickname.map(|n| n.to_string()),
            },
            hashtags: vec!["#java".to_string(), "#spring".to_string()],
            created_at: "2024-01-01T00:00:00.000Z".to_string(),
            created_by: "uno".to_string(),
            modified_at: "2024-01-01T00:00:00.000Z".to_string(),
            modified_by: "uno".to_string(),
        }
    }

    #[test]
    fn test_nickname_fallback_when_blank() {
        assert_eq!(ArticleResponse::from_record(record(Some(""))).nickname, "uno");
        assert_eq!(ArticleResponse::from_record(record(Some("  "))).nickname, "uno");
    }

    #[test]
    fn test_nickname_fallback_when_absent() {
        assert_eq!(ArticleResponse::from_record(record(None)).nickname, "uno");
    }

    #[test]
    fn test_comment_response_falls_back_to_user_id() {
        let comment = ArticleCommentRecord {
            id: 7,
            article_id: 1,
            parent_comment_id: Some(3),
            content: "reply".to_string(),
            author: UserAccount {
                user_id: "dos".to_string(),
                email: None,
                nickname: Some(" ".to_string()),
            },
            created_at: "2024-01-01T00:00:00.000Z".to_string(),
            created_by: "dos".to_string(),
            modified_at: "2024-01-01T00:00:00.000Z".to_string(),
            modified_by: "dos".to_string(),
        };
        let response = ArticleCommentResponse::from_record(comment);
        assert_eq!(response.nickname, "dos");
        assert_eq!(response.user_id, "dos");
        assert_eq!(response.parent_comment_id, Some(3));
    }

    #[test]
    fn test_nickname_kept_when_present() {
        let response = ArticleResponse::from_record(record(Some("Uno")));
        assert_eq!(response.nickname, "Uno");
        assert_eq!(response.hashtags, vec!["java", "spring"]);
        assert_eq!(response.email.as_deref(), Some("uno@mail.com"));
    }
}
