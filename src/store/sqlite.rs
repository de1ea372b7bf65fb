//! SQLite content store / SQLite 内容存储
//!
//! Substring lookups are `LIKE` against lower-cased shadow columns with the
//! keyword's wildcards escaped. Hashtags live in `article_hashtags`, one row
//! per tag, so hashtag search is set membership on an exact `#name` value.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::{sqlite::SqlitePoolOptions, Pool, Sqlite};

use super::ContentStore;
use crate::db;
use crate::error::Result;
use crate::models::{ArticleCommentRecord, ArticleRecord, ArticleUpdate, NewArticle, NewComment, UserAccount};
use crate::search::hashtag;
use crate::search::types::{Page, PageRequest};

const SELECT_ARTICLES: &str = r#"
    SELECT a.id, a.title, a.content, a.user_id, u.email, u.nickname,
        (SELECT group_concat(h.hashtag, ' ') FROM article_hashtags h WHERE h.article_id = a.id) AS hashtags,
        a.created_at, a.created_by, a.modified_at, a.modified_by
    FROM articles a
    JOIN user_accounts u ON u.user_id = a.user_id
"#;

const COUNT_ARTICLES: &str = r#"
    SELECT COUNT(*)
    FROM articles a
    JOIN user_accounts u ON u.user_id = a.user_id
"#;

/// Row shape of `SELECT_ARTICLES`
#[derive(Debug, sqlx::FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    content: String,
    user_id: String,
    email: Option<String>,
    nickname: Option<String>,
    hashtags: Option<String>,
    created_at: String,
    created_by: String,
    modified_at: String,
    modified_by: String,
}

impl From<ArticleRow> for ArticleRecord {
    fn from(row: ArticleRow) -> Self {
        let mut hashtags: Vec<String> = row
            .hashtags
            .as_deref()
            .unwrap_or("")
            .split_whitespace()
            .map(|h| h.to_string())
            .collect();
        hashtags.sort();

        ArticleRecord {
            id: row.id,
            title: row.title,
            content: row.content,
            author: UserAccount {
                user_id: row.user_id,
                email: row.email,
                nickname: row.nickname,
            },
            hashtags,
            created_at: row.created_at,
            created_by: row.created_by,
            modified_at: row.modified_at,
            modified_by: row.modified_by,
        }
    }
}

const SELECT_COMMENTS: &str = r#"
    SELECT c.id, c.article_id, c.parent_comment_id, c.content, c.user_id, u.email, u.nickname,
        c.created_at, c.created_by, c.modified_at, c.modified_by
    FROM article_comments c
    JOIN user_accounts u ON u.user_id = c.user_id
"#;

/// Row shape of `SELECT_COMMENTS`
#[derive(Debug, sqlx::FromRow)]
struct CommentRow {
    id: i64,
    article_id: i64,
    parent_comment_id: Option<i64>,
    content: String,
    user_id: String,
    email: Option<String>,
    nickname: Option<String>,
    created_at: String,
    created_by: String,
    modified_at: String,
    modified_by: String,
}

impl From<CommentRow> for ArticleCommentRecord {
    fn from(row: CommentRow) -> Self {
        ArticleCommentRecord {
            id: row.id,
            article_id: row.article_id,
            parent_comment_id: row.parent_comment_id,
            content: row.content,
            author: UserAccount {
                user_id: row.user_id,
                email: row.email,
                nickname: row.nickname,
            },
            created_at: row.created_at,
            created_by: row.created_by,
            modified_at: row.modified_at,
            modified_by: row.modified_by,
        }
    }
}

/// Lower-cased columns searchable by substring
#[derive(Debug, Clone, Copy)]
enum TextColumn {
    Title,
    Content,
    AuthorId,
    AuthorNickname,
}

impl TextColumn {
    fn name(&self) -> &'static str {
        match self {
            TextColumn::Title => "a.title_lower",
            TextColumn::Content => "a.content_lower",
            TextColumn::AuthorId => "u.user_id_lower",
            TextColumn::AuthorNickname => "u.nickname_lower",
        }
    }
}

/// Which rows a page query selects
#[derive(Debug, Clone, Copy)]
enum Filter<'a> {
    All,
    Contains(TextColumn, &'a str),
    HashtagEquals(&'a str),
}

impl Filter<'_> {
    /// WHERE clause and its single bind value
    fn clause(&self) -> (String, Option<String>) {
        match self {
            Filter::All => (String::new(), None),
            Filter::Contains(column, keyword) => (
                format!("WHERE {} LIKE ? ESCAPE '\\'", column.name()),
                Some(format!("%{}%", escape_like(&keyword.to_lowercase()))),
            ),
            Filter::HashtagEquals(value) => (
                "WHERE EXISTS (SELECT 1 FROM article_hashtags h WHERE h.article_id = a.id AND h.hashtag = ?)"
                    .to_string(),
                Some(value.to_string()),
            ),
        }
    }
}

/// Escape `LIKE` wildcards so the keyword matches literally
fn escape_like(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len());
    for c in keyword.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Article store backed by SQLite
#[derive(Clone)]
pub struct SqliteStore {
    db: Pool<Sqlite>,
}

impl SqliteStore {
    /// Use an existing connection pool
    pub fn new(db: Pool<Sqlite>) -> Self {
        Self { db }
    }

    /// Open (or create) a database file and migrate it
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let db = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        sqlx::query("PRAGMA journal_mode=WAL").execute(&db).await?;
        sqlx::query("PRAGMA busy_timeout=5000").execute(&db).await?;
        sqlx::query("PRAGMA synchronous=NORMAL").execute(&db).await?;

        db::run_migrations(&db).await?;
        tracing::info!("Article database opened: {} (WAL mode)", database_url);

        Ok(Self { db })
    }

    /// Private in-memory database; one connection so every query sees it
    pub async fn in_memory() -> Result<Self> {
        let db = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        db::run_migrations(&db).await?;
        Ok(Self { db })
    }

    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.db
    }

    /// Count and fetch one page inside a single read transaction
    async fn find_page(&self, filter: Filter<'_>, page: &PageRequest) -> Result<Page<ArticleRecord>> {
        let (clause, param) = filter.clause();
        let count_sql = format!("{} {}", COUNT_ARTICLES, clause);
        let select_sql = format!(
            "{} {} ORDER BY {} LIMIT ? OFFSET ?",
            SELECT_ARTICLES,
            clause,
            page.order_by_clause()
        );

        let mut tx = self.db.begin().await?;

        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        if let Some(value) = param.as_deref() {
            count_query = count_query.bind(value);
        }
        let total = count_query.fetch_one(&mut *tx).await?;

        let mut rows_query = sqlx::query_as::<_, ArticleRow>(&select_sql);
        if let Some(value) = param.as_deref() {
            rows_query = rows_query.bind(value);
        }
        let rows = rows_query
            .bind(page.size())
            .bind(page.offset())
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            "Article page {:?}: index={} size={} rows={} total={}",
            filter,
            page.index(),
            page.size(),
            rows.len(),
            total
        );

        Ok(Page::new(
            rows.into_iter().map(ArticleRecord::from).collect(),
            total,
            page.clone(),
        ))
    }

    /// Insert or refresh an author / 新增或更新作者
    pub async fn upsert_user_account(&self, account: &UserAccount) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO user_accounts (user_id, user_id_lower, email, nickname, nickname_lower, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT(user_id) DO UPDATE SET
                email = excluded.email,
                nickname = excluded.nickname,
                nickname_lower = excluded.nickname_lower
            "#,
        )
        .bind(&account.user_id)
        .bind(account.user_id.to_lowercase())
        .bind(&account.email)
        .bind(&account.nickname)
        .bind(account.nickname.as_ref().map(|n| n.to_lowercase()))
        .bind(timestamp(Utc::now()))
        .execute(&self.db)
        .await?;
        Ok(())
    }

    pub async fn find_user_account(&self, user_id: &str) -> Result<Option<UserAccount>> {
        let account = sqlx::query_as::<_, UserAccount>(
            "SELECT user_id, email, nickname FROM user_accounts WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;
        Ok(account)
    }

    pub async fn insert_article(&self, article: &NewArticle) -> Result<i64> {
        self.insert_article_at(article, Utc::now()).await
    }

    /// Insert with an explicit creation time; returns the new id
    pub async fn insert_article_at(&self, article: &NewArticle, created_at: DateTime<Utc>) -> Result<i64> {
        let now = timestamp(created_at);
        let mut tx = self.db.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO articles
                (user_id, title, title_lower, content, content_lower, created_at, created_by, modified_at, modified_by)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&article.user_id)
        .bind(&article.title)
        .bind(article.title.to_lowercase())
        .bind(&article.content)
        .bind(article.content.to_lowercase())
        .bind(&now)
        .bind(&article.user_id)
        .bind(&now)
        .bind(&article.user_id)
        .execute(&mut *tx)
        .await?;
        let id = result.last_insert_rowid();

        replace_hashtags(&mut tx, id, &article.hashtags).await?;
        tx.commit().await?;

        tracing::debug!("Article {} saved by {}", id, article.user_id);
        Ok(id)
    }

    /// Update an article owned by `user_id`; false when no such article
    pub async fn update_article(&self, id: i64, user_id: &str, update: &ArticleUpdate) -> Result<bool> {
        let mut tx = self.db.begin().await?;

        let owner: Option<String> = sqlx::query_scalar("SELECT user_id FROM articles WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if owner.as_deref() != Some(user_id) {
            return Ok(false);
        }

        sqlx::query(
            r#"
            UPDATE articles SET
                title = COALESCE(?, title),
                title_lower = COALESCE(?, title_lower),
                content = COALESCE(?, content),
                content_lower = COALESCE(?, content_lower),
                modified_at = ?,
                modified_by = ?
            WHERE id = ?
            "#,
        )
        .bind(&update.title)
        .bind(update.title.as_ref().map(|t| t.to_lowercase()))
        .bind(&update.content)
        .bind(update.content.as_ref().map(|c| c.to_lowercase()))
        .bind(timestamp(Utc::now()))
        .bind(user_id)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        replace_hashtags(&mut tx, id, &update.hashtags).await?;
        tx.commit().await?;
        Ok(true)
    }

    /// Delete an article owned by `user_id`; returns rows removed
    pub async fn delete_article(&self, id: i64, user_id: &str) -> Result<u64> {
        let mut tx = self.db.begin().await?;

        let deleted = sqlx::query("DELETE FROM articles WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        if deleted > 0 {
            sqlx::query("DELETE FROM article_hashtags WHERE article_id = ?")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            sqlx::query("DELETE FROM article_comments WHERE article_id = ?")
                .bind(id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(deleted)
    }

    /// Comments on an article, newest first / 文章评论
    pub async fn find_comments_by_article_id(&self, article_id: i64) -> Result<Vec<ArticleCommentRecord>> {
        let sql = format!(
            "{} WHERE c.article_id = ? ORDER BY c.created_at DESC, c.id DESC",
            SELECT_COMMENTS
        );
        let rows = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(article_id)
            .fetch_all(&self.db)
            .await?;
        Ok(rows.into_iter().map(ArticleCommentRecord::from).collect())
    }

    /// Article a comment belongs to, if the comment exists
    pub async fn find_comment_article_id(&self, comment_id: i64) -> Result<Option<i64>> {
        let article_id = sqlx::query_scalar::<_, i64>("SELECT article_id FROM article_comments WHERE id = ?")
            .bind(comment_id)
            .fetch_optional(&self.db)
            .await?;
        Ok(article_id)
    }

    pub async fn insert_comment(&self, comment: &NewComment) -> Result<i64> {
        self.insert_comment_at(comment, Utc::now()).await
    }

    /// Insert a comment with an explicit creation time; returns the new id
    pub async fn insert_comment_at(&self, comment: &NewComment, created_at: DateTime<Utc>) -> Result<i64> {
        let now = timestamp(created_at);
        let id = sqlx::query(
            r#"
            INSERT INTO article_comments
                (article_id, user_id, parent_comment_id, content, created_at, created_by, modified_at, modified_by)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(comment.article_id)
        .bind(&comment.user_id)
        .bind(comment.parent_comment_id)
        .bind(&comment.content)
        .bind(&now)
        .bind(&comment.user_id)
        .bind(&now)
        .bind(&comment.user_id)
        .execute(&self.db)
        .await?
        .last_insert_rowid();

        tracing::debug!("Comment {} saved on article {} by {}", id, comment.article_id, comment.user_id);
        Ok(id)
    }
}

/// Swap an article's hashtag rows for `names` (bare names)
async fn replace_hashtags(tx: &mut sqlx::Transaction<'_, Sqlite>, article_id: i64, names: &[String]) -> Result<()> {
    sqlx::query("DELETE FROM article_hashtags WHERE article_id = ?")
        .bind(article_id)
        .execute(&mut **tx)
        .await?;

    for name in names {
        sqlx::query("INSERT OR IGNORE INTO article_hashtags (article_id, hashtag) VALUES (?, ?)")
            .bind(article_id)
            .bind(hashtag::to_stored(name))
            .execute(&mut **tx)
            .await?;
    }
    Ok(())
}

#[async_trait]
impl ContentStore for SqliteStore {
    async fn find_all(&self, page: &PageRequest) -> Result<Page<ArticleRecord>> {
        self.find_page(Filter::All, page).await
    }

    async fn find_by_title_contains(&self, keyword: &str, page: &PageRequest) -> Result<Page<ArticleRecord>> {
        self.find_page(Filter::Contains(TextColumn::Title, keyword), page).await
    }

    async fn find_by_content_contains(&self, keyword: &str, page: &PageRequest) -> Result<Page<ArticleRecord>> {
        self.find_page(Filter::Contains(TextColumn::Content, keyword), page).await
    }

    async fn find_by_author_id_contains(&self, keyword: &str, page: &PageRequest) -> Result<Page<ArticleRecord>> {
        self.find_page(Filter::Contains(TextColumn::AuthorId, keyword), page).await
    }

    async fn find_by_author_nickname_contains(&self, keyword: &str, page: &PageRequest) -> Result<Page<ArticleRecord>> {
        self.find_page(Filter::Contains(TextColumn::AuthorNickname, keyword), page).await
    }

    async fn find_by_hashtag_equals(&self, hashtag: &str, page: &PageRequest) -> Result<Page<ArticleRecord>> {
        self.find_page(Filter::HashtagEquals(hashtag), page).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ArticleRecord>> {
        let sql = format!("{} WHERE a.id = ?", SELECT_ARTICLES);
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(id)
            .fetch_optional(&self.db)
            .await?;
        Ok(row.map(ArticleRecord::from))
    }

    async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM articles")
            .fetch_one(&self.db)
            .await?;
        Ok(count)
    }

    async fn list_distinct_hashtag_values(&self) -> Result<Vec<String>> {
        let values = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT hashtag FROM article_hashtags ORDER BY hashtag",
        )
        .fetch_all(&self.db)
        .await?;
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn account(user_id: &str, nickname: Option<&str>) -> UserAccount {
        UserAccount {
            user_id: user_id.to_string(),
            email: Some(format!("{}@mail.com", user_id)),
            nickname: nickname.map(|n| n.to_string()),
        }
    }

    fn article(user_id: &str, title: &str, content: &str, hashtags: &[&str]) -> NewArticle {
        NewArticle {
            user_id: user_id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            hashtags: hashtags.iter().map(|h| h.to_string()).collect(),
        }
    }

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, minute, 0).unwrap()
    }

    async fn seeded() -> SqliteStore {
        let store = SqliteStore::in_memory().await.unwrap();
        store.upsert_user_account(&account("uno", Some("Uno"))).await.unwrap();
        store.upsert_user_account(&account("dos", None)).await.unwrap();
        store
            .insert_article_at(&article("uno", "Learning Java", "first post", &["java"]), at(1))
            .await
            .unwrap();
        store
            .insert_article_at(&article("uno", "JavaScript tips", "second post", &["javascript"]), at(2))
            .await
            .unwrap();
        store
            .insert_article_at(&article("dos", "Rust 100%", "third_post body", &["rust", "java"]), at(3))
            .await
            .unwrap();
        store
    }

    fn titles(page: &Page<ArticleRecord>) -> Vec<&str> {
        page.items.iter().map(|r| r.title.as_str()).collect()
    }

    #[tokio::test]
    async fn test_find_all_sorted_newest_first() {
        let store = seeded().await;
        let page = store.find_all(&PageRequest::default()).await.unwrap();
        assert_eq!(titles(&page), vec!["Rust 100%", "JavaScript tips", "Learning Java"]);
        assert_eq!(page.total_elements, 3);
        assert_eq!(page.total_pages, 1);
    }

    #[tokio::test]
    async fn test_find_all_paginates() {
        let store = seeded().await;
        let second = store.find_all(&PageRequest::of(1, 2).unwrap()).await.unwrap();
        assert_eq!(titles(&second), vec!["Learning Java"]);
        assert_eq!(second.total_elements, 3);
        assert_eq!(second.total_pages, 2);
    }

    #[tokio::test]
    async fn test_title_contains_is_case_insensitive() {
        let store = seeded().await;
        let page = store.find_by_title_contains("JAVA", &PageRequest::default()).await.unwrap();
        assert_eq!(titles(&page), vec!["JavaScript tips", "Learning Java"]);
    }

    #[tokio::test]
    async fn test_like_wildcards_match_literally() {
        let store = seeded().await;
        let page = store.find_by_title_contains("100%", &PageRequest::default()).await.unwrap();
        assert_eq!(titles(&page), vec!["Rust 100%"]);

        let page = store.find_by_title_contains("%", &PageRequest::default()).await.unwrap();
        assert_eq!(page.total_elements, 1);

        let page = store.find_by_content_contains("d_p", &PageRequest::default()).await.unwrap();
        assert_eq!(titles(&page), vec!["Rust 100%"]);
    }

    #[tokio::test]
    async fn test_author_lookups() {
        let store = seeded().await;
        let page = store.find_by_author_id_contains("UN", &PageRequest::default()).await.unwrap();
        assert_eq!(page.total_elements, 2);

        let page = store.find_by_author_nickname_contains("uno", &PageRequest::default()).await.unwrap();
        assert_eq!(page.total_elements, 2);

        // dos has no nickname, so nickname search never matches it
        let page = store.find_by_author_nickname_contains("dos", &PageRequest::default()).await.unwrap();
        assert_eq!(page.total_elements, 0);
    }

    #[tokio::test]
    async fn test_hashtag_equals_is_exact() {
        let store = seeded().await;
        let page = store.find_by_hashtag_equals("#java", &PageRequest::default()).await.unwrap();
        assert_eq!(titles(&page), vec!["Rust 100%", "Learning Java"]);
        assert_eq!(page.items[0].hashtags, vec!["#java", "#rust"]);

        let page = store.find_by_hashtag_equals("java", &PageRequest::default()).await.unwrap();
        assert_eq!(page.total_elements, 0);
    }

    #[tokio::test]
    async fn test_distinct_hashtags_and_count() {
        let store = seeded().await;
        assert_eq!(
            store.list_distinct_hashtag_values().await.unwrap(),
            vec!["#java", "#javascript", "#rust"]
        );
        assert_eq!(store.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_update_and_delete_respect_owner() {
        let store = seeded().await;
        let update = ArticleUpdate {
            title: Some("Learning Kotlin".to_string()),
            content: None,
            hashtags: vec!["kotlin".to_string()],
        };
        assert!(!store.update_article(1, "dos", &update).await.unwrap());
        assert!(store.update_article(1, "uno", &update).await.unwrap());

        let record = store.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(record.title, "Learning Kotlin");
        assert_eq!(record.content, "first post");
        assert_eq!(record.hashtags, vec!["#kotlin"]);
        assert_eq!(
            store.find_by_title_contains("kotlin", &PageRequest::default()).await.unwrap().total_elements,
            1
        );

        assert_eq!(store.delete_article(3, "uno").await.unwrap(), 0);
        assert_eq!(store.delete_article(3, "dos").await.unwrap(), 1);
        assert!(store.find_by_id(3).await.unwrap().is_none());
        assert_eq!(
            store.list_distinct_hashtag_values().await.unwrap(),
            vec!["#javascript", "#kotlin"]
        );
    }

    fn comment(article_id: i64, user_id: &str, content: &str, parent: Option<i64>) -> NewComment {
        NewComment {
            article_id,
            user_id: user_id.to_string(),
            parent_comment_id: parent,
            content: content.to_string(),
        }
    }

    #[tokio::test]
    async fn test_comments_newest_first() {
        let store = seeded().await;
        let first = store.insert_comment_at(&comment(1, "dos", "first", None), at(10)).await.unwrap();
        store.insert_comment_at(&comment(1, "uno", "reply", Some(first)), at(12)).await.unwrap();
        store.insert_comment_at(&comment(1, "dos", "second", None), at(11)).await.unwrap();
        store.insert_comment_at(&comment(2, "dos", "elsewhere", None), at(13)).await.unwrap();

        let comments = store.find_comments_by_article_id(1).await.unwrap();
        let contents: Vec<&str> = comments.iter().map(|c| c.content.as_str()).collect();
        assert_eq!(contents, vec!["reply", "second", "first"]);
        assert_eq!(comments[0].parent_comment_id, Some(first));
        assert_eq!(comments[0].author.nickname.as_deref(), Some("Uno"));
        assert_eq!(comments[2].parent_comment_id, None);

        assert_eq!(store.find_comment_article_id(first).await.unwrap(), Some(1));
        assert_eq!(store.find_comment_article_id(999).await.unwrap(), None);
        assert!(store.find_comments_by_article_id(3).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_article_removes_comments() {
        let store = seeded().await;
        let id = store.insert_comment(&comment(3, "uno", "nice", None)).await.unwrap();
        assert_eq!(store.delete_article(3, "dos").await.unwrap(), 1);
        assert!(store.find_comments_by_article_id(3).await.unwrap().is_empty());
        assert_eq!(store.find_comment_article_id(id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_sort_by_title_ascending() {
        let store = seeded().await;
        let request = PageRequest::new(0, 10, vec![crate::search::types::SortOrder::asc(
            crate::search::types::SortField::Title,
        )])
        .unwrap();
        let page = store.find_all(&request).await.unwrap();
        assert_eq!(titles(&page), vec!["JavaScript tips", "Learning Java", "Rust 100%"]);
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("plain"), "plain");
    }
}
