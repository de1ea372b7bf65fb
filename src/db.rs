use sqlx::SqlitePool;

use crate::error::Result;

/// Run database migrations / 运行数据库迁移
///
/// `*_lower` columns are filled from Rust so case folding covers every
/// script, not just ASCII.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS user_accounts (
            user_id TEXT PRIMARY KEY,
            user_id_lower TEXT NOT NULL,
            email TEXT,
            nickname TEXT,
            nickname_lower TEXT,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS articles (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id TEXT NOT NULL,
            title TEXT NOT NULL,
            title_lower TEXT NOT NULL,
            content TEXT NOT NULL,
            content_lower TEXT NOT NULL,
            created_at TEXT NOT NULL,
            created_by TEXT NOT NULL,
            modified_at TEXT NOT NULL,
            modified_by TEXT NOT NULL,
            FOREIGN KEY (user_id) REFERENCES user_accounts(user_id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // One row per (article, hashtag); values keep their `#` prefix
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS article_hashtags (
            article_id INTEGER NOT NULL,
            hashtag TEXT NOT NULL,
            PRIMARY KEY (article_id, hashtag),
            FOREIGN KEY (article_id) REFERENCES articles(id) ON DELETE CASCADE
        ) WITHOUT ROWID
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS article_comments (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            article_id INTEGER NOT NULL,
            user_id TEXT NOT NULL,
            parent_comment_id INTEGER,
            content TEXT NOT NULL,
            created_at TEXT NOT NULL,
            created_by TEXT NOT NULL,
            modified_at TEXT NOT NULL,
            modified_by TEXT NOT NULL,
            FOREIGN KEY (article_id) REFERENCES articles(id) ON DELETE CASCADE,
            FOREIGN KEY (user_id) REFERENCES user_accounts(user_id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    let indexes = [
        "CREATE INDEX IF NOT EXISTS idx_articles_title ON articles(title_lower)",
        "CREATE INDEX IF NOT EXISTS idx_articles_created_at ON articles(created_at)",
        "CREATE INDEX IF NOT EXISTS idx_articles_created_by ON articles(created_by)",
        "CREATE INDEX IF NOT EXISTS idx_articles_user ON articles(user_id)",
        "CREATE INDEX IF NOT EXISTS idx_article_hashtags_tag ON article_hashtags(hashtag)",
        "CREATE INDEX IF NOT EXISTS idx_article_comments_article ON article_comments(article_id, created_at)",
    ];
    for sql in indexes {
        sqlx::query(sql).execute(pool).await?;
    }

    tracing::info!("Database migrations completed");
    Ok(())
}
