//! Schema bootstrap
//!
//! Creates the `posts` table and its `created_at` index if they are missing.
//! Every statement is idempotent, so this runs on each startup.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};

const CREATE_POSTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS posts (
    id UUID PRIMARY KEY,
    title VARCHAR(255) NOT NULL,
    content TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL
)"#;

const CREATE_CREATED_AT_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_posts_created_at ON posts (created_at)";

pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    for statement in [CREATE_POSTS_TABLE, CREATE_CREATED_AT_INDEX] {
        db.execute_unprepared(statement).await?;
    }
    tracing::info!("Database schema ready");
    Ok(())
}
