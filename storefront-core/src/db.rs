use crate::config::DatabaseConfig;
use sqlx::{postgres::PgPoolOptions, PgPool};

pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await
}

pub async fn health_check(pool: &PgPool) -> Result<String, sqlx::Error> {
    let row: (String,) = sqlx::query_as("SELECT version()").fetch_one(pool).await?;
    Ok(row.0)
}

/// Create the chat history table if it does not exist yet.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS chat_messages (
            id UUID PRIMARY KEY,
            text TEXT NOT NULL,
            sender TEXT NOT NULL CHECK (sender IN ('user', 'bot')),
            timestamp TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_chat_messages_timestamp ON chat_messages (timestamp, id)",
    )
    .execute(pool)
    .await?;

    Ok(())
}
