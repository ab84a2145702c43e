//! Chat history persistence.
//!
//! `ChatStore` is the seam between the chat widget and whatever holds its
//! messages: PostgreSQL in production, an in-process list for tests and
//! single-node demos. Both return messages in key order (timestamp, then id
//! for Postgres; insertion order in memory).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StorefrontError;
use crate::models::{ChatMessage, Sender};

#[async_trait]
pub trait ChatStore: Send + Sync {
    /// Every stored message, oldest first.
    async fn list(&self) -> Result<Vec<ChatMessage>, StorefrontError>;

    async fn append(&self, message: &ChatMessage) -> Result<(), StorefrontError>;

    /// Delete the whole collection. Returns how many messages were removed.
    async fn clear(&self) -> Result<u64, StorefrontError>;

    /// Backend name for logging and health output.
    fn name(&self) -> &str;
}

// ============================================================================
// PostgreSQL
// ============================================================================

pub struct PgChatStore {
    pool: PgPool,
}

impl PgChatStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

}

type ChatRow = (Uuid, String, String, DateTime<Utc>);

fn row_to_message((id, text, sender, timestamp): ChatRow) -> Result<ChatMessage, StorefrontError> {
    let sender = sender.parse::<Sender>().map_err(StorefrontError::InvalidMessage)?;
    Ok(ChatMessage {
        id,
        text,
        sender,
        timestamp,
    })
}

#[async_trait]
impl ChatStore for PgChatStore {
    async fn list(&self) -> Result<Vec<ChatMessage>, StorefrontError> {
        let rows: Vec<ChatRow> = sqlx::query_as(
            "SELECT id, text, sender, timestamp FROM chat_messages ORDER BY timestamp ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(row_to_message).collect()
    }

    async fn append(&self, message: &ChatMessage) -> Result<(), StorefrontError> {
        sqlx::query("INSERT INTO chat_messages (id, text, sender, timestamp) VALUES ($1, $2, $3, $4)")
            .bind(message.id)
            .bind(&message.text)
            .bind(message.sender.as_str())
            .bind(message.timestamp)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn clear(&self) -> Result<u64, StorefrontError> {
        let result = sqlx::query("DELETE FROM chat_messages")
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    fn name(&self) -> &str {
        "postgres"
    }
}

// ============================================================================
// In-memory
// ============================================================================

#[derive(Default)]
pub struct MemoryChatStore {
    messages: RwLock<Vec<ChatMessage>>,
}

impl MemoryChatStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChatStore for MemoryChatStore {
    async fn list(&self) -> Result<Vec<ChatMessage>, StorefrontError> {
        Ok(self.messages.read().await.clone())
    }

    async fn append(&self, message: &ChatMessage) -> Result<(), StorefrontError> {
        self.messages.write().await.push(message.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<u64, StorefrontError> {
        let mut messages = self.messages.write().await;
        let removed = messages.len() as u64;
        messages.clear();
        Ok(removed)
    }

    fn name(&self) -> &str {
        "memory"
    }
}
