//! Chat widget operations over a `ChatStore`.
//!
//! Store failures never reach the customer as errors: reads degrade to an
//! empty history and a failed write still returns the canned reply.

use storefront_core::models::ChatMessage;
use storefront_core::{ChatBot, ChatStore, StorefrontError};

/// Both sides of one exchange, in display order.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub user: ChatMessage,
    pub bot: ChatMessage,
    pub keyword: Option<&'static str>,
    pub persisted: bool,
}

/// Full history, oldest first. Empty when the store cannot be read.
pub async fn history(store: &dyn ChatStore) -> Vec<ChatMessage> {
    match store.list().await {
        Ok(messages) => messages,
        Err(e) => {
            tracing::warn!(store = store.name(), error = %e, "Failed to read chat history, showing empty list");
            Vec::new()
        }
    }
}

/// Record the customer's message, answer it, and record the answer.
pub async fn send_message(
    store: &dyn ChatStore,
    bot: &ChatBot,
    text: &str,
) -> Result<Exchange, StorefrontError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(StorefrontError::InvalidMessage("text must not be empty".to_string()));
    }

    let user = ChatMessage::user(text);
    let reply = bot.respond(text);
    let bot_message = ChatMessage::reply_to(&user, reply.text);

    let persisted = match persist(store, &user, &bot_message).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(store = store.name(), error = %e, "Failed to persist chat exchange");
            false
        }
    };

    tracing::debug!(keyword = ?reply.keyword, persisted, "Chat reply sent");

    Ok(Exchange {
        user,
        bot: bot_message,
        keyword: reply.keyword,
        persisted,
    })
}

async fn persist(
    store: &dyn ChatStore,
    user: &ChatMessage,
    bot: &ChatMessage,
) -> Result<(), StorefrontError> {
    store.append(user).await?;
    store.append(bot).await
}
