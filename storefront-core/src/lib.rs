pub mod catalog;
pub mod chat_store;
pub mod chatbot;
pub mod config;
pub mod contact;
pub mod data;
pub mod db;
pub mod error;
pub mod images;
pub mod models;
pub mod sitemap;
pub mod whatsapp;

pub use catalog::{
    display_sequence, filter_by_category, AutoScroll, CarouselSettings, Direction, DisplaySequence,
    ScrollPolicy,
};
pub use chat_store::{ChatStore, MemoryChatStore, PgChatStore};
pub use chatbot::{BotReply, ChatBot};
pub use config::StorefrontConfig;
pub use contact::{ContactClient, ContactError};
pub use error::StorefrontError;
