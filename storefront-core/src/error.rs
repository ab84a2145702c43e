use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid chat message: {0}")]
    InvalidMessage(String),

    #[error("Other error: {0}")]
    Other(String),
}
