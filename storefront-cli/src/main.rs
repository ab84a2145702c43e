//! storefront-cli: operator tool for the storefront
//!
//! # Subcommands
//! - `sitemap [--out <path>] [--base-url <url>] [--date <YYYY-MM-DD>]` builds sitemap.xml offline
//! - `link [<slug>] [--phone <phone>] [--api]` prints a WhatsApp order link
//! - `chat <text>` sends one message to the running server's chatbot
//! - `status` shows server health

use std::path::Path;

use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use storefront_core::config::{ChatConfig, ServiceConfig, SitemapConfig};
use storefront_core::sitemap::{self, WriteOutcome};
use storefront_core::{data, whatsapp};

const DEFAULT_SERVER: &str = "http://127.0.0.1:8080";

// ============================================================================
// CLI Definition
// ============================================================================

#[derive(Debug, Parser)]
#[command(name = "storefront-cli", version, about = "Storefront operator CLI")]
struct Cli {
    /// Storefront HTTP server URL (overrides STOREFRONT_HTTP_URL env var)
    #[arg(long, env = "STOREFRONT_HTTP_URL", default_value = DEFAULT_SERVER)]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate sitemap.xml from the catalog. Skips the write when nothing changed.
    Sitemap {
        /// Output file
        #[arg(long, default_value_t = SitemapConfig::default().output_path)]
        out: String,

        /// Public origin prepended to every path
        #[arg(long, env = "STOREFRONT_BASE_URL", default_value_t = ServiceConfig::default().base_url)]
        base_url: String,

        /// lastmod date, defaults to today (UTC)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Print a WhatsApp link, for a product order when a slug is given
    Link {
        /// Product slug
        slug: Option<String>,

        #[arg(long, env = "STOREFRONT_WHATSAPP_PHONE", default_value_t = ChatConfig::default().whatsapp_phone)]
        phone: String,

        /// Use the api.whatsapp.com form, which opens WhatsApp Desktop
        #[arg(long)]
        api: bool,
    },

    /// Send a message to the chatbot on the running server
    Chat {
        text: String,
    },

    /// Show storefront server status
    Status,
}

// ============================================================================
// API Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ChatMessageDto {
    pub text: String,
    pub sender: String,
}

/// Response body of POST /api/chat/messages
#[derive(Debug, Deserialize)]
pub struct ChatSendResponse {
    pub messages: Vec<ChatMessageDto>,
    pub persisted: bool,
}

impl ChatSendResponse {
    pub fn bot_reply(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.sender == "bot")
            .map(|m| m.text.as_str())
    }
}

// ============================================================================
// Offline commands
// ============================================================================

/// Render the sitemap for `date` and write it to `out` unless identical.
pub fn generate_sitemap(out: &Path, base_url: &str, date: NaiveDate) -> anyhow::Result<WriteOutcome> {
    let xml = sitemap::render(base_url, &sitemap::default_pages(), date);
    Ok(sitemap::write_if_changed(out, &xml)?)
}

/// Order link for `slug`, or a plain greeting link without one.
pub fn whatsapp_link(phone: &str, slug: Option<&str>, api: bool) -> anyhow::Result<String> {
    let message = match slug {
        Some(slug) => {
            let item = data::find_product(slug)
                .ok_or_else(|| anyhow::anyhow!("unknown product '{}'", slug))?;
            whatsapp::order_message(item)
        }
        None => "Hello! I have a question.".to_string(),
    };

    Ok(if api {
        whatsapp::api_send_link(phone, &message)
    } else {
        whatsapp::wa_me_link(phone, &message)
    })
}

// ============================================================================
// HTTP Client Calls
// ============================================================================

fn do_chat(server: &str, text: &str) -> anyhow::Result<()> {
    let client = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()?;

    let url = format!("{}/api/chat/messages", server);
    let resp = match client.post(&url).json(&serde_json::json!({ "text": text })).send() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("storefront-cli: connection failed to {}: {}", url, e);
            std::process::exit(1);
        }
    };

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().unwrap_or_default();
        eprintln!("storefront-cli: server returned {}: {}", status, body);
        std::process::exit(1);
    }

    let reply: ChatSendResponse = resp.json()?;
    println!("{}", reply.bot_reply().unwrap_or("(no reply)"));
    if !reply.persisted {
        eprintln!("storefront-cli: warning: the server could not save this exchange");
    }

    Ok(())
}

/// Show the server status by calling GET /health.
fn do_status(server: &str) -> anyhow::Result<()> {
    let client = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()?;

    let url = format!("{}/health", server);
    match client.get(&url).send() {
        Ok(r) if r.status().is_success() => {
            let body: serde_json::Value = r.json().unwrap_or_default();
            println!("Storefront: {}", body["status"].as_str().unwrap_or("unknown"));
            println!("Version:    {}", body["version"].as_str().unwrap_or("?"));
            println!("Chat store: {}", body["store"].as_str().unwrap_or("?"));
            println!("Messages:   {}", body["messages"].as_u64().unwrap_or(0));
        }
        Ok(r) => {
            eprintln!("storefront-cli: server unhealthy (HTTP {})", r.status());
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("storefront-cli: cannot reach {}: {}", url, e);
            std::process::exit(1);
        }
    }

    Ok(())
}

// ============================================================================
// Main
// ============================================================================

fn main() {
    let cli = Cli::parse();
    let server = cli.server.trim_end_matches('/').to_string();

    let result = match cli.command {
        Commands::Sitemap { out, base_url, date } => {
            let date = date.unwrap_or_else(|| Utc::now().date_naive());
            generate_sitemap(Path::new(&out), &base_url, date).map(|outcome| match outcome {
                WriteOutcome::Written => println!("Wrote {}", out),
                WriteOutcome::Unchanged => println!("{} is up to date", out),
            })
        }
        Commands::Link { slug, phone, api } => {
            whatsapp_link(&phone, slug.as_deref(), api).map(|link| println!("{}", link))
        }
        Commands::Chat { text } => do_chat(&server, &text),
        Commands::Status => do_status(&server),
    };

    if let Err(e) = result {
        eprintln!("storefront-cli: {}", e);
        std::process::exit(1);
    }
}

// ============================================================================
// Tests
// ============================================================================
