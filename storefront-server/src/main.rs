use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use storefront_core::config::ChatStoreKind;
use storefront_core::{ChatStore, MemoryChatStore, PgChatStore, StorefrontConfig};
use tokio::sync::broadcast;
use tracing_subscriber::{fmt, EnvFilter};

use storefront_server::http::{start_http_server, HttpState};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value = "storefront.toml")]
    config: String,

    /// Check the chat store and exit
    #[arg(long)]
    health: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Load config
    let config = match StorefrontConfig::load(&args.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config from {}: {}", args.config, e);
            std::process::exit(1);
        }
    };

    // Init logging. RUST_LOG wins over the configured level.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.service.log_level));
    fmt().with_env_filter(filter).init();

    let store: Arc<dyn ChatStore> = match config.chat.store {
        ChatStoreKind::Postgres => {
            let pool = match storefront_core::db::create_pool(&config.database).await {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("Failed to connect to database: {}", e);
                    std::process::exit(1);
                }
            };

            if args.health {
                match storefront_core::db::health_check(&pool).await {
                    Ok(v) => println!("✅ PostgreSQL connected: {}", v),
                    Err(e) => {
                        println!("❌ PostgreSQL connection failed: {}", e);
                        std::process::exit(1);
                    }
                }
            }

            if let Err(e) = storefront_core::db::ensure_schema(&pool).await {
                eprintln!("Failed to prepare chat schema: {}", e);
                std::process::exit(1);
            }

            Arc::new(PgChatStore::new(pool))
        }
        ChatStoreKind::Memory => Arc::new(MemoryChatStore::new()),
    };

    if args.health {
        match store.list().await {
            Ok(messages) => println!(
                "✅ Chat store '{}' reachable ({} messages)",
                store.name(),
                messages.len()
            ),
            Err(e) => {
                println!("❌ Chat store '{}' failed: {}", store.name(), e);
                std::process::exit(1);
            }
        }
        println!("✅ Storefront health check passed");
        return Ok(());
    }

    let (tx, _rx) = broadcast::channel(1);
    let shutdown_tx = tx.clone();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        tracing::info!("Shutdown signal received");
        let _ = shutdown_tx.send(());
    });

    // Periodic chat history wipe
    let reset_store = store.clone();
    let reset_period = Duration::from_secs(config.chat.reset_interval_seconds);
    let reset_shutdown = tx.subscribe();
    tokio::spawn(async move {
        storefront_server::subsystems::chat_reset::run_chat_reset_loop(
            reset_store,
            reset_period,
            reset_shutdown,
        )
        .await;
    });

    let state = Arc::new(HttpState::new(config, store)?);
    start_http_server(state, tx.subscribe()).await?;

    Ok(())
}
