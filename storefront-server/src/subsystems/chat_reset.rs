//! Ephemeral chat policy: wipe the whole history on a fixed interval, then
//! re-read it so the next page load starts from the store's actual state.

use std::sync::Arc;
use std::time::Duration;

use storefront_core::{ChatStore, StorefrontError};
use tokio::sync::broadcast;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

#[derive(Debug, Clone, Default)]
pub struct ResetReport {
    pub cleared: u64,
    /// Messages seen on the re-read; non-zero when someone wrote in between.
    pub remaining: usize,
}

/// One clear-then-refetch cycle.
pub async fn reset_cycle(store: &dyn ChatStore) -> Result<ResetReport, StorefrontError> {
    let cleared = store.clear().await?;
    let remaining = store.list().await?.len();
    Ok(ResetReport { cleared, remaining })
}

/// Called from main.rs. A zero `period` disables the wipe.
pub async fn run_chat_reset_loop(
    store: Arc<dyn ChatStore>,
    period: Duration,
    mut shutdown: broadcast::Receiver<()>,
) {
    if period.is_zero() {
        tracing::info!("Chat reset loop disabled (interval is 0)");
        return;
    }

    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    tracing::info!(
        "Chat reset loop started (interval: {}s, store: {})",
        period.as_secs_f64(),
        store.name()
    );

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match reset_cycle(store.as_ref()).await {
                    Ok(report) => tracing::info!(
                        cleared = report.cleared,
                        remaining = report.remaining,
                        "Chat history reset"
                    ),
                    Err(e) => tracing::warn!("Chat history reset failed (non-fatal): {}", e),
                }
            }
            _ = shutdown.recv() => {
                tracing::info!("Chat reset loop shutting down");
                break;
            }
        }
    }
}
