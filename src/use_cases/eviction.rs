// Periodic eviction of records past their retention window.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::domain::ports::{Clock, LocationStore};

/// Timing for the eviction sweeper.
#[derive(Debug, Clone, Copy)]
pub struct EvictionSettings {
    /// How often the sweep runs. The first sweep fires one interval after start.
    pub interval: Duration,
    /// Maximum record age before it is evicted.
    pub ttl: Duration,
}

/// Spawns the sweeper task.
///
/// The task keeps sweeping until `cancel` fires; a sweep that removes nothing
/// is not an error and never stops the loop.
pub fn spawn_eviction_sweeper<S, C>(
    store: Arc<S>,
    clock: C,
    settings: EvictionSettings,
    cancel: CancellationToken,
) -> JoinHandle<()>
where
    S: LocationStore + ?Sized + 'static,
    C: Clock + 'static,
{
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval_at(Instant::now() + settings.interval, settings.interval);
        // A stalled runtime should not trigger a burst of back-to-back sweeps.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    debug!("eviction sweeper stopped");
                    break;
                }
                _ = ticker.tick() => {
                    let removed = store.evict_expired(clock.now(), settings.ttl).await;
                    if removed > 0 {
                        info!(removed, "evicted expired location records");
                    } else {
                        debug!("eviction sweep found nothing to remove");
                    }
                }
            }
        }
    })
}
