use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Single-slot admission gate enforcing a minimum spacing between callers.
///
/// The mutex is the slot: only its holder may be inside `acquire`, and tokio's
/// mutex hands it over in FIFO order, so concurrent callers queue. The guarded
/// value is the instant of the previous admission.
#[derive(Debug)]
pub struct RateLimiter {
    min_interval: Duration,
    last_admitted: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_admitted: Mutex::new(None),
        }
    }

    /// Waits until at least `min_interval` has passed since the previous
    /// admission, then records this one.
    pub async fn acquire(&self) {
        let mut last_admitted = self.last_admitted.lock().await;
        if let Some(previous) = *last_admitted {
            tokio::time::sleep_until(previous + self.min_interval).await;
        }
        *last_admitted = Some(Instant::now());
    }
}
