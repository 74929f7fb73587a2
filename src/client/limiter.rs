//! Request pacing shared by every call issued through one client.

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

/// Paces outgoing requests to at most `max_ops` per `interval`.
///
/// Grants are spaced evenly (`interval / max_ops` apart) with no slack
/// accumulation: an idle period does not allow a later burst to exceed the
/// configured rate. One limiter is shared by all request pipelines of a
/// client, so it must tolerate arbitrary concurrent callers.
#[derive(Debug)]
pub struct RateLimiter {
    per_op: Duration,
    next_slot: Mutex<Option<Instant>>,
}

impl RateLimiter {
    /// Create a limiter allowing `max_ops` operations per `interval`.
    ///
    /// `max_ops` of zero is clamped to one.
    pub fn new(max_ops: u32, interval: Duration) -> Self {
        let ops = max_ops.max(1);
        Self {
            per_op: interval / ops,
            next_slot: Mutex::new(None),
        }
    }

    /// Wait until the pacing window allows another request.
    ///
    /// Each caller reserves the next free slot under the lock and sleeps
    /// outside it, so concurrent callers queue up in reservation order
    /// without holding each other past the reservation itself.
    pub async fn acquire(&self) {
        let wake = {
            let mut next = self.next_slot.lock().await;
            let now = Instant::now();
            // A slot in the past grants immediately and never banks credit.
            let slot = match *next {
                Some(at) if at > now => at,
                _ => now,
            };
            *next = Some(slot + self.per_op);
            slot
        };
        tokio::time::sleep_until(wake).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_acquisitions_stay_within_window() {
        let limiter = Arc::new(RateLimiter::new(5, Duration::from_secs(1)));

        let mut handles = Vec::new();
        for _ in 0..50 {
            let limiter = limiter.clone();
            handles.push(tokio::spawn(async move {
                limiter.acquire().await;
                Instant::now()
            }));
        }

        let mut completions = Vec::new();
        for handle in handles {
            completions.push(handle.await.unwrap());
        }
        completions.sort();

        // No window of one second may contain more than 5 completions.
        for pair in completions.windows(6) {
            assert!(
                pair[5] - pair[0] >= Duration::from_secs(1),
                "six completions within a single window"
            );
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_period_grants_no_burst() {
        let limiter = RateLimiter::new(2, Duration::from_secs(1));

        limiter.acquire().await;
        tokio::time::sleep(Duration::from_secs(5)).await;

        // After idling, three grants still need two full spacing intervals.
        let start = Instant::now();
        limiter.acquire().await;
        limiter.acquire().await;
        limiter.acquire().await;
        assert!(start.elapsed() >= Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_caller_is_paced() {
        let limiter = RateLimiter::new(10, Duration::from_secs(1));

        let start = Instant::now();
        for _ in 0..11 {
            limiter.acquire().await;
        }
        assert!(start.elapsed() >= Duration::from_secs(1));
    }
}
