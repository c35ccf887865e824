// src/edgar/rate_limit.rs
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;

// SEC fair access policy: at most 10 requests per second
pub const EDGAR_MAX_CALLS: usize = 10;
pub const EDGAR_PERIOD: Duration = Duration::from_secs(1);

/// Sliding-window limiter. `acquire` waits until a slot is free instead of failing.
#[derive(Debug)]
pub struct RateLimiter {
    max_calls: usize,
    period: Duration,
    calls: Mutex<VecDeque<Instant>>,
}

impl RateLimiter {
    pub fn new(max_calls: usize, period: Duration) -> Self {
        Self {
            max_calls: max_calls.max(1),
            period,
            calls: Mutex::new(VecDeque::with_capacity(max_calls)),
        }
    }

    /// Limiter configured for the EDGAR policy.
    pub fn edgar() -> Self {
        Self::new(EDGAR_MAX_CALLS, EDGAR_PERIOD)
    }

    /// Records a call, sleeping first if the window is already full.
    pub async fn acquire(&self) {
        loop {
            let wake_at = {
                let now = Instant::now();
                let mut calls = self.calls.lock().unwrap_or_else(|e| e.into_inner());
                while calls
                    .front()
                    .is_some_and(|oldest| now.duration_since(*oldest) >= self.period)
                {
                    calls.pop_front();
                }
                if calls.len() < self.max_calls {
                    calls.push_back(now);
                    return;
                }
                // Full: the oldest call leaves the window first
                match calls.front() {
                    Some(oldest) => *oldest + self.period,
                    None => continue,
                }
            };
            tracing::debug!(
                "Rate limit of {} calls per {:?} reached, waiting {:?}",
                self.max_calls,
                self.period,
                wake_at.saturating_duration_since(Instant::now())
            );
            tokio::time::sleep_until(wake_at).await;
        }
    }
}
