use governor::{
    Quota, RateLimiter as GovernorRateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use std::{future::Future, time::Duration};

/// Decides how long the enricher waits between two consecutive requests.
///
/// `pause` is awaited after every fetch except the last one in a batch.
pub trait PacingPolicy {
    fn pause(&self) -> impl Future<Output = ()>;
}

/// Sleeps for the same fixed delay every time.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl PacingPolicy for FixedDelay {
    async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

type DirectGovernorRateLimiter = GovernorRateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Token bucket with a burst of one: no two pauses are released closer than `period`.
///
/// Unlike [`FixedDelay`] the time spent fetching counts towards the wait.
pub struct MinInterval {
    limiter: DirectGovernorRateLimiter,
}

impl MinInterval {
    pub fn new(period: Duration) -> anyhow::Result<Self> {
        let quota = Quota::with_period(period)
            .ok_or_else(|| anyhow::anyhow!("pacing period must be greater than zero"))?;
        let limiter = GovernorRateLimiter::direct(quota);
        // The request before the first pause already used up the only cell.
        let _ = limiter.check();
        Ok(Self { limiter })
    }
}

impl PacingPolicy for MinInterval {
    async fn pause(&self) {
        self.limiter.until_ready().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_fixed_delay_sleeps() {
        let pacer = FixedDelay::new(Duration::from_millis(30));
        let start = Instant::now();
        pacer.pause().await;
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[tokio::test]
    async fn test_zero_fixed_delay_returns_immediately() {
        let pacer = FixedDelay::new(Duration::ZERO);
        let start = Instant::now();
        pacer.pause().await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_min_interval_spaces_pauses() {
        let pacer = MinInterval::new(Duration::from_millis(50)).unwrap();
        let start = Instant::now();
        pacer.pause().await;
        pacer.pause().await;
        // Two cells at one per 50ms, with the initial one already spent.
        assert!(start.elapsed() >= Duration::from_millis(90));
    }

    #[test]
    fn test_min_interval_rejects_zero_period() {
        assert!(MinInterval::new(Duration::ZERO).is_err());
    }
}
