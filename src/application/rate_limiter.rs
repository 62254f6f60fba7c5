/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/

//! Client-side request throttling
//!
//! Outgoing requests pass through a token bucket built with the `governor`
//! crate. The limiter only delays requests; it never drops or reorders them.

use crate::application::config::RateLimiterConfig;
use governor::{
    Quota, RateLimiter as GovernorRateLimiter,
    clock::QuantaClock,
    state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

/// Token bucket limiting the request rate of one client
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<GovernorRateLimiter<NotKeyed, InMemoryState, QuantaClock>>,
}

impl RateLimiter {
    /// Creates a limiter allowing `max_requests` per `period_seconds`, with bursts of `burst_size`
    ///
    /// Zero values fall back to one request per second and a burst of one.
    #[must_use]
    pub fn new(config: &RateLimiterConfig) -> Self {
        let burst_size = NonZeroU32::new(config.burst_size).unwrap_or(NonZeroU32::MIN);
        let quota = Quota::with_period(replenish_interval(config))
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MIN))
            .allow_burst(burst_size);

        Self {
            limiter: Arc::new(GovernorRateLimiter::direct(quota)),
        }
    }

    /// Waits until the next request may be sent
    pub async fn wait(&self) {
        self.limiter.until_ready().await;
    }

    /// Returns true, consuming a cell, if a request may be sent right now
    #[must_use]
    pub fn check(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

/// Time needed to replenish one request slot
fn replenish_interval(config: &RateLimiterConfig) -> Duration {
    let period = Duration::from_secs(config.period_seconds.max(1));
    period / config.max_requests.max(1)
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("limiter", &"GovernorRateLimiter")
            .finish()
    }
}
