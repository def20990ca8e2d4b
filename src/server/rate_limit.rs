//! Token-bucket rate limiter
//!
//! One bucket is shared by every worker. It starts full, refills at a fixed
//! rate and never holds more than `burst` tokens.

use std::sync::{Mutex, PoisonError};
use std::time::Instant;

use crate::config::RateLimitConfig;

#[derive(Debug)]
struct Bucket {
    tokens: f64,
    refilled_at: Instant,
}

/// Shared request rate limiter
#[derive(Debug)]
pub struct RateLimiter {
    bucket: Mutex<Bucket>,
    per_second: f64,
    capacity: f64,
}

impl RateLimiter {
    /// Create a limiter with `burst` tokens refilled at `per_second`
    #[must_use]
    pub fn new(per_second: f64, burst: u32) -> Self {
        Self::starting_at(per_second, burst, Instant::now())
    }

    /// Create a limiter whose clock starts at `now`
    #[must_use]
    pub fn starting_at(per_second: f64, burst: u32, now: Instant) -> Self {
        let capacity = f64::from(burst);
        Self {
            bucket: Mutex::new(Bucket {
                tokens: capacity,
                refilled_at: now,
            }),
            per_second,
            capacity,
        }
    }

    /// Build a limiter from config, `None` when limiting is disabled
    #[must_use]
    pub fn from_config(config: &RateLimitConfig) -> Option<Self> {
        config
            .enabled
            .then(|| Self::new(config.requests_per_second, config.burst))
    }

    /// Take a token if one is available
    pub fn check(&self) -> bool {
        self.check_at(Instant::now())
    }

    /// Take a token if one is available at `now`
    pub fn check_at(&self, now: Instant) -> bool {
        let mut bucket = self.bucket.lock().unwrap_or_else(PoisonError::into_inner);

        let elapsed = now.saturating_duration_since(bucket.refilled_at).as_secs_f64();
        bucket.tokens = elapsed.mul_add(self.per_second, bucket.tokens).min(self.capacity);
        bucket.refilled_at = bucket.refilled_at.max(now);

        if bucket.tokens >= 1.0 {
            bucket.tokens -= 1.0;
            true
        } else {
            false
        }
    }
}
