//! Tests for the token-bucket rate limiter

use std::time::{Duration, Instant};

use receipt_processor::config::RateLimitConfig;
use receipt_processor::server::RateLimiter;

#[test]
fn test_burst_then_empty() {
    let start = Instant::now();
    let limiter = RateLimiter::starting_at(1.0, 3, start);

    assert!(limiter.check_at(start));
    assert!(limiter.check_at(start));
    assert!(limiter.check_at(start));
    assert!(!limiter.check_at(start));
}

#[test]
fn test_refills_over_time() {
    let start = Instant::now();
    let limiter = RateLimiter::starting_at(2.0, 1, start);

    assert!(limiter.check_at(start));
    assert!(!limiter.check_at(start + Duration::from_millis(100)));
    assert!(limiter.check_at(start + Duration::from_millis(600)));
}

#[test]
fn test_refill_is_capped_at_burst() {
    let start = Instant::now();
    let limiter = RateLimiter::starting_at(1.0, 2, start);
    let later = start + Duration::from_secs(3600);

    assert!(limiter.check_at(later));
    assert!(limiter.check_at(later));
    assert!(!limiter.check_at(later));
}

#[test]
fn test_from_config() {
    assert!(RateLimiter::from_config(&RateLimitConfig::default()).is_some());

    let disabled = RateLimitConfig {
        enabled: false,
        ..RateLimitConfig::default()
    };
    assert!(RateLimiter::from_config(&disabled).is_none());
}
