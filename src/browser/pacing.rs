//! Human-interaction pacing
//!
//! Randomized sleeps used between browser actions to mimic human timing.
//! These have no effect on extraction correctness; they only reduce the
//! chance of the session being flagged as automated.

use crate::config::PacingConfig;
use rand::Rng;
use std::time::Duration;

/// Draws randomized delays from the configured bounds
#[derive(Debug, Clone)]
pub struct Pacing {
    config: PacingConfig,
}

impl Pacing {
    pub fn new(config: PacingConfig) -> Self {
        Self { config }
    }

    /// Short pause, used around card scrolling and pointer moves
    pub fn short_pause(&self) {
        sleep_between(self.config.short_pause_min_ms, self.config.short_pause_max_ms);
    }

    /// Medium pause, used after navigations and scrolls
    pub fn medium_pause(&self) {
        sleep_between(
            self.config.medium_pause_min_ms,
            self.config.medium_pause_max_ms,
        );
    }

    /// Delay between listing pages
    pub fn page_delay(&self) {
        sleep_between(self.config.page_delay_min_ms, self.config.page_delay_max_ms);
    }

    /// Number of attempts for flaky navigation steps
    pub fn retry_attempts(&self) -> u32 {
        self.config.retry_attempts
    }

    /// Fixed delay between retry attempts
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.config.retry_delay_ms)
    }
}

/// Sleeps for a duration drawn uniformly from `[min_ms, max_ms]`
fn sleep_between(min_ms: u64, max_ms: u64) {
    let ms = if min_ms >= max_ms {
        min_ms
    } else {
        rand::thread_rng().gen_range(min_ms..=max_ms)
    };
    std::thread::sleep(Duration::from_millis(ms));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_sleep_between_respects_lower_bound() {
        let start = Instant::now();
        sleep_between(10, 20);
        assert!(start.elapsed() >= Duration::from_millis(10));
    }

    #[test]
    fn test_sleep_between_equal_bounds() {
        let start = Instant::now();
        sleep_between(5, 5);
        assert!(start.elapsed() >= Duration::from_millis(5));
    }
}
