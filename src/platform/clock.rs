//! Fixed-rate frame clock

use std::time::{Duration, Instant};

use super::FrameClock;

/// Sleeps so that consecutive frames start no sooner than `interval` apart
#[derive(Debug, Clone)]
pub struct FixedRateClock {
    interval: Duration,
    last_frame: Instant,
}

impl FixedRateClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_frame: Instant::now(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left before the next frame may start
    pub fn remaining(&self) -> Duration {
        self.interval.saturating_sub(self.last_frame.elapsed())
    }
}

impl FrameClock for FixedRateClock {
    fn wait_for_next_frame(&mut self) {
        let remaining = self.remaining();
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.last_frame = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_from_config() {
        let clock = FixedRateClock::new(crate::GameConfig::pong().frame_interval());
        assert!((clock.interval().as_secs_f64() - 1.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_waits_at_least_one_interval() {
        let start = Instant::now();
        let mut clock = FixedRateClock::new(Duration::from_millis(15));
        clock.wait_for_next_frame();
        clock.wait_for_next_frame();
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn test_slow_frame_does_not_sleep() {
        let mut clock = FixedRateClock::new(Duration::from_millis(5));
        std::thread::sleep(Duration::from_millis(10));
        assert!(clock.remaining().is_zero());
        clock.wait_for_next_frame();
    }
}
