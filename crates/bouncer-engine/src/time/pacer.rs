use std::time::Duration;

/// Fixed end-of-tick delay.
///
/// The delay is constant: it does not shrink when rendering was slow and there
/// is no catch-up. A zero delay makes `pause` a no-op.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TickPacer {
    delay: Duration,
}

impl TickPacer {
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Blocks the calling thread for the configured delay.
    pub fn pause(&self) {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn pause_waits_at_least_the_delay() {
        let pacer = TickPacer::new(Duration::from_millis(2));
        let start = Instant::now();
        pacer.pause();
        assert!(start.elapsed() >= Duration::from_millis(2));
    }

    #[test]
    fn zero_delay_returns_immediately() {
        let pacer = TickPacer::new(Duration::ZERO);
        let start = Instant::now();
        pacer.pause();
        assert!(start.elapsed() < Duration::from_millis(50));
    }
}
