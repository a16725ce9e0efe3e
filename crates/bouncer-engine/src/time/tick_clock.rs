use std::time::{Duration, Instant};

/// Tick timing snapshot.
///
/// The simulation does not scale by `dt`; it is reported for diagnostics only.
#[derive(Debug, Copy, Clone)]
pub struct TickTime {
    /// Wall time since the previous tick, in seconds.
    pub dt: f32,

    /// Monotonic tick counter, starting at 0.
    pub index: u64,
}

/// Clock producing `TickTime` snapshots.
///
/// Reported delta time is clamped so a debugger pause or a minimized window
/// does not show up as a huge outlier in the logs.
#[derive(Debug, Clone)]
pub struct TickClock {
    last: Instant,
    index: u64,
    dt_max: Duration,
}

impl TickClock {
    pub fn new() -> Self {
        Self::with_max_dt(Duration::from_millis(250))
    }

    pub fn with_max_dt(dt_max: Duration) -> Self {
        Self {
            last: Instant::now(),
            index: 0,
            dt_max,
        }
    }

    /// Number of ticks produced so far.
    pub fn ticks(&self) -> u64 {
        self.index
    }

    /// Advances the clock and returns a new `TickTime`.
    pub fn tick(&mut self) -> TickTime {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last).min(self.dt_max);
        self.last = now;

        let t = TickTime {
            dt: dt.as_secs_f32(),
            index: self.index,
        };

        self.index = self.index.wrapping_add(1);
        t
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_sequential_from_zero() {
        let mut clock = TickClock::new();
        assert_eq!(clock.tick().index, 0);
        assert_eq!(clock.tick().index, 1);
        assert_eq!(clock.tick().index, 2);
        assert_eq!(clock.ticks(), 3);
    }

    #[test]
    fn dt_never_exceeds_clamp() {
        let mut clock = TickClock::with_max_dt(Duration::from_millis(1));
        std::thread::sleep(Duration::from_millis(5));
        assert!(clock.tick().dt <= 0.001 + f32::EPSILON);
    }
}
