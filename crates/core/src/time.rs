use std::time::{Duration, Instant};

/// Radians of animation phase per second of elapsed time.
pub const PHASE_RATE: f32 = 1.2;

/// Frame period of the render loop (about 60 Hz).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Elapsed-time source for the frame loop, fixed in tests.
#[derive(Debug, Clone, Copy)]
pub enum AnimationClock {
    Running { started: Instant },
    Fixed { elapsed: Duration },
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::start()
    }
}

impl AnimationClock {
    /// Returns a clock counting real time from now.
    #[must_use]
    pub fn start() -> Self {
        Self::Running {
            started: Instant::now(),
        }
    }

    /// Returns a clock frozen at `elapsed`.
    #[must_use]
    pub fn fixed(elapsed: Duration) -> Self {
        Self::Fixed { elapsed }
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        match self {
            AnimationClock::Running { started } => started.elapsed(),
            AnimationClock::Fixed { elapsed } => *elapsed,
        }
    }

    /// If this is a fixed clock, advance it by the given duration.
    ///
    /// Has no effect on a running clock.
    pub fn advance(&mut self, delta: Duration) {
        if let AnimationClock::Fixed { elapsed } = self {
            *elapsed += delta;
        }
    }

    /// Animation phase in radians.
    #[must_use]
    pub fn phase(&self) -> f32 {
        phase_at(self.elapsed())
    }
}

/// Phase reached after `elapsed` of animation.
#[must_use]
pub fn phase_at(elapsed: Duration) -> f32 {
    elapsed.as_secs_f32() * PHASE_RATE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_advances() {
        let mut clock = AnimationClock::fixed(Duration::ZERO);
        clock.advance(Duration::from_secs(2));
        assert_eq!(clock.elapsed(), Duration::from_secs(2));
        assert!((clock.phase() - 2.4).abs() < 1e-6);
    }

    #[test]
    fn running_clock_ignores_advance() {
        let mut clock = AnimationClock::start();
        clock.advance(Duration::from_secs(3600));
        assert!(clock.elapsed() < Duration::from_secs(3600));
    }
}
