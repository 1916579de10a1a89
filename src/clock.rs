// Time for the wipe. Progress is always recomputed from the wall clock,
// so a slow or skipped frame never slows the animation down.

use std::time::{Duration, Instant};

/// How long a wipe takes. Clicks are ignored while one is running.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(500);

/// Time since the window opened.
pub type Timestamp = Duration;

/// Converts `Instant`s into `Timestamp`s relative to startup.
pub struct Clock {
    start: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }

    pub fn now(&self) -> Timestamp {
        self.start.elapsed()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// Linear progress of the wipe started at `event_time`, clamped to [0,1].
/// A `now` earlier than `event_time` counts as zero elapsed.
pub fn progress(now: Timestamp, event_time: Timestamp) -> f32 {
    let elapsed = now.saturating_sub(event_time);
    (elapsed.as_secs_f32() / TRANSITION_DURATION.as_secs_f32()).clamp(0.0, 1.0)
}

/// Quintic ease-in. Visual: the circle barely moves at first, then rushes out.
pub fn ease(t: f32) -> f32 {
    t.powi(5)
}
