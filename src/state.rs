//! The click state machine.
//!
//! Holds what was on screen before the last accepted click, what is on
//! screen now, and where/when that click happened. Whether a wipe is still
//! running is never stored: it is derived from the clock on every query.

use image::Rgba;
use rand::Rng;

use crate::clock::{self, Timestamp, TRANSITION_DURATION};
use crate::palette::{self, BLACK, WHITE};
use crate::types::Point;

/// Everything needed to paint one "screen": background, label color, label.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualState {
    pub background: Rgba<u8>,
    pub foreground: Rgba<u8>,
    pub label: String,
}

impl VisualState {
    /// What the window shows before the first click.
    pub fn placeholder() -> Self {
        Self {
            background: BLACK,
            foreground: WHITE,
            label: "click".to_string(),
        }
    }

    /// Colors from the palette, label is the number itself.
    pub fn for_value(value: u8) -> Self {
        let (background, foreground) = palette::colors_for(value);
        Self {
            background,
            foreground,
            label: value.to_string(),
        }
    }
}

/// The single mutable piece of the app, owned by the main loop.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionState {
    pub previous: VisualState,
    pub current: VisualState,
    /// When the running (or last) wipe started. `None` until the first click,
    /// which reads as a wipe that finished long ago.
    pub event_time: Option<Timestamp>,
    /// Where the running (or last) wipe grows from.
    pub origin: Point,
}

impl TransitionState {
    pub fn new() -> Self {
        Self {
            previous: VisualState::placeholder(),
            current: VisualState::placeholder(),
            event_time: None,
            origin: Point::default(),
        }
    }

    /// Linear wipe progress at `now`; 1.0 when nothing ever started.
    pub fn progress(&self, now: Timestamp) -> f32 {
        match self.event_time {
            Some(t0) => clock::progress(now, t0),
            None => 1.0,
        }
    }

    /// Handle a pointer release. Returns true when a new wipe started.
    ///
    /// Releases less than [`TRANSITION_DURATION`] after the last accepted one
    /// are dropped without touching the state; a release exactly one duration
    /// later is accepted.
    pub fn accept_click<R: Rng + ?Sized>(
        &mut self,
        position: Point,
        timestamp: Timestamp,
        rng: &mut R,
    ) -> bool {
        if let Some(t0) = self.event_time
            && timestamp.saturating_sub(t0) < TRANSITION_DURATION
        {
            log::trace!("click at {timestamp:?} dropped, wipe still running");
            return false;
        }

        let value: u8 = rng.gen_range(1..=100);
        let next = VisualState::for_value(value);
        log::debug!(
            "click at ({:.0}, {:.0}) -> {} {:?}",
            position.x,
            position.y,
            value,
            next.background.0
        );

        self.previous = std::mem::replace(&mut self.current, next);
        self.event_time = Some(timestamp);
        self.origin = position;
        true
    }
}

impl Default for TransitionState {
    fn default() -> Self {
        Self::new()
    }
}
