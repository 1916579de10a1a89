//! Turns the transition state into an ordered stack of draw layers.
//!
//! Painter's order: each layer covers the ones before it wherever their
//! shapes overlap. While a wipe runs the stack is
//!
//! 1. the old screen, full window,
//! 2. a dimmed copy of the new screen in a circle 1.5x the reveal radius,
//! 3. the new screen in the reveal circle itself.
//!
//! Layer 2 gives the wipe a soft dark leading edge instead of a hard circle.

use image::Rgba;

use crate::clock::{self, Timestamp};
use crate::palette;
use crate::state::{TransitionState, VisualState};
use crate::types::{Shape, Size};

/// How much of the new color survives in the leading ring.
const RING_BRIGHTNESS: f64 = 0.8;
/// Leading ring radius relative to the crisp reveal radius.
const RING_SCALE: f32 = 1.5;

/// One fill plus the label painted inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawLayer<'a> {
    pub shape: Shape,
    pub fill: Rgba<u8>,
    /// Whose label/foreground is drawn, clipped to `shape`.
    pub visual: &'a VisualState,
}

/// Result of one render query.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition<'a> {
    pub layers: Vec<DrawLayer<'a>>,
    /// True while the wipe runs: the loop must repaint without waiting for input.
    pub needs_more_frames: bool,
}

/// Build the layers for `now` in a `viewport`-sized window.
pub fn layers_for(state: &TransitionState, now: Timestamp, viewport: Size) -> Composition<'_> {
    let t = state.progress(now);

    if t >= 1.0 {
        return Composition {
            layers: vec![DrawLayer {
                shape: Shape::FullRect,
                fill: state.current.background,
                visual: &state.current,
            }],
            needs_more_frames: false,
        };
    }

    let radius = viewport.max_side() * clock::ease(t);
    let center = state.origin;

    Composition {
        layers: vec![
            DrawLayer {
                shape: Shape::FullRect,
                fill: state.previous.background,
                visual: &state.previous,
            },
            DrawLayer {
                shape: Shape::Circle { center, radius: radius * RING_SCALE },
                fill: palette::darken(state.current.background, RING_BRIGHTNESS),
                visual: &state.current,
            },
            DrawLayer {
                shape: Shape::Circle { center, radius },
                fill: state.current.background,
                visual: &state.current,
            },
        ],
        needs_more_frames: true,
    }
}
