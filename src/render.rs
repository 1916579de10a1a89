// Paints a composition into the framebuffer, back to front.
// Visual: each layer is a solid fill with its own number drawn on top,
// both cut to the layer's shape, so a growing circle shows the new number
// inside it and the old number outside.

use crate::compositor::Composition;
use crate::draw::{draw_label, fill_shape};
use crate::types::FrameBuffer;

pub fn render(fb: &mut FrameBuffer, composition: &Composition<'_>) {
    for layer in &composition.layers {
        fill_shape(fb, &layer.shape, layer.fill);
        draw_label(fb, &layer.visual.label, layer.visual.foreground, &layer.shape);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compositor::layers_for;
    use crate::draw::blend;
    use crate::state::TransitionState;
    use crate::types::{Point, Size};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::time::Duration;

    #[test]
    fn idle_frame_is_black_with_white_label() {
        let size = Size::new(300, 200);
        let mut fb = FrameBuffer::new(size);
        fb.pixels.fill(0x00123456);
        let state = TransitionState::new();
        render(&mut fb, &layers_for(&state, Duration::ZERO, size));

        assert_eq!(fb.pixels[0], 0);
        assert!(fb.pixels.contains(&0x00FFFFFF));
        assert!(fb.pixels.iter().all(|&p| p == 0 || p == 0x00FFFFFF));
    }

    #[test]
    fn mid_wipe_shows_old_corner_and_new_center() {
        let size = Size::new(300, 200);
        let mut rng = StdRng::seed_from_u64(4);
        let mut state = TransitionState::new();
        let origin = Point::new(150.0, 100.0);
        assert!(state.accept_click(origin, Duration::ZERO, &mut rng));

        let mut fb = FrameBuffer::new(size);
        let composition = layers_for(&state, Duration::from_millis(400), size);
        render(&mut fb, &composition);

        // Far corner is still the old (black) screen.
        assert_eq!(fb.pixels[0], blend(0, state.previous.background));
        // The crisp reveal has radius 300 * 0.8^5 ~ 98 around the center.
        // Sample above the label, where all three fills stack up.
        let inside = 40 * 300 + 150;
        let stacked = composition.layers.iter().fold(0, |px, l| blend(px, l.fill));
        assert_eq!(fb.pixels[inside], stacked);
    }

    #[test]
    fn settled_frame_is_flat_new_background_outside_label() {
        let size = Size::new(120, 80);
        let mut rng = StdRng::seed_from_u64(12);
        let mut state = TransitionState::new();
        assert!(state.accept_click(Point::new(1.0, 1.0), Duration::ZERO, &mut rng));

        let mut fb = FrameBuffer::new(size);
        render(&mut fb, &layers_for(&state, Duration::from_secs(1), size));
        let bg = blend(0, state.current.background);
        assert_eq!(fb.pixels[0], bg);
        assert_eq!(fb.pixels[fb.pixels.len() - 1], bg);
    }
}
