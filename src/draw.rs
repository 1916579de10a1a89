// Window + software drawing utilities.
// Visual effects provided here:
// 1) A resizable window that shows the framebuffer.
// 2) Solid fills (full window or a disc), alpha-blended over what is there.
// 3) A 5x7 bitmap font, scaled up, for the big centered number.

use crate::error::Error;
use crate::types::{FrameBuffer, Point, Shape, Size};
use image::Rgba;
use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};

/// Largest label pixel block; shrinks when the text would not fit.
const LABEL_SCALE: usize = 8;
const GLYPH_W: usize = 5;
const GLYPH_H: usize = 7;
const GLYPH_ADVANCE: usize = GLYPH_W + 1;

pub struct Drawer {
    window: Window,   // the on-screen window you see
    release: ReleaseEdge,
}

impl Drawer {
    /// Create a resizable window.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, size: Size, target_fps: usize) -> Result<Self, Error> {
        let options = WindowOptions { resize: true, ..WindowOptions::default() };
        let mut window = Window::new(title, size.width, size.height, options)
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(target_fps);
        Ok(Self { window, release: ReleaseEdge::default() })
    }

    /// Push the pixels for this frame to the screen (also pumps input).
    /// Visual: the window immediately displays the new image.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Pump input without repainting. Visual: the last frame stays on screen.
    pub fn idle(&mut self) {
        self.window.update();
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we'll exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Current inner size of the window; never zero in either direction.
    pub fn size(&self) -> Size {
        let (w, h) = self.window.get_size();
        Size::new(w.max(1), h.max(1))
    }

    /// Where the left button was let go since the last poll, if it was.
    /// Visual: this is the point the wipe grows from.
    pub fn poll_release(&mut self) -> Option<Point> {
        let down = self.window.get_mouse_down(MouseButton::Left);
        if !self.release.update(down) {
            return None;
        }
        release_point(self.window.get_mouse_pos(MouseMode::Clamp))
    }
}

/// Window-space point for a release, clamped to the top-left edge.
/// No position means the pointer left the window: the release is dropped.
fn release_point(pos: Option<(f32, f32)>) -> Option<Point> {
    let Some((x, y)) = pos else {
        log::trace!("release dropped, no pointer position");
        return None;
    };
    Some(Point::new(x.max(0.0), y.max(0.0)))
}

/// Turns a polled "button is down" flag into release events (down -> up).
#[derive(Debug, Default)]
pub struct ReleaseEdge {
    was_down: bool,
}

impl ReleaseEdge {
    pub fn update(&mut self, down: bool) -> bool {
        let released = self.was_down && !down;
        self.was_down = down;
        released
    }
}

/* ---------- Software drawing: blended fills, scaled bitmap font ---------- */

/// Pack an RGBA color into minifb's 0x00RRGGBB, blended over `dst` by alpha.
#[inline]
pub fn blend(dst: u32, color: Rgba<u8>) -> u32 {
    let Rgba([r, g, b, a]) = color;
    if a == 255 {
        return ((r as u32) << 16) | ((g as u32) << 8) | b as u32;
    }
    let alpha = a as f32 / 255.0;
    let mix = |src: u8, shift: u32| -> u32 {
        let old = ((dst >> shift) & 0xFF) as f32;
        (src as f32 * alpha + old * (1.0 - alpha)).round().clamp(0.0, 255.0) as u32
    };
    (mix(r, 16) << 16) | (mix(g, 8) << 8) | mix(b, 0)
}

/// Fill every pixel inside `shape` with `color`.
/// Visual: the whole window, or a disc, changes color.
pub fn fill_shape(fb: &mut FrameBuffer, shape: &Shape, color: Rgba<u8>) {
    let (xs, ys) = shape.bounds(fb.width, fb.height);
    for y in ys {
        let row = y * fb.width;
        for x in xs.clone() {
            if shape.contains(x, y) {
                let idx = row + x;
                fb.pixels[idx] = blend(fb.pixels[idx], color);
            }
        }
    }
}

/// Return a 5x7 glyph bitmap for the characters a label can hold.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    // Helper macro to define a glyph quickly
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch {
        // Digits 0..9
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        // Lowercase for the "click" placeholder
        'c' => g!(0b00000,0b00000,0b01110,0b10000,0b10000,0b10001,0b01110),
        'i' => g!(0b00100,0b00000,0b01100,0b00100,0b00100,0b00100,0b01110),
        'k' => g!(0b10000,0b10000,0b10010,0b10100,0b11000,0b10100,0b10010),
        'l' => g!(0b01100,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),

        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),

        _ => None,
    }
}

/// Block size for `text` so it fits inside `size` with a little margin.
pub fn label_scale(text: &str, size: Size) -> usize {
    let chars = text.chars().count().max(1);
    let fit_w = (size.width * 9 / 10) / (chars * GLYPH_ADVANCE - 1);
    let fit_h = (size.height * 9 / 10) / GLYPH_H;
    LABEL_SCALE.min(fit_w).min(fit_h).max(1)
}

/// Top-left corner and block size that center `text` in the frame.
pub fn label_origin(text: &str, size: Size) -> (i64, i64, usize) {
    let scale = label_scale(text, size);
    let chars = text.chars().count();
    let text_w = (chars * GLYPH_ADVANCE).saturating_sub(1) * scale;
    let text_h = GLYPH_H * scale;
    let x = (size.width as i64 - text_w as i64) / 2;
    let y = (size.height as i64 - text_h as i64) / 2;
    (x, y, scale)
}

/// Draw `text` centered in the frame, only where `clip` covers.
/// Visual: the big number sits in the middle; during a wipe each layer's
/// number is cut to that layer's circle.
pub fn draw_label(fb: &mut FrameBuffer, text: &str, color: Rgba<u8>, clip: &Shape) {
    let (mut x, y, scale) = label_origin(text, fb.size());
    for ch in text.chars() {
        if let Some(rows) = glyph5x7(ch) {
            for (ry, rowbits) in rows.iter().enumerate() {
                for rx in 0..GLYPH_W {
                    if (rowbits & (1 << (4 - rx))) != 0 {
                        let px = x + (rx * scale) as i64;
                        let py = y + (ry * scale) as i64;
                        fill_block(fb, px, py, scale, color, clip);
                    }
                }
            }
        }
        x += (GLYPH_ADVANCE * scale) as i64;
    }
}

/// One scaled font pixel: a `scale` x `scale` square, clipped to the frame and `clip`.
fn fill_block(fb: &mut FrameBuffer, x: i64, y: i64, scale: usize, color: Rgba<u8>, clip: &Shape) {
    for dy in 0..scale as i64 {
        for dx in 0..scale as i64 {
            let (px, py) = (x + dx, y + dy);
            if px < 0 || py < 0 {
                continue;
            }
            let (px, py) = (px as usize, py as usize);
            if px >= fb.width || py >= fb.height || !clip.contains(px, py) {
                continue;
            }
            let idx = py * fb.width + px;
            fb.pixels[idx] = blend(fb.pixels[idx], color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_fires_once_on_falling_edge() {
        let mut edge = ReleaseEdge::default();
        assert!(!edge.update(false));
        assert!(!edge.update(true));
        assert!(!edge.update(true));
        assert!(edge.update(false));
        assert!(!edge.update(false));
    }

    #[test]
    fn release_without_position_is_dropped() {
        assert_eq!(release_point(None), None);
    }

    #[test]
    fn release_position_is_clamped() {
        assert_eq!(release_point(Some((12.0, 7.5))), Some(Point::new(12.0, 7.5)));
        assert_eq!(release_point(Some((-3.0, 4.0))), Some(Point::new(0.0, 4.0)));
    }

    #[test]
    fn opaque_blend_replaces() {
        assert_eq!(blend(0x00123456, Rgba([255, 0, 128, 255])), 0x00FF0080);
    }

    #[test]
    fn half_alpha_blend_mixes() {
        // 127/255 of white over black
        let px = blend(0x00000000, Rgba([255, 255, 255, 127]));
        assert_eq!(px, 0x007F7F7F);
        assert_eq!(blend(0x00ABCDEF, Rgba([0, 0, 0, 0])), 0x00ABCDEF);
    }

    #[test]
    fn fill_circle_leaves_outside_untouched() {
        let mut fb = FrameBuffer::new(Size::new(20, 20));
        let disc = Shape::Circle { center: Point::new(10.0, 10.0), radius: 4.0 };
        fill_shape(&mut fb, &disc, Rgba([255, 0, 0, 255]));
        assert_eq!(fb.pixels[10 * 20 + 10], 0x00FF0000);
        assert_eq!(fb.pixels[0], 0);
        assert_eq!(fb.pixels[19 * 20 + 19], 0);
    }

    #[test]
    fn fill_full_rect_covers_everything() {
        let mut fb = FrameBuffer::new(Size::new(5, 3));
        fill_shape(&mut fb, &Shape::FullRect, Rgba([0, 255, 0, 255]));
        assert!(fb.pixels.iter().all(|&p| p == 0x0000FF00));
    }

    #[test]
    fn label_is_centered() {
        let size = Size::new(300, 200);
        let (x, y, scale) = label_origin("42", size);
        assert_eq!(scale, LABEL_SCALE);
        let w = (2 * GLYPH_ADVANCE - 1) * scale;
        assert_eq!(x, (300 - w as i64) / 2);
        assert_eq!(y, (200 - (GLYPH_H * scale) as i64) / 2);
    }

    #[test]
    fn long_label_shrinks_to_fit() {
        let size = Size::new(60, 200);
        let scale = label_scale("click", size);
        assert!(scale < LABEL_SCALE);
        assert!((5 * GLYPH_ADVANCE - 1) * scale <= 60);
        assert_eq!(label_scale("100", Size::new(1, 1)), 1);
    }

    #[test]
    fn label_respects_clip() {
        let mut fb = FrameBuffer::new(Size::new(300, 200));
        let nowhere = Shape::Circle { center: Point::new(-100.0, -100.0), radius: 1.0 };
        draw_label(&mut fb, "88", Rgba([255, 255, 255, 255]), &nowhere);
        assert!(fb.pixels.iter().all(|&p| p == 0));

        draw_label(&mut fb, "88", Rgba([255, 255, 255, 255]), &Shape::FullRect);
        assert!(fb.pixels.iter().any(|&p| p == 0x00FFFFFF));
    }

    #[test]
    fn every_label_character_has_a_glyph() {
        for ch in "0123456789click".chars() {
            assert!(glyph5x7(ch).is_some(), "{ch}");
        }
    }
}
