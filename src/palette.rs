// Maps the picked number to the colors you see.
// Visual: low numbers are red, 50 is a muddy yellow, high numbers are green;
// the label is a dim inverted color so it stays readable on any background.

use image::Rgba;

pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

// Gradient anchors at 0, 50 and 100.
const LOW: Rgba<u8> = Rgba([255, 0, 0, 255]);
const MID: Rgba<u8> = Rgba([200, 200, 0, 255]);
const HIGH: Rgba<u8> = Rgba([0, 255, 0, 255]);

/// Blend one channel. The cast truncates toward zero, so 127.99 becomes 127.
#[inline]
fn lerp_channel(c: u8, d: u8, t: f64) -> u8 {
    (c as f64 * (1.0 - t) + d as f64 * t) as u8
}

/// Per-channel linear blend of all four channels (R, G, B, A).
pub fn lerp(c: Rgba<u8>, d: Rgba<u8>, t: f64) -> Rgba<u8> {
    let Rgba([cr, cg, cb, ca]) = c;
    let Rgba([dr, dg, db, da]) = d;
    Rgba([
        lerp_channel(cr, dr, t),
        lerp_channel(cg, dg, t),
        lerp_channel(cb, db, t),
        lerp_channel(ca, da, t),
    ])
}

/// Pull `color` toward black; `amount` is how much of the color survives.
/// Visual: `darken(c, 0.8)` is the dim ring running ahead of the wipe.
pub fn darken(color: Rgba<u8>, amount: f64) -> Rgba<u8> {
    lerp(BLACK, color, amount)
}

/// 255 minus every channel. Alpha is inverted from fully opaque, so a
/// background whose alpha truncated to 254 still yields a transparent inverse.
fn invert(color: Rgba<u8>) -> Rgba<u8> {
    let Rgba([r, g, b, _]) = color;
    Rgba([255 - r, 255 - g, 255 - b, 0])
}

/// Background and label colors for a number in 1..=100.
/// Values outside that range produce meaningless colors; callers never pass them.
pub fn colors_for(value: u8) -> (Rgba<u8>, Rgba<u8>) {
    let v = value as f64;
    let background = if value <= 50 {
        lerp(LOW, MID, v / 50.0)
    } else {
        lerp(MID, HIGH, (v - 50.0) / 50.0)
    };
    let foreground = lerp(invert(background), BLACK, 0.5);
    (background, foreground)
}
