//! Pure color helpers shared by every effect.
//!
//! All math happens in plain 0-255 RGB. Global brightness is applied later by
//! the output device, never here.

use crate::framebuffer::Pixel;

/// Maps a position on the color wheel to a color. The wheel runs
/// green -> red -> blue -> green and repeats every 256 positions.
pub fn wheel(position: i64) -> Pixel {
    let pos = position.rem_euclid(256) as u8;
    if pos < 85 {
        Pixel::new(pos * 3, 255 - pos * 3, 0)
    } else if pos < 170 {
        let pos = pos - 85;
        Pixel::new(255 - pos * 3, 0, pos * 3)
    } else {
        let pos = pos - 170;
        Pixel::new(0, pos * 3, 255 - pos * 3)
    }
}

/// Scales every channel by `factor`, truncating toward zero.
pub fn scale(pixel: Pixel, factor: f32) -> Pixel {
    let factor = if factor.is_nan() {
        0.0
    } else {
        factor.clamp(0.0, 1.0)
    };
    let channel = |v: u8| (v as f32 * factor).clamp(0.0, 255.0) as u8;
    Pixel::new(
        channel(pixel.red),
        channel(pixel.green),
        channel(pixel.blue),
    )
}

/// Linear falloff for a trailing glow: 1.0 at the head, reaching zero just
/// past the end of the tail.
pub fn decay_tail(distance: usize, tail_length: usize) -> f32 {
    if distance > tail_length {
        return 0.0;
    }
    (1.0 - distance as f32 / (tail_length + 1) as f32).max(0.0)
}

pub fn sine_amplitude(phase: f32) -> f32 {
    (0.5 * (1.0 + phase.sin())).clamp(0.0, 1.0)
}

/// Index at `step` of the back-and-forth sequence `0, 1, .., len-1, len-2, .., 1`.
pub fn ping_pong(step: usize, len: usize) -> usize {
    if len <= 1 {
        return 0;
    }
    let period = 2 * len - 2;
    let pos = step % period;
    if pos < len {
        pos
    } else {
        period - pos
    }
}

/// Length of one full traversal of [`ping_pong`] over `len` positions.
pub fn ping_pong_period(len: usize) -> usize {
    if len <= 1 {
        1
    } else {
        2 * len - 2
    }
}

/// Sum of all channels, used to compare overall frame brightness.
pub fn luminance(frame: &[Pixel]) -> u32 {
    frame
        .iter()
        .map(|p| p.red as u32 + p.green as u32 + p.blue as u32)
        .sum()
}
