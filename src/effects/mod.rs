pub(crate) mod bounce;
pub(crate) mod breath;
pub(crate) mod colorwipe;
pub(crate) mod comet;
pub(crate) mod pulse;
pub(crate) mod rainbow;
pub(crate) mod scanner;
pub(crate) mod spinner;
pub(crate) mod theaterchase;
pub(crate) mod twinkle;
pub(crate) mod wave;

use std::time::Duration;

use crate::framebuffer::{Pixel, BLACK};

/// A finite animation. The driver calls `step` with frame indices
/// `0..frame_count()` in order and flushes every returned frame.
pub trait LightingEffect {
    fn params(&self) -> &EffectParams;

    fn frame_count(&self) -> usize;

    /// Computes frame number `frame`. `current` is what the ring shows right now.
    fn step(&mut self, frame: usize, current: &[Pixel]) -> Vec<Pixel>;

    /// Whether the ring is blanked once the last frame was shown.
    fn clear_on_finish(&self) -> bool {
        true
    }

    fn delay(&self) -> Duration {
        self.params().delay
    }
}

/// Immutable per-run configuration. Each effect reads only the fields it
/// needs; `repeats` means iterations, cycles, rotations or laps depending on
/// the effect.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectParams {
    pub color: Pixel,
    pub delay: Duration,
    pub repeats: usize,
    pub steps: usize,
    pub tail: usize,
    pub width: usize,
    pub decay: f32,
}

impl Default for EffectParams {
    fn default() -> Self {
        EffectParams {
            color: Pixel::new(255, 255, 255),
            delay: Duration::from_millis(50),
            repeats: 1,
            steps: 50,
            tail: 4,
            width: 3,
            decay: 0.85,
        }
    }
}

impl EffectParams {
    pub fn with_color(mut self, color: Pixel) -> Self {
        self.color = color;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_repeats(mut self, repeats: usize) -> Self {
        self.repeats = repeats;
        self
    }

    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_tail(mut self, tail: usize) -> Self {
        self.tail = tail;
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_decay(mut self, decay: f32) -> Self {
        self.decay = decay;
        self
    }

    pub(crate) fn repeats(&self) -> usize {
        self.repeats.max(1)
    }

    pub(crate) fn steps(&self) -> usize {
        self.steps.max(1)
    }
}

pub(crate) fn ring_size(pixel_count: usize) -> usize {
    pixel_count.max(1)
}

pub(crate) fn dark_frame(pixel_count: usize) -> Vec<Pixel> {
    vec![BLACK; pixel_count]
}
