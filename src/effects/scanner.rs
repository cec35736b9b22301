use crate::colormath::{decay_tail, ping_pong, ping_pong_period, scale};
use crate::effects::{ring_size, EffectParams, LightingEffect};
use crate::framebuffer::Pixel;

/// Larson scanner: the head sweeps from one end of the strip to the other and
/// back, with a glow that fades by distance on both sides.
pub struct Scanner {
    params: EffectParams,
    pixel_count: usize,
    tail: usize,
}

impl Scanner {
    pub fn new(pixel_count: usize, params: EffectParams) -> Scanner {
        let pixel_count = ring_size(pixel_count);
        let tail = params.tail.min(pixel_count - 1);
        Scanner {
            params,
            pixel_count,
            tail,
        }
    }

    pub fn head(&self, frame: usize) -> usize {
        ping_pong(frame, self.pixel_count)
    }
}

impl LightingEffect for Scanner {
    fn params(&self) -> &EffectParams {
        &self.params
    }

    fn frame_count(&self) -> usize {
        self.params.repeats() * ping_pong_period(self.pixel_count)
    }

    fn step(&mut self, frame: usize, _: &[Pixel]) -> Vec<Pixel> {
        let head = self.head(frame);
        (0..self.pixel_count)
            .map(|i| scale(self.params.color, decay_tail(i.abs_diff(head), self.tail)))
            .collect()
    }
}
