use crate::colormath::{ping_pong, ping_pong_period};
use crate::effects::{dark_frame, ring_size, EffectParams, LightingEffect};
use crate::framebuffer::Pixel;

/// A solid block of `params.width` pixels sliding back and forth.
pub struct Bounce {
    params: EffectParams,
    pixel_count: usize,
    width: usize,
}

impl Bounce {
    pub fn new(pixel_count: usize, params: EffectParams) -> Bounce {
        let pixel_count = ring_size(pixel_count);
        let width = params.width.clamp(1, pixel_count);
        Bounce {
            params,
            pixel_count,
            width,
        }
    }

    fn start_positions(&self) -> usize {
        self.pixel_count - self.width + 1
    }
}

impl LightingEffect for Bounce {
    fn params(&self) -> &EffectParams {
        &self.params
    }

    fn frame_count(&self) -> usize {
        self.params.repeats() * ping_pong_period(self.start_positions())
    }

    fn step(&mut self, frame: usize, _: &[Pixel]) -> Vec<Pixel> {
        let start = ping_pong(frame, self.start_positions());
        let mut next = dark_frame(self.pixel_count);
        next[start..start + self.width].fill(self.params.color);
        next
    }
}
