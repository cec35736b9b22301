use crate::effects::{dark_frame, ring_size, EffectParams, LightingEffect};
use crate::framebuffer::Pixel;

/// Marquee lights: every third pixel is lit, the lit set shifts by one each
/// phase. Every phase is shown lit for one frame and dark for the next.
pub struct TheaterChase {
    params: EffectParams,
    pixel_count: usize,
}

impl TheaterChase {
    pub fn new(pixel_count: usize, params: EffectParams) -> TheaterChase {
        TheaterChase {
            params,
            pixel_count: ring_size(pixel_count),
        }
    }
}

impl LightingEffect for TheaterChase {
    fn params(&self) -> &EffectParams {
        &self.params
    }

    fn frame_count(&self) -> usize {
        self.params.repeats() * 3 * 2
    }

    fn step(&mut self, frame: usize, _: &[Pixel]) -> Vec<Pixel> {
        let mut next = dark_frame(self.pixel_count);
        if frame % 2 == 0 {
            let phase = (frame / 2) % 3;
            for pixel in next.iter_mut().skip(phase).step_by(3) {
                *pixel = self.params.color;
            }
        }
        next
    }

    fn clear_on_finish(&self) -> bool {
        false
    }
}
