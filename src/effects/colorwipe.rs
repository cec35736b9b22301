use crate::effects::{ring_size, EffectParams, LightingEffect};
use crate::framebuffer::{Pixel, BLACK};

/// Paints `params.color` over the ring one pixel per frame, in index order.
/// Pixels not reached yet keep whatever they showed before.
pub struct ColorWipe {
    params: EffectParams,
    pixel_count: usize,
}

impl ColorWipe {
    pub fn new(pixel_count: usize, params: EffectParams) -> ColorWipe {
        ColorWipe {
            params,
            pixel_count: ring_size(pixel_count),
        }
    }
}

impl LightingEffect for ColorWipe {
    fn params(&self) -> &EffectParams {
        &self.params
    }

    fn frame_count(&self) -> usize {
        self.pixel_count
    }

    fn step(&mut self, frame: usize, current: &[Pixel]) -> Vec<Pixel> {
        let mut next = current.to_vec();
        next.resize(self.pixel_count, BLACK);
        next[frame % self.pixel_count] = self.params.color;
        next
    }

    fn clear_on_finish(&self) -> bool {
        false
    }
}
