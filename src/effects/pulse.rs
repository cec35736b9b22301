use crate::colormath::scale;
use crate::effects::{ring_size, EffectParams, LightingEffect};
use crate::framebuffer::Pixel;

/// Fades the whole ring linearly up to `params.color` over `params.steps`
/// frames and back down over as many, `params.repeats` times.
pub struct Pulse {
    params: EffectParams,
    pixel_count: usize,
}

impl Pulse {
    pub fn new(pixel_count: usize, params: EffectParams) -> Pulse {
        Pulse {
            params,
            pixel_count: ring_size(pixel_count),
        }
    }

    fn level(&self, frame: usize) -> f32 {
        let steps = self.params.steps();
        let k = frame % (2 * steps);
        let ramp = if k < steps { k } else { 2 * steps - k };
        ramp as f32 / steps as f32
    }
}

impl LightingEffect for Pulse {
    fn params(&self) -> &EffectParams {
        &self.params
    }

    fn frame_count(&self) -> usize {
        self.params.repeats() * 2 * self.params.steps()
    }

    fn step(&mut self, frame: usize, _: &[Pixel]) -> Vec<Pixel> {
        vec![scale(self.params.color, self.level(frame)); self.pixel_count]
    }
}
