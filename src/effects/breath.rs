use std::f32::consts::{FRAC_PI_2, TAU};

use crate::colormath::{scale, sine_amplitude};
use crate::effects::{ring_size, EffectParams, LightingEffect};
use crate::framebuffer::Pixel;

/// Smooth sinusoidal breathing of the whole ring. Each of the
/// `params.repeats` breaths lasts `params.steps` frames and starts and ends dark.
pub struct Breath {
    params: EffectParams,
    pixel_count: usize,
}

impl Breath {
    pub fn new(pixel_count: usize, params: EffectParams) -> Breath {
        Breath {
            params,
            pixel_count: ring_size(pixel_count),
        }
    }

    fn level(&self, frame: usize) -> f32 {
        let steps = self.params.steps();
        let k = frame % steps;
        sine_amplitude(TAU * k as f32 / steps as f32 - FRAC_PI_2)
    }
}

impl LightingEffect for Breath {
    fn params(&self) -> &EffectParams {
        &self.params
    }

    fn frame_count(&self) -> usize {
        self.params.repeats() * self.params.steps()
    }

    fn step(&mut self, frame: usize, _: &[Pixel]) -> Vec<Pixel> {
        vec![scale(self.params.color, self.level(frame)); self.pixel_count]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::testing::collect_frames;

    #[test]
    fn each_breath_rises_and_falls() {
        let params = EffectParams::default()
            .with_color(Pixel::new(0, 0, 200))
            .with_steps(20)
            .with_repeats(3);
        let mut breath = Breath::new(12, params);
        let frames = collect_frames(&mut breath, 12);
        assert_eq!(frames.len(), 60);

        let blues: Vec<u8> = frames.iter().map(|f| f[0].blue).collect();
        assert_eq!(blues[0], 0);
        assert!(blues[10] >= 199);
        assert!(blues[..=10].windows(2).all(|w| w[0] <= w[1]));
        assert!(blues[10..20].windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(blues[20..40], blues[..20]);
    }
}
