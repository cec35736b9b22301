use std::f32::consts::TAU;

use crate::colormath::{scale, sine_amplitude};
use crate::effects::{ring_size, EffectParams, LightingEffect};
use crate::framebuffer::Pixel;

/// A sine wave of brightness travelling around the ring, one full wavelength
/// per ring and one ring length per `pixel_count` frames.
pub struct Wave {
    params: EffectParams,
    pixel_count: usize,
}

impl Wave {
    pub fn new(pixel_count: usize, params: EffectParams) -> Wave {
        Wave {
            params,
            pixel_count: ring_size(pixel_count),
        }
    }
}

impl LightingEffect for Wave {
    fn params(&self) -> &EffectParams {
        &self.params
    }

    fn frame_count(&self) -> usize {
        self.pixel_count * self.params.repeats()
    }

    fn step(&mut self, frame: usize, _: &[Pixel]) -> Vec<Pixel> {
        let n = self.pixel_count as f32;
        let phase = TAU * (frame % self.pixel_count) as f32 / n;
        (0..self.pixel_count)
            .map(|i| {
                let offset = TAU * i as f32 / n;
                scale(self.params.color, sine_amplitude(phase + offset))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wave_travels_one_pixel_per_frame() {
        let mut wave = Wave::new(12, EffectParams::default().with_color(Pixel::new(0, 240, 0)));
        assert_eq!(wave.frame_count(), 12);

        let first = wave.step(0, &[]);
        let second = wave.step(1, &[]);
        for i in 0..11 {
            assert!(first[i + 1].green.abs_diff(second[i].green) <= 1);
        }
    }

    #[test]
    fn crest_and_trough() {
        let mut wave = Wave::new(4, EffectParams::default().with_color(Pixel::new(100, 100, 100)));
        let frame = wave.step(0, &[]);
        assert_eq!(frame[0], Pixel::new(50, 50, 50));
        assert!(frame[1].red >= 99);
        assert!(frame[3].red <= 1);
    }
}
