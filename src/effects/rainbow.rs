use crate::colormath::wheel;
use crate::effects::{ring_size, EffectParams, LightingEffect};
use crate::framebuffer::Pixel;

/// Spreads the whole color wheel around the ring and rotates it one wheel
/// position per frame. `params.repeats` full turns of the wheel are played.
///
/// `rainbow_cycle` leaves its last frame on the ring; `wheel_spin` runs the
/// same math and blanks the ring afterwards.
pub struct Rainbow {
    params: EffectParams,
    pixel_count: usize,
    clear_on_finish: bool,
}

impl Rainbow {
    pub fn cycle(pixel_count: usize, params: EffectParams) -> Rainbow {
        Rainbow {
            params,
            pixel_count: ring_size(pixel_count),
            clear_on_finish: false,
        }
    }

    pub fn spin(pixel_count: usize, params: EffectParams) -> Rainbow {
        Rainbow {
            clear_on_finish: true,
            ..Rainbow::cycle(pixel_count, params)
        }
    }
}

impl LightingEffect for Rainbow {
    fn params(&self) -> &EffectParams {
        &self.params
    }

    fn frame_count(&self) -> usize {
        256 * self.params.repeats()
    }

    fn step(&mut self, frame: usize, _: &[Pixel]) -> Vec<Pixel> {
        let n = self.pixel_count;
        (0..n)
            .map(|i| wheel(((i * 256 / n + frame) & 255) as i64))
            .collect()
    }

    fn clear_on_finish(&self) -> bool {
        self.clear_on_finish
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spreads_the_wheel_across_the_ring() {
        let mut rainbow = Rainbow::cycle(12, EffectParams::default());
        let first = rainbow.step(0, &[]);
        assert_eq!(first.len(), 12);
        assert_eq!(first[0], wheel(0));
        assert_eq!(first[6], wheel(128));

        let later = rainbow.step(5, &[]);
        assert_eq!(later[0], wheel(5));
        assert_eq!(later[11], wheel((11 * 256 / 12 + 5) & 255));
    }

    #[test]
    fn frame_count_and_cleanup_differ_by_variant() {
        let params = EffectParams::default().with_repeats(2);
        let cycle = Rainbow::cycle(12, params.clone());
        let spin = Rainbow::spin(12, params);

        assert_eq!(cycle.frame_count(), 512);
        assert_eq!(spin.frame_count(), 512);
        assert!(!cycle.clear_on_finish());
        assert!(spin.clear_on_finish());
    }

    #[test]
    fn single_pixel_ring() {
        let mut rainbow = Rainbow::spin(0, EffectParams::default());
        assert_eq!(rainbow.step(170, &[]), vec![wheel(170)]);
    }
}
