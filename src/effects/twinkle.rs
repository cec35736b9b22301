use palette::named;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::colormath::scale;
use crate::effects::{dark_frame, ring_size, EffectParams, LightingEffect};
use crate::framebuffer::Pixel;

const TWINKLE_COLORS: [Pixel; 6] = [
    named::WHITE,
    named::GOLD,
    named::DEEPSKYBLUE,
    named::HOTPINK,
    named::LIGHTCYAN,
    Pixel::new(255, 147, 41),
];

/// Random sparkles: every frame one random pixel flares up in a random
/// palette color, then the whole ring fades by `params.decay`.
/// Runs for `params.steps` frames.
pub struct Twinkle {
    params: EffectParams,
    pixel_count: usize,
    rng: StdRng,
    frame: Vec<Pixel>,
}

impl Twinkle {
    pub fn new(pixel_count: usize, params: EffectParams, seed: Option<u64>) -> Twinkle {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Twinkle::with_rng(pixel_count, params, rng)
    }

    pub fn with_rng(pixel_count: usize, params: EffectParams, rng: StdRng) -> Twinkle {
        let pixel_count = ring_size(pixel_count);
        Twinkle {
            params,
            pixel_count,
            rng,
            frame: dark_frame(pixel_count),
        }
    }

    fn sparkle(&mut self) {
        let index = self.rng.gen_range(0..self.pixel_count);
        let color = TWINKLE_COLORS[self.rng.gen_range(0..TWINKLE_COLORS.len())];
        self.frame[index] = color;
    }

    fn fade(&mut self) {
        let decay = self.params.decay;
        for pixel in &mut self.frame {
            *pixel = scale(*pixel, decay);
        }
    }
}

impl LightingEffect for Twinkle {
    fn params(&self) -> &EffectParams {
        &self.params
    }

    fn frame_count(&self) -> usize {
        self.params.steps()
    }

    fn step(&mut self, _: usize, _: &[Pixel]) -> Vec<Pixel> {
        self.sparkle();
        self.fade();
        self.frame.clone()
    }
}
