use crate::effects::{dark_frame, ring_size, EffectParams, LightingEffect};
use crate::framebuffer::Pixel;

/// A single lit pixel running around the ring.
pub struct Spinner {
    params: EffectParams,
    pixel_count: usize,
}

impl Spinner {
    pub fn new(pixel_count: usize, params: EffectParams) -> Spinner {
        Spinner {
            params,
            pixel_count: ring_size(pixel_count),
        }
    }
}

impl LightingEffect for Spinner {
    fn params(&self) -> &EffectParams {
        &self.params
    }

    fn frame_count(&self) -> usize {
        self.params.repeats() * self.pixel_count
    }

    fn step(&mut self, frame: usize, _: &[Pixel]) -> Vec<Pixel> {
        let mut next = dark_frame(self.pixel_count);
        next[frame % self.pixel_count] = self.params.color;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::testing::{collect_frames, lit};

    #[test]
    fn exactly_one_pixel_advances_each_frame() {
        let mut spinner = Spinner::new(12, EffectParams::default().with_repeats(3));
        let frames = collect_frames(&mut spinner, 12);

        assert_eq!(frames.len(), 36);
        for (f, frame) in frames.iter().enumerate() {
            assert_eq!(lit(frame), vec![f % 12]);
        }
    }
}
