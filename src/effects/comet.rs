use crate::colormath::{decay_tail, scale};
use crate::effects::{dark_frame, ring_size, EffectParams, LightingEffect};
use crate::framebuffer::Pixel;

/// A bright head circling the ring with a linearly fading tail behind it.
pub struct Comet {
    params: EffectParams,
    pixel_count: usize,
    tail: usize,
}

impl Comet {
    pub fn new(pixel_count: usize, params: EffectParams) -> Comet {
        let pixel_count = ring_size(pixel_count);
        // A longer tail would wrap onto the head.
        let tail = params.tail.min(pixel_count - 1);
        Comet {
            params,
            pixel_count,
            tail,
        }
    }
}

impl LightingEffect for Comet {
    fn params(&self) -> &EffectParams {
        &self.params
    }

    fn frame_count(&self) -> usize {
        self.pixel_count * self.params.repeats()
    }

    fn step(&mut self, frame: usize, _: &[Pixel]) -> Vec<Pixel> {
        let n = self.pixel_count;
        let head = frame % n;
        let mut next = dark_frame(n);
        for distance in 0..=self.tail {
            let index = (head + n - distance) % n;
            next[index] = scale(self.params.color, decay_tail(distance, self.tail));
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colormath::luminance;
    use crate::effects::testing::{collect_frames, lit};

    #[test]
    fn tail_fades_behind_the_head() {
        let params = EffectParams::default()
            .with_color(Pixel::new(255, 255, 255))
            .with_tail(4)
            .with_repeats(2);
        let mut comet = Comet::new(12, params);
        let frames = collect_frames(&mut comet, 12);
        assert_eq!(frames.len(), 24);

        for (f, frame) in frames.iter().enumerate() {
            assert!(lit(frame).len() <= 5);
            let head = f % 12;
            let mut previous = u32::MAX;
            for distance in 0..5 {
                let pixel = frame[(head + 12 - distance) % 12];
                let brightness = luminance(&[pixel]);
                assert!(brightness < previous, "frame {} distance {}", f, distance);
                previous = brightness;
            }
        }
        assert_eq!(frames[0][0], Pixel::new(255, 255, 255));
        assert_eq!(frames[0][11], scale(Pixel::new(255, 255, 255), decay_tail(1, 4)));
        assert!((50..=51).contains(&frames[0][8].red));
        assert_eq!(frames[0][7], Pixel::new(0, 0, 0));
    }

    #[test]
    fn tail_longer_than_ring_does_not_wrap_onto_head() {
        let mut comet = Comet::new(3, EffectParams::default().with_tail(10));
        let frames = collect_frames(&mut comet, 3);
        for (f, frame) in frames.iter().enumerate() {
            assert_eq!(frame[f % 3], Pixel::new(255, 255, 255));
        }
    }
}
