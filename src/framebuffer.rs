use crate::error::{RingError, RingResult};

pub type Pixel = palette::Srgb<u8>;

pub const BLACK: Pixel = Pixel::new(0, 0, 0);

/// Builds a pixel from unchecked channel values, clamping each to 0..=255.
pub fn pixel_from_channels(red: i64, green: i64, blue: i64) -> Pixel {
    let clamp = |v: i64| v.clamp(0, 255) as u8;
    Pixel::new(clamp(red), clamp(green), clamp(blue))
}

pub struct FrameBuffer {
    pixels: Vec<Pixel>,
}

impl FrameBuffer {
    pub fn new(pixel_count: usize) -> FrameBuffer {
        FrameBuffer {
            pixels: vec![BLACK; pixel_count.max(1)],
        }
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn set(&mut self, index: i64, color: Pixel) -> RingResult<()> {
        let max = self.pixels.len() - 1;
        let slot = usize::try_from(index)
            .ok()
            .and_then(|i| self.pixels.get_mut(i));
        match slot {
            Some(pixel) => {
                *pixel = color;
                Ok(())
            }
            None => Err(RingError::InvalidIndex { index, max }),
        }
    }

    pub fn fill(&mut self, color: Pixel) {
        self.pixels.fill(color);
    }

    pub fn clear(&mut self) {
        self.fill(BLACK);
    }

    /// Replaces the whole frame at once. Frames of the wrong length are
    /// truncated or padded with black so the ring size never changes.
    pub fn swap(&mut self, mut frame: Vec<Pixel>) {
        frame.resize(self.pixels.len(), BLACK);
        self.pixels = frame;
    }
}
