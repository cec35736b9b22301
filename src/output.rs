use crate::colormath::{luminance, scale};
use crate::error::RingResult;
use crate::framebuffer::Pixel;

/// Something that can show a frame: the LED hardware, a terminal preview, a log.
///
/// `flush` blocks until the frame is out. An error is fatal; a half-sent
/// frame is never retried.
pub trait LightOutput {
    fn flush(&mut self, frame: &[Pixel], brightness: f32) -> RingResult<()>;

    /// Called once the controller is done writing frames for the current
    /// command, e.g. to end a status line.
    fn settle(&mut self) -> RingResult<()> {
        Ok(())
    }
}

/// Global brightness as the device applies it.
pub fn apply_brightness(frame: &[Pixel], brightness: f32) -> Vec<Pixel> {
    frame.iter().map(|p| scale(*p, brightness)).collect()
}

/// Headless output that only reports frames through the logger.
pub struct LogOutput {
    frames: u64,
}

impl LogOutput {
    pub fn new() -> LogOutput {
        LogOutput { frames: 0 }
    }
}

impl LightOutput for LogOutput {
    fn flush(&mut self, frame: &[Pixel], brightness: f32) -> RingResult<()> {
        self.frames += 1;
        if log::log_enabled!(log::Level::Trace) {
            let shown = apply_brightness(frame, brightness);
            let rgb: Vec<(u8, u8, u8)> = shown.iter().map(|p| p.into_components()).collect();
            log::trace!("frame {} (luminance {}): {:?}", self.frames, luminance(&shown), rgb);
        }
        Ok(())
    }
}
