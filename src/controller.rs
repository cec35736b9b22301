use std::time::{Duration, Instant};

use crate::cancel::CancelToken;
use crate::effects::LightingEffect;
use crate::error::{RingError, RingResult};
use crate::framebuffer::{FrameBuffer, Pixel};
use crate::intervaltimer::IntervalTimer;
use crate::output::LightOutput;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Completed { frames: usize },
    Cancelled { frames: usize },
}

impl RunOutcome {
    pub fn is_cancelled(self) -> bool {
        matches!(self, RunOutcome::Cancelled { .. })
    }
}

/// Sole owner of the ring's frame buffer and of the output it is shown on.
/// Every effect run and every manual change goes through here.
pub struct RingController<O: LightOutput> {
    output: O,
    frame: FrameBuffer,
    brightness: f32,
    cancel: CancelToken,
}

impl<O: LightOutput> RingController<O> {
    pub fn new(output: O, pixel_count: usize, brightness: f32, cancel: CancelToken) -> Self {
        RingController {
            output,
            frame: FrameBuffer::new(pixel_count),
            brightness: brightness.clamp(0.0, 1.0),
            cancel,
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.frame.len()
    }

    pub fn pixels(&self) -> &[Pixel] {
        self.frame.pixels()
    }

    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    #[cfg(test)]
    pub(crate) fn output(&self) -> &O {
        &self.output
    }

    pub fn set_all(&mut self, color: Pixel) -> RingResult<()> {
        self.frame.fill(color);
        self.show_settled()
    }

    pub fn set_pixel(&mut self, index: i64, color: Pixel) -> RingResult<()> {
        self.frame.set(index, color)?;
        self.show_settled()
    }

    pub fn set_brightness(&mut self, level: f32) -> RingResult<()> {
        if !(0.0..=1.0).contains(&level) {
            return Err(RingError::InvalidBrightness(level.to_string()));
        }
        self.brightness = level;
        self.show_settled()
    }

    /// Blanks the ring and shows it.
    pub fn clear(&mut self) -> RingResult<()> {
        self.frame.clear();
        self.show_settled()
    }

    /// Plays `effect` to the end or until the cancel token is raised.
    ///
    /// The token is checked after every flushed frame, so a frame that was
    /// started is always shown. A cancelled run always leaves the ring dark.
    pub fn play(&mut self, name: &str, effect: &mut dyn LightingEffect) -> RingResult<RunOutcome> {
        let frame_count = effect.frame_count();
        log::info!("Playing {} ({} frames, {:?} per frame)", name, frame_count, effect.delay());

        let outcome = self.drive(effect, frame_count);
        let outcome = match outcome {
            Ok(outcome) => outcome,
            Err(err) => return Err(self.fail(err)),
        };

        match outcome {
            RunOutcome::Cancelled { frames } => {
                log::info!("{} cancelled after {} frames", name, frames);
                self.clear()?;
            }
            RunOutcome::Completed { .. } => {
                log::info!("{} finished", name);
                if effect.clear_on_finish() {
                    self.clear()?;
                } else if let Err(err) = self.output.settle() {
                    return Err(self.fail(err));
                }
            }
        }
        Ok(outcome)
    }

    fn drive(
        &mut self,
        effect: &mut dyn LightingEffect,
        frame_count: usize,
    ) -> RingResult<RunOutcome> {
        if self.cancel.is_cancelled() {
            return Ok(RunOutcome::Cancelled { frames: 0 });
        }

        let mut timer = IntervalTimer::new(effect.delay(), log::log_enabled!(log::Level::Trace));
        for frame in 0..frame_count {
            let next = effect.step(frame, self.frame.pixels());
            self.frame.swap(next);
            self.show()?;
            timer.sleep_until_next_tick();

            if self.cancel.is_cancelled() {
                return Ok(RunOutcome::Cancelled { frames: frame + 1 });
            }
        }
        Ok(RunOutcome::Completed { frames: frame_count })
    }

    /// Holds the current frame for `duration`, returning early with `true`
    /// if the cancel token is raised in the meantime.
    pub fn pause(&mut self, duration: Duration) -> bool {
        const POLL: Duration = Duration::from_millis(10);
        let deadline = Instant::now() + duration;
        loop {
            if self.cancel.is_cancelled() {
                return true;
            }
            let left = deadline.saturating_duration_since(Instant::now());
            if left.is_zero() {
                return false;
            }
            std::thread::sleep(left.min(POLL));
        }
    }

    fn show(&mut self) -> RingResult<()> {
        log::trace!("flush at brightness {}", self.brightness);
        self.output.flush(self.frame.pixels(), self.brightness)
    }

    fn show_settled(&mut self) -> RingResult<()> {
        match self.show().and_then(|_| self.output.settle()) {
            Ok(()) => Ok(()),
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Output failures are fatal. Blank the ring one last time if the device
    /// still accepts it and hand the error back.
    fn fail(&mut self, err: RingError) -> RingError {
        log::error!("{}", err);
        self.frame.clear();
        if let Err(cleanup_err) = self.output.flush(self.frame.pixels(), self.brightness) {
            log::error!("Could not blank the ring after failure: {}", cleanup_err);
        }
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, EffectName};
    use crate::framebuffer::BLACK;
    use crate::output::testing::RecordingOutput;

    fn controller(output: RecordingOutput, token: CancelToken) -> RingController<RecordingOutput> {
        RingController::new(output, 12, 0.3, token)
    }

    fn catalog() -> Catalog {
        Catalog::new(12, Some(5), 0.0)
    }

    #[test]
    fn color_wipe_keeps_its_last_frame() {
        let token = CancelToken::new();
        let mut ring = controller(RecordingOutput::new(), token);
        let red = Pixel::new(255, 0, 0);
        let mut wipe = catalog().build(EffectName::ColorWipe, Some(red));

        let outcome = ring.play("color_wipe", wipe.as_mut()).unwrap();

        assert_eq!(outcome, RunOutcome::Completed { frames: 12 });
        assert_eq!(ring.output().frames.len(), 12);
        assert_eq!(ring.output().frames[0][0], red);
        assert_eq!(ring.output().frames[0][1], BLACK);
        assert!(ring.pixels().iter().all(|p| *p == red));
        assert!(ring.output().brightness.iter().all(|b| *b == 0.3));
    }

    #[test]
    fn finished_effects_with_cleanup_end_dark() {
        let mut ring = controller(RecordingOutput::new(), CancelToken::new());
        let mut comet = catalog().build(EffectName::Comet, None);
        let frames = comet.frame_count();

        let outcome = ring.play("comet", comet.as_mut()).unwrap();

        assert_eq!(outcome, RunOutcome::Completed { frames });
        assert_eq!(ring.output().frames.len(), frames + 1);
        assert!(ring.output().last_frame().iter().all(|p| *p == BLACK));
    }

    #[test]
    fn cancellation_stops_early_and_clears() {
        for name in EffectName::ALL {
            let token = CancelToken::new();
            let output = RecordingOutput::cancelling_after(3, token.clone());
            let mut ring = controller(output, token);
            let mut effect = catalog().build(name, None);

            let outcome = ring.play(name.as_str(), effect.as_mut()).unwrap();

            assert_eq!(outcome, RunOutcome::Cancelled { frames: 3 }, "{}", name.as_str());
            assert!(ring.pixels().iter().all(|p| *p == BLACK));
            assert!(ring.output().last_frame().iter().all(|p| *p == BLACK));
            assert_eq!(ring.output().frames.len(), 4);
        }
    }

    #[test]
    fn cancelled_before_start_only_clears() {
        let token = CancelToken::new();
        token.cancel();
        let mut ring = controller(RecordingOutput::new(), token);
        ring.set_all(Pixel::new(9, 9, 9)).unwrap();
        let mut pulse = catalog().build(EffectName::Pulse, None);

        let outcome = ring.play("pulse", pulse.as_mut()).unwrap();

        assert!(outcome.is_cancelled());
        assert_eq!(outcome, RunOutcome::Cancelled { frames: 0 });
        assert!(ring.pixels().iter().all(|p| *p == BLACK));
    }

    #[test]
    fn device_failure_propagates_after_blanking() {
        let mut ring = controller(RecordingOutput::failing_after(5), CancelToken::new());
        let mut spinner = catalog().build(EffectName::Spinner, None);

        let result = ring.play("spinner", spinner.as_mut());

        assert!(matches!(result, Err(RingError::DeviceFailure(_))));
        assert_eq!(ring.output().frames.len(), 6);
        assert!(ring.output().last_frame().iter().all(|p| *p == BLACK));
    }

    #[test]
    fn failed_settle_after_a_kept_frame_still_blanks() {
        let mut ring = controller(RecordingOutput::failing_settle(), CancelToken::new());
        let mut wipe = catalog().build(EffectName::ColorWipe, None);

        let result = ring.play("color_wipe", wipe.as_mut());

        assert!(matches!(result, Err(RingError::DeviceFailure(_))));
        assert_eq!(ring.output().frames.len(), 13);
        assert!(ring.output().last_frame().iter().all(|p| *p == BLACK));
    }

    #[test]
    fn manual_writes() {
        let mut ring = controller(RecordingOutput::new(), CancelToken::new());
        let green = Pixel::new(0, 255, 0);

        ring.set_pixel(3, green).unwrap();
        assert_eq!(ring.pixels()[3], green);
        assert!(matches!(
            ring.set_pixel(12, green),
            Err(RingError::InvalidIndex { index: 12, max: 11 })
        ));
        assert_eq!(ring.output().frames.len(), 1);

        ring.set_brightness(0.8).unwrap();
        assert_eq!(ring.brightness(), 0.8);
        assert!(ring.set_brightness(1.5).is_err());
        assert!(ring.set_brightness(f32::NAN).is_err());
        assert_eq!(ring.brightness(), 0.8);

        ring.clear().unwrap();
        assert!(ring.pixels().iter().all(|p| *p == BLACK));
        assert_eq!(ring.output().settled, 3);
    }

    #[test]
    fn pause_returns_early_on_cancel() {
        let token = CancelToken::new();
        let mut ring = controller(RecordingOutput::new(), token.clone());
        assert!(!ring.pause(Duration::from_millis(5)));

        token.cancel();
        let start = Instant::now();
        assert!(ring.pause(Duration::from_secs(10)));
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
