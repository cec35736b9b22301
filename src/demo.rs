use std::time::Duration;

use crate::catalog::{Catalog, EffectName};
use crate::controller::{RingController, RunOutcome};
use crate::effects::EffectParams;
use crate::error::RingResult;
use crate::framebuffer::Pixel;
use crate::output::LightOutput;

struct DemoStep {
    label: &'static str,
    effect: EffectName,
    color: Option<Pixel>,
    tweak: fn(EffectParams) -> EffectParams,
    pause_after: Duration,
}

impl DemoStep {
    fn new(label: &'static str, effect: EffectName, color: Option<Pixel>) -> DemoStep {
        DemoStep {
            label,
            effect,
            color,
            tweak: |params| params,
            pause_after: Duration::ZERO,
        }
    }

    fn tweak(mut self, tweak: fn(EffectParams) -> EffectParams) -> DemoStep {
        self.tweak = tweak;
        self
    }

    fn pause_after(mut self, pause: Duration) -> DemoStep {
        self.pause_after = pause;
        self
    }
}

fn demo_steps() -> Vec<DemoStep> {
    let half_second = Duration::from_millis(500);
    vec![
        DemoStep::new("Color wipe - Red", EffectName::ColorWipe, Some(Pixel::new(255, 0, 0)))
            .pause_after(half_second),
        DemoStep::new("Color wipe - Green", EffectName::ColorWipe, Some(Pixel::new(0, 255, 0)))
            .pause_after(half_second),
        DemoStep::new("Color wipe - Blue", EffectName::ColorWipe, Some(Pixel::new(0, 0, 255)))
            .pause_after(half_second),
        DemoStep::new("Rainbow cycle", EffectName::RainbowCycle, None)
            .tweak(|p| p.with_delay(Duration::from_millis(10)).with_repeats(2)),
        DemoStep::new(
            "Theater chase - White",
            EffectName::TheaterChase,
            Some(Pixel::new(127, 127, 127)),
        ),
        DemoStep::new("Pulse - Purple", EffectName::Pulse, Some(Pixel::new(255, 0, 255)))
            .tweak(|p| p.with_repeats(2)),
        DemoStep::new("Spinner - Cyan", EffectName::Spinner, Some(Pixel::new(0, 255, 255)))
            .tweak(|p| p.with_repeats(3)),
        DemoStep::new("Comet - Warm", EffectName::Comet, None),
        DemoStep::new("Scanner - Red", EffectName::Scanner, None),
        DemoStep::new("Twinkle", EffectName::Twinkle, None),
        DemoStep::new("Bounce - Green", EffectName::Bounce, None),
        DemoStep::new("Breath - Cool", EffectName::Breath, None)
            .tweak(|p| p.with_repeats(2)),
        DemoStep::new("Wheel spin", EffectName::WheelSpin, None),
        DemoStep::new("Wave - Blue", EffectName::Wave, None),
    ]
}

/// Plays the scripted showcase of every effect. Stops at the first
/// cancellation; the ring is dark when this returns either way.
pub fn run_demo<O: LightOutput>(
    controller: &mut RingController<O>,
    catalog: &Catalog,
) -> RingResult<RunOutcome> {
    log::info!("Starting demo");
    let mut frames = 0;

    for step in demo_steps() {
        log::info!("{}", step.label);
        let params = (step.tweak)(catalog.params(step.effect, step.color));
        let mut effect = catalog.build_with(step.effect, params);

        match controller.play(step.effect.as_str(), effect.as_mut())? {
            RunOutcome::Completed { frames: played } => frames += played,
            RunOutcome::Cancelled { frames: played } => {
                log::info!("Demo interrupted");
                return Ok(RunOutcome::Cancelled {
                    frames: frames + played,
                });
            }
        }

        if controller.pause(step.pause_after.mul_f64(catalog.delay_scale())) {
            log::info!("Demo interrupted");
            controller.clear()?;
            return Ok(RunOutcome::Cancelled { frames });
        }
    }

    controller.clear()?;
    log::info!("Demo complete");
    Ok(RunOutcome::Completed { frames })
}
