//! Named effects and their argument contract.
//!
//! Colored effects accept either no arguments (their default color) or an
//! `r g b` triple. `rainbow_cycle`, `wheel_spin` and `twinkle` take nothing.

use std::time::Duration;

use crate::effects::bounce::Bounce;
use crate::effects::breath::Breath;
use crate::effects::colorwipe::ColorWipe;
use crate::effects::comet::Comet;
use crate::effects::pulse::Pulse;
use crate::effects::rainbow::Rainbow;
use crate::effects::scanner::Scanner;
use crate::effects::spinner::Spinner;
use crate::effects::theaterchase::TheaterChase;
use crate::effects::twinkle::Twinkle;
use crate::effects::wave::Wave;
use crate::effects::{EffectParams, LightingEffect};
use crate::framebuffer::Pixel;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectName {
    ColorWipe,
    RainbowCycle,
    TheaterChase,
    Pulse,
    Spinner,
    Comet,
    Scanner,
    Twinkle,
    Bounce,
    Breath,
    WheelSpin,
    Wave,
}

impl EffectName {
    pub const ALL: [EffectName; 12] = [
        EffectName::ColorWipe,
        EffectName::RainbowCycle,
        EffectName::TheaterChase,
        EffectName::Pulse,
        EffectName::Spinner,
        EffectName::Comet,
        EffectName::Scanner,
        EffectName::Twinkle,
        EffectName::Bounce,
        EffectName::Breath,
        EffectName::WheelSpin,
        EffectName::Wave,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ColorWipe => "color_wipe",
            Self::RainbowCycle => "rainbow_cycle",
            Self::TheaterChase => "theater_chase",
            Self::Pulse => "pulse",
            Self::Spinner => "spinner",
            Self::Comet => "comet",
            Self::Scanner => "scanner",
            Self::Twinkle => "twinkle",
            Self::Bounce => "bounce",
            Self::Breath => "breath",
            Self::WheelSpin => "wheel_spin",
            Self::Wave => "wave",
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(s))
    }

    pub const fn takes_color(self) -> bool {
        !matches!(self, Self::RainbowCycle | Self::WheelSpin | Self::Twinkle)
    }

    pub const fn usage(self) -> &'static str {
        match self {
            Self::ColorWipe => "color_wipe [<r> <g> <b>]",
            Self::RainbowCycle => "rainbow_cycle",
            Self::TheaterChase => "theater_chase [<r> <g> <b>]",
            Self::Pulse => "pulse [<r> <g> <b>]",
            Self::Spinner => "spinner [<r> <g> <b>]",
            Self::Comet => "comet [<r> <g> <b>]",
            Self::Scanner => "scanner [<r> <g> <b>]",
            Self::Twinkle => "twinkle",
            Self::Bounce => "bounce [<r> <g> <b>]",
            Self::Breath => "breath [<r> <g> <b>]",
            Self::WheelSpin => "wheel_spin",
            Self::Wave => "wave [<r> <g> <b>]",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::ColorWipe => "wipe a color across the ring",
            Self::RainbowCycle => "rotate the color wheel around the ring",
            Self::TheaterChase => "marquee chase lights",
            Self::Pulse => "fade in and out",
            Self::Spinner => "single spinning LED",
            Self::Comet => "spinning head with a fading tail",
            Self::Scanner => "back and forth sweep",
            Self::Twinkle => "random fading sparkles",
            Self::Bounce => "bouncing block of LEDs",
            Self::Breath => "smooth sine breathing",
            Self::WheelSpin => "spin the color wheel, then clear",
            Self::Wave => "travelling sine wave",
        }
    }

    /// Parameters an effect runs with when only its name (and maybe a color)
    /// is given.
    pub fn default_params(self) -> EffectParams {
        let base = EffectParams::default();
        match self {
            Self::ColorWipe => base.with_color(Pixel::new(255, 0, 0)),
            Self::RainbowCycle => base,
            Self::TheaterChase => base
                .with_color(Pixel::new(127, 127, 127))
                .with_delay(Duration::from_millis(100))
                .with_repeats(10),
            Self::Pulse => base
                .with_color(Pixel::new(255, 0, 255))
                .with_delay(Duration::from_millis(20))
                .with_steps(50),
            Self::Spinner => base
                .with_color(Pixel::new(0, 255, 255))
                .with_delay(Duration::from_millis(100))
                .with_repeats(20),
            Self::Comet => base
                .with_color(Pixel::new(255, 147, 41))
                .with_tail(4)
                .with_repeats(3),
            Self::Scanner => base
                .with_color(Pixel::new(255, 0, 0))
                .with_delay(Duration::from_millis(60))
                .with_tail(3)
                .with_repeats(3),
            Self::Twinkle => base
                .with_delay(Duration::from_millis(80))
                .with_steps(100)
                .with_decay(0.85),
            Self::Bounce => base
                .with_color(Pixel::new(0, 255, 0))
                .with_delay(Duration::from_millis(80))
                .with_width(3)
                .with_repeats(3),
            Self::Breath => base
                .with_color(Pixel::new(64, 156, 255))
                .with_delay(Duration::from_millis(20))
                .with_steps(100)
                .with_repeats(3),
            Self::WheelSpin => base
                .with_delay(Duration::from_millis(20))
                .with_repeats(2),
            Self::Wave => base
                .with_color(Pixel::new(0, 0, 255))
                .with_delay(Duration::from_millis(80))
                .with_repeats(3),
        }
    }
}

/// Builds effects for one ring with the process-wide tuning applied.
#[derive(Clone, Debug)]
pub struct Catalog {
    pixel_count: usize,
    seed: Option<u64>,
    delay_scale: f32,
}

impl Catalog {
    pub fn new(pixel_count: usize, seed: Option<u64>, delay_scale: f32) -> Catalog {
        Catalog {
            pixel_count,
            seed,
            delay_scale,
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.pixel_count
    }

    pub fn delay_scale(&self) -> f64 {
        f64::from(self.delay_scale)
    }

    /// Default parameters for `name`, with `color` overriding the default
    /// color and the configured delay scale applied.
    pub fn params(&self, name: EffectName, color: Option<Pixel>) -> EffectParams {
        let mut params = name.default_params();
        if let Some(color) = color {
            params.color = color;
        }
        params.delay = params.delay.mul_f64(self.delay_scale());
        params
    }

    pub fn build(&self, name: EffectName, color: Option<Pixel>) -> Box<dyn LightingEffect> {
        self.build_with(name, self.params(name, color))
    }

    pub fn build_with(&self, name: EffectName, params: EffectParams) -> Box<dyn LightingEffect> {
        let n = self.pixel_count;
        match name {
            EffectName::ColorWipe => Box::new(ColorWipe::new(n, params)),
            EffectName::RainbowCycle => Box::new(Rainbow::cycle(n, params)),
            EffectName::TheaterChase => Box::new(TheaterChase::new(n, params)),
            EffectName::Pulse => Box::new(Pulse::new(n, params)),
            EffectName::Spinner => Box::new(Spinner::new(n, params)),
            EffectName::Comet => Box::new(Comet::new(n, params)),
            EffectName::Scanner => Box::new(Scanner::new(n, params)),
            EffectName::Twinkle => Box::new(Twinkle::new(n, params, self.seed)),
            EffectName::Bounce => Box::new(Bounce::new(n, params)),
            EffectName::Breath => Box::new(Breath::new(n, params)),
            EffectName::WheelSpin => Box::new(Rainbow::spin(n, params)),
            EffectName::Wave => Box::new(Wave::new(n, params)),
        }
    }
}
