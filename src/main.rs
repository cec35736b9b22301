pub(crate) mod cancel;
pub(crate) mod catalog;
pub(crate) mod colormath;
pub(crate) mod config;
pub(crate) mod controller;
pub(crate) mod demo;
pub(crate) mod effects;
pub(crate) mod error;
pub(crate) mod framebuffer;
pub(crate) mod intervaltimer;
pub(crate) mod output;
pub(crate) mod presets;
pub(crate) mod shell;
pub(crate) mod terminaloutput;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::cancel::CancelToken;
use crate::catalog::{Catalog, EffectName};
use crate::config::{OutputKind, RingConfig};
use crate::controller::RingController;
use crate::error::{RingError, RingResult};
use crate::framebuffer::pixel_from_channels;
use crate::output::{LightOutput, LogOutput};
use crate::shell::Shell;
use crate::terminaloutput::TerminalOutput;

#[derive(Parser)]
#[command(about = "Drive an addressable LED ring")]
struct Cli {
    /// Config file (format chosen by extension)
    #[arg(short, long, value_name = "FILE")]
    config: Option<std::path::PathBuf>,

    /// Number of LEDs in the ring
    #[arg(short, long)]
    pixels: Option<usize>,

    /// Global brightness, 0.0 to 1.0
    #[arg(short, long)]
    brightness: Option<f32>,

    /// Where frames are shown
    #[arg(short, long, value_enum)]
    output: Option<OutputKind>,

    /// Seed for the twinkle effect
    #[arg(long)]
    seed: Option<u64>,

    /// Multiplier on every effect's frame delay
    #[arg(long)]
    delay_scale: Option<f32>,

    #[command(subcommand)]
    command: Option<Mode>,
}

#[derive(Subcommand)]
enum Mode {
    /// Run the scripted demo sequence
    Demo,
    /// Interactive command shell (default)
    Shell,
    /// Run a single effect, e.g. `run comet 255 80 0`
    Run {
        effect: String,
        #[arg(allow_hyphen_values = true)]
        rgb: Vec<i64>,
    },
    /// Execute one shell command line, e.g. `exec set 0 255 0 0`
    Exec {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        words: Vec<String>,
    },
}

impl Cli {
    fn config(&self) -> RingResult<RingConfig> {
        let mut config = RingConfig::load(self.config.as_deref())?;
        if let Some(pixels) = self.pixels {
            config.pixel_count = pixels;
        }
        if let Some(brightness) = self.brightness {
            config.brightness = brightness;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(delay_scale) = self.delay_scale {
            config.delay_scale = delay_scale;
        }
        config.validated()
    }
}

fn run_effect<O: LightOutput>(
    controller: &mut RingController<O>,
    catalog: &Catalog,
    effect: &str,
    rgb: &[i64],
) -> RingResult<()> {
    let name = EffectName::parse_from_str(effect)
        .ok_or_else(|| RingError::UnknownEffect(effect.to_string()))?;
    let color = match (rgb, name.takes_color()) {
        ([], _) => None,
        ([r, g, b], true) => Some(pixel_from_channels(*r, *g, *b)),
        _ => return Err(RingError::Usage(name.usage())),
    };
    let mut effect = catalog.build(name, color);
    controller.play(name.as_str(), effect.as_mut())?;
    Ok(())
}

fn run<O: LightOutput>(
    args: &Cli,
    config: &RingConfig,
    output: O,
    cancel: CancelToken,
) -> RingResult<()> {
    let catalog = Catalog::new(config.pixel_count, config.seed, config.delay_scale);
    let controller = RingController::new(output, catalog.pixel_count(), config.brightness, cancel);
    let mut shell = Shell::new(controller, catalog.clone(), io::stdout());

    let result = match &args.command {
        None | Some(Mode::Shell) => shell.run(io::stdin().lock()),
        Some(Mode::Demo) => {
            demo::run_demo(shell.controller_mut(), &catalog).map(|_| ())
        }
        Some(Mode::Run { effect, rgb }) => {
            run_effect(shell.controller_mut(), &catalog, effect, rgb)
        }
        Some(Mode::Exec { words }) => shell.execute_line(&words.join(" ")).map(|_| ()),
    };
    result?;

    // One-shot commands keep their result on the ring; sessions end dark.
    if !matches!(args.command, Some(Mode::Exec { .. })) {
        shell.controller_mut().clear()?;
        log::info!("Cleared all pixels");
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    let args = Cli::parse();
    let config = match args.config() {
        Ok(config) => config,
        Err(err) => {
            log::error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let cancel = CancelToken::new();
    let handler_token = cancel.clone();
    if let Err(err) = ctrlc::set_handler(move || handler_token.cancel()) {
        log::warn!("Cannot install Ctrl-C handler, effects cannot be interrupted: {}", err);
    }

    let result = match config.output {
        OutputKind::Terminal => run(&args, &config, TerminalOutput::stdout(), cancel),
        OutputKind::Log => run(&args, &config, LogOutput::new(), cancel),
    };

    let _ = io::stdout().flush();
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
