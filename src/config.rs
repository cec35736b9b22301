use std::path::Path;

use config_file::FromConfigFile;
use serde::Deserialize;

use crate::error::{RingError, RingResult};

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    /// Colored preview in the terminal
    #[default]
    Terminal,
    /// No preview, frames go to the trace log
    Log,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RingConfig {
    pub pixel_count: usize,
    pub brightness: f32,
    pub output: OutputKind,
    pub seed: Option<u64>,
    pub delay_scale: f32,
}

impl Default for RingConfig {
    fn default() -> Self {
        RingConfig {
            pixel_count: 12,
            brightness: 0.3,
            output: OutputKind::Terminal,
            seed: None,
            delay_scale: 1.0,
        }
    }
}

impl RingConfig {
    /// Reads the config file if one is given, defaults otherwise. The format
    /// follows the file extension.
    pub fn load(path: Option<&Path>) -> RingResult<RingConfig> {
        let config = match path {
            Some(path) => {
                log::info!("Loading config from {}", path.display());
                RingConfig::from_config_file(path)
                    .map_err(|err| RingError::Config(format!("{}: {}", path.display(), err)))?
            }
            None => RingConfig::default(),
        };
        config.validated()
    }

    pub fn validated(mut self) -> RingResult<RingConfig> {
        if self.pixel_count == 0 {
            log::warn!("pixel_count must be positive, using 1");
            self.pixel_count = 1;
        }
        if !(0.0..=1.0).contains(&self.brightness) {
            return Err(RingError::Config(format!(
                "brightness must be between 0.0 and 1.0, got {}",
                self.brightness
            )));
        }
        if !self.delay_scale.is_finite() || self.delay_scale < 0.0 {
            return Err(RingError::Config(format!(
                "delay_scale must be a non-negative number, got {}",
                self.delay_scale
            )));
        }
        Ok(self)
    }
}
