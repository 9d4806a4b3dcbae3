//! Configuration management module.
//!
//! Loads the theme, navigation timings and key binding overrides from a YAML
//! file. The file is optional and is never written; a missing file yields the
//! defaults.

mod error;
mod keymap;

pub use error::ConfigError;
pub use keymap::{
    default_keymap, format_hotkey_display, matches_hotkey, Hotkey, KeyAction, Keymap,
};

use crate::error::AppError;
use crate::navigation::{
    NavigationConfig, DEFAULT_QUIET_PERIOD_MS, DEFAULT_SETTLE_DELAY_MS, DEFAULT_WHEEL_THRESHOLD,
};
use serde::Deserialize;
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/portfolio-tui";

/// Wheel delta reported for a single terminal scroll notch.
///
pub const DEFAULT_WHEEL_STEP: f64 = 60.0;

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub theme_name: String,
    pub navigation: NavigationSpec,
    pub keymap: Keymap,
    file_path: Option<PathBuf>,
}

/// Navigation timings and thresholds as they appear in the file.
///
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavigationSpec {
    pub settle_delay_ms: u64,
    pub quiet_period_ms: u64,
    pub wheel_threshold: f64,
    pub wheel_step: f64,
}

impl Default for NavigationSpec {
    fn default() -> Self {
        NavigationSpec {
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            quiet_period_ms: DEFAULT_QUIET_PERIOD_MS,
            wheel_threshold: DEFAULT_WHEEL_THRESHOLD,
            wheel_step: DEFAULT_WHEEL_STEP,
        }
    }
}

impl NavigationSpec {
    /// Reject values the engine cannot work with.
    ///
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.wheel_threshold.is_finite() || self.wheel_threshold < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "wheel_threshold",
                message: format!("expected a finite value >= 0, got {}", self.wheel_threshold),
            });
        }
        if !self.wheel_step.is_finite() || self.wheel_step <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "wheel_step",
                message: format!("expected a finite value > 0, got {}", self.wheel_step),
            });
        }
        Ok(())
    }

    pub fn engine_config(&self, section_count: usize) -> NavigationConfig {
        NavigationConfig {
            section_count,
            settle_delay: Duration::from_millis(self.settle_delay_ms),
            quiet_period: Duration::from_millis(self.quiet_period_ms),
            wheel_threshold: self.wheel_threshold,
        }
    }
}

/// Define specification for configuration file.
///
#[derive(Deserialize)]
struct FileSpec {
    #[serde(default = "default_theme_name")]
    pub theme: String,
    #[serde(default)]
    pub navigation: NavigationSpec,
    #[serde(default)]
    pub keys: HashMap<KeyAction, Vec<Hotkey>>,
}

fn default_theme_name() -> String {
    "dark".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding the defaults.
    ///
    pub fn new() -> Config {
        Config {
            theme_name: default_theme_name(),
            navigation: NavigationSpec::default(),
            keymap: Keymap::default(),
            file_path: None,
        }
    }

    /// Load the configuration file from the custom directory if provided,
    /// otherwise from the default directory. A missing file keeps the
    /// defaults.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        let dir_path = match custom_path {
            Some(path) => Path::new(path).to_path_buf(),
            None => Config::default_path()?,
        };
        let file_path = dir_path.join(Path::new(FILE_NAME));

        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                source: e,
            })?;
            self.apply_str(&contents)?;
            log::info!("Loaded configuration from {}", file_path.display());
        } else {
            log::debug!(
                "No configuration at {}, using defaults",
                file_path.display()
            );
        }

        self.file_path = Some(file_path);
        Ok(())
    }

    /// Parse YAML contents and apply them over the current values.
    ///
    pub fn apply_str(&mut self, contents: &str) -> Result<(), ConfigError> {
        let data: FileSpec = serde_yaml::from_str(contents)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
        data.navigation.validate()?;
        self.theme_name = data.theme;
        self.navigation = data.navigation;
        self.keymap = self.keymap.clone().with_overrides(data.keys);
        Ok(())
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}
