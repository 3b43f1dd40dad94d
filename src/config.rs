//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::{APP_DATA_DIR_NAME, CONFIG_DIR_ENV};
use crate::generator::{MAX_LEVEL, MAX_TURN_INTENSITY};
use crate::models::{
    CapType, GenerationMode, GenerationOptions, GridMode, PropContinuity, PropType, SliceSize,
    Turns,
};

/// Log levels accepted in `[logging]`.
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Default generation settings used when the CLI does not override them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationDefaults {
    /// Number of beats
    pub length: usize,
    /// Grid mode
    pub grid_mode: GridMode,
    /// Prop type
    pub prop_type: PropType,
    /// Difficulty level (1-3)
    pub level: u8,
    /// Rotation-direction continuity
    pub prop_continuity: PropContinuity,
    /// Upper bound for allocated turns
    pub turn_intensity: Turns,
    /// CAP type for circular generation
    pub cap_type: CapType,
    /// Slice size for circular generation
    pub slice_size: SliceSize,
}

impl Default for GenerationDefaults {
    fn default() -> Self {
        let options = GenerationOptions::default();
        Self {
            length: options.length,
            grid_mode: options.grid_mode,
            prop_type: options.prop_type,
            level: options.level,
            prop_continuity: options.prop_continuity,
            turn_intensity: options.turn_intensity,
            cap_type: CapType::default(),
            slice_size: SliceSize::default(),
        }
    }
}

impl GenerationDefaults {
    /// Generation options for `mode` built from these defaults.
    #[must_use]
    pub fn to_options(&self, mode: GenerationMode) -> GenerationOptions {
        let circular = mode == GenerationMode::Circular;
        GenerationOptions {
            length: self.length,
            grid_mode: self.grid_mode,
            prop_type: self.prop_type,
            level: self.level,
            mode,
            prop_continuity: self.prop_continuity,
            turn_intensity: self.turn_intensity,
            slice_size: circular.then_some(self.slice_size),
            cap_type: circular.then_some(self.cap_type),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default log level (`RUST_LOG` overrides it)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Flowseq/config.toml`
/// - macOS: `~/Library/Application Support/Flowseq/config.toml`
/// - Windows: `%APPDATA%\Flowseq\config.toml`
///
/// Setting `FLOWSEQ_CONFIG_DIR` replaces the directory.
///
/// # Validation
///
/// - `generation.length` must be at least 1
/// - `generation.level` must be 1-3
/// - `generation.turn_intensity` must be at most 3
/// - `logging.level` must be a known level
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Generation defaults
    #[serde(default)]
    pub generation: GenerationDefaults,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// - `$FLOWSEQ_CONFIG_DIR` when set
    /// - Linux: `~/.config/Flowseq/`
    /// - macOS: `~/Library/Application Support/Flowseq/`
    /// - Windows: `%APPDATA%\Flowseq\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            tracing::debug!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate().context(format!(
            "Invalid config file: {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        let generation = &self.generation;
        if generation.length == 0 {
            anyhow::bail!("generation.length must be at least 1");
        }
        if !(1..=MAX_LEVEL).contains(&generation.level) {
            anyhow::bail!(
                "generation.level must be between 1 and {MAX_LEVEL}, got {}",
                generation.level
            );
        }
        if generation.turn_intensity > MAX_TURN_INTENSITY {
            anyhow::bail!(
                "generation.turn_intensity must be at most {MAX_TURN_INTENSITY}, got {}",
                generation.turn_intensity
            );
        }
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            anyhow::bail!(
                "logging.level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.logging.level
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.generation.length, 16);
        assert_eq!(config.generation.level, 1);
        assert_eq!(config.generation.cap_type, CapType::StrictRotated);
        assert_eq!(config.logging.level, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate() {
        let mut config = Config::new();
        config.generation.level = 4;
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.generation.length = 0;
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.generation.turn_intensity = Turns::from_half_turns(8);
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_toml_round_trip() {
        let mut config = Config::new();
        config.generation.grid_mode = GridMode::Box;
        config.generation.cap_type = CapType::MirroredComplementaryRotated;
        config.generation.turn_intensity = Turns::from_half_turns(3);

        let content = toml::to_string_pretty(&config).unwrap();
        assert!(content.contains("cap_type = \"mirrored-complementary-rotated\""));
        assert!(content.contains("turn_intensity = 1.5"));

        let loaded: Config = toml::from_str(&content).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let loaded: Config = toml::from_str("[generation]\nlevel = 2\n").unwrap();
        assert_eq!(loaded.generation.level, 2);
        assert_eq!(loaded.generation.length, 16);
        assert_eq!(loaded.logging, LoggingConfig::default());
    }

    #[test]
    fn test_to_options_sets_cap_only_for_circular() {
        let defaults = GenerationDefaults::default();
        let freeform = defaults.to_options(GenerationMode::Freeform);
        assert!(freeform.cap_type.is_none());
        assert!(freeform.slice_size.is_none());
        let circular = defaults.to_options(GenerationMode::Circular);
        assert_eq!(circular.cap_type, Some(CapType::StrictRotated));
        assert_eq!(circular.slice_size, Some(SliceSize::Halved));
    }
}
