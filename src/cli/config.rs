//! Configuration management CLI commands.

use crate::cli::common::{parse_arg, to_json, CliError, CliResult};
use crate::config::{Config, LOG_LEVELS};
use clap::{Args, Subcommand};

/// Configuration management commands
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
    /// Print the config file path
    Path,
}

/// Display current configuration
#[derive(Args, Debug, Clone)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigSetArgs {
    /// Default number of beats
    #[arg(long, value_name = "N")]
    length: Option<usize>,

    /// Default grid mode (diamond or box)
    #[arg(long, value_name = "MODE")]
    grid: Option<String>,

    /// Default difficulty level (1-3)
    #[arg(long, value_name = "LEVEL")]
    level: Option<u8>,

    /// Default prop continuity (continuous or random)
    #[arg(long, value_name = "CONTINUITY")]
    continuity: Option<String>,

    /// Default turn intensity
    #[arg(long, value_name = "TURNS")]
    intensity: Option<String>,

    /// Default CAP type
    #[arg(long, value_name = "NAME")]
    cap_type: Option<String>,

    /// Default slice size (halved or quartered)
    #[arg(long, value_name = "SIZE")]
    slice: Option<String>,

    /// Default prop type
    #[arg(long, value_name = "PROP")]
    prop: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
            ConfigCommand::Path => {
                let path = Config::config_file_path()
                    .map_err(|e| CliError::io(format!("Failed to resolve config path: {e}")))?;
                println!("{}", path.display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            println!("{}", to_json(&config)?);
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    fn is_empty(&self) -> bool {
        self.length.is_none()
            && self.grid.is_none()
            && self.level.is_none()
            && self.continuity.is_none()
            && self.intensity.is_none()
            && self.cap_type.is_none()
            && self.slice.is_none()
            && self.prop.is_none()
            && self.log_level.is_none()
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --length, --grid, --level, \
                 --continuity, --intensity, --cap-type, --slice, --prop, or --log-level",
            ));
        }

        let mut config = Config::load().unwrap_or_else(|e| {
            tracing::warn!("Replacing unreadable configuration: {e:#}");
            Config::default()
        });
        self.apply(&mut config)?;

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))?;
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }

    fn apply(&self, config: &mut Config) -> CliResult<()> {
        let generation = &mut config.generation;
        if let Some(length) = self.length {
            generation.length = length;
        }
        if let Some(grid) = &self.grid {
            generation.grid_mode = parse_arg(grid)?;
        }
        if let Some(level) = self.level {
            generation.level = level;
        }
        if let Some(continuity) = &self.continuity {
            generation.prop_continuity = parse_arg(continuity)?;
        }
        if let Some(intensity) = &self.intensity {
            generation.turn_intensity = parse_arg(intensity)?;
        }
        if let Some(cap_type) = &self.cap_type {
            generation.cap_type = parse_arg(cap_type)?;
        }
        if let Some(slice) = &self.slice {
            generation.slice_size = parse_arg(slice)?;
        }
        if let Some(prop) = &self.prop {
            generation.prop_type = parse_arg(prop)?;
        }
        if let Some(level) = &self.log_level {
            let level = level.to_ascii_lowercase();
            if !LOG_LEVELS.contains(&level.as_str()) {
                return Err(CliError::validation(format!(
                    "Invalid log level '{level}'. Must be one of: {}",
                    LOG_LEVELS.join(", ")
                )));
            }
            config.logging.level = level;
        }
        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    let generation = &config.generation;
    println!("Generation:");
    println!("  Length:          {}", generation.length);
    println!("  Grid mode:       {}", generation.grid_mode);
    println!("  Prop:            {}", generation.prop_type);
    println!("  Level:           {}", generation.level);
    println!("  Continuity:      {}", generation.prop_continuity);
    println!("  Turn intensity:  {}", generation.turn_intensity);
    println!("  CAP type:        {}", generation.cap_type);
    println!("  Slice size:      {}", generation.slice_size);
    println!();
    println!("Logging:");
    println!("  Level:           {}", config.logging.level);
}
