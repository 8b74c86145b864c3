//! Config command - manage configuration.

use std::fs;
use std::path::PathBuf;

use clap::{Args, Subcommand};
use console::style;
use tracing::debug;

use loandoc_core::LoandocConfig;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Initialize a new configuration file
    Init(InitArgs),

    /// Get a specific configuration value
    Get {
        /// Configuration key (e.g., "input.max_text_bytes")
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// New value
        value: String,
    },

    /// Show configuration file path
    Path,
}

#[derive(Args)]
struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Overwrite existing file
    #[arg(long)]
    force: bool,
}

pub async fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let location = ConfigLocation::resolve(config_path);

    match args.command {
        ConfigCommand::Show => show_config(&location),
        ConfigCommand::Init(init_args) => init_config(init_args, &location),
        ConfigCommand::Get { key } => get_config(&location, &key),
        ConfigCommand::Set { key, value } => set_config(&location, &key, &value),
        ConfigCommand::Path => show_path(&location),
    }
}

/// The configuration file used by this invocation: the `--config` path when
/// given, the per-user file otherwise.
struct ConfigLocation {
    path: PathBuf,
    explicit: bool,
}

impl ConfigLocation {
    fn resolve(config_path: Option<&str>) -> Self {
        match config_path {
            Some(path) => Self {
                path: PathBuf::from(path),
                explicit: true,
            },
            None => Self {
                path: dirs::config_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("loandoc")
                    .join("config.json"),
                explicit: false,
            },
        }
    }

    /// The stored configuration, or `None` when the file does not exist yet.
    fn read(&self) -> anyhow::Result<Option<LoandocConfig>> {
        if !self.path.exists() {
            return Ok(None);
        }
        debug!("Loading configuration from {}", self.path.display());
        Ok(Some(LoandocConfig::from_file(&self.path)?))
    }

    /// The stored configuration, falling back to defaults for the per-user
    /// file. A missing `--config` file is an error.
    fn load(&self) -> anyhow::Result<LoandocConfig> {
        match self.read()? {
            Some(config) => Ok(config),
            None if self.explicit => {
                anyhow::bail!("Config file not found: {}", self.path.display())
            }
            None => Ok(LoandocConfig::default()),
        }
    }

    fn save(&self, config: &LoandocConfig) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        config.save(&self.path)?;
        Ok(())
    }
}

/// Load the configuration for the `process` and `batch` commands.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<LoandocConfig> {
    ConfigLocation::resolve(config_path).load()
}

fn show_config(location: &ConfigLocation) -> anyhow::Result<()> {
    let config = match location.read()? {
        Some(config) => config,
        None => {
            println!(
                "{} No config file at {}, showing defaults.",
                style("ℹ").blue(),
                location.path.display()
            );
            LoandocConfig::default()
        }
    };

    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

fn init_config(args: InitArgs, location: &ConfigLocation) -> anyhow::Result<()> {
    let target = ConfigLocation {
        path: args.output.unwrap_or_else(|| location.path.clone()),
        explicit: true,
    };

    if target.path.exists() && !args.force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            target.path.display()
        );
    }

    target.save(&LoandocConfig::default())?;
    println!(
        "{} Created configuration file at {}",
        style("✓").green(),
        target.path.display()
    );
    Ok(())
}

fn get_config(location: &ConfigLocation, key: &str) -> anyhow::Result<()> {
    let json = serde_json::to_value(location.load()?)?;
    let value = json_path(&json, key)
        .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))?;

    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn set_config(location: &ConfigLocation, key: &str, value: &str) -> anyhow::Result<()> {
    let current = location.read()?.unwrap_or_default();
    let json = set_json_path(serde_json::to_value(&current)?, key, value)?;
    let stored = json_path(&json, key).cloned().unwrap_or_default();

    let config: LoandocConfig = serde_json::from_value(json)?;
    location.save(&config)?;

    println!(
        "{} Set {} = {} in {}",
        style("✓").green(),
        key,
        serde_json::to_string(&stored)?,
        location.path.display()
    );
    Ok(())
}

/// Set `key` (dot separated) inside `json`. The value is parsed as JSON,
/// falling back to a plain string.
fn set_json_path(
    mut json: serde_json::Value,
    key: &str,
    value: &str,
) -> anyhow::Result<serde_json::Value> {
    let parsed_value: serde_json::Value = serde_json::from_str(value)
        .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));

    let parts: Vec<&str> = key.split('.').collect();
    let mut current = &mut json;

    for (i, part) in parts.iter().enumerate() {
        if i == parts.len() - 1 {
            match current.as_object_mut() {
                Some(obj) if obj.contains_key(*part) => {
                    obj.insert((*part).to_string(), parsed_value.clone());
                }
                Some(_) => anyhow::bail!("Configuration key not found: {}", key),
                None => anyhow::bail!("Cannot set value at non-object path"),
            }
        } else {
            current = current
                .get_mut(*part)
                .ok_or_else(|| anyhow::anyhow!("Configuration path not found: {}", key))?;
        }
    }

    Ok(json)
}

fn json_path<'a>(json: &'a serde_json::Value, key: &str) -> Option<&'a serde_json::Value> {
    key.split('.').try_fold(json, |current, part| current.get(part))
}

fn show_path(location: &ConfigLocation) -> anyhow::Result<()> {
    println!("Configuration file: {}", location.path.display());

    if location.path.exists() {
        println!("Status: {}", style("exists").green());
    } else {
        println!("Status: {}", style("not created").yellow());
        println!();
        println!("Run 'loandoc config init' to create a configuration file.");
    }

    Ok(())
}
