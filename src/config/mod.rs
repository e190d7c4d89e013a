pub mod toml_config;

use crate::core::ProductKind;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "factory-method")]
#[command(about = "Creates each product through a factory, prints its name, then disposes of it")]
pub struct CliConfig {
    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, value_delimiter = ',', help = "Product kinds to create, e.g. a,b")]
    pub sequence: Vec<ProductKind>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Merges the CLI flags over the optional TOML file.
    pub fn resolve(&self) -> Result<RunSettings> {
        let file = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        file.validate()?;

        let mut settings = RunSettings::from(&file);
        if !self.sequence.is_empty() {
            settings.sequence = self.sequence.clone();
        }
        settings.verbose = self.verbose;
        settings.json_logs = settings.json_logs || self.json_logs;

        settings.validate()?;
        Ok(settings)
    }
}

/// Everything the binary needs after CLI and file settings are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub sequence: Vec<ProductKind>,
    pub label_prefix: String,
    pub log_level: Option<String>,
    pub verbose: bool,
    pub json_logs: bool,
}

impl Default for RunSettings {
    fn default() -> Self {
        RunSettings::from(&TomlConfig::default())
    }
}

impl From<&TomlConfig> for RunSettings {
    fn from(file: &TomlConfig) -> Self {
        Self {
            sequence: file.sequence(),
            label_prefix: file.label_prefix().to_string(),
            log_level: file.log_level(),
            verbose: false,
            json_logs: file.json_logs(),
        }
    }
}

impl Validate for RunSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_list("sequence", &self.sequence)?;
        validation::validate_non_empty_string("label_prefix", &self.label_prefix)?;
        if let Some(level) = &self.log_level {
            validation::validate_one_of("log_level", level, &toml_config::LOG_LEVELS)?;
        }
        Ok(())
    }
}
