use crate::error::{Error, Result};
use crate::export::{seo::DEFAULT_OG_IMAGE, ExportFormat, ExportOptions};
use crate::render::DEFAULT_BRAND;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "portfolio.toml";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub export: ExportConfig,
    pub logging: LoggingConfig,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: PathBuf,
    pub format: ExportFormat,
}

/// Export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Build ZIP bundles; when off, ZIP requests fall back to HTML
    pub archive: bool,
    pub og_image: String,
    /// Footer credit
    pub brand: String,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("./portfolio-export"),
            format: ExportFormat::default(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            archive: true,
            og_image: DEFAULT_OG_IMAGE.to_string(),
            brand: DEFAULT_BRAND.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from file or return defaults
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Merge CLI arguments into config (CLI takes precedence)
    pub fn merge_cli(
        &mut self,
        output: Option<PathBuf>,
        format: Option<ExportFormat>,
        verbose: bool,
    ) {
        if let Some(out) = output {
            self.output.directory = out;
        }

        if let Some(fmt) = format {
            self.output.format = fmt;
        }

        if verbose {
            self.logging.level = "debug".to_string();
        }
    }

    /// Options handed to the exporter
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            og_image: self.export.og_image.clone(),
            archive: self.export.archive,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.export.brand.trim().is_empty() {
            return Err(Error::config_validation("brand must not be empty"));
        }

        if self.export.og_image.trim().is_empty() {
            return Err(Error::config_validation("og_image must not be empty"));
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(Error::config_validation(format!(
                "unknown log level '{}'",
                self.logging.level
            )));
        }

        Ok(())
    }
}
