use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::utils::path::expand_tilde;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
    #[serde(default = "default_format")]
    pub default_format: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_show_legend")]
    pub show_legend: bool,
}

fn default_export_dir() -> String {
    ".".to_string()
}
fn default_format() -> String {
    "csv".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_show_legend() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_dir: default_export_dir(),
            default_format: default_format(),
            separator_char: default_separator_char(),
            show_legend: default_show_legend(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        let base = if cfg!(target_os = "windows") {
            dirs::config_dir()
        } else {
            dirs::home_dir()
        };
        let base = base.unwrap_or_else(|| PathBuf::from("."));

        if cfg!(target_os = "windows") {
            base.join("rbusbooker")
        } else {
            base.join(".rbusbooker")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rbusbooker.conf")
    }

    /// Config path to use: the `--config` override or the standard one.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        match custom {
            Some(p) => expand_tilde(p),
            None => Self::config_file(),
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Write the configuration as YAML, creating the parent directory.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Directory relative export paths are resolved against.
    pub fn export_dir(&self) -> PathBuf {
        expand_tilde(&self.export_dir)
    }

    pub fn export_format(&self) -> AppResult<ExportFormat> {
        ExportFormat::from_str(&self.default_format, true)
            .map_err(|_| AppError::InvalidExportFormat(self.default_format.clone()))
    }

    /// First character of `separator_char`, `-` when unset.
    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }
}
