//! Configuration file structure (vibewix.toml).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use vibewix_core::{Brief, Tone};

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub brief: BriefSection,
    #[serde(default)]
    pub build: BuildSettings,
    #[serde(default)]
    pub studio: StudioSettings,
}

/// Brief fields; anything missing falls back to the studio defaults.
#[derive(Debug, Deserialize, Default)]
pub struct BriefSection {
    pub brand_name: Option<String>,
    pub audience: Option<String>,
    pub primary_goal: Option<String>,
    pub tone: Option<Tone>,
    pub features: Option<Vec<String>>,
}

impl BriefSection {
    /// Resolve against `Brief::default()`.
    pub fn to_brief(&self) -> Brief {
        let defaults = Brief::default();
        Brief {
            brand_name: self.brand_name.clone().unwrap_or(defaults.brand_name),
            audience: self.audience.clone().unwrap_or(defaults.audience),
            primary_goal: self.primary_goal.clone().unwrap_or(defaults.primary_goal),
            tone: self.tone.unwrap_or(defaults.tone),
            features: self.features.clone().unwrap_or(defaults.features),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BuildSettings {
    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            output: default_output(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StudioSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for StudioSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_output() -> String {
    "dist".to_string()
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    7777
}

/// Load configuration if the file exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config = parse_config(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::info!("Loaded config from {}", path.display());

    Ok(config)
}

fn parse_config(content: &str) -> Result<ConfigFile, toml::de::Error> {
    toml::from_str(content)
}
