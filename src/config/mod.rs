use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::TimeBudget;

fn default_radius() -> u32 {
    3000
}
fn default_verbose() -> bool {
    false
}

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub place: Option<String>,
    #[serde(default = "default_radius")]
    pub radius: u32,
    #[serde(default)]
    pub time: Option<TimeBudget>,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
    #[serde(default)]
    pub nominatim: Option<NominatimConfig>,
    #[serde(default)]
    pub overpass: Option<OverpassConfig>,
}

fn default_nominatim_url() -> String {
    "https://nominatim.openstreetmap.org/search".to_string()
}

fn default_nominatim_timeout() -> u64 {
    10
}

/// Geocoding endpoint settings
#[derive(Debug, Deserialize, Clone)]
pub struct NominatimConfig {
    #[serde(default = "default_nominatim_url")]
    pub url: String,
    #[serde(default = "default_nominatim_timeout")]
    pub timeout_secs: u64,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            url: default_nominatim_url(),
            timeout_secs: default_nominatim_timeout(),
        }
    }
}

fn default_overpass_url() -> String {
    "https://overpass-api.de/api/interpreter".to_string()
}

fn default_overpass_timeout() -> u64 {
    30
}

/// Feature-query endpoint settings
#[derive(Debug, Deserialize, Clone)]
pub struct OverpassConfig {
    #[serde(default = "default_overpass_url")]
    pub url: String,
    #[serde(default = "default_overpass_timeout")]
    pub timeout_secs: u64,
}

impl Default for OverpassConfig {
    fn default() -> Self {
        Self {
            url: default_overpass_url(),
            timeout_secs: default_overpass_timeout(),
        }
    }
}

impl FileConfig {
    /// Read and parse a config file at an explicit path
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&contents).context("Failed to parse config file")
    }

    /// Search the usual locations for a config file
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("tourscout.toml"));
    paths.push(PathBuf::from(".tourscout.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("tourscout").join("config.toml"));
        paths.push(config_dir.join("tourscout.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".tourscout.toml"));
        paths.push(home.join(".config").join("tourscout").join("config.toml"));
    }

    paths
}
