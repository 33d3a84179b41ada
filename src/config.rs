//! RON configuration
//!
//! Loads settings from `assets/config.ron` or the platform config directory,
//! falling back to built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::vision::{ScanLimits, ViewStrategy};

const CONFIG_FILE: &str = "config.ron";

/// All tunable settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub vision: VisionConfig,
    pub map: MapConfig,
}

/// Field of view settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisionConfig {
    pub strategy: ViewStrategy,
    /// Radius used when toggling to the square viewshed
    pub square_radius: i32,
    pub max_rings: i32,
    pub max_depth: u32,
}

impl VisionConfig {
    pub fn limits(&self) -> ScanLimits {
        ScanLimits {
            max_rings: self.max_rings,
            max_depth: self.max_depth,
        }
    }
}

impl Default for VisionConfig {
    fn default() -> Self {
        let limits = ScanLimits::default();
        Self {
            strategy: ViewStrategy::ShadowCast,
            square_radius: 5,
            max_rings: limits.max_rings,
            max_depth: limits.max_depth,
        }
    }
}

/// Level generation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Grid width; 0 means "fit the terminal"
    pub width: i32,
    /// Grid height; 0 means "fit the terminal"
    pub height: i32,
    /// Wandering occupants scattered on floor tiles
    pub occupants: usize,
    /// RNG seed; random when absent
    pub seed: Option<u64>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            occupants: 6,
            seed: None,
        }
    }
}

impl Config {
    /// Load from the first config file found, or use defaults
    pub fn load() -> Self {
        for path in search_paths() {
            if !path.exists() {
                continue;
            }
            match Self::load_from(&path) {
                Ok(config) => {
                    log::info!("Config loaded from {:?}", path);
                    return config;
                }
                Err(e) => log::warn!("{}; using defaults", e),
            }
        }
        Self::default()
    }

    /// Load from a specific RON file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the defaults out for easy editing
    pub fn export_default(path: &Path) -> Result<(), ConfigError> {
        let text = ron::ser::to_string_pretty(&Self::default(), ron::ser::PrettyConfig::default())?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, text).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn search_paths() -> Vec<PathBuf> {
    use directories::ProjectDirs;

    let mut paths = vec![Path::new("assets").join(CONFIG_FILE)];
    if let Some(proj_dirs) = ProjectDirs::from("com", "gloomcrawl", "Gloomcrawl") {
        paths.push(proj_dirs.config_dir().join(CONFIG_FILE));
    }
    paths
}
