//! Configuration structs with defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wayfarer_tiles::{Palette, StructureCatalog};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level explorer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// World generation settings.
    pub world: WorldConfig,
    /// Glyphs used to draw tiles and the traveler.
    pub palette: Palette,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// World generation settings.
///
/// Noise scales apply to global tile coordinates, except `biome_scale`
/// which applies to chunk coordinates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    /// Fixed world seed; `None` draws a fresh seed every session.
    pub seed: Option<u64>,
    /// Terrain noise scale.
    pub terrain_scale: f64,
    /// Octaves in the terrain field.
    pub terrain_octaves: u32,
    /// Octaves in the bush field.
    pub feature_octaves: u32,
    /// Biome noise scale (per chunk).
    pub biome_scale: f64,
    /// Structure placement noise scale.
    pub placement_scale: f64,
    /// Placement noise must exceed this to seed a structure.
    pub placement_threshold: f64,
    /// Terrain below this is water.
    pub water_level: f64,
    /// Terrain at or above this is rock.
    pub rock_level: f64,
    /// Feature noise above this grows a bush.
    pub bush_level: f64,
    /// Replacement structure catalog for urban chunks; `None` keeps the
    /// built-in templates.
    pub structures: Option<StructureCatalog>,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            seed: None,
            terrain_scale: 0.05,
            terrain_octaves: 4,
            feature_octaves: 2,
            biome_scale: 0.02,
            placement_scale: 0.3,
            placement_threshold: 0.65,
            water_level: 0.35,
            rock_level: 0.65,
            bush_level: 0.8,
            structures: None,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save ---

impl Config {
    /// Platform config directory for wayfarer, if the platform has one.
    pub fn default_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("wayfarer"))
    }

    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents =
                std::fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
                    path: config_path.clone(),
                    source,
                })?;
            let config: Config = ron::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: config_path.clone(),
                source,
            })?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(2)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        let config_path = config_dir.join(CONFIG_FILE);
        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::Write {
            path: config_path,
            source,
        })
    }
}
