//! Configuration structs with defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the configuration inside its directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

/// `<platform config dir>/psphere`, or `None` when the platform has no
/// config directory.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("psphere"))
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Grid resolution and calibration sampling.
    pub generation: GenerationConfig,
    /// Shape and colours of the planet.
    pub planet: PlanetConfig,
    /// Map export settings.
    pub export: ExportConfig,
    pub debug: DebugConfig,
}

/// Resolution and sampling settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GenerationConfig {
    /// Subdivisions handed to the LOD mesh builder.
    pub mesh_iterations: u32,
    /// Cells per face side of the navigation grids.
    pub grid_size: u32,
    pub texture_width: u32,
    pub texture_height: u32,
    /// Random directions sampled for sea-level calibration.
    pub sample_count: usize,
    /// Histogram buckets for sea-level calibration.
    pub bucket_count: usize,
}

/// Planet shape, terrain noise and colour bands.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlanetConfig {
    pub seed: u64,
    /// Sea-level radius in model units.
    pub radius: f64,
    /// Share of the surface at or below sea level (0.0 - 1.0).
    pub water_fraction: f64,
    /// Noise layer amplitudes, paired with `frequencies`.
    pub amplitudes: Vec<f64>,
    pub frequencies: Vec<f64>,
    /// Deep to shallow water.
    pub water_colors: [[u8; 3]; 2],
    /// Lowland to highland.
    pub terrain_colors: [[u8; 3]; 2],
    /// Mountain foot to peak.
    pub mountain_colors: [[u8; 3]; 2],
    /// Share of the land elevation range below the mountain line.
    pub mountain_fraction: f64,
}

/// Map export settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory the PNG maps are written to.
    pub output_dir: PathBuf,
    pub map_width: u32,
    pub map_height: u32,
    /// Width of the cubemap cross (height is three quarters of it).
    pub cubemap_width: u32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            mesh_iterations: 64,
            grid_size: 256,
            texture_width: 512,
            texture_height: 256,
            sample_count: 40_000,
            bucket_count: 100,
        }
    }
}

impl Default for PlanetConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            radius: 100.0,
            water_fraction: 0.65,
            amplitudes: vec![0.02, 0.01, 0.005],
            frequencies: vec![1.5, 4.0, 12.0],
            water_colors: [[0, 20, 90], [30, 110, 200]],
            terrain_colors: [[40, 120, 40], [150, 140, 80]],
            mountain_colors: [[120, 100, 80], [255, 255, 255]],
            mountain_fraction: 0.5,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("maps"),
            map_width: 1024,
            map_height: 512,
            cubemap_width: 1024,
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

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
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
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::WriteError {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::WriteError {
            path: config_path,
            source,
        })
    }

    /// Re-read the file: `Some(new_config)` if it differs from `self`.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE_NAME))?;
        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&contents).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let ron_str = ron::ser::to_string_pretty(
            &Config::default(),
            ron::ser::PrettyConfig::new().depth_limit(3),
        )
        .unwrap();
        assert!(ron_str.contains("grid_size: 256"));
        assert!(ron_str.contains("water_fraction: 0.65"));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.planet.seed = 1234;
        config.export.output_dir = PathBuf::from("out/maps");
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_section_uses_defaults() {
        let config: Config = ron::from_str("(planet: (seed: 9, radius: 50.0))").unwrap();
        assert_eq!(config.planet.seed, 9);
        assert_eq!(config.planet.radius, 50.0);
        assert_eq!(config.planet.water_fraction, 0.65);
        assert_eq!(config.generation, GenerationConfig::default());
        assert_eq!(config.export, ExportConfig::default());
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(orbit: (period: 3.0))");
        assert!(result.is_ok());
    }

    #[test]
    fn test_default_colors_match_palette_bands() {
        let planet = PlanetConfig::default();
        assert_eq!(planet.water_colors[0], [0, 20, 90]);
        assert_eq!(planet.mountain_colors[1], [255, 255, 255]);
        assert_eq!(planet.amplitudes.len(), planet.frequencies.len());
    }

    #[test]
    fn test_load_or_create_writes_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.generation.grid_size = 64;
        config.planet.water_fraction = 0.3;
        config.debug.log_level = "debug".to_string();

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.planet.seed = 77;
        modified.save(dir.path()).unwrap();

        let reloaded = config.reload(dir.path()).unwrap();
        assert_eq!(reloaded.map(|c| c.planet.seed), Some(77));
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();
        assert!(config.reload(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_reload_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::default().reload(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }), "got {err:?}");
    }

    #[test]
    fn test_invalid_ron_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "{{not valid}}").unwrap();
        let err = Config::load_or_create(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { ref path, .. } if path.ends_with(CONFIG_FILE_NAME)), "got {err:?}");
    }

    #[test]
    fn test_write_error_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        std::fs::write(&blocker, "").unwrap();
        let err = Config::default().save(&blocker).unwrap_err();
        assert!(err.to_string().contains("not_a_dir"), "got {err}");
    }

    #[test]
    fn test_ron_comments_accepted() {
        let ron_str = "// planet settings\n(\n  // nothing overridden\n)";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_default_config_dir_ends_with_psphere() {
        if let Some(dir) = default_config_dir() {
            assert!(dir.ends_with("psphere"));
        }
    }
}
