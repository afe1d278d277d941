//! Run configuration, loadable from JSON.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::domain::{GridError, Resolution, presets};

/// Top-level simulation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Grid size. Derived from the window width when absent.
    pub resolution: Option<Resolution>,
    /// Cube edge length in world units.
    pub cell_size: f32,
    /// Seconds between generations.
    pub step_interval_secs: f32,
    /// Probability for each cell to start alive.
    pub initial_density: f64,
    /// RNG seed for the initial population; random when absent.
    pub seed: Option<u64>,
    /// Start from an empty grid with this preset centered instead of noise.
    pub pattern: Option<String>,
    /// Camera roll applied every frame, in radians.
    pub camera_spin: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            resolution: None,
            cell_size: 0.9,
            step_interval_secs: 0.15,
            initial_density: 0.15,
            seed: None,
            pattern: None,
            camera_spin: 0.0005,
        }
    }
}

impl SimulationConfig {
    /// Load and validate a JSON configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Grid size to use, falling back to one derived from the viewport
    pub fn resolve_resolution(&self, viewport_width: f32) -> Resolution {
        self.resolution
            .unwrap_or_else(|| Resolution::from_viewport_width(viewport_width))
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.cell_size > 0.0) {
            return Err(ConfigError::InvalidCellSize(self.cell_size));
        }
        if !(self.step_interval_secs > 0.0) {
            return Err(ConfigError::InvalidStepInterval(self.step_interval_secs));
        }
        if !(0.0..=1.0).contains(&self.initial_density) {
            return Err(ConfigError::InvalidDensity(self.initial_density));
        }
        if let Some(name) = &self.pattern {
            if presets::find(name).is_none() {
                return Err(ConfigError::UnknownPattern(name.clone()));
            }
        }
        Ok(())
    }
}

/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid grid: {0}")]
    Grid(#[from] GridError),
    #[error("Cell size must be positive, got {0}")]
    InvalidCellSize(f32),
    #[error("Step interval must be positive, got {0}")]
    InvalidStepInterval(f32),
    #[error("Initial density must lie in [0, 1], got {0}")]
    InvalidDensity(f64),
    #[error("Unknown pattern: {0}")]
    UnknownPattern(String),
    #[error("Error reading config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error parsing config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_degenerate_resolution() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "resolution": {{ "x": 0, "y": 20 }} }}"#).unwrap();

        let err = SimulationConfig::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("0x20"), "{}", err);
    }

    #[test]
    fn test_rejects_bad_numbers() {
        let bad_interval = SimulationConfig { step_interval_secs: 0.0, ..Default::default() };
        assert!(matches!(bad_interval.validate(), Err(ConfigError::InvalidStepInterval(_))));

        let nan_size = SimulationConfig { cell_size: f32::NAN, ..Default::default() };
        assert!(matches!(nan_size.validate(), Err(ConfigError::InvalidCellSize(_))));

        let bad_density = SimulationConfig { initial_density: 1.5, ..Default::default() };
        assert!(matches!(bad_density.validate(), Err(ConfigError::InvalidDensity(_))));
    }

    #[test]
    fn test_rejects_unknown_pattern() {
        let config = SimulationConfig { pattern: Some("unicorn".into()), ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::UnknownPattern(_))));
    }

    #[test]
    fn test_resolution_fallback() {
        let config = SimulationConfig::default();
        assert_eq!(config.resolve_resolution(1800.0), Resolution::new(60, 60).unwrap());

        let fixed = SimulationConfig {
            resolution: Some(Resolution::new(12, 8).unwrap()),
            ..Default::default()
        };
        assert_eq!(fixed.resolve_resolution(1800.0), Resolution::new(12, 8).unwrap());
    }

    #[test]
    fn test_load_partial_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "resolution": {{ "x": 32, "y": 24 }}, "pattern": "glider", "seed": 9 }}"#
        )
        .unwrap();

        let config = SimulationConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.resolution, Some(Resolution::new(32, 24).unwrap()));
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.step_interval_secs, 0.15);
    }

    #[test]
    fn test_load_reports_parse_and_io_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            SimulationConfig::from_json_file(file.path()),
            Err(ConfigError::Parse(_))
        ));

        assert!(matches!(
            SimulationConfig::from_json_file("/nonexistent/cube_life.json"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_round_trips_through_json() {
        let config = SimulationConfig { seed: Some(3), ..Default::default() };
        let text = serde_json::to_string(&config).unwrap();
        let back: SimulationConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
