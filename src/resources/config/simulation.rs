use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::components::aircraft::config::{load_file, save_file, ConfigError};
use crate::resources::TurbulenceConfig;

/// Geodetic position of the local north-east-down origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoOrigin {
    /// Geodetic latitude [rad]
    pub latitude: f64,
    /// Longitude [rad]
    pub longitude: f64,
    /// Height of the origin above the ellipsoid [m]
    pub altitude: f64,
}

impl Default for GeoOrigin {
    fn default() -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
            altitude: 0.0,
        }
    }
}

/// Parameters of the update loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Fixed substep [s]
    pub dt: f64,
    /// Substeps per `update` call
    pub multiloop: u32,
    /// Gust generator; `None` disables turbulence.
    pub turbulence: Option<TurbulenceConfig>,
    /// Master seed for every random stream of the run.
    pub seed: u64,
    pub origin: GeoOrigin,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            dt: 1.0 / 120.0,
            multiloop: 1,
            turbulence: None,
            seed: 42,
            origin: GeoOrigin::default(),
        }
    }
}

impl SimulationConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config: Self = load_file(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        save_file(self, path)
    }

    /// Simulated time covered by one `update` call [s].
    pub fn frame_time(&self) -> f64 {
        self.dt * self.multiloop as f64
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "dt must be positive, got {}",
                self.dt
            )));
        }
        if self.multiloop == 0 {
            return Err(ConfigError::ValidationError(
                "multiloop must be at least 1".into(),
            ));
        }
        if self.origin.latitude.abs() > std::f64::consts::FRAC_PI_2 {
            return Err(ConfigError::ValidationError(format!(
                "origin latitude {} is outside [-π/2, π/2]",
                self.origin.latitude
            )));
        }
        if let Some(turbulence) = &self.turbulence {
            turbulence.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::Builder;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.dt, 1.0 / 120.0);
        assert_eq!(config.multiloop, 1);
        assert!(config.turbulence.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_save_load() -> Result<(), Box<dyn std::error::Error>> {
        let config = SimulationConfig {
            dt: 0.02,
            multiloop: 5,
            turbulence: Some(TurbulenceConfig::default()),
            ..Default::default()
        };
        let temp_file = Builder::new().suffix(".yaml").tempfile()?;

        config.save(temp_file.path())?;
        let loaded = SimulationConfig::load(temp_file.path())?;
        assert_eq!(loaded, config);
        assert!((loaded.frame_time() - 0.1).abs() < 1e-12);

        Ok(())
    }

    #[test]
    fn test_invalid_config_rejected() {
        let zero_loops = SimulationConfig {
            multiloop: 0,
            ..Default::default()
        };
        assert!(zero_loops.validate().is_err());

        let negative_dt = SimulationConfig {
            dt: -0.01,
            ..Default::default()
        };
        assert!(negative_dt.validate().is_err());

        assert!(SimulationConfig::load("nonexistent_file.yaml").is_err());
    }
}
