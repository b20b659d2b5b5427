mod atmosphere;
mod wind;

pub use atmosphere::{AtmosphereConfig, AtmosphereType};
pub use wind::WindConfig;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::aircraft::config::ConfigError;
use crate::utils::GRAVITY;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub wind_model_config: WindConfig,
    pub atmosphere_config: AtmosphereConfig,
    /// Height of the flat terrain above the origin [m]
    #[serde(default)]
    pub terrain_height: f64,
    /// Gravitational acceleration at sea level [m/s²]
    #[serde(default = "default_gravity")]
    pub gravity: f64,
    /// Half-width of the square wind grid around the origin [m].
    /// Samples outside are flagged and taken from the grid edge.
    #[serde(default)]
    pub wind_grid_half_extent: Option<f64>,
}

fn default_gravity() -> f64 {
    GRAVITY
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            wind_model_config: WindConfig::Constant {
                velocity: Vector3::new(0.0, 0.0, 0.0),
            },
            atmosphere_config: AtmosphereConfig::default(),
            terrain_height: 0.0,
            gravity: GRAVITY,
            wind_grid_half_extent: None,
        }
    }
}

impl EnvironmentConfig {
    pub fn new(wind_config: WindConfig, atmosphere_config: AtmosphereConfig) -> Self {
        Self {
            wind_model_config: wind_config,
            atmosphere_config,
            ..Default::default()
        }
    }

    /// Constant horizontal wind of `wind_speed` [m/s] blowing towards `bearing` [rad].
    pub fn with_constant_wind(wind_speed: f64, bearing: f64) -> Self {
        let velocity = Vector3::new(wind_speed * bearing.cos(), wind_speed * bearing.sin(), 0.0);

        Self {
            wind_model_config: WindConfig::Constant { velocity },
            ..Default::default()
        }
    }

    pub fn with_logarithmic_wind(d: f64, z0: f64, u_star: f64, bearing: f64) -> Self {
        Self {
            wind_model_config: WindConfig::Logarithmic {
                d,
                z0,
                u_star,
                bearing,
            },
            ..Default::default()
        }
    }

    pub fn with_power_law_wind(u_r: f64, z_r: f64, bearing: f64, alpha: f64) -> Self {
        Self {
            wind_model_config: WindConfig::PowerLaw {
                u_r,
                z_r,
                bearing,
                alpha,
            },
            ..Default::default()
        }
    }

    /// Zero gravity, constant density, no wind. Used to isolate the dynamics.
    pub fn vacuum_like() -> Self {
        Self {
            atmosphere_config: AtmosphereConfig {
                model_type: AtmosphereType::Constant,
                ..Default::default()
            },
            gravity: 0.0,
            terrain_height: -1.0e6,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.gravity.is_finite() && self.gravity >= 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "gravity must not be negative, got {}",
                self.gravity
            )));
        }
        let atmosphere = &self.atmosphere_config;
        if !(atmosphere.sea_level_density > 0.0 && atmosphere.sea_level_temperature > 0.0) {
            return Err(ConfigError::ValidationError(
                "sea-level density and temperature must be positive".into(),
            ));
        }
        match self.wind_model_config {
            WindConfig::Logarithmic { z0, .. } if z0 <= 0.0 => Err(ConfigError::ValidationError(
                "logarithmic wind roughness length must be positive".into(),
            )),
            WindConfig::PowerLaw { z_r, .. } if z_r <= 0.0 => Err(ConfigError::ValidationError(
                "power-law reference height must be positive".into(),
            )),
            _ => Ok(()),
        }
    }
}
