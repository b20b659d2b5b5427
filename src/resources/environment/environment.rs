use nalgebra::Vector3;

use super::config::{AtmosphereType, EnvironmentConfig, WindConfig};
use crate::utils::{AIR_GAS_CONSTANT, EQUATORIAL_RADIUS, ISA_LAPSE_RATE, ISA_TROPOPAUSE};

/// von Kármán constant of the logarithmic wind profile.
const VON_KARMAN: f64 = 0.41;

/// Wind at one query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindSample {
    /// (north, east, down) [m/s]
    pub velocity: Vector3<f64>,
    /// The point lies outside the simulated wind field; `velocity` is the
    /// environment's fallback value.
    pub out_of_grid: bool,
}

impl WindSample {
    pub fn calm() -> Self {
        Self {
            velocity: Vector3::zeros(),
            out_of_grid: false,
        }
    }
}

/// World queries the flight model makes every substep.
///
/// All queries take `&self`, so one environment can serve several aircraft.
/// Terrain and wind are queried at local-frame positions relative to the
/// simulation origin. Gravity and density take the geodetic altitude above
/// the ellipsoid.
pub trait Environment {
    /// Terrain height below (north, east) [m].
    fn terrain_height(&self, north: f64, east: f64) -> f64;

    /// Mean wind at a local (north, east, down) position.
    fn wind(&self, position_local: &Vector3<f64>) -> WindSample;

    /// Gravitational acceleration at geodetic `altitude` [m/s²].
    fn gravity(&self, altitude: f64) -> f64;

    /// Air density at geodetic `altitude` [kg/m³].
    fn air_density(&self, altitude: f64) -> f64;
}

/// Flat terrain, analytic wind profile, ISA or constant density and
/// inverse-square gravity.
#[derive(Debug, Clone)]
pub struct StandardEnvironment {
    config: EnvironmentConfig,
}

impl Default for StandardEnvironment {
    fn default() -> Self {
        Self::new(EnvironmentConfig::default())
    }
}

impl StandardEnvironment {
    pub fn new(config: EnvironmentConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EnvironmentConfig {
        &self.config
    }

    fn profile(&self, height: f64) -> Vector3<f64> {
        let horizontal = |speed: f64, bearing: f64| {
            Vector3::new(speed * bearing.cos(), speed * bearing.sin(), 0.0)
        };
        match self.config.wind_model_config {
            WindConfig::Constant { velocity } => velocity,
            WindConfig::Logarithmic {
                d,
                z0,
                u_star,
                bearing,
            } => {
                let h = height - d;
                if h <= z0 {
                    Vector3::zeros()
                } else {
                    horizontal(u_star / VON_KARMAN * (h / z0).ln(), bearing)
                }
            }
            WindConfig::PowerLaw {
                u_r,
                z_r,
                bearing,
                alpha,
            } => {
                if height <= 0.0 {
                    Vector3::zeros()
                } else {
                    horizontal(u_r * (height / z_r).powf(alpha), bearing)
                }
            }
        }
    }
}

impl Environment for StandardEnvironment {
    fn terrain_height(&self, _north: f64, _east: f64) -> f64 {
        self.config.terrain_height
    }

    fn wind(&self, position_local: &Vector3<f64>) -> WindSample {
        let mut position = *position_local;
        let mut out_of_grid = false;
        if let Some(extent) = self.config.wind_grid_half_extent {
            if position.x.abs() > extent || position.y.abs() > extent {
                out_of_grid = true;
                position.x = position.x.clamp(-extent, extent);
                position.y = position.y.clamp(-extent, extent);
            }
        }
        // profiles are defined over height above ground
        let height = -position.z - self.config.terrain_height;
        WindSample {
            velocity: self.profile(height),
            out_of_grid,
        }
    }

    fn gravity(&self, altitude: f64) -> f64 {
        let ratio = EQUATORIAL_RADIUS / (EQUATORIAL_RADIUS + altitude.max(0.0));
        self.config.gravity * ratio * ratio
    }

    fn air_density(&self, altitude: f64) -> f64 {
        let atmosphere = &self.config.atmosphere_config;
        match atmosphere.model_type {
            AtmosphereType::Constant => atmosphere.sea_level_density,
            AtmosphereType::Standard => {
                let g = self.config.gravity;
                let t0 = atmosphere.sea_level_temperature;
                let h = altitude.clamp(0.0, 2.0 * ISA_TROPOPAUSE);
                let troposphere = |h: f64| {
                    let t = t0 + ISA_LAPSE_RATE * h;
                    atmosphere.sea_level_density
                        * (t / t0).powf(-g / (ISA_LAPSE_RATE * AIR_GAS_CONSTANT) - 1.0)
                };
                if h <= ISA_TROPOPAUSE {
                    troposphere(h)
                } else {
                    let t_trop = t0 + ISA_LAPSE_RATE * ISA_TROPOPAUSE;
                    troposphere(ISA_TROPOPAUSE)
                        * (-g * (h - ISA_TROPOPAUSE) / (AIR_GAS_CONSTANT * t_trop)).exp()
                }
            }
        }
    }
}
