use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Air-relative quantities derived by the auxiliary step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirData {
    /// True airspeed [m/s]
    pub true_airspeed: f64,
    /// Angle of attack [rad]
    pub alpha: f64,
    /// Sideslip angle [rad]
    pub beta: f64,
    /// Air density [kg/m³]
    pub density: f64,
    /// Dynamic pressure [Pa]
    pub dynamic_pressure: f64,
    /// Air-relative velocity in body axes [m/s]
    pub relative_velocity: Vector3<f64>,
    /// Wind velocity in the local frame [m/s]
    pub wind_velocity: Vector3<f64>,
}

impl Default for AirData {
    fn default() -> Self {
        Self {
            true_airspeed: 0.0,
            alpha: 0.0,
            beta: 0.0,
            density: crate::utils::ISA_SEA_LEVEL_DENSITY,
            dynamic_pressure: 0.0,
            relative_velocity: Vector3::zeros(),
            wind_velocity: Vector3::zeros(),
        }
    }
}

impl AirData {
    /// Derives airspeed and flow angles from the body-relative air velocity.
    ///
    /// Angle of attack is zero when the forward component is zero and
    /// sideslip is zero when the airspeed is zero.
    pub fn from_relative_velocity(
        relative_velocity: Vector3<f64>,
        wind_velocity: Vector3<f64>,
        density: f64,
    ) -> Self {
        let airspeed = relative_velocity.norm();

        let alpha = if relative_velocity.x == 0.0 {
            0.0
        } else {
            relative_velocity.z.atan2(relative_velocity.x)
        };
        let beta = if airspeed == 0.0 {
            0.0
        } else {
            (relative_velocity.y / airspeed).clamp(-1.0, 1.0).asin()
        };

        Self {
            true_airspeed: airspeed,
            alpha,
            beta,
            density,
            dynamic_pressure: 0.5 * density * airspeed * airspeed,
            relative_velocity,
            wind_velocity,
        }
    }
}
