use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::math::{EulerAngles, Geodetic};
use crate::utils::{flight_path_angle, heading_from_velocity, wrap_two_pi};

/// Full motion state of one aircraft.
///
/// Frames are carried by the field names: `_local` is north-east-down fixed
/// at the simulation origin, `_body` is x-forward, y-right, z-down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KinematicState {
    /// Ground-relative velocity of the centre of gravity [m/s]
    pub velocity_local: Vector3<f64>,
    /// Ground-relative velocity in body axes (u, v, w) [m/s]
    pub velocity_body: Vector3<f64>,
    /// Body angular rates (p, q, r) [rad/s]
    pub omega_body: Vector3<f64>,
    /// Position relative to the origin (north, east, down) [m]
    pub position_local: Vector3<f64>,

    /// Geocentric latitude [rad]
    pub latitude: f64,
    /// Longitude [rad]
    pub longitude: f64,
    /// Distance from the earth centre [m]
    pub radius: f64,
    pub geodetic: Geodetic,

    pub attitude: EulerAngles,

    /// Accelerations from the last `accel` call
    pub accel_local: Vector3<f64>,
    /// Specific force felt in body axes (what an accelerometer reads) [m/s²]
    pub accel_body: Vector3<f64>,
    pub omega_dot_body: Vector3<f64>,

    /// Environment samples at the current altitude
    pub gravity: f64,
    pub density: f64,
}

impl KinematicState {
    /// Height above the local origin [m].
    pub fn altitude(&self) -> f64 {
        -self.position_local.z
    }

    pub fn ground_speed(&self) -> f64 {
        self.velocity_local.xy().norm()
    }

    /// Direction of travel over the ground in [0, 2π) [rad].
    pub fn track(&self) -> f64 {
        wrap_two_pi(heading_from_velocity(&self.velocity_local))
    }

    /// Climb angle of the ground-relative velocity, positive up [rad].
    pub fn flight_path_angle(&self) -> f64 {
        flight_path_angle(&self.velocity_local)
    }
}

/// Initial conditions for an aircraft, relative to the simulation origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartState {
    /// (north, east, down) [m]
    pub position_local: Vector3<f64>,
    /// (u, v, w) [m/s]
    pub velocity_body: Vector3<f64>,
    /// (p, q, r) [rad/s]
    pub omega_body: Vector3<f64>,
    pub attitude: EulerAngles,
}

impl Default for StartState {
    fn default() -> Self {
        Self {
            position_local: Vector3::zeros(),
            velocity_body: Vector3::zeros(),
            omega_body: Vector3::zeros(),
            attitude: EulerAngles::default(),
        }
    }
}

impl StartState {
    /// Level flight at `altitude` with forward `airspeed`, heading `psi`.
    pub fn level_flight(altitude: f64, airspeed: f64, psi: f64) -> Self {
        Self {
            position_local: Vector3::new(0.0, 0.0, -altitude),
            velocity_body: Vector3::new(airspeed, 0.0, 0.0),
            attitude: EulerAngles::new(0.0, 0.0, psi),
            ..Default::default()
        }
    }
}
