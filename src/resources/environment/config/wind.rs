use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Mean wind profile. Bearings are the direction the wind blows towards,
/// clockwise from north [rad].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WindConfig {
    Constant {
        /// (north, east, down) [m/s]
        velocity: Vector3<f64>,
    },
    /// Logarithmic boundary layer, u = u*/κ · ln((h − d)/z0).
    Logarithmic {
        /// Zero-plane displacement [m]
        d: f64,
        /// Roughness length [m]
        z0: f64,
        /// Friction velocity [m/s]
        u_star: f64,
        bearing: f64,
    },
    /// Power law, u = u_r · (h/z_r)^α.
    PowerLaw {
        /// Reference speed [m/s]
        u_r: f64,
        /// Reference height [m]
        z_r: f64,
        bearing: f64,
        alpha: f64,
    },
}
