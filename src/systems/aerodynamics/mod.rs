mod fixed_wing;
mod wind_gradient;

pub use fixed_wing::{CoefficientSet, FixedWing, STATION_WEIGHTS};
pub use wind_gradient::sample_wind_gradient;

use nalgebra::{Matrix3, Vector3};

use crate::components::{AirData, ControlInputs};

/// Everything an aerodynamic model sees in one substep.
#[derive(Debug, Clone, Copy)]
pub struct AeroInput<'a> {
    pub air: &'a AirData,
    /// Body rates (p, q, r) [rad/s]
    pub omega_body: Vector3<f64>,
    /// Body-frame wind gradient from [`sample_wind_gradient`] [1/s]
    pub wind_gradient: &'a Matrix3<f64>,
    pub controls: &'a ControlInputs,
}
