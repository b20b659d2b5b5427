//! Propulsion as seen from the flight model.
//!
//! The engine, propeller and energy-store chain lives with the host. The
//! flight model only asks for the resulting loads once per substep.

mod thrust;

pub use thrust::{SimpleThrust, SimpleThrustConfig};

use nalgebra::Vector3;

use crate::components::{ControlInputs, ForceMoment};

pub trait Propulsion {
    /// Advances the propulsion state by `dt` and returns its loads about the
    /// centre of gravity, body axes.
    ///
    /// `air_velocity_body` is the velocity of the aircraft relative to the
    /// air, body axes [m/s].
    fn update(
        &mut self,
        dt: f64,
        inputs: &ControlInputs,
        air_velocity_body: &Vector3<f64>,
    ) -> ForceMoment;

    /// Shaft speed [rad/s].
    fn rotational_speed(&self) -> f64;

    /// Remaining energy or fuel as a fraction of full [0, 1].
    fn remaining_capacity(&self) -> f64;
}

/// Glider: no thrust, nothing to run out of.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPropulsion;

impl Propulsion for NoPropulsion {
    fn update(&mut self, _dt: f64, _inputs: &ControlInputs, _air: &Vector3<f64>) -> ForceMoment {
        ForceMoment::zero()
    }

    fn rotational_speed(&self) -> f64 {
        0.0
    }

    fn remaining_capacity(&self) -> f64 {
        1.0
    }
}
