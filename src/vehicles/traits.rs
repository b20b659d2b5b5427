use crate::components::ForceMoment;
use crate::systems::aerodynamics::{AeroInput, FixedWing};

/// An aerodynamic model: turns the air data of one substep into loads.
///
/// Fixed-wing is the model shipped here. Rotor-craft models plug in as
/// further implementations.
pub trait AeroModel {
    /// Aerodynamic force and moment about the centre of gravity, body axes.
    fn forces(&self, input: &AeroInput) -> ForceMoment;

    /// Length used to space the wind-gradient samples; `None` skips sampling.
    fn characteristic_size(&self) -> Option<f64>;
}

impl AeroModel for FixedWing {
    fn forces(&self, input: &AeroInput) -> ForceMoment {
        FixedWing::forces(self, input)
    }

    fn characteristic_size(&self) -> Option<f64> {
        Some(self.geometry().characteristic_size())
    }
}
