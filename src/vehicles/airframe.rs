use super::traits::AeroModel;
use crate::components::aircraft::config::AirframeConfig;
use crate::components::ForceMoment;
use crate::systems::aerodynamics::{AeroInput, FixedWing};

/// Aerodynamic model chosen by the aircraft configuration.
#[derive(Debug, Clone)]
pub enum Airframe {
    FixedWing(FixedWing),
    /// Produces no loads.
    Inert,
}

impl Airframe {
    pub fn from_config(config: &AirframeConfig) -> Self {
        match config {
            AirframeConfig::FixedWing {
                geometry,
                coefficients,
            } => Airframe::FixedWing(FixedWing::new(*geometry, *coefficients)),
            AirframeConfig::Inert => Airframe::Inert,
        }
    }

    pub fn as_fixed_wing(&self) -> Option<&FixedWing> {
        match self {
            Airframe::FixedWing(model) => Some(model),
            Airframe::Inert => None,
        }
    }
}

impl AeroModel for Airframe {
    fn forces(&self, input: &AeroInput) -> ForceMoment {
        match self {
            Airframe::FixedWing(model) => AeroModel::forces(model, input),
            Airframe::Inert => ForceMoment::zero(),
        }
    }

    fn characteristic_size(&self) -> Option<f64> {
        match self {
            Airframe::FixedWing(model) => model.characteristic_size(),
            Airframe::Inert => None,
        }
    }
}
