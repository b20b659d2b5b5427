//! Six-degree-of-freedom flight dynamics for fixed-wing aircraft.
//!
//! An [`Fdm`] owns the state of one aircraft. The host supplies the world
//! through an [`Environment`], thrust through a [`Propulsion`] and optional
//! per-substep input shaping through a [`ControllerHook`], then calls
//! [`Fdm::update`] once per frame.

pub mod components;
pub mod math;
pub mod resources;
pub mod systems;
pub mod utils;
pub mod vehicles;

pub use components::{
    AirData, AircraftConfig, ControlChannel, ControlInputs, ForceBreakdown, ForceMoment,
    KinematicState, StartState,
};
pub use resources::{
    overload_channel, Environment, EnvironmentConfig, OverloadEvent, SimulationConfig,
    StandardEnvironment, WindSample,
};
pub use systems::{ControllerHook, Fdm, HoldMode, NoController, NoPropulsion, Propulsion};
pub use utils::SimError;
