pub mod aerodynamics;
pub mod controller;
pub mod ground;
pub mod physics;
pub mod propulsion;
mod update;

pub use aerodynamics::{sample_wind_gradient, AeroInput, CoefficientSet, FixedWing};
pub use controller::{ControllerHook, NoController};
pub use ground::{ContactContext, ContactReport, Hardpoint, HardpointCollection};
pub use physics::{Eom, HoldMode};
pub use propulsion::{NoPropulsion, Propulsion, SimpleThrust, SimpleThrustConfig};
pub use update::Fdm;
