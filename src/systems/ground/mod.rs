//! Terrain contact through spring-damper hardpoints.

mod collection;
mod friction;
mod hardpoint;

pub use collection::HardpointCollection;
pub use friction::{forward_coefficient, friction_force, friction_ramp, side_coefficient};
pub use hardpoint::{ContactContext, ContactReport, Hardpoint};
