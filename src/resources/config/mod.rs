pub mod simulation;

pub use simulation::{GeoOrigin, SimulationConfig};
