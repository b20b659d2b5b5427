mod aero_coef;
mod aircraft;
mod geometry;
mod hardpoints;
mod loader;
mod mass;

pub use aero_coef::{
    AeroCoefficients, DragCoefficients, LiftCoefficients, PitchCoefficients, RollCoefficients,
    SideForceCoefficients, StallCoefficients, YawCoefficients,
};
pub use aircraft::{AircraftConfig, AircraftSource, AircraftType, AirframeConfig};
pub use geometry::AircraftGeometry;
pub use hardpoints::{BrakeConfig, FrictionConfig, HardpointConfig, HingeConfig, SteeringConfig};
pub use loader::{load_file, parse_str, save_file, ConfigError, ConfigFormat};
pub use mass::MassModel;
