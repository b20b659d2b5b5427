pub mod air_data;
pub mod aircraft;
pub mod controls;
pub mod physics;
pub mod spatial;

pub use air_data::AirData;
pub use aircraft::{
    AeroCoefficients, AircraftConfig, AircraftGeometry, AircraftSource, AircraftType,
    AirframeConfig, ConfigError, FrictionConfig, HardpointConfig, MassModel,
};
pub use controls::{ControlChannel, ControlInputs, AUX_CHANNELS};
pub use physics::{ForceBreakdown, ForceCategory, ForceMoment};
pub use spatial::{KinematicState, StartState};
