pub mod config;

pub use config::{
    AeroCoefficients, AircraftConfig, AircraftGeometry, AircraftSource, AircraftType,
    AirframeConfig, BrakeConfig, ConfigError, FrictionConfig, HardpointConfig, HingeConfig,
    MassModel, SteeringConfig,
};
