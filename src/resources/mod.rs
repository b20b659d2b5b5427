pub mod config;
pub mod environment;
pub mod events;
pub mod turbulence;

pub use config::{GeoOrigin, SimulationConfig};
pub use environment::{
    AtmosphereConfig, AtmosphereType, Environment, EnvironmentConfig, StandardEnvironment,
    WindConfig, WindSample,
};
pub use events::{overload_channel, OverloadEvent, OverloadReceiver, OverloadSender};
pub use turbulence::{Turbulence, TurbulenceConfig};
