mod config;
mod environment;

pub use config::{AtmosphereConfig, AtmosphereType, EnvironmentConfig, WindConfig};
pub use environment::{Environment, StandardEnvironment, WindSample};
