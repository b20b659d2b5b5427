use flyer_fdm::resources::{EnvironmentConfig, StandardEnvironment};

/// Flat ground at zero, still air, standard gravity and ISA density.
pub fn calm_environment() -> StandardEnvironment {
    StandardEnvironment::new(EnvironmentConfig::default())
}

/// No gravity, constant sea-level density, ground far below.
pub fn weightless_environment() -> StandardEnvironment {
    StandardEnvironment::new(EnvironmentConfig::vacuum_like())
}

pub fn windy_environment(speed: f64, bearing: f64) -> StandardEnvironment {
    StandardEnvironment::new(EnvironmentConfig::with_constant_wind(speed, bearing))
}
