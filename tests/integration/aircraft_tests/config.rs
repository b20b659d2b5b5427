use flyer_fdm::components::aircraft::config::save_file;
use flyer_fdm::components::{
    AircraftConfig, AircraftSource, AircraftType, AirframeConfig, ConfigError,
};
use flyer_fdm::resources::SimulationConfig;
use flyer_fdm::systems::Fdm;
use flyer_fdm::{SimError, StartState};
use pretty_assertions::assert_eq;
use tempfile::Builder;

use crate::common::calm_environment;

#[test]
fn test_aircraft_file_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    for suffix in [".yaml", ".json"] {
        let file = Builder::new().suffix(suffix).tempfile()?;
        let config = AircraftConfig::trainer();
        save_file(&config, file.path())?;

        let loaded = AircraftConfig::new(AircraftSource::File(file.path().to_path_buf()))?;
        assert_eq!(loaded, config);
    }
    Ok(())
}

#[test]
fn test_invalid_hardpoint_in_file_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let file = Builder::new().suffix(".yaml").tempfile()?;
    let mut config = AircraftConfig::test_block();
    config.hardpoints[2].spring_constant = -10.0;
    save_file(&config, file.path())?;

    match AircraftConfig::from_file(file.path()) {
        Err(ConfigError::ValidationError(message)) => assert!(message.contains("rear_left")),
        other => panic!("expected a validation error, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_unknown_extension_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let file = Builder::new().suffix(".toml").tempfile()?;
    assert!(matches!(
        AircraftConfig::from_file(file.path()),
        Err(ConfigError::UnsupportedFormat(_))
    ));
    Ok(())
}

#[test]
fn test_simulation_file_feeds_the_model() -> Result<(), Box<dyn std::error::Error>> {
    let file = Builder::new().suffix(".yaml").tempfile()?;
    std::fs::write(file.path(), "dt: 0.005\nmultiloop: 4\nseed: 11\n")?;
    let sim = SimulationConfig::load(file.path())?;
    assert_eq!(sim.multiloop, 4);
    assert_eq!(sim.frame_time(), 0.02);

    let env = calm_environment();
    let aircraft = AircraftConfig::new(AircraftSource::Programmed(AircraftType::Trainer))?;
    let start = StartState::level_flight(100.0, 30.0, 0.0);
    let fdm = Fdm::new(aircraft, sim, &start, &env)?;
    assert_eq!(fdm.simulation().seed, 11);
    Ok(())
}

#[test]
fn test_bad_timestep_surfaces_as_sim_error() {
    let env = calm_environment();
    let sim = SimulationConfig {
        dt: 0.0,
        ..Default::default()
    };
    let result = Fdm::new(AircraftConfig::trainer(), sim, &StartState::default(), &env);
    assert!(matches!(result, Err(SimError::Config(ConfigError::ValidationError(_)))));
}

#[test]
fn test_nan_stall_limit_fails_construction() {
    let env = calm_environment();
    let mut aircraft = AircraftConfig::trainer();
    if let AirframeConfig::FixedWing { coefficients, .. } = &mut aircraft.airframe {
        coefficients.lift.c_l_max = f64::NAN;
    }
    let start = StartState::level_flight(100.0, 30.0, 0.0);
    let result = Fdm::new(aircraft, SimulationConfig::default(), &start, &env);
    match result {
        Err(SimError::Config(ConfigError::ValidationError(message))) => {
            assert!(message.contains("lift.c_l_max"))
        }
        other => panic!("expected a validation error, got {other:?}"),
    }
}

#[test]
fn test_nan_aileron_derivative_fails_validation() {
    let mut aircraft = AircraftConfig::trainer();
    if let AirframeConfig::FixedWing { coefficients, .. } = &mut aircraft.airframe {
        coefficients.roll.c_l_deltaa = f64::NAN;
    }
    assert!(matches!(aircraft.validate(), Err(ConfigError::ValidationError(_))));
}
