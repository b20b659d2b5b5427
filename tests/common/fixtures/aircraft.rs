use flyer_fdm::components::{AircraftConfig, StartState};
use flyer_fdm::resources::SimulationConfig;
use nalgebra::Vector3;

/// Substep of 1/960 s, eight substeps per 1/120 s frame.
pub fn fine_sim() -> SimulationConfig {
    SimulationConfig {
        dt: 1.0 / 960.0,
        multiloop: 8,
        ..Default::default()
    }
}

/// Substep of 1/240 s, two substeps per 1/120 s frame.
pub fn frame_sim() -> SimulationConfig {
    SimulationConfig {
        dt: 1.0 / 240.0,
        multiloop: 2,
        ..Default::default()
    }
}

/// Block at rest with its skids `height` above flat ground at zero.
pub fn block_above_ground(height: f64) -> (AircraftConfig, StartState) {
    let config = AircraftConfig::test_block();
    let skid_depth = config.hardpoints[0].offset.z;
    let start = StartState {
        position_local: Vector3::new(0.0, 0.0, -(height + skid_depth)),
        ..Default::default()
    };
    (config, start)
}

pub fn trainer_cruise(altitude: f64, airspeed: f64) -> (AircraftConfig, StartState) {
    (
        AircraftConfig::trainer(),
        StartState::level_flight(altitude, airspeed, 0.0),
    )
}
