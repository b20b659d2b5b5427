use approx::assert_relative_eq;
use flyer_fdm::components::{AircraftConfig, FrictionConfig};
use flyer_fdm::resources::overload_channel;
use flyer_fdm::systems::ground::side_coefficient;
use flyer_fdm::systems::Fdm;
use flyer_fdm::{ControlInputs, StartState};
use nalgebra::Vector3;

use crate::common::{
    assert_state_finite, assert_vec_eq, block_above_ground, calm_environment, frame_sim,
    init_tracing, run_frames,
};

#[test]
fn test_dropped_block_bounces_and_settles() {
    init_tracing();
    let env = calm_environment();
    let (config, start) = block_above_ground(0.5);
    let skid_depth = config.hardpoints[0].offset.z;
    let stiffness: f64 = config.hardpoints.iter().map(|h| h.spring_constant).sum();
    let weight = config.mass.mass * 9.80665;
    let mut fdm = Fdm::new(config, frame_sim(), &start, &env).unwrap();

    let states = run_frames(&mut fdm, &env, ControlInputs::default(), 600);
    for state in &states {
        assert_state_finite(state);
    }

    // apex at every rise-to-fall reversal; z points down
    let rest = skid_depth - weight / stiffness;
    let apexes: Vec<f64> = states
        .windows(2)
        .filter(|pair| pair[0].velocity_local.z < 0.0 && pair[1].velocity_local.z >= 0.0)
        .map(|pair| pair[1].altitude())
        .filter(|&altitude| altitude > rest + 1e-4)
        .collect();
    assert!(apexes.len() >= 3, "apexes {apexes:?}");
    for pair in apexes.windows(2) {
        assert!(pair[1] < pair[0], "bounce gained height: {apexes:?}");
    }
    // skids leave the ground but the energy lost keeps the bounce below the drop
    assert!(apexes[0] > skid_depth + 0.05, "apexes {apexes:?}");
    assert!(apexes[0] < skid_depth + 0.35, "apexes {apexes:?}");

    let last = states.last().unwrap();
    assert_relative_eq!(last.altitude(), rest, epsilon = 1e-3);
    assert!(last.velocity_local.norm() < 1e-3);
    assert_vec_eq(&last.omega_body, &Vector3::zeros(), 1e-9);
    assert_eq!(fdm.hardpoints().contacts(), 4);
}

#[test]
fn test_hard_landing_reports_each_skid_once() {
    let env = calm_environment();
    let (mut config, start) = block_above_ground(2.9);
    for hardpoint in &mut config.hardpoints {
        hardpoint.max_force = 50.0;
    }
    let (tx, rx) = overload_channel();
    let mut fdm = Fdm::new(config, frame_sim(), &start, &env)
        .unwrap()
        .with_overload_events(tx);

    run_frames(&mut fdm, &env, ControlInputs::default(), 600);

    let events = rx.drain();
    let mut indices: Vec<usize> = events.iter().map(|e| e.hardpoint).collect();
    indices.sort_unstable();
    assert_eq!(indices, vec![0, 1, 2, 3], "events: {events:?}");
    for event in &events {
        assert_eq!(event.aircraft, fdm.id());
        assert!(event.magnitude > event.limit);
    }
}

#[test]
fn test_block_resting_above_limit_reports_each_skid_once() {
    let env = calm_environment();
    // skids pressed close to their static sag so the block barely moves
    let (mut config, start) = block_above_ground(-0.006);
    for hardpoint in &mut config.hardpoints {
        hardpoint.max_force = 1.0;
    }
    let (tx, rx) = overload_channel();
    let mut fdm = Fdm::new(config, frame_sim(), &start, &env)
        .unwrap()
        .with_overload_events(tx);

    let states = run_frames(&mut fdm, &env, ControlInputs::default(), 240);
    assert!(states.iter().all(|s| s.velocity_local.norm() < 0.05));

    let events = rx.drain();
    let mut indices: Vec<usize> = events.iter().map(|e| e.hardpoint).collect();
    indices.sort_unstable();
    assert_eq!(indices, vec![0, 1, 2, 3], "events: {events:?}");
    assert!(fdm.hardpoints().hardpoints().iter().all(|hp| hp.is_overloaded()));
}

#[test]
fn test_brakes_stop_a_rolling_trainer() {
    let env = calm_environment();
    let config = AircraftConfig::trainer();
    let wheel_depth = config.hardpoints[0].offset.z;
    let start = StartState {
        position_local: Vector3::new(0.0, 0.0, -wheel_depth),
        velocity_body: Vector3::new(5.0, 0.0, 0.0),
        ..Default::default()
    };

    let roll = |brake: f64| {
        let mut fdm = Fdm::new(config.clone(), frame_sim(), &start, &env).unwrap();
        let inputs = ControlInputs {
            brake,
            ..Default::default()
        };
        let states = run_frames(&mut fdm, &env, inputs, 240);
        *states.last().unwrap()
    };

    let coasting = roll(0.0);
    let braked = roll(1.0);
    assert_state_finite(&braked);
    assert!(coasting.ground_speed() > 2.5, "coasting {}", coasting.ground_speed());
    assert!(braked.ground_speed() < 1.0, "braked {}", braked.ground_speed());
    // straight-line braking does not yaw the aircraft
    assert_relative_eq!(braked.velocity_local.y, 0.0, epsilon = 1e-6);
    assert_relative_eq!(coasting.track(), 0.0, epsilon = 1e-9);
    assert!(coasting.flight_path_angle().abs() < 0.01);
}

#[test]
fn test_side_friction_has_no_jumps() {
    let friction = FrictionConfig::default();
    let step = 1e-4;
    let slope = friction.sliding / (friction.skid_speed - friction.breakout_speed);
    let mut previous = side_coefficient(0.0, &friction);
    let mut speed = step;
    while speed < 2.0 * friction.skid_speed {
        let current = side_coefficient(speed, &friction);
        assert!(
            (current - previous).abs() <= slope * step + 1e-12,
            "jump of {} at {speed} m/s",
            current - previous
        );
        previous = current;
        speed += step;
    }
}
