use approx::assert_relative_eq;
use flyer_fdm::components::{AircraftConfig, AirframeConfig};
use flyer_fdm::math::{EulerAngles, QuaternionState};
use flyer_fdm::resources::{SimulationConfig, TurbulenceConfig};
use flyer_fdm::systems::{Fdm, FixedWing, NoController, SimpleThrust, SimpleThrustConfig};
use flyer_fdm::vehicles::{AeroModel, Airframe};
use flyer_fdm::{AirData, ControlInputs, StartState};
use nalgebra::{Matrix3, Vector3};
use pretty_assertions::assert_eq;

use crate::common::{
    assert_state_finite, assert_unit_quaternion, calm_environment, fine_sim, frame_sim,
    init_tracing, run_frames, trainer_cruise, weightless_environment, windy_environment,
};

#[test]
fn test_idle_aircraft_stays_put() {
    init_tracing();
    let env = weightless_environment();
    let config = AircraftConfig::test_block();
    let start = StartState::default();
    let mut fdm = Fdm::new(config, frame_sim(), &start, &env).unwrap();
    let initial = *fdm.state();

    let states = run_frames(&mut fdm, &env, ControlInputs::default(), 1200);
    let last = states.last().unwrap();

    assert_eq!(last.velocity_local, Vector3::zeros());
    assert_eq!(last.omega_body, Vector3::zeros());
    assert_eq!(last.position_local, initial.position_local);
    assert_eq!(last.latitude, initial.latitude);
    assert_eq!(last.longitude, initial.longitude);
    assert_relative_eq!(last.attitude.phi, 0.0, epsilon = 1e-12);
    assert_relative_eq!(last.attitude.theta, 0.0, epsilon = 1e-12);
}

#[test]
fn test_quaternion_stays_normalised_while_tumbling() {
    let env = weightless_environment();
    let config = AircraftConfig::test_block();
    let start = StartState {
        omega_body: Vector3::new(1.0, -0.5, 0.3),
        ..Default::default()
    };
    let mut fdm = Fdm::new(config, frame_sim(), &start, &env).unwrap();

    for state in run_frames(&mut fdm, &env, ControlInputs::default(), 6000) {
        assert_state_finite(&state);
    }
    assert_unit_quaternion(&fdm, 1e-9);
    // symmetric inertia: no torque-free precession
    assert_relative_eq!(fdm.state().omega_body, start.omega_body, epsilon = 1e-9);
}

#[test]
fn test_euler_angles_survive_the_quaternion() {
    let angles = EulerAngles::new(0.4, -0.3, 5.5);
    let back = QuaternionState::from_euler(angles).euler();
    assert_relative_eq!(back.phi, angles.phi, epsilon = 1e-12);
    assert_relative_eq!(back.theta, angles.theta, epsilon = 1e-12);
    assert_relative_eq!(back.psi, angles.psi, epsilon = 1e-12);
}

#[test]
fn test_full_aileron_roll_rate_settles_at_damping_equilibrium() {
    init_tracing();
    let env = weightless_environment();
    let (config, start) = trainer_cruise(1000.0, 25.0);
    let inputs = ControlInputs {
        aileron: 1.0,
        ..Default::default()
    };
    // roll control balanced by roll damping
    let equilibrium = match &config.airframe {
        AirframeConfig::FixedWing {
            geometry,
            coefficients,
        } => {
            -coefficients.roll.c_l_deltaa * inputs.aileron / coefficients.roll.c_l_p * 2.0 * 25.0
                / geometry.wing_span
        }
        AirframeConfig::Inert => panic!("trainer has no aerodynamics"),
    };

    let sim = SimulationConfig {
        dt: 0.02,
        multiloop: 1,
        ..Default::default()
    };
    let mut fdm = Fdm::new(config, sim, &start, &env).unwrap();
    let states = run_frames(&mut fdm, &env, inputs, 50);
    let rates: Vec<f64> = states.iter().map(|s| s.omega_body.x).collect();

    assert!(rates[1] > 0.0);
    for pair in rates.windows(2) {
        assert!(pair[1] >= pair[0], "roll rate fell: {rates:?}");
    }
    let last = *rates.last().unwrap();
    assert!(last < equilibrium);
    assert_relative_eq!(last, equilibrium, max_relative = 0.05);
    assert!(states.last().unwrap().attitude.phi > 0.0);
}

#[test]
fn test_same_seed_same_trajectory() {
    let env = windy_environment(4.0, 0.5);
    let (config, start) = trainer_cruise(200.0, 35.0);
    let sim = SimulationConfig {
        turbulence: Some(TurbulenceConfig::default()),
        seed: 1234,
        ..frame_sim()
    };
    let inputs = ControlInputs {
        throttle: 0.6,
        elevator: -0.05,
        ..Default::default()
    };

    let fly = |sim: SimulationConfig| {
        let mut fdm = Fdm::new(config.clone(), sim, &start, &env).unwrap();
        let mut engine = SimpleThrust::new(SimpleThrustConfig::default());
        let mut inputs = inputs;
        (0..240)
            .map(|_| {
                fdm.update(&env, &mut engine, &mut NoController, &mut inputs);
                *fdm.state()
            })
            .collect::<Vec<_>>()
    };

    let first = fly(sim.clone());
    let second = fly(sim.clone());
    assert_eq!(first, second);

    let reseeded = fly(SimulationConfig { seed: 99, ..sim });
    assert!(first.last() != reseeded.last());
}

#[test]
fn test_reset_replays_the_same_flight() {
    let env = calm_environment();
    let (config, start) = trainer_cruise(150.0, 35.0);
    let sim = SimulationConfig {
        turbulence: Some(TurbulenceConfig::default()),
        ..frame_sim()
    };
    let mut fdm = Fdm::new(config, sim, &start, &env).unwrap();

    let first = run_frames(&mut fdm, &env, ControlInputs::default(), 120);
    fdm.reset(&start, &env);
    let second = run_frames(&mut fdm, &env, ControlInputs::default(), 120);
    assert_eq!(first, second);
}

#[test]
fn test_symmetric_stall_keeps_wings_level() {
    let airframe = Airframe::from_config(&AircraftConfig::trainer().airframe);
    let model: &FixedWing = airframe.as_fixed_wing().unwrap();
    // 25° nose up, well past the lift limit
    let relative = Vector3::new(20.0 * 0.436f64.cos(), 0.0, 20.0 * 0.436f64.sin());
    let air = AirData::from_relative_velocity(relative, Vector3::zeros(), 1.225);
    let gradient = Matrix3::zeros();
    let controls = ControlInputs::default();
    let input = flyer_fdm::systems::AeroInput {
        air: &air,
        omega_body: Vector3::zeros(),
        wind_gradient: &gradient,
        controls: &controls,
    };

    let coefficients = model.evaluate(&input);
    assert!(coefficients.overshoot.iter().all(|o| *o > 0.0));
    assert_eq!(coefficients.stall_roll, 0.0);
    let loads = AeroModel::forces(model, &input);
    assert_relative_eq!(loads.moment.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(loads.moment.z, 0.0, epsilon = 1e-12);
}

#[test]
fn test_glide_stays_finite_with_gravity() {
    let env = calm_environment();
    let (config, start) = trainer_cruise(400.0, 35.0);
    let mut fdm = Fdm::new(config, fine_sim(), &start, &env).unwrap();
    let states = run_frames(&mut fdm, &env, ControlInputs::default(), 600);

    for state in &states {
        assert_state_finite(state);
    }
    // drag only ever removes energy in still air
    let energy = |v: f64, h: f64| 0.5 * v * v + 9.80665 * h;
    let last = states.last().unwrap();
    assert!(energy(last.velocity_local.norm(), last.altitude()) < energy(35.0, 400.0));
    assert!(fdm.air_data().true_airspeed.is_finite());
}
