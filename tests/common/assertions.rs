use approx::relative_eq;
use flyer_fdm::systems::Fdm;
use flyer_fdm::KinematicState;
use nalgebra::Vector3;

/// Every state field is a finite number.
#[track_caller]
pub fn assert_state_finite(state: &KinematicState) {
    let vectors = [
        ("velocity_local", state.velocity_local),
        ("velocity_body", state.velocity_body),
        ("omega_body", state.omega_body),
        ("position_local", state.position_local),
        ("accel_local", state.accel_local),
        ("omega_dot_body", state.omega_dot_body),
    ];
    for (name, v) in vectors {
        assert!(v.iter().all(|x| x.is_finite()), "{name} is not finite: {v:?}");
    }
    let attitude = state.attitude;
    assert!(
        attitude.phi.is_finite() && attitude.theta.is_finite() && attitude.psi.is_finite(),
        "attitude is not finite: {attitude:?}"
    );
    assert!(state.latitude.is_finite() && state.longitude.is_finite() && state.radius.is_finite());
}

#[track_caller]
pub fn assert_unit_quaternion(fdm: &Fdm, epsilon: f64) {
    let norm = fdm.eom().quaternion().norm();
    assert!(
        (norm - 1.0).abs() <= epsilon,
        "quaternion norm {norm} drifted more than {epsilon} from 1"
    );
}

#[track_caller]
pub fn assert_vec_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert!(
        relative_eq!(actual, expected, epsilon = epsilon),
        "expected {expected:?}, got {actual:?} (epsilon {epsilon})"
    );
}
