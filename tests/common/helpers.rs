use flyer_fdm::systems::{Fdm, NoController, NoPropulsion};
use flyer_fdm::{ControlInputs, Environment, KinematicState};

/// Routes `tracing` output through the test harness; shows with `--nocapture`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Runs `frames` updates with fixed inputs and no propulsion, returning the
/// state after each one.
pub fn run_frames(
    fdm: &mut Fdm,
    env: &dyn Environment,
    inputs: ControlInputs,
    frames: usize,
) -> Vec<KinematicState> {
    let mut inputs = inputs;
    (0..frames)
        .map(|_| {
            fdm.update(env, &mut NoPropulsion, &mut NoController, &mut inputs);
            *fdm.state()
        })
        .collect()
}
