//! Per-substep hook for autopilots and scripted inputs.

use crate::components::{ControlInputs, KinematicState};

/// Called once per substep after the kinematic refresh and before the
/// aerodynamic model reads the inputs.
pub trait ControllerHook {
    fn on_substep(&mut self, inputs: &mut ControlInputs, state: &KinematicState, dt: f64);
}

/// Leaves the inputs as the host set them.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoController;

impl ControllerHook for NoController {
    fn on_substep(&mut self, _inputs: &mut ControlInputs, _state: &KinematicState, _dt: f64) {}
}

impl<F> ControllerHook for F
where
    F: FnMut(&mut ControlInputs, &KinematicState, f64),
{
    fn on_substep(&mut self, inputs: &mut ControlInputs, state: &KinematicState, dt: f64) {
        self(inputs, state, dt)
    }
}
