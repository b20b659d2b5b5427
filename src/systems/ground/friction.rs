//! Friction curves of a contact point.
//!
//! Coulomb friction jumps from −μN to +μN as the sliding velocity crosses
//! zero, which a fixed-step integrator cannot follow. Both directions are
//! therefore faded in over a speed band instead:
//!
//! ```text
//!  μ
//!  │            ┌──────────  sliding
//!  │           ╱
//!  │          ╱
//!  └─────────┴──┴─────────── |v|
//!        breakout  skid
//! ```

use crate::components::aircraft::config::FrictionConfig;
use crate::utils::lerp;

/// Fraction of full friction reached at sliding speed `speed`; 0 below the
/// breakout speed, 1 above the skid speed, linear in between.
pub fn friction_ramp(speed: f64, friction: &FrictionConfig) -> f64 {
    let speed = speed.abs();
    if speed <= friction.breakout_speed {
        0.0
    } else if speed >= friction.skid_speed {
        1.0
    } else {
        (speed - friction.breakout_speed) / (friction.skid_speed - friction.breakout_speed)
    }
}

/// Sideward friction coefficient at sideward speed `speed`.
pub fn side_coefficient(speed: f64, friction: &FrictionConfig) -> f64 {
    friction.sliding * friction_ramp(speed, friction)
}

/// Forward friction coefficient for a brake fraction in [0, 1], before the
/// low-speed ramp.
pub fn forward_coefficient(brake: f64, friction: &FrictionConfig) -> f64 {
    lerp(friction.rolling, friction.max_brake, brake)
}

/// Signed friction force along one direction, opposing `speed`.
pub fn friction_force(speed: f64, coefficient: f64, normal_force: f64) -> f64 {
    if speed == 0.0 {
        0.0
    } else {
        -speed.signum() * coefficient * normal_force
    }
}
