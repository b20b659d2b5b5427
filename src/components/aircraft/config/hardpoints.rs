use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::components::ControlChannel;

/// Contact friction parameters. The defaults are empirical values for tyres
/// on grass; every airframe can override them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrictionConfig {
    /// Forward coefficient with no brake applied.
    pub rolling: f64,
    /// Forward coefficient with full brake.
    pub max_brake: f64,
    /// Sideward coefficient above the skid speed.
    pub sliding: f64,
    /// Sideward speed below which no side force builds up [m/s].
    pub breakout_speed: f64,
    /// Sideward speed at which the side force reaches `sliding` [m/s].
    pub skid_speed: f64,
}

impl Default for FrictionConfig {
    fn default() -> Self {
        Self {
            rolling: 0.05,
            max_brake: 0.8,
            sliding: 0.6,
            breakout_speed: 0.02,
            skid_speed: 0.4,
        }
    }
}

impl FrictionConfig {
    /// Friction for a skid without a wheel: no rolling, same coefficient in all directions.
    pub fn skid() -> Self {
        Self {
            rolling: 0.5,
            max_brake: 0.5,
            sliding: 0.5,
            ..Default::default()
        }
    }
}

/// Maps a control channel onto a wheel steering angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteeringConfig {
    pub channel: ControlChannel,
    /// Steering angle at full channel deflection [rad]; the sign sets the direction.
    pub max_angle: f64,
}

/// Brake percentage, optionally scaled by a control channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrakeConfig {
    /// Fraction of `max_brake` applied, [0, 1].
    pub percent: f64,
    /// When present the percentage is multiplied by this channel's value.
    #[serde(default)]
    pub channel: Option<ControlChannel>,
}

/// Hinge that swings the contact point about a body-fixed axis, e.g. a
/// retracting gear leg. The swing angle is driven by a control channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HingeConfig {
    /// Hinge pivot, body frame [m]
    pub pivot: Vector3<f64>,
    /// Hinge axis, body frame; normalized at load time
    pub axis: Vector3<f64>,
    pub channel: ControlChannel,
    /// Swing angle at full channel value [rad]
    pub max_angle: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardpointConfig {
    pub name: String,
    /// Offset from the centre of gravity, body frame [m]
    pub offset: Vector3<f64>,
    /// Spring constant [N/m]
    pub spring_constant: f64,
    /// Damping [N·s/m]
    pub damping: f64,
    /// Normal force above which an overload is reported [N]
    pub max_force: f64,
    #[serde(default)]
    pub friction: FrictionConfig,
    #[serde(default)]
    pub steering: Option<SteeringConfig>,
    #[serde(default)]
    pub brake: Option<BrakeConfig>,
    #[serde(default)]
    pub hinge: Option<HingeConfig>,
}

impl HardpointConfig {
    /// A plain wheel with default friction and nothing mapped.
    pub fn wheel(name: &str, offset: Vector3<f64>, spring_constant: f64, damping: f64) -> Self {
        Self {
            name: name.to_string(),
            offset,
            spring_constant,
            damping,
            max_force: f64::INFINITY,
            friction: FrictionConfig::default(),
            steering: None,
            brake: None,
            hinge: None,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fail = |msg: String| Err(ConfigError::ValidationError(format!("hardpoint '{}': {msg}", self.name)));

        if !self.offset.iter().all(|v| v.is_finite()) {
            return fail("offset must be finite".into());
        }
        if !(self.spring_constant.is_finite() && self.spring_constant > 0.0) {
            return fail(format!("spring_constant must be positive, got {}", self.spring_constant));
        }
        if !(self.damping.is_finite() && self.damping >= 0.0) {
            return fail(format!("damping must not be negative, got {}", self.damping));
        }
        if self.max_force.is_nan() || self.max_force <= 0.0 {
            return fail(format!("max_force must be positive, got {}", self.max_force));
        }

        let f = &self.friction;
        if [f.rolling, f.max_brake, f.sliding].iter().any(|c| !(c.is_finite() && *c >= 0.0)) {
            return fail("friction coefficients must not be negative".into());
        }
        if !(f.breakout_speed.is_finite() && f.skid_speed.is_finite()) {
            return fail(format!(
                "friction speeds must be finite, got breakout {} and skid {}",
                f.breakout_speed, f.skid_speed
            ));
        }
        if !(f.breakout_speed >= 0.0 && f.skid_speed > f.breakout_speed) {
            return fail(format!(
                "skid_speed ({}) must exceed breakout_speed ({})",
                f.skid_speed, f.breakout_speed
            ));
        }

        if let Some(steering) = &self.steering {
            if !steering.max_angle.is_finite() {
                return fail(format!("steering max_angle must be finite, got {}", steering.max_angle));
            }
        }
        if let Some(brake) = &self.brake {
            if !(0.0..=1.0).contains(&brake.percent) {
                return fail(format!("brake percent must be in [0, 1], got {}", brake.percent));
            }
        }
        if let Some(hinge) = &self.hinge {
            if hinge.axis.norm() == 0.0 || !hinge.axis.iter().all(|v| v.is_finite()) {
                return fail("hinge axis must be a non-zero vector".into());
            }
            if !(hinge.pivot.iter().all(|v| v.is_finite()) && hinge.max_angle.is_finite()) {
                return fail("hinge pivot and max_angle must be finite".into());
            }
        }
        Ok(())
    }
}
