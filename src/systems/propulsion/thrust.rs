use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::Propulsion;
use crate::components::aircraft::config::ConfigError;
use crate::components::{ControlInputs, ForceMoment};

/// Parameters of [`SimpleThrust`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleThrustConfig {
    /// Static thrust at full throttle [N]
    pub max_thrust: f64,
    /// Forward airspeed at which thrust has faded to zero [m/s]
    pub pitch_speed: f64,
    /// First-order time constants of the throttle response [s]
    pub spool_up_time: f64,
    pub spool_down_time: f64,
    /// Shaft speed at full throttle [rad/s]
    pub max_rotational_speed: f64,
    /// Time to empty the energy store at full throttle [s]; infinite never empties
    pub endurance: f64,
    /// Thrust line offset from the centre of gravity, body axes [m]
    pub position: Vector3<f64>,
}

impl Default for SimpleThrustConfig {
    fn default() -> Self {
        Self {
            max_thrust: 2_400.0,
            pitch_speed: 75.0,
            spool_up_time: 0.8,
            spool_down_time: 1.2,
            max_rotational_speed: 283.0,
            endurance: 14_400.0,
            position: Vector3::zeros(),
        }
    }
}

impl SimpleThrustConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.max_thrust.is_finite() && self.max_thrust >= 0.0) {
            return Err(ConfigError::ValidationError("max_thrust must not be negative".into()));
        }
        if !(self.pitch_speed > 0.0) {
            return Err(ConfigError::ValidationError("pitch_speed must be positive".into()));
        }
        if self.spool_up_time < 0.0 || self.spool_down_time < 0.0 {
            return Err(ConfigError::ValidationError(
                "spool time constants must not be negative".into(),
            ));
        }
        if !(self.endurance > 0.0) {
            return Err(ConfigError::ValidationError("endurance must be positive".into()));
        }
        Ok(())
    }
}

/// Throttle-scaled thrust along the body x axis with a spool lag.
///
/// Thrust fades linearly with forward airspeed, reaching zero at
/// `pitch_speed`, and stops once the energy store is empty.
#[derive(Debug, Clone)]
pub struct SimpleThrust {
    config: SimpleThrustConfig,
    /// Current output as a fraction of full throttle [0, 1]
    thrust_fraction: f64,
    capacity: f64,
}

impl SimpleThrust {
    pub fn new(config: SimpleThrustConfig) -> Self {
        Self {
            config,
            thrust_fraction: 0.0,
            capacity: 1.0,
        }
    }

    pub fn thrust_fraction(&self) -> f64 {
        self.thrust_fraction
    }

    fn spool(&mut self, target: f64, dt: f64) {
        let time_constant = if target > self.thrust_fraction {
            self.config.spool_up_time
        } else {
            self.config.spool_down_time
        };
        self.thrust_fraction = if time_constant > 1e-6 {
            let decay = (-dt / time_constant).exp();
            target + (self.thrust_fraction - target) * decay
        } else {
            target
        };
        self.thrust_fraction = self.thrust_fraction.clamp(0.0, 1.0);
    }
}

impl Propulsion for SimpleThrust {
    fn update(
        &mut self,
        dt: f64,
        inputs: &ControlInputs,
        air_velocity_body: &Vector3<f64>,
    ) -> ForceMoment {
        let target = if self.capacity > 0.0 {
            inputs.throttle.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.spool(target, dt);

        if self.capacity > 0.0 {
            self.capacity -= self.thrust_fraction * dt / self.config.endurance;
            if self.capacity <= 0.0 {
                self.capacity = 0.0;
                info!("Propulsion energy store empty");
            }
        }

        let fade = (1.0 - air_velocity_body.x / self.config.pitch_speed).clamp(0.0, 1.0);
        let force = Vector3::new(self.config.max_thrust * self.thrust_fraction * fade, 0.0, 0.0);
        ForceMoment::new(force, self.config.position.cross(&force))
    }

    fn rotational_speed(&self) -> f64 {
        self.config.max_rotational_speed * self.thrust_fraction
    }

    fn remaining_capacity(&self) -> f64 {
        self.capacity
    }
}
