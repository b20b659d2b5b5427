use nalgebra::{Matrix3, Rotation3, Unit, Vector3};
use tracing::debug;
use uuid::Uuid;

use super::friction::{
    forward_coefficient, friction_force, friction_ramp, side_coefficient,
};
use crate::components::aircraft::config::HardpointConfig;
use crate::components::{ControlInputs, ForceMoment, KinematicState};
use crate::math::Matrix3Ext;
use crate::resources::{Environment, OverloadEvent, OverloadSender};

/// Inputs shared by every hardpoint in one substep.
pub struct ContactContext<'a> {
    pub state: &'a KinematicState,
    pub local_to_body: &'a Matrix3<f64>,
    pub controls: &'a ControlInputs,
    pub env: &'a dyn Environment,
}

/// Diagnostics of the last evaluation of one hardpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContactReport {
    /// Offset from the centre of gravity after the hinge, body frame [m]
    pub offset_body: Vector3<f64>,
    /// Penetration below the terrain [m]; negative when airborne
    pub depth: f64,
    pub in_contact: bool,
    /// Normal load [N]
    pub normal_force: f64,
    /// Point velocity, local frame [m/s]
    pub velocity_local: Vector3<f64>,
    pub forward_speed: f64,
    pub side_speed: f64,
    /// Steering angle applied to the rolling direction [rad]
    pub steering: f64,
    pub loads: ForceMoment,
}

/// A wheel or skid exchanging a penalty force with the terrain.
#[derive(Debug, Clone)]
pub struct Hardpoint {
    index: usize,
    config: HardpointConfig,
    /// Set while the normal force stays above `max_force`.
    overloaded: bool,
    report: ContactReport,
}

impl Hardpoint {
    pub fn new(index: usize, config: HardpointConfig) -> Self {
        Self {
            index,
            config,
            overloaded: false,
            report: ContactReport::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &HardpointConfig {
        &self.config
    }

    pub fn report(&self) -> &ContactReport {
        &self.report
    }

    pub fn is_overloaded(&self) -> bool {
        self.overloaded
    }

    /// Offset from the centre of gravity, swung about the hinge if one is mapped.
    pub fn offset(&self, controls: &ControlInputs) -> Vector3<f64> {
        match &self.config.hinge {
            Some(hinge) => {
                let angle = controls.channel(hinge.channel) * hinge.max_angle;
                let axis = Unit::new_normalize(hinge.axis);
                let rotation = Rotation3::from_axis_angle(&axis, angle);
                hinge.pivot + rotation * (self.config.offset - hinge.pivot)
            }
            None => self.config.offset,
        }
    }

    fn brake_fraction(&self, controls: &ControlInputs) -> f64 {
        match &self.config.brake {
            Some(brake) => {
                let scale = brake.channel.map_or(1.0, |c| controls.channel(c));
                (brake.percent * scale).clamp(0.0, 1.0)
            }
            None => 0.0,
        }
    }

    fn steering_angle(&self, controls: &ControlInputs) -> f64 {
        self.config
            .steering
            .as_ref()
            .map_or(0.0, |s| controls.channel(s.channel) * s.max_angle)
    }

    /// Computes this substep's force and moment about the centre of gravity,
    /// in body axes.
    ///
    /// # Arguments
    /// * `ctx` - State, attitude, controls and terrain of the current substep.
    /// * `aircraft` - Identifier stamped on overload events.
    /// * `events` - Overload channel; `None` suppresses notifications.
    pub fn update(
        &mut self,
        ctx: &ContactContext,
        aircraft: Uuid,
        events: Option<&OverloadSender>,
    ) -> ForceMoment {
        let t = ctx.local_to_body;
        let state = ctx.state;
        let offset = self.offset(ctx.controls);

        let offset_local = t.transpose_transform(&offset);
        let position = state.position_local + offset_local;
        let velocity =
            t.transpose_transform(&state.omega_body.cross(&offset)) + state.velocity_local;

        let steering = self.steering_angle(ctx.controls);
        let (sin_h, cos_h) = (state.attitude.psi + steering).sin_cos();
        let forward = Vector3::new(cos_h, sin_h, 0.0);
        let side = Vector3::new(-sin_h, cos_h, 0.0);
        let forward_speed = velocity.dot(&forward);
        let side_speed = velocity.dot(&side);

        let depth = ctx.env.terrain_height(position.x, position.y) + position.z;
        let in_contact = depth >= 0.0;

        let mut report = ContactReport {
            offset_body: offset,
            depth,
            in_contact,
            velocity_local: velocity,
            forward_speed,
            side_speed,
            steering,
            ..Default::default()
        };

        if !in_contact {
            self.overloaded = false;
            self.report = report;
            return ForceMoment::zero();
        }

        let normal_force =
            (self.config.spring_constant * depth + self.config.damping * velocity.z).max(0.0);
        self.check_overload(normal_force, aircraft, events);

        let friction = &self.config.friction;
        let mu_forward = forward_coefficient(self.brake_fraction(ctx.controls), friction)
            * friction_ramp(forward_speed, friction);
        let mu_side = side_coefficient(side_speed, friction);

        let force_local = forward * friction_force(forward_speed, mu_forward, normal_force)
            + side * friction_force(side_speed, mu_side, normal_force)
            + Vector3::new(0.0, 0.0, -normal_force);
        let force = t.transform(&force_local);
        let loads = ForceMoment::new(force, offset.cross(&force));

        report.normal_force = normal_force;
        report.loads = loads;
        self.report = report;
        loads
    }

    /// Emits one event when the load crosses `max_force` and re-arms once it
    /// drops back.
    fn check_overload(&mut self, normal_force: f64, aircraft: Uuid, events: Option<&OverloadSender>) {
        if normal_force <= self.config.max_force {
            self.overloaded = false;
            return;
        }
        if self.overloaded {
            return;
        }
        self.overloaded = true;
        debug!(
            hardpoint = %self.config.name,
            normal_force,
            limit = self.config.max_force,
            "Hardpoint overload"
        );
        if let Some(sender) = events {
            sender.send(OverloadEvent {
                aircraft,
                hardpoint: self.index,
                name: self.config.name.clone(),
                magnitude: normal_force,
                limit: self.config.max_force,
            });
        }
    }

    /// Clears the overload latch so a load already above the limit is reported again.
    pub fn rearm(&mut self) {
        self.overloaded = false;
    }

    pub fn reset(&mut self) {
        self.rearm();
        self.report = ContactReport::default();
    }
}
