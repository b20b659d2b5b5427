//! Rigid-body equations of motion.
//!
//! Translational state is the ground velocity in the local north-east-down
//! frame, rotational state the body rates. Both are advanced with the
//! two-sample Adams–Bashforth rule; the attitude quaternion uses the
//! trapezoidal rule (see [`crate::math::quaternion`]). Position is tracked
//! twice: as a flat local offset from the origin, used for terrain and wind
//! queries, and as geocentric latitude/longitude/radius, from which the
//! geodetic altitude used for the atmosphere is derived.
//!
//! One substep calls, in order, [`Eom::step`], [`Eom::aux`] and, once all
//! loads are known, [`Eom::accel`]. [`Eom::init`] seeds the derivative
//! history and must run once before the first `step`.

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::components::{
    AirData, ForceBreakdown, ForceCategory, ForceMoment, KinematicState, MassModel, StartState,
};
use crate::math::{
    geocentric_to_geodetic, geodetic_to_geocentric, Geocentric, IntegrationRule, Matrix3Ext,
    QuaternionState, TwoSampleIntegrator,
};
use crate::resources::{Environment, GeoOrigin};
use crate::utils::{is_finite_vec, MAX_STEP_ROTATION};

/// cos(latitude) below this is treated as a pole.
const POLE_COS_TOLERANCE: f64 = 1e-12;

const ALTITUDE_HOLD_KP: f64 = 1.0;
const ALTITUDE_HOLD_KD: f64 = 1.5;
/// Saturation of the altitude-hold command [m/s²]
const ALTITUDE_HOLD_LIMIT: f64 = 5.0;
const HORIZON_HOLD_KP: f64 = 8.0;
const HORIZON_HOLD_KD: f64 = 4.0;

/// Overrides applied by `accel` in place of the physical accelerations.
///
/// Only used by fixed test profiles and stand-ins, never in free flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HoldMode {
    /// Hold this altitude above the origin [m] with a saturated PD law on
    /// the vertical acceleration.
    pub altitude: Option<f64>,
    /// Drive roll and pitch to zero with a PD law on the roll and pitch
    /// accelerations. Yaw stays free.
    pub horizon: bool,
}

impl HoldMode {
    pub fn free() -> Self {
        Self::default()
    }

    pub fn altitude(altitude: f64) -> Self {
        Self {
            altitude: Some(altitude),
            horizon: false,
        }
    }

    pub fn horizon() -> Self {
        Self {
            altitude: None,
            horizon: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Eom {
    mass: MassModel,
    state: KinematicState,
    quaternion: QuaternionState,
    air: AirData,

    velocity_integrator: TwoSampleIntegrator<Vector3<f64>>,
    omega_integrator: TwoSampleIntegrator<Vector3<f64>>,
    position_integrator: TwoSampleIntegrator<Vector3<f64>>,
    /// (latitude, longitude, radius)
    geocentric_integrator: TwoSampleIntegrator<Vector3<f64>>,
}

impl Eom {
    /// Places the aircraft at `start`, expressed relative to `origin`.
    ///
    /// Accelerations start at zero; call [`Eom::accel`] with the initial
    /// loads and then [`Eom::init`] before stepping.
    pub fn new(mass: MassModel, start: &StartState, origin: &GeoOrigin) -> Self {
        let quaternion = QuaternionState::from_euler(start.attitude);
        let t = quaternion.local_to_body();
        let velocity_local = t.transpose_transform(&start.velocity_body);

        let altitude = origin.altitude - start.position_local.z;
        let (geocentric, sea_level_radius) =
            geodetic_to_geocentric(origin.latitude, altitude);
        let latitude = geocentric.latitude + start.position_local.x / sea_level_radius;
        let cos_lat = latitude.cos();
        let longitude = if cos_lat.abs() < POLE_COS_TOLERANCE {
            origin.longitude
        } else {
            origin.longitude + start.position_local.y / (sea_level_radius * cos_lat)
        };
        let geodetic = geocentric_to_geodetic(Geocentric {
            latitude,
            radius: geocentric.radius,
        });

        let state = KinematicState {
            velocity_local,
            velocity_body: start.velocity_body,
            omega_body: start.omega_body,
            position_local: start.position_local,
            latitude,
            longitude,
            radius: geocentric.radius,
            geodetic,
            attitude: quaternion.euler(),
            accel_local: Vector3::zeros(),
            accel_body: Vector3::zeros(),
            omega_dot_body: Vector3::zeros(),
            gravity: 0.0,
            density: AirData::default().density,
        };

        let ab2 = || TwoSampleIntegrator::new(IntegrationRule::AdamsBashforth, Vector3::zeros());
        Self {
            mass,
            state,
            quaternion,
            air: AirData::default(),
            velocity_integrator: ab2(),
            omega_integrator: ab2(),
            position_integrator: ab2(),
            geocentric_integrator: ab2(),
        }
    }

    /// Seeds every integrator with the current derivatives.
    pub fn init(&mut self) {
        let geocentric_rates = self.geocentric_rates();
        self.velocity_integrator.seed(self.state.accel_local);
        self.omega_integrator.seed(self.state.omega_dot_body);
        self.position_integrator.seed(self.state.velocity_local);
        self.geocentric_integrator.seed(geocentric_rates);
        self.quaternion.seed(&self.state.omega_body);
    }

    pub fn is_initialized(&self) -> bool {
        self.velocity_integrator.is_seeded()
    }

    /// Advances velocity, body rates, attitude and position by `dt`.
    pub fn step(&mut self, dt: f64) {
        // all derivatives are sampled before any state moves
        let accel_local = self.state.accel_local;
        let omega_dot = self.state.omega_dot_body;
        let omega = self.state.omega_body;
        let velocity_local = self.state.velocity_local;
        let geocentric_rates = self.geocentric_rates();

        self.state.velocity_local = self.velocity_integrator.step(velocity_local, accel_local, dt);

        let mut next_omega = self.omega_integrator.step(omega, omega_dot, dt);
        let rotation = next_omega.norm() * dt;
        if rotation > MAX_STEP_ROTATION {
            warn!(
                rotation,
                limit = MAX_STEP_ROTATION,
                "Angular velocity clamped to keep the step rotation bounded"
            );
            next_omega *= MAX_STEP_ROTATION / rotation;
        }
        self.state.omega_body = next_omega;

        self.quaternion.step(&omega, dt);
        self.state.attitude = self.quaternion.euler();

        self.state.position_local =
            self.position_integrator.step(self.state.position_local, velocity_local, dt);

        let geocentric = self.geocentric_integrator.step(
            Vector3::new(self.state.latitude, self.state.longitude, self.state.radius),
            geocentric_rates,
            dt,
        );
        self.state.latitude = geocentric.x;
        self.state.longitude = geocentric.y;
        self.state.radius = geocentric.z;
    }

    /// Refreshes the derived quantities after a `step`.
    ///
    /// # Arguments
    /// * `env` - Environment queried for gravity and density at the new altitude.
    /// * `wind_local` - Mean wind at the centre of gravity, local frame.
    /// * `gust_body` - Turbulence added on top, body frame.
    pub fn aux(&mut self, env: &dyn Environment, wind_local: &Vector3<f64>, gust_body: &Vector3<f64>) {
        self.state.geodetic = geocentric_to_geodetic(Geocentric {
            latitude: self.state.latitude,
            radius: self.state.radius,
        });

        let t = *self.quaternion.local_to_body();
        self.state.velocity_body = t.transform(&self.state.velocity_local);

        let altitude = self.state.geodetic.altitude;
        self.state.gravity = env.gravity(altitude);
        self.state.density = env.air_density(altitude);

        let relative = t.transform(&(self.state.velocity_local - wind_local)) + gust_body;
        self.air = AirData::from_relative_velocity(relative, *wind_local, self.state.density);
    }

    /// Forms translational and rotational accelerations from the loads.
    ///
    /// A contribution that is not finite is dropped for this substep and the
    /// model that produced it is logged.
    pub fn accel(&mut self, loads: &ForceBreakdown, hold: &HoldMode) {
        let mut total = ForceMoment::zero();
        for (category, contribution) in [
            (ForceCategory::Aerodynamic, &loads.aerodynamic),
            (ForceCategory::Propulsive, &loads.propulsive),
            (ForceCategory::Ground, &loads.ground),
        ] {
            if contribution.is_finite() {
                total += *contribution;
            } else {
                warn!(
                    source = %category,
                    force = ?contribution.force,
                    moment = ?contribution.moment,
                    "Non-finite load replaced with zero"
                );
            }
        }
        self.accel_total(&total, hold);
    }

    /// As [`Eom::accel`], for a load that is already summed.
    pub fn accel_total(&mut self, load: &ForceMoment, hold: &HoldMode) {
        let force = if is_finite_vec(&load.force) {
            load.force
        } else {
            warn!(force = ?load.force, "Non-finite force replaced with zero");
            Vector3::zeros()
        };
        let moment = if is_finite_vec(&load.moment) {
            load.moment
        } else {
            warn!(moment = ?load.moment, "Non-finite moment replaced with zero");
            Vector3::zeros()
        };

        let t: Matrix3<f64> = *self.quaternion.local_to_body();
        let m = self.mass.mass;

        let force_local = t.transpose_transform(&force);
        let gravity_local = Vector3::new(0.0, 0.0, self.state.gravity);
        let mut accel_local = force_local / m + gravity_local + self.transport_rate_terms();

        if let Some(target) = hold.altitude {
            let error = target - self.state.altitude();
            let v_down = self.state.velocity_local.z;
            accel_local.z = (-ALTITUDE_HOLD_KP * error - ALTITUDE_HOLD_KD * v_down)
                .clamp(-ALTITUDE_HOLD_LIMIT, ALTITUDE_HOLD_LIMIT);
        }

        let omega = self.state.omega_body;
        let inertia = self.mass.inertia();
        let gyroscopic = omega.cross(&(inertia * omega));
        let mut omega_dot = self.mass.apply_inverse_inertia(&(moment - gyroscopic));

        if hold.horizon {
            let attitude = self.state.attitude;
            omega_dot.x = -HORIZON_HOLD_KP * attitude.phi - HORIZON_HOLD_KD * omega.x;
            omega_dot.y = -HORIZON_HOLD_KP * attitude.theta - HORIZON_HOLD_KD * omega.y;
        }

        self.state.accel_local = accel_local;
        self.state.accel_body = force / m;
        self.state.omega_dot_body = omega_dot;
    }

    /// Curvature terms of a local-level frame carried over the earth.
    fn transport_rate_terms(&self) -> Vector3<f64> {
        let v = &self.state.velocity_local;
        let r = self.state.radius;
        let cos_lat = self.state.latitude.cos();
        let tan_lat = if cos_lat.abs() < POLE_COS_TOLERANCE {
            0.0
        } else {
            self.state.latitude.tan()
        };
        Vector3::new(
            (v.x * v.z - v.y * v.y * tan_lat) / r,
            (v.y * v.z + v.x * v.y * tan_lat) / r,
            -(v.x * v.x + v.y * v.y) / r,
        )
    }

    /// (latitude, longitude, radius) rates.
    fn geocentric_rates(&self) -> Vector3<f64> {
        let v = &self.state.velocity_local;
        let r = self.state.radius;
        let cos_lat = self.state.latitude.cos();
        let longitude_rate = if cos_lat.abs() < POLE_COS_TOLERANCE {
            error!(
                latitude = self.state.latitude,
                "Longitude rate undefined at the pole, holding longitude"
            );
            0.0
        } else {
            v.y / (r * cos_lat)
        };
        Vector3::new(v.x / r, longitude_rate, -v.z)
    }

    pub fn state(&self) -> &KinematicState {
        &self.state
    }

    pub fn air_data(&self) -> &AirData {
        &self.air
    }

    pub fn quaternion(&self) -> &QuaternionState {
        &self.quaternion
    }

    pub fn local_to_body(&self) -> &Matrix3<f64> {
        self.quaternion.local_to_body()
    }

    pub fn mass(&self) -> &MassModel {
        &self.mass
    }

    /// Replaces the latitude, e.g. to place the aircraft at a pole in tests.
    pub fn set_latitude(&mut self, latitude: f64) {
        self.state.latitude = latitude;
    }
}
