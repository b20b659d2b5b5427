//! Coefficient model of a conventional fixed-wing aircraft.
//!
//! Lift is evaluated at three spanwise stations so that one wing tip can
//! stall while the other still flies. The tip stations see the local angle
//! of attack change caused by roll rate, α ∓ p̂. Each station is clipped
//! against the stall limits and the amount clipped away is kept as a signed
//! overshoot; the left/right difference of those overshoots is the only
//! source of stall-induced roll and yaw.

use nalgebra::Vector3;

use super::AeroInput;
use crate::components::aircraft::config::{AeroCoefficients, AircraftGeometry};
use crate::components::ForceMoment;
use crate::utils::REYNOLDS_MIN_AIRSPEED;

/// Spanwise weighting of the left, centre and right lift stations.
pub const STATION_WEIGHTS: [f64; 3] = [0.25, 0.5, 0.25];

const LEFT: usize = 0;
const CENTRE: usize = 1;
const RIGHT: usize = 2;

/// Everything the model derived for one evaluation, before dimensional scaling.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CoefficientSet {
    /// Dimensionless body rates (p̂, q̂, r̂), relative to the air mass
    pub rates_hat: Vector3<f64>,
    /// Clipped lift coefficient per station (left, centre, right)
    pub c_l_stations: [f64; 3],
    /// Signed amount clipped from each station; positive above `c_l_max`
    pub overshoot: [f64; 3],
    /// Blended wing lift coefficient
    pub c_l_wing: f64,
    pub c_d: f64,
    pub c_y: f64,
    pub c_roll: f64,
    pub c_pitch: f64,
    pub c_yaw: f64,
    /// Stall contributions, included in `c_roll` and `c_yaw`
    pub stall_roll: f64,
    pub stall_yaw: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FixedWing {
    geometry: AircraftGeometry,
    coefficients: AeroCoefficients,
}

impl FixedWing {
    pub fn new(geometry: AircraftGeometry, coefficients: AeroCoefficients) -> Self {
        Self {
            geometry,
            coefficients,
        }
    }

    pub fn geometry(&self) -> &AircraftGeometry {
        &self.geometry
    }

    pub fn coefficients(&self) -> &AeroCoefficients {
        &self.coefficients
    }

    /// Evaluates every aerodynamic coefficient for the given input.
    pub fn evaluate(&self, input: &AeroInput) -> CoefficientSet {
        let k = &self.coefficients;
        let geo = &self.geometry;
        let controls = input.controls;
        let airspeed = input.air.true_airspeed;
        let alpha = input.air.alpha;
        let beta = input.air.beta;

        // rotation of the air mass appears as an opposite body rate
        let g = input.wind_gradient;
        let p = input.omega_body.x - g[(2, 1)];
        let q = input.omega_body.y + g[(2, 0)];
        let r = input.omega_body.z - g[(1, 0)];

        let rates_hat = if airspeed == 0.0 {
            Vector3::zeros()
        } else {
            let half_over_v = 0.5 / airspeed;
            Vector3::new(
                p * geo.wing_span * half_over_v,
                q * geo.mac * half_over_v,
                r * geo.wing_span * half_over_v,
            )
        };
        let (p_hat, q_hat, r_hat) = (rates_hat.x, rates_hat.y, rates_hat.z);

        let gear_extended = 1.0 - controls.retract;
        let delta_c_l = controls.flap * k.lift.c_l_flap
            + controls.spoiler * k.lift.c_l_spoiler
            + gear_extended * k.lift.c_l_gear;
        let c_l_max = k.lift.c_l_max + 0.5 * delta_c_l;
        let c_l_min = k.lift.c_l_min + 0.5 * delta_c_l;

        let base = k.lift.c_l_0
            + k.lift.c_l_q * q_hat
            + k.lift.c_l_deltae * controls.elevator
            + delta_c_l;
        let station_alpha = [alpha - p_hat, alpha, alpha + p_hat];

        let mut c_l_stations = [0.0; 3];
        let mut overshoot = [0.0; 3];
        for i in 0..3 {
            let raw = base + k.lift.c_l_alpha * station_alpha[i];
            let clipped = raw.clamp(c_l_min, c_l_max);
            c_l_stations[i] = clipped;
            overshoot[i] = raw - clipped;
        }
        let c_l_wing: f64 = c_l_stations
            .iter()
            .zip(STATION_WEIGHTS)
            .map(|(c, w)| c * w)
            .sum();

        let reynolds = if airspeed < REYNOLDS_MIN_AIRSPEED {
            1.0
        } else {
            (airspeed / k.drag.reynolds_ref_speed).powf(k.drag.reynolds_exponent)
        };
        let total_overshoot: f64 = overshoot.iter().map(|s| s.abs()).sum();
        let stall_drag =
            k.stall.c_d_stall * (1.0 - (-k.stall.stall_drag_rate * total_overshoot).exp());
        let c_d = k.drag.c_d_0 * reynolds
            + k.drag.c_d_cl2 * (c_l_wing - k.drag.c_l_min_drag).powi(2)
            + k.drag.c_d_deltaa2 * controls.aileron.powi(2)
            + k.drag.c_d_deltae2 * controls.elevator.powi(2)
            + k.drag.c_d_deltar2 * controls.rudder.powi(2)
            + k.drag.c_d_flap * controls.flap
            + k.drag.c_d_spoiler * controls.spoiler
            + k.drag.c_d_gear * gear_extended
            + stall_drag;

        let stall_roll = k.stall.c_l_stall * (overshoot[RIGHT] - overshoot[LEFT]);
        let stall_yaw = k.stall.c_n_stall * (overshoot[RIGHT].abs() - overshoot[LEFT].abs());

        let c_y = k.side_force.c_y_beta * beta
            + k.side_force.c_y_p * p_hat
            + k.side_force.c_y_r * r_hat
            + k.side_force.c_y_deltaa * controls.aileron
            + k.side_force.c_y_deltar * controls.rudder;

        let c_roll = k.roll.c_l_beta * beta
            + k.roll.c_l_p * p_hat
            + k.roll.c_l_r * r_hat * c_l_wing
            + k.roll.c_l_deltaa * controls.aileron
            + k.roll.c_l_deltar * controls.rudder
            + stall_roll;

        let c_pitch = k.pitch.c_m_0
            + k.pitch.c_m_alpha * station_alpha[CENTRE]
            + k.pitch.c_m_q * q_hat
            + k.pitch.c_m_deltae * controls.elevator
            + k.pitch.c_m_flap * controls.flap;

        let c_yaw = k.yaw.c_n_beta * beta
            + k.yaw.c_n_p * p_hat * c_l_wing
            + k.yaw.c_n_r * r_hat
            + k.yaw.c_n_deltaa * controls.aileron
            + k.yaw.c_n_deltar * controls.rudder
            + stall_yaw;

        CoefficientSet {
            rates_hat,
            c_l_stations,
            overshoot,
            c_l_wing,
            c_d,
            c_y,
            c_roll,
            c_pitch,
            c_yaw,
            stall_roll,
            stall_yaw,
        }
    }

    /// Body-axis force and moment about the centre of gravity.
    pub fn forces(&self, input: &AeroInput) -> ForceMoment {
        let q_dyn = input.air.dynamic_pressure;
        if input.air.true_airspeed == 0.0 || q_dyn == 0.0 {
            return ForceMoment::zero();
        }
        let c = self.evaluate(input);
        let geo = &self.geometry;
        let qs = q_dyn * geo.wing_area;

        let drag = qs * c.c_d;
        let side = qs * c.c_y;
        let lift = qs * c.c_l_wing;

        let (sa, ca) = input.air.alpha.sin_cos();
        let (sb, cb) = input.air.beta.sin_cos();
        // (−D, Y, −L) from wind axes into body axes
        let force = Vector3::new(
            -drag * ca * cb - side * ca * sb + lift * sa,
            -drag * sb + side * cb,
            -drag * sa * cb - side * sa * sb - lift * ca,
        );
        let moment = Vector3::new(
            qs * geo.wing_span * c.c_roll,
            qs * geo.mac * c.c_pitch,
            qs * geo.wing_span * c.c_yaw,
        );
        ForceMoment::new(force, moment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{AirData, ControlInputs};
    use approx::assert_relative_eq;
    use nalgebra::Matrix3;

    fn trainer() -> FixedWing {
        FixedWing::new(AircraftGeometry::trainer(), AeroCoefficients::trainer())
    }

    fn air(airspeed: f64, alpha: f64, beta: f64) -> AirData {
        let v = Vector3::new(
            airspeed * alpha.cos() * beta.cos(),
            airspeed * beta.sin(),
            airspeed * alpha.sin() * beta.cos(),
        );
        AirData::from_relative_velocity(v, Vector3::zeros(), 1.225)
    }

    fn evaluate(
        model: &FixedWing,
        air: &AirData,
        omega: Vector3<f64>,
        controls: &ControlInputs,
    ) -> CoefficientSet {
        let gradient = Matrix3::zeros();
        model.evaluate(&AeroInput {
            air,
            omega_body: omega,
            wind_gradient: &gradient,
            controls,
        })
    }

    #[test]
    fn test_symmetric_stall_has_no_roll_or_yaw() {
        let model = trainer();
        let controls = ControlInputs::default();
        // deep stall, both tips clipped
        let c = evaluate(&model, &air(15.0, 0.5, 0.0), Vector3::zeros(), &controls);
        assert!(c.overshoot[LEFT] > 0.0);
        assert_eq!(c.overshoot[LEFT], c.overshoot[RIGHT]);
        assert_eq!(c.stall_roll, 0.0);
        assert_eq!(c.stall_yaw, 0.0);
        assert_eq!(c.c_roll, 0.0);
        assert_eq!(c.c_yaw, 0.0);
    }

    #[test]
    fn test_roll_rate_stalls_descending_tip_first() {
        let model = trainer();
        let controls = ControlInputs::default();
        // CL at centre just below the limit, rolling right with p̂ = 0.1
        let c = evaluate(
            &model,
            &air(15.0, 0.2, 0.0),
            Vector3::new(0.3, 0.0, 0.0),
            &controls,
        );
        assert!(c.overshoot[RIGHT] > 0.0);
        assert_eq!(c.overshoot[LEFT], 0.0);
        assert!(c.stall_roll > 0.0);
        assert!(c.stall_yaw > 0.0);
    }

    #[test]
    fn test_flap_shifts_stall_limit_by_half_increment() {
        let model = trainer();
        let k = AeroCoefficients::trainer();
        let controls = ControlInputs {
            flap: 1.0,
            ..Default::default()
        };
        let c = evaluate(&model, &air(15.0, 0.6, 0.0), Vector3::zeros(), &controls);
        assert_relative_eq!(
            c.c_l_stations[CENTRE],
            k.lift.c_l_max + 0.5 * k.lift.c_l_flap,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_stall_drag_saturates() {
        let model = trainer();
        let controls = ControlInputs::default();
        let attached = evaluate(&model, &air(15.0, 0.05, 0.0), Vector3::zeros(), &controls);
        let deep = evaluate(&model, &air(15.0, 1.2, 0.0), Vector3::zeros(), &controls);
        let k = AeroCoefficients::trainer();
        assert!(deep.c_d > attached.c_d);
        let stall_part = deep.c_d
            - k.drag.c_d_0 * (15.0_f64 / k.drag.reynolds_ref_speed).powf(k.drag.reynolds_exponent)
            - k.drag.c_d_cl2 * (deep.c_l_wing - k.drag.c_l_min_drag).powi(2)
            - k.drag.c_d_gear;
        assert!(stall_part <= k.stall.c_d_stall + 1e-12);
        assert!(stall_part > 0.9 * k.stall.c_d_stall);
    }

    #[test]
    fn test_zero_airspeed_gives_zero_loads() {
        let model = trainer();
        let controls = ControlInputs {
            aileron: 1.0,
            ..Default::default()
        };
        let still = AirData::default();
        let gradient = Matrix3::zeros();
        let input = AeroInput {
            air: &still,
            omega_body: Vector3::new(1.0, 1.0, 1.0),
            wind_gradient: &gradient,
            controls: &controls,
        };
        assert_eq!(model.evaluate(&input).rates_hat, Vector3::zeros());
        assert_eq!(model.forces(&input), ForceMoment::zero());
    }

    #[test]
    fn test_level_flight_lift_points_up() {
        let model = trainer();
        let controls = ControlInputs::default();
        let air = air(15.0, 0.03, 0.0);
        let gradient = Matrix3::zeros();
        let loads = model.forces(&AeroInput {
            air: &air,
            omega_body: Vector3::zeros(),
            wind_gradient: &gradient,
            controls: &controls,
        });
        assert!(loads.force.z < 0.0);
        assert!(loads.force.x < 0.0);
        assert_relative_eq!(loads.force.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_wind_gradient_acts_as_rate() {
        let model = trainer();
        let controls = ControlInputs::default();
        let air = air(15.0, 0.05, 0.0);

        let mut gradient = Matrix3::zeros();
        // ∂w/∂y = 0.5: the air rolls left relative to the wing
        gradient[(2, 1)] = 0.5;
        let sheared = model.evaluate(&AeroInput {
            air: &air,
            omega_body: Vector3::zeros(),
            wind_gradient: &gradient,
            controls: &controls,
        });
        let rolling = evaluate(&model, &air, Vector3::new(-0.5, 0.0, 0.0), &controls);
        assert_relative_eq!(sheared.rates_hat, rolling.rates_hat, epsilon = 1e-15);
        assert_relative_eq!(sheared.c_roll, rolling.c_roll, epsilon = 1e-15);
    }
}
