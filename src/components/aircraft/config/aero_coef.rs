use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Stability and control derivatives for the fixed-wing model.
///
/// Control derivatives are per unit of *normalized* deflection, i.e. the
/// value of the matching `ControlInputs` channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AeroCoefficients {
    pub lift: LiftCoefficients,
    pub drag: DragCoefficients,
    pub side_force: SideForceCoefficients,
    pub roll: RollCoefficients,
    pub pitch: PitchCoefficients,
    pub yaw: YawCoefficients,
    pub stall: StallCoefficients,
}

/// Lift coefficients for full aerodynamic model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiftCoefficients {
    /// Base lift coefficient (zero angle of attack).
    pub c_l_0: f64,
    /// Lift curve slope with respect to angle of attack (α).
    pub c_l_alpha: f64,
    /// Lift coefficient due to pitch rate (q̂).
    pub c_l_q: f64,
    /// Lift coefficient due to elevator deflection.
    pub c_l_deltae: f64,
    /// Maximum lift coefficient before the section stalls.
    pub c_l_max: f64,
    /// Minimum (most negative) lift coefficient before the section stalls.
    pub c_l_min: f64,
    /// Lift increment at full flap.
    pub c_l_flap: f64,
    /// Lift increment at full spoiler (usually negative).
    pub c_l_spoiler: f64,
    /// Lift increment with the gear fully extended.
    pub c_l_gear: f64,
}

/// Drag coefficients for full aerodynamic model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragCoefficients {
    /// Profile drag at the reference speed.
    pub c_d_0: f64,
    /// Lift-dependent drag, multiplied by (CL − CL at minimum drag)².
    pub c_d_cl2: f64,
    /// Lift coefficient at minimum drag.
    pub c_l_min_drag: f64,
    /// Quadratic drag per aileron deflection squared.
    pub c_d_deltaa2: f64,
    /// Quadratic drag per elevator deflection squared.
    pub c_d_deltae2: f64,
    /// Quadratic drag per rudder deflection squared.
    pub c_d_deltar2: f64,
    /// Drag increment at full flap.
    pub c_d_flap: f64,
    /// Drag increment at full spoiler.
    pub c_d_spoiler: f64,
    /// Drag increment with the gear fully extended.
    pub c_d_gear: f64,
    /// Airspeed at which `c_d_0` was measured [m/s].
    pub reynolds_ref_speed: f64,
    /// Exponent of the profile drag Reynolds correction, (V/V_ref)^exp.
    pub reynolds_exponent: f64,
}

/// Side force coefficients for full aerodynamic model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SideForceCoefficients {
    /// Side-force coefficient due to sideslip angle (β).
    pub c_y_beta: f64,
    /// Side-force coefficient due to roll rate (p̂).
    pub c_y_p: f64,
    /// Side-force coefficient due to yaw rate (r̂).
    pub c_y_r: f64,
    /// Side-force coefficient due to aileron deflection.
    pub c_y_deltaa: f64,
    /// Side-force coefficient due to rudder deflection.
    pub c_y_deltar: f64,
}

/// Roll coefficients for full aerodynamic model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollCoefficients {
    /// Roll moment coefficient due to sideslip angle (β).
    pub c_l_beta: f64,
    /// Roll damping (p̂).
    pub c_l_p: f64,
    /// Roll due to yaw rate, scaled by the wing lift coefficient (r̂·CL).
    pub c_l_r: f64,
    /// Roll moment coefficient due to aileron deflection.
    pub c_l_deltaa: f64,
    /// Roll moment coefficient due to rudder deflection.
    pub c_l_deltar: f64,
}

/// Pitch coefficients for full aerodynamic model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchCoefficients {
    /// Base pitch moment coefficient (zero angle of attack).
    pub c_m_0: f64,
    /// Pitch moment slope with respect to angle of attack (α).
    pub c_m_alpha: f64,
    /// Pitch damping (q̂).
    pub c_m_q: f64,
    /// Pitch moment coefficient due to elevator deflection.
    pub c_m_deltae: f64,
    /// Pitch moment at full flap.
    pub c_m_flap: f64,
}

/// Yaw coefficients for full aerodynamic model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YawCoefficients {
    /// Weathercock stability (β).
    pub c_n_beta: f64,
    /// Yaw due to roll rate, scaled by the wing lift coefficient (p̂·CL).
    pub c_n_p: f64,
    /// Yaw damping (r̂).
    pub c_n_r: f64,
    /// Yaw moment coefficient due to aileron deflection.
    pub c_n_deltaa: f64,
    /// Yaw moment coefficient due to rudder deflection.
    pub c_n_deltar: f64,
}

/// Post-stall behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StallCoefficients {
    /// Drag increment the stall saturates towards.
    pub c_d_stall: f64,
    /// How quickly stall drag saturates with lift overshoot.
    pub stall_drag_rate: f64,
    /// Roll coefficient per unit of right-minus-left overshoot.
    pub c_l_stall: f64,
    /// Yaw coefficient per unit of right-minus-left overshoot magnitude.
    pub c_n_stall: f64,
}

impl AeroCoefficients {
    pub fn trainer() -> Self {
        Self {
            lift: LiftCoefficients {
                c_l_0: 0.25,
                c_l_alpha: 5.0,
                c_l_q: 4.0,
                c_l_deltae: 0.3,
                c_l_max: 1.5,
                c_l_min: -0.6,
                c_l_flap: 0.4,
                c_l_spoiler: -0.4,
                c_l_gear: 0.0,
            },
            drag: DragCoefficients {
                c_d_0: 0.03,
                c_d_cl2: 0.06,
                c_l_min_drag: 0.3,
                c_d_deltaa2: 0.01,
                c_d_deltae2: 0.01,
                c_d_deltar2: 0.01,
                c_d_flap: 0.05,
                c_d_spoiler: 0.08,
                c_d_gear: 0.02,
                reynolds_ref_speed: 40.0,
                reynolds_exponent: -0.5,
            },
            side_force: SideForceCoefficients {
                c_y_beta: -0.35,
                c_y_p: 0.0,
                c_y_r: 0.1,
                c_y_deltaa: 0.0,
                c_y_deltar: 0.1,
            },
            roll: RollCoefficients {
                c_l_beta: -0.1,
                c_l_p: -0.5,
                c_l_r: 0.2,
                c_l_deltaa: 0.06,
                c_l_deltar: 0.01,
            },
            pitch: PitchCoefficients {
                c_m_0: 0.0,
                c_m_alpha: -0.8,
                c_m_q: -10.0,
                c_m_deltae: -0.8,
                c_m_flap: -0.05,
            },
            yaw: YawCoefficients {
                c_n_beta: 0.06,
                c_n_p: -0.07,
                c_n_r: -0.12,
                // differential ailerons
                c_n_deltaa: 0.0,
                c_n_deltar: -0.06,
            },
            stall: StallCoefficients {
                c_d_stall: 0.5,
                stall_drag_rate: 5.0,
                c_l_stall: 0.1,
                c_n_stall: 0.02,
            },
        }
    }

    /// Every coefficient paired with its dotted field name.
    fn named_values(&self) -> [(&'static str, f64); 44] {
        let (l, d, y, r, m, n, s) = (
            &self.lift,
            &self.drag,
            &self.side_force,
            &self.roll,
            &self.pitch,
            &self.yaw,
            &self.stall,
        );
        [
            ("lift.c_l_0", l.c_l_0),
            ("lift.c_l_alpha", l.c_l_alpha),
            ("lift.c_l_q", l.c_l_q),
            ("lift.c_l_deltae", l.c_l_deltae),
            ("lift.c_l_max", l.c_l_max),
            ("lift.c_l_min", l.c_l_min),
            ("lift.c_l_flap", l.c_l_flap),
            ("lift.c_l_spoiler", l.c_l_spoiler),
            ("lift.c_l_gear", l.c_l_gear),
            ("drag.c_d_0", d.c_d_0),
            ("drag.c_d_cl2", d.c_d_cl2),
            ("drag.c_l_min_drag", d.c_l_min_drag),
            ("drag.c_d_deltaa2", d.c_d_deltaa2),
            ("drag.c_d_deltae2", d.c_d_deltae2),
            ("drag.c_d_deltar2", d.c_d_deltar2),
            ("drag.c_d_flap", d.c_d_flap),
            ("drag.c_d_spoiler", d.c_d_spoiler),
            ("drag.c_d_gear", d.c_d_gear),
            ("drag.reynolds_ref_speed", d.reynolds_ref_speed),
            ("drag.reynolds_exponent", d.reynolds_exponent),
            ("side_force.c_y_beta", y.c_y_beta),
            ("side_force.c_y_p", y.c_y_p),
            ("side_force.c_y_r", y.c_y_r),
            ("side_force.c_y_deltaa", y.c_y_deltaa),
            ("side_force.c_y_deltar", y.c_y_deltar),
            ("roll.c_l_beta", r.c_l_beta),
            ("roll.c_l_p", r.c_l_p),
            ("roll.c_l_r", r.c_l_r),
            ("roll.c_l_deltaa", r.c_l_deltaa),
            ("roll.c_l_deltar", r.c_l_deltar),
            ("pitch.c_m_0", m.c_m_0),
            ("pitch.c_m_alpha", m.c_m_alpha),
            ("pitch.c_m_q", m.c_m_q),
            ("pitch.c_m_deltae", m.c_m_deltae),
            ("pitch.c_m_flap", m.c_m_flap),
            ("yaw.c_n_beta", n.c_n_beta),
            ("yaw.c_n_p", n.c_n_p),
            ("yaw.c_n_r", n.c_n_r),
            ("yaw.c_n_deltaa", n.c_n_deltaa),
            ("yaw.c_n_deltar", n.c_n_deltar),
            ("stall.c_d_stall", s.c_d_stall),
            ("stall.stall_drag_rate", s.stall_drag_rate),
            ("stall.c_l_stall", s.c_l_stall),
            ("stall.c_n_stall", s.c_n_stall),
        ]
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some((name, value)) = self
            .named_values()
            .into_iter()
            .find(|(_, value)| !value.is_finite())
        {
            return Err(ConfigError::ValidationError(format!(
                "aerodynamic coefficient {name} must be finite, got {value}"
            )));
        }
        if self.lift.c_l_max <= self.lift.c_l_min {
            return Err(ConfigError::ValidationError(format!(
                "c_l_max ({}) must exceed c_l_min ({})",
                self.lift.c_l_max, self.lift.c_l_min
            )));
        }
        if self.drag.reynolds_ref_speed <= 0.0 {
            return Err(ConfigError::ValidationError(
                "drag.reynolds_ref_speed must be positive".into(),
            ));
        }
        if self.stall.stall_drag_rate < 0.0 || self.stall.c_d_stall < 0.0 {
            return Err(ConfigError::ValidationError(
                "stall drag parameters must not be negative".into(),
            ));
        }
        Ok(())
    }
}
