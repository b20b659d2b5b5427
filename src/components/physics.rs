use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

use crate::utils::is_finite_vec;

/// Force and moment about the centre of gravity, both in the body frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForceMoment {
    pub force: Vector3<f64>,
    pub moment: Vector3<f64>,
}

impl Default for ForceMoment {
    fn default() -> Self {
        Self::zero()
    }
}

impl ForceMoment {
    pub fn new(force: Vector3<f64>, moment: Vector3<f64>) -> Self {
        Self { force, moment }
    }

    pub fn zero() -> Self {
        Self {
            force: Vector3::zeros(),
            moment: Vector3::zeros(),
        }
    }

    pub fn is_finite(&self) -> bool {
        is_finite_vec(&self.force) && is_finite_vec(&self.moment)
    }
}

impl Add for ForceMoment {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            force: self.force + rhs.force,
            moment: self.moment + rhs.moment,
        }
    }
}

impl AddAssign for ForceMoment {
    fn add_assign(&mut self, rhs: Self) {
        self.force += rhs.force;
        self.moment += rhs.moment;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceCategory {
    Aerodynamic,
    Propulsive,
    Ground,
}

impl fmt::Display for ForceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForceCategory::Aerodynamic => write!(f, "aerodynamics"),
            ForceCategory::Propulsive => write!(f, "propulsion"),
            ForceCategory::Ground => write!(f, "ground contact"),
        }
    }
}

/// Per-substep contributions kept apart so a non-finite total can be traced
/// back to the model that produced it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ForceBreakdown {
    pub aerodynamic: ForceMoment,
    pub propulsive: ForceMoment,
    pub ground: ForceMoment,
}

impl ForceBreakdown {
    pub fn total(&self) -> ForceMoment {
        self.aerodynamic + self.propulsive + self.ground
    }

    /// Sources whose contribution is not finite.
    pub fn non_finite_sources(&self) -> Vec<ForceCategory> {
        [
            (ForceCategory::Aerodynamic, &self.aerodynamic),
            (ForceCategory::Propulsive, &self.propulsive),
            (ForceCategory::Ground, &self.ground),
        ]
        .into_iter()
        .filter(|(_, fm)| !fm.is_finite())
        .map(|(category, _)| category)
        .collect()
    }
}
