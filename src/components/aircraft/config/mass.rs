use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::math::Matrix3Ext;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MassModel {
    /// Total mass of the aircraft (kg).
    pub mass: f64,
    /// Moment of inertia about the x-axis (kg·m²).
    pub ixx: f64,
    /// Moment of inertia about the y-axis (kg·m²).
    pub iyy: f64,
    /// Moment of inertia about the z-axis (kg·m²).
    pub izz: f64,
    /// Product of inertia between the x and z axes (kg·m²).
    pub ixz: f64,
}

impl MassModel {
    /// Creates a new `MassModel` instance with specified mass and inertia components.
    ///
    /// # Arguments
    /// * `mass` - Total mass of the aircraft (kg).
    /// * `ixx` - Moment of inertia about the x-axis (kg·m²).
    /// * `iyy` - Moment of inertia about the y-axis (kg·m²).
    /// * `izz` - Moment of inertia about the z-axis (kg·m²).
    /// * `ixz` - Product of inertia between the x and z axes (kg·m²).
    pub fn new(mass: f64, ixx: f64, iyy: f64, izz: f64, ixz: f64) -> Self {
        Self {
            mass,
            ixx,
            iyy,
            izz,
            ixz,
        }
    }

    /// Two-seat light trainer, 10 m span.
    pub fn trainer() -> Self {
        Self::new(750.0, 1300.0, 1800.0, 2600.0, 50.0)
    }

    /// The inertia tensor, with the product term in the usual negative convention.
    pub fn inertia(&self) -> Matrix3<f64> {
        Matrix3::new(
            self.ixx, 0.0, -self.ixz, //
            0.0, self.iyy, 0.0, //
            -self.ixz, 0.0, self.izz,
        )
    }

    /// `I⁻¹ · v` in closed form, using that only the x-z product term is non-zero.
    pub fn apply_inverse_inertia(&self, v: &Vector3<f64>) -> Vector3<f64> {
        let gamma = self.ixx * self.izz - self.ixz * self.ixz;
        Vector3::new(
            (self.izz * v.x + self.ixz * v.z) / gamma,
            v.y / self.iyy,
            (self.ixz * v.x + self.ixx * v.z) / gamma,
        )
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "mass must be positive, got {}",
                self.mass
            )));
        }
        for (name, value) in [("ixx", self.ixx), ("iyy", self.iyy), ("izz", self.izz)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if !self.ixz.is_finite() {
            return Err(ConfigError::ValidationError("ixz must be finite".into()));
        }
        if self.inertia().cofactor_inverse().is_none()
            || self.ixx * self.izz - self.ixz * self.ixz <= 0.0
        {
            return Err(ConfigError::ValidationError(
                "inertia tensor is not invertible".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_closed_form_inverse_matches_cramer() {
        let mass = MassModel::new(2.0, 0.3, 0.5, 0.7, 0.05);
        let v = Vector3::new(1.0, -2.0, 3.0);
        let expected = mass.inertia().cofactor_inverse().unwrap() * v;
        assert_relative_eq!(mass.apply_inverse_inertia(&v), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_singular_inertia_rejected() {
        // ixx * izz == ixz²
        let mass = MassModel::new(1.0, 1.0, 1.0, 1.0, 1.0);
        assert!(mass.validate().is_err());
    }

    #[test]
    fn test_non_positive_mass_rejected() {
        let mut mass = MassModel::trainer();
        mass.mass = 0.0;
        assert!(mass.validate().is_err());
        assert!(MassModel::trainer().validate().is_ok());
    }
}
