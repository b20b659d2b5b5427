//! Attitude quaternion with cached transform matrix and Euler angles.
//!
//! The quaternion `q = (w, x, y, z)` rotates body-frame vectors into the
//! local (north-east-down) frame. With body rates `ω = (p, q, r)` its
//! kinematics are
//!
//! ```text
//! q̇ = ½ · q ⊗ (0, ω) = ½ · Ω(ω) · q
//!
//!          ⎡ 0  −p  −q  −r ⎤
//! Ω(ω) =   ⎢ p   0   r  −q ⎥
//!          ⎢ q  −r   0   p ⎥
//!          ⎣ r   q  −p   0 ⎦
//! ```
//!
//! Each step integrates `q̇` with the trapezoidal two-sample rule and then
//! divides by the norm. The integration alone drifts off the unit sphere;
//! the renormalization is part of the scheme, not a clean-up.

use nalgebra::{Matrix3, Quaternion, UnitQuaternion, Vector3, Vector4};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::math::integrator::{IntegrationRule, TwoSampleIntegrator};
use crate::utils::wrap_two_pi;

/// Roll/pitch/yaw of the 3-2-1 sequence, local to body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EulerAngles {
    /// Roll [rad]
    pub phi: f64,
    /// Pitch [rad]
    pub theta: f64,
    /// Heading [rad], in [0, 2π)
    pub psi: f64,
}

impl EulerAngles {
    pub fn new(phi: f64, theta: f64, psi: f64) -> Self {
        Self { phi, theta, psi }
    }
}

#[derive(Debug, Clone)]
pub struct QuaternionState {
    /// (w, x, y, z)
    coords: Vector4<f64>,
    integrator: TwoSampleIntegrator<Vector4<f64>>,
    local_to_body: Matrix3<f64>,
    euler: EulerAngles,
}

impl QuaternionState {
    pub fn identity() -> Self {
        Self::from_coords(Vector4::new(1.0, 0.0, 0.0, 0.0))
    }

    pub fn from_euler(angles: EulerAngles) -> Self {
        let (sp, cp) = (0.5 * angles.phi).sin_cos();
        let (st, ct) = (0.5 * angles.theta).sin_cos();
        let (ss, cs) = (0.5 * angles.psi).sin_cos();

        Self::from_coords(Vector4::new(
            cp * ct * cs + sp * st * ss,
            sp * ct * cs - cp * st * ss,
            cp * st * cs + sp * ct * ss,
            cp * ct * ss - sp * st * cs,
        ))
    }

    fn from_coords(coords: Vector4<f64>) -> Self {
        let mut state = Self {
            coords: coords / coords.norm(),
            integrator: TwoSampleIntegrator::new(IntegrationRule::Trapezoidal, Vector4::zeros()),
            local_to_body: Matrix3::identity(),
            euler: EulerAngles::default(),
        };
        state.refresh();
        state
    }

    /// Seeds the derivative history from the current body rates.
    pub fn seed(&mut self, omega_body: &Vector3<f64>) {
        let derivative = self.derivative(omega_body);
        self.integrator.seed(derivative);
    }

    /// Advances the attitude by one step of body rates `omega_body`.
    pub fn step(&mut self, omega_body: &Vector3<f64>, dt: f64) {
        let derivative = self.derivative(omega_body);
        let next = self.integrator.step(self.coords, derivative, dt);

        let norm = next.norm();
        if !norm.is_finite() || norm == 0.0 {
            error!(
                norm,
                "Quaternion integration produced a degenerate value, keeping previous attitude"
            );
            return;
        }
        self.coords = next / norm;
        self.refresh();
    }

    fn derivative(&self, omega: &Vector3<f64>) -> Vector4<f64> {
        let (w, x, y, z) = (self.coords[0], self.coords[1], self.coords[2], self.coords[3]);
        let (p, q, r) = (omega.x, omega.y, omega.z);
        Vector4::new(
            -x * p - y * q - z * r,
            w * p + y * r - z * q,
            w * q + z * p - x * r,
            w * r + x * q - y * p,
        ) * 0.5
    }

    fn refresh(&mut self) {
        let (w, x, y, z) = (self.coords[0], self.coords[1], self.coords[2], self.coords[3]);

        // transpose of the body-to-local rotation
        self.local_to_body = Matrix3::new(
            1.0 - 2.0 * (y * y + z * z),
            2.0 * (x * y + w * z),
            2.0 * (x * z - w * y),
            2.0 * (x * y - w * z),
            1.0 - 2.0 * (x * x + z * z),
            2.0 * (y * z + w * x),
            2.0 * (x * z + w * y),
            2.0 * (y * z - w * x),
            1.0 - 2.0 * (x * x + y * y),
        );
        self.euler = euler_from_matrix(&self.local_to_body);
    }

    /// Local-to-body transform `T`; its transpose maps body to local.
    pub fn local_to_body(&self) -> &Matrix3<f64> {
        &self.local_to_body
    }

    pub fn euler(&self) -> EulerAngles {
        self.euler
    }

    /// Raw norm of the stored components.
    pub fn norm(&self) -> f64 {
        self.coords.norm()
    }

    /// Body-to-local rotation for hosts that render with `nalgebra` types.
    pub fn attitude(&self) -> UnitQuaternion<f64> {
        UnitQuaternion::from_quaternion(Quaternion::new(
            self.coords[0],
            self.coords[1],
            self.coords[2],
            self.coords[3],
        ))
    }
}

/// Euler angles from a local-to-body matrix.
///
/// A zero denominator element short-circuits the angle to zero instead of
/// relying on the `atan2` convention. Near ±90° pitch the roll/heading split
/// is not meaningful; this extraction does not try to resolve gimbal lock.
pub fn euler_from_matrix(t: &Matrix3<f64>) -> EulerAngles {
    let theta = (-t[(0, 2)]).clamp(-1.0, 1.0).asin();
    let phi = if t[(2, 2)] == 0.0 {
        0.0
    } else {
        t[(1, 2)].atan2(t[(2, 2)])
    };
    let psi = if t[(0, 0)] == 0.0 {
        0.0
    } else {
        wrap_two_pi(t[(0, 1)].atan2(t[(0, 0)]))
    };
    EulerAngles { phi, theta, psi }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::linalg::Matrix3Ext;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_euler_round_trip() {
        let cases = [
            EulerAngles::new(0.1, 0.2, 0.3),
            EulerAngles::new(-1.2, 0.7, 5.9),
            EulerAngles::new(2.5, -1.3, 3.0),
            EulerAngles::new(0.0, 0.0, 0.0),
        ];
        for angles in cases {
            let state = QuaternionState::from_euler(angles);
            let back = state.euler();
            assert_relative_eq!(back.phi, angles.phi, epsilon = 1e-9);
            assert_relative_eq!(back.theta, angles.theta, epsilon = 1e-9);
            assert_relative_eq!(back.psi, angles.psi, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_matrix_matches_nalgebra_rotation() {
        let state = QuaternionState::from_euler(EulerAngles::new(0.3, -0.4, 1.1));
        let expected = UnitQuaternion::from_euler_angles(0.3, -0.4, 1.1)
            .to_rotation_matrix()
            .matrix()
            .transpose();
        assert_relative_eq!(*state.local_to_body(), expected, epsilon = 1e-12);
        assert!(state.local_to_body().is_orthonormal(1e-12));
    }

    #[test]
    fn test_norm_stays_unit_under_rates() {
        let mut state = QuaternionState::from_euler(EulerAngles::new(0.2, 0.1, 0.0));
        let dt = 0.01;
        let mut omega = Vector3::new(1.5, -0.7, 2.3);
        state.seed(&omega);
        for n in 0..2000 {
            omega = Vector3::new(
                3.0 * (0.01 * n as f64).sin(),
                -2.0 * (0.02 * n as f64).cos(),
                1.0,
            );
            state.step(&omega, dt);
            assert!((state.norm() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_constant_yaw_rate_heading() {
        let mut state = QuaternionState::identity();
        let omega = Vector3::new(0.0, 0.0, 0.5);
        state.seed(&omega);
        for _ in 0..100 {
            state.step(&omega, 0.01);
        }
        let euler = state.euler();
        assert_relative_eq!(euler.psi, 0.5, epsilon = 1e-4);
        assert_relative_eq!(euler.phi, 0.0, epsilon = 1e-12);
        assert_relative_eq!(euler.theta, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_element_fallback() {
        // 90° roll puts T33 at exactly zero; roll reads back as zero.
        let t = Matrix3::new(1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, -1.0, 0.0);
        let euler = euler_from_matrix(&t);
        assert_eq!(euler.phi, 0.0);
        assert_relative_eq!(euler.theta, 0.0);
        assert!(!euler.psi.is_nan());
        assert!(euler.psi < 2.0 * PI);
    }
}
