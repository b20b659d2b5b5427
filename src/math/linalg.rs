//! Small 3x3 linear-algebra kernel on top of `nalgebra` storage types.
//!
//! `nalgebra` already covers cross/dot products and matrix products. What the
//! flight model needs on top is a transpose-transform that avoids building the
//! transpose, and an explicit cofactor (Cramer) inverse that reports a
//! singular matrix instead of falling back to a default.

use nalgebra::{Matrix3, Vector3};

pub trait Matrix3Ext {
    /// `M * v`.
    fn transform(&self, v: &Vector3<f64>) -> Vector3<f64>;

    /// `Mᵀ * v` without materializing the transpose.
    fn transpose_transform(&self, v: &Vector3<f64>) -> Vector3<f64>;

    /// Inverse by cofactor expansion. `None` when the determinant is exactly zero.
    fn cofactor_inverse(&self) -> Option<Matrix3<f64>>;

    /// Checks `M * Mᵀ ≈ I` within `tolerance` element-wise.
    fn is_orthonormal(&self, tolerance: f64) -> bool;
}

impl Matrix3Ext for Matrix3<f64> {
    #[inline]
    fn transform(&self, v: &Vector3<f64>) -> Vector3<f64> {
        Vector3::new(
            self[(0, 0)] * v.x + self[(0, 1)] * v.y + self[(0, 2)] * v.z,
            self[(1, 0)] * v.x + self[(1, 1)] * v.y + self[(1, 2)] * v.z,
            self[(2, 0)] * v.x + self[(2, 1)] * v.y + self[(2, 2)] * v.z,
        )
    }

    #[inline]
    fn transpose_transform(&self, v: &Vector3<f64>) -> Vector3<f64> {
        Vector3::new(
            self[(0, 0)] * v.x + self[(1, 0)] * v.y + self[(2, 0)] * v.z,
            self[(0, 1)] * v.x + self[(1, 1)] * v.y + self[(2, 1)] * v.z,
            self[(0, 2)] * v.x + self[(1, 2)] * v.y + self[(2, 2)] * v.z,
        )
    }

    fn cofactor_inverse(&self) -> Option<Matrix3<f64>> {
        let m = |r: usize, c: usize| self[(r, c)];

        // cofactors of the first row
        let c00 = m(1, 1) * m(2, 2) - m(1, 2) * m(2, 1);
        let c01 = m(1, 2) * m(2, 0) - m(1, 0) * m(2, 2);
        let c02 = m(1, 0) * m(2, 1) - m(1, 1) * m(2, 0);

        let det = m(0, 0) * c00 + m(0, 1) * c01 + m(0, 2) * c02;
        if det == 0.0 {
            return None;
        }
        let inv_det = 1.0 / det;

        let c10 = m(0, 2) * m(2, 1) - m(0, 1) * m(2, 2);
        let c11 = m(0, 0) * m(2, 2) - m(0, 2) * m(2, 0);
        let c12 = m(0, 1) * m(2, 0) - m(0, 0) * m(2, 1);

        let c20 = m(0, 1) * m(1, 2) - m(0, 2) * m(1, 1);
        let c21 = m(0, 2) * m(1, 0) - m(0, 0) * m(1, 2);
        let c22 = m(0, 0) * m(1, 1) - m(0, 1) * m(1, 0);

        // adjugate is the transposed cofactor matrix
        Some(
            Matrix3::new(
                c00, c10, c20, //
                c01, c11, c21, //
                c02, c12, c22,
            ) * inv_det,
        )
    }

    fn is_orthonormal(&self, tolerance: f64) -> bool {
        let product = self * self.transpose();
        (product - Matrix3::identity())
            .iter()
            .all(|e| e.abs() <= tolerance)
    }
}
