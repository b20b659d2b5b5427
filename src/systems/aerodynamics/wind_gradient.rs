//! Spatial gradient of the mean wind around the airframe.

use nalgebra::{Matrix3, Vector3};

use crate::math::Matrix3Ext;
use crate::resources::Environment;

/// Samples the wind at six points, ±`size`/2 along each body axis, and forms
/// the gradient by central differences.
///
/// The result is in the body frame: entry `(i, j)` is ∂wᵢ/∂xⱼ, the change of
/// body-axis wind component `i` along body axis `j`. The spacing is large
/// enough to stay above the noise of the wind field and small enough to
/// resolve its curl across the span.
///
/// # Arguments
/// * `env` - Wind source.
/// * `position_local` - Centre of gravity (north, east, down) [m].
/// * `local_to_body` - Current attitude transform.
/// * `size` - Characteristic size of the airframe [m].
pub fn sample_wind_gradient(
    env: &dyn Environment,
    position_local: &Vector3<f64>,
    local_to_body: &Matrix3<f64>,
    size: f64,
) -> Matrix3<f64> {
    let mut gradient = Matrix3::zeros();
    if !(size.is_finite() && size > 0.0) {
        return gradient;
    }
    let half = 0.5 * size;

    for axis in 0..3 {
        let offset = local_to_body.transpose_transform(&(Vector3::ith(axis, half)));
        let ahead = env.wind(&(position_local + offset)).velocity;
        let behind = env.wind(&(position_local - offset)).velocity;
        let difference = local_to_body.transform(&(ahead - behind)) / size;
        gradient.set_column(axis, &difference);
    }
    gradient
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{EulerAngles, QuaternionState};
    use crate::resources::{EnvironmentConfig, StandardEnvironment};
    use approx::assert_relative_eq;

    #[test]
    fn test_uniform_wind_has_no_gradient() {
        let env = StandardEnvironment::new(EnvironmentConfig::with_constant_wind(8.0, 0.3));
        let attitude = QuaternionState::from_euler(EulerAngles::new(0.2, 0.1, 1.0));
        let gradient = sample_wind_gradient(
            &env,
            &Vector3::new(10.0, -5.0, -50.0),
            attitude.local_to_body(),
            1.5,
        );
        assert_relative_eq!(gradient, Matrix3::zeros(), epsilon = 1e-12);
    }

    #[test]
    fn test_shear_along_vertical_axis() {
        // u = u_r · (h / z_r)^1 is linear in height: ∂u/∂h = u_r / z_r
        let env = StandardEnvironment::new(EnvironmentConfig::with_power_law_wind(
            5.0, 10.0, 0.0, 1.0,
        ));
        let level = QuaternionState::identity();
        let gradient = sample_wind_gradient(
            &env,
            &Vector3::new(0.0, 0.0, -20.0),
            level.local_to_body(),
            2.0,
        );
        // body z points down, so the north wind falls along +z
        assert_relative_eq!(gradient[(0, 2)], -0.5, epsilon = 1e-12);
        assert_relative_eq!(gradient[(0, 0)], 0.0, epsilon = 1e-12);
        assert_relative_eq!(gradient[(1, 2)], 0.0, epsilon = 1e-12);
    }
}
