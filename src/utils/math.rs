use nalgebra::Vector3;
use std::f64::consts::PI;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor.clamp(0.0, 1.0)
}

/// Wrap an angle into [0, 2π).
#[inline]
pub fn wrap_two_pi(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(2.0 * PI);
    // rem_euclid can round up to exactly 2π for tiny negative inputs
    if wrapped >= 2.0 * PI {
        0.0
    } else {
        wrapped
    }
}

/// True when every component of the vector is finite.
#[inline]
pub fn is_finite_vec(v: &Vector3<f64>) -> bool {
    v.iter().all(|x| x.is_finite())
}

/// Calculate heading from a local-frame velocity vector
pub fn heading_from_velocity(velocity: &Vector3<f64>) -> f64 {
    velocity.y.atan2(velocity.x)
}

/// Calculate the flight path angle from a local-frame velocity vector
pub fn flight_path_angle(velocity: &Vector3<f64>) -> f64 {
    -velocity
        .z
        .atan2((velocity.x.powi(2) + velocity.y.powi(2)).sqrt())
}
