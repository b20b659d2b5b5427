//! Geocentric ↔ geodetic position conversion on the WGS84 ellipsoid.
//!
//! The flight model integrates geocentric latitude, longitude and radius.
//! These helpers keep the geodetic bookkeeping (latitude, altitude above the
//! ellipsoid, sea-level radius) consistent with that state. Two variants of
//! the geocentric-to-geodetic direction exist: a closed-form approximation
//! that is cheap enough to call every substep, and an iterative solution used
//! as a reference.

use serde::{Deserialize, Serialize};

use crate::utils::{EQUATORIAL_RADIUS, FLATTENING};

/// One arc second [rad]; latitudes closer than this to a pole are treated as polar.
const POLE_TOLERANCE: f64 = 4.848136811e-6;
const MAX_ITERATIONS: usize = 20;
const ITERATION_TOLERANCE: f64 = 1e-13;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geodetic {
    /// Geodetic latitude [rad]
    pub latitude: f64,
    /// Height above the ellipsoid [m]
    pub altitude: f64,
    /// Distance from the earth centre to the ellipsoid surface below the point [m]
    pub sea_level_radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geocentric {
    /// Geocentric latitude [rad]
    pub latitude: f64,
    /// Distance from the earth centre [m]
    pub radius: f64,
}

#[inline]
fn eccentricity_squared() -> f64 {
    FLATTENING * (2.0 - FLATTENING)
}

#[inline]
fn axis_ratio() -> f64 {
    1.0 - FLATTENING
}

/// Radius of the ellipsoid at geocentric latitude `lambda`.
fn ellipsoid_radius(lambda: f64) -> f64 {
    let ratio_sq = axis_ratio() * axis_ratio();
    let sin_l = lambda.sin();
    (EQUATORIAL_RADIUS * EQUATORIAL_RADIUS
        / (1.0 + (1.0 / ratio_sq - 1.0) * sin_l * sin_l))
        .sqrt()
}

/// Closed-form geocentric → geodetic conversion.
///
/// Projects the point onto the ellipsoid along the geocentric radius and
/// corrects the latitude using the local meridian curvature. Accurate to
/// centimetres for altitudes of a few kilometres.
pub fn geocentric_to_geodetic(geoc: Geocentric) -> Geodetic {
    let lat_geoc = geoc.latitude;
    let a = EQUATORIAL_RADIUS;
    let e2 = eccentricity_squared();
    let ratio = axis_ratio();

    if (std::f64::consts::FRAC_PI_2 - lat_geoc.abs()) < POLE_TOLERANCE {
        let polar_radius = a * ratio;
        return Geodetic {
            latitude: lat_geoc,
            altitude: geoc.radius - polar_radius,
            sea_level_radius: polar_radius,
        };
    }

    let t_lat = lat_geoc.tan();
    // surface point below the vehicle along the geocentric radius
    let x_alpha = ratio * a / (t_lat * t_lat + ratio * ratio).sqrt();
    let mut mu_alpha = (a * a - x_alpha * x_alpha).max(0.0).sqrt().atan2(ratio * x_alpha);
    if lat_geoc < 0.0 {
        mu_alpha = -mu_alpha;
    }
    let sin_mu_a = mu_alpha.sin();
    let delta_lambda = mu_alpha - lat_geoc;
    let r_alpha = x_alpha / lat_geoc.cos();
    let l_point = geoc.radius - r_alpha;
    let altitude = l_point * delta_lambda.cos();

    let denom = (1.0 - e2 * sin_mu_a * sin_mu_a).sqrt();
    let rho_alpha = a * (1.0 - e2) / (denom * denom * denom);
    let delta_mu = (l_point * delta_lambda.sin()).atan2(rho_alpha + altitude);
    let latitude = mu_alpha - delta_mu;

    let lambda_sl = (ratio * ratio * latitude.tan()).atan();
    Geodetic {
        latitude,
        altitude,
        sea_level_radius: ellipsoid_radius(lambda_sl),
    }
}

/// Iterative geocentric → geodetic conversion through the meridian-plane
/// coordinates; converges to round-off in a handful of iterations.
pub fn geocentric_to_geodetic_iterative(geoc: Geocentric) -> Geodetic {
    let a = EQUATORIAL_RADIUS;
    let e2 = eccentricity_squared();
    let p = geoc.radius * geoc.latitude.cos();
    let z = geoc.radius * geoc.latitude.sin();

    if p.abs() < 1e-9 {
        let polar_radius = a * axis_ratio();
        return Geodetic {
            latitude: geoc.latitude.signum() * std::f64::consts::FRAC_PI_2,
            altitude: z.abs() - polar_radius,
            sea_level_radius: polar_radius,
        };
    }

    let mut latitude = z.atan2(p * (1.0 - e2));
    let mut altitude = 0.0;
    for _ in 0..MAX_ITERATIONS {
        let sin_lat = latitude.sin();
        let n = a / (1.0 - e2 * sin_lat * sin_lat).sqrt();
        // pick the better conditioned projection for the altitude
        altitude = if latitude.abs() < std::f64::consts::FRAC_PI_4 {
            p / latitude.cos() - n
        } else {
            z / sin_lat - n * (1.0 - e2)
        };
        let next = z.atan2(p * (1.0 - e2 * n / (n + altitude)));
        let converged = (next - latitude).abs() < ITERATION_TOLERANCE;
        latitude = next;
        if converged {
            break;
        }
    }

    let lambda_sl = (axis_ratio() * axis_ratio() * latitude.tan()).atan();
    Geodetic {
        latitude,
        altitude,
        sea_level_radius: ellipsoid_radius(lambda_sl),
    }
}

/// Geodetic → geocentric conversion. Returns the geocentric position and the
/// sea-level radius below it.
pub fn geodetic_to_geocentric(latitude: f64, altitude: f64) -> (Geocentric, f64) {
    let ratio = axis_ratio();
    let (sin_mu, cos_mu) = latitude.sin_cos();
    let lambda_sl = (ratio * ratio * latitude.tan()).atan();
    let (sin_l, cos_l) = lambda_sl.sin_cos();
    let sea_level_radius = ellipsoid_radius(lambda_sl);

    let px = sea_level_radius * cos_l + altitude * cos_mu;
    let py = sea_level_radius * sin_l + altitude * sin_mu;
    (
        Geocentric {
            latitude: py.atan2(px),
            radius: (px * px + py * py).sqrt(),
        },
        sea_level_radius,
    )
}
