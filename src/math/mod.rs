pub mod geodesy;
pub mod integrator;
pub mod linalg;
pub mod quaternion;

pub use geodesy::{
    geocentric_to_geodetic, geocentric_to_geodetic_iterative, geodetic_to_geocentric, Geocentric,
    Geodetic,
};
pub use integrator::{IntegrationRule, TwoSampleIntegrator};
pub use linalg::Matrix3Ext;
pub use quaternion::{euler_from_matrix, EulerAngles, QuaternionState};
