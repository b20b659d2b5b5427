pub const GRAVITY: f64 = 9.80665; // m/s^2
pub const AIR_GAS_CONSTANT: f64 = 287.05287; // J/(kg·K)
pub const ISA_SEA_LEVEL_TEMP: f64 = 288.15; // K
pub const ISA_SEA_LEVEL_DENSITY: f64 = 1.225; // kg/m^3
pub const ISA_LAPSE_RATE: f64 = -0.0065; // K/m
pub const ISA_TROPOPAUSE: f64 = 11000.0; // m

// WGS84 ellipsoid
pub const EQUATORIAL_RADIUS: f64 = 6378137.0; // m
pub const FLATTENING: f64 = 1.0 / 298.257223563;

/// Largest rotation the attitude integrator accepts in a single step [rad].
pub const MAX_STEP_ROTATION: f64 = std::f64::consts::FRAC_PI_2;

/// Below this airspeed the Reynolds-number drag correction is skipped [m/s].
pub const REYNOLDS_MIN_AIRSPEED: f64 = 0.1;
