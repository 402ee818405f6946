use std::f64::consts::PI;

// Krasovsky 1940 semi-major axis
pub(crate) const KRASOVSKY_A: f64 = 6_378_245.;
// First eccentricity squared, 2f - f^2 with f = 1 / 298.3
#[allow(clippy::unreadable_literal)]
pub(crate) const KRASOVSKY_E2: f64 = 0.006693421622965943;

pub(crate) const DEG_TO_RAD: f64 = PI / 180.;

// GCJ02 distortion origin
pub(crate) const GCJ02_ORIGIN_LAT: f64 = 35.;
pub(crate) const GCJ02_ORIGIN_LON: f64 = 105.;

// BD09 polar nudge
pub(crate) const BD09_X_PI: f64 = DEG_TO_RAD * 3000.;
pub(crate) const BD09_RADIUS_NUDGE: f64 = 0.000_02;
pub(crate) const BD09_ANGLE_NUDGE: f64 = 0.000_003;
pub(crate) const BD09_LAT_SHIFT: f64 = 0.006;
pub(crate) const BD09_LON_SHIFT: f64 = 0.0065;

/// Half of the BD09MC easting period
#[allow(clippy::unreadable_literal)]
pub const BD09MC_X_LIMIT: f64 = 20037726.372307256;
/// Southern saturation bound of BD09MC northing
pub const BD09MC_Y_MIN: f64 = -16_022_031.;
/// Northern saturation bound of BD09MC northing
pub const BD09MC_Y_MAX: f64 = 19_429_903.;
