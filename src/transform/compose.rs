//! Conversions that chain the primitive ones, plus [`convert`] for picking a
//! conversion at runtime.

use crate::Scheme;

use super::{
    bd09::{bd09_to_gcj02, gcj02_to_bd09},
    bd09mc::{bd09_to_bd09mc, bd09mc_to_bd09},
    gcj02::{gcj02_to_wgs84, wgs84_to_gcj02},
};

/// WGS84 -> BD09, by way of GCJ02.
///
/// # Usage
///
/// ```
/// use coordtransform::{gcj02_to_bd09, wgs84_to_bd09, wgs84_to_gcj02};
///
/// let (lat, lon) = wgs84_to_gcj02(22.543415, 113.929665);
/// assert_eq!(wgs84_to_bd09(22.543415, 113.929665), gcj02_to_bd09(lat, lon));
/// ```
pub fn wgs84_to_bd09(lat: f64, lon: f64) -> (f64, f64) {
    let (lat, lon) = wgs84_to_gcj02(lat, lon);
    gcj02_to_bd09(lat, lon)
}

/// WGS84 -> BD09MC, by way of GCJ02 and BD09. Returns `(x, y)`.
pub fn wgs84_to_bd09mc(lat: f64, lon: f64) -> (f64, f64) {
    let (lat, lon) = wgs84_to_bd09(lat, lon);
    bd09_to_bd09mc(lat, lon)
}

/// BD09 -> WGS84, by way of GCJ02.
pub fn bd09_to_wgs84(lat: f64, lon: f64) -> (f64, f64) {
    let (lat, lon) = bd09_to_gcj02(lat, lon);
    gcj02_to_wgs84(lat, lon)
}

/// BD09MC `(x, y)` -> WGS84, by way of BD09 and GCJ02.
pub fn bd09mc_to_wgs84(x: f64, y: f64) -> (f64, f64) {
    let (lat, lon) = bd09mc_to_bd09(x, y);
    bd09_to_wgs84(lat, lon)
}

/// GCJ02 -> BD09MC, by way of BD09. Returns `(x, y)`.
pub fn gcj02_to_bd09mc(lat: f64, lon: f64) -> (f64, f64) {
    let (lat, lon) = gcj02_to_bd09(lat, lon);
    bd09_to_bd09mc(lat, lon)
}

/// BD09MC `(x, y)` -> GCJ02, by way of BD09.
pub fn bd09mc_to_gcj02(x: f64, y: f64) -> (f64, f64) {
    let (lat, lon) = bd09mc_to_bd09(x, y);
    bd09_to_gcj02(lat, lon)
}

/// Converts a pair from one scheme to another. Pairs are `(lat, lon)` for the
/// degree based schemes and `(x, y)` for [`Scheme::Bd09Mc`]. Converting a
/// scheme to itself returns the input.
///
/// # Usage
///
/// ```
/// use coordtransform::{convert, wgs84_to_bd09mc, Scheme};
///
/// let converted = convert(Scheme::Wgs84, Scheme::Bd09Mc, 22.543415, 113.929665);
/// assert_eq!(converted, wgs84_to_bd09mc(22.543415, 113.929665));
///
/// let same = convert(Scheme::Gcj02, Scheme::Gcj02, 22.540385, 113.934532);
/// assert_eq!(same, (22.540385, 113.934532));
/// ```
pub fn convert(from: Scheme, to: Scheme, a: f64, b: f64) -> (f64, f64) {
    let conversion: fn(f64, f64) -> (f64, f64) = match (from, to) {
        (Scheme::Wgs84, Scheme::Gcj02) => wgs84_to_gcj02,
        (Scheme::Wgs84, Scheme::Bd09) => wgs84_to_bd09,
        (Scheme::Wgs84, Scheme::Bd09Mc) => wgs84_to_bd09mc,
        (Scheme::Gcj02, Scheme::Wgs84) => gcj02_to_wgs84,
        (Scheme::Gcj02, Scheme::Bd09) => gcj02_to_bd09,
        (Scheme::Gcj02, Scheme::Bd09Mc) => gcj02_to_bd09mc,
        (Scheme::Bd09, Scheme::Wgs84) => bd09_to_wgs84,
        (Scheme::Bd09, Scheme::Gcj02) => bd09_to_gcj02,
        (Scheme::Bd09, Scheme::Bd09Mc) => bd09_to_bd09mc,
        (Scheme::Bd09Mc, Scheme::Wgs84) => bd09mc_to_wgs84,
        (Scheme::Bd09Mc, Scheme::Gcj02) => bd09mc_to_gcj02,
        (Scheme::Bd09Mc, Scheme::Bd09) => bd09mc_to_bd09,
        (Scheme::Wgs84, Scheme::Wgs84)
        | (Scheme::Gcj02, Scheme::Gcj02)
        | (Scheme::Bd09, Scheme::Bd09)
        | (Scheme::Bd09Mc, Scheme::Bd09Mc) => return (a, b),
    };

    conversion(a, b)
}
