//! Conversions between the coordinate schemes used by China-facing map
//! services:
//!
//! * **WGS84**, the global standard,
//! * **GCJ02**, the state mandated obfuscation of WGS84 (Amap, Tencent Maps),
//! * **BD09** ("bd09ll"), Baidu's obfuscation of GCJ02,
//! * **BD09MC**, Baidu's meter based projection of BD09.
//!
//! Every conversion is available as a plain function on `f64` pairs. Lat/lon
//! pairs are always `(lat, lon)`; BD09MC pairs are always `(x, y)`.
//!
//! ```
//! use coordtransform::{bd09mc_to_wgs84, wgs84_to_bd09mc};
//!
//! let (x, y) = wgs84_to_bd09mc(22.543415, 113.929665);
//! let (lat, lon) = bd09mc_to_wgs84(x, y);
//!
//! assert!((lat - 22.543415).abs() < 1e-4);
//! assert!((lon - 113.929665).abs() < 1e-4);
//! ```
//!
//! The typed API in [`LatLon`] and [`Bd09Mc`] carries the scheme along with
//! the value, so coordinates of different schemes cannot be mixed up.
//!
//! The formulas are the ones the map providers use and are approximate by
//! nature: GCJ02 -> WGS84 drifts by about a meter, and some BD09MC bands are
//! fitted less well than others.

#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::module_name_repetitions
)]

use thiserror::Error;

pub mod format;
pub mod latlon;
pub mod mercator;
pub mod region;
pub mod scheme;

pub mod transform {
    pub mod bd09;
    pub mod bd09mc;
    pub mod compose;
    pub mod gcj02;
}

pub(crate) mod constants;
pub(crate) mod utility;

pub use latlon::LatLon;
pub use mercator::Bd09Mc;
pub use region::{in_china, BORDER_DETECTION_ENABLED};
pub use scheme::{Bd09, Datum, Gcj02, Scheme, Wgs84};
pub use transform::{
    bd09::{bd09_to_gcj02, gcj02_to_bd09},
    bd09mc::{bd09_to_bd09mc, bd09mc_to_bd09},
    compose::{
        bd09_to_wgs84, bd09mc_to_gcj02, bd09mc_to_wgs84, convert, gcj02_to_bd09mc, wgs84_to_bd09,
        wgs84_to_bd09mc,
    },
    gcj02::{gcj02_to_wgs84, wgs84_to_gcj02},
};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Coordinate parameters are not valid: {0}")]
    InvalidCoord(String),
    #[error("BD09MC coordinate is invalid: {0}")]
    InvalidMercator(String),
    #[error("Cannot parse coordinate pair: {0}")]
    ParseCoord(String),
    #[error("Unknown coordinate scheme {0:?}, expected one of wgs84, gcj02, bd09, bd09mc")]
    UnknownScheme(String),
}

pub trait ParseCoord {
    /// Parses a coordinate from its textual form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseCoord`] if the text is not a pair of numbers, or the
    /// type's own validation error if the numbers are out of range.
    fn parse_coord(value: &str) -> Result<Self, Error>
    where Self: Sized;
}

/// Parses any [`ParseCoord`] type from a string.
///
/// # Errors
///
/// See [`ParseCoord::parse_coord`].
///
/// # Usage
///
/// ```
/// use coordtransform::{Bd09Mc, LatLon, Wgs84};
///
/// let point: LatLon<Wgs84> = coordtransform::from_str("22.543415, 113.929665").unwrap();
/// assert_eq!(point.latitude(), 22.543415);
///
/// let projected: Bd09Mc = coordtransform::from_str("12684001 2560682.4").unwrap();
/// assert_eq!(projected.y(), 2560682.4);
/// ```
pub fn from_str<S, T>(value: S) -> Result<T, Error>
where
    S: AsRef<str>,
    T: ParseCoord
{
    T::parse_coord(value.as_ref())
}

trait ThisOrThat {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T;
}

impl ThisOrThat for bool {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T {
        if *self { r#true } else { r#false }
    }
}
