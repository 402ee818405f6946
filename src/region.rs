//! Rough "is this point in China" test used to optionally skip the GCJ02
//! distortion.
//!
//! The box is generous: it also covers parts of neighbouring countries, and no
//! rectangle can follow the actual border. Because of that the gate is off
//! unless the crate is built with the `border-detection` feature, and every
//! point is shifted regardless of where it lies.

/// Whether [`wgs84_to_gcj02`](crate::wgs84_to_gcj02) and
/// [`gcj02_to_wgs84`](crate::gcj02_to_wgs84) leave points outside [`CHINA`]
/// untouched. Fixed at compile time by the `border-detection` feature.
pub const BORDER_DETECTION_ENABLED: bool = cfg!(feature = "border-detection");

/// Closed, axis-aligned latitude/longitude rectangle in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

/// Approximate extent of mainland China.
///
/// Preview: <https://www.openstreetmap.org/?bbox=73.55,17.95752,134.75,53.56082>
#[allow(clippy::unreadable_literal)]
pub const CHINA: BoundingBox = BoundingBox::new(17.95752, 53.56082, 73.55, 134.75);

impl BoundingBox {
    pub const fn new(lat_min: f64, lat_max: f64, lon_min: f64, lon_max: f64) -> BoundingBox {
        Self {
            lat_min,
            lat_max,
            lon_min,
            lon_max,
        }
    }

    /// Returns whether the point lies inside the box, bounds included.
    ///
    /// # Example
    ///
    /// ```
    /// use coordtransform::region::BoundingBox;
    ///
    /// let bbox = BoundingBox::new(10.0, 20.0, 100.0, 110.0);
    /// assert!(bbox.contains(10.0, 110.0));
    /// assert!(!bbox.contains(20.000001, 105.0));
    /// ```
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.lat_min..=self.lat_max).contains(&lat) && (self.lon_min..=self.lon_max).contains(&lon)
    }
}

/// Returns whether a WGS84/GCJ02 point falls inside [`CHINA`].
///
/// # Usage
///
/// ```
/// use coordtransform::in_china;
///
/// // Shenzhen
/// assert!(in_china(22.543415, 113.929665));
/// // Corners are inclusive
/// assert!(in_china(17.95752, 73.55));
/// assert!(in_china(53.56082, 134.75));
/// // London
/// assert!(!in_china(51.5, -0.12));
/// ```
pub fn in_china(lat: f64, lon: f64) -> bool {
    CHINA.contains(lat, lon)
}

pub(crate) fn skips_distortion(lat: f64, lon: f64) -> bool {
    let skip = BORDER_DETECTION_ENABLED && !in_china(lat, lon);
    if skip {
        log::trace!("{lat}, {lon} lies outside China, left unshifted");
    }
    skip
}
