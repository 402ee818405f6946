use std::{fmt::Display, str::FromStr};

use crate::{
    constants::{BD09MC_X_LIMIT, BD09MC_Y_MAX, BD09MC_Y_MIN},
    format::write_pair,
    latlon::LatLon,
    scheme::{Datum, Scheme},
    transform::compose,
    utility::parse_pair,
    Error, ParseCoord,
};

/// A point in Baidu's projected BD09MC scheme, in meters. `x` grows eastward
/// with longitude, `y` northward with latitude.
///
/// Converting from lat/lon always produces an `x` within
/// `[-BD09MC_X_LIMIT, BD09MC_X_LIMIT]` and a `y` within
/// `[BD09MC_Y_MIN, BD09MC_Y_MAX]`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bd09Mc {
    pub(crate) x: f64,
    pub(crate) y: f64,
}

impl Bd09Mc {
    /// Internal-only constructor that doesn't check the coordinate
    pub(crate) fn new(x: f64, y: f64) -> Bd09Mc {
        Self { x, y }
    }

    /// Tries to create a BD09MC point. The easting must lie within one period,
    /// `[-20037726.372307256, 20037726.372307256]`, and the northing within
    /// `[-16022031, 19429903]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMercator`] if either value is out of range or not finite.
    ///
    /// # Usage
    ///
    /// ```
    /// use coordtransform::Bd09Mc;
    ///
    /// let coord = Bd09Mc::create(12684001.0, 2560682.4).unwrap();
    ///
    /// assert_eq!(coord.x(), 12684001.0);
    /// assert_eq!(coord.y(), 2560682.4);
    ///
    /// assert!(Bd09Mc::create(3e7, 0.0).is_err());
    /// assert!(Bd09Mc::create(0.0, -2e7).is_err());
    /// assert!(Bd09Mc::create(f64::NAN, 0.0).is_err());
    /// ```
    pub fn create(x: f64, y: f64) -> Result<Bd09Mc, Error> {
        check_coords(x, y)?;

        Ok(Bd09Mc::new(x, y))
    }

    /// Returns the easting in meters.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the northing in meters.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Converts from any lat/lon scheme to [`Bd09Mc`]
    ///
    /// # Usage
    ///
    /// ```
    /// use coordtransform::{Bd09Mc, LatLon, Wgs84};
    ///
    /// let coord = LatLon::<Wgs84>::create(40.049694, 116.294717).unwrap();
    /// let projected = Bd09Mc::from_latlon(&coord);
    ///
    /// // Baidu Building, Beijing
    /// assert!((projected.x() - 12947403.2).abs() < 2.0);
    /// assert!((projected.y() - 4846489.6).abs() < 2.0);
    /// ```
    pub fn from_latlon<S: Datum>(value: &LatLon<S>) -> Bd09Mc {
        let (x, y) = compose::convert(S::SCHEME, Scheme::Bd09Mc, value.latitude, value.longitude);
        Bd09Mc::new(x, y)
    }

    /// Converts from [`Bd09Mc`] to any lat/lon scheme
    ///
    /// # Usage
    ///
    /// ```
    /// use coordtransform::{Bd09Mc, Gcj02, LatLon};
    ///
    /// let projected = Bd09Mc::create(12684001.0, 2560682.4).unwrap();
    /// let coord: LatLon<Gcj02> = projected.to_latlon();
    ///
    /// assert!((coord.latitude() - 22.540385).abs() < 1e-6);
    /// assert!((coord.longitude() - 113.934532).abs() < 1e-6);
    /// ```
    pub fn to_latlon<S: Datum>(&self) -> LatLon<S> {
        let (lat, lon) = compose::convert(Scheme::Bd09Mc, S::SCHEME, self.x, self.y);
        LatLon::new(lat, lon)
    }
}

pub(crate) fn check_coords(x: f64, y: f64) -> Result<(), Error> {
    if !(-BD09MC_X_LIMIT..=BD09MC_X_LIMIT).contains(&x) {
        return Err(Error::InvalidMercator(format!(
            "Easting {x} not in range [{}, {BD09MC_X_LIMIT}]",
            -BD09MC_X_LIMIT,
        )));
    }

    if !(BD09MC_Y_MIN..=BD09MC_Y_MAX).contains(&y) {
        return Err(Error::InvalidMercator(format!(
            "Northing {y} not in range [{BD09MC_Y_MIN}, {BD09MC_Y_MAX}]",
        )));
    }

    Ok(())
}

impl ParseCoord for Bd09Mc {
    /// Parses `"x, y"` or `"x y"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseCoord`] for malformed text and
    /// [`Error::InvalidMercator`] for out of range values.
    fn parse_coord(value: &str) -> Result<Self, Error> {
        let (x, y) = parse_pair(value)?;
        Bd09Mc::create(x, y)
    }
}

impl FromStr for Bd09Mc {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_coord(s)
    }
}

impl Display for Bd09Mc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_pair(f, self.x, self.y)
    }
}
