use std::{fmt::Display, marker::PhantomData, str::FromStr};

use crate::{
    format::write_pair,
    mercator::Bd09Mc,
    region,
    scheme::{Bd09, Datum, Gcj02, Scheme, Wgs84},
    transform::{bd09, compose, gcj02},
    utility::{dms, parse_pair},
    Error, ParseCoord,
};

/// Mean radius of Earth in meters
///
/// <https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius>
const EARTH_MEAN_RADIUS_M: f64 = 6371.0088 * 1000.0;

/// A latitude/longitude point in degrees, tagged with the scheme it is
/// expressed in. Convert between schemes with [`LatLon::convert`] or the
/// scheme specific shortcuts such as [`LatLon::to_gcj02`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = ""))]
pub struct LatLon<S: Datum> {
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon"))]
    pub(crate) longitude: f64,
    #[cfg_attr(feature = "serde", serde(skip))]
    datum: PhantomData<S>,
}

impl<S: Datum> LatLon<S> {
    /// Internal-only constructor that doesn't check the bounds of lat/lon
    pub(crate) fn new(lat: f64, lon: f64) -> LatLon<S> {
        Self {
            latitude: lat,
            longitude: lon,
            datum: PhantomData,
        }
    }

    /// Tries to create a latitude/longitude point from a lat/lon pair. First checks if the
    /// values are valid:
    /// * Latitude must be in range [-90,90]
    /// * Longitude must be in range [-180,180]
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] if either latitude or longitude are invalid.
    ///
    /// # Usage
    ///
    /// ```
    /// use coordtransform::{LatLon, Wgs84};
    ///
    /// let coord = LatLon::<Wgs84>::create(22.543415, 113.929665);
    ///
    /// assert!(coord.is_ok());
    ///
    /// let coord = coord.unwrap();
    ///
    /// assert_eq!(coord.latitude(), 22.543415);
    /// assert_eq!(coord.longitude(), 113.929665);
    ///
    /// let invalid_coord_lat = LatLon::<Wgs84>::create(100.0, 0.0);
    /// assert!(invalid_coord_lat.is_err());
    ///
    /// let invalid_coord_lon = LatLon::<Wgs84>::create(0.0, -200.0);
    /// assert!(invalid_coord_lon.is_err());
    /// ```
    pub fn create(lat: f64, lon: f64) -> Result<LatLon<S>, Error> {
        if !(-dms::QD..=dms::QD).contains(&lat) {
            Err(Error::InvalidCoord(format!("Latitude {lat} outside of valid range [-90, 90].")))
        } else if !(-dms::HD..=dms::HD).contains(&lon) {
            Err(Error::InvalidCoord(format!("Longitude {lon} outside of valid range [-180, 180].")))
        } else {
            Ok(LatLon::new(lat, lon))
        }
    }

    /// Returns the latitude value.
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude value.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns the scheme this point is expressed in.
    ///
    /// # Example
    ///
    /// ```
    /// use coordtransform::{Gcj02, LatLon, Scheme};
    ///
    /// let coord = LatLon::<Gcj02>::create(22.540385, 113.934532).unwrap();
    /// assert_eq!(coord.scheme(), Scheme::Gcj02);
    /// ```
    pub fn scheme(&self) -> Scheme {
        S::SCHEME
    }

    /// Returns whether the point lies in the rough China bounding box, see
    /// [`in_china`](crate::in_china).
    pub fn in_china(&self) -> bool {
        region::in_china(self.latitude, self.longitude)
    }

    /// Returns the distance in meters between two points of the same scheme
    /// using the [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula).
    /// Uses the [mean radius of the Earth](https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius)
    /// in the calculation: `6371.0088`
    pub fn haversine(&self, other: &LatLon<S>) -> f64 {
        let lat1_r = self.latitude.to_radians();
        let lat2_r = other.latitude.to_radians();

        2.0 * EARTH_MEAN_RADIUS_M * (
            ((other.latitude - self.latitude).to_radians() / 2.0).sin().powi(2) +
            lat1_r.cos() * lat2_r.cos() *
            ((other.longitude - self.longitude).to_radians() / 2.0).sin().powi(2)
        ).sqrt().asin()
    }

    /// Converts to any other lat/lon scheme.
    ///
    /// # Usage
    ///
    /// ```
    /// use coordtransform::{Bd09, LatLon, Wgs84};
    ///
    /// let coord = LatLon::<Wgs84>::create(22.543415, 113.929665).unwrap();
    /// let converted: LatLon<Bd09> = coord.convert();
    ///
    /// assert!((converted.latitude() - 22.546054).abs() < 1e-5);
    /// assert!((converted.longitude() - 113.94108).abs() < 1e-5);
    /// ```
    pub fn convert<T: Datum>(&self) -> LatLon<T> {
        let (lat, lon) = compose::convert(S::SCHEME, T::SCHEME, self.latitude, self.longitude);
        LatLon::new(lat, lon)
    }

    /// Converts to [`Bd09Mc`]
    ///
    /// # Usage
    ///
    /// ```
    /// use coordtransform::{Bd09, LatLon};
    ///
    /// let coord = LatLon::<Bd09>::create(22.546054, 113.94108).unwrap();
    /// let projected = coord.to_bd09mc();
    ///
    /// assert!((projected.x() - 12684001.0).abs() < 0.05);
    /// assert!((projected.y() - 2560682.4).abs() < 0.05);
    /// ```
    pub fn to_bd09mc(&self) -> Bd09Mc {
        Bd09Mc::from_latlon(self)
    }

    /// Converts from [`Bd09Mc`]
    ///
    /// # Usage
    ///
    /// ```
    /// use coordtransform::{Bd09, Bd09Mc, LatLon};
    ///
    /// let projected = Bd09Mc::create(12684001.0, 2560682.4).unwrap();
    /// let coord = LatLon::<Bd09>::from_bd09mc(&projected);
    ///
    /// assert!((coord.latitude() - 22.546054).abs() < 1e-6);
    /// assert!((coord.longitude() - 113.94108).abs() < 1e-6);
    /// ```
    pub fn from_bd09mc(value: &Bd09Mc) -> LatLon<S> {
        value.to_latlon()
    }
}

impl LatLon<Wgs84> {
    /// Converts to GCJ02, see [`wgs84_to_gcj02`](crate::wgs84_to_gcj02).
    pub fn to_gcj02(&self) -> LatLon<Gcj02> {
        let (lat, lon) = gcj02::wgs84_to_gcj02(self.latitude, self.longitude);
        LatLon::new(lat, lon)
    }

    /// Converts to BD09, see [`wgs84_to_bd09`](crate::wgs84_to_bd09).
    pub fn to_bd09(&self) -> LatLon<Bd09> {
        let (lat, lon) = compose::wgs84_to_bd09(self.latitude, self.longitude);
        LatLon::new(lat, lon)
    }
}

impl LatLon<Gcj02> {
    /// Converts to WGS84, see [`gcj02_to_wgs84`](crate::gcj02_to_wgs84).
    pub fn to_wgs84(&self) -> LatLon<Wgs84> {
        let (lat, lon) = gcj02::gcj02_to_wgs84(self.latitude, self.longitude);
        LatLon::new(lat, lon)
    }

    /// Converts to BD09, see [`gcj02_to_bd09`](crate::gcj02_to_bd09).
    pub fn to_bd09(&self) -> LatLon<Bd09> {
        let (lat, lon) = bd09::gcj02_to_bd09(self.latitude, self.longitude);
        LatLon::new(lat, lon)
    }
}

impl LatLon<Bd09> {
    /// Converts to WGS84, see [`bd09_to_wgs84`](crate::bd09_to_wgs84).
    pub fn to_wgs84(&self) -> LatLon<Wgs84> {
        let (lat, lon) = compose::bd09_to_wgs84(self.latitude, self.longitude);
        LatLon::new(lat, lon)
    }

    /// Converts to GCJ02, see [`bd09_to_gcj02`](crate::bd09_to_gcj02).
    pub fn to_gcj02(&self) -> LatLon<Gcj02> {
        let (lat, lon) = bd09::bd09_to_gcj02(self.latitude, self.longitude);
        LatLon::new(lat, lon)
    }
}

impl<S: Datum> ParseCoord for LatLon<S> {
    /// Parses `"lat, lon"` or `"lat lon"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseCoord`] for malformed text and
    /// [`Error::InvalidCoord`] for out of range values.
    fn parse_coord(value: &str) -> Result<Self, Error> {
        let (lat, lon) = parse_pair(value)?;
        LatLon::create(lat, lon)
    }
}

impl<S: Datum> FromStr for LatLon<S> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_coord(s)
    }
}

impl<S: Datum> Display for LatLon<S> {
    /// Writes `"lat, lon"`. A precision, as in `{:.6}`, gives that many
    /// decimals with trailing zeros removed.
    ///
    /// ```
    /// use coordtransform::{LatLon, Wgs84};
    ///
    /// let coord = LatLon::<Wgs84>::create(22.5434151, 113.92966).unwrap();
    ///
    /// assert_eq!(coord.to_string(), "22.5434151, 113.92966");
    /// assert_eq!(format!("{coord:.6}"), "22.543415, 113.92966");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_pair(f, self.latitude, self.longitude)
    }
}
