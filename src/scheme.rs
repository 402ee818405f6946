use std::{fmt::Display, str::FromStr};

use crate::Error;

/// The coordinate schemes this crate converts between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Scheme {
    /// The unobfuscated global standard
    Wgs84,
    /// "Mars coordinates", the state mandated obfuscation of WGS84. Used by
    /// Amap, Tencent Maps and Google Maps inside China.
    Gcj02,
    /// Baidu's obfuscation of GCJ02, also called "bd09ll"
    #[cfg_attr(feature = "serde", serde(alias = "bd09ll"))]
    Bd09,
    /// Baidu's projected, meter based variant of BD09
    Bd09Mc,
}

impl Scheme {
    pub const ALL: [Scheme; 4] = [Scheme::Wgs84, Scheme::Gcj02, Scheme::Bd09, Scheme::Bd09Mc];

    /// Returns whether coordinates in this scheme are `(x, y)` in meters rather
    /// than `(lat, lon)` in degrees.
    pub fn is_projected(&self) -> bool {
        matches!(self, Scheme::Bd09Mc)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Scheme::Wgs84 => "wgs84",
            Scheme::Gcj02 => "gcj02",
            Scheme::Bd09 => "bd09",
            Scheme::Bd09Mc => "bd09mc",
        }
    }
}

impl Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = Error;

    /// Parses a scheme name, ignoring case.
    ///
    /// # Usage
    ///
    /// ```
    /// use coordtransform::Scheme;
    ///
    /// assert_eq!("WGS84".parse::<Scheme>().unwrap(), Scheme::Wgs84);
    /// assert_eq!("bd09ll".parse::<Scheme>().unwrap(), Scheme::Bd09);
    /// assert!("epsg3857".parse::<Scheme>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wgs84" => Ok(Scheme::Wgs84),
            "gcj02" => Ok(Scheme::Gcj02),
            "bd09" | "bd09ll" => Ok(Scheme::Bd09),
            "bd09mc" => Ok(Scheme::Bd09Mc),
            _ => Err(Error::UnknownScheme(s.to_string())),
        }
    }
}

/// Type level tag for the latitude/longitude schemes, used by
/// [`LatLon`](crate::LatLon).
pub trait Datum: Clone + Copy + std::fmt::Debug + PartialEq + Default {
    const SCHEME: Scheme;
}

/// Marker for [`Scheme::Wgs84`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Wgs84;

/// Marker for [`Scheme::Gcj02`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Gcj02;

/// Marker for [`Scheme::Bd09`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Bd09;

impl Datum for Wgs84 {
    const SCHEME: Scheme = Scheme::Wgs84;
}

impl Datum for Gcj02 {
    const SCHEME: Scheme = Scheme::Gcj02;
}

impl Datum for Bd09 {
    const SCHEME: Scheme = Scheme::Bd09;
}
