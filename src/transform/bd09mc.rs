//! BD09 ("bd09ll") <-> BD09MC
//!
//! BD09MC is Baidu's meter based projection of BD09. Its output resembles
//! EPSG:3857, but it is defined piecewise: the magnitude of the latitude (or of
//! the northing, going back) selects one of five bands, and each band carries
//! its own linear easting and degree six northing polynomial.
//!
//! Both directions evaluate the model correctly, but several published
//! coefficient sets fit poorly. They are kept exactly as published so results
//! match Baidu's own conversions.

use num::clamp;

use crate::utility::{dms, GeoMath};

pub use crate::constants::{BD09MC_X_LIMIT, BD09MC_Y_MAX, BD09MC_Y_MIN};

/// One band of the piecewise BD09 <-> BD09MC model.
///
/// `coeffs[0]` and `coeffs[1]` give the linear easting (or longitude) term,
/// `coeffs[2..=8]` the northing (or latitude) polynomial in `magnitude / scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistortionBand {
    /// Smallest magnitude covered by this band
    pub threshold: f64,
    pub coeffs: [f64; 9],
    pub scale: f64,
}

/// BD09 -> BD09MC bands, keyed by `|latitude|`, highest first.
#[rustfmt::skip]
#[allow(clippy::unreadable_literal, clippy::excessive_precision)]
pub static LATITUDE_BANDS: [DistortionBand; 5] = [
    // Suboptimal accuracy
    DistortionBand {
        threshold: 60.,
        coeffs: [
            0.0008277824516172526, 111320.7020463578,
            647795574.6671607, -4082003173.641316, 10774905663.51142, -15171875531.51559,
            12053065338.62167, -5124939663.577472, 913311935.9512032,
        ],
        scale: 67.5,
    },
    // Suboptimal accuracy
    DistortionBand {
        threshold: 45.,
        coeffs: [
            0.00337398766765, 111320.7020202162,
            4481351.045890365, -23393751.19931662, 79682215.47186455, -115964993.2797253,
            97236711.15602145, -43661946.33752821, 8477230.501135234,
        ],
        scale: 52.5,
    },
    DistortionBand {
        threshold: 30.,
        coeffs: [
            0.00220636496208, 111320.7020209128,
            51751.86112841131, 3796837.749470245, 992013.7397791013, -1221952.21711287,
            1340652.697009075, -620943.6990984312, 144416.9293806241,
        ],
        scale: 37.5,
    },
    DistortionBand {
        threshold: 15.,
        coeffs: [
            -0.0003441963504368392, 111320.7020576856,
            278.2353980772752, 2485758.690035394, 6070.750963243378, 54821.18345352118,
            9540.606633304236, -2710.55326746645, 1405.483844121726,
        ],
        scale: 22.5,
    },
    DistortionBand {
        threshold: 0.,
        coeffs: [
            -0.0003218135878613132, 111320.7020701615,
            0.00369383431289, 823725.6402795718, 0.46104986909093, 2351.343141331292,
            1.58060784298199, 8.77738589078284, 0.37238884252424,
        ],
        scale: 7.45,
    },
];

/// BD09MC -> BD09 bands, keyed by `|northing|`, highest first.
#[rustfmt::skip]
#[allow(clippy::unreadable_literal, clippy::excessive_precision)]
pub static MERCATOR_BANDS: [DistortionBand; 5] = [
    // Failed accuracy
    DistortionBand {
        threshold: 8362377.87,
        coeffs: [
            -0.000000007435856389565537, 0.000008983055097726239,
            -0.78625201886289, 96.32687599759846, -1.85204757529826, -59.36935905485877,
            47.40033549296737, -16.50741931063887, 2.28786674699375,
        ],
        scale: 10260144.86,
    },
    // Slight accuracy off
    DistortionBand {
        threshold: 5591021.,
        coeffs: [
            -0.00000003030883460898826, 0.00000898305509983578,
            0.30071316287616, 59.74293618442277, 7.357984074871, -25.38371002664745,
            13.45380521110908, -3.29883767235584, 0.32710905363475,
        ],
        scale: 6856817.37,
    },
    DistortionBand {
        threshold: 3481989.83,
        coeffs: [
            -0.00000001981981304930552, 0.000008983055099779535,
            0.03278182852591, 40.31678527705744, 0.65659298677277, -4.44255534477492,
            0.85341911805263, 0.12923347998204, -0.04625736007561,
        ],
        scale: 4482777.06,
    },
    DistortionBand {
        threshold: 1678043.12,
        coeffs: [
            0.00000000309191371068437, 0.000008983055096812155,
            0.00006995724062, 23.10934304144901, -0.00023663490511, -0.6321817810242,
            -0.00663494467273, 0.03430082397953, -0.00466043876332,
        ],
        scale: 2555164.4,
    },
    DistortionBand {
        threshold: 0.,
        coeffs: [
            0.000000002890871144776878, 0.000008983055095805407,
            -0.00000003068298, 7.47137025468032, -0.00000353937994, -0.02145144861037,
            -0.00001234426596, 0.00010322952773, -0.00000323890364,
        ],
        scale: 826088.5,
    },
];

impl DistortionBand {
    /// Band used by [`bd09_to_bd09mc`] for a given `|latitude|`.
    ///
    /// # Example
    /// ```
    /// use coordtransform::transform::bd09mc::DistortionBand;
    ///
    /// assert_eq!(DistortionBand::for_latitude(22.5).threshold, 15.0);
    /// // Exact thresholds belong to the higher band
    /// assert_eq!(DistortionBand::for_latitude(60.0).threshold, 60.0);
    /// assert_eq!(DistortionBand::for_latitude(59.999).threshold, 45.0);
    /// ```
    pub fn for_latitude(magnitude: f64) -> &'static DistortionBand {
        select(&LATITUDE_BANDS, magnitude)
    }

    /// Band used by [`bd09mc_to_bd09`] for a given `|northing|`.
    ///
    /// # Example
    /// ```
    /// use coordtransform::transform::bd09mc::DistortionBand;
    ///
    /// assert_eq!(DistortionBand::for_mercator_y(2560682.4).threshold, 1678043.12);
    /// assert_eq!(DistortionBand::for_mercator_y(0.0).threshold, 0.0);
    /// ```
    pub fn for_mercator_y(magnitude: f64) -> &'static DistortionBand {
        select(&MERCATOR_BANDS, magnitude)
    }

    fn linear(&self, magnitude: f64) -> f64 {
        self.coeffs[0] + self.coeffs[1] * magnitude
    }

    /// `c2 + c3 u + c4 u^2 + c5 u^3 + c6 u^4 + (c7 + c8 u) u^5` with
    /// `u = magnitude / scale`, summed in that order.
    fn polynomial(&self, magnitude: f64) -> f64 {
        let c = &self.coeffs;
        let u = magnitude / self.scale;

        let mut power = u.powi(2);
        let mut sum = c[2] + c[3] * u + c[4] * power;

        power *= u;
        sum += c[5] * power;
        power *= u;
        sum += c[6] * power;
        power *= u;
        sum += (c[7] + c[8] * u) * power;

        sum
    }
}

// Tables end with a zero threshold, which also takes whatever fails every
// comparison (NaN).
fn select(bands: &'static [DistortionBand], magnitude: f64) -> &'static DistortionBand {
    let band = bands
        .iter()
        .find(|band| magnitude >= band.threshold)
        .unwrap_or(&bands[bands.len() - 1]);

    log::trace!("magnitude {magnitude} falls in band {}", band.threshold);
    band
}

/// Wrap a longitude into `[-180, 180]` by whole turns.
///
/// # Example
/// ```
/// use coordtransform::transform::bd09mc::normalize_longitude;
///
/// assert_eq!(normalize_longitude(113.94108), 113.94108);
/// assert_eq!(normalize_longitude(180.0), 180.0);
/// assert!((normalize_longitude(190.0) - -170.0).abs() < 1e-12);
/// ```
pub fn normalize_longitude(lon: f64) -> f64 {
    let wrapped = lon.wrap_period(dms::HD);
    if wrapped != lon {
        log::debug!("longitude {lon} wrapped to {wrapped}");
    }
    wrapped
}

/// Wrap a BD09MC easting into `[-BD09MC_X_LIMIT, BD09MC_X_LIMIT]` by whole
/// periods.
///
/// # Example
/// ```
/// use coordtransform::transform::bd09mc::{normalize_mercator_x, BD09MC_X_LIMIT};
///
/// assert_eq!(normalize_mercator_x(12684001.0), 12684001.0);
/// assert_eq!(normalize_mercator_x(BD09MC_X_LIMIT), BD09MC_X_LIMIT);
/// assert!((normalize_mercator_x(2.0 * BD09MC_X_LIMIT + 10.0) - 10.0).abs() < 1e-6);
/// ```
pub fn normalize_mercator_x(x: f64) -> f64 {
    let wrapped = x.wrap_period(BD09MC_X_LIMIT);
    if wrapped != x {
        log::debug!("BD09MC x {x} wrapped to {wrapped}");
    }
    wrapped
}

/// Saturate a BD09MC northing to `[BD09MC_Y_MIN, BD09MC_Y_MAX]`.
///
/// # Example
/// ```
/// use coordtransform::transform::bd09mc::{clamp_mercator_y, BD09MC_Y_MAX, BD09MC_Y_MIN};
///
/// assert_eq!(clamp_mercator_y(2560682.4), 2560682.4);
/// assert_eq!(clamp_mercator_y(3e7), BD09MC_Y_MAX);
/// assert_eq!(clamp_mercator_y(-3e7), BD09MC_Y_MIN);
/// ```
pub fn clamp_mercator_y(y: f64) -> f64 {
    let clamped = clamp(y, BD09MC_Y_MIN, BD09MC_Y_MAX);
    if clamped != y {
        log::debug!("BD09MC y {y} clamped to {clamped}");
    }
    clamped
}

/// BD09 -> BD09MC. Returns `(x, y)`: the easting derives from the longitude,
/// the northing from the latitude.
///
/// # Usage
///
/// ```
/// use coordtransform::bd09_to_bd09mc;
///
/// let (x, y) = bd09_to_bd09mc(22.546054, 113.94108);
///
/// assert!((x - 12684001.0).abs() < 0.05);
/// assert!((y - 2560682.4).abs() < 0.05);
/// ```
pub fn bd09_to_bd09mc(lat: f64, lon: f64) -> (f64, f64) {
    let lon = normalize_longitude(lon);
    let band = DistortionBand::for_latitude(lat.abs());

    let x = band.linear(lon.abs()).with_sign_of(lon);
    let y = band.polynomial(lat.abs()).with_sign_of(lat);

    (x, clamp_mercator_y(y))
}

/// BD09MC -> BD09. Takes `(x, y)` and returns `(lat, lon)`.
///
/// # Usage
///
/// ```
/// use coordtransform::bd09mc_to_bd09;
///
/// let (lat, lon) = bd09mc_to_bd09(12684001.0, 2560682.4);
///
/// assert!((lat - 22.546054).abs() < 1e-6);
/// assert!((lon - 113.94108).abs() < 1e-6);
/// ```
pub fn bd09mc_to_bd09(x: f64, y: f64) -> (f64, f64) {
    let x = normalize_mercator_x(x);
    let y = clamp_mercator_y(y);
    let band = DistortionBand::for_mercator_y(y.abs());

    let lat = band.polynomial(y.abs()).with_sign_of(y);
    let lon = band.linear(x.abs()).with_sign_of(x);

    (lat, lon)
}
