//! WGS84 <-> GCJ02
//!
//! The forward shift is the well-known empirical formula; its output is
//! practically identical to what Amap and Tencent Maps return. The inverse
//! applies the same shift with the sign flipped, evaluated at the GCJ02 point
//! rather than the unknown WGS84 one, so a round trip drifts by roughly a meter.
//! That matches what the providers do and is deliberately not iterated away.

use std::f64::consts::PI;

use crate::{
    constants::{DEG_TO_RAD, GCJ02_ORIGIN_LAT, GCJ02_ORIGIN_LON, KRASOVSKY_A, KRASOVSKY_E2},
    region::skips_distortion,
};

/// Shift in degrees `(d_lat, d_lon)` applied at a point.
fn distortion(lat: f64, lon: f64) -> (f64, f64) {
    let d_lat = lat - GCJ02_ORIGIN_LAT;
    let d_lon = lon - GCJ02_ORIGIN_LON;

    let lat_rad = d_lat * PI;
    let lon_rad = d_lon * PI;
    let cross = d_lat * d_lon;
    let root_lon = d_lon.abs().sqrt();
    let common = 20. * ((lon_rad * 6.).sin() + (lon_rad * 2.).sin());

    let lat_offset = (common
        + 20. * lat_rad.sin()
        + 40. * (lat_rad / 3.).sin()
        + 160. * (lat_rad / 12.).sin()
        + 320. * (lat_rad / 30.).sin())
        / 1.5
        + d_lat * 3.
        + d_lon * 2.
        + cross / 10.
        + (d_lat.powi(2) + root_lon) / 5.
        - 100.;

    let lon_offset = (common
        + 20. * lon_rad.sin()
        + 40. * (lon_rad / 3.).sin()
        + 150. * (lon_rad / 12.).sin()
        + 300. * (lon_rad / 30.).sin())
        / 1.5
        + d_lat * 2.
        + d_lon
        + (d_lon.powi(2) + cross + root_lon) / 10.
        + 300.;

    let lat_full = lat * DEG_TO_RAD;
    let rad_factor = 1. - KRASOVSKY_E2 * lat_full.sin().powi(2);
    let radius = KRASOVSKY_A / rad_factor.sqrt();

    (
        lat_offset / radius / (1. - KRASOVSKY_E2) * rad_factor / DEG_TO_RAD,
        lon_offset / radius / lat_full.cos() / DEG_TO_RAD,
    )
}

/// WGS84 -> GCJ02. Accurate to about a meter.
///
/// # Usage
///
/// ```
/// use coordtransform::wgs84_to_gcj02;
///
/// // Tencent Building, Shenzhen
/// let (lat, lon) = wgs84_to_gcj02(22.543415, 113.929665);
///
/// assert!((lat - 22.540385).abs() < 1e-5);
/// assert!((lon - 113.934532).abs() < 1e-5);
/// ```
pub fn wgs84_to_gcj02(lat: f64, lon: f64) -> (f64, f64) {
    if skips_distortion(lat, lon) {
        return (lat, lon);
    }

    let (d_lat, d_lon) = distortion(lat, lon);
    (lat + d_lat, lon + d_lon)
}

/// GCJ02 -> WGS84. Single step approximation of the inverse, accurate to
/// about a meter.
///
/// # Usage
///
/// ```
/// use coordtransform::gcj02_to_wgs84;
///
/// let (lat, lon) = gcj02_to_wgs84(22.540385, 113.934532);
///
/// assert!((lat - 22.543415).abs() < 1e-5);
/// assert!((lon - 113.929665).abs() < 1e-5);
/// ```
pub fn gcj02_to_wgs84(lat: f64, lon: f64) -> (f64, f64) {
    if skips_distortion(lat, lon) {
        return (lat, lon);
    }

    let (d_lat, d_lon) = distortion(lat, lon);
    (lat - d_lat, lon - d_lon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn shift_is_shared_between_directions() {
        let (lat, lon) = (39.904179, 116.407387);
        let (fwd_lat, fwd_lon) = wgs84_to_gcj02(lat, lon);
        let (inv_lat, inv_lon) = gcj02_to_wgs84(lat, lon);

        assert_float_eq!(fwd_lat - lat, lat - inv_lat, abs <= 1e-12);
        assert_float_eq!(fwd_lon - lon, lon - inv_lon, abs <= 1e-12);
    }

    #[test]
    fn roundtrip_drifts_about_a_meter() {
        let (lat, lon) = (22.543415, 113.929665);
        let (gcj_lat, gcj_lon) = wgs84_to_gcj02(lat, lon);
        let (back_lat, back_lon) = gcj02_to_wgs84(gcj_lat, gcj_lon);

        // 1e-5 degrees is roughly 1.1 m
        assert_float_eq!(back_lat, lat, abs <= 1e-5);
        assert_float_eq!(back_lon, lon, abs <= 1e-5);
        assert!((back_lat - lat).abs() > 1e-9, "the inverse is not exact");
    }

    #[test]
    fn shift_is_hundreds_of_meters() {
        let (d_lat, d_lon) = distortion(22.543415, 113.929665);

        // Shenzhen moves south-east by a few hundred meters
        assert!((-0.01..0.).contains(&d_lat));
        assert!((0_f64..0.01).contains(&d_lon));
    }
}
