//! GCJ02 <-> BD09 ("bd09ll")

use crate::constants::{BD09_ANGLE_NUDGE, BD09_LAT_SHIFT, BD09_LON_SHIFT, BD09_RADIUS_NUDGE, BD09_X_PI};

/// GCJ02 -> BD09.
///
/// # Usage
///
/// ```
/// use coordtransform::gcj02_to_bd09;
///
/// let (lat, lon) = gcj02_to_bd09(22.540385, 113.934532);
///
/// assert!((lat - 22.546054).abs() < 1e-6);
/// assert!((lon - 113.94108).abs() < 1e-6);
/// ```
pub fn gcj02_to_bd09(lat: f64, lon: f64) -> (f64, f64) {
    let radius = (lat.powi(2) + lon.powi(2)).sqrt() + BD09_RADIUS_NUDGE * (lat * BD09_X_PI).sin();
    let theta = lat.atan2(lon) + BD09_ANGLE_NUDGE * (lon * BD09_X_PI).cos();

    let (sin, cos) = theta.sin_cos();
    (radius * sin + BD09_LAT_SHIFT, radius * cos + BD09_LON_SHIFT)
}

/// BD09 -> GCJ02. Undoes [`gcj02_to_bd09`] by applying the same steps in
/// reverse order; the round trip is good to about 1e-6 degrees.
///
/// # Usage
///
/// ```
/// use coordtransform::{bd09_to_gcj02, gcj02_to_bd09};
///
/// let (lat, lon) = bd09_to_gcj02(22.546054, 113.94108);
///
/// assert!((lat - 22.540385).abs() < 1e-6);
/// assert!((lon - 113.934532).abs() < 1e-6);
/// ```
pub fn bd09_to_gcj02(lat: f64, lon: f64) -> (f64, f64) {
    let lat = lat - BD09_LAT_SHIFT;
    let lon = lon - BD09_LON_SHIFT;

    let radius = (lat.powi(2) + lon.powi(2)).sqrt() - BD09_RADIUS_NUDGE * (lat * BD09_X_PI).sin();
    let theta = lat.atan2(lon) - BD09_ANGLE_NUDGE * (lon * BD09_X_PI).cos();

    let (sin, cos) = theta.sin_cos();
    (radius * sin, radius * cos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn roundtrip() {
        let points = [
            (22.540385, 113.934532),
            (39.905582, 116.413629),
            (30.590943, 114.310012),
            (-33.86, 151.2),
        ];

        for (lat, lon) in points {
            let (bd_lat, bd_lon) = gcj02_to_bd09(lat, lon);
            let (back_lat, back_lon) = bd09_to_gcj02(bd_lat, bd_lon);

            // The nudges are evaluated on shifted inputs, leaving ~0.1 m behind
            assert_float_eq!(back_lat, lat, abs <= 2e-6);
            assert_float_eq!(back_lon, lon, abs <= 2e-6);
        }
    }

    #[test]
    fn known_values() {
        // Wuhan and Beijing, as returned by Baidu's own converter
        let (lat, lon) = gcj02_to_bd09(30.593354, 114.304569);
        assert_float_eq!(lat, 30.599019, abs <= 1e-6);
        assert_float_eq!(lon, 114.311152, abs <= 1e-6);

        let (lat, lon) = gcj02_to_bd09(39.904179, 116.407387);
        assert_float_eq!(lat, 39.910501, abs <= 1e-6);
        assert_float_eq!(lon, 116.413772, abs <= 1e-6);
    }
}
