use coordtransform::{
    bd09_to_bd09mc, bd09_to_gcj02, bd09_to_wgs84, bd09mc_to_bd09, bd09mc_to_gcj02,
    bd09mc_to_wgs84, convert, gcj02_to_bd09, gcj02_to_bd09mc, gcj02_to_wgs84, in_china,
    region::CHINA,
    transform::bd09mc::{
        clamp_mercator_y, normalize_longitude, normalize_mercator_x, DistortionBand,
        BD09MC_X_LIMIT, BD09MC_Y_MAX, BD09MC_Y_MIN, LATITUDE_BANDS, MERCATOR_BANDS,
    },
    wgs84_to_bd09, wgs84_to_bd09mc, wgs84_to_gcj02, Scheme, BORDER_DETECTION_ENABLED,
};

const POINTS: [(f64, f64); 5] = [
    (22.543415, 113.929665),
    (40.049694, 116.294717),
    (30.593354, 114.304569),
    (-33.86, 151.2),
    (64.1, -21.9),
];

#[test]
fn compositions_match_chained_primitives_exactly() {
    for (lat, lon) in POINTS {
        let gcj = wgs84_to_gcj02(lat, lon);
        let bd = gcj02_to_bd09(gcj.0, gcj.1);
        assert_eq!(wgs84_to_bd09(lat, lon), bd);
        assert_eq!(wgs84_to_bd09mc(lat, lon), bd09_to_bd09mc(bd.0, bd.1));

        let gcj = bd09_to_gcj02(lat, lon);
        assert_eq!(bd09_to_wgs84(lat, lon), gcj02_to_wgs84(gcj.0, gcj.1));

        let bd = gcj02_to_bd09(lat, lon);
        assert_eq!(gcj02_to_bd09mc(lat, lon), bd09_to_bd09mc(bd.0, bd.1));

        let (x, y) = bd09_to_bd09mc(lat, lon);
        let bd = bd09mc_to_bd09(x, y);
        assert_eq!(bd09mc_to_gcj02(x, y), bd09_to_gcj02(bd.0, bd.1));
        let gcj = bd09_to_gcj02(bd.0, bd.1);
        assert_eq!(bd09mc_to_wgs84(x, y), gcj02_to_wgs84(gcj.0, gcj.1));
    }
}

#[test]
fn convert_dispatches_to_the_named_functions() {
    let (lat, lon) = POINTS[0];
    let (x, y) = bd09_to_bd09mc(lat, lon);

    for from in Scheme::ALL {
        for to in Scheme::ALL {
            let (a, b) = if from.is_projected() { (x, y) } else { (lat, lon) };
            let expected = match (from, to) {
                (Scheme::Wgs84, Scheme::Gcj02) => wgs84_to_gcj02(a, b),
                (Scheme::Wgs84, Scheme::Bd09) => wgs84_to_bd09(a, b),
                (Scheme::Wgs84, Scheme::Bd09Mc) => wgs84_to_bd09mc(a, b),
                (Scheme::Gcj02, Scheme::Wgs84) => gcj02_to_wgs84(a, b),
                (Scheme::Gcj02, Scheme::Bd09) => gcj02_to_bd09(a, b),
                (Scheme::Gcj02, Scheme::Bd09Mc) => gcj02_to_bd09mc(a, b),
                (Scheme::Bd09, Scheme::Wgs84) => bd09_to_wgs84(a, b),
                (Scheme::Bd09, Scheme::Gcj02) => bd09_to_gcj02(a, b),
                (Scheme::Bd09, Scheme::Bd09Mc) => bd09_to_bd09mc(a, b),
                (Scheme::Bd09Mc, Scheme::Wgs84) => bd09mc_to_wgs84(a, b),
                (Scheme::Bd09Mc, Scheme::Gcj02) => bd09mc_to_gcj02(a, b),
                (Scheme::Bd09Mc, Scheme::Bd09) => bd09mc_to_bd09(a, b),
                _ => (a, b),
            };
            assert_eq!(convert(from, to, a, b), expected, "{from} -> {to}");
        }
    }
}

#[test]
fn band_selection_prefers_the_higher_band_at_thresholds() {
    for band in &LATITUDE_BANDS {
        assert_eq!(DistortionBand::for_latitude(band.threshold), band);
    }
    for band in &MERCATOR_BANDS {
        assert_eq!(DistortionBand::for_mercator_y(band.threshold), band);
    }
}

#[test]
fn band_selection_covers_the_whole_line() {
    let mut magnitude = 0.;
    while magnitude < 100. {
        let band = DistortionBand::for_latitude(magnitude);
        let covering = LATITUDE_BANDS
            .iter()
            .filter(|b| magnitude >= b.threshold)
            .count();
        assert!(covering >= 1);
        assert!(magnitude >= band.threshold);
        magnitude += 0.25;
    }

    assert_eq!(DistortionBand::for_latitude(f64::MAX).threshold, 60.);
    assert_eq!(DistortionBand::for_mercator_y(f64::MAX).threshold, 8_362_377.87);
}

#[test]
fn normalization_is_idempotent() {
    for lon in [-180., -113.9, 0., 0.000_1, 179.999, 180., 190., -540., 1e4] {
        let once = normalize_longitude(lon);
        assert!((-180. ..=180.).contains(&once), "{lon} -> {once}");
        assert_eq!(normalize_longitude(once), once);
    }

    for x in [-BD09MC_X_LIMIT, 0., 12_684_001., BD09MC_X_LIMIT, 3e7, -5e7, 1e9] {
        let once = normalize_mercator_x(x);
        assert!((-BD09MC_X_LIMIT..=BD09MC_X_LIMIT).contains(&once), "{x} -> {once}");
        assert_eq!(normalize_mercator_x(once), once);
    }
}

#[test]
fn clamping_saturates() {
    for y in [-1e12, -16_022_031.5, BD09MC_Y_MIN, 0., 2_560_682.4, BD09MC_Y_MAX, 2e7, f64::INFINITY] {
        let once = clamp_mercator_y(y);
        assert!((BD09MC_Y_MIN..=BD09MC_Y_MAX).contains(&once));
        assert_eq!(clamp_mercator_y(once), once);
    }

    assert_eq!(clamp_mercator_y(2e7), BD09MC_Y_MAX);
    assert_eq!(clamp_mercator_y(-2e7), BD09MC_Y_MIN);
    assert_eq!(clamp_mercator_y(f64::NEG_INFINITY), BD09MC_Y_MIN);
}

#[test]
fn projected_output_stays_in_range() {
    for lat in [-90., -85., -45., 0., 30., 85., 90.] {
        for lon in [-720., -180., -0.5, 0., 179.9, 180., 181., 900.] {
            let (x, y) = bd09_to_bd09mc(lat, lon);
            assert!(x.abs() <= BD09MC_X_LIMIT, "{lat}, {lon} -> x {x}");
            assert!((BD09MC_Y_MIN..=BD09MC_Y_MAX).contains(&y), "{lat}, {lon} -> y {y}");
        }
    }
}

#[test]
fn china_box_is_closed() {
    assert!(in_china(CHINA.lat_min, CHINA.lon_min));
    assert!(in_china(CHINA.lat_max, CHINA.lon_max));
    assert!(in_china(CHINA.lat_min, CHINA.lon_max));
    assert!(in_china(CHINA.lat_max, CHINA.lon_min));

    let eps = 1e-9;
    assert!(!in_china(CHINA.lat_min - eps, 100.));
    assert!(!in_china(CHINA.lat_max + eps, 100.));
    assert!(!in_china(35., CHINA.lon_min - eps));
    assert!(!in_china(35., CHINA.lon_max + eps));
}

#[test]
fn border_detection_follows_the_feature() {
    assert_eq!(BORDER_DETECTION_ENABLED, cfg!(feature = "border-detection"));

    // Reykjavik
    let (lat, lon) = (64.1, -21.9);
    let shifted = wgs84_to_gcj02(lat, lon);
    let unshifted = gcj02_to_wgs84(lat, lon);

    if BORDER_DETECTION_ENABLED {
        assert_eq!(shifted, (lat, lon));
        assert_eq!(unshifted, (lat, lon));
    } else {
        assert_ne!(shifted, (lat, lon));
        assert_ne!(unshifted, (lat, lon));
    }

    // Inside the box the shift always applies
    assert_ne!(wgs84_to_gcj02(22.543415, 113.929665), (22.543415, 113.929665));
}

#[test]
fn bd09_offset_does_not_depend_on_the_gate() {
    let (lat, lon) = (64.1, -21.9);
    assert_ne!(gcj02_to_bd09(lat, lon), (lat, lon));
}
