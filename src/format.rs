//! Presentation helpers. None of these touch the values being formatted.

/// Fixed number of decimals, with trailing zeros and a dangling decimal point
/// stripped.
///
/// # Usage
///
/// ```
/// use coordtransform::format::fixed;
///
/// assert_eq!(fixed(113.94108003, 6), "113.94108");
/// assert_eq!(fixed(12684001.018, 1), "12684001");
/// assert_eq!(fixed(2560682.4043, 1), "2560682.4");
/// assert_eq!(fixed(1500.0, 0), "1500");
/// ```
pub fn fixed(value: f64, places: usize) -> String {
    let text = format!("{value:.places$}");
    if places == 0 {
        return text;
    }

    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Shortest representation that parses back to the same value.
///
/// # Usage
///
/// ```
/// use coordtransform::format::shortest;
///
/// assert_eq!(shortest(22.543415), "22.543415");
/// assert_eq!(shortest(12684001.0), "12684001.0");
/// ```
pub fn shortest(value: f64) -> String {
    let mut buf = ryu::Buffer::new();
    buf.format(value).to_string()
}

/// Writes a coordinate pair as `"a, b"`, honouring a requested precision the
/// way [`fixed`] does, and falling back to [`shortest`] otherwise.
pub(crate) fn write_pair(f: &mut std::fmt::Formatter<'_>, a: f64, b: f64) -> std::fmt::Result {
    match f.precision() {
        Some(places) => write!(f, "{}, {}", fixed(a, places), fixed(b, places)),
        None => write!(f, "{}, {}", shortest(a), shortest(b)),
    }
}
