use crate::{Error, ThisOrThat};

pub(crate) mod dms {
    /// Degrees per half turn
    pub const HD: f64 = 180.;
    /// Degrees per quarter turn
    pub const QD: f64 = HD / 2.;
}

pub(crate) trait GeoMath {
    fn wrap_period(&self, half_period: Self) -> Self;
    fn with_sign_of(&self, other: Self) -> Self;
}

impl GeoMath for f64 {
    /// Reduce into `[-half_period, half_period]` by whole periods. Values already
    /// inside the range are returned as-is, so the bounds themselves survive.
    fn wrap_period(&self, half_period: f64) -> f64 {
        let period = 2. * half_period;

        if *self > half_period {
            *self - period * ((*self + half_period) / period).floor()
        } else if *self < -half_period {
            *self - period * ((*self - half_period) / period).ceil()
        } else {
            *self
        }
    }

    /// Negate if `other` is strictly negative. Unlike `copysign`, a negative
    /// zero leaves the value alone and the value's own sign is not discarded.
    fn with_sign_of(&self, other: f64) -> f64 {
        (other < 0.).ternary(-*self, *self)
    }
}

/// Split `"a, b"`, `"a,b"` or `"a b"` into two numbers.
pub(crate) fn parse_pair(value: &str) -> Result<(f64, f64), Error> {
    let mut pieces = value
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|piece| !piece.is_empty());

    let (Some(a), Some(b), None) = (pieces.next(), pieces.next(), pieces.next()) else {
        return Err(Error::ParseCoord(format!("expected two numbers, got {value:?}")));
    };

    let parse = |piece: &str| {
        piece
            .parse::<f64>()
            .map_err(|e| Error::ParseCoord(format!("{piece:?} in {value:?}: {e}")))
    };

    Ok((parse(a)?, parse(b)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn wrap_keeps_values_in_range() {
        for value in [-180., -179.5, 0., 12.25, 180.] {
            assert_eq!(value.wrap_period(dms::HD), value);
        }
    }

    #[test]
    fn wrap_reduces_by_whole_turns() {
        assert_float_eq!(190_f64.wrap_period(dms::HD), -170., abs <= 1e-12);
        assert_float_eq!((-190_f64).wrap_period(dms::HD), 170., abs <= 1e-12);
        assert_float_eq!(540_f64.wrap_period(dms::HD), -180., abs <= 1e-12);
        assert_float_eq!(725_f64.wrap_period(dms::HD), 5., abs <= 1e-12);
        assert_float_eq!((-725_f64).wrap_period(dms::HD), -5., abs <= 1e-12);
    }

    #[test]
    fn pairs_split_on_commas_and_spaces() {
        assert_eq!(parse_pair("22.5, 113.9").unwrap(), (22.5, 113.9));
        assert_eq!(parse_pair("22.5,113.9").unwrap(), (22.5, 113.9));
        assert_eq!(parse_pair("  -22.5   113.9 ").unwrap(), (-22.5, 113.9));
    }

    #[test]
    fn bad_pairs_are_rejected() {
        for text in ["", "22.5", "22.5, 113.9, 0", "north, east", "22.5;113.9"] {
            assert!(matches!(parse_pair(text), Err(Error::ParseCoord(_))), "{text:?}");
        }
    }

    #[test]
    fn sign_transfer() {
        assert_eq!(2_f64.with_sign_of(-1.), -2.);
        assert_eq!(2_f64.with_sign_of(1.), 2.);
        assert_eq!((-2_f64).with_sign_of(-0.), -2.);
        assert_eq!((-2_f64).with_sign_of(-3.), 2.);
    }
}
