//! Conversions between decimal degrees and degrees/decimal minutes.
//!
//! Minutes are never signed. The direction of a coordinate is carried by the sign of its degree
//! component, which means that `-0º 40.01'` and `0º 40.01'` lie in opposite hemispheres. To keep
//! that distinction, [`DegreesMinutes`] stores the sign separately from the degree magnitude and
//! only joins them when it is displayed.

use crate::glyphs::{DEGREE_SIGN, MINUTE_SIGN};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An angle split into whole degrees and decimal minutes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DegreesMinutes {
    /// `true` for south latitudes and west longitudes, including those with zero whole degrees.
    pub negative: bool,
    /// Whole degrees, never negative.
    pub degrees: f64,
    /// Decimal minutes in `[0, 60)`.
    pub minutes: f64,
}

impl DegreesMinutes {
    /// Split a decimal-degree angle. The degree part is truncated toward zero, so `-2.5` gives
    /// `-2º 30'` rather than `-3º 30'`. Out-of-range angles are converted all the same.
    pub fn from_decimal(decimal: f64) -> Self {
        // fract() is exact, so the minutes don't pick up any error from the degree part
        DegreesMinutes {
            negative: decimal < 0.,
            degrees: decimal.trunc().abs(),
            minutes: decimal.fract().abs() * 60.,
        }
    }

    pub fn to_decimal(&self) -> f64 {
        let decimal = self.degrees.abs() + self.minutes / 60.;
        if self.negative {
            -decimal
        } else {
            decimal
        }
    }
}

/// Formats as `DDDº MM.MM'`. The minutes are rounded to two decimals with Rust's fixed-point
/// formatting, which rounds ties to even: `13.125` minutes print as `13.12`.
impl fmt::Display for DegreesMinutes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        write!(
            f,
            "{}{}{} {:.2}{}",
            sign, self.degrees, DEGREE_SIGN, self.minutes, MINUTE_SIGN
        )
    }
}

/// Convert coordinates in decimal degrees to degrees and decimal minutes, in the `DDDº MM.MM'`
/// format.
///
/// `decimal` is expected to be finite; `NaN` and infinities produce meaningless text.
pub fn decimal_to_degrees(decimal: f64) -> String {
    DegreesMinutes::from_decimal(decimal).to_string()
}

/// Convert coordinates in degrees and decimal minutes to decimal degrees.
///
/// The sign of the result is taken from the text of `degrees`, so `"-0"` with 40.01 minutes
/// gives `-0.66683...` while `"0"` gives `0.66683...`. `minutes` should be non-negative; its sign
/// is never consulted. No validation is performed: degree text that isn't a number yields `NaN`.
pub fn degrees_to_decimal(degrees: &str, minutes: f64) -> f64 {
    let magnitude = degrees.trim().parse::<f64>().unwrap_or(f64::NAN);
    let dm = DegreesMinutes {
        negative: degrees.starts_with('-'),
        degrees: magnitude.abs(),
        minutes,
    };
    dm.to_decimal()
}
