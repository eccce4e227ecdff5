//! Validation of coordinates written as degrees and decimal minutes, i.e. `DDDº MM.MM'`.
//!
//! Degree and minute signs are optional, so `40º 26.76'` and `40 26.76` are both valid. Compass
//! directions are not supported: south latitudes and west longitudes are written with negative
//! degrees, e.g. `-0º 43.02'`.

use crate::{
    convert::degrees_to_decimal,
    glyphs::{is_separator, DEGREE_SIGNS, MINUTE_SIGNS},
    parse,
};
use nom::{
    bytes::complete::take_while1,
    character::complete::{char, digit1, one_of},
    combinator::{eof, map, opt, recognize, verify},
    error::context,
    sequence::{pair, tuple},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{debug, trace};

/// Minutes may go up to and including 60.
const MAX_MINUTES: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Largest magnitude allowed for the degree component.
    pub fn max_degrees(&self) -> u32 {
        match self {
            Axis::Latitude => 90,
            Axis::Longitude => 180,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Axis::Latitude => write!(f, "latitude"),
            Axis::Longitude => write!(f, "longitude"),
        }
    }
}

/// The raw pieces of a coordinate that matched the `DDDº MM.MM'` grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawAngle<'a> {
    /// Degrees with their sign and any leading zeros, e.g. `"-040"`.
    pub degrees: &'a str,
    /// Whole minutes without leading zeros.
    pub minutes: &'a str,
    /// One or two decimal digits of the minutes. Trailing zeros past the second digit are dropped.
    pub fraction: &'a str,
}

impl<'a> RawAngle<'a> {
    /// Match a complete coordinate. Everything in `i` has to be consumed.
    pub fn parse(i: parse::Input<'a>, axis: Axis) -> parse::Result<'a, Self> {
        let max_degrees = axis.max_degrees();
        let (i, (degrees, _, _, minutes, _, fraction, _, _)) = tuple((
            context("Degrees", |x| parse_degrees(x, max_degrees)),
            context("Degree sign", opt(one_of(DEGREE_SIGNS))),
            context("Separator", take_while1(is_separator)),
            context("Minutes", parse_minutes),
            context("Decimal point", char('.')),
            context("Decimal minutes", parse_fraction),
            context("Minute sign", opt(one_of(MINUTE_SIGNS))),
            context("End of input", eof),
        ))(i)?;

        Ok((
            i,
            RawAngle {
                degrees,
                minutes,
                fraction,
            },
        ))
    }

    /// `[degrees, "minutes.fraction"]`, the form returned by [`validate_coords`].
    pub fn to_pair(&self) -> [String; 2] {
        [
            self.degrees.to_string(),
            format!("{}.{}", self.minutes, self.fraction),
        ]
    }
}

/// A sign followed by the degree digits. The sign and leading zeros are kept in the output.
fn parse_degrees(i: parse::Input<'_>, max_degrees: u32) -> parse::Result<'_, &str> {
    recognize(pair(
        opt(char('-')),
        verify(digit1, move |d: &str| magnitude_at_most(d, max_degrees)),
    ))(i)
}

fn parse_minutes(i: parse::Input<'_>) -> parse::Result<'_, &str> {
    map(
        verify(digit1, |d: &str| magnitude_at_most(d, MAX_MINUTES)),
        significant_digits,
    )(i)
}

/// Decimal digits of the minutes. Only two of them may be significant: `7600` is fine, `7601`
/// is not.
fn parse_fraction(i: parse::Input<'_>) -> parse::Result<'_, &str> {
    map(
        verify(digit1, |d: &str| d.bytes().skip(2).all(|b| b == b'0')),
        leading_pair,
    )(i)
}

/// Check the value of a run of ASCII digits without overflowing on long runs of leading zeros.
fn magnitude_at_most(digits: &str, max: u32) -> bool {
    let significant = digits.trim_start_matches('0');
    significant.is_empty()
        || (significant.len() <= 3 && significant.parse::<u32>().map_or(false, |x| x <= max))
}

/// Strip leading zeros, leaving a single `0` if that's all there is.
fn significant_digits(digits: &str) -> &str {
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        &digits[digits.len() - 1..]
    } else {
        significant
    }
}

fn leading_pair(digits: &str) -> &str {
    &digits[..digits.len().min(2)]
}

/// Components extracted from a valid pair of coordinates. They are still in degrees and decimal
/// minutes; e.g. for a latitude of `40º 26.76'`, `lat` holds `["40", "26.76"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidCoords {
    pub lat: [String; 2],
    pub lng: [String; 2],
}

impl ValidCoords {
    /// Convert both components to decimal degrees, returned as `(latitude, longitude)`.
    pub fn to_decimal(&self) -> (f64, f64) {
        fn axis_to_decimal(components: &[String; 2]) -> f64 {
            // The grammar guarantees that the minutes are a plain decimal number
            let minutes = components[1].parse().unwrap_or(f64::NAN);
            degrees_to_decimal(&components[0], minutes)
        }
        (axis_to_decimal(&self.lat), axis_to_decimal(&self.lng))
    }
}

/// Returned when a coordinate doesn't match the `DDDº MM.MM'` grammar or is out of range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {axis} {input:?}: rejected at {context}")]
pub struct InvalidCoords {
    /// The first coordinate found to be invalid. Latitude is checked before longitude.
    pub axis: Axis,
    pub input: String,
    /// Where in the grammar matching stopped, e.g. `"Decimal minutes"`.
    pub context: String,
}

impl InvalidCoords {
    /// A multi-line description of the error that quotes the input and points at the character
    /// where matching stopped.
    pub fn explain(&self) -> String {
        match RawAngle::parse(&self.input, self.axis) {
            Ok(_) => self.to_string(),
            Err(e) => format!(
                "{}\n{}",
                self,
                parse::pretty_error_message(&self.input, e)
            ),
        }
    }
}

/// Check whether a latitude/longitude pair is valid in the `DDDº MM.MM'` format and extract the
/// raw numbers if it is. No numeric conversion takes place; see [`ValidCoords::to_decimal`].
pub fn validate_coords(lat: &str, lng: &str) -> Result<ValidCoords, InvalidCoords> {
    let lat_angle = parse_axis(lat, Axis::Latitude)?;
    let lng_angle = parse_axis(lng, Axis::Longitude)?;
    trace!(lat, lng, "coordinates are valid");

    Ok(ValidCoords {
        lat: lat_angle.to_pair(),
        lng: lng_angle.to_pair(),
    })
}

fn parse_axis(input: &str, axis: Axis) -> Result<RawAngle<'_>, InvalidCoords> {
    match RawAngle::parse(input, axis) {
        Ok((_, angle)) => Ok(angle),
        Err(e) => {
            let context = parse::error_trail(&e);
            debug!(%axis, input, %context, "rejected coordinate");
            Err(InvalidCoords {
                axis,
                input: input.to_string(),
                context,
            })
        }
    }
}
