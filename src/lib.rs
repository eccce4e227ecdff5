#![forbid(unsafe_code)]

//! Conversion and validation of geographic coordinates written in degrees and decimal minutes.
//!
//! ```
//! use libgeocoords::{decimal_to_degrees, degrees_to_decimal, validate_coords};
//!
//! assert_eq!(decimal_to_degrees(-0.5), "-0º 30.00'");
//! assert_eq!(degrees_to_decimal("-0", 30.), -0.5);
//!
//! let coords = validate_coords("40º 26.76'", "-3º 42.23'").unwrap();
//! assert_eq!(coords.lat, ["40".to_string(), "26.76".to_string()]);
//! ```

pub mod convert;
pub mod glyphs;
pub mod parse;
pub mod validate;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use convert::{decimal_to_degrees, degrees_to_decimal, DegreesMinutes};
pub use validate::{validate_coords, Axis, InvalidCoords, ValidCoords};

#[cfg(test)]
mod test {
    use crate::{decimal_to_degrees, degrees_to_decimal, validate_coords};

    /// Text produced by the converter is accepted by the validator, and the validated components
    /// convert back to the original value.
    #[test]
    fn test_converter_output_validates() {
        let run_test = |lat: f64, lng: f64| {
            let lat_dm = decimal_to_degrees(lat);
            let lng_dm = decimal_to_degrees(lng);
            let coords = match validate_coords(&lat_dm, &lng_dm) {
                Ok(coords) => coords,
                Err(e) => panic!("{} / {}: {}", lat_dm, lng_dm, e),
            };

            let (lat_back, lng_back) = coords.to_decimal();
            assert!((lat_back - lat).abs() < 1e-4, "{} -> {}", lat, lat_back);
            assert!((lng_back - lng).abs() < 1e-4, "{} -> {}", lng, lng_back);

            let lat_min: f64 = coords.lat[1].parse().unwrap();
            assert_eq!(degrees_to_decimal(&coords.lat[0], lat_min), lat_back);
        };

        run_test(40.446, -3.7038);
        run_test(-0.717, -0.0001);
        run_test(0.5, 179.5);
        run_test(-90., -180.);
        run_test(89.9999, 0.);
    }
}
