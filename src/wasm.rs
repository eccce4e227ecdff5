//! WebAssembly bindings for the `libgeocoords` crate.
//!
//! The exported names match the `geoUtils` namespace that browser code already calls:
//! `decimalToDegrees`, `degreesToDecimal` and `validCoords`.

use crate::{convert, validate};
use wasm_bindgen::prelude::*;

/// Convert decimal degrees to a `DDDº MM.MM'` string.
#[wasm_bindgen(js_name = decimalToDegrees)]
pub fn decimal_to_degrees(dec: f64) -> String {
    convert::decimal_to_degrees(dec)
}

/// Convert degrees and decimal minutes to decimal degrees. The sign is taken from `deg`, so pass
/// it as a string to keep `-0` apart from `0`.
#[wasm_bindgen(js_name = degreesToDecimal)]
pub fn degrees_to_decimal(deg: &str, min: f64) -> f64 {
    convert::degrees_to_decimal(deg, min)
}

/// Validate a latitude/longitude pair. Returns `false` if either is invalid, otherwise the raw
/// numbers as `{ lat: ['40', '26.76'], lng: [...] }`.
#[wasm_bindgen(js_name = validCoords)]
pub fn valid_coords(lat: &str, lng: &str) -> JsValue {
    match validate::validate_coords(lat, lng) {
        Ok(coords) => match JsValue::from_serde(&coords) {
            Ok(v) => v,
            Err(_) => JsValue::from_bool(false),
        },
        Err(_) => JsValue::from_bool(false),
    }
}

/// Same as `validCoords`, but throws a message explaining which coordinate was rejected and
/// where, instead of returning `false`.
#[wasm_bindgen(js_name = checkCoords)]
pub fn check_coords(lat: &str, lng: &str) -> Result<JsValue, JsValue> {
    match validate::validate_coords(lat, lng) {
        Ok(coords) => match JsValue::from_serde(&coords) {
            Ok(v) => Ok(v),
            Err(_) => Err(JsValue::from_str("Unable to convert result to JSON!")),
        },
        Err(e) => Err(JsValue::from_str(&e.explain())),
    }
}
