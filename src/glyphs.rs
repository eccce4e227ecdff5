//! Symbols that may follow the degree and minute components of a coordinate.

/// Degree signs accepted after the degree component: the ring above (U+00B0) and the masculine
/// ordinal indicator (U+00BA), which is what most Spanish keyboards produce.
pub const DEGREE_SIGNS: &str = "°º";

/// Minute signs accepted after the minute component: apostrophe, prime (U+2032) and acute
/// accent (U+00B4).
pub const MINUTE_SIGNS: &str = "'′´";

/// Degree sign written by the converters.
pub const DEGREE_SIGN: char = 'º';

/// Minute sign written by the converters.
pub const MINUTE_SIGN: char = '\'';

/// Whitespace allowed between the degree and minute components: the same set a JS `\s` matches,
/// which adds U+FEFF to Unicode whitespace but leaves out NEL (U+0085).
pub fn is_separator(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}
