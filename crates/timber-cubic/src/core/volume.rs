//! Log volume arithmetic
//!
//! `volume = C² × L / 2304` with the length in feet and the mid-girth
//! circumference in inches, reported as whole feet plus rounded twelfths.

use serde::{Deserialize, Serialize};

/// Scaling constant of the simplified timber rule
pub const DOYLE_DIVISOR: f64 = 2304.0;

/// A derived volume, split into feet and twelfths ("inches")
///
/// `inches` is always in `0..=11`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeResult {
    /// Whole feet
    pub feet: f64,
    /// Remaining twelfths, rounded
    pub inches: u8,
}

impl Default for VolumeResult {
    fn default() -> Self {
        Self::ZERO
    }
}

impl VolumeResult {
    /// The fallback shown for empty or non-positive input
    pub const ZERO: Self = Self {
        feet: 0.0,
        inches: 0,
    };

    /// Splits a raw volume into feet and inches, carrying 12″ into a foot
    #[must_use]
    pub fn from_volume(volume: f64) -> Self {
        let mut feet = volume.floor();
        let mut inches = ((volume - feet) * 12.0).round();
        if inches == 12.0 {
            feet += 1.0;
            inches = 0.0;
        }
        Self {
            feet,
            // NaN (infinite volume) saturates to 0
            inches: inches as u8,
        }
    }

    /// Returns true for the "0′ 0″" fallback value
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.feet == 0.0 && self.inches == 0
    }
}

/// Feet shown for a volume too large to represent
pub const OVERFLOW_FEET: &str = "∞";

impl std::fmt::Display for VolumeResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.feet.is_finite() {
            write!(f, "{}′ {}″", self.feet, self.inches)
        } else {
            write!(f, "{OVERFLOW_FEET}′ {}″", self.inches)
        }
    }
}

/// Computes the volume for the raw text of both fields
///
/// Either value failing to parse, or not being strictly positive, yields
/// [`VolumeResult::ZERO`].
#[must_use]
pub fn compute_volume(length: &str, circumference: &str) -> VolumeResult {
    let l = parse_leading_float(length);
    let c = parse_leading_float(circumference);

    // NaN fails both comparisons
    if !(l > 0.0 && c > 0.0) {
        return VolumeResult::ZERO;
    }

    VolumeResult::from_volume(c * c * l / DOYLE_DIVISOR)
}

/// Parses the longest leading decimal literal of `text`
///
/// Leading whitespace, an optional sign, digits with an optional fraction and
/// an optional exponent are accepted; anything after the literal is ignored.
/// `Infinity` is recognised. Returns NaN when no literal is present.
#[must_use]
pub fn parse_leading_float(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut j = frac_start;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        mantissa_digits += j - frac_start;
        // "5." and "5.e2" keep the bare point
        if mantissa_digits > 0 {
            end = j;
        }
    }

    if mantissa_digits == 0 {
        return f64::NAN;
    }

    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut j = end + 1;
        if j < len && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            end = j;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}
