//! Numbers that remember whether they were written as integers.
//!
//! Rule thresholds and stretch parameters arrive either as integers (`100`)
//! or as reals (`2.0`), and the config line must echo that form: `100` stays
//! `100`, `2.0` stays `2.0`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An integer or real value in its default decimal text form.
///
/// Whole numbers above `i64::MAX` (up to `u64::MAX`) are kept exact in
/// [`Numeric::LargeInteger`]; only values that fit neither integer type
/// become reals. Build values through [`Numeric::parse`] or the `From`
/// impls so that each number has a single representation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    /// Whole number, rendered without a fractional part.
    Integer(i64),
    /// Whole number greater than `i64::MAX`.
    LargeInteger(u64),
    /// Real number, rendered with a fractional part or exponent.
    Real(f64),
}

impl Numeric {
    /// The value as `f64`, for comparisons.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Integer(v) => v as f64,
            Self::LargeInteger(v) => v as f64,
            Self::Real(v) => v,
        }
    }

    /// Parse decimal text, preferring the integer form.
    ///
    /// Leading and trailing whitespace is not accepted; callers trim first.
    pub fn parse(text: &str) -> Option<Self> {
        if let Ok(v) = text.parse::<i64>() {
            return Some(Self::Integer(v));
        }
        if let Ok(v) = text.parse::<u64>() {
            return Some(Self::LargeInteger(v));
        }
        text.parse::<f64>().ok().map(Self::Real)
    }
}

impl From<i64> for Numeric {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<u64> for Numeric {
    fn from(v: u64) -> Self {
        i64::try_from(v).map_or(Self::LargeInteger(v), Self::Integer)
    }
}

impl From<f64> for Numeric {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::LargeInteger(v) => write!(f, "{v}"),
            Self::Real(v) => fmt_real(v, f),
        }
    }
}

/// Shortest round-trip form with a signed, two-digit exponent.
fn fmt_real(v: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if v.is_nan() {
        return f.write_str("nan");
    }
    if v.is_infinite() {
        return f.write_str(if v.is_sign_positive() { "inf" } else { "-inf" });
    }
    // `Debug` always keeps a fractional part or exponent, and switches to
    // exponent form below 1e-4 and from 1e16 upwards.
    let text = format!("{v:?}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            write!(f, "{mantissa}e{sign}{digits:0>2}")
        }
        None => f.write_str(&text),
    }
}
