//! Timestamp and value representations inside a measurement.

use std::fmt;

use num_bigint::BigInt;
use pickle_pack::PickleValue;

/// A timestamp or value as a relay sees it on the wire.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric<'a> {
    Integer(&'a BigInt),
    Float(f64),
    /// Pre-formatted by the fixture author; emitted verbatim.
    Text(&'a str),
}

impl<'a> Numeric<'a> {
    /// Booleans, `None` and containers are not numerics.
    pub fn from_value(value: &'a PickleValue) -> Option<Self> {
        match value {
            PickleValue::Int(n) => Some(Numeric::Integer(n)),
            PickleValue::Float(f) => Some(Numeric::Float(*f)),
            PickleValue::Str(s) => Some(Numeric::Text(s)),
            _ => None,
        }
    }
}

impl fmt::Display for Numeric<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Integer(n) => write!(f, "{n}"),
            Numeric::Float(x) => f.write_str(&format_fixed(*x)),
            Numeric::Text(s) => f.write_str(s),
        }
    }
}

/// `%.12f`: fixed notation, twelve fractional digits, sign preserved.
pub fn format_fixed(x: f64) -> String {
    if x.is_nan() {
        "nan".to_owned()
    } else if x == f64::INFINITY {
        "inf".to_owned()
    } else if x == f64::NEG_INFINITY {
        "-inf".to_owned()
    } else {
        format!("{x:.12}")
    }
}
