//! [`PickleValue`] — in-memory Python object tree.

use num_bigint::BigInt;

/// A Python 2 object as far as the pickle encoder is concerned.
///
/// `Int` holds arbitrary-precision integers. The encoder decides between
/// Python `int` and `long` opcodes from the magnitude, the same way a
/// 64-bit CPython 2 build does.
#[derive(Debug, Clone, PartialEq)]
pub enum PickleValue {
    None,
    Bool(bool),
    Int(BigInt),
    Float(f64),
    Str(String),
    List(Vec<PickleValue>),
    Tuple(Vec<PickleValue>),
    /// Key/value pairs in insertion order.
    Dict(Vec<(PickleValue, PickleValue)>),
}

impl PickleValue {
    pub fn list<I: IntoIterator<Item = PickleValue>>(items: I) -> Self {
        PickleValue::List(items.into_iter().collect())
    }

    pub fn tuple<I: IntoIterator<Item = PickleValue>>(items: I) -> Self {
        PickleValue::Tuple(items.into_iter().collect())
    }

    /// Returns the elements of a list or tuple.
    pub fn as_sequence(&self) -> Option<&[PickleValue]> {
        match self {
            PickleValue::List(items) | PickleValue::Tuple(items) => Some(items),
            _ => None,
        }
    }

    /// Python type name, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            PickleValue::None => "NoneType",
            PickleValue::Bool(_) => "bool",
            PickleValue::Int(_) => "int",
            PickleValue::Float(_) => "float",
            PickleValue::Str(_) => "str",
            PickleValue::List(_) => "list",
            PickleValue::Tuple(_) => "tuple",
            PickleValue::Dict(_) => "dict",
        }
    }
}

impl From<&str> for PickleValue {
    fn from(s: &str) -> Self {
        PickleValue::Str(s.to_owned())
    }
}

impl From<String> for PickleValue {
    fn from(s: String) -> Self {
        PickleValue::Str(s)
    }
}

impl From<i64> for PickleValue {
    fn from(n: i64) -> Self {
        PickleValue::Int(BigInt::from(n))
    }
}

impl From<BigInt> for PickleValue {
    fn from(n: BigInt) -> Self {
        PickleValue::Int(n)
    }
}

impl From<f64> for PickleValue {
    fn from(f: f64) -> Self {
        PickleValue::Float(f)
    }
}

impl From<bool> for PickleValue {
    fn from(b: bool) -> Self {
        PickleValue::Bool(b)
    }
}
