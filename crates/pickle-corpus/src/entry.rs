//! Typed interpretation of one batch element as a metric entry.

use pickle_pack::PickleValue;
use thiserror::Error;

use crate::Numeric;

/// A well-formed `(name, (timestamp, value))` entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<'a> {
    pub name: &'a str,
    pub timestamp: Numeric<'a>,
    pub value: Numeric<'a>,
}

impl Entry<'_> {
    /// Plaintext protocol line without terminator: `name value timestamp`.
    pub fn line(&self) -> String {
        format!("{} {} {}", self.name, self.value, self.timestamp)
    }
}

/// Why a batch element produced no line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SkipReason {
    #[error("entry is a {0}, expected a list or tuple")]
    NotSequence(&'static str),
    #[error("entry has {0} elements, expected 2")]
    EntryArity(usize),
    #[error("metric name is a {0}, expected str")]
    NameNotText(&'static str),
    #[error("measurement is a {0}, expected a list or tuple")]
    MeasurementNotSequence(&'static str),
    #[error("measurement has {0} elements, expected 2")]
    MeasurementArity(usize),
    #[error("timestamp is a {0}, expected int, float or str")]
    TimestampNotNumeric(&'static str),
    #[error("value is a {0}, expected int, float or str")]
    ValueNotNumeric(&'static str),
}

/// Attempts to read `element` as an entry.
///
/// Lists and tuples are interchangeable at both nesting levels.
pub fn interpret(element: &PickleValue) -> Result<Entry<'_>, SkipReason> {
    let [name, measurement] = pair(element).map_err(|arity| {
        arity.map_or(SkipReason::NotSequence(element.kind()), SkipReason::EntryArity)
    })?;

    let PickleValue::Str(name) = name else {
        return Err(SkipReason::NameNotText(name.kind()));
    };

    let [timestamp, value] = pair(measurement).map_err(|arity| {
        arity.map_or(
            SkipReason::MeasurementNotSequence(measurement.kind()),
            SkipReason::MeasurementArity,
        )
    })?;

    let timestamp =
        Numeric::from_value(timestamp).ok_or(SkipReason::TimestampNotNumeric(timestamp.kind()))?;
    let value = Numeric::from_value(value).ok_or(SkipReason::ValueNotNumeric(value.kind()))?;

    Ok(Entry {
        name,
        timestamp,
        value,
    })
}

/// Splits a 2-element list or tuple. `Err(None)` means not a sequence,
/// `Err(Some(n))` a sequence of the wrong length.
fn pair(value: &PickleValue) -> Result<&[PickleValue; 2], Option<usize>> {
    let items = value.as_sequence().ok_or(None)?;
    items.try_into().map_err(|_| Some(items.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    fn entry(name: PickleValue, measurement: PickleValue) -> PickleValue {
        PickleValue::list([name, measurement])
    }

    #[test]
    fn list_and_tuple_entries_are_equivalent() {
        let as_list = entry("a.b".into(), PickleValue::list([10i64.into(), 1.5.into()]));
        let as_tuple = PickleValue::tuple([
            "a.b".into(),
            PickleValue::tuple([10i64.into(), 1.5.into()]),
        ]);
        let ten = BigInt::from(10);
        let expected = Entry {
            name: "a.b",
            timestamp: Numeric::Integer(&ten),
            value: Numeric::Float(1.5),
        };
        assert_eq!(interpret(&as_list), Ok(expected.clone()));
        assert_eq!(interpret(&as_tuple), Ok(expected));
    }

    #[test]
    fn line_puts_value_before_timestamp() {
        let element = entry("x".into(), PickleValue::list(["1445000000.12".into(), (-9.7).into()]));
        let line = interpret(&element).map(|e| e.line());
        assert_eq!(line.as_deref(), Ok("x -9.700000000000 1445000000.12"));
    }

    #[test]
    fn skip_reasons() {
        assert_eq!(
            interpret(&"string".into()),
            Err(SkipReason::NotSequence("str"))
        );
        assert_eq!(
            interpret(&PickleValue::list(["a".into()])),
            Err(SkipReason::EntryArity(1))
        );
        assert_eq!(
            interpret(&entry(5i64.into(), PickleValue::tuple([1.0.into(), 42i64.into()]))),
            Err(SkipReason::NameNotText("int"))
        );
        assert_eq!(
            interpret(&entry("a".into(), 42i64.into())),
            Err(SkipReason::MeasurementNotSequence("int"))
        );
        assert_eq!(
            interpret(&entry("a".into(), PickleValue::Dict(vec![]))),
            Err(SkipReason::MeasurementNotSequence("dict"))
        );
        assert_eq!(
            interpret(&entry("a".into(), PickleValue::list([1i64.into(), 2i64.into(), 3i64.into()]))),
            Err(SkipReason::MeasurementArity(3))
        );
        assert_eq!(
            interpret(&entry("a".into(), PickleValue::list([PickleValue::None, 2i64.into()]))),
            Err(SkipReason::TimestampNotNumeric("NoneType"))
        );
        assert_eq!(
            interpret(&entry("a".into(), PickleValue::list([1i64.into(), true.into()]))),
            Err(SkipReason::ValueNotNumeric("bool"))
        );
    }

    #[test]
    fn skip_reason_messages() {
        assert_eq!(
            SkipReason::NameNotText("int").to_string(),
            "metric name is a int, expected str"
        );
        assert_eq!(
            SkipReason::EntryArity(3).to_string(),
            "entry has 3 elements, expected 2"
        );
    }
}
