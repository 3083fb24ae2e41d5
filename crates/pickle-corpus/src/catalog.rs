//! The fixed set of fixtures making up the corpus.
//!
//! Every timestamp comes from one capture per run, taken by
//! [`CatalogBuilder`] and passed to each fixture constructor.

use num_bigint::BigInt;
use pickle_pack::{py_str_float, PickleValue};

use crate::CorpusError;

/// What a fixture exercises in the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FixtureClass {
    /// Malformed batch or entries; the relay must not crash.
    Invalid,
    /// Lists and tuples mixed at entry and measurement level.
    MixedContainer,
    /// Pre-stringified timestamps and values.
    MixedType,
    IntegerDomain,
    FloatDomain,
    /// Integers around 2^64.
    OverflowBoundary,
    /// Batch is a tuple rather than a list.
    OuterTuple,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Fixture {
    pub name: &'static str,
    pub class: FixtureClass,
    pub graph: PickleValue,
}

/// Builds the catalog around a single captured timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogBuilder {
    captured_at: f64,
}

impl CatalogBuilder {
    /// Captures the current wall-clock time in seconds, with microseconds.
    pub fn now() -> Self {
        let micros = chrono::Utc::now().timestamp_micros();
        Self::at(micros as f64 / 1e6)
    }

    pub fn at(captured_at: f64) -> Self {
        Self { captured_at }
    }

    pub fn captured_at(&self) -> f64 {
        self.captured_at
    }

    pub fn build(&self) -> Catalog {
        let ts = self.captured_at;
        let fixtures = vec![
            fixture("invalid.000", FixtureClass::Invalid, invalid_mapping()),
            fixture("invalid.001", FixtureClass::Invalid, invalid_bare_strings()),
            fixture("invalid.002", FixtureClass::Invalid, invalid_name(ts)),
            fixture("test.001", FixtureClass::MixedContainer, mixed_containers(ts)),
            fixture("test.002", FixtureClass::MixedType, mixed_types(ts)),
            fixture("test.003", FixtureClass::IntegerDomain, integer_domain(ts)),
            fixture("test.004", FixtureClass::FloatDomain, float_domain(ts)),
            fixture("test.005", FixtureClass::OverflowBoundary, overflow_boundary(ts)),
            fixture("test.006", FixtureClass::OuterTuple, outer_tuple(ts)),
        ];
        Catalog {
            captured_at: ts,
            fixtures,
        }
    }
}

/// Ordered fixture set of one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    captured_at: f64,
    fixtures: Vec<Fixture>,
}

impl Catalog {
    pub fn captured_at(&self) -> f64 {
        self.captured_at
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fixture> {
        self.fixtures.iter()
    }

    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Fixture> {
        self.fixtures.iter().find(|f| f.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fixtures.iter().map(|f| f.name)
    }

    /// Fixtures named in `only`, in catalog order; all of them when empty.
    pub fn select(&self, only: &[String]) -> Result<Vec<&Fixture>, CorpusError> {
        if let Some(unknown) = only.iter().find(|name| self.get(name).is_none()) {
            return Err(CorpusError::UnknownFixture(unknown.clone()));
        }
        Ok(self
            .fixtures
            .iter()
            .filter(|f| only.is_empty() || only.iter().any(|name| name == f.name))
            .collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Fixture;
    type IntoIter = std::slice::Iter<'a, Fixture>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn fixture(name: &'static str, class: FixtureClass, graph: PickleValue) -> Fixture {
    Fixture { name, class, graph }
}

fn list_entry(name: &str, measurement: PickleValue) -> PickleValue {
    PickleValue::list([name.into(), measurement])
}

fn tuple_entry(name: &str, measurement: PickleValue) -> PickleValue {
    PickleValue::tuple([name.into(), measurement])
}

fn list_point(ts: impl Into<PickleValue>, value: impl Into<PickleValue>) -> PickleValue {
    PickleValue::list([ts.into(), value.into()])
}

fn tuple_point(ts: impl Into<PickleValue>, value: impl Into<PickleValue>) -> PickleValue {
    PickleValue::tuple([ts.into(), value.into()])
}

/// `int(ts)`
fn whole(ts: f64) -> i64 {
    ts.trunc() as i64
}

/// `(1 << 64) + delta`
fn past_u64(delta: i64) -> BigInt {
    (BigInt::from(1) << 64) + delta
}

fn invalid_mapping() -> PickleValue {
    PickleValue::Dict(vec![("foo".into(), "bar".into())])
}

fn invalid_bare_strings() -> PickleValue {
    PickleValue::list(["string".into()])
}

fn invalid_name(ts: f64) -> PickleValue {
    PickleValue::list([PickleValue::list([5i64.into(), tuple_point(ts, 42i64)])])
}

fn mixed_containers(ts: f64) -> PickleValue {
    PickleValue::list([
        list_entry("test.001", list_point(ts, 42i64)),
        list_entry("test.002", list_point(ts, 43i64)),
        list_entry("test.003", tuple_point(ts, 44i64)),
        tuple_entry("test.004", tuple_point(ts, 45i64)),
    ])
}

fn mixed_types(ts: f64) -> PickleValue {
    PickleValue::list([
        list_entry("test.001", list_point(py_str_float(ts), 42i64)),
        list_entry("test.002", list_point(ts, "43")),
        list_entry("test.003", tuple_point(py_str_float(ts), "44")),
        tuple_entry(
            "test.004",
            tuple_point(
                py_str_float(ts),
                "3.14159265358979323846264338327950288419716939937510",
            ),
        ),
    ])
}

fn integer_domain(ts: f64) -> PickleValue {
    PickleValue::list([
        list_entry("test.001", list_point(whole(ts), 42i64)),
        list_entry("test.002", list_point(whole(ts), 43i64)),
        list_entry("test.003", tuple_point(whole(ts), 44i64)),
        tuple_entry("test.004", tuple_point(whole(ts), 45i64)),
    ])
}

fn float_domain(ts: f64) -> PickleValue {
    PickleValue::list([
        list_entry("test.001", list_point(ts, 42.3456)),
        list_entry("test.002", list_point(ts, 3.14159265358979323846)),
        list_entry("test.003", tuple_point(ts, 2.71828)),
        tuple_entry("test.004", tuple_point(ts, -9.7)),
    ])
}

fn overflow_boundary(ts: f64) -> PickleValue {
    PickleValue::list([
        list_entry("test.001", list_point(ts, past_u64(-1))),
        list_entry("test.002", list_point(ts, past_u64(0))),
        list_entry("test.003", tuple_point(ts, past_u64(1))),
        tuple_entry("test.004", tuple_point(ts, past_u64(2))),
    ])
}

fn outer_tuple(ts: f64) -> PickleValue {
    PickleValue::tuple([
        tuple_entry("test.001", tuple_point(whole(ts), 1.5)),
        list_entry("test.002", list_point(whole(ts), -0.125)),
        tuple_entry("test.003", list_point(whole(ts), 46i64)),
    ])
}
