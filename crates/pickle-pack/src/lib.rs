//! Python 2 pickle serialization for Graphite pickle-protocol batches.
//!
//! The encoder reproduces what CPython 2.7's `pickle.dump` writes for the
//! same object tree, so generated payloads can stand in for real carbon
//! clients when exercising a pickle relay.

mod pickle_value;

pub mod pickle;

pub use pickle::{
    py_repr_float, py_repr_str, py_str_float, PickleEncoder, PickleError, Protocol,
};
pub use pickle_value::PickleValue;
