//! Python 2 pickle encoding (protocols 0, 1 and 2).
//!
//! Reference: CPython 2.7 `Lib/pickle.py`, `Pickler.save_*`.

pub mod constants;
mod encoder;
mod error;
mod repr;

pub use constants::{Op, Protocol, BATCH_SIZE};
pub use encoder::PickleEncoder;
pub use error::PickleError;
pub use repr::{py_repr_float, py_repr_str, py_str_float};
