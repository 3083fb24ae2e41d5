//! Pickle encoder error type.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PickleError {
    #[error("unsupported pickle protocol {0}, expected 0, 1 or 2")]
    UnsupportedProtocol(u8),
    #[error("string of {0} bytes does not fit a BINSTRING length")]
    StringTooLong(usize),
}
