//! Binary buffer utilities for the pickle corpus workspace.
//!
//! The pickle wire format mixes byte orders: opcode arguments such as
//! `BININT` and `BINSTRING` lengths are little-endian while `BINFLOAT`
//! is big-endian. [`Writer`] exposes both explicitly.
//!
//! # Example
//!
//! ```
//! use pickle_buffers::Writer;
//!
//! let mut writer = Writer::new();
//! writer.u8(b'K');
//! writer.u8(42);
//! writer.ascii("I7\n");
//! assert_eq!(writer.flush(), b"K*I7\n".to_vec());
//! ```

mod writer;

pub use writer::Writer;
