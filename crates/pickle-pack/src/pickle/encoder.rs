//! Pickle encoder.
//!
//! Reference: CPython 2.7 `Lib/pickle.py`, class `Pickler`.

use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};
use pickle_buffers::Writer;

use super::constants::{Op, Protocol, BATCH_SIZE};
use super::repr::{py_repr_float, py_repr_str};
use super::PickleError;
use crate::PickleValue;

/// Python 2 pickle encoder.
///
/// Output is byte-identical to `pickle.dumps(obj, protocol)` on a 64-bit
/// CPython 2.7 for trees built from [`PickleValue`]. Containers and strings
/// are memoized with sequential indexes; because values are owned, no
/// object is ever seen twice and `GET` is never emitted.
pub struct PickleEncoder {
    pub writer: Writer,
    protocol: Protocol,
    memo: u32,
}

impl Default for PickleEncoder {
    fn default() -> Self {
        Self::new(Protocol::default())
    }
}

impl PickleEncoder {
    pub fn new(protocol: Protocol) -> Self {
        Self {
            writer: Writer::new(),
            protocol,
            memo: 0,
        }
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    /// Encodes a complete pickle: optional `PROTO` header, the value, `STOP`.
    pub fn encode(&mut self, value: &PickleValue) -> Result<Vec<u8>, PickleError> {
        self.writer.reset();
        self.memo = 0;
        if self.protocol >= Protocol::V2 {
            self.writer.u8u8(Op::PROTO, self.protocol.number());
        }
        self.write_any(value)?;
        self.writer.u8(Op::STOP);
        Ok(self.writer.flush())
    }

    pub fn write_any(&mut self, value: &PickleValue) -> Result<(), PickleError> {
        match value {
            PickleValue::None => self.writer.u8(Op::NONE),
            PickleValue::Bool(b) => self.write_bool(*b),
            PickleValue::Int(n) => self.write_int(n),
            PickleValue::Float(f) => self.write_float(*f),
            PickleValue::Str(s) => return self.write_str(s),
            PickleValue::List(items) => return self.write_list(items),
            PickleValue::Tuple(items) => return self.write_tuple(items),
            PickleValue::Dict(pairs) => return self.write_dict(pairs),
        }
        Ok(())
    }

    pub fn write_bool(&mut self, b: bool) {
        if self.protocol >= Protocol::V2 {
            self.writer.u8(if b { Op::NEWTRUE } else { Op::NEWFALSE });
        } else {
            self.writer.ascii(if b { Op::TRUE } else { Op::FALSE });
        }
    }

    /// Writes an integer as Python `int` when it fits a machine word and as
    /// Python `long` otherwise.
    pub fn write_int(&mut self, n: &BigInt) {
        match n.to_i64() {
            Some(small) => self.write_machine_int(small),
            None => self.write_long(n),
        }
    }

    fn write_machine_int(&mut self, n: i64) {
        if self.protocol.is_binary() {
            if (0..=0xff).contains(&n) {
                self.writer.u8u8(Op::BININT1, n as u8);
                return;
            }
            if (0..=0xffff).contains(&n) {
                self.writer.u8(Op::BININT2);
                self.writer.u16_le(n as u16);
                return;
            }
            if let Ok(n) = i32::try_from(n) {
                self.writer.u8(Op::BININT);
                self.writer.i32_le(n);
                return;
            }
        }
        self.writer.u8(Op::INT);
        self.writer.ascii(&n.to_string());
        self.writer.u8(b'\n');
    }

    fn write_long(&mut self, n: &BigInt) {
        if self.protocol >= Protocol::V2 {
            let bytes = encode_long(n);
            if bytes.len() < 256 {
                self.writer.u8u8(Op::LONG1, bytes.len() as u8);
            } else {
                self.writer.u8(Op::LONG4);
                self.writer.i32_le(bytes.len() as i32);
            }
            self.writer.buf(&bytes);
            return;
        }
        self.writer.u8(Op::LONG);
        self.writer.ascii(&n.to_string());
        self.writer.ascii("L\n");
    }

    pub fn write_float(&mut self, f: f64) {
        if self.protocol.is_binary() {
            self.writer.u8(Op::BINFLOAT);
            self.writer.f64(f);
        } else {
            self.writer.u8(Op::FLOAT);
            self.writer.ascii(&py_repr_float(f));
            self.writer.u8(b'\n');
        }
    }

    pub fn write_str(&mut self, s: &str) -> Result<(), PickleError> {
        if self.protocol.is_binary() {
            let bytes = s.as_bytes();
            if bytes.len() < 256 {
                self.writer.u8u8(Op::SHORT_BINSTRING, bytes.len() as u8);
            } else {
                let n = i32::try_from(bytes.len())
                    .map_err(|_| PickleError::StringTooLong(bytes.len()))?;
                self.writer.u8(Op::BINSTRING);
                self.writer.i32_le(n);
            }
            self.writer.buf(bytes);
        } else {
            self.writer.u8(Op::STRING);
            self.writer.ascii(&py_repr_str(s));
            self.writer.u8(b'\n');
        }
        self.memoize();
        Ok(())
    }

    pub fn write_list(&mut self, items: &[PickleValue]) -> Result<(), PickleError> {
        if self.protocol.is_binary() {
            self.writer.u8(Op::EMPTY_LIST);
        } else {
            self.writer.u8u8(Op::MARK, Op::LIST);
        }
        self.memoize();

        if !self.protocol.is_binary() {
            for item in items {
                self.write_any(item)?;
                self.writer.u8(Op::APPEND);
            }
            return Ok(());
        }
        for batch in items.chunks(BATCH_SIZE) {
            if let [single] = batch {
                self.write_any(single)?;
                self.writer.u8(Op::APPEND);
            } else {
                self.writer.u8(Op::MARK);
                for item in batch {
                    self.write_any(item)?;
                }
                self.writer.u8(Op::APPENDS);
            }
        }
        Ok(())
    }

    pub fn write_tuple(&mut self, items: &[PickleValue]) -> Result<(), PickleError> {
        if items.is_empty() {
            // The empty tuple is a singleton and never memoized.
            if self.protocol.is_binary() {
                self.writer.u8(Op::EMPTY_TUPLE);
            } else {
                self.writer.u8u8(Op::MARK, Op::TUPLE);
            }
            return Ok(());
        }

        if self.protocol >= Protocol::V2 && items.len() <= 3 {
            for item in items {
                self.write_any(item)?;
            }
            self.writer.u8(match items.len() {
                1 => Op::TUPLE1,
                2 => Op::TUPLE2,
                _ => Op::TUPLE3,
            });
            self.memoize();
            return Ok(());
        }

        self.writer.u8(Op::MARK);
        for item in items {
            self.write_any(item)?;
        }
        self.writer.u8(Op::TUPLE);
        self.memoize();
        Ok(())
    }

    pub fn write_dict(&mut self, pairs: &[(PickleValue, PickleValue)]) -> Result<(), PickleError> {
        if self.protocol.is_binary() {
            self.writer.u8(Op::EMPTY_DICT);
        } else {
            self.writer.u8u8(Op::MARK, Op::DICT);
        }
        self.memoize();

        if !self.protocol.is_binary() {
            for (key, value) in pairs {
                self.write_any(key)?;
                self.write_any(value)?;
                self.writer.u8(Op::SETITEM);
            }
            return Ok(());
        }
        for batch in pairs.chunks(BATCH_SIZE) {
            if let [(key, value)] = batch {
                self.write_any(key)?;
                self.write_any(value)?;
                self.writer.u8(Op::SETITEM);
            } else {
                self.writer.u8(Op::MARK);
                for (key, value) in batch {
                    self.write_any(key)?;
                    self.write_any(value)?;
                }
                self.writer.u8(Op::SETITEMS);
            }
        }
        Ok(())
    }

    /// Stores the object just written under the next memo index.
    fn memoize(&mut self) {
        let index = self.memo;
        self.memo += 1;
        if self.protocol.is_binary() {
            if index < 256 {
                self.writer.u8u8(Op::BINPUT, index as u8);
            } else {
                self.writer.u8(Op::LONG_BINPUT);
                self.writer.i32_le(index as i32);
            }
        } else {
            self.writer.u8(Op::PUT);
            self.writer.ascii(&index.to_string());
            self.writer.u8(b'\n');
        }
    }
}

/// Minimal little-endian two's-complement bytes; zero encodes as nothing.
fn encode_long(n: &BigInt) -> Vec<u8> {
    if n.is_zero() {
        return Vec::new();
    }
    n.to_signed_bytes_le()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_long_is_minimal_twos_complement() {
        assert!(encode_long(&BigInt::from(0)).is_empty());
        assert_eq!(encode_long(&BigInt::from(255)), vec![0xff, 0x00]);
        assert_eq!(encode_long(&BigInt::from(-128)), vec![0x80]);
        assert_eq!(encode_long(&BigInt::from(-256)), vec![0x00, 0xff]);
        let boundary = (BigInt::from(1) << 64) - 1;
        let mut expected = vec![0xff; 8];
        expected.push(0x00);
        assert_eq!(encode_long(&boundary), expected);
    }

    #[test]
    fn memo_switches_to_long_binput_after_256_entries() {
        let mut encoder = PickleEncoder::new(Protocol::V1);
        let items: Vec<PickleValue> = (0..256).map(|_| PickleValue::from("x")).collect();
        let bytes = encoder.encode(&PickleValue::List(items)).unwrap();
        // The list takes index 0, the 256th string takes index 256.
        let tail = &bytes[bytes.len() - 8..];
        assert_eq!(tail, &[b'x', b'r', 0x00, 0x01, 0x00, 0x00, b'e', b'.']);
        assert_eq!(&bytes[..3], &[b']', b'q', 0x00]);
    }
}
