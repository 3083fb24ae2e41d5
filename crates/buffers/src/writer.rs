//! Auto-growing binary buffer writer.

/// Default initial capacity of a fresh writer.
const DEFAULT_CAPACITY: usize = 64 * 1024;

/// A binary writer that appends to an auto-growing buffer.
///
/// `flush` hands out everything written since the last flush or reset and
/// leaves the writer empty with its allocation intact, so one writer can be
/// reused across documents.
#[derive(Debug, Clone)]
pub struct Writer {
    uint8: Vec<u8>,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    fn with_capacity(capacity: usize) -> Self {
        Self {
            uint8: Vec::with_capacity(capacity),
        }
    }

    /// Discards any pending bytes.
    pub fn reset(&mut self) {
        self.uint8.clear();
    }

    /// Returns the pending bytes and empties the writer, keeping its capacity.
    pub fn flush(&mut self) -> Vec<u8> {
        self.uint8.split_off(0)
    }

    pub fn u8(&mut self, byte: u8) {
        self.uint8.push(byte);
    }

    /// Writes an opcode byte followed by a one-byte argument.
    pub fn u8u8(&mut self, op: u8, arg: u8) {
        self.uint8.push(op);
        self.uint8.push(arg);
    }

    /// Little-endian unsigned 16-bit integer.
    pub fn u16_le(&mut self, n: u16) {
        self.uint8.extend_from_slice(&n.to_le_bytes());
    }

    /// Little-endian signed 32-bit integer.
    pub fn i32_le(&mut self, n: i32) {
        self.uint8.extend_from_slice(&n.to_le_bytes());
    }

    /// Big-endian IEEE-754 double.
    pub fn f64(&mut self, f: f64) {
        self.uint8.extend_from_slice(&f.to_be_bytes());
    }

    pub fn buf(&mut self, data: &[u8]) {
        self.uint8.extend_from_slice(data);
    }

    /// Writes the bytes of an ASCII string as-is.
    pub fn ascii(&mut self, s: &str) {
        self.uint8.extend_from_slice(s.as_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_endianness() {
        let mut w = Writer::new();
        w.u16_le(0x0102);
        w.i32_le(-2);
        w.f64(1.0);
        assert_eq!(
            w.flush(),
            vec![0x02, 0x01, 0xfe, 0xff, 0xff, 0xff, 0x3f, 0xf0, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn flush_empties_the_writer() {
        let mut w = Writer::with_capacity(4);
        w.u8u8(b'K', 7);
        assert_eq!(w.flush(), vec![b'K', 7]);
        assert!(w.uint8.is_empty());
        w.u8(1);
        w.reset();
        assert!(w.flush().is_empty());
    }

    #[test]
    fn flush_keeps_the_allocation() {
        let mut w = Writer::new();
        w.ascii("I42\n.");
        assert_eq!(w.flush(), b"I42\n.".to_vec());
        assert!(w.uint8.capacity() >= DEFAULT_CAPACITY);

        w.ascii("N.");
        assert_eq!(w.flush(), b"N.".to_vec());
        assert!(w.uint8.capacity() >= DEFAULT_CAPACITY);
    }
}
