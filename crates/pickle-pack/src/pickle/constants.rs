//! Pickle opcodes and protocol versions.
#![allow(non_snake_case)]

use super::PickleError;

/// Opcode bytes emitted by the encoder.
pub mod Op {
    pub const MARK: u8 = b'(';
    pub const STOP: u8 = b'.';
    pub const NONE: u8 = b'N';

    pub const INT: u8 = b'I';
    pub const BININT: u8 = b'J';
    pub const BININT1: u8 = b'K';
    pub const BININT2: u8 = b'M';
    pub const LONG: u8 = b'L';
    pub const LONG1: u8 = 0x8a;
    pub const LONG4: u8 = 0x8b;

    pub const FLOAT: u8 = b'F';
    pub const BINFLOAT: u8 = b'G';

    pub const STRING: u8 = b'S';
    pub const BINSTRING: u8 = b'T';
    pub const SHORT_BINSTRING: u8 = b'U';

    pub const APPEND: u8 = b'a';
    pub const APPENDS: u8 = b'e';
    pub const LIST: u8 = b'l';
    pub const EMPTY_LIST: u8 = b']';

    pub const TUPLE: u8 = b't';
    pub const EMPTY_TUPLE: u8 = b')';
    pub const TUPLE1: u8 = 0x85;
    pub const TUPLE2: u8 = 0x86;
    pub const TUPLE3: u8 = 0x87;

    pub const DICT: u8 = b'd';
    pub const EMPTY_DICT: u8 = b'}';
    pub const SETITEM: u8 = b's';
    pub const SETITEMS: u8 = b'u';

    pub const PUT: u8 = b'p';
    pub const BINPUT: u8 = b'q';
    pub const LONG_BINPUT: u8 = b'r';

    pub const PROTO: u8 = 0x80;
    pub const NEWTRUE: u8 = 0x88;
    pub const NEWFALSE: u8 = 0x89;

    /// Protocol 0/1 booleans are spelled as `INT` with a two-digit payload.
    pub const TRUE: &str = "I01\n";
    pub const FALSE: &str = "I00\n";
}

/// Number of items grouped under one `APPENDS`/`SETITEMS` opcode.
pub const BATCH_SIZE: usize = 1000;

/// Pickle protocol version understood by Python 2 carbon clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub enum Protocol {
    /// Text protocol; `pickle.dump` default on Python 2.
    #[default]
    V0 = 0,
    V1 = 1,
    V2 = 2,
}

impl Protocol {
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Protocols 1 and 2 use the binary opcode family.
    pub fn is_binary(self) -> bool {
        self >= Protocol::V1
    }
}

impl TryFrom<u8> for Protocol {
    type Error = PickleError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Protocol::V0),
            1 => Ok(Protocol::V1),
            2 => Ok(Protocol::V2),
            other => Err(PickleError::UnsupportedProtocol(other)),
        }
    }
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}
