use byteorder::{ByteOrder, LittleEndian};
use std::fmt;

/// Size of one directory record on disk.
pub const LUMP_ENTRY_SIZE: usize = 16;
pub const LUMP_NAME_LEN:   usize = 8;

const DATA_OFFSET_OFFSET: usize = 0;
const SIZE_OFFSET:        usize = 4;
const NAME_OFFSET:        usize = 8;

/// An 8-byte lump identifier, compared byte-for-byte.
///
/// No padding normalisation happens here: `"D_E1M1\0\0"` and `"D_E1M1  "`
/// are different names.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LumpName(pub [u8; LUMP_NAME_LEN]);

impl LumpName {
    /// Build a zero-padded name from an ASCII string of at most 8 bytes.
    /// Longer input is truncated.
    pub const fn padded(name: &str) -> Self {
        let src = name.as_bytes();
        let mut out = [0u8; LUMP_NAME_LEN];
        let mut i = 0;
        while i < src.len() && i < LUMP_NAME_LEN {
            out[i] = src[i];
            i += 1;
        }
        LumpName(out)
    }

    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.0.starts_with(prefix)
    }
}

impl fmt::Display for LumpName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = String::with_capacity(LUMP_NAME_LEN);
        for &b in self.0.iter().take_while(|&&b| b != 0) {
            if b.is_ascii_graphic() || b == b' ' {
                s.push(b as char);
            } else {
                s.push_str(&format!("\\x{b:02x}"));
            }
        }
        f.pad(&s)
    }
}

impl fmt::Debug for LumpName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LumpName(\"{self}\")")
    }
}

/// One directory record: where a lump's bytes live and what it is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LumpEntry {
    pub data_offset: u32,
    pub size:        u32,
    pub name:        LumpName,
}

impl LumpEntry {
    pub fn decode(buf: &[u8; LUMP_ENTRY_SIZE]) -> Self {
        let mut name = [0u8; LUMP_NAME_LEN];
        name.copy_from_slice(&buf[NAME_OFFSET..]);
        Self {
            data_offset: LittleEndian::read_u32(&buf[DATA_OFFSET_OFFSET..]),
            size:        LittleEndian::read_u32(&buf[SIZE_OFFSET..]),
            name:        LumpName(name),
        }
    }

    pub fn encode(&self) -> [u8; LUMP_ENTRY_SIZE] {
        let mut buf = [0u8; LUMP_ENTRY_SIZE];
        LittleEndian::write_u32(&mut buf[DATA_OFFSET_OFFSET..], self.data_offset);
        LittleEndian::write_u32(&mut buf[SIZE_OFFSET..], self.size);
        buf[NAME_OFFSET..].copy_from_slice(&self.name.0);
        buf
    }

    /// Same data region, different name.
    pub fn renamed(&self, name: LumpName) -> Self {
        Self { name, ..*self }
    }
}
