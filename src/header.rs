//! WAD header: the 12 bytes at offset 0.
//!
//! | Offset | Width | Field              |
//! |--------|-------|--------------------|
//! | 0      | 4     | magic (`IWAD`/`PWAD`) |
//! | 4      | 4     | lump count (LE u32)   |
//! | 8      | 4     | directory offset (LE u32) |

use byteorder::{ByteOrder, LittleEndian};
use std::fmt;
use std::io::Read;

use crate::error::{eof_as, FormatError, WadError};

pub const IWAD_MAGIC: &[u8; 4] = b"IWAD";
pub const PWAD_MAGIC: &[u8; 4] = b"PWAD";

pub const HEADER_SIZE:             usize = 12;
pub const LUMP_COUNT_OFFSET:       usize = 4;
pub const DIRECTORY_OFFSET_OFFSET: usize = 8;

/// Internal (game data) or Patch (add-on) archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WadKind {
    Internal,
    Patch,
}

impl fmt::Display for WadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WadKind::Internal => f.write_str("IWAD"),
            WadKind::Patch    => f.write_str("PWAD"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WadHeader {
    pub magic:            [u8; 4],
    pub lump_count:       u32,
    pub directory_offset: u32,
}

impl WadHeader {
    pub fn new(kind: WadKind, lump_count: u32, directory_offset: u32) -> Self {
        let magic = match kind {
            WadKind::Internal => *IWAD_MAGIC,
            WadKind::Patch    => *PWAD_MAGIC,
        };
        Self { magic, lump_count, directory_offset }
    }

    /// Decode and validate a raw header. The magic is checked before any
    /// other field is trusted.
    pub fn decode(buf: &[u8; HEADER_SIZE]) -> Result<Self, FormatError> {
        let mut magic = [0u8; 4];
        magic.copy_from_slice(&buf[..4]);
        if &magic != IWAD_MAGIC && &magic != PWAD_MAGIC {
            return Err(FormatError::InvalidMagic(magic));
        }
        Ok(Self {
            magic,
            lump_count:       LittleEndian::read_u32(&buf[LUMP_COUNT_OFFSET..]),
            directory_offset: LittleEndian::read_u32(&buf[DIRECTORY_OFFSET_OFFSET..]),
        })
    }

    pub fn encode(&self) -> [u8; HEADER_SIZE] {
        let mut buf = [0u8; HEADER_SIZE];
        buf[..4].copy_from_slice(&self.magic);
        LittleEndian::write_u32(&mut buf[LUMP_COUNT_OFFSET..], self.lump_count);
        LittleEndian::write_u32(&mut buf[DIRECTORY_OFFSET_OFFSET..], self.directory_offset);
        buf
    }

    pub fn read<R: Read>(mut reader: R) -> Result<Self, WadError> {
        let mut buf = [0u8; HEADER_SIZE];
        reader
            .read_exact(&mut buf)
            .map_err(|e| eof_as(e, FormatError::TruncatedHeader))?;
        Ok(Self::decode(&buf)?)
    }

    /// Only the first magic byte is consulted; `decode` has already
    /// rejected anything that is not exactly `IWAD` or `PWAD`.
    pub fn kind(&self) -> WadKind {
        if self.magic[0] == b'I' { WadKind::Internal } else { WadKind::Patch }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_little_endian_fields() {
        let mut raw = [0u8; HEADER_SIZE];
        raw[..4].copy_from_slice(b"PWAD");
        raw[4..8].copy_from_slice(&3u32.to_le_bytes());
        raw[8..12].copy_from_slice(&0x0102_0304u32.to_le_bytes());

        let header = WadHeader::decode(&raw).unwrap();
        assert_eq!(header.lump_count, 3);
        assert_eq!(header.directory_offset, 0x0102_0304);
        assert_eq!(header.kind(), WadKind::Patch);
        assert_eq!(header.encode(), raw);
    }

    #[test]
    fn rejects_lowercase_and_foreign_magic() {
        for magic in [b"iwad", b"PK\x03\x04", b"IWA\0"] {
            let mut raw = [0u8; HEADER_SIZE];
            raw[..4].copy_from_slice(magic);
            assert!(matches!(
                WadHeader::decode(&raw),
                Err(FormatError::InvalidMagic(m)) if &m == magic
            ));
        }
    }

    #[test]
    fn short_read_is_a_format_error() {
        let err = WadHeader::read(&b"IWAD\x01\0"[..]).unwrap_err();
        assert!(matches!(err, WadError::Format(FormatError::TruncatedHeader)));
    }

    #[test]
    fn kind_follows_first_magic_byte() {
        assert_eq!(WadHeader::new(WadKind::Internal, 0, 12).kind(), WadKind::Internal);
        assert_eq!(WadHeader::new(WadKind::Internal, 0, 12).kind().to_string(), "IWAD");
        assert_eq!(WadHeader::new(WadKind::Patch, 0, 12).kind().to_string(), "PWAD");
    }
}
