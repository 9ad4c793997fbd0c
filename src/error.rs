use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The archive bytes do not describe a readable WAD.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Error reading header: file is shorter than the 12-byte WAD header")]
    TruncatedHeader,
    #[error("Not a valid WAD file (magic {0:02x?}, expected IWAD or PWAD)")]
    InvalidMagic([u8; 4]),
    #[error("Directory offset {offset} lies outside the {stream_len}-byte file")]
    DirectoryOutOfBounds { offset: u32, stream_len: u64 },
    #[error("Directory truncated: header declares {expected} lumps, only {available} present")]
    TruncatedDirectory { expected: u32, available: u64 },
    #[error("Lump count would exceed u32::MAX")]
    LumpCountOverflow,
}

#[derive(Error, Debug)]
pub enum WadError {
    #[error("Error opening file '{}': {source}", path.display())]
    Open {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("Out of memory: {0}")]
    Allocation(#[from] TryReserveError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Turn an `UnexpectedEof` from a fixed-size read into the given format error;
/// every other I/O failure stays an I/O error.
pub(crate) fn eof_as(err: io::Error, format: FormatError) -> WadError {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        WadError::Format(format)
    } else {
        WadError::Io(err)
    }
}
