//! Archive writer: append directory records, then patch the lump count.
//!
//! The two writes are ordered data-before-metadata. If the append fails the
//! header is never touched; if the header rewrite fails the file has already
//! grown. Neither case is rolled back.

use byteorder::{LittleEndian, WriteBytesExt};
use std::io::{Seek, SeekFrom, Write};

use crate::error::{FormatError, WadError};
use crate::header::{WadHeader, LUMP_COUNT_OFFSET};
use crate::lump::{LumpEntry, LUMP_ENTRY_SIZE};

/// Write `entries` contiguously at end-of-stream, then overwrite the header's
/// lump count with `header.lump_count + entries.len()`. The directory offset
/// and every existing byte are left as they were.
///
/// Returns the new lump count.
pub fn append_entries<'a, W, I>(
    mut writer: W,
    header:     &WadHeader,
    entries:    I,
) -> Result<u32, WadError>
where
    W: Write + Seek,
    I: IntoIterator<Item = &'a LumpEntry>,
    I::IntoIter: ExactSizeIterator,
{
    let entries = entries.into_iter();
    let added = u32::try_from(entries.len()).map_err(|_| FormatError::LumpCountOverflow)?;
    let new_count = header
        .lump_count
        .checked_add(added)
        .ok_or(FormatError::LumpCountOverflow)?;

    let mut buf = Vec::new();
    buf.try_reserve_exact(entries.len() * LUMP_ENTRY_SIZE)?;
    for entry in entries {
        buf.extend_from_slice(&entry.encode());
    }

    let end = writer.seek(SeekFrom::End(0))?;
    writer.write_all(&buf)?;
    writer.flush()?;
    tracing::debug!(at = end, bytes = buf.len(), "appended directory records");

    writer.seek(SeekFrom::Start(LUMP_COUNT_OFFSET as u64))?;
    writer.write_u32::<LittleEndian>(new_count)?;
    writer.flush()?;

    Ok(new_count)
}
