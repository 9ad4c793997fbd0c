//! Archive reader: header plus the lump directory it points at.

use std::io::{Read, Seek, SeekFrom};

use crate::error::{eof_as, FormatError, WadError};
use crate::header::{WadHeader, WadKind};
use crate::lump::{LumpEntry, LumpName, LUMP_ENTRY_SIZE};

/// The ordered lump directory. Existing entries are never reordered or
/// removed; growth happens only through the writer's append.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    pub entries: Vec<LumpEntry>,
}

impl Directory {
    /// Seek to `header.directory_offset` and read exactly `header.lump_count`
    /// records.
    pub fn read<R: Read + Seek>(mut reader: R, header: &WadHeader) -> Result<Self, WadError> {
        let stream_len = reader.seek(SeekFrom::End(0))?;
        let offset = u64::from(header.directory_offset);
        if offset > stream_len {
            return Err(FormatError::DirectoryOutOfBounds {
                offset: header.directory_offset,
                stream_len,
            }.into());
        }

        // Bound the count by what the file can hold before allocating for it.
        let available = (stream_len - offset) / LUMP_ENTRY_SIZE as u64;
        if available < u64::from(header.lump_count) {
            return Err(FormatError::TruncatedDirectory {
                expected: header.lump_count,
                available,
            }.into());
        }

        let count = header.lump_count as usize;
        let mut raw = Vec::new();
        raw.try_reserve_exact(count * LUMP_ENTRY_SIZE)?;
        raw.resize(count * LUMP_ENTRY_SIZE, 0);

        reader.seek(SeekFrom::Start(offset))?;
        reader.read_exact(&mut raw).map_err(|e| eof_as(e, FormatError::TruncatedDirectory {
            expected: header.lump_count,
            available,
        }))?;

        let mut entries = Vec::new();
        entries.try_reserve_exact(count)?;
        for chunk in raw.chunks_exact(LUMP_ENTRY_SIZE) {
            let mut record = [0u8; LUMP_ENTRY_SIZE];
            record.copy_from_slice(chunk);
            entries.push(LumpEntry::decode(&record));
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LumpEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LumpEntry> {
        self.entries.iter()
    }

    /// Index of the first entry named exactly `name`.
    pub fn position(&self, name: &LumpName) -> Option<usize> {
        self.entries.iter().position(|e| &e.name == name)
    }

    pub fn contains(&self, name: &LumpName) -> bool {
        self.position(name).is_some()
    }
}

/// A parsed archive: header and directory, read once per run.
#[derive(Debug, Clone)]
pub struct Wad {
    pub header:    WadHeader,
    pub directory: Directory,
}

impl Wad {
    /// Read the header from the start of the stream, then the directory.
    /// A bad magic fails before the directory is touched.
    pub fn read<R: Read + Seek>(mut reader: R) -> Result<Self, WadError> {
        reader.seek(SeekFrom::Start(0))?;
        let header = WadHeader::read(&mut reader)?;
        tracing::info!("WAD Type: {}", header.kind());
        let directory = Directory::read(&mut reader, &header)?;
        tracing::debug!(
            lumps  = directory.len(),
            offset = header.directory_offset,
            "directory loaded"
        );
        Ok(Self { header, directory })
    }

    pub fn kind(&self) -> WadKind {
        self.header.kind()
    }
}
