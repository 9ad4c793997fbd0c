//! Music classifier: pick out the lumps named with the music prefix.

use crate::directory::Directory;

/// Ultimate Doom has 36 map music slots (E1M1..E4M9); nothing downstream is
/// sized for more.
pub const MAX_MUSIC_LUMPS: usize = 36;

/// Conventional music lump prefix (`D_RUNNIN`, `D_E1M1`, ...).
pub const MUSIC_PREFIX: [u8; 2] = *b"D_";

/// Directory indices of music lumps, in directory order, never longer than
/// its capacity. Matches past the capacity are counted in `dropped`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MusicSelection {
    indices:  Vec<usize>,
    capacity: usize,
    dropped:  usize,
}

impl MusicSelection {
    /// `capacity` is clamped to [`MAX_MUSIC_LUMPS`].
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.min(MAX_MUSIC_LUMPS);
        Self { indices: Vec::with_capacity(capacity), capacity, dropped: 0 }
    }

    /// Returns `false` and counts the index as dropped once full.
    pub fn push(&mut self, index: usize) -> bool {
        if self.indices.len() >= self.capacity {
            self.dropped += 1;
            return false;
        }
        self.indices.push(index);
        true
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

/// Select every entry whose name starts with `prefix`, up to `max` of them.
pub fn classify(directory: &Directory, prefix: [u8; 2], max: usize) -> MusicSelection {
    let mut selection = MusicSelection::with_capacity(max);
    for (index, entry) in directory.iter().enumerate() {
        if entry.name.starts_with(&prefix) {
            selection.push(index);
        }
    }
    if selection.dropped() > 0 {
        tracing::warn!(
            "Found more than {} music lumps; ignoring the last {}",
            selection.capacity(),
            selection.dropped()
        );
    }
    tracing::debug!(count = selection.len(), "music lumps selected");
    selection
}
