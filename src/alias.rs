//! Alias builder.
//!
//! For every convention (Ultimate Doom, then Doom II) and every selected
//! music lump (directory order), look the lump's name up in that
//! convention's table. A hit yields a new directory entry with the target
//! name and the source entry's data offset and size; a miss yields a
//! warning and nothing else.

use crate::directory::Directory;
use crate::error::WadError;
use crate::lump::{LumpEntry, LumpName};
use crate::music::MusicSelection;
use crate::tables::{Convention, NameTables};

/// A synthesized entry and where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alias {
    pub convention:   Convention,
    pub source_index: usize,
    pub source:       LumpName,
    pub entry:        LumpEntry,
}

/// A selected lump that the convention's table has no name for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasMiss {
    pub convention: Convention,
    pub source:     LumpName,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasSet {
    /// All Ultimate Doom aliases in source order, then all Doom II aliases.
    pub aliases: Vec<Alias>,
    pub misses:  Vec<AliasMiss>,
    /// Rows skipped because the index was outside the directory.
    pub out_of_bounds: usize,
    /// Hits not emitted because the target name already existed.
    pub existing: usize,
}

impl AliasSet {
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// The directory records to append, in on-disk order.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = &LumpEntry> + '_ {
        self.aliases.iter().map(|a| &a.entry)
    }

    fn emitted(&self, name: &LumpName) -> bool {
        self.aliases.iter().any(|a| &a.entry.name == name)
    }
}

/// Build the alias set for `selection`.
///
/// With `skip_existing` unset every table hit is emitted, even when the
/// target name is already present; that case is only logged.
pub fn build_aliases(
    selection:     &MusicSelection,
    directory:     &Directory,
    tables:        &NameTables<'_>,
    skip_existing: bool,
) -> Result<AliasSet, WadError> {
    let mut set = AliasSet::default();
    set.aliases.try_reserve(selection.len() * 2)?;

    for table in tables.in_order() {
        let convention = table.convention();
        for &index in selection.indices() {
            let Some(source) = directory.get(index) else {
                tracing::warn!(
                    "Music lump index {} is outside the {}-entry directory; skipping",
                    index,
                    directory.len()
                );
                set.out_of_bounds += 1;
                continue;
            };

            let Some(target) = table.lookup(&source.name) else {
                tracing::warn!("No {} name for music lump {}", convention, source.name);
                set.misses.push(AliasMiss { convention, source: source.name });
                continue;
            };

            if directory.contains(&target) || set.emitted(&target) {
                if skip_existing {
                    tracing::info!("{} already present; not aliasing {}", target, source.name);
                    set.existing += 1;
                    continue;
                }
                tracing::warn!("{} already present; adding a second entry for {}", target, source.name);
            }

            set.aliases.push(Alias {
                convention,
                source_index: index,
                source:       source.name,
                entry:        source.renamed(target),
            });
        }
    }
    Ok(set)
}
