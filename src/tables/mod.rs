//! Name tables: read-only source name → target name mappings, one per
//! target game convention.
//!
//! The alias builder only sees the [`NameTable`] trait, so tests and
//! embedders can supply their own tables instead of the built-in ones.

pub mod builtin;

use std::fmt;

use crate::lump::LumpName;

/// Which game's naming the table produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Convention {
    UltimateDoom,
    Doom2,
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Convention::UltimateDoom => f.write_str("Ultimate Doom"),
            Convention::Doom2        => f.write_str("Doom II"),
        }
    }
}

pub trait NameTable {
    fn convention(&self) -> Convention;

    /// Exact 8-byte lookup of `source`.
    fn lookup(&self, source: &LumpName) -> Option<LumpName>;
}

/// A table backed by a slice of `(source, target)` pairs, searched linearly.
#[derive(Debug, Clone, Copy)]
pub struct StaticNameTable<'a> {
    convention: Convention,
    entries:    &'a [(LumpName, LumpName)],
}

impl<'a> StaticNameTable<'a> {
    pub const fn new(convention: Convention, entries: &'a [(LumpName, LumpName)]) -> Self {
        Self { convention, entries }
    }

    pub fn entries(&self) -> &'a [(LumpName, LumpName)] {
        self.entries
    }
}

impl NameTable for StaticNameTable<'_> {
    fn convention(&self) -> Convention {
        self.convention
    }

    fn lookup(&self, source: &LumpName) -> Option<LumpName> {
        self.entries
            .iter()
            .find(|(key, _)| key == source)
            .map(|&(_, target)| target)
    }
}

/// The two tables the alias builder consults, in the order it consults them.
#[derive(Clone, Copy)]
pub struct NameTables<'a> {
    pub ultimate_doom: &'a dyn NameTable,
    pub doom2:         &'a dyn NameTable,
}

impl<'a> NameTables<'a> {
    /// Ultimate Doom first, then Doom II. This order is the on-disk order of
    /// the appended entries.
    pub fn in_order(&self) -> [&'a dyn NameTable; 2] {
        [self.ultimate_doom, self.doom2]
    }
}

impl NameTables<'static> {
    pub fn builtin() -> Self {
        Self { ultimate_doom: &builtin::ULTIMATE_DOOM, doom2: &builtin::DOOM2 }
    }
}

impl Default for NameTables<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_are_inverse() {
        let tables = NameTables::builtin();
        for &(ultimate, doom2) in builtin::DOOM2.entries() {
            assert_eq!(tables.doom2.lookup(&ultimate), Some(doom2));
            assert_eq!(tables.ultimate_doom.lookup(&doom2), Some(ultimate));
        }
    }

    #[test]
    fn builtin_lookups() {
        let tables = NameTables::builtin();
        let e1m1 = LumpName::padded("D_E1M1");
        assert_eq!(tables.doom2.lookup(&e1m1), Some(LumpName::padded("D_RUNNIN")));
        assert_eq!(tables.ultimate_doom.lookup(&e1m1), None);
        assert_eq!(
            tables.ultimate_doom.lookup(&LumpName::padded("D_ULTIMA")),
            Some(LumpName::padded("D_E4M5"))
        );
        assert_eq!(tables.doom2.lookup(&LumpName::padded("D_E4M9")), None);
    }

    #[test]
    fn lookup_is_exact() {
        let pairs = [(LumpName::padded("D_E1M1"), LumpName::padded("D_RUNNIN"))];
        let table = StaticNameTable::new(Convention::Doom2, &pairs);
        assert!(table.lookup(&LumpName(*b"D_E1M1  ")).is_none());
        assert!(table.lookup(&LumpName(*b"d_e1m1\0\0")).is_none());
    }

    #[test]
    fn order_is_ultimate_then_doom2() {
        let order = NameTables::builtin().in_order();
        assert_eq!(order[0].convention(), Convention::UltimateDoom);
        assert_eq!(order[1].convention(), Convention::Doom2);
        assert_eq!(Convention::Doom2.to_string(), "Doom II");
    }
}
