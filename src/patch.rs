//! High-level [`MusicPatcher`] API: read, plan, confirm, append.
//!
//! ```no_run
//! use wadalias::patch::{MusicPatcher, PatchOptions, PatchOutcome};
//! use wadalias::prompt::AutoConfirm;
//! use wadalias::tables::NameTables;
//!
//! let patcher = MusicPatcher::new(NameTables::builtin(), PatchOptions::default());
//! match patcher.patch_file("music.wad", &mut AutoConfirm(true))? {
//!     PatchOutcome::Written { new_count, .. } => println!("{new_count} lumps"),
//!     _ => {}
//! }
//! # Ok::<(), wadalias::WadError>(())
//! ```

use std::fs::OpenOptions;
use std::io::{Read, Seek, Write};
use std::path::Path;

use crate::alias::{build_aliases, AliasSet};
use crate::directory::Wad;
use crate::error::WadError;
use crate::music::{classify, MusicSelection, MAX_MUSIC_LUMPS, MUSIC_PREFIX};
use crate::prompt::Confirm;
use crate::tables::NameTables;
use crate::writer::append_entries;

// ── PatchOptions ──────────────────────────────────────────────────────────────

/// Configuration for [`MusicPatcher`].
#[derive(Debug, Clone)]
pub struct PatchOptions {
    /// First two bytes of every music lump name.
    pub music_prefix:    [u8; 2],
    /// Clamped to [`MAX_MUSIC_LUMPS`].
    pub max_music_lumps: usize,
    /// Do not emit an alias whose target name is already in the directory.
    pub skip_existing:   bool,
}

impl Default for PatchOptions {
    fn default() -> Self {
        Self {
            music_prefix:    MUSIC_PREFIX,
            max_music_lumps: MAX_MUSIC_LUMPS,
            skip_existing:   false,
        }
    }
}

// ── PatchPlan / PatchOutcome ─────────────────────────────────────────────────

/// Everything decided during the read phase. Nothing has been written yet.
#[derive(Debug, Clone)]
pub struct PatchPlan {
    pub wad:       Wad,
    pub selection: MusicSelection,
    pub aliases:   AliasSet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// No music lump had a name in either table.
    NothingToDo,
    /// The user declined; the file is untouched.
    Cancelled,
    Written { original_count: u32, new_count: u32 },
}

// ── MusicPatcher ──────────────────────────────────────────────────────────────

pub struct MusicPatcher<'t> {
    tables:  NameTables<'t>,
    options: PatchOptions,
}

impl<'t> MusicPatcher<'t> {
    pub fn new(tables: NameTables<'t>, options: PatchOptions) -> Self {
        Self { tables, options }
    }

    /// Read the archive and work out which aliases to add.
    pub fn plan<R: Read + Seek>(&self, reader: R) -> Result<PatchPlan, WadError> {
        let wad = Wad::read(reader)?;
        let selection = classify(
            &wad.directory,
            self.options.music_prefix,
            self.options.max_music_lumps,
        );
        let aliases = build_aliases(
            &selection,
            &wad.directory,
            &self.tables,
            self.options.skip_existing,
        )?;
        Ok(PatchPlan { wad, selection, aliases })
    }

    /// Append the plan's aliases and patch the lump count. Returns the new count.
    pub fn apply<W: Write + Seek>(&self, plan: &PatchPlan, writer: W) -> Result<u32, WadError> {
        append_entries(writer, &plan.wad.header, plan.aliases.entries())
    }

    /// Full run against a file on disk. `confirm` is asked once, after the
    /// read phase and before any byte is written.
    pub fn patch_file<P, C>(&self, path: P, confirm: &mut C) -> Result<PatchOutcome, WadError>
    where
        P: AsRef<Path>,
        C: Confirm + ?Sized,
    {
        let path = path.as_ref();
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|source| WadError::Open { path: path.to_owned(), source })?;
        tracing::info!("WAD File '{}' opened successfully.", path.display());

        let plan = self.plan(&mut file)?;
        if plan.aliases.is_empty() {
            tracing::info!("No music lumps to alias; leaving the file unchanged");
            return Ok(PatchOutcome::NothingToDo);
        }

        for alias in &plan.aliases.aliases {
            tracing::info!("  {:<8} -> {:<8} ({})", alias.source, alias.entry.name, alias.convention);
        }
        let question = format!(
            "Append {} alias entries to '{}'?",
            plan.aliases.len(),
            path.display()
        );
        if !confirm.confirm(&question)? {
            tracing::info!("Cancelled; no changes written");
            return Ok(PatchOutcome::Cancelled);
        }

        let original_count = plan.wad.header.lump_count;
        let new_count = self.apply(&plan, &mut file)?;
        tracing::info!("Lump count {} -> {}", original_count, new_count);
        Ok(PatchOutcome::Written { original_count, new_count })
    }
}
