pub mod error;
pub mod header;
pub mod lump;
pub mod directory;
pub mod music;
pub mod tables;
pub mod alias;
pub mod writer;
pub mod prompt;
pub mod patch;

pub use error::{FormatError, WadError};
pub use header::{WadHeader, WadKind};
pub use lump::{LumpEntry, LumpName};
pub use directory::{Directory, Wad};
pub use music::{classify, MusicSelection, MAX_MUSIC_LUMPS};
pub use tables::{Convention, NameTable, NameTables, StaticNameTable};
pub use alias::{build_aliases, AliasSet};
pub use writer::append_entries;
pub use patch::{MusicPatcher, PatchOptions, PatchOutcome};
