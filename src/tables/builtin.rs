//! Shipped name tables.
//!
//! Map music slots are paired by position: E1M1 is MAP01, E1M2 is MAP02 and
//! so on up to E4M5/MAP32. E4M6..E4M9 have no Doom II counterpart.

use super::{Convention, StaticNameTable};
use crate::lump::LumpName;

/// (Ultimate Doom name, Doom II name)
const PAIRS: [(&str, &str); 34] = [
    ("D_E1M1",  "D_RUNNIN"), ("D_E1M2",  "D_STALKS"), ("D_E1M3",  "D_COUNTD"),
    ("D_E1M4",  "D_BETWEE"), ("D_E1M5",  "D_DOOM"),   ("D_E1M6",  "D_THE_DA"),
    ("D_E1M7",  "D_SHAWN"),  ("D_E1M8",  "D_DDTBLU"), ("D_E1M9",  "D_IN_CIT"),
    ("D_E2M1",  "D_DEAD"),   ("D_E2M2",  "D_STLKS2"), ("D_E2M3",  "D_THEDA2"),
    ("D_E2M4",  "D_DOOM2"),  ("D_E2M5",  "D_DDTBL2"), ("D_E2M6",  "D_RUNNI2"),
    ("D_E2M7",  "D_DEAD2"),  ("D_E2M8",  "D_STLKS3"), ("D_E2M9",  "D_ROMERO"),
    ("D_E3M1",  "D_SHAWN2"), ("D_E3M2",  "D_MESSAG"), ("D_E3M3",  "D_COUNT2"),
    ("D_E3M4",  "D_DDTBL3"), ("D_E3M5",  "D_AMPIE"),  ("D_E3M6",  "D_THEDA3"),
    ("D_E3M7",  "D_ADRIAN"), ("D_E3M8",  "D_MESSG2"), ("D_E3M9",  "D_ROMER2"),
    ("D_E4M1",  "D_TENSE"),  ("D_E4M2",  "D_SHAWN3"), ("D_E4M3",  "D_OPENIN"),
    ("D_E4M4",  "D_EVIL"),   ("D_E4M5",  "D_ULTIMA"),
    ("D_INTRO", "D_DM2TTL"), ("D_INTER", "D_DM2INT"),
];

const fn build<const N: usize>(
    pairs: &[(&str, &str); N],
    doom2_to_ultimate: bool,
) -> [(LumpName, LumpName); N] {
    let mut out = [(LumpName([0; 8]), LumpName([0; 8])); N];
    let mut i = 0;
    while i < N {
        let (ultimate, doom2) = pairs[i];
        out[i] = if doom2_to_ultimate {
            (LumpName::padded(doom2), LumpName::padded(ultimate))
        } else {
            (LumpName::padded(ultimate), LumpName::padded(doom2))
        };
        i += 1;
    }
    out
}

static ULTIMATE_DOOM_NAMES: [(LumpName, LumpName); 34] = build(&PAIRS, true);
static DOOM2_NAMES:         [(LumpName, LumpName); 34] = build(&PAIRS, false);

/// Doom II music name → Ultimate Doom music name.
pub static ULTIMATE_DOOM: StaticNameTable<'static> =
    StaticNameTable::new(Convention::UltimateDoom, &ULTIMATE_DOOM_NAMES);

/// Ultimate Doom music name → Doom II music name.
pub static DOOM2: StaticNameTable<'static> =
    StaticNameTable::new(Convention::Doom2, &DOOM2_NAMES);
