use proptest::prelude::*;
use std::io::Cursor;
use wadalias::header::{WadHeader, WadKind, HEADER_SIZE};
use wadalias::lump::{LumpEntry, LumpName};
use wadalias::music::{classify, MAX_MUSIC_LUMPS, MUSIC_PREFIX};
use wadalias::patch::{MusicPatcher, PatchOptions};
use wadalias::tables::{builtin, NameTables};
use wadalias::{Directory, Wad};

fn lump_name() -> impl Strategy<Value = LumpName> {
    let table_names: Vec<LumpName> = builtin::DOOM2
        .entries()
        .iter()
        .flat_map(|&(a, b)| [a, b])
        .collect();
    prop_oneof![
        prop::sample::select(table_names),
        "[A-Z_][A-Z0-9_]{0,7}".prop_map(|s| LumpName::padded(&s)),
        any::<[u8; 8]>().prop_map(LumpName),
    ]
}

fn lump_entries(max: usize) -> impl Strategy<Value = Vec<LumpEntry>> {
    prop::collection::vec(
        (any::<u32>(), any::<u32>(), lump_name())
            .prop_map(|(data_offset, size, name)| LumpEntry { data_offset, size, name }),
        0..max,
    )
}

fn encode(entries: &[LumpEntry]) -> Vec<u8> {
    let header = WadHeader::new(WadKind::Patch, entries.len() as u32, HEADER_SIZE as u32);
    let mut out = header.encode().to_vec();
    for e in entries {
        out.extend_from_slice(&e.encode());
    }
    out
}

proptest! {
    #[test]
    fn classifier_respects_cap(entries in lump_entries(120)) {
        let dir = Directory { entries };
        let sel = classify(&dir, MUSIC_PREFIX, MAX_MUSIC_LUMPS);
        let matching = dir.iter().filter(|e| e.name.starts_with(b"D_")).count();

        prop_assert!(sel.len() <= MAX_MUSIC_LUMPS);
        prop_assert_eq!(sel.len() + sel.dropped(), matching);
        prop_assert!(sel.indices().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn append_preserves_prefix_and_counts(entries in lump_entries(64)) {
        let bytes = encode(&entries);
        let patcher = MusicPatcher::new(NameTables::builtin(), PatchOptions::default());
        let plan = patcher.plan(Cursor::new(bytes.clone())).unwrap();

        let mut cursor = Cursor::new(bytes.clone());
        let new_count = patcher.apply(&plan, &mut cursor).unwrap();
        let out = cursor.into_inner();

        prop_assert_eq!(new_count as usize, entries.len() + plan.aliases.len());
        prop_assert_eq!(&out[8..bytes.len()], &bytes[8..]);

        let wad = Wad::read(Cursor::new(out)).unwrap();
        prop_assert_eq!(&wad.directory.entries[..entries.len()], &entries[..]);
        for (alias, written) in plan.aliases.aliases.iter().zip(&wad.directory.entries[entries.len()..]) {
            let source = entries[alias.source_index];
            prop_assert_eq!(written.data_offset, source.data_offset);
            prop_assert_eq!(written.size, source.size);
        }
    }
}
