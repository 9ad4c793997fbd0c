use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wadalias::alias::build_aliases;
use wadalias::lump::{LumpEntry, LumpName};
use wadalias::music::{classify, MAX_MUSIC_LUMPS, MUSIC_PREFIX};
use wadalias::tables::{builtin, NameTables};
use wadalias::Directory;

fn full_music_directory() -> Directory {
    // Every table name, padded out with non-music lumps.
    let mut entries: Vec<LumpEntry> = builtin::DOOM2
        .entries()
        .iter()
        .flat_map(|&(a, b)| [a, b])
        .enumerate()
        .map(|(i, name)| LumpEntry { data_offset: i as u32 * 64, size: 64, name })
        .collect();
    for i in 0..2000u32 {
        entries.push(LumpEntry {
            data_offset: i,
            size:        0,
            name:        LumpName::padded(&format!("LUMP{i}")),
        });
    }
    Directory { entries }
}

fn bench_classify_and_alias(c: &mut Criterion) {
    let dir = full_music_directory();
    let tables = NameTables::builtin();

    c.bench_function("classify_2k_lumps", |b| {
        b.iter(|| classify(black_box(&dir), MUSIC_PREFIX, MAX_MUSIC_LUMPS))
    });

    let sel = classify(&dir, MUSIC_PREFIX, MAX_MUSIC_LUMPS);
    c.bench_function("build_aliases_full_selection", |b| {
        b.iter(|| build_aliases(black_box(&sel), &dir, &tables, false).unwrap())
    });
}

criterion_group!(benches, bench_classify_and_alias);
criterion_main!(benches);
