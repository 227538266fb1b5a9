mod common;

use tempfile::tempdir;
use unicoderange::font::sfnt::{self, CHECKSUM_MAGIC, TableDirectory, Tag};
use unicoderange::font::fixture::FontFixture;
use unicoderange::font::{FontStore, SfntFont};
use unicoderange::io::{self, ReconcileOptions, reconcile_file};
use unicoderange::reconcile::ReconcileResult;

#[test]
fn latin_and_cjk_font_gains_bit_59() {
    let dir = tempdir().unwrap();
    let groups = [(0x41, 0x41), (0x4E2D, 0x4E2D)];
    let path = common::write_font(dir.path(), "a.ttf", &groups, [1, 0, 0, 0]);

    let report = reconcile_file(&path, &ReconcileOptions::default()).unwrap();
    let ReconcileResult::Changed { new_words, diff } = &report.result else {
        panic!("expected Changed, got {:?}", report.result);
    };
    assert_eq!(*new_words, [1, 0x0800_0000, 0, 0]);
    assert_eq!(diff.changed().iter_bits().collect::<Vec<_>>(), vec![59]);
    assert_eq!(report.codepoints, 2);
    assert!(report.written);

    let font = SfntFont::open(&path).unwrap();
    assert_eq!(font.stored_range_words().unwrap(), [1, 0x0800_0000, 0, 0]);
}

#[test]
fn undecodable_leading_subtable_keeps_correct_bits() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mixed.ttf");
    let bytes = FontFixture::new()
        .encoding(ttf_parser::PlatformId::Macintosh, 0)
        .subtable_format(99)
        .extra_subtable(ttf_parser::PlatformId::Windows, 10, &[(0x41, 0x41), (0x4E2D, 0x4E2D)])
        .unicode_ranges([1, 0x0800_0000, 0, 0])
        .build();
    std::fs::write(&path, &bytes).unwrap();

    let report = reconcile_file(&path, &ReconcileOptions::default()).unwrap();
    assert_eq!(report.result, ReconcileResult::Unchanged);
    assert_eq!(report.codepoints, 2);
    assert!(!report.written);
    assert_eq!(std::fs::read(&path).unwrap(), bytes);
}

#[test]
fn second_run_is_unchanged_and_leaves_bytes_alone() {
    let dir = tempdir().unwrap();
    let path = common::write_font(
        dir.path(),
        "b.ttf",
        &[(0x20, 0x7E), (0x0391, 0x03A9), (0x10300, 0x1031E)],
        [0xFFFF_FFFF, 0, 0, 0xFFFF_FFFF],
    );

    let first = reconcile_file(&path, &ReconcileOptions::default()).unwrap();
    assert!(first.is_changed());
    let after_first = std::fs::read(&path).unwrap();

    let second = reconcile_file(&path, &ReconcileOptions::default()).unwrap();
    assert_eq!(second.result, ReconcileResult::Unchanged);
    assert!(!second.written);
    assert_eq!(std::fs::read(&path).unwrap(), after_first);
}

#[test]
fn reserved_bits_are_cleared_on_write() {
    let dir = tempdir().unwrap();
    let path = common::write_font(dir.path(), "c.ttf", &[(0x41, 0x5A)], [1, 0, 0, 0xF800_0000]);
    reconcile_file(&path, &ReconcileOptions::default()).unwrap();
    let font = SfntFont::open(&path).unwrap();
    assert_eq!(font.stored_range_words().unwrap(), [1, 0, 0, 0]);
}

#[test]
fn written_font_has_valid_checksums() {
    let dir = tempdir().unwrap();
    let path = common::write_font(dir.path(), "d.ttf", &[(0x0600, 0x06FF)], [0; 4]);
    let original = std::fs::read(&path).unwrap();
    reconcile_file(&path, &ReconcileOptions::default()).unwrap();
    let data = std::fs::read(&path).unwrap();

    assert_eq!(data.len(), original.len());
    assert_eq!(sfnt::calc_checksum(&data), CHECKSUM_MAGIC);
    let dir = TableDirectory::parse(&data).unwrap();
    for record in &dir.records {
        let stored = u32::from_be_bytes(
            data[record.record_offset + 4..record.record_offset + 8]
                .try_into()
                .unwrap(),
        );
        assert_eq!(stored, sfnt::table_checksum(&data, record), "{}", record.tag);
    }

    // Only OS/2 contents, its checksum, and head.checkSumAdjustment moved.
    let os2 = dir.find(Tag::OS2).unwrap();
    let head = dir.find(Tag::HEAD).unwrap();
    let allowed = |i: usize| {
        (os2.offset as usize + 42..os2.offset as usize + 58).contains(&i)
            || (os2.record_offset + 4..os2.record_offset + 8).contains(&i)
            || (head.offset as usize + 8..head.offset as usize + 12).contains(&i)
    };
    for (i, (a, b)) in original.iter().zip(&data).enumerate() {
        if !allowed(i) {
            assert_eq!(a, b, "byte {i} changed");
        }
    }
}

#[test]
fn expected_ranges_matches_reconcile() {
    let dir = tempdir().unwrap();
    let groups = [(0x3040, 0x30FF), (0xAC00, 0xAC10)];
    let path = common::write_font(dir.path(), "e.ttf", &groups, [0; 4]);
    let expected = io::expected_ranges(&path).unwrap();
    let report = reconcile_file(&path, &ReconcileOptions { dry_run: true }).unwrap();
    assert_eq!(report.expected, expected);
    // Hiragana 49, Katakana 50, Hangul Syllables 56.
    assert_eq!(expected, [0, (1 << 17) | (1 << 18) | (1 << 24), 0, 0]);
}
