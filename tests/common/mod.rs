// Synthetic sfnt fonts for integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use unicoderange::font::fixture::FontFixture;

/// Minimal TrueType font: `OS/2` v4 storing `stored`, and one (3, 10)
/// format 12 cmap subtable mapping every code point in `groups`.
pub fn build_font(groups: &[(u32, u32)], stored: [u32; 4]) -> Vec<u8> {
    groups
        .iter()
        .fold(FontFixture::new(), |font, &(low, high)| font.map_range(low, high))
        .unicode_ranges(stored)
        .build()
}

pub fn write_font(dir: &Path, name: &str, groups: &[(u32, u32)], stored: [u32; 4]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, build_font(groups, stored)).unwrap();
    path
}
