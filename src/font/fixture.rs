// Minimal in-memory sfnt fonts for tests, benches and fuzzing.

use std::collections::BTreeMap;

use ttf_parser::PlatformId;

use super::sfnt::{self, CHECKSUM_MAGIC, HEAD_CHECKSUM_ADJUSTMENT, calc_checksum};

fn platform_code(platform: PlatformId) -> u16 {
    match platform {
        PlatformId::Unicode => 0,
        PlatformId::Macintosh => 1,
        PlatformId::Iso => 2,
        PlatformId::Windows => 3,
        PlatformId::Custom => 4,
    }
}

struct CmapSubtable {
    format: u16,
    platform: u16,
    encoding: u16,
    groups: Vec<(u32, u32)>,
}

/// Builder for a small TrueType font: `head`, `hhea`, `maxp`, `OS/2` and a
/// cmap of format 12 subtables.
pub struct FontFixture {
    subtables: Vec<CmapSubtable>,
    ranges: [u32; 4],
    os2_len: Option<usize>,
    cmap: bool,
}

impl Default for FontFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl FontFixture {
    /// Empty (3, 10) cmap, `OS/2` version 4 with all range bits clear.
    pub fn new() -> Self {
        Self {
            subtables: vec![CmapSubtable {
                format: 12,
                platform: 3,
                encoding: 10,
                groups: Vec::new(),
            }],
            ranges: [0; 4],
            os2_len: Some(96),
            cmap: true,
        }
    }

    /// Printable ASCII only.
    pub fn latin() -> Self {
        Self::new().map_range(0x20, 0x7E)
    }

    pub fn map_range(mut self, low: u32, high: u32) -> Self {
        self.subtables[0].groups.push((low, high));
        self
    }

    pub fn encoding(mut self, platform: PlatformId, encoding: u16) -> Self {
        self.subtables[0].platform = platform_code(platform);
        self.subtables[0].encoding = encoding;
        self
    }

    pub fn extra_subtable(
        mut self,
        platform: PlatformId,
        encoding: u16,
        groups: &[(u32, u32)],
    ) -> Self {
        self.subtables.push(CmapSubtable {
            format: 12,
            platform: platform_code(platform),
            encoding,
            groups: groups.to_vec(),
        });
        self
    }

    /// Format number written into the first subtable's header. Anything but
    /// 12 makes that subtable undecodable.
    pub fn subtable_format(mut self, format: u16) -> Self {
        self.subtables[0].format = format;
        self
    }

    pub fn unicode_ranges(mut self, words: [u32; 4]) -> Self {
        self.ranges = words;
        self
    }

    pub fn os2_len(mut self, len: usize) -> Self {
        self.os2_len = Some(len);
        self
    }

    pub fn without_os2(mut self) -> Self {
        self.os2_len = None;
        self
    }

    pub fn without_cmap(mut self) -> Self {
        self.cmap = false;
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut tables: BTreeMap<[u8; 4], Vec<u8>> = BTreeMap::new();
        tables.insert(*b"head", head());
        tables.insert(*b"hhea", hhea());
        tables.insert(*b"maxp", maxp());
        if self.cmap {
            tables.insert(*b"cmap", cmap(&self.subtables));
        }
        if let Some(len) = self.os2_len {
            tables.insert(*b"OS/2", os2(len, self.ranges));
        }

        let mut out = Vec::new();
        out.extend_from_slice(&sfnt::SFNT_VERSION_TRUETYPE.to_be_bytes());
        out.extend_from_slice(&(tables.len() as u16).to_be_bytes());
        out.extend_from_slice(&[0u8; 6]); // searchRange, entrySelector, rangeShift

        let mut offset = 12 + tables.len() * 16;
        let mut head_offset = 0;
        for (tag, data) in &tables {
            if tag == b"head" {
                head_offset = offset;
            }
            out.extend_from_slice(tag);
            out.extend_from_slice(&calc_checksum(data).to_be_bytes());
            out.extend_from_slice(&(offset as u32).to_be_bytes());
            out.extend_from_slice(&(data.len() as u32).to_be_bytes());
            offset += data.len().next_multiple_of(4);
        }
        for data in tables.values() {
            out.extend_from_slice(data);
            out.resize(out.len().next_multiple_of(4), 0);
        }

        let adjustment = CHECKSUM_MAGIC.wrapping_sub(calc_checksum(&out));
        let at = head_offset + HEAD_CHECKSUM_ADJUSTMENT;
        out[at..at + 4].copy_from_slice(&adjustment.to_be_bytes());
        out
    }
}

fn head() -> Vec<u8> {
    let mut t = vec![0u8; 54];
    t[0..4].copy_from_slice(&0x0001_0000u32.to_be_bytes());
    t[12..16].copy_from_slice(&0x5F0F_3CF5u32.to_be_bytes());
    t[18..20].copy_from_slice(&1000u16.to_be_bytes()); // unitsPerEm
    t
}

fn hhea() -> Vec<u8> {
    let mut t = vec![0u8; 36];
    t[0..4].copy_from_slice(&0x0001_0000u32.to_be_bytes());
    t[34..36].copy_from_slice(&1u16.to_be_bytes()); // numberOfHMetrics
    t
}

fn maxp() -> Vec<u8> {
    let mut t = Vec::with_capacity(6);
    t.extend_from_slice(&0x0000_5000u32.to_be_bytes());
    t.extend_from_slice(&2u16.to_be_bytes());
    t
}

fn os2(len: usize, ranges: [u32; 4]) -> Vec<u8> {
    let mut t = vec![0u8; len];
    t[0..2].copy_from_slice(&4u16.to_be_bytes());
    if len >= 58 {
        for (k, word) in ranges.into_iter().enumerate() {
            t[42 + 4 * k..46 + 4 * k].copy_from_slice(&word.to_be_bytes());
        }
    }
    t
}

fn cmap(subtables: &[CmapSubtable]) -> Vec<u8> {
    let mut t = Vec::new();
    t.extend_from_slice(&0u16.to_be_bytes());
    t.extend_from_slice(&(subtables.len() as u16).to_be_bytes());

    let mut bodies = Vec::new();
    let mut offset = 4 + 8 * subtables.len();
    for st in subtables {
        let body = format12(st.format, &st.groups);
        t.extend_from_slice(&st.platform.to_be_bytes());
        t.extend_from_slice(&st.encoding.to_be_bytes());
        t.extend_from_slice(&(offset as u32).to_be_bytes());
        offset += body.len();
        bodies.push(body);
    }
    for body in bodies {
        t.extend_from_slice(&body);
    }
    t
}

fn format12(format: u16, groups: &[(u32, u32)]) -> Vec<u8> {
    let len = 16 + 12 * groups.len();
    let mut t = Vec::with_capacity(len);
    t.extend_from_slice(&format.to_be_bytes());
    t.extend_from_slice(&0u16.to_be_bytes());
    t.extend_from_slice(&(len as u32).to_be_bytes());
    t.extend_from_slice(&0u32.to_be_bytes()); // language
    t.extend_from_slice(&(groups.len() as u32).to_be_bytes());
    for &(low, high) in groups {
        t.extend_from_slice(&low.to_be_bytes());
        t.extend_from_slice(&high.to_be_bytes());
        t.extend_from_slice(&1u32.to_be_bytes()); // startGlyphID
    }
    t
}
