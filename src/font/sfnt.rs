// sfnt table directory and checksums.
//
// Only what in-place patching needs: locate a table, read/write big-endian
// fields, recompute a table's directory checksum and the `head`
// checksum adjustment.

use std::fmt;

/// TrueType outlines.
pub const SFNT_VERSION_TRUETYPE: u32 = 0x0001_0000;
/// CFF outlines.
pub const SFNT_VERSION_OTTO: u32 = u32::from_be_bytes(*b"OTTO");
/// Legacy Apple TrueType.
pub const SFNT_VERSION_TRUE: u32 = u32::from_be_bytes(*b"true");
/// Font collection header.
pub const TTC_TAG: u32 = u32::from_be_bytes(*b"ttcf");

/// Whole-font checksum target (OpenType `head.checkSumAdjustment`).
pub const CHECKSUM_MAGIC: u32 = 0xB1B0_AFBA;

/// Offset of `checkSumAdjustment` inside `head`.
pub const HEAD_CHECKSUM_ADJUSTMENT: usize = 8;

const HEADER_LEN: usize = 12;
const RECORD_LEN: usize = 16;

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

/// Four-byte table tag.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(pub [u8; 4]);

impl Tag {
    pub const HEAD: Tag = Tag(*b"head");
    pub const OS2: Tag = Tag(*b"OS/2");
    pub const CMAP: Tag = Tag(*b"cmap");
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({self})")
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised while reading or patching a font.
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("font data truncated")]
    Truncated,
    #[error("not an sfnt font (version tag {0:#010x})")]
    BadMagic(u32),
    #[error("font collections are not supported")]
    Unsupported,
    #[error("missing '{0}' table")]
    MissingTable(Tag),
    #[error("'{tag}' table too short: {len} bytes, need {need}")]
    TableTooShort { tag: Tag, len: usize, need: usize },
    #[error("table '{0}' extends past end of file")]
    TableOutOfBounds(Tag),
    #[error("font parse error: {0}")]
    Parse(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Directory
// ---------------------------------------------------------------------------

/// One table directory entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableRecord {
    pub tag: Tag,
    pub checksum: u32,
    pub offset: u32,
    pub length: u32,
    /// Byte offset of this record inside the file.
    pub record_offset: usize,
}

impl TableRecord {
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = self.offset as usize;
        start..start + self.length as usize
    }
}

/// Parsed table directory of a single (non-collection) font.
#[derive(Clone, Debug)]
pub struct TableDirectory {
    pub sfnt_version: u32,
    pub records: Vec<TableRecord>,
}

impl TableDirectory {
    /// Parse the offset table and table records at the start of `data`.
    pub fn parse(data: &[u8]) -> Result<Self, FontError> {
        if data.len() < HEADER_LEN {
            return Err(FontError::Truncated);
        }
        let sfnt_version = read_u32(data, 0);
        match sfnt_version {
            SFNT_VERSION_TRUETYPE | SFNT_VERSION_OTTO | SFNT_VERSION_TRUE => {}
            TTC_TAG => return Err(FontError::Unsupported),
            other => return Err(FontError::BadMagic(other)),
        }

        let num_tables = read_u16(data, 4) as usize;
        let dir_end = HEADER_LEN + num_tables * RECORD_LEN;
        if dir_end > data.len() {
            return Err(FontError::Truncated);
        }

        let mut records = Vec::with_capacity(num_tables);
        for i in 0..num_tables {
            let at = HEADER_LEN + i * RECORD_LEN;
            let record = TableRecord {
                tag: Tag([data[at], data[at + 1], data[at + 2], data[at + 3]]),
                checksum: read_u32(data, at + 4),
                offset: read_u32(data, at + 8),
                length: read_u32(data, at + 12),
                record_offset: at,
            };
            if record.offset as u64 + record.length as u64 > data.len() as u64 {
                return Err(FontError::TableOutOfBounds(record.tag));
            }
            records.push(record);
        }

        Ok(Self {
            sfnt_version,
            records,
        })
    }

    pub fn find(&self, tag: Tag) -> Option<&TableRecord> {
        self.records.iter().find(|r| r.tag == tag)
    }

    /// Like [`find`](Self::find), but a missing table is an error.
    pub fn require(&self, tag: Tag) -> Result<&TableRecord, FontError> {
        self.find(tag).ok_or(FontError::MissingTable(tag))
    }
}

// ---------------------------------------------------------------------------
// Checksums
// ---------------------------------------------------------------------------

/// Sum of big-endian `u32` words, the tail zero-padded.
pub fn calc_checksum(data: &[u8]) -> u32 {
    let mut chunks = data.chunks_exact(4);
    let mut sum = chunks
        .by_ref()
        .fold(0u32, |acc, w| acc.wrapping_add(u32::from_be_bytes([w[0], w[1], w[2], w[3]])));
    let rest = chunks.remainder();
    if !rest.is_empty() {
        let mut last = [0u8; 4];
        last[..rest.len()].copy_from_slice(rest);
        sum = sum.wrapping_add(u32::from_be_bytes(last));
    }
    sum
}

/// Checksum of a table as stored in its directory record.
///
/// For `head`, `checkSumAdjustment` counts as zero.
pub fn table_checksum(data: &[u8], record: &TableRecord) -> u32 {
    let table = &data[record.range()];
    let sum = calc_checksum(table);
    if record.tag == Tag::HEAD && table.len() >= HEAD_CHECKSUM_ADJUSTMENT + 4 {
        sum.wrapping_sub(read_u32(table, HEAD_CHECKSUM_ADJUSTMENT))
    } else {
        sum
    }
}

/// Recompute the directory checksum of `tag`. Missing tables are ignored.
pub fn update_table_checksum(data: &mut [u8], dir: &TableDirectory, tag: Tag) {
    if let Some(record) = dir.find(tag) {
        let checksum = table_checksum(data, record);
        write_u32(data, record.record_offset + 4, checksum);
    }
}

/// Recompute `head.checkSumAdjustment` over the whole file.
///
/// Call after every other checksum has been updated.
pub fn fix_head_checksum(data: &mut [u8], dir: &TableDirectory) -> Result<(), FontError> {
    let head = *dir.require(Tag::HEAD)?;
    if (head.length as usize) < HEAD_CHECKSUM_ADJUSTMENT + 4 {
        return Err(FontError::TableTooShort {
            tag: Tag::HEAD,
            len: head.length as usize,
            need: HEAD_CHECKSUM_ADJUSTMENT + 4,
        });
    }
    let field = head.offset as usize + HEAD_CHECKSUM_ADJUSTMENT;
    write_u32(data, field, 0);
    update_table_checksum(data, dir, Tag::HEAD);
    let adjustment = CHECKSUM_MAGIC.wrapping_sub(calc_checksum(data));
    write_u32(data, field, adjustment);
    Ok(())
}

// ---------------------------------------------------------------------------
// Byte helpers
// ---------------------------------------------------------------------------

pub(crate) fn read_u16(data: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes([data[offset], data[offset + 1]])
}

pub(crate) fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

pub(crate) fn write_u32(data: &mut [u8], offset: usize, val: u32) {
    data[offset..offset + 4].copy_from_slice(&val.to_be_bytes());
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
