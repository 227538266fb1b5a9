// `OS/2` ulUnicodeRange1..4 access.
//
// The four fields are consecutive big-endian u32 values at offset 42 in every
// table version (0 through 5).

use super::sfnt::{self, FontError, TableDirectory, Tag};

/// Offset of `ulUnicodeRange1`.
pub const UNICODE_RANGE_OFFSET: usize = 42;

/// Minimum table length that still holds `ulUnicodeRange4`.
pub const MIN_OS2_LEN: usize = UNICODE_RANGE_OFFSET + 16;

fn range_fields(dir: &TableDirectory) -> Result<usize, FontError> {
    let record = dir.require(Tag::OS2)?;
    if (record.length as usize) < MIN_OS2_LEN {
        return Err(FontError::TableTooShort {
            tag: Tag::OS2,
            len: record.length as usize,
            need: MIN_OS2_LEN,
        });
    }
    Ok(record.offset as usize + UNICODE_RANGE_OFFSET)
}

/// Read `ulUnicodeRange1..4`.
pub fn read_unicode_ranges(data: &[u8], dir: &TableDirectory) -> Result<[u32; 4], FontError> {
    let at = range_fields(dir)?;
    Ok(std::array::from_fn(|k| sfnt::read_u32(data, at + 4 * k)))
}

/// Overwrite `ulUnicodeRange1..4` and refresh the `OS/2` directory checksum.
///
/// The `head` adjustment is left stale; see [`sfnt::fix_head_checksum`].
pub fn write_unicode_ranges(
    data: &mut [u8],
    dir: &TableDirectory,
    words: [u32; 4],
) -> Result<(), FontError> {
    let at = range_fields(dir)?;
    for (k, word) in words.into_iter().enumerate() {
        sfnt::write_u32(data, at + 4 * k, word);
    }
    sfnt::update_table_checksum(data, dir, Tag::OS2);
    Ok(())
}
