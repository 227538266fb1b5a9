// Font access for Unicode range reconciliation.
//
// The reconciler only needs four things from a font: its best character map,
// the stored `ulUnicodeRange` words, a way to replace them, and a way to write
// the result back. `FontStore` is that contract; `SfntFont` implements it for
// single TrueType/OpenType files by patching the original bytes in place.
//
// # Modules
//
// - `sfnt` — Table directory, checksums, byte helpers
// - `cmap` — Best cmap subtable selection (ttf-parser)
// - `os2`  — ulUnicodeRange1..4 field access

pub mod cmap;
pub mod os2;
pub mod sfnt;

#[doc(hidden)]
pub mod fixture;

use std::collections::BTreeSet;
use std::path::Path;

pub use sfnt::{FontError, TableDirectory, Tag};

/// Font operations the reconciler depends on.
pub trait FontStore {
    /// Code points mapped by the font's preferred Unicode cmap subtable.
    fn best_character_map(&self) -> Result<BTreeSet<u32>, FontError>;

    /// `ulUnicodeRange1..4` as currently stored.
    fn stored_range_words(&self) -> Result<[u32; 4], FontError>;

    /// Replace `ulUnicodeRange1..4`.
    fn set_stored_range_words(&mut self, words: [u32; 4]) -> Result<(), FontError>;

    /// Write the font to `path`.
    fn persist(&self, path: &Path) -> Result<(), FontError>;
}

/// A single sfnt font held in memory as its original bytes.
#[derive(Clone, Debug)]
pub struct SfntFont {
    data: Vec<u8>,
    dir: TableDirectory,
    dirty: bool,
}

impl SfntFont {
    /// Parse the table directory. Table contents are read lazily.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, FontError> {
        let dir = TableDirectory::parse(&data)?;
        Ok(Self {
            data,
            dir,
            dirty: false,
        })
    }

    pub fn open(path: &Path) -> Result<Self, FontError> {
        Self::from_bytes(std::fs::read(path)?)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Whether the range words were replaced since loading.
    pub fn is_modified(&self) -> bool {
        self.dirty
    }
}

impl FontStore for SfntFont {
    fn best_character_map(&self) -> Result<BTreeSet<u32>, FontError> {
        cmap::best_character_map(&self.data)
    }

    fn stored_range_words(&self) -> Result<[u32; 4], FontError> {
        os2::read_unicode_ranges(&self.data, &self.dir)
    }

    fn set_stored_range_words(&mut self, words: [u32; 4]) -> Result<(), FontError> {
        os2::write_unicode_ranges(&mut self.data, &self.dir, words)?;
        sfnt::fix_head_checksum(&mut self.data, &self.dir)?;
        self.dirty = true;
        Ok(())
    }

    fn persist(&self, path: &Path) -> Result<(), FontError> {
        std::fs::write(path, &self.data)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
