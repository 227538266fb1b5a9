// File-level reconciliation.
//
// `reconcile_file()` runs the whole per-font pipeline: read the file, compare
// the stored `ulUnicodeRange` words with the character map, and write the
// corrected font back to the same path when they differ. A font that already
// matches is never rewritten.

use std::path::{Path, PathBuf};

use crate::font::{FontError, FontStore, SfntFont};
use crate::ranges::{RangeBitmask, classify};
use crate::reconcile::{self, ReconcileResult};

// ---------------------------------------------------------------------------
// Options / report
// ---------------------------------------------------------------------------

/// Configuration for file reconciliation.
#[derive(Debug, Clone, Default)]
pub struct ReconcileOptions {
    /// Compute and report, but never write.
    pub dry_run: bool,
}

/// What happened to one font.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    /// Number of code points in the best cmap subtable.
    pub codepoints: usize,
    /// `ulUnicodeRange1..4` as found in the file.
    pub stored: [u32; 4],
    /// `ulUnicodeRange1..4` implied by the character map.
    pub expected: [u32; 4],
    pub result: ReconcileResult,
    /// Whether the file on disk was rewritten.
    pub written: bool,
}

impl FileReport {
    pub fn is_changed(&self) -> bool {
        self.result.is_changed()
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Error type for file operations.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Argument does not name an existing regular file.
    #[error("{} does not appear to be a valid file path", .0.display())]
    InvalidPath(PathBuf),
    /// File could not be read.
    #[error("{}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Font could not be parsed.
    #[error("{}: {source}", path.display())]
    Font {
        path: PathBuf,
        #[source]
        source: FontError,
    },
    /// Updated font could not be written.
    #[error("{}: write failed: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: FontError,
    },
}

impl IoError {
    pub fn path(&self) -> &Path {
        match self {
            Self::InvalidPath(path)
            | Self::Read { path, .. }
            | Self::Font { path, .. }
            | Self::Write { path, .. } => path,
        }
    }
}

// ---------------------------------------------------------------------------
// Path validation
// ---------------------------------------------------------------------------

/// Check that every path names an existing regular file.
///
/// Returns the first offending path.
pub fn validate_paths<P: AsRef<Path>>(paths: &[P]) -> Result<(), IoError> {
    for path in paths {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(IoError::InvalidPath(path.to_path_buf()));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Reconciliation
// ---------------------------------------------------------------------------

/// Reconcile a font held by any [`FontStore`], updating its stored words on
/// mismatch. Nothing is persisted.
pub fn reconcile_font<F: FontStore>(font: &mut F) -> Result<(ReconcileResult, usize), FontError> {
    let codepoints = font.best_character_map()?;
    let stored = font.stored_range_words()?;
    let count = codepoints.len();

    let result = reconcile::reconcile(codepoints, stored);
    if let ReconcileResult::Changed { new_words, .. } = &result {
        font.set_stored_range_words(*new_words)?;
    }
    Ok((result, count))
}

/// Reconcile the font at `path`, rewriting it in place if its range bits are
/// stale and `opts.dry_run` is not set.
pub fn reconcile_file(path: &Path, opts: &ReconcileOptions) -> Result<FileReport, IoError> {
    if !path.is_file() {
        return Err(IoError::InvalidPath(path.to_path_buf()));
    }
    let data = std::fs::read(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let font_err = |source| IoError::Font {
        path: path.to_path_buf(),
        source,
    };

    let mut font = SfntFont::from_bytes(data).map_err(font_err)?;
    let stored = font.stored_range_words().map_err(font_err)?;
    let (result, codepoints) = reconcile_font(&mut font).map_err(font_err)?;
    let expected = match &result {
        ReconcileResult::Changed { new_words, .. } => *new_words,
        ReconcileResult::Unchanged => stored,
    };
    log::debug!(
        "{}: {codepoints} code points, expected {}",
        path.display(),
        RangeBitmask::from_words(expected)
    );

    let mut written = false;
    if font.is_modified() && !opts.dry_run {
        font.persist(path).map_err(|source| IoError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        written = true;
        log::info!("{}: updated ulUnicodeRange", path.display());
    }

    Ok(FileReport {
        path: path.to_path_buf(),
        codepoints,
        stored,
        expected,
        result,
        written,
    })
}

/// Expected `ulUnicodeRange1..4` for the font at `path`, without comparing
/// or writing anything.
pub fn expected_ranges(path: &Path) -> Result<[u32; 4], IoError> {
    let font = SfntFont::open(path).map_err(|source| match source {
        FontError::Io(source) => IoError::Read {
            path: path.to_path_buf(),
            source,
        },
        source => IoError::Font {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let codepoints = font.best_character_map().map_err(|source| IoError::Font {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(classify(codepoints).to_words())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
