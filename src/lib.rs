//! unicoderange: OpenType `OS/2.ulUnicodeRange` computation and repair.
//!
//! The crate provides:
//! - The 123-bit Unicode range table and a code point classifier (`ranges`)
//! - Expected-vs-stored comparison with a bit-level diff (`reconcile`)
//! - sfnt font access and in-place patching (`font`)
//! - File-oriented helpers (`io`)
//! - An optional CLI (`cli` feature)
//!
//! # Quick Start
//!
//! ```
//! use unicoderange::reconcile::{ReconcileResult, reconcile};
//!
//! // "A" and a CJK ideograph, stored bits claim Basic Latin only.
//! let result = reconcile([0x41, 0x4E2D], [1, 0, 0, 0]);
//! let ReconcileResult::Changed { new_words, .. } = result else {
//!     unreachable!()
//! };
//! assert_eq!(new_words, [1, 0x0800_0000, 0, 0]);
//! ```

pub mod font;
pub mod io;
pub mod ranges;
pub mod reconcile;

#[cfg(feature = "cli")]
pub mod cli;
