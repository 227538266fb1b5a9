// OpenType OS/2 Unicode range classification.
//
// # Modules
//
// - `table`    — The 123 assigned `ulUnicodeRange` bits and their intervals
// - `classify` — Code point set -> 128-bit range mask
// - `bitmask`  — 128-bit mask and the four stored 32-bit words

pub mod bitmask;
pub mod classify;
pub mod table;

// Re-export key types for convenience.
pub use bitmask::{RangeBitmask, pack, unpack};
pub use classify::{bits_for, classify};
pub use table::{ASSIGNED_BITS, UNICODE_RANGES, UnicodeRangeBit};
