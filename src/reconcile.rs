// Expected-vs-stored comparison of `ulUnicodeRange` bits.
//
// Pure computation: the caller supplies the code points and the four stored
// words, and decides what to do with a `Changed` result.

use crate::ranges::bitmask::{RangeBitmask, WORD_COUNT};
use crate::ranges::classify;

/// Outcome of comparing a font's stored range bits with its character map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileResult {
    /// Stored words already match.
    Unchanged,
    /// Stored words differ; `new_words` must be written back.
    Changed {
        new_words: [u32; WORD_COUNT],
        diff: BitDiff,
    },
}

impl ReconcileResult {
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed { .. })
    }
}

/// Compare the bits implied by `codepoints` with the `stored` words.
pub fn reconcile<I>(codepoints: I, stored: [u32; WORD_COUNT]) -> ReconcileResult
where
    I: IntoIterator<Item = u32>,
{
    compare(classify::classify(codepoints), RangeBitmask::from_words(stored))
}

/// Compare an already computed `expected` mask with the `observed` one.
pub fn compare(expected: RangeBitmask, observed: RangeBitmask) -> ReconcileResult {
    if expected == observed {
        return ReconcileResult::Unchanged;
    }
    log::debug!(
        "range bits differ: observed {observed}, expected {expected}, {} bit(s) changed",
        (observed ^ expected).count()
    );
    ReconcileResult::Changed {
        new_words: expected.to_words(),
        diff: BitDiff { observed, expected },
    }
}

// ---------------------------------------------------------------------------
// Bit-level diff
// ---------------------------------------------------------------------------

/// Observed and expected masks of a font whose range bits need rewriting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitDiff {
    pub observed: RangeBitmask,
    pub expected: RangeBitmask,
}

impl BitDiff {
    /// Bits that differ between the two masks.
    pub fn changed(&self) -> RangeBitmask {
        self.observed ^ self.expected
    }

    /// Bits the font covers but does not declare.
    pub fn added(&self) -> RangeBitmask {
        self.expected & !self.observed
    }

    /// Bits the font declares but does not cover.
    pub fn removed(&self) -> RangeBitmask {
        self.observed & !self.expected
    }

    pub fn render_observed(&self) -> String {
        self.observed.grouped_binary()
    }

    pub fn render_expected(&self) -> String {
        self.expected.grouped_binary()
    }

    /// Expected mask in grouped binary, with every digit whose bit differs
    /// from the observed mask passed through `mark`.
    pub fn render_expected_with<F>(&self, mut mark: F) -> String
    where
        F: FnMut(char) -> String,
    {
        let changed = self.changed();
        let mut out = String::new();
        let mut bit = 128usize;
        for c in self.render_expected().chars() {
            if c == ' ' {
                out.push(c);
                continue;
            }
            bit -= 1;
            if changed.contains(bit) {
                out.push_str(&mark(c));
            } else {
                out.push(c);
            }
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
