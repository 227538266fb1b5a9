// Code point -> `ulUnicodeRange` bit classification.
//
// Every code point is tested against every assigned bit; a code point may
// set several bits (e.g. anything above U+FFFF also sets bit 57). Within one
// bit the scan stops at the first matching interval.

use super::bitmask::RangeBitmask;
use super::table::{UNICODE_RANGES, UnicodeRangeBit};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Code points per rayon task when classifying in parallel.
#[cfg(feature = "parallel")]
const PAR_CHUNK: usize = 4096;

/// Bits set by a single code point.
#[inline]
pub fn bits_for(codepoint: u32) -> RangeBitmask {
    bits_for_in(&UNICODE_RANGES, codepoint)
}

fn bits_for_in(table: &[UnicodeRangeBit], codepoint: u32) -> RangeBitmask {
    let mut mask = RangeBitmask::EMPTY;
    for (offset, entry) in table.iter().enumerate() {
        for &(low, high) in entry.intervals {
            if low <= codepoint && codepoint <= high {
                mask.set(offset);
                break;
            }
        }
    }
    mask
}

/// Compute the expected `ulUnicodeRange` bits for a set of code points.
///
/// Order of the input does not matter; duplicates are harmless.
pub fn classify<I>(codepoints: I) -> RangeBitmask
where
    I: IntoIterator<Item = u32>,
{
    classify_with(&UNICODE_RANGES, codepoints)
}

/// [`classify`] against an arbitrary table. Entry `i` of `table` drives bit `i`.
pub fn classify_with<I>(table: &[UnicodeRangeBit], codepoints: I) -> RangeBitmask
where
    I: IntoIterator<Item = u32>,
{
    let mut acc = RangeBitmask::EMPTY;
    for codepoint in codepoints {
        acc |= bits_for_in(table, codepoint);
    }
    acc
}

/// Parallel [`classify`]. Partial masks are merged with bitwise OR, so the
/// result is identical to the sequential version.
#[cfg(feature = "parallel")]
pub fn classify_par(codepoints: &[u32]) -> RangeBitmask {
    codepoints
        .par_chunks(PAR_CHUNK)
        .map(|chunk| classify(chunk.iter().copied()))
        .reduce(|| RangeBitmask::EMPTY, |a, b| a | b)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(mask: RangeBitmask) -> Vec<usize> {
        mask.iter_bits().collect()
    }

    #[test]
    fn basic_latin_only() {
        assert_eq!(bits(classify([0x0041])), vec![0]);
    }

    #[test]
    fn latin_and_cjk() {
        assert_eq!(bits(classify([0x0041, 0x4E2D])), vec![0, 59]);
    }

    #[test]
    fn empty_set_is_empty_mask() {
        assert!(classify(std::iter::empty()).is_empty());
    }

    #[test]
    fn interval_bounds_are_inclusive() {
        // Bit 56: Hangul Syllables, AC00..=D7AF. Neighbours are unassigned.
        assert!(classify([0xAC00]).contains(56));
        assert!(classify([0xD7AF]).contains(56));
        assert!(!classify([0xABFF]).contains(56));
        assert!(!classify([0xD7B0]).contains(56));
    }

    #[test]
    fn second_interval_of_a_bit_matches() {
        // Bit 5 also covers Modifier Tone Letters.
        assert_eq!(bits(classify([0xA700])), vec![5]);
        // Bit 59's last interval is the Kanbun block.
        assert_eq!(bits(classify([0x3190])), vec![59]);
    }

    #[test]
    fn supplementary_code_points_set_several_bits() {
        // Old Italic is also Non-Plane 0.
        assert_eq!(bits(classify([0x10300])), vec![57, 85]);
        // CJK Extension B.
        assert_eq!(bits(classify([0x20000])), vec![57, 59]);
        // Plane 15 private use.
        assert_eq!(bits(classify([0xF0000])), vec![57, 90]);
        // Mahjong tiles.
        assert_eq!(bits(classify([0x1F000])), vec![57, 122]);
    }

    #[test]
    fn noncharacters_in_private_planes_are_excluded_from_bit_90() {
        assert_eq!(bits(classify([0xFFFFE])), vec![57]);
        assert_eq!(bits(classify([0x10FFFF])), vec![57]);
    }

    #[test]
    fn unassigned_and_out_of_range_contribute_nothing() {
        // Syriac Supplement sits in a gap of the table.
        assert!(classify([0x0860]).is_empty());
        assert!(classify([0x11_0000, u32::MAX]).is_empty());
    }

    #[test]
    fn reserved_bits_never_set() {
        let all = classify(0..=0x10FFFFu32);
        for i in 123..128 {
            assert!(!all.contains(i));
        }
        assert_eq!(all.count(), 123);
    }

    #[test]
    fn order_and_duplicates_do_not_matter() {
        let a = classify([0x4E2D, 0x41, 0x41, 0x10300]);
        let b = classify([0x10300, 0x4E2D, 0x41]);
        assert_eq!(a, b);
    }

    #[test]
    fn bits_for_matches_single_element_classify() {
        for cp in [0x00, 0x7F, 0x2E80, 0x1D400, 0xE0100] {
            assert_eq!(bits_for(cp), classify([cp]));
        }
    }

    #[test]
    fn classify_with_custom_table() {
        static TABLE: [UnicodeRangeBit; 2] = [
            UnicodeRangeBit {
                index: 0,
                name: "low",
                intervals: &[(0, 9)],
            },
            UnicodeRangeBit {
                index: 1,
                name: "overlap",
                intervals: &[(5, 20)],
            },
        ];
        assert_eq!(bits(classify_with(&TABLE, [7])), vec![0, 1]);
        assert_eq!(bits(classify_with(&TABLE, [15])), vec![1]);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_matches_sequential() {
        let cps: Vec<u32> = (0..0x3_0000u32).step_by(7).collect();
        assert_eq!(classify_par(&cps), classify(cps.iter().copied()));
    }
}
