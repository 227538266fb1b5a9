// 128-bit Unicode range bitmask and its four-word storage form.
//
// Storage order is little-endian by word: word 0 holds bits 0..=31
// (`ulUnicodeRange1`), word 3 holds bits 96..=127 (`ulUnicodeRange4`).

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, BitXor, Not};

/// Width of one stored word in bits.
pub const WORD_BITS: u32 = 32;

/// Number of stored words.
pub const WORD_COUNT: usize = 4;

const WORD_MASK: u128 = 0xFFFF_FFFF;

/// Combine four stored 32-bit words into one 128-bit value.
#[inline]
pub const fn pack(words: [u32; WORD_COUNT]) -> u128 {
    (words[0] as u128)
        | ((words[1] as u128) << 32)
        | ((words[2] as u128) << 64)
        | ((words[3] as u128) << 96)
}

/// Split a 128-bit value into its four stored 32-bit words.
#[inline]
pub const fn unpack(value: u128) -> [u32; WORD_COUNT] {
    [
        (value & WORD_MASK) as u32,
        ((value >> 32) & WORD_MASK) as u32,
        ((value >> 64) & WORD_MASK) as u32,
        ((value >> 96) & WORD_MASK) as u32,
    ]
}

/// Set of `ulUnicodeRange` bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RangeBitmask(pub u128);

impl RangeBitmask {
    pub const EMPTY: Self = Self(0);

    /// Build from the four stored words.
    #[inline]
    pub const fn from_words(words: [u32; WORD_COUNT]) -> Self {
        Self(pack(words))
    }

    /// The four words to store, `ulUnicodeRange1` first.
    #[inline]
    pub const fn to_words(self) -> [u32; WORD_COUNT] {
        unpack(self.0)
    }

    #[inline]
    pub const fn bits(self) -> u128 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether bit `index` is set. Out-of-range indices are never set.
    #[inline]
    pub const fn contains(self, index: usize) -> bool {
        index < 128 && (self.0 >> index) & 1 == 1
    }

    /// Set bit `index`. Indices past 127 are ignored.
    #[inline]
    pub fn set(&mut self, index: usize) {
        if index < 128 {
            self.0 |= 1u128 << index;
        }
    }

    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Positions of set bits in ascending order.
    pub fn iter_bits(self) -> impl Iterator<Item = usize> {
        let mut rest = self.0;
        std::iter::from_fn(move || {
            if rest == 0 {
                return None;
            }
            let index = rest.trailing_zeros() as usize;
            rest &= rest - 1;
            Some(index)
        })
    }

    /// Binary rendering: 128 digits, bit 127 first, four 32-digit groups
    /// each followed by a single space.
    pub fn grouped_binary(self) -> String {
        let digits = format!("{:0128b}", self.0);
        let mut out = String::with_capacity(128 + WORD_COUNT);
        for (i, c) in digits.chars().enumerate() {
            out.push(c);
            if (i + 1) % WORD_BITS as usize == 0 {
                out.push(' ');
            }
        }
        out
    }
}

impl From<u128> for RangeBitmask {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl From<[u32; WORD_COUNT]> for RangeBitmask {
    fn from(words: [u32; WORD_COUNT]) -> Self {
        Self::from_words(words)
    }
}

impl BitOr for RangeBitmask {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for RangeBitmask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for RangeBitmask {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitXor for RangeBitmask {
    type Output = Self;
    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl Not for RangeBitmask {
    type Output = Self;
    fn not(self) -> Self {
        Self(!self.0)
    }
}

impl FromIterator<usize> for RangeBitmask {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut mask = Self::EMPTY;
        for index in iter {
            mask.set(index);
        }
        mask
    }
}

impl fmt::Display for RangeBitmask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [w0, w1, w2, w3] = self.to_words();
        write!(f, "{w0:#010x} {w1:#010x} {w2:#010x} {w3:#010x}")
    }
}

impl fmt::Binary for RangeBitmask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_places_words_low_to_high() {
        assert_eq!(pack([1, 0, 0, 0]), 1);
        assert_eq!(pack([0, 1, 0, 0]), 1u128 << 32);
        assert_eq!(pack([0, 0, 1, 0]), 1u128 << 64);
        assert_eq!(pack([0, 0, 0, 1]), 1u128 << 96);
        assert_eq!(pack([u32::MAX; 4]), u128::MAX);
    }

    #[test]
    fn unpack_inverts_pack() {
        let words = [0xDEAD_BEEF, 0x0000_0001, 0x8000_0000, 0x0123_4567];
        assert_eq!(unpack(pack(words)), words);
        let value = 0x0123_4567_89AB_CDEF_FEDC_BA98_7654_3210u128;
        assert_eq!(pack(unpack(value)), value);
    }

    #[test]
    fn bit_59_lives_in_word_1() {
        let mut mask = RangeBitmask::EMPTY;
        mask.set(0);
        mask.set(59);
        assert_eq!(mask.to_words(), [1, 0x0800_0000, 0, 0]);
    }

    #[test]
    fn set_and_contains() {
        let mut mask = RangeBitmask::default();
        assert!(mask.is_empty());
        mask.set(127);
        mask.set(200);
        assert!(mask.contains(127));
        assert!(!mask.contains(126));
        assert!(!mask.contains(200));
        assert_eq!(mask.count(), 1);
    }

    #[test]
    fn iter_bits_ascending() {
        let mask: RangeBitmask = [3usize, 0, 96, 64, 122].into_iter().collect();
        assert_eq!(mask.iter_bits().collect::<Vec<_>>(), vec![0, 3, 64, 96, 122]);
        assert_eq!(RangeBitmask::EMPTY.iter_bits().count(), 0);
    }

    #[test]
    fn grouped_binary_layout() {
        let s = RangeBitmask(1).grouped_binary();
        assert_eq!(s.len(), 128 + 4);
        let groups: Vec<&str> = s.split(' ').collect();
        assert_eq!(groups.len(), 5);
        assert!(groups[..4].iter().all(|g| g.len() == 32));
        assert_eq!(groups[4], "");
        assert!(groups[3].ends_with('1'));
        assert_eq!(s.matches('1').count(), 1);

        let top = RangeBitmask(1u128 << 127).grouped_binary();
        assert!(top.starts_with('1'));
    }

    #[test]
    fn display_shows_words() {
        let mask = RangeBitmask::from_words([1, 2, 3, 4]);
        assert_eq!(
            mask.to_string(),
            "0x00000001 0x00000002 0x00000003 0x00000004"
        );
    }
}
