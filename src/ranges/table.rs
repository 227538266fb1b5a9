// OpenType OS/2 `ulUnicodeRange` bit assignments.
//
// Bit positions and their code-point intervals follow the OS/2 table
// specification (version 4+). Bits 123..=127 are reserved and have no entry.
// Interval order within a bit is kept as published; intervals of different
// bits may overlap (bit 57 spans every supplementary plane).

/// Number of assigned bits (0..=122).
pub const ASSIGNED_BITS: usize = 123;

/// Highest Unicode scalar value.
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

/// One `ulUnicodeRange` bit and the inclusive code-point intervals it governs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnicodeRangeBit {
    /// Bit position in the 128-bit field.
    pub index: u8,
    /// Name of the first Unicode block assigned to this bit.
    pub name: &'static str,
    /// Inclusive `(low, high)` pairs. Never empty.
    pub intervals: &'static [(u32, u32)],
}

impl UnicodeRangeBit {
    /// Whether `codepoint` falls inside any interval of this bit.
    #[inline]
    pub fn contains(&self, codepoint: u32) -> bool {
        self.intervals
            .iter()
            .any(|&(low, high)| low <= codepoint && codepoint <= high)
    }
}

const fn bit(index: u8, name: &'static str, intervals: &'static [(u32, u32)]) -> UnicodeRangeBit {
    UnicodeRangeBit {
        index,
        name,
        intervals,
    }
}

/// The complete table, indexed by bit position.
pub static UNICODE_RANGES: [UnicodeRangeBit; ASSIGNED_BITS] = [
    bit(0, "Basic Latin", &[(0x0000, 0x007F)]),
    bit(1, "Latin-1 Supplement", &[(0x0080, 0x00FF)]),
    bit(2, "Latin Extended-A", &[(0x0100, 0x017F)]),
    bit(3, "Latin Extended-B", &[(0x0180, 0x024F)]),
    bit(4, "IPA Extensions", &[(0x0250, 0x02AF), (0x1D00, 0x1D7F), (0x1D80, 0x1DBF)]),
    bit(5, "Spacing Modifier Letters", &[(0x02B0, 0x02FF), (0xA700, 0xA71F)]),
    bit(6, "Combining Diacritical Marks", &[(0x0300, 0x036F), (0x1DC0, 0x1DFF)]),
    bit(7, "Greek and Coptic", &[(0x0370, 0x03FF)]),
    bit(8, "Coptic", &[(0x2C80, 0x2CFF)]),
    bit(9, "Cyrillic", &[(0x0400, 0x04FF), (0x0500, 0x052F), (0x2DE0, 0x2DFF), (0xA640, 0xA69F)]),
    bit(10, "Armenian", &[(0x0530, 0x058F)]),
    bit(11, "Hebrew", &[(0x0590, 0x05FF)]),
    bit(12, "Vai", &[(0xA500, 0xA63F)]),
    bit(13, "Arabic", &[(0x0600, 0x06FF), (0x0750, 0x077F)]),
    bit(14, "NKo", &[(0x07C0, 0x07FF)]),
    bit(15, "Devanagari", &[(0x0900, 0x097F)]),
    bit(16, "Bengali", &[(0x0980, 0x09FF)]),
    bit(17, "Gurmukhi", &[(0x0A00, 0x0A7F)]),
    bit(18, "Gujarati", &[(0x0A80, 0x0AFF)]),
    bit(19, "Oriya", &[(0x0B00, 0x0B7F)]),
    bit(20, "Tamil", &[(0x0B80, 0x0BFF)]),
    bit(21, "Telugu", &[(0x0C00, 0x0C7F)]),
    bit(22, "Kannada", &[(0x0C80, 0x0CFF)]),
    bit(23, "Malayalam", &[(0x0D00, 0x0D7F)]),
    bit(24, "Thai", &[(0x0E00, 0x0E7F)]),
    bit(25, "Lao", &[(0x0E80, 0x0EFF)]),
    bit(26, "Georgian", &[(0x10A0, 0x10FF), (0x2D00, 0x2D2F)]),
    bit(27, "Balinese", &[(0x1B00, 0x1B7F)]),
    bit(28, "Hangul Jamo", &[(0x1100, 0x11FF)]),
    bit(29, "Latin Extended Additional", &[(0x1E00, 0x1EFF), (0x2C60, 0x2C7F), (0xA720, 0xA7FF)]),
    bit(30, "Greek Extended", &[(0x1F00, 0x1FFF)]),
    bit(31, "General Punctuation", &[(0x2000, 0x206F), (0x2E00, 0x2E7F)]),
    bit(32, "Superscripts And Subscripts", &[(0x2070, 0x209F)]),
    bit(33, "Currency Symbols", &[(0x20A0, 0x20CF)]),
    bit(34, "Combining Diacritical Marks For Symbols", &[(0x20D0, 0x20FF)]),
    bit(35, "Letterlike Symbols", &[(0x2100, 0x214F)]),
    bit(36, "Number Forms", &[(0x2150, 0x218F)]),
    bit(37, "Arrows", &[(0x2190, 0x21FF), (0x27F0, 0x27FF), (0x2900, 0x297F), (0x2B00, 0x2BFF)]),
    bit(
        38,
        "Mathematical Operators",
        &[
            (0x2200, 0x22FF),
            (0x2A00, 0x2AFF),
            (0x27C0, 0x27EF),
            (0x2980, 0x29FF),
        ],
    ),
    bit(39, "Miscellaneous Technical", &[(0x2300, 0x23FF)]),
    bit(40, "Control Pictures", &[(0x2400, 0x243F)]),
    bit(41, "Optical Character Recognition", &[(0x2440, 0x245F)]),
    bit(42, "Enclosed Alphanumerics", &[(0x2460, 0x24FF)]),
    bit(43, "Box Drawing", &[(0x2500, 0x257F)]),
    bit(44, "Block Elements", &[(0x2580, 0x259F)]),
    bit(45, "Geometric Shapes", &[(0x25A0, 0x25FF)]),
    bit(46, "Miscellaneous Symbols", &[(0x2600, 0x26FF)]),
    bit(47, "Dingbats", &[(0x2700, 0x27BF)]),
    bit(48, "CJK Symbols And Punctuation", &[(0x3000, 0x303F)]),
    bit(49, "Hiragana", &[(0x3040, 0x309F)]),
    bit(50, "Katakana", &[(0x30A0, 0x30FF), (0x31F0, 0x31FF)]),
    bit(51, "Bopomofo", &[(0x3100, 0x312F), (0x31A0, 0x31BF)]),
    bit(52, "Hangul Compatibility Jamo", &[(0x3130, 0x318F)]),
    bit(53, "Phags-pa", &[(0xA840, 0xA87F)]),
    bit(54, "Enclosed CJK Letters And Months", &[(0x3200, 0x32FF)]),
    bit(55, "CJK Compatibility", &[(0x3300, 0x33FF)]),
    bit(56, "Hangul Syllables", &[(0xAC00, 0xD7AF)]),
    bit(57, "Non-Plane 0", &[(0x10000, 0x10FFFF)]),
    bit(58, "Phoenician", &[(0x10900, 0x1091F)]),
    bit(
        59,
        "CJK Unified Ideographs",
        &[
            (0x4E00, 0x9FFF),
            (0x2E80, 0x2EFF),
            (0x2F00, 0x2FDF),
            (0x2FF0, 0x2FFF),
            (0x3400, 0x4DBF),
            (0x20000, 0x2A6DF),
            (0x3190, 0x319F),
        ],
    ),
    bit(60, "Private Use Area (plane 0)", &[(0xE000, 0xF8FF)]),
    bit(61, "CJK Strokes", &[(0x31C0, 0x31EF), (0xF900, 0xFAFF), (0x2F800, 0x2FA1F)]),
    bit(62, "Alphabetic Presentation Forms", &[(0xFB00, 0xFB4F)]),
    bit(63, "Arabic Presentation Forms-A", &[(0xFB50, 0xFDFF)]),
    bit(64, "Combining Half Marks", &[(0xFE20, 0xFE2F)]),
    bit(65, "Vertical Forms", &[(0xFE10, 0xFE1F), (0xFE30, 0xFE4F)]),
    bit(66, "Small Form Variants", &[(0xFE50, 0xFE6F)]),
    bit(67, "Arabic Presentation Forms-B", &[(0xFE70, 0xFEFF)]),
    bit(68, "Halfwidth And Fullwidth Forms", &[(0xFF00, 0xFFEF)]),
    bit(69, "Specials", &[(0xFFF0, 0xFFFF)]),
    bit(70, "Tibetan", &[(0x0F00, 0x0FFF)]),
    bit(71, "Syriac", &[(0x0700, 0x074F)]),
    bit(72, "Thaana", &[(0x0780, 0x07BF)]),
    bit(73, "Sinhala", &[(0x0D80, 0x0DFF)]),
    bit(74, "Myanmar", &[(0x1000, 0x109F)]),
    bit(75, "Ethiopic", &[(0x1200, 0x137F), (0x1380, 0x139F), (0x2D80, 0x2DDF)]),
    bit(76, "Cherokee", &[(0x13A0, 0x13FF)]),
    bit(77, "Unified Canadian Aboriginal Syllabics", &[(0x1400, 0x167F)]),
    bit(78, "Ogham", &[(0x1680, 0x169F)]),
    bit(79, "Runic", &[(0x16A0, 0x16FF)]),
    bit(80, "Khmer", &[(0x1780, 0x17FF), (0x19E0, 0x19FF)]),
    bit(81, "Mongolian", &[(0x1800, 0x18AF)]),
    bit(82, "Braille Patterns", &[(0x2800, 0x28FF)]),
    bit(83, "Yi Syllables", &[(0xA000, 0xA48F), (0xA490, 0xA4CF)]),
    bit(84, "Tagalog", &[(0x1700, 0x171F), (0x1720, 0x173F), (0x1740, 0x175F), (0x1760, 0x177F)]),
    bit(85, "Old Italic", &[(0x10300, 0x1032F)]),
    bit(86, "Gothic", &[(0x10330, 0x1034F)]),
    bit(87, "Deseret", &[(0x10400, 0x1044F)]),
    bit(
        88,
        "Byzantine Musical Symbols",
        &[
            (0x1D000, 0x1D0FF),
            (0x1D100, 0x1D1FF),
            (0x1D200, 0x1D24F),
        ],
    ),
    bit(89, "Mathematical Alphanumeric Symbols", &[(0x1D400, 0x1D7FF)]),
    bit(90, "Private Use (plane 15)", &[(0xF0000, 0xFFFFD), (0x100000, 0x10FFFD)]),
    bit(91, "Variation Selectors", &[(0xFE00, 0xFE0F), (0xE0100, 0xE01EF)]),
    bit(92, "Tags", &[(0xE0000, 0xE007F)]),
    bit(93, "Limbu", &[(0x1900, 0x194F)]),
    bit(94, "Tai Le", &[(0x1950, 0x197F)]),
    bit(95, "New Tai Lue", &[(0x1980, 0x19DF)]),
    bit(96, "Buginese", &[(0x1A00, 0x1A1F)]),
    bit(97, "Glagolitic", &[(0x2C00, 0x2C5F)]),
    bit(98, "Tifinagh", &[(0x2D30, 0x2D7F)]),
    bit(99, "Yijing Hexagram Symbols", &[(0x4DC0, 0x4DFF)]),
    bit(100, "Syloti Nagri", &[(0xA800, 0xA82F)]),
    bit(101, "Linear B Syllabary", &[(0x10000, 0x1007F), (0x10080, 0x100FF), (0x10100, 0x1013F)]),
    bit(102, "Ancient Greek Numbers", &[(0x10140, 0x1018F)]),
    bit(103, "Ugaritic", &[(0x10380, 0x1039F)]),
    bit(104, "Old Persian", &[(0x103A0, 0x103DF)]),
    bit(105, "Shavian", &[(0x10450, 0x1047F)]),
    bit(106, "Osmanya", &[(0x10480, 0x104AF)]),
    bit(107, "Cypriot Syllabary", &[(0x10800, 0x1083F)]),
    bit(108, "Kharoshthi", &[(0x10A00, 0x10A5F)]),
    bit(109, "Tai Xuan Jing Symbols", &[(0x1D300, 0x1D35F)]),
    bit(110, "Cuneiform", &[(0x12000, 0x123FF), (0x12400, 0x1247F)]),
    bit(111, "Counting Rod Numerals", &[(0x1D360, 0x1D37F)]),
    bit(112, "Sundanese", &[(0x1B80, 0x1BBF)]),
    bit(113, "Lepcha", &[(0x1C00, 0x1C4F)]),
    bit(114, "Ol Chiki", &[(0x1C50, 0x1C7F)]),
    bit(115, "Saurashtra", &[(0xA880, 0xA8DF)]),
    bit(116, "Kayah Li", &[(0xA900, 0xA92F)]),
    bit(117, "Rejang", &[(0xA930, 0xA95F)]),
    bit(118, "Cham", &[(0xAA00, 0xAA5F)]),
    bit(119, "Ancient Symbols", &[(0x10190, 0x101CF)]),
    bit(120, "Phaistos Disc", &[(0x101D0, 0x101FF)]),
    bit(121, "Carian", &[(0x102A0, 0x102DF), (0x10280, 0x1029F), (0x10920, 0x1093F)]),
    bit(122, "Domino Tiles", &[(0x1F030, 0x1F09F), (0x1F000, 0x1F02F)]),
];

/// Look up the entry for bit `index`. Reserved bits (123..=127) return `None`.
#[inline]
pub fn bit_entry(index: usize) -> Option<&'static UnicodeRangeBit> {
    UNICODE_RANGES.get(index)
}

/// Intervals assigned to bit `index`, or an empty slice for reserved bits.
#[inline]
pub fn intervals(index: usize) -> &'static [(u32, u32)] {
    bit_entry(index).map(|b| b.intervals).unwrap_or(&[])
}

/// Name of bit `index`, if assigned.
pub fn bit_name(index: usize) -> Option<&'static str> {
    bit_entry(index).map(|b| b.name)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
