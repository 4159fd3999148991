use std::borrow::Cow;

/// Inclusive code point ranges measured as two terminal columns.
const WIDE_RANGES: &[(u32, u32)] = &[
    (0x1100, 0x115F), // Hangul Jamo initial consonants
    (0x2E80, 0x2EFF), // CJK Radicals Supplement
    (0x2F00, 0x2FDF), // Kangxi Radicals
    (0x3000, 0x303F), // CJK Symbols and Punctuation
    (0x3040, 0x309F), // Hiragana
    (0x30A0, 0x30FF), // Katakana
    (0x3100, 0x312F), // Bopomofo
    (0x3200, 0x32FF), // Enclosed CJK Letters and Months
    (0x3300, 0x33FF), // CJK Compatibility
    (0x3400, 0x4DBF), // CJK Unified Ideographs Extension A
    (0x4E00, 0x9FFF), // CJK Unified Ideographs
    (0xAC00, 0xD7A3), // Hangul Syllables
    (0xF900, 0xFAFF), // CJK Compatibility Ideographs
];

/// Column width of a single code point: 0, 1 or 2.
pub fn char_width(ch: char) -> usize {
    let code = ch as u32;
    if ch.is_control() {
        return 0;
    }
    if WIDE_RANGES
        .iter()
        .any(|&(start, end)| code >= start && code <= end)
    {
        2
    } else {
        1
    }
}

/// Display width of a string, summed per code point.
pub fn str_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

/// Replace every control character with a single space.
///
/// Control characters measure as zero columns but move the cursor or start
/// escape sequences when written, so text is cleaned before it is placed in
/// a line. Tabs and line breaks become one column each.
pub fn sanitize(text: &str) -> Cow<'_, str> {
    if !text.chars().any(char::is_control) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .map(|ch| if ch.is_control() { ' ' } else { ch })
            .collect(),
    )
}
