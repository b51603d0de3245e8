use std::str::FromStr;

/// Replaces Persian (U+06F0..U+06F9) and Arabic-Indic (U+0660..U+0669)
/// digits with their ASCII counterparts. Other characters pass through.
pub fn normalize_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{06F0}'..='\u{06F9}' => char::from(b'0' + (c as u32 - 0x06F0) as u8),
            '\u{0660}'..='\u{0669}' => char::from(b'0' + (c as u32 - 0x0660) as u8),
            _ => c
        })
        .collect()
}

/// Parses a trimmed integer written in any of the supported digit sets.
pub fn parse_number<T: FromStr>(text: &str) -> Option<T> {
    normalize_digits(text.trim()).parse::<T>().ok()
}
