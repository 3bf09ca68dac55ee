//! Single-character classifiers used by the call number lexer.
//!
//! Every scanner in [`crate::cursor`] is parametrized by one of these
//! predicates. They operate on bytes and only ever accept ASCII, so any
//! non-ASCII input simply fails to match.

/// A single-character test.
pub type CharPredicate = fn(u8) -> bool;

/// ASCII letter `A-Z` or `a-z`.
#[must_use]
pub fn is_alpha(c: u8) -> bool {
    c.is_ascii_alphabetic()
}

/// ASCII uppercase letter.
#[must_use]
pub fn is_upper(c: u8) -> bool {
    c.is_ascii_uppercase()
}

/// ASCII lowercase letter.
#[must_use]
pub fn is_lower(c: u8) -> bool {
    c.is_ascii_lowercase()
}

/// ASCII decimal digit.
#[must_use]
pub fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

/// ASCII whitespace (space, tab, newline, form feed, carriage return).
#[must_use]
pub fn is_space(c: u8) -> bool {
    c.is_ascii_whitespace()
}

/// Any printable ASCII character that is neither whitespace nor a stop character.
#[must_use]
pub fn is_not_space(c: u8) -> bool {
    c.is_ascii() && !is_space(c) && !is_stop(c) && !c.is_ascii_control()
}

/// `.`
#[must_use]
pub fn is_point(c: u8) -> bool {
    c == b'.'
}

/// `-`
#[must_use]
pub fn is_dash(c: u8) -> bool {
    c == b'-'
}

/// `/`
#[must_use]
pub fn is_slash(c: u8) -> bool {
    c == b'/'
}

/// `,`
#[must_use]
pub fn is_comma(c: u8) -> bool {
    c == b','
}

/// `:`
#[must_use]
pub fn is_colon(c: u8) -> bool {
    c == b':'
}

/// `<`
#[must_use]
pub fn is_open_angle(c: u8) -> bool {
    c == b'<'
}

/// `>`
#[must_use]
pub fn is_close_angle(c: u8) -> bool {
    c == b'>'
}

/// Separator between the years of a date span: `-` or `/`.
#[must_use]
pub fn is_year_separator(c: u8) -> bool {
    is_dash(c) || is_slash(c)
}

/// Characters that terminate the input as if it had ended.
///
/// NUL, end-of-text (0x03), and the ASCII information separators 0x1C-0x1F.
/// The last two double as the MARC field terminator and subfield delimiter,
/// so a classification subfield handed over with its delimiter still parses.
#[must_use]
pub fn is_stop(c: u8) -> bool {
    matches!(c, 0x00 | 0x03 | 0x1C..=0x1F)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_classes() {
        assert!(is_alpha(b'Q') && is_alpha(b'q'));
        assert!(is_upper(b'Q') && !is_upper(b'q'));
        assert!(is_lower(b'q') && !is_lower(b'Q'));
        assert!(!is_alpha(b'7'));
        assert!(!is_alpha(0xC3));
    }

    #[test]
    fn test_space_and_stop() {
        assert!(is_space(b' ') && is_space(b'\n') && is_space(b'\t'));
        assert!(is_stop(0x00) && is_stop(0x03) && is_stop(0x1E) && is_stop(0x1F));
        assert!(!is_stop(b' ') && !is_stop(0x1B));
        assert!(is_not_space(b'E') && is_not_space(b'.') && is_not_space(b','));
        assert!(!is_not_space(b' ') && !is_not_space(0x1F) && !is_not_space(0xE2));
    }

    #[test]
    fn test_punctuation() {
        assert!(is_point(b'.') && is_dash(b'-') && is_slash(b'/'));
        assert!(is_comma(b',') && is_colon(b':'));
        assert!(is_open_angle(b'<') && is_close_angle(b'>'));
        assert!(is_year_separator(b'-') && is_year_separator(b'/'));
        assert!(!is_year_separator(b'.'));
    }
}
