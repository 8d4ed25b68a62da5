#[cfg_attr(not(feature = "no-inline"), inline)]
#[must_use]
pub fn is_break(c: char) -> bool {
    matches!(c, '\r' | '\n' | '\u{85}' | '\u{2028}' | '\u{2029}')
}

/// Break or the `'\0'` end marker.
#[cfg_attr(not(feature = "no-inline"), inline)]
#[must_use]
pub fn is_breakz(c: char) -> bool {
    c == '\0' || is_break(c)
}

#[cfg_attr(not(feature = "no-inline"), inline)]
#[must_use]
pub fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

#[cfg_attr(not(feature = "no-inline"), inline)]
#[must_use]
pub fn is_blank_or_break(c: char) -> bool {
    is_blank(c) || is_break(c)
}

#[cfg_attr(not(feature = "no-inline"), inline)]
#[must_use]
pub fn is_blank_or_breakz(c: char) -> bool {
    is_blank(c) || is_breakz(c)
}

#[must_use]
pub fn is_flow(c: char) -> bool {
    matches!(c, ',' | '[' | ']' | '{' | '}')
}

/// Printable characters of a YAML 1.1 stream. Line breaks and tab are not printable.
#[must_use]
pub fn is_printable(c: char) -> bool {
    matches!(
        c,
        '\u{20}'..='\u{7E}'
            | '\u{85}'
            | '\u{A0}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Characters allowed anywhere in a YAML stream.
#[must_use]
pub fn is_stream_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r') || is_printable(c)
}

#[inline]
#[must_use]
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Check whether the character is a valid URI character.
#[inline]
#[must_use]
pub fn is_uri_char(c: char) -> bool {
    is_word_char(c) || "#;/?:@&=+$,.!~*'()[]%".contains(c)
}

/// URI characters that may appear in a tag shorthand suffix.
#[must_use]
pub fn is_tag_char(c: char) -> bool {
    is_uri_char(c) && !is_flow(c) && c != '!'
}

#[inline]
#[must_use]
pub fn as_hex(c: char) -> Option<u32> {
    c.to_digit(16)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn printable_ranges() {
        assert!(is_printable('a'));
        assert!(is_printable('\u{85}'));
        assert!(is_printable('ж'));
        assert!(is_printable('😀'));
        assert!(!is_printable('\n'));
        assert!(!is_printable('\t'));
        assert!(!is_printable('\u{7F}'));
        assert!(!is_printable('\u{9F}'));
        assert!(!is_printable('\u{FFFE}'));
        assert!(is_stream_char('\t'));
        assert!(!is_stream_char('\u{1}'));
    }

    #[test]
    fn breaks() {
        assert!(is_break('\u{2028}'));
        assert!(is_breakz('\0'));
        assert!(!is_break('\0'));
        assert!(is_blank_or_breakz(' '));
        assert!(!is_blank_or_breakz('x'));
    }

    #[test]
    fn tag_chars() {
        assert!(is_uri_char('%'));
        assert!(is_tag_char(':'));
        assert!(!is_tag_char(','));
        assert!(!is_tag_char('!'));
        assert_eq!(as_hex('F'), Some(15));
        assert_eq!(as_hex('g'), None);
    }
}
