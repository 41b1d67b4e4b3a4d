//! Decoding of byte-escaped names
//!
//! The director and crew name fields of the catalog sometimes carry literal escape
//! sequences (`Pedro Almod\xf3var`, `Bj\u00f6rk`) instead of the characters they stand
//! for. Only display names are decoded; join keys keep the raw text.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

// Surrogate pairs are listed first so they win over the single \u form.
static ESCAPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\\u([dD][89abAB][0-9a-fA-F]{2})\\u([dD][c-fC-F][0-9a-fA-F]{2})|\\u([0-9a-fA-F]{4})|\\U([0-9a-fA-F]{8})|\\x([0-9a-fA-F]{2})|\\([\\'\x22ntr])",
    )
    .unwrap()
});

/// Replace escape sequences with the characters they encode.
///
/// Text that already holds non-ASCII characters is left alone, and so is any
/// escape that does not name a valid scalar value.
pub fn decode_escapes(raw: &str) -> Cow<'_, str> {
    if !raw.contains('\\') {
        return Cow::Borrowed(raw);
    }
    ESCAPE_REGEX.replace_all(raw, |caps: &Captures| {
        let whole = &caps[0];
        let decoded = if let (Some(high), Some(low)) = (caps.get(1), caps.get(2)) {
            let high = u32::from_str_radix(high.as_str(), 16).unwrap_or(0);
            let low = u32::from_str_radix(low.as_str(), 16).unwrap_or(0);
            char::from_u32(0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00))
        } else if let Some(hex) = caps.get(3).or_else(|| caps.get(4)).or_else(|| caps.get(5)) {
            u32::from_str_radix(hex.as_str(), 16).ok().and_then(char::from_u32)
        } else {
            match &caps[6] {
                "n" => Some('\n'),
                "t" => Some('\t'),
                "r" => Some('\r'),
                other => other.chars().next(),
            }
        };
        decoded.map_or_else(|| whole.to_string(), String::from)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_names_are_borrowed() {
        assert!(matches!(decode_escapes("James Cameron"), Cow::Borrowed(_)));
        assert!(matches!(decode_escapes("Pedro Almodóvar"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_hex_and_unicode_escapes() {
        assert_eq!(decode_escapes(r"Pedro Almod\xf3var"), "Pedro Almodóvar");
        assert_eq!(decode_escapes(r"Bj\u00f6rk"), "Björk");
        assert_eq!(
            decode_escapes(r"Alejandro Gonz\u00e1lez I\u00f1\u00e1rritu"),
            "Alejandro González Iñárritu"
        );
        assert_eq!(decode_escapes(r"\U0001F3AC"), "🎬");
    }

    #[test]
    fn test_surrogate_pair() {
        assert_eq!(decode_escapes(r"\ud83c\udfac"), "🎬");
    }

    #[test]
    fn test_simple_escapes() {
        assert_eq!(decode_escapes(r"O\'Brien"), "O'Brien");
        assert_eq!(decode_escapes(r"back\\slash"), r"back\slash");
    }

    #[test]
    fn test_lone_surrogate_is_kept() {
        assert_eq!(decode_escapes(r"bad \udc00 half"), r"bad \udc00 half");
    }
}
