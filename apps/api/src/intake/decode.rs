//! Decoding cascade for uploaded text files: UTF-8, then Windows-1252, then
//! ISO-8859-1. Windows-1252 is strict (the five bytes the code page leaves
//! undefined count as failures); ISO-8859-1 maps every byte, so the cascade
//! always terminates with a decoded string plus the encoding that won.

use encoding_rs::WINDOWS_1252;

/// Code points 0x81, 0x8D, 0x8F, 0x90, 0x9D are undefined in Windows-1252.
const WINDOWS_1252_UNDEFINED: [u8; 5] = [0x81, 0x8D, 0x8F, 0x90, 0x9D];

pub fn decode_text(data: &[u8]) -> (String, &'static str) {
    if let Ok(s) = std::str::from_utf8(data) {
        return (s.to_string(), "utf-8");
    }

    if !data.iter().any(|b| WINDOWS_1252_UNDEFINED.contains(b)) {
        let (decoded, _, had_errors) = WINDOWS_1252.decode(data);
        if !had_errors {
            return (decoded.into_owned(), "windows-1252");
        }
    }

    // Latin-1 is the identity map from bytes to U+0000..U+00FF.
    (data.iter().map(|&b| b as char).collect(), "iso-8859-1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_utf8_decodes_first() {
        let (text, encoding) = decode_text("plain ascii and émojis 🎯".as_bytes());
        assert_eq!(encoding, "utf-8");
        assert!(text.contains("émojis"));
    }

    #[test]
    fn test_windows_1252_smart_quotes_use_second_attempt() {
        // 0x93/0x94 are curly quotes in Windows-1252 and invalid UTF-8 here.
        let bytes = b"said \x93hello\x94 to the team";
        let (text, encoding) = decode_text(bytes);
        assert_eq!(encoding, "windows-1252");
        assert_eq!(text, "said \u{201C}hello\u{201D} to the team");
    }

    #[test]
    fn test_undefined_1252_byte_falls_through_to_latin1() {
        let bytes = b"raw \x81 byte";
        let (text, encoding) = decode_text(bytes);
        assert_eq!(encoding, "iso-8859-1");
        assert!(text.contains('\u{0081}'));
    }

    #[test]
    fn test_latin1_decoding_is_total() {
        let all_bytes: Vec<u8> = (0..=255).collect();
        let (text, _) = decode_text(&all_bytes);
        assert_eq!(text.chars().count(), 256);
    }
}
