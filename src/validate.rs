//! Validation and cleanup of raw input.

/// True if every character is 7-bit ASCII.
pub fn is_ascii(s: &str) -> bool {
    s.is_ascii()
}

/// True if `bytes` is well-formed UTF-8.
pub fn is_utf8_bytes(bytes: &[u8]) -> bool {
    std::str::from_utf8(bytes).is_ok()
}

/// True if `s` is a base 10 integer with an optional sign that fits in an
/// `i64`.
pub fn is_int(s: &str) -> bool {
    s.parse::<i64>().is_ok()
}

/// True if `s` parses as a 64 bit float. Integers are valid floats.
pub fn is_float(s: &str) -> bool {
    s.parse::<f64>().is_ok()
}

/// Removes every `\r` and `\n`.
pub fn strip_newlines(s: &str) -> String {
    s.chars().filter(|&c| c != '\n' && c != '\r').collect()
}

/// Removes every NUL character.
pub fn strip_nulls(s: &str) -> String {
    s.replace('\0', "")
}

/// True if `s` contains a NUL character.
pub fn has_null(s: &str) -> bool {
    s.contains('\0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii() {
        let cases = [
            ("Hello, World!", true),
            ("こんにちは", false),
            ("12345", true),
            ("", true),
            ("abc\u{80}", false),
            ("\x7F\x7E", true),
        ];
        for (input, expected) in cases {
            assert_eq!(is_ascii(input), expected, "is_ascii({input:?})");
        }
    }

    #[test]
    fn utf8_bytes() {
        let cases: [(&[u8], bool); 5] = [
            (b"Hello, World!", true),
            ("こんにちは".as_bytes(), true),
            (&[0xff, 0xfe, 0xfd], false),
            (b"12345", true),
            (&[], true),
        ];
        for (input, expected) in cases {
            assert_eq!(is_utf8_bytes(input), expected, "is_utf8_bytes({input:?})");
        }
    }

    #[test]
    fn int() {
        let cases = [
            ("123", true),
            ("-123", true),
            ("+123", true),
            ("123.45", false),
            ("abc", false),
            ("", false),
        ];
        for (input, expected) in cases {
            assert_eq!(is_int(input), expected, "is_int({input:?})");
        }
    }

    #[test]
    fn float() {
        let cases = [
            ("123.45", true),
            ("-123.45", true),
            ("+123.45", true),
            ("123", true),
            ("abc", false),
            ("", false),
        ];
        for (input, expected) in cases {
            assert_eq!(is_float(input), expected, "is_float({input:?})");
        }
    }

    #[test]
    fn newlines() {
        assert_eq!(strip_newlines("Hello\nWorld"), "HelloWorld");
        assert_eq!(strip_newlines("Hello\r\nWorld"), "HelloWorld");
        assert_eq!(strip_newlines("Hello World"), "Hello World");
        assert_eq!(strip_newlines("\n\r\n\r"), "");
        assert_eq!(strip_newlines(""), "");
    }

    #[test]
    fn nulls() {
        assert_eq!(strip_nulls("Hello\0World"), "HelloWorld");
        assert_eq!(strip_nulls("Hello World"), "Hello World");
        assert_eq!(strip_nulls("\0\0\0"), "");
        assert_eq!(strip_nulls(""), "");

        assert!(has_null("Hello\0World"));
        assert!(!has_null("Hello World"));
        assert!(has_null("\0"));
        assert!(!has_null(""));
    }
}
