//! Character classification by Unicode general category.
//!
//! `char::is_uppercase` and friends follow the derived Unicode properties,
//! which count things like `Ⓐ` as uppercase. The case converters work on
//! word boundaries between *letters*, so everything here is keyed on the
//! general category instead: a letter is `L*`, uppercase is `Lu`, lowercase
//! is `Ll`. Titlecase letters such as `ǅ` are letters but neither upper nor
//! lower.
use unicode_general_category::{get_general_category, GeneralCategory};

/// Letter (`Lu`, `Ll`, `Lt`, `Lm`, `Lo`).
pub fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Uppercase letter (`Lu`).
pub fn is_upper(c: char) -> bool {
    get_general_category(c) == GeneralCategory::UppercaseLetter
}

/// Lowercase letter (`Ll`).
pub fn is_lower(c: char) -> bool {
    get_general_category(c) == GeneralCategory::LowercaseLetter
}

/// Decimal digit (`Nd`).
pub fn is_digit(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
}

/// Any number (`Nd`, `Nl`, `No`), so `½` and `Ⅻ` count too.
pub fn is_number(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::DecimalNumber | GeneralCategory::LetterNumber | GeneralCategory::OtherNumber
    )
}

/// Punctuation (`P*`). Note that `$`, `+` and `^` are symbols, not punctuation.
pub fn is_punct(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
    )
}

/// Symbol (`S*`).
pub fn is_symbol(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::MathSymbol
            | GeneralCategory::CurrencySymbol
            | GeneralCategory::ModifierSymbol
            | GeneralCategory::OtherSymbol
    )
}

/// Lowercase mapping restricted to a single code point.
///
/// Characters whose full mapping expands to several code points (`İ`) are
/// returned unchanged, so the converters always emit one code point per input
/// letter.
pub fn to_lower(c: char) -> char {
    single(c, c.to_lowercase())
}

/// Uppercase mapping restricted to a single code point (`ß` stays `ß`).
pub fn to_upper(c: char) -> char {
    single(c, c.to_uppercase())
}

/// Titlecase mapping. Identical to [`to_upper`] except for the four Latin
/// digraphs that have a dedicated titlecase form.
pub fn to_title(c: char) -> char {
    match c {
        '\u{01C4}'..='\u{01C6}' => '\u{01C5}',
        '\u{01C7}'..='\u{01C9}' => '\u{01C8}',
        '\u{01CA}'..='\u{01CC}' => '\u{01CB}',
        '\u{01F1}'..='\u{01F3}' => '\u{01F2}',
        _ => to_upper(c),
    }
}

fn single(c: char, mut mapped: impl Iterator<Item = char>) -> char {
    match (mapped.next(), mapped.next()) {
        (Some(m), None) => m,
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters() {
        assert!(is_letter('a'));
        assert!(is_letter('Ä'));
        assert!(is_letter('ǅ'));
        assert!(is_letter('字'));
        assert!(!is_letter('1'));
        assert!(!is_letter('-'));
        assert!(!is_letter(' '));
    }

    #[test]
    fn case_of_letters() {
        assert!(is_upper('A'));
        assert!(is_upper('Ω'));
        assert!(!is_upper('a'));
        assert!(is_lower('ß'));
        assert!(!is_lower('A'));
        // titlecase digraph is neither
        assert!(!is_upper('ǅ'));
        assert!(!is_lower('ǅ'));
        // circled letters are symbols, not letters
        assert!(!is_upper('Ⓐ'));
    }

    #[test]
    fn digits_and_numbers() {
        assert!(is_digit('7'));
        assert!(is_digit('٣'));
        assert!(!is_digit('½'));
        assert!(is_number('½'));
        assert!(is_number('Ⅻ'));
        assert!(!is_number('x'));
    }

    #[test]
    fn punctuation_and_symbols() {
        for c in [',', '.', '!', '-', '_', '(', '"', '¿'] {
            assert!(is_punct(c), "{c:?} should be punctuation");
            assert!(!is_symbol(c), "{c:?} should not be a symbol");
        }
        for c in ['$', '+', '^', '<', '|', '€', '©'] {
            assert!(is_symbol(c), "{c:?} should be a symbol");
            assert!(!is_punct(c), "{c:?} should not be punctuation");
        }
    }

    #[test]
    fn single_code_point_mappings() {
        assert_eq!(to_lower('A'), 'a');
        assert_eq!(to_lower('a'), 'a');
        assert_eq!(to_lower('1'), '1');
        assert_eq!(to_lower('İ'), 'İ');
        assert_eq!(to_upper('ß'), 'ß');
        assert_eq!(to_upper('é'), 'É');
    }

    #[test]
    fn title_of_digraphs() {
        assert_eq!(to_title('ǆ'), 'ǅ');
        assert_eq!(to_title('Ǆ'), 'ǅ');
        assert_eq!(to_title('ǉ'), 'ǈ');
        assert_eq!(to_title('ǌ'), 'ǋ');
        assert_eq!(to_title('ǳ'), 'ǲ');
        assert_eq!(to_title('a'), 'A');
    }
}
