use super::*;

/// Converts a CamelCase `&str` to snake_case `String`.
///
/// Anything that is not a letter is ignored. Runs of uppercase letters are
/// treated as one word, and a run followed by lowercase letters gives its
/// final letter to the lowercase word.
///
/// ```
/// use stringkit::inflector::case::camel_to_snake;
///
/// assert_eq!(camel_to_snake("AbcDef"), "abc_def");
/// assert_eq!(camel_to_snake("AbcDEFghi"), "abc_de_fghi");
/// ```
pub fn camel_to_snake(camel_case: &str) -> String {
    to_separated_case(camel_case, SNAKE_SEPARATOR)
}

/// Converts camel, kebab, snake or space separated input to snake_case.
/// Unlike [`camel_to_snake`], digits are kept.
///
/// ```
/// use stringkit::inflector::case::to_snake_case;
///
/// assert_eq!(to_snake_case("foo-bar"), "foo_bar");
/// assert_eq!(to_snake_case("FooBar"), "foo_bar");
/// assert_eq!(to_snake_case("fooBar"), "foo_bar");
/// assert_eq!(to_snake_case("snake_case_123"), "snake_case_123");
/// assert_eq!(to_snake_case("foo bar"), "foo_bar");
/// ```
pub fn to_snake_case(non_snake_case_string: &str) -> String {
    join_lower_words(non_snake_case_string, "_")
}

/// Determines if a `&str` is snake_case: every character is a lowercase
/// letter, a digit or `_`. The empty string is snake case.
///
/// ```
/// use stringkit::inflector::case::is_snake_case;
///
/// assert!(is_snake_case("snake_case_123"));
/// assert!(is_snake_case(""));
/// assert!(!is_snake_case("Snake_Case"));
/// ```
pub fn is_snake_case(test_string: &str) -> bool {
    is_lower_separated(test_string, SNAKE_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::camel_to_snake;
    use super::is_snake_case;

    #[test]
    fn from_camel_case() {
        assert_eq!(camel_to_snake("AbcDef"), "abc_def");
        assert_eq!(camel_to_snake("AbcDEFghi"), "abc_de_fghi");
        assert_eq!(camel_to_snake("ABCd"), "ab_cd");
        assert_eq!(camel_to_snake(""), "");
    }

    #[test]
    fn is_correct_from_snake_case() {
        assert!(is_snake_case("valid_snake_case"))
    }

    #[test]
    fn is_correct_with_uppercase() {
        assert!(!is_snake_case("Invalid_Snake_Case"))
    }

    #[test]
    fn is_correct_with_special_characters() {
        assert!(!is_snake_case("snake_case@123"))
    }

    #[test]
    fn is_correct_with_spaces() {
        assert!(!is_snake_case("snake case"))
    }

    #[test]
    fn is_correct_with_only_numbers() {
        assert!(is_snake_case("12345"))
    }

    #[test]
    fn is_correct_from_empty() {
        assert!(is_snake_case(""))
    }

    #[test]
    fn is_correct_with_consecutive_underscores() {
        assert!(is_snake_case("snake__case"))
    }

    #[test]
    fn is_correct_with_trailing_underscore() {
        assert!(is_snake_case("snake_case_"))
    }

    #[test]
    fn is_correct_with_single_underscore() {
        assert!(is_snake_case("_"))
    }

    #[test]
    fn is_correct_from_kebab_case() {
        assert!(!is_snake_case("snake-case"))
    }
}
