use super::*;

/// Converts a CamelCase `&str` to kebab-case `String`.
///
/// Anything that is not a letter is ignored. Runs of uppercase letters are
/// treated as one word.
///
/// ```
/// use stringkit::inflector::case::camel_to_kebab;
///
/// assert_eq!(camel_to_kebab("AbcDef"), "abc-def");
/// assert_eq!(camel_to_kebab("AbcDEFghi"), "abc-de-fghi");
/// assert_eq!(camel_to_kebab("ABC"), "abc");
/// assert_eq!(camel_to_kebab("a1b"), "ab");
/// ```
pub fn camel_to_kebab(camel_case: &str) -> String {
    to_separated_case(camel_case, KEBAB_SEPARATOR)
}

/// Converts snake_case to kebab-case. Only underscores are touched.
///
/// ```
/// use stringkit::inflector::case::snake_to_kebab;
///
/// assert_eq!(snake_to_kebab("abc_def"), "abc-def");
/// assert_eq!(snake_to_kebab("_B"), "-B");
/// ```
pub fn snake_to_kebab(snake_case: &str) -> String {
    snake_case.replace(SNAKE_SEPARATOR, "-")
}

/// Converts camel, kebab, snake or space separated input to kebab-case.
/// Unlike [`camel_to_kebab`], digits are kept.
///
/// ```
/// use stringkit::inflector::case::to_kebab_case;
///
/// assert_eq!(to_kebab_case("foo_bar"), "foo-bar");
/// assert_eq!(to_kebab_case("FooBar"), "foo-bar");
/// assert_eq!(to_kebab_case("Foo-Bar"), "foo-bar");
/// assert_eq!(to_kebab_case("file-v2"), "file-v2");
/// assert_eq!(to_kebab_case("foo bar"), "foo-bar");
/// ```
pub fn to_kebab_case(non_kebab_case_string: &str) -> String {
    join_lower_words(non_kebab_case_string, "-")
}

/// Determines if a `&str` is kebab-case: lowercase letters, digits and `-`
/// only.
///
/// ```
/// use stringkit::inflector::case::is_kebab_case;
///
/// assert!(is_kebab_case("foo-bar-string-that-is-really-really-long"));
/// assert!(is_kebab_case("foo-bar1"));
/// assert!(!is_kebab_case("foo_bar"));
/// assert!(!is_kebab_case("FooBar"));
/// ```
pub fn is_kebab_case(test_string: &str) -> bool {
    is_lower_separated(test_string, KEBAB_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::camel_to_kebab;
    use super::is_kebab_case;
    use super::kebab_to_camel;
    use super::snake_to_kebab;
    use super::to_kebab_case;

    #[test]
    fn from_camel_case() {
        let cases = [
            ("", ""),
            ("a", "a"),
            ("A", "a"),
            ("ab", "ab"),
            ("AB", "ab"),
            ("Ab", "ab"),
            ("aB", "a-b"),
            ("Abc", "abc"),
            ("AbC", "ab-c"),
            ("ABc", "a-bc"),
            ("a1b", "ab"),
            ("ABC", "abc"),
            ("ABCd", "ab-cd"),
            ("ABCdE", "ab-cd-e"),
            ("AbcDef", "abc-def"),
            ("AbcDEFghi", "abc-de-fghi"),
        ];
        for (input, expected) in cases {
            assert_eq!(camel_to_kebab(input), expected, "camel_to_kebab({input:?})");
        }
    }

    #[test]
    fn spaces_and_punctuation_are_dropped() {
        assert_eq!(camel_to_kebab("Foo Bar!"), "foo-bar");
        assert_eq!(camel_to_kebab("foo bar"), "foobar");
    }

    #[test]
    fn output_has_no_uppercase() {
        for input in ["ABC", "AbcDEFghi", "ÀÉÎõü", "XMLHttpRequest", "aBcDeF"] {
            let kebab = camel_to_kebab(input);
            assert!(!kebab.chars().any(char::is_uppercase), "{input} -> {kebab}");
        }
    }

    #[test]
    fn output_never_doubles_separator() {
        for input in ["A-B", "a--B", "ABCdEFgHI", "-Abc", "X-Y-Z"] {
            let kebab = camel_to_kebab(input);
            assert!(!kebab.contains("--"), "{input} -> {kebab}");
            assert!(!kebab.starts_with('-'), "{input} -> {kebab}");
        }
    }

    #[test]
    fn round_trip_is_stable() {
        for input in [
            "AbcDef",
            "AbcDEFghi",
            "ABCd",
            "XMLHttpRequest",
            "ManagerID",
            "simple",
        ] {
            let kebab = camel_to_kebab(input);
            assert_eq!(camel_to_kebab(&kebab_to_camel(&kebab)), kebab, "{input}");
        }
    }

    #[test]
    fn snake_to_kebab_only_touches_underscores() {
        assert_eq!(snake_to_kebab(""), "");
        assert_eq!(snake_to_kebab("a_b"), "a-b");
        assert_eq!(snake_to_kebab("-b"), "-b");
        assert_eq!(snake_to_kebab("_b"), "-b");
        assert_eq!(snake_to_kebab("Mixed_Case"), "Mixed-Case");
    }

    #[test]
    fn is_correct_from_kebab_case() {
        assert!(is_kebab_case("foo-bar"))
    }

    #[test]
    fn is_correct_from_camel_case() {
        assert!(!is_kebab_case("fooBar"))
    }

    #[test]
    fn is_correct_from_snake_case() {
        assert!(!is_kebab_case("foo_bar"))
    }

    #[test]
    fn is_correct_from_empty() {
        assert!(is_kebab_case(""))
    }

    #[test]
    fn is_correct_with_stray_separators() {
        assert!(is_kebab_case("-foo"));
        assert!(is_kebab_case("foo-"));
        assert!(is_kebab_case("foo--bar"));
        assert!(is_kebab_case("-"));
    }

    #[test]
    fn to_kebab_case_collapses_stray_separators() {
        assert_eq!(to_kebab_case("-foo"), "foo");
        assert_eq!(to_kebab_case("foo--bar"), "foo-bar");
    }
}
