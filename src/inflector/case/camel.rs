use super::*;

/// Converts a kebab-case `&str` to CamelCase `String`.
///
/// The character following each `-` (and the first character) is title
/// cased, every other character is lowercased, so the initial casing of the
/// input has no effect. Characters that are not letters are not word
/// boundaries, they only consume the pending capitalization.
///
/// ```
/// use stringkit::inflector::case::kebab_to_camel;
///
/// assert_eq!(kebab_to_camel("abc-def"), "AbcDef");
/// assert_eq!(kebab_to_camel("This-THAT"), "ThisThat");
/// assert_eq!(kebab_to_camel("123-abc"), "123Abc");
/// assert_eq!(kebab_to_camel("b-a"), "BA");
/// ```
pub fn kebab_to_camel(kebab_case: &str) -> String {
    let mut capitalize = true;
    kebab_case
        .chars()
        .filter_map(|character| {
            if character == KEBAB_SEPARATOR {
                capitalize = true;
                None
            } else if capitalize {
                capitalize = false;
                Some(classify::to_title(character))
            } else {
                Some(classify::to_lower(character))
            }
        })
        .collect()
}

/// Converts a snake_case `&str` to CamelCase `String` by way of
/// [`snake_to_kebab`] and [`kebab_to_camel`].
///
/// ```
/// use stringkit::inflector::case::snake_to_camel;
///
/// assert_eq!(snake_to_camel("hello_world"), "HelloWorld");
/// assert_eq!(snake_to_camel("a_b_c"), "ABC");
/// assert_eq!(snake_to_camel("with_numbers_123"), "WithNumbers123");
/// ```
pub fn snake_to_camel(snake_case: &str) -> String {
    kebab_to_camel(&snake_to_kebab(snake_case))
}

/// Converts camel, kebab, snake or space separated input to CamelCase.
/// Each word is run through [`kebab_to_camel`], so digits are kept.
///
/// ```
/// use stringkit::inflector::case::to_camel_case;
///
/// assert_eq!(to_camel_case("foo_bar"), "FooBar");
/// assert_eq!(to_camel_case("foo-bar"), "FooBar");
/// assert_eq!(to_camel_case("fooBar"), "FooBar");
/// assert_eq!(to_camel_case("HTTPServer"), "HttpServer");
/// assert_eq!(to_camel_case("hello world"), "HelloWorld");
/// assert_eq!(to_camel_case("file-v2"), "FileV2");
/// ```
pub fn to_camel_case(non_camelized_string: &str) -> String {
    split_words(non_camelized_string)
        .into_iter()
        .map(kebab_to_camel)
        .collect()
}

/// Determines if a `&str` is CamelCase: each word starts with exactly one
/// uppercase letter and there are no separators.
///
/// ```
/// use stringkit::inflector::case::is_camel_case;
///
/// assert!(is_camel_case("FooBarIsAReallyReallyLongString"));
/// assert!(is_camel_case(""));
/// assert!(is_camel_case("FileV2"));
///
/// assert!(!is_camel_case("fooBar"));
/// assert!(!is_camel_case("HTTPServer"));
/// assert!(!is_camel_case("foo-bar"));
/// assert!(!is_camel_case("Foo_Bar"));
/// ```
pub fn is_camel_case(test_string: &str) -> bool {
    to_camel_case(test_string) == test_string
}
