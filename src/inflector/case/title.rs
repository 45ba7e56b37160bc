use super::*;

/// Converts a `&str` to `Title Case` `String`.
///
/// Words are split on `-`, `_`, whitespace and camel case boundaries. The
/// first letter of each word is capitalized and the rest is left alone, so
/// acronyms survive.
///
/// ```
/// use stringkit::inflector::case::to_title_case;
///
/// assert_eq!(to_title_case("do_i_seeYou"), "Do I See You");
/// assert_eq!(to_title_case("ManagerID"), "Manager ID");
/// assert_eq!(to_title_case("ILike Kiwis"), "I Like Kiwis");
/// ```
pub fn to_title_case(non_title_case_string: &str) -> String {
    split_words(non_title_case_string)
        .into_iter()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Determines if a `&str` is `Title Case`.
///
/// ```
/// use stringkit::inflector::case::is_title_case;
///
/// assert!(is_title_case("Foo Bar String"));
/// assert!(is_title_case("Manager ID"));
/// assert!(!is_title_case("foo bar"));
/// assert!(!is_title_case("FooBar"));
/// ```
pub fn is_title_case(test_string: &str) -> bool {
    test_string == to_title_case(test_string)
}

/// Lowercases the leading run of uppercase letters.
///
/// ```
/// use stringkit::inflector::case::decap;
///
/// assert_eq!(decap("AbcDef"), "abcDef");
/// assert_eq!(decap("IDsFor"), "idsFor");
/// ```
pub fn decap(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut leading = true;
    for character in s.chars() {
        if leading && classify::is_upper(character) {
            result.push(classify::to_lower(character));
        } else {
            leading = false;
            result.push(character);
        }
    }
    result
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut result = String::with_capacity(word.len());
            result.push(classify::to_title(first));
            result.push_str(chars.as_str());
            result
        }
        None => String::new(),
    }
}
