use crate::classify;

/// Provides conversion to and detection of camel case strings.
///
/// Example string `CamelCase`
pub mod camel;
pub use camel::is_camel_case;
pub use camel::kebab_to_camel;
pub use camel::snake_to_camel;
pub use camel::to_camel_case;

/// Provides conversion to and detection of snake case strings.
///
/// Example string `snake_case`
pub mod snake;
pub use snake::camel_to_snake;
pub use snake::is_snake_case;
pub use snake::to_snake_case;

/// Provides conversion to and detection of kebab case strings.
///
/// Example string `kebab-case`
pub mod kebab;
pub use kebab::camel_to_kebab;
pub use kebab::is_kebab_case;
pub use kebab::snake_to_kebab;
pub use kebab::to_kebab_case;

/// Provides conversion to and detection of title case strings.
///
/// Example string `Title Case`
pub mod title;
pub use title::decap;
pub use title::is_title_case;
pub use title::to_title_case;

pub const KEBAB_SEPARATOR: char = '-';
pub const SNAKE_SEPARATOR: char = '_';

/// The casings understood by [`Case::convert`] and [`Case::matches`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Case {
    Camel,
    Kebab,
    Snake,
    Title,
}

impl Case {
    /// Converts `s` to this casing. Input that already uses it is returned
    /// as is, so separators the converters would collapse (`foo--bar`) stay.
    pub fn convert(self, s: &str) -> String {
        if self.matches(s) {
            return s.to_string();
        }
        match self {
            Case::Camel => to_camel_case(s),
            Case::Kebab => to_kebab_case(s),
            Case::Snake => to_snake_case(s),
            Case::Title => to_title_case(s),
        }
    }

    pub fn matches(self, s: &str) -> bool {
        match self {
            Case::Camel => is_camel_case(s),
            Case::Kebab => is_kebab_case(s),
            Case::Snake => is_snake_case(s),
            Case::Title => is_title_case(s),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Case::Camel => "camel",
            Case::Kebab => "kebab",
            Case::Snake => "snake",
            Case::Title => "title",
        }
    }
}

impl std::fmt::Display for Case {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Converts CamelCase into words joined by `separator`, all lowercase.
///
/// Characters that are not letters are dropped and never start a new word.
/// A run of uppercase letters is a single word, except that when the run is
/// followed by a lowercase letter its final uppercase letter starts the next
/// word (`ABCd` becomes `ab-cd`).
#[doc(hidden)]
pub fn to_separated_case(camel_case: &str, separator: char) -> String {
    let mut result: Vec<char> = Vec::with_capacity(camel_case.len() * 2);
    let mut in_upper = false;

    for character in camel_case.chars() {
        if !classify::is_letter(character) {
            continue;
        }
        if classify::is_upper(character) {
            if !result.is_empty() && !in_upper {
                result.push(separator);
            }
            result.push(classify::to_lower(character));
            in_upper = true;
        } else {
            if in_upper {
                split_off_last(&mut result, separator);
            }
            result.push(character);
            in_upper = false;
        }
    }

    result.into_iter().collect()
}

/// Moves the last character of an uppercase run into a word of its own by
/// inserting `separator` in front of it. Runs of one are left alone.
fn split_off_last(result: &mut Vec<char>, separator: char) {
    let len = result.len();
    if len > 1 && result[len - 2] != separator {
        let last = result[len - 1];
        result[len - 1] = separator;
        result.push(last);
    }
}

/// True if every character is a lowercase letter, a digit or `separator`.
#[doc(hidden)]
pub fn is_lower_separated(test_string: &str, separator: char) -> bool {
    test_string
        .chars()
        .all(|c| c == separator || classify::is_lower(c) || classify::is_digit(c))
}

/// Lowercases the words of `s` and joins them with `separator`. Digits stay
/// in the word they appear in.
fn join_lower_words(s: &str, separator: &str) -> String {
    split_words(s)
        .into_iter()
        .map(|word| word.chars().map(classify::to_lower).collect::<String>())
        .collect::<Vec<_>>()
        .join(separator)
}

fn is_word_separator(c: char) -> bool {
    c == KEBAB_SEPARATOR || c == SNAKE_SEPARATOR || c.is_whitespace()
}

/// Splits `s` into words, keeping the original spelling of each word.
///
/// `-`, `_` and whitespace separate words and are not part of any word. Inside
/// a word, an uppercase letter that does not continue an uppercase run starts
/// a new word, and a lowercase letter following a run of two or more
/// uppercase letters takes the last letter of the run with it.
#[doc(hidden)]
pub fn split_words(s: &str) -> Vec<&str> {
    let mut words = vec![];
    let mut start: Option<usize> = None;
    let mut last = 0;
    let mut upper_run = 0;

    for (idx, character) in s.char_indices() {
        if is_word_separator(character) {
            if let Some(start) = start.take() {
                words.push(&s[start..idx]);
            }
            upper_run = 0;
            continue;
        }
        match start {
            None => start = Some(idx),
            Some(word_start) => {
                if classify::is_upper(character) && upper_run == 0 {
                    words.push(&s[word_start..idx]);
                    start = Some(idx);
                } else if classify::is_lower(character) && upper_run > 1 {
                    words.push(&s[word_start..last]);
                    start = Some(last);
                }
            }
        }
        upper_run = if classify::is_upper(character) {
            upper_run + 1
        } else {
            0
        };
        last = idx;
    }
    if let Some(start) = start {
        words.push(&s[start..]);
    }
    words
}

#[test]
fn test_to_separated_case_with_custom_separator() {
    assert_eq!(to_separated_case("AbcDEFghi", '.'), "abc.de.fghi")
}

#[test]
fn test_to_separated_case_never_starts_with_separator() {
    assert_eq!(to_separated_case("1Abc", '-'), "abc");
    assert_eq!(to_separated_case("  Abc Def", '-'), "abc-def");
}

#[test]
fn test_to_separated_case_drops_non_letters() {
    assert_eq!(to_separated_case("a b-c_d", '-'), "abcd");
    assert_eq!(to_separated_case("Abc 1Def", '_'), "abc_def");
}

#[test]
fn test_to_separated_case_unicode_letters() {
    assert_eq!(to_separated_case("ÄbcÖÜx", '-'), "äbc-ö-üx");
    assert_eq!(to_separated_case("日本Go", '-'), "日本-go");
}

#[test]
fn test_to_separated_case_titlecase_letter_joins_word() {
    assert_eq!(to_separated_case("Aǅ", '-'), "aǅ");
}

#[test]
fn test_split_off_last_single_char() {
    let mut result = vec!['a'];
    split_off_last(&mut result, '-');
    assert_eq!(result, vec!['a'])
}

#[test]
fn test_split_off_last_after_separator() {
    let mut result = vec!['a', '-', 'b'];
    split_off_last(&mut result, '-');
    assert_eq!(result, vec!['a', '-', 'b'])
}

#[test]
fn test_split_off_last_in_run() {
    let mut result = vec!['a', 'b', 'c'];
    split_off_last(&mut result, '-');
    assert_eq!(result, vec!['a', 'b', '-', 'c'])
}

#[test]
fn test_is_lower_separated() {
    assert!(is_lower_separated("a.b.1", '.'));
    assert!(!is_lower_separated("a-b", '.'));
    assert!(is_lower_separated("", '.'));
}

#[test]
fn test_is_word_separator() {
    assert!(is_word_separator('-'));
    assert!(is_word_separator('_'));
    assert!(is_word_separator('\t'));
    assert!(!is_word_separator('A'));
}

#[test]
fn test_split_words_camel() {
    assert_eq!(split_words("ManagerID"), vec!["Manager", "ID"]);
    assert_eq!(split_words("ILike Kiwis"), vec!["I", "Like", "Kiwis"]);
    assert_eq!(split_words("iJK"), vec!["i", "JK"]);
}

#[test]
fn test_split_words_separators() {
    assert_eq!(split_words("do_i_seeYou"), vec!["do", "i", "see", "You"]);
    assert_eq!(split_words("--a__b  "), vec!["a", "b"]);
    assert!(split_words("").is_empty());
}

#[test]
fn test_split_words_keeps_digits_in_word() {
    assert_eq!(split_words("abc123Def"), vec!["abc123", "Def"]);
}

#[test]
fn test_join_lower_words() {
    assert_eq!(join_lower_words("fooBar", "_"), "foo_bar");
    assert_eq!(join_lower_words("HTTPServer2", "-"), "http-server2");
    assert_eq!(join_lower_words("foo bar\tbaz", "-"), "foo-bar-baz");
    assert_eq!(join_lower_words("", "-"), "");
}

#[cfg(test)]
const CASES: [Case; 4] = [Case::Camel, Case::Kebab, Case::Snake, Case::Title];

#[test]
fn test_case_convert_and_matches() {
    let inputs = [
        "managerId",
        "snake_case_123",
        "file-v2",
        "foo bar",
        "hello world",
        "HTTPServer2Go",
        "Version 10 Notes",
        "already-kebab-42",
    ];
    for case in CASES {
        for input in inputs {
            let converted = case.convert(input);
            assert!(case.matches(&converted), "{case}: {input} -> {converted}");
        }
    }
}

#[test]
fn test_case_convert_keeps_digits_and_spaces() {
    assert_eq!(Case::Snake.convert("FileV2"), "file_v2");
    assert_eq!(Case::Kebab.convert("foo bar"), "foo-bar");
    assert_eq!(Case::Kebab.convert("snake_case_123"), "snake-case-123");
    assert_eq!(Case::Camel.convert("hello world"), "HelloWorld");
    assert_eq!(Case::Camel.convert("file-v2"), "FileV2");
    assert_eq!(Case::Title.convert("hello world"), "Hello World");
}

#[test]
fn test_case_convert_leaves_matching_input_alone() {
    let inputs = [
        "",
        "snake_case_123",
        "file-v2",
        "foo bar",
        "FooBar",
        "FileV2",
        "Foo Bar",
        "foo--bar",
        "-foo",
        "_",
        "snake__case_",
        "123",
    ];
    for case in CASES {
        for input in inputs {
            if case.matches(input) {
                assert_eq!(case.convert(input), input, "{case}");
            }
        }
    }
}

#[test]
fn test_converters_are_stable_on_their_output() {
    for input in ["snake_case_123", "file-v2", "FileV2", "HTTPServer2Go", "version 2 notes"] {
        let snake = to_snake_case(input);
        assert_eq!(to_snake_case(&snake), snake, "{input}");
        let kebab = to_kebab_case(input);
        assert_eq!(to_kebab_case(&kebab), kebab, "{input}");
        let camel = to_camel_case(input);
        assert_eq!(to_camel_case(&camel), camel, "{input}");
    }
}
