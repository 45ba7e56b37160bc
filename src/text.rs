//! Miscellaneous text helpers.
use std::collections::HashMap;

use regex::{Captures, Regex};

use crate::classify;

/// The character classes [`has_char_type`] looks for.
///
/// A class that is not wanted is trivially satisfied, so
/// `CharTypes::default()` is satisfied by every string.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CharTypes {
    pub upper: bool,
    pub lower: bool,
    pub digit: bool,
    pub punct: bool,
    pub symbol: bool,
}

impl CharTypes {
    pub fn new(upper: bool, lower: bool, digit: bool, punct: bool, symbol: bool) -> Self {
        Self {
            upper,
            lower,
            digit,
            punct,
            symbol,
        }
    }

    pub fn upper(mut self) -> Self {
        self.upper = true;
        self
    }

    pub fn lower(mut self) -> Self {
        self.lower = true;
        self
    }

    pub fn digit(mut self) -> Self {
        self.digit = true;
        self
    }

    pub fn punct(mut self) -> Self {
        self.punct = true;
        self
    }

    pub fn symbol(mut self) -> Self {
        self.symbol = true;
        self
    }

    /// True once every wanted class is present in `found`.
    fn satisfied_by(&self, found: &CharTypes) -> bool {
        (!self.upper || found.upper)
            && (!self.lower || found.lower)
            && (!self.digit || found.digit)
            && (!self.punct || found.punct)
            && (!self.symbol || found.symbol)
    }
}

/// Returns true if `s` has at least one character of every wanted class.
///
/// Each character counts toward at most one class, tried in the order
/// upper, lower, digit, punctuation, symbol. The scan stops as soon as all
/// wanted classes have been seen.
///
/// ```
/// use stringkit::text::{has_char_type, CharTypes};
///
/// assert!(has_char_type("aA", CharTypes::default().upper().lower()));
/// assert!(!has_char_type("a1", CharTypes::default().upper().lower()));
/// assert!(has_char_type("", CharTypes::default()));
/// ```
pub fn has_char_type(s: &str, want: CharTypes) -> bool {
    let mut found = CharTypes::default();
    if want.satisfied_by(&found) {
        return true;
    }

    for c in s.chars() {
        if want.upper && !found.upper && classify::is_upper(c) {
            found.upper = true;
        } else if want.lower && !found.lower && classify::is_lower(c) {
            found.lower = true;
        } else if want.digit && !found.digit && classify::is_digit(c) {
            found.digit = true;
        } else if want.punct && !found.punct && classify::is_punct(c) {
            found.punct = true;
        } else if want.symbol && !found.symbol && classify::is_symbol(c) {
            found.symbol = true;
        }

        if want.satisfied_by(&found) {
            return true;
        }
    }
    false
}

/// Returns the part of `s` between the first `left` and the last `right`.
///
/// `s` is returned unchanged if either delimiter is empty or missing, or if
/// the two matches overlap. Since the last `right` is used, the result may
/// itself contain `left` or `right`.
///
/// ```
/// use stringkit::text::between;
///
/// assert_eq!(between("Hello [world]!", "[", "]"), "world");
/// assert_eq!(between("Hello world!", "[", "]"), "Hello world!");
/// assert_eq!(between("[a] and [b]", "[", "]"), "a] and [b");
/// ```
pub fn between<'a>(s: &'a str, left: &str, right: &str) -> &'a str {
    if left.is_empty() || right.is_empty() {
        return s;
    }
    let (Some(start), Some(end)) = (s.find(left), s.rfind(right)) else {
        return s;
    };
    let inner = start + left.len();
    if start == end || end < inner {
        return s;
    }
    &s[inner..end]
}

/// Indents every line of `s` with a tab. Trailing tabs are trimmed, so a
/// trailing newline does not produce an indented empty line.
///
/// ```
/// use stringkit::text::indent;
///
/// assert_eq!(indent("a\nb"), "\ta\n\tb");
/// ```
pub fn indent(s: &str) -> String {
    let indented = format!("\t{}", s.replace('\n', "\n\t"));
    indented.trim_end_matches('\t').to_string()
}

/// True if every character is a letter. The empty string qualifies.
pub fn has_only_letters(s: &str) -> bool {
    s.chars().all(classify::is_letter)
}

/// Joins the non-empty items with `sep`.
///
/// ```
/// use stringkit::text::connect;
///
/// assert_eq!(connect("+", ["this", "", "that"]), "this+that");
/// ```
pub fn connect<I, S>(sep: &str, items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = String::new();
    for item in items {
        let item = item.as_ref();
        if item.is_empty() {
            continue;
        }
        if !result.is_empty() {
            result.push_str(sep);
        }
        result.push_str(item);
    }
    result
}

/// True if `haystack` contains any of the `needles`.
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Compares two strings under Unicode lowercase folding.
pub fn equal_case_insensitive(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Replaces each string of `search` with the string at the same position in
/// `replace`. Extra entries on either side are ignored.
///
/// See [`replace_old_new`] for how overlapping search strings are resolved.
pub fn replace_strings(s: &str, search: &[&str], replace: &[&str]) -> Result<String, regex::Error> {
    if search.len() != replace.len() {
        log::warn!(
            "replace_strings: {} search strings but {} replacements, ignoring the extra {}",
            search.len(),
            replace.len(),
            search.len().abs_diff(replace.len())
        );
    }
    let pairs: Vec<(&str, &str)> = search.iter().copied().zip(replace.iter().copied()).collect();
    replace_pairs(s, &pairs)
}

/// Replaces every `old` in `s` with the `new` that follows it, where
/// `old_new` is a flat list of `old, new, old, new, ...`. A trailing unpaired
/// entry is ignored.
///
/// Matches are found left to right without overlapping. When several old
/// strings match at the same position, the one listed first wins.
///
/// Empty old strings are skipped. They do not match at every position, so
/// their replacement is never inserted between characters or at either end
/// of `s`.
///
/// ```
/// use stringkit::text::replace_old_new;
///
/// let replaced = replace_old_new("abcabcabc", &["abc", "xyz", "a", "x"]).unwrap();
/// assert_eq!(replaced, "xyzxyzxyz");
/// assert_eq!(replace_old_new("ab", &["", "-"]).unwrap(), "ab");
/// ```
pub fn replace_old_new(s: &str, old_new: &[&str]) -> Result<String, regex::Error> {
    let pairs: Vec<(&str, &str)> = old_new
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .collect();
    replace_pairs(s, &pairs)
}

fn replace_pairs(s: &str, pairs: &[(&str, &str)]) -> Result<String, regex::Error> {
    let mut replacements: HashMap<&str, &str> = HashMap::new();
    let mut alternatives = vec![];
    for &(old, new) in pairs {
        if old.is_empty() || replacements.contains_key(old) {
            continue;
        }
        replacements.insert(old, new);
        alternatives.push(regex::escape(old));
    }
    if alternatives.is_empty() {
        return Ok(s.to_string());
    }

    // regex alternation is leftmost-first, so earlier pairs take priority
    let re = Regex::new(&alternatives.join("|"))?;
    let replaced = re.replace_all(s, |caps: &Captures<'_>| {
        replacements.get(&caps[0]).copied().unwrap_or_default()
    });
    Ok(replaced.into_owned())
}

/// Pluralizes the last word of `s` using the `pluralizer` dictionary. Words
/// are split on whitespace and rejoined with single spaces.
///
/// ```
/// use stringkit::text::plural;
///
/// assert_eq!(plural("red car"), "red cars");
/// assert_eq!(plural(""), "");
/// ```
pub fn plural(s: &str) -> String {
    let mut words: Vec<String> = s.split_whitespace().map(str::to_string).collect();
    let Some(last) = words.last_mut() else {
        return String::new();
    };
    *last = pluralizer::pluralize(last.as_str(), 2, false);
    words.join(" ")
}
