use std::str::FromStr;

use crate::classify;

/// Keeps only the numeric characters of `s`.
///
/// ```
/// use stringkit::numbers::extract_numbers;
///
/// assert_eq!(extract_numbers("a1b2 c3"), "123");
/// ```
pub fn extract_numbers(s: &str) -> String {
    s.chars().filter(|&c| classify::is_number(c)).collect()
}

/// Parses a base 10 integer, returning zero for anything that does not fit
/// `T`: invalid digits, overflow, or a sign on an unsigned type.
///
/// ```
/// use stringkit::numbers::atoi;
///
/// assert_eq!(atoi::<u8>("23"), 23);
/// assert_eq!(atoi::<u8>("256"), 0);
/// assert_eq!(atoi::<i8>("-128"), -128);
/// ```
pub fn atoi<T>(s: &str) -> T
where
    T: FromStr + Default,
{
    s.parse().unwrap_or_default()
}
