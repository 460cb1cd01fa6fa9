/// Check if a string starts with the given prefix.
///
/// Unlike [`str::starts_with`], an empty `prefix` never matches: the
/// generator treats an empty marker as "no marker", so both an empty `s`
/// and an empty `prefix` return `false`. The comparison is byte-exact and
/// case-sensitive.
///
/// # Examples
///
/// ```
/// use gyb_util::strings::starts_with;
///
/// assert!(starts_with("hello", "he"));
/// assert!(!starts_with("hello", "lo"));
/// assert!(!starts_with("hello", ""));
/// assert!(!starts_with("", "he"));
/// ```
pub fn starts_with(s: &str, prefix: &str) -> bool {
    if s.is_empty() || prefix.is_empty() || prefix.len() > s.len() {
        return false;
    }
    s.starts_with(prefix)
}

/// Check if a string ends with the given suffix.
///
/// Same guards as [`starts_with`]: an empty `s` or `suffix`, or a suffix
/// longer than `s`, returns `false`.
///
/// # Examples
///
/// ```
/// use gyb_util::strings::ends_with;
///
/// assert!(ends_with("hello", "lo"));
/// assert!(!ends_with("hello", "he"));
/// assert!(!ends_with("hello", ""));
/// ```
pub fn ends_with(s: &str, suffix: &str) -> bool {
    if s.is_empty() || suffix.is_empty() || suffix.len() > s.len() {
        return false;
    }
    s.ends_with(suffix)
}

/// Check if a string contains the given substring.
///
/// An empty `sub` is always found, consistent with [`str::contains`].
///
/// # Examples
///
/// ```
/// use gyb_util::strings::contains;
///
/// assert!(contains("hello world", "wor"));
/// assert!(!contains("hello", "xyz"));
/// assert!(contains("hello", ""));
/// ```
pub fn contains(s: &str, sub: &str) -> bool {
    s.contains(sub)
}
