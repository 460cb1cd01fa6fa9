/// Split a description into lines with the outer whitespace removed.
///
/// The whole string is trimmed once before splitting on `'\n'`; interior
/// lines keep their own leading and trailing whitespace. An empty
/// description yields an empty vector.
///
/// # Examples
///
/// ```
/// use gyb_util::strings::dedented_lines;
///
/// let lines = dedented_lines("  line1\nline2  \n  line3");
/// assert_eq!(lines, vec!["line1", "line2  ", "  line3"]);
///
/// assert!(dedented_lines("").is_empty());
/// ```
pub fn dedented_lines(description: &str) -> Vec<String> {
    if description.is_empty() {
        return Vec::new();
    }
    description.trim().split('\n').map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty() {
        assert!(dedented_lines("").is_empty());
    }

    #[test]
    fn test_single_line() {
        assert_eq!(dedented_lines("hello"), vec!["hello"]);
        assert_eq!(dedented_lines("  hello  "), vec!["hello"]);
    }

    #[test]
    fn test_interior_whitespace_preserved() {
        let lines = dedented_lines("  line1\nline2  \n  line3");
        assert_eq!(lines, vec!["line1", "line2  ", "  line3"]);
    }

    #[test]
    fn test_blank_interior_line_kept() {
        assert_eq!(dedented_lines("a\n\nb"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_whitespace_only_input() {
        // Trimming leaves an empty string, which splits into one empty segment.
        assert_eq!(dedented_lines("   \n  "), vec![""]);
    }

    #[test]
    fn test_trailing_newline_trimmed() {
        assert_eq!(dedented_lines("a\nb\n"), vec!["a", "b"]);
    }

    proptest! {
        #[test]
        fn prop_outer_boundaries_trimmed(s in ".+") {
            let lines = dedented_lines(&s);
            if let Some(first) = lines.first() {
                prop_assert!(!first.starts_with(char::is_whitespace));
            }
            if let Some(last) = lines.last() {
                prop_assert!(!last.ends_with(char::is_whitespace));
            }
        }

        #[test]
        fn prop_rejoining_recovers_trimmed_input(s in ".+") {
            let trimmed = s.trim().to_string();
            prop_assert_eq!(dedented_lines(&s).join("\n"), trimmed);
        }
    }
}
