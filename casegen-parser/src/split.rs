//! Bracket-depth-aware scanning primitives.
//!
//! Every place that needs to cut a parameter list goes through these helpers,
//! so a comma or `=` nested inside `<...>`, `(...)`, `[...]` or `{...}` is
//! never mistaken for a top-level separator. Characters inside `'...'` and
//! `"..."` literals are skipped entirely.

fn is_open(c: char) -> bool {
    matches!(c, '<' | '(' | '[' | '{')
}

fn is_close(c: char) -> bool {
    matches!(c, '>' | ')' | ']' | '}')
}

/// Characters of `text` outside string literals, with their byte offsets.
///
/// Quotes themselves are skipped as well; a backslash escapes the next
/// character inside a literal.
fn code_chars(text: &str) -> impl Iterator<Item = (usize, char)> + '_ {
    let mut quote: Option<char> = None;
    let mut escaped = false;

    text.char_indices().filter(move |&(_, c)| match quote {
        Some(q) => {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            false
        }
        None if c == '\'' || c == '"' => {
            quote = Some(c);
            false
        }
        None => true,
    })
}

/// Split `text` on `separator` occurrences at nesting depth zero.
///
/// Entries are trimmed; empty entries (e.g. from a trailing comma) are dropped.
pub fn split_top_level(text: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in code_chars(text) {
        if c == separator && depth == 0 {
            parts.push(&text[start..i]);
            start = i + c.len_utf8();
        } else if is_open(c) {
            depth += 1;
        } else if is_close(c) {
            depth = depth.saturating_sub(1);
        }
    }
    parts.push(&text[start..]);

    parts
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

/// Byte index of the first `separator` at nesting depth zero.
pub fn find_top_level(text: &str, separator: char) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in code_chars(text) {
        if c == separator && depth == 0 {
            return Some(i);
        }
        if is_open(c) {
            depth += 1;
        } else if is_close(c) {
            depth = depth.saturating_sub(1);
        }
    }
    None
}

/// Given `text[open_at]` is `open`, return the byte index of its matching `close`.
pub fn find_matching(text: &str, open_at: usize, open: char, close: char) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in code_chars(&text[open_at..]) {
        if c == open {
            depth += 1;
        } else if c == close {
            depth = depth.checked_sub(1)?;
            if depth == 0 {
                return Some(open_at + i);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_simple() {
        assert_eq!(
            split_top_level("String a, int b", ','),
            vec!["String a", "int b"]
        );
    }

    #[test]
    fn test_split_ignores_generic_commas() {
        assert_eq!(
            split_top_level("Map<String, int> counts, List<Pair<A, B>> pairs", ','),
            vec!["Map<String, int> counts", "List<Pair<A, B>> pairs"]
        );
    }

    #[test]
    fn test_split_ignores_nested_call_commas() {
        assert_eq!(
            split_top_level("Duration timeout = const Duration(seconds: 1, milliseconds: 5), int retries", ','),
            vec![
                "Duration timeout = const Duration(seconds: 1, milliseconds: 5)",
                "int retries"
            ]
        );
    }

    #[test]
    fn test_split_drops_empty_entries() {
        assert_eq!(split_top_level("String a,", ','), vec!["String a"]);
        assert!(split_top_level("   ", ',').is_empty());
    }

    #[test]
    fn test_find_top_level() {
        assert_eq!(find_top_level("int quantity = 1", '='), Some(13));
        assert_eq!(find_top_level("Map<String, int> m", ','), None);
        assert_eq!(find_top_level("String a, {int b}", '{'), Some(10));
    }

    #[test]
    fn test_find_matching() {
        let text = "get(a, (b), c) rest";
        assert_eq!(find_matching(text, 3, '(', ')'), Some(13));
        assert_eq!(find_matching("get(a", 3, '(', ')'), None);
    }

    #[test]
    fn test_string_literals_are_opaque() {
        assert_eq!(
            split_top_level("String sep = ', ', int n = 2", ','),
            vec!["String sep = ', '", "int n = 2"]
        );
        assert_eq!(
            split_top_level(r#"String open = "<", int n"#, ','),
            vec![r#"String open = "<""#, "int n"]
        );
        assert_eq!(find_top_level("String eq = '=' ", ','), None);
        assert_eq!(find_top_level("String eq = '='", '='), Some(10));
    }

    #[test]
    fn test_escaped_quotes_stay_inside_literal() {
        assert_eq!(
            split_top_level(r"String q = 'it\'s, fine', int n", ','),
            vec![r"String q = 'it\'s, fine'", "int n"]
        );
    }

    #[test]
    fn test_find_matching_skips_parens_in_literals() {
        let text = "wrap(String close = ')', int n);";
        assert_eq!(find_matching(text, 4, '(', ')'), Some(30));
    }
}
