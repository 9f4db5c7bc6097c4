//! Line-oriented text helpers used by the printer.
//!
//! `split_lines` and `join_lines` are exact inverses: splitting text with N
//! newlines yields N + 1 segments, empty leading and trailing ones included.

/// Width of one indentation step, in spaces.
pub const INDENT: usize = 4;

/// Splits text on `\n`, keeping empty segments.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Joins lines with `\n`, without a trailing newline.
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    lines
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prefixes every line, empty lines included, with four spaces.
pub fn indent_lines(text: &str) -> String {
    indent_lines_by(text, INDENT)
}

/// Prefixes every line with `width` spaces.
pub fn indent_lines_by(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    let indented: Vec<String> = split_lines(text)
        .into_iter()
        .map(|line| format!("{}{}", pad, line))
        .collect();
    join_lines(&indented)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_empty_edges() {
        assert_eq!(split_lines(""), vec![""]);
        assert_eq!(split_lines("\n"), vec!["", ""]);
        assert_eq!(split_lines("a\n\nb\n"), vec!["a", "", "b", ""]);
    }

    #[test]
    fn join_inverts_split() {
        for s in ["", "\n", "a", "a\nb", "\n\nx\n", "  spaced \n"] {
            assert_eq!(join_lines(&split_lines(s)), s);
        }
    }

    #[test]
    fn join_has_no_trailing_newline() {
        assert_eq!(join_lines(&["a", "b"]), "a\nb");
        assert_eq!(join_lines::<&str>(&[]), "");
    }

    #[test]
    fn indent_prefixes_every_line() {
        assert_eq!(indent_lines("a\n\nb"), "    a\n    \n    b");
        assert_eq!(indent_lines(""), "    ");
    }
}
