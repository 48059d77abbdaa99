//! Inline text markup.
//!
//! A line wrapped in slashes (`/abstract/`) is drawn in italics and a line
//! wrapped in underscores (`_static_`) is underlined. Wrappers can be combined
//! in either order (`/_both_/`, `_/both/_`). Only whole-line wrappers count,
//! so `a/b/c` or an unmatched `/open` stays literal.

use crate::draw::{Decoration, Decorations};

const ITALIC_DELIMITER: char = '/';
const UNDERLINE_DELIMITER: char = '_';

/// Splits a line into its visible text and the decorations its wrappers request.
///
/// # Examples
///
/// ```
/// # use loom_core::draw::{markup::parse_markup, Decoration};
/// let (text, decorations) = parse_markup("/_run_/");
/// assert_eq!(text, "run");
/// assert!(decorations.contains(Decoration::Italic));
/// assert!(decorations.contains(Decoration::Underlined));
///
/// let (text, decorations) = parse_markup("a/b");
/// assert_eq!(text, "a/b");
/// assert!(decorations.is_empty());
/// ```
pub fn parse_markup(line: &str) -> (String, Decorations) {
    let mut text = line;
    let mut decorations = Decorations::empty();

    loop {
        let italic = (!decorations.contains(Decoration::Italic))
            .then(|| unwrap_delimited(text, ITALIC_DELIMITER))
            .flatten();
        if let Some(inner) = italic {
            text = inner;
            decorations.insert(Decoration::Italic);
            continue;
        }

        let underlined = (!decorations.contains(Decoration::Underlined))
            .then(|| unwrap_delimited(text, UNDERLINE_DELIMITER))
            .flatten();
        match underlined {
            Some(inner) => {
                text = inner;
                decorations.insert(Decoration::Underlined);
            }
            None => break,
        }
    }

    (text.to_string(), decorations)
}

/// Removes one `delimiter` from each end of `text` if both are present and
/// something remains between them.
fn unwrap_delimited(text: &str, delimiter: char) -> Option<&str> {
    text.strip_prefix(delimiter)
        .and_then(|rest| rest.strip_suffix(delimiter))
        .filter(|inner| !inner.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_unchanged() {
        let (text, decorations) = parse_markup("Name");
        assert_eq!(text, "Name");
        assert!(decorations.is_empty());
    }

    #[test]
    fn test_italic_wrapper() {
        let (text, decorations) = parse_markup("/ItalicName/");
        assert_eq!(text, "ItalicName");
        assert!(decorations.contains(Decoration::Italic));
        assert!(!decorations.contains(Decoration::Underlined));
    }

    #[test]
    fn test_underline_wrapper() {
        let (text, decorations) = parse_markup("_underline_");
        assert_eq!(text, "underline");
        assert!(decorations.contains(Decoration::Underlined));
        assert!(!decorations.contains(Decoration::Italic));
    }

    #[test]
    fn test_combined_wrappers_in_both_orders() {
        for line in ["/_both_/", "_/both/_"] {
            let (text, decorations) = parse_markup(line);
            assert_eq!(text, "both", "line {line}");
            assert!(decorations.contains(Decoration::Italic));
            assert!(decorations.contains(Decoration::Underlined));
        }
    }

    #[test]
    fn test_each_wrapper_is_stripped_once() {
        let (text, decorations) = parse_markup("//x//");
        assert_eq!(text, "/x/");
        assert!(decorations.contains(Decoration::Italic));
    }

    #[test]
    fn test_unmatched_delimiters_stay_literal() {
        for line in ["/open", "close/", "_a", "a/b/c", "/", "//", "__", "_"] {
            let (text, decorations) = parse_markup(line);
            assert_eq!(text, line);
            assert!(decorations.is_empty(), "line {line}");
        }
    }

    #[test]
    fn test_minimal_wrapped_content() {
        let (text, decorations) = parse_markup("/a/");
        assert_eq!(text, "a");
        assert!(decorations.contains(Decoration::Italic));
    }
}
