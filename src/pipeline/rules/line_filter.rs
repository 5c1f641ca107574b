//! Line-level filtering rule
//!
//! Rewrites the lines of a document that a predicate selects and keeps
//! every other line verbatim.
//!
//! # Logic
//!
//! - Split the document on line feeds
//! - For each line where the predicate holds, replace it with the
//!   transformed line; otherwise keep it unchanged
//! - Rejoin with single line feeds
//!
//! The line count never changes. A trailing line feed in the input is
//! not preserved; callers that care must re-append it.

use crate::pipeline::rule::{RewriteError, RewriteRule};

/// Indentation given to flattened list item text.
const ITEM_INDENT: &str = "          ";

/// Apply `transform` to every line where `predicate` holds.
///
/// Lines are line-feed delimited; the rejoined output carries no trailing
/// line feed even when the input did.
pub fn filter_lines<P, T>(text: &str, predicate: P, transform: T) -> String
where
    P: Fn(&str) -> bool,
    T: Fn(&str) -> String,
{
    let mut lines: Vec<&str> = text.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }

    let rebuilt: Vec<String> = lines
        .into_iter()
        .map(|line| {
            if predicate(line) {
                transform(line)
            } else {
                line.to_string()
            }
        })
        .collect();

    rebuilt.join("\n")
}

/// A rule that flattens `<li>` markup: the tags go away and the item text
/// is kept on its own line, indented with ten spaces.
pub struct FlattenListItems;

impl FlattenListItems {
    /// Create a new FlattenListItems rule.
    pub fn new() -> Self {
        FlattenListItems
    }
}

impl Default for FlattenListItems {
    fn default() -> Self {
        Self::new()
    }
}

impl RewriteRule for FlattenListItems {
    fn name(&self) -> &str {
        "flatten-list-items"
    }

    fn apply(&self, text: &str) -> Result<String, RewriteError> {
        Ok(filter_lines(
            text,
            |line| line.contains("<li>"),
            |line| {
                let stripped = line.trim().replace("<li>", "").replace("</li>", "");
                format!("{}{}", ITEM_INDENT, stripped.trim())
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_line_is_stripped_and_reindented() {
        let rule = FlattenListItems::new();
        assert_eq!(
            rule.apply("  <li>Hello</li>").unwrap(),
            "          Hello"
        );
    }

    #[test]
    fn non_item_lines_are_kept_verbatim() {
        let rule = FlattenListItems::new();
        let input = "<ul>\n  <li>One</li>\n  <li>Two</li>\n</ul>";
        let expected = "<ul>\n          One\n          Two\n</ul>";
        assert_eq!(rule.apply(input).unwrap(), expected);
    }

    #[test]
    fn trailing_line_feed_is_dropped() {
        assert_eq!(filter_lines("a\nb\n", |_| false, |l| l.to_string()), "a\nb");
    }
}
