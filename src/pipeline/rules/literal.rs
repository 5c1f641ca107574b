//! Ordered literal replacement rule
//!
//! Replaces fixed substrings in a fixed order.
//!
//! # Logic
//!
//! For each `(old, new)` pair, in the order given:
//! - Replace every non-overlapping occurrence of `old`, left to right
//! - Later pairs operate on the output of earlier pairs, not the original
//!
//! Once no `old` value remains in the text, a second application is a
//! no-op, so passes like the punctuation cleanup are idempotent.

use crate::pipeline::rule::{RewriteError, RewriteRule};

/// A rule that rewrites fixed substrings in a fixed order.
pub struct LiteralReplace {
    pairs: Vec<(String, String)>,
}

impl LiteralReplace {
    /// Create a rule from ordered `(old, new)` pairs.
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        LiteralReplace { pairs }
    }

    /// The punctuation cleanup applied to exported HTML content: curly
    /// double and single quotes become straight quotes, the em dash
    /// becomes a hyphen.
    pub fn smart_punctuation() -> Self {
        LiteralReplace::new(vec![
            ("\u{201d}".into(), "\"".into()),
            ("\u{201c}".into(), "\"".into()),
            ("\u{2014}".into(), "-".into()),
            ("\u{2019}".into(), "'".into()),
            ("\u{2018}".into(), "'".into()),
        ])
    }
}

impl RewriteRule for LiteralReplace {
    fn name(&self) -> &str {
        "literal-replace"
    }

    fn apply(&self, text: &str) -> Result<String, RewriteError> {
        let mut out = text.to_string();
        for (old, new) in &self.pairs {
            out = out.replace(old.as_str(), new);
        }
        Ok(out)
    }
}
