//! Ordered pattern substitution rule
//!
//! Replaces the K-th match of a pattern with the K-th entry of a
//! replacement list.
//!
//! # Logic
//!
//! - Scan the document left to right for non-overlapping matches
//! - The K-th match (0-indexed) is replaced by `replacements[K]`
//! - All text between and around matches is preserved unchanged
//!
//! The position is an explicit index over the replacement slice. Running
//! out of replacements mid-scan is a typed error and produces no output;
//! surplus replacements after the last match are allowed and stay unused.

use crate::pipeline::rule::{RewriteError, RewriteRule};
use regex::Regex;

/// A rule mapping the K-th pattern match to the K-th replacement value.
pub struct OrderedSubstitution {
    pattern: Regex,
    replacements: Vec<String>,
}

impl OrderedSubstitution {
    /// Create a rule from a compiled pattern and an ordered replacement
    /// list. Each entry is the full text substituted for its match.
    pub fn new(pattern: Regex, replacements: Vec<String>) -> Self {
        OrderedSubstitution {
            pattern,
            replacements,
        }
    }

    /// Number of replacement values this rule carries.
    pub fn replacement_count(&self) -> usize {
        self.replacements.len()
    }

    /// Number of pattern matches in `text`.
    pub fn match_count(&self, text: &str) -> usize {
        self.pattern.find_iter(text).count()
    }
}

impl RewriteRule for OrderedSubstitution {
    fn name(&self) -> &str {
        "ordered-substitution"
    }

    fn apply(&self, text: &str) -> Result<String, RewriteError> {
        let mut out = String::with_capacity(text.len());
        let mut cursor = 0;

        for (index, m) in self.pattern.find_iter(text).enumerate() {
            let replacement = match self.replacements.get(index) {
                Some(value) => value,
                None => {
                    return Err(RewriteError::SubstitutionCountMismatch {
                        matched: self.match_count(text),
                        available: self.replacements.len(),
                    })
                }
            };
            out.push_str(&text[cursor..m.start()]);
            out.push_str(replacement);
            cursor = m.end();
        }

        out.push_str(&text[cursor..]);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slug_rule(values: &[&str]) -> OrderedSubstitution {
        let pattern = Regex::new(r"slug: '([^']+)'").unwrap();
        let replacements = values
            .iter()
            .map(|v| format!("slug: '{}'", v))
            .collect();
        OrderedSubstitution::new(pattern, replacements)
    }

    #[test]
    fn kth_match_gets_kth_value() {
        let rule = slug_rule(&["Function:Function_Cards", "Vocab:A1:Cat"]);
        let input = "a: { slug: 'function-cards' },\nb: { slug: 'cat' },";
        let expected = "a: { slug: 'Function:Function_Cards' },\nb: { slug: 'Vocab:A1:Cat' },";
        assert_eq!(rule.apply(input).unwrap(), expected);
    }

    #[test]
    fn zero_matches_leaves_text_unchanged() {
        let rule = slug_rule(&["Vocab:A1:Book"]);
        assert_eq!(rule.apply("no slugs here").unwrap(), "no slugs here");
    }

    #[test]
    fn too_many_matches_is_an_error() {
        let rule = slug_rule(&["Vocab:A1:Book"]);
        let result = rule.apply("slug: 'book' slug: 'cat'");
        assert_eq!(
            result,
            Err(RewriteError::SubstitutionCountMismatch {
                matched: 2,
                available: 1,
            })
        );
    }

    #[test]
    fn surplus_replacements_stay_unused() {
        let rule = slug_rule(&["Vocab:A1:Book", "Vocab:A1:Cat"]);
        assert_eq!(
            rule.apply("slug: 'book'").unwrap(),
            "slug: 'Vocab:A1:Book'"
        );
    }
}
