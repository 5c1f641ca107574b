//! Rewrite rule trait and transformation errors
//!
//! A rewrite rule is one step of a document pipeline: a deterministic
//! string-to-string transformation. Rules hold their configuration (the
//! replacement pairs, the pattern, the substitution list) but no run
//! state; anything positional, like the ordered-substitution cursor, is
//! an explicit index local to a single `apply` call.

use std::fmt;

/// Errors that can occur while applying a rule
#[derive(Debug, Clone, PartialEq)]
pub enum RewriteError {
    /// A pattern matched more times than the substitution list covers
    SubstitutionCountMismatch { matched: usize, available: usize },
}

impl fmt::Display for RewriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RewriteError::SubstitutionCountMismatch { matched, available } => {
                write!(
                    f,
                    "pattern matched {} times but only {} replacement values were provided",
                    matched, available
                )
            }
        }
    }
}

impl std::error::Error for RewriteError {}

/// Trait for whole-document text transformations.
///
/// Implementations rewrite the full document text and return the new
/// text. Later rules in a pipeline see the output of earlier ones, never
/// the original document.
pub trait RewriteRule {
    /// Short name used in diagnostics.
    fn name(&self) -> &str;

    /// Apply this rule to the whole document text.
    fn apply(&self, text: &str) -> Result<String, RewriteError>;
}
