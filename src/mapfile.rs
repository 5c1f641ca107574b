//! Substitution map files
//!
//! `rename-slugs` reads its ordered replacement list from a YAML file
//! instead of an array hardcoded next to the content. The file lists the
//! new values in the order the slugs appear in the document; pattern and
//! template are optional and default to the `slug: '...'` convention of
//! the card decks:
//!
//! ```yaml
//! pattern: "slug: '([^']+)'"
//! template: "slug: '{}'"
//! values:
//!   - "Function:Function_Cards"
//!   - "Vocab:A1:Cat"
//! ```
//!
//! The K-th value, rendered through the template, replaces the K-th
//! pattern match.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::pipeline::rules::OrderedSubstitution;

/// Default pattern matching `slug: '...'` occurrences
static SLUG_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"slug: '([^']+)'").unwrap());

const DEFAULT_TEMPLATE: &str = "slug: '{}'";

/// Marker in the template that receives the K-th value
const VALUE_SLOT: &str = "{}";

/// Errors raised while loading a map file
#[derive(Debug, Clone, PartialEq)]
pub enum MapFileError {
    /// The map file could not be read
    Io { path: PathBuf, message: String },
    /// The map file is not valid YAML or misses required fields
    Parse { path: PathBuf, message: String },
    /// The custom pattern does not compile
    BadPattern { pattern: String, message: String },
    /// The custom template has no `{}` slot for the value
    BadTemplate { template: String },
}

impl fmt::Display for MapFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapFileError::Io { path, message } => {
                write!(f, "{}: {}", path.display(), message)
            }
            MapFileError::Parse { path, message } => {
                write!(f, "{}: {}", path.display(), message)
            }
            MapFileError::BadPattern { pattern, message } => {
                write!(f, "invalid pattern '{}': {}", pattern, message)
            }
            MapFileError::BadTemplate { template } => {
                write!(f, "template '{}' has no '{{}}' slot", template)
            }
        }
    }
}

impl std::error::Error for MapFileError {}

/// An ordered substitution list loaded from disk
#[derive(Debug, Clone, Deserialize)]
pub struct MapFile {
    #[serde(default)]
    pattern: Option<String>,
    #[serde(default)]
    template: Option<String>,
    values: Vec<String>,
}

impl MapFile {
    /// Read and parse the map file at `path`.
    pub fn load(path: &Path) -> Result<Self, MapFileError> {
        let source = fs::read_to_string(path).map_err(|e| MapFileError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_yaml::from_str(&source).map_err(|e| MapFileError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Parse a map file from already-loaded text.
    pub fn parse_str(source: &str, path: &Path) -> Result<Self, MapFileError> {
        serde_yaml::from_str(source).map_err(|e| MapFileError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Number of replacement values in the list.
    pub fn value_count(&self) -> usize {
        self.values.len()
    }

    /// Build the ordered substitution rule this file describes.
    pub fn into_rule(self) -> Result<OrderedSubstitution, MapFileError> {
        let pattern = match &self.pattern {
            Some(p) => Regex::new(p).map_err(|e| MapFileError::BadPattern {
                pattern: p.clone(),
                message: e.to_string(),
            })?,
            None => SLUG_PATTERN.clone(),
        };

        let template = self.template.unwrap_or_else(|| DEFAULT_TEMPLATE.into());
        if !template.contains(VALUE_SLOT) {
            return Err(MapFileError::BadTemplate { template });
        }

        let replacements = self
            .values
            .iter()
            .map(|value| template.replace(VALUE_SLOT, value))
            .collect();
        Ok(OrderedSubstitution::new(pattern, replacements))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::rule::RewriteRule;

    #[test]
    fn defaults_cover_the_slug_convention() {
        let map = MapFile::parse_str("values:\n  - \"Vocab:A1:Cat\"\n", Path::new("m.yaml")).unwrap();
        let rule = map.into_rule().unwrap();
        assert_eq!(
            rule.apply("card: { slug: 'cat' }").unwrap(),
            "card: { slug: 'Vocab:A1:Cat' }"
        );
    }

    #[test]
    fn custom_pattern_and_template() {
        let source = "pattern: \"id=([0-9]+)\"\ntemplate: \"id={}\"\nvalues:\n  - \"7\"\n  - \"9\"\n";
        let rule = MapFile::parse_str(source, Path::new("m.yaml"))
            .unwrap()
            .into_rule()
            .unwrap();
        assert_eq!(rule.apply("id=1 id=2").unwrap(), "id=7 id=9");
    }

    #[test]
    fn template_without_slot_is_rejected() {
        let source = "template: \"slug: 'fixed'\"\nvalues: []\n";
        let result = MapFile::parse_str(source, Path::new("m.yaml")).unwrap().into_rule();
        assert!(matches!(result, Err(MapFileError::BadTemplate { .. })));
    }

    #[test]
    fn missing_values_is_a_parse_error() {
        let result = MapFile::parse_str("pattern: \"x\"\n", Path::new("m.yaml"));
        assert!(matches!(result, Err(MapFileError::Parse { .. })));
    }
}
