//! Named rule sets for document pipelines
//!
//! This module defines rule sets that specify:
//! 1. Which rewrite rules to run
//! 2. The order they run in
//!
//! The registry maps stable names to rule sets; the defaults cover the
//! cleanup passes applied to exported content files.

use std::collections::HashMap;

use crate::pipeline::rule::RewriteRule;
use crate::pipeline::rules::{FlattenListItems, LiteralReplace};

/// A named, ordered list of rewrite rules
pub struct RuleSet {
    pub name: String,
    pub description: String,
    pub rules: Vec<Box<dyn RewriteRule>>,
}

/// Registry of rule sets
pub struct RuleSetRegistry {
    sets: HashMap<String, RuleSet>,
}

impl RuleSetRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        RuleSetRegistry {
            sets: HashMap::new(),
        }
    }

    /// Register a rule set
    pub fn register(&mut self, set: RuleSet) {
        self.sets.insert(set.name.clone(), set);
    }

    /// Get a rule set by name
    pub fn get(&self, name: &str) -> Option<&RuleSet> {
        self.sets.get(name)
    }

    /// Check if a rule set exists
    pub fn has(&self, name: &str) -> bool {
        self.sets.contains_key(name)
    }

    /// List all rule sets (sorted by name)
    pub fn list_all(&self) -> Vec<&RuleSet> {
        let mut sets: Vec<_> = self.sets.values().collect();
        sets.sort_by(|a, b| a.name.cmp(&b.name));
        sets
    }

    /// Create registry with standard rule sets
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(RuleSet {
            name: "punctuation".into(),
            description: "Replace curly quotes and em dashes with ASCII punctuation".into(),
            rules: vec![Box::new(LiteralReplace::smart_punctuation())],
        });

        registry.register(RuleSet {
            name: "flatten-lists".into(),
            description: "Strip <li> markup and re-indent the item text".into(),
            rules: vec![Box::new(FlattenListItems::new())],
        });

        // Combined pass: punctuation first so the flattened item text is
        // already clean
        registry.register(RuleSet {
            name: "tidy".into(),
            description: "Punctuation cleanup followed by list flattening".into(),
            rules: vec![
                Box::new(LiteralReplace::smart_punctuation()),
                Box::new(FlattenListItems::new()),
            ],
        });

        registry
    }
}

impl Default for RuleSetRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_register_the_cleanup_passes() {
        let registry = RuleSetRegistry::with_defaults();
        assert!(registry.has("punctuation"));
        assert!(registry.has("flatten-lists"));
        assert!(registry.has("tidy"));
        assert!(!registry.has("nope"));
    }

    #[test]
    fn list_all_is_sorted_by_name() {
        let registry = RuleSetRegistry::with_defaults();
        let names: Vec<&str> = registry.list_all().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["flatten-lists", "punctuation", "tidy"]);
    }
}
