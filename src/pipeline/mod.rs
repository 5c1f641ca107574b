//! Sequential rewrite pipeline for documents
//!
//! This module provides:
//! - The transformation interface (`RewriteRule`, `RewriteError`)
//! - Concrete rules (`LiteralReplace`, `FlattenListItems`, `OrderedSubstitution`)
//! - Named rule sets and their registry (`RuleSet`, `RuleSetRegistry`)
//! - The executor that runs a named set over a document (`PipelineExecutor`)

pub mod config;
pub mod executor;
pub mod rule;
pub mod rules;

// Re-export the execution API
pub use config::{RuleSet, RuleSetRegistry};
pub use executor::{ExecutionError, PipelineExecutor};

// Re-export the rule interface and concrete rules
pub use rule::{RewriteError, RewriteRule};
pub use rules::{FlattenListItems, LiteralReplace, OrderedSubstitution};
