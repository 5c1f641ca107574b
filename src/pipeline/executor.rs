//! Pipeline executor that runs named rule sets over documents

use std::fmt;

use crate::pipeline::config::RuleSetRegistry;
use crate::pipeline::rule::RewriteError;

/// Errors during pipeline execution
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionError {
    RuleSetNotFound(String),
    RewriteFailed { rule: String, error: RewriteError },
}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionError::RuleSetNotFound(name) => {
                write!(f, "Rule set '{}' not found", name)
            }
            ExecutionError::RewriteFailed { rule, error } => {
                write!(f, "Rule '{}' failed: {}", rule, error)
            }
        }
    }
}

impl std::error::Error for ExecutionError {}

/// Executes named rule sets
pub struct PipelineExecutor {
    registry: RuleSetRegistry,
}

impl PipelineExecutor {
    /// Create executor with the default rule sets
    pub fn new() -> Self {
        Self {
            registry: RuleSetRegistry::with_defaults(),
        }
    }

    /// Create executor with a custom registry
    pub fn with_registry(registry: RuleSetRegistry) -> Self {
        Self { registry }
    }

    /// The registry backing this executor.
    pub fn registry(&self) -> &RuleSetRegistry {
        &self.registry
    }

    /// Execute a named rule set over `source`.
    ///
    /// Rules run in registration order; each rule sees the output of the
    /// previous one. The first failing rule aborts the run and nothing is
    /// written anywhere by this call.
    pub fn execute(&self, set_name: &str, source: &str) -> Result<String, ExecutionError> {
        let set = self
            .registry
            .get(set_name)
            .ok_or_else(|| ExecutionError::RuleSetNotFound(set_name.to_string()))?;

        let mut text = source.to_string();
        for rule in &set.rules {
            text = rule.apply(&text).map_err(|e| ExecutionError::RewriteFailed {
                rule: rule.name().to_string(),
                error: e,
            })?;
        }
        Ok(text)
    }
}

impl Default for PipelineExecutor {
    fn default() -> Self {
        Self::new()
    }
}
