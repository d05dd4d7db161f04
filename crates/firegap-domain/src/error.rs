use thiserror::Error;

/// A request field is missing, malformed, or out of range.
///
/// Raised before any rule is looked at; `field` uses the wire path
/// (`insulation.class`, `mount.clamp_spacing_m`, ...).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid request field `{field}`: {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Rule data could not be interpreted. No partial result is produced.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ComputationError {
    #[error("rule at position {index} has an empty id")]
    MissingRuleId { index: usize },

    #[error("rule `{rule_id}`: {reason}")]
    MalformedRule { rule_id: String, reason: String },
}

impl ComputationError {
    pub fn malformed(rule_id: &str, reason: impl Into<String>) -> Self {
        ComputationError::MalformedRule {
            rule_id: rule_id.to_string(),
            reason: reason.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Computation(#[from] ComputationError),
}

impl EngineError {
    pub fn is_validation(&self) -> bool {
        matches!(self, EngineError::Validation(_))
    }
}
