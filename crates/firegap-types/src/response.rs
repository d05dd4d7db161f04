use crate::rule::RuleRecord;
use crate::vocab::{ApprovalType, ClearanceStatus};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Citation of the document a clearance value is derived from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ClearanceSource {
    #[serde(rename = "type")]
    pub kind: ApprovalType,
    /// Approval number; absent for MLAR citations.
    #[serde(default)]
    pub number: Option<String>,
    /// Stable pointer into the authorizing document (e.g. `sec-3.2`).
    pub anchor: String,
    pub url: String,
    #[serde(rename = "ref", default)]
    pub reference: Option<String>,
}

/// The engine's single output.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ClearanceResponse {
    pub min_clearance_mm: u32,
    pub status: ClearanceStatus,
    #[serde(default)]
    pub conditions_unmet: Vec<String>,
    pub sources: Vec<ClearanceSource>,
    pub notes: String,
    #[serde(default)]
    pub debug_info: Option<DebugTrace>,
}

/// Observability payload attached when the caller asks for it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DebugTrace {
    /// Number of candidate rules handed to the engine.
    pub rules_loaded: u32,
    /// Number of approval-linked rules whose conditions all held.
    pub approval_matches: u32,
    /// The raw candidate rule set, as received.
    pub rules: Vec<RuleRecord>,
    /// Per approval-linked rule, in evaluation order.
    #[serde(default)]
    pub evaluations: Vec<RuleEvaluation>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RuleEvaluation {
    pub rule_id: String,
    pub matched: bool,
    /// Every unmet sub-condition, not only the first.
    #[serde(default)]
    pub reasons: Vec<String>,
}

impl ClearanceResponse {
    pub fn is_fallback(&self) -> bool {
        self.status == ClearanceStatus::Default
    }
}
