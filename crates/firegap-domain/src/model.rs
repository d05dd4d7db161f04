use crate::error::ComputationError;
use firegap_types::{
    ApprovalRef, ClearanceSource, ConditionClause, InsulationClass, Layout, Material, RuleRecord,
    RuleResult, ids,
};
use std::collections::BTreeSet;

/// A request that passed validation. All enumerated fields are typed.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidRequest {
    pub product_id: Option<String>,
    pub material: Material,
    pub dn: u32,
    pub insulation_class: InsulationClass,
    pub insulation_thickness_mm: u32,
    pub wraps: BTreeSet<String>,
    pub layout: Layout,
    pub bundle_count: u32,
    pub clamp_spacing_m: f64,
    pub location: String,
    pub jurisdiction: String,
    pub building_class: String,
}

impl ValidRequest {
    pub fn has_wrap(&self, wrap: &str) -> bool {
        self.wraps.contains(wrap)
    }
}

/// Interpreted condition clause. Whitelists are sets; parameters are checked.
#[derive(Clone, Debug, PartialEq)]
pub enum Condition {
    MaterialIn(BTreeSet<Material>),
    DnMax(u32),
    InsulationClassIn(BTreeSet<InsulationClass>),
    LayoutIn(BTreeSet<Layout>),
    BundleCountMax(u32),
    ClampSpacingMax(f64),
    /// Kept in authoring order so missing-wrap reasons read naturally.
    RequiresWrap(Vec<String>),
}

/// A rule ready for evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct Rule {
    pub id: String,
    pub approval: Option<ApprovalRef>,
    pub priority: i32,
    pub conditions: Vec<Condition>,
    pub result: RuleResult,
}

impl Rule {
    /// Interpret a catalog record.
    ///
    /// Rejected: empty ids, foreign scopes, repeated clause kinds, empty
    /// whitelists, zero ceilings, and non-finite or non-positive spacing.
    pub fn interpret(index: usize, record: &RuleRecord) -> Result<Rule, ComputationError> {
        let id = record.id.trim();
        if id.is_empty() {
            return Err(ComputationError::MissingRuleId { index });
        }
        if record.scope != ids::SCOPE_PIPE_TO_PIPE {
            return Err(ComputationError::malformed(
                id,
                format!(
                    "scope `{}` is not `{}`",
                    record.scope,
                    ids::SCOPE_PIPE_TO_PIPE
                ),
            ));
        }
        if let Some(approval) = &record.approval
            && approval.number.trim().is_empty()
        {
            return Err(ComputationError::malformed(id, "approval number is empty"));
        }

        let mut seen: BTreeSet<&'static str> = BTreeSet::new();
        let mut conditions = Vec::with_capacity(record.conditions.len());
        for clause in &record.conditions {
            if !seen.insert(clause.kind()) {
                return Err(ComputationError::malformed(
                    id,
                    format!("condition `{}` appears more than once", clause.kind()),
                ));
            }
            conditions.push(interpret_clause(id, clause)?);
        }

        Ok(Rule {
            id: id.to_string(),
            approval: record.approval.clone(),
            priority: record.priority,
            conditions,
            result: record.result.clone(),
        })
    }

    pub fn is_approval_linked(&self) -> bool {
        self.approval.is_some()
    }

    /// Citation for this rule. Only meaningful for approval-linked rules.
    pub fn source(&self) -> Option<ClearanceSource> {
        let approval = self.approval.as_ref()?;
        let cited = self.result.source.clone().unwrap_or_default();
        Some(ClearanceSource {
            kind: approval.kind,
            number: Some(approval.number.clone()),
            anchor: cited
                .anchor
                .unwrap_or_else(|| format!("rule-{}", self.id)),
            url: approval
                .url
                .clone()
                .or(cited.url)
                .unwrap_or_else(|| "#".to_string()),
            reference: cited.reference,
        })
    }
}

fn interpret_clause(rule_id: &str, clause: &ConditionClause) -> Result<Condition, ComputationError> {
    let kind = clause.kind();
    let empty = || ComputationError::malformed(rule_id, format!("condition `{kind}` has an empty list"));

    let condition = match clause {
        ConditionClause::MaterialIn(v) => {
            if v.is_empty() {
                return Err(empty());
            }
            Condition::MaterialIn(v.iter().copied().collect())
        }
        ConditionClause::DnMax(max) => {
            if *max == 0 {
                return Err(ComputationError::malformed(rule_id, "`dn_max` must be positive"));
            }
            Condition::DnMax(*max)
        }
        ConditionClause::InsulationClassIn(v) => {
            if v.is_empty() {
                return Err(empty());
            }
            Condition::InsulationClassIn(v.iter().copied().collect())
        }
        ConditionClause::LayoutIn(v) => {
            if v.is_empty() {
                return Err(empty());
            }
            Condition::LayoutIn(v.iter().copied().collect())
        }
        ConditionClause::BundleCountMax(max) => {
            if *max == 0 {
                return Err(ComputationError::malformed(
                    rule_id,
                    "`bundle_count_max` must be at least 1",
                ));
            }
            Condition::BundleCountMax(*max)
        }
        ConditionClause::ClampSpacingMax(max) => {
            if !max.is_finite() || *max <= 0.0 {
                return Err(ComputationError::malformed(
                    rule_id,
                    format!("`clamp_spacing_m_max` must be a positive number, got {max}"),
                ));
            }
            Condition::ClampSpacingMax(*max)
        }
        ConditionClause::RequiresWrap(v) => {
            if v.is_empty() {
                return Err(empty());
            }
            if v.iter().any(|w| w.trim().is_empty()) {
                return Err(ComputationError::malformed(
                    rule_id,
                    "`requires_wrap` contains an empty identifier",
                ));
            }
            Condition::RequiresWrap(v.iter().map(|w| w.trim().to_string()).collect())
        }
    };
    Ok(condition)
}
