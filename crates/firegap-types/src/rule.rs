use crate::date::iso_date_option;
use crate::ids;
use crate::vocab::{ApprovalType, ClearanceStatus, InsulationClass, Layout, Material};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::Date;

/// A clearance rule as authored in a rule catalog.
///
/// Rules are maintained outside firegap; the engine only reads them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct RuleRecord {
    pub id: String,

    /// Approval the rule is derived from. Rules without an approval never
    /// take part in the approval pass of the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval: Option<ApprovalRef>,

    #[serde(default = "default_scope")]
    pub scope: String,

    /// Higher is evaluated first.
    #[serde(default = "default_priority")]
    pub priority: i32,

    #[serde(default)]
    pub conditions: Vec<ConditionClause>,

    pub result: RuleResult,

    #[schemars(with = "Option<String>")]
    #[serde(default, with = "iso_date_option", skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<Date>,

    #[schemars(with = "Option<String>")]
    #[serde(default, with = "iso_date_option", skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<Date>,
}

fn default_scope() -> String {
    ids::SCOPE_PIPE_TO_PIPE.to_string()
}

fn default_priority() -> i32 {
    50
}

impl RuleRecord {
    pub fn is_approval_linked(&self) -> bool {
        self.approval.is_some()
    }

    /// Whether `as_of` falls into `[valid_from, valid_to)`; open ends always hold.
    pub fn is_valid_on(&self, as_of: Date) -> bool {
        let started = self.valid_from.is_none_or(|from| from <= as_of);
        let not_expired = self.valid_to.is_none_or(|to| as_of < to);
        started && not_expired
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ApprovalRef {
    #[serde(rename = "type")]
    pub kind: ApprovalType,
    pub number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// One typed predicate over a clearance request.
///
/// Encoded as `{"kind": "...", "value": ...}`; an unknown `kind` is a
/// deserialization error.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", content = "value")]
pub enum ConditionClause {
    #[serde(rename = "material_in")]
    MaterialIn(Vec<Material>),
    #[serde(rename = "dn_max")]
    DnMax(u32),
    #[serde(rename = "insulation_class_in")]
    InsulationClassIn(Vec<InsulationClass>),
    #[serde(rename = "layout_in")]
    LayoutIn(Vec<Layout>),
    #[serde(rename = "bundle_count_max")]
    BundleCountMax(u32),
    #[serde(rename = "clamp_spacing_m_max")]
    ClampSpacingMax(f64),
    #[serde(rename = "requires_wrap")]
    RequiresWrap(Vec<String>),
}

impl ConditionClause {
    pub fn kind(&self) -> &'static str {
        match self {
            ConditionClause::MaterialIn(_) => ids::CLAUSE_MATERIAL_IN,
            ConditionClause::DnMax(_) => ids::CLAUSE_DN_MAX,
            ConditionClause::InsulationClassIn(_) => ids::CLAUSE_INSULATION_CLASS_IN,
            ConditionClause::LayoutIn(_) => ids::CLAUSE_LAYOUT_IN,
            ConditionClause::BundleCountMax(_) => ids::CLAUSE_BUNDLE_COUNT_MAX,
            ConditionClause::ClampSpacingMax(_) => ids::CLAUSE_CLAMP_SPACING_M_MAX,
            ConditionClause::RequiresWrap(_) => ids::CLAUSE_REQUIRES_WRAP,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct RuleResult {
    pub min_clearance_mm: u32,
    pub status: ClearanceStatus,
    /// Requirements an installation must fulfil when this rule applies.
    #[serde(default)]
    pub must_have: Vec<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceRef>,
}

/// Citation details carried by a rule result; merged with the approval when
/// the engine builds a [`crate::ClearanceSource`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SourceRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// On-disk rule catalog (`firegap.rules.v1`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct RuleCatalogFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default)]
    pub rules: Vec<RuleRecord>,
}
