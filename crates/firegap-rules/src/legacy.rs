//! Importer for the flat rule export shape.
//!
//! ```json
//! {
//!   "id": 7,
//!   "approval_type": "AbP", "approval_number": "ABP-2024-INOX-001",
//!   "approval_url": "https://...",
//!   "scope": "pipe_to_pipe", "priority": 100,
//!   "conditions_json": {"material_in": ["stainless_steel"], "DN_max": 200},
//!   "result_json": {"min_clearance_mm": 0, "status": "zulässig", "source": {"anchor": "sec-3.2"}},
//!   "valid_from": "2024-01-01", "valid_to": "2026-12-31"
//! }
//! ```
//!
//! `conditions_json` and `result_json` may also be JSON-encoded strings.
//! Unknown condition keys are an error; `{"applies_if_no_abp_match": true}`
//! marks a jurisdiction default and yields a rule without approval.

use anyhow::Context;
use firegap_types::{
    ApprovalRef, ApprovalType, ClearanceStatus, ConditionClause, InsulationClass, Layout,
    Material, RuleRecord, RuleResult, SourceRef, date::parse_iso_date, ids,
};
use serde::Deserialize;
use serde_json::Value;

/// Whether `entry` looks like an export row rather than a catalog rule.
pub fn is_legacy_shape(entry: &Value) -> bool {
    entry
        .as_object()
        .is_some_and(|m| m.contains_key("conditions_json") || m.contains_key("result_json"))
}

#[derive(Debug, Deserialize)]
struct LegacyRule {
    id: Value,
    #[serde(default)]
    approval_type: Option<ApprovalType>,
    #[serde(default)]
    approval_number: Option<String>,
    #[serde(default)]
    approval_url: Option<String>,
    #[serde(default)]
    scope: Option<String>,
    #[serde(default)]
    priority: Option<i32>,
    #[serde(default)]
    conditions_json: Value,
    result_json: Value,
    #[serde(default)]
    valid_from: Option<String>,
    #[serde(default)]
    valid_to: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LegacyConditions {
    #[serde(default)]
    material_in: Option<Vec<Material>>,
    #[serde(default, rename = "DN_max", alias = "dn_max")]
    dn_max: Option<u32>,
    #[serde(default)]
    insulation_class_in: Option<Vec<InsulationClass>>,
    #[serde(default)]
    layout_in: Option<Vec<Layout>>,
    #[serde(default)]
    bundle_count_max: Option<u32>,
    #[serde(default)]
    clamp_spacing_m_max: Option<f64>,
    #[serde(default)]
    requires_wrap: Option<Vec<String>>,
    #[serde(default)]
    applies_if_no_abp_match: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct LegacyResult {
    min_clearance_mm: u32,
    status: ClearanceStatus,
    #[serde(default)]
    must_have: Vec<String>,
    #[serde(default)]
    notes: String,
    #[serde(default)]
    source: Option<LegacySource>,
}

#[derive(Debug, Deserialize)]
struct LegacySource {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    number: Option<String>,
    #[serde(default)]
    anchor: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(rename = "ref", default)]
    reference: Option<String>,
}

/// Convert one export row into a [`RuleRecord`].
pub fn convert_legacy_rule(value: &Value) -> anyhow::Result<RuleRecord> {
    let row: LegacyRule = serde_json::from_value(value.clone()).context("legacy rule row")?;

    let id = match &row.id {
        Value::String(s) if !s.trim().is_empty() => s.trim().to_string(),
        Value::Number(n) => format!("rule-{n}"),
        other => anyhow::bail!("legacy rule id must be a non-empty string or a number, got {other}"),
    };

    let conditions: LegacyConditions = match decode_embedded(&row.conditions_json)? {
        Value::Null => LegacyConditions::default(),
        v => serde_json::from_value(v)
            .with_context(|| format!("conditions_json of legacy rule {id}"))?,
    };
    let result: LegacyResult = serde_json::from_value(decode_embedded(&row.result_json)?)
        .with_context(|| format!("result_json of legacy rule {id}"))?;

    let is_default_marker = conditions.applies_if_no_abp_match.unwrap_or(false);
    let clauses = clauses_from(conditions);
    if is_default_marker && !clauses.is_empty() {
        anyhow::bail!(
            "legacy rule {id} combines `applies_if_no_abp_match` with other conditions"
        );
    }

    let approval = if is_default_marker {
        None
    } else {
        approval_from(&row, result.source.as_ref())?
    };

    let source = result.source.map(|s| SourceRef {
        anchor: s.anchor,
        url: s.url,
        reference: s.reference,
    });

    Ok(RuleRecord {
        id: id.clone(),
        approval,
        scope: row
            .scope
            .unwrap_or_else(|| ids::SCOPE_PIPE_TO_PIPE.to_string()),
        priority: row.priority.unwrap_or(50),
        conditions: clauses,
        result: RuleResult {
            min_clearance_mm: result.min_clearance_mm,
            status: result.status,
            must_have: result.must_have,
            notes: result.notes,
            source,
        },
        valid_from: parse_date(row.valid_from.as_deref())
            .with_context(|| format!("valid_from of legacy rule {id}"))?,
        valid_to: parse_date(row.valid_to.as_deref())
            .with_context(|| format!("valid_to of legacy rule {id}"))?,
    })
}

fn decode_embedded(value: &Value) -> anyhow::Result<Value> {
    match value {
        Value::String(s) => serde_json::from_str(s).context("decode embedded JSON"),
        other => Ok(other.clone()),
    }
}

fn clauses_from(c: LegacyConditions) -> Vec<ConditionClause> {
    let mut out = Vec::new();
    if let Some(v) = c.material_in {
        out.push(ConditionClause::MaterialIn(v));
    }
    if let Some(v) = c.dn_max {
        out.push(ConditionClause::DnMax(v));
    }
    if let Some(v) = c.insulation_class_in {
        out.push(ConditionClause::InsulationClassIn(v));
    }
    if let Some(v) = c.layout_in {
        out.push(ConditionClause::LayoutIn(v));
    }
    if let Some(v) = c.bundle_count_max {
        out.push(ConditionClause::BundleCountMax(v));
    }
    if let Some(v) = c.clamp_spacing_m_max {
        out.push(ConditionClause::ClampSpacingMax(v));
    }
    if let Some(v) = c.requires_wrap {
        out.push(ConditionClause::RequiresWrap(v));
    }
    out
}

/// Approval columns win; otherwise a non-MLAR `result_json.source` with a
/// number stands in for them.
fn approval_from(
    row: &LegacyRule,
    source: Option<&LegacySource>,
) -> anyhow::Result<Option<ApprovalRef>> {
    if let (Some(kind), Some(number)) = (row.approval_type, row.approval_number.as_ref()) {
        return Ok(Some(ApprovalRef {
            kind,
            number: number.clone(),
            url: row.approval_url.clone(),
        }));
    }

    let Some(src) = source else {
        return Ok(None);
    };
    let (Some(kind), Some(number)) = (src.kind.as_deref(), src.number.as_ref()) else {
        return Ok(None);
    };
    let kind = ApprovalType::parse(kind)
        .ok_or_else(|| anyhow::anyhow!("unknown source type `{kind}`"))?;
    if kind == ApprovalType::Mlar {
        return Ok(None);
    }
    Ok(Some(ApprovalRef {
        kind,
        number: number.clone(),
        url: row.approval_url.clone(),
    }))
}

fn parse_date(raw: Option<&str>) -> anyhow::Result<Option<time::Date>> {
    raw.map(|s| parse_iso_date(s).with_context(|| format!("invalid date `{s}`")))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::macros::date;

    fn abp_row() -> Value {
        json!({
            "id": 1,
            "approval_type": "AbP",
            "approval_number": "ABP-2024-INOX-001",
            "approval_url": "https://www.dibt.de/de/zulassungen/abp-2024-inox-001",
            "scope": "pipe_to_pipe",
            "priority": 100,
            "conditions_json": {
                "material_in": ["stainless_steel"],
                "DN_max": 200,
                "insulation_class_in": ["A1", "A2"],
                "layout_in": ["parallel"],
                "bundle_count_max": 2,
                "clamp_spacing_m_max": 1.5,
                "requires_wrap": ["metal_wrap_Z"]
            },
            "result_json": {
                "min_clearance_mm": 0,
                "status": "zulässig",
                "must_have": ["metal_wrap_Z"],
                "notes": "0 mm zulässig",
                "source": {"type": "AbP", "number": "ABP-2024-INOX-001", "anchor": "sec-3.2"}
            },
            "valid_from": "2024-01-01",
            "valid_to": "2026-12-31"
        })
    }

    #[test]
    fn converts_export_row() {
        let rule = convert_legacy_rule(&abp_row()).expect("convert");
        assert_eq!(rule.id, "rule-1");
        assert_eq!(rule.priority, 100);
        assert_eq!(rule.conditions.len(), 7);
        assert_eq!(rule.conditions[1], ConditionClause::DnMax(200));
        let approval = rule.approval.expect("approval");
        assert_eq!(approval.kind, ApprovalType::Abp);
        assert_eq!(approval.number, "ABP-2024-INOX-001");
        assert_eq!(
            rule.result.source.and_then(|s| s.anchor).as_deref(),
            Some("sec-3.2")
        );
        assert_eq!(rule.valid_to, Some(date!(2026 - 12 - 31)));
    }

    #[test]
    fn embedded_json_strings_are_decoded() {
        let mut row = abp_row();
        row["conditions_json"] = Value::String(row["conditions_json"].to_string());
        row["result_json"] = Value::String(row["result_json"].to_string());
        let rule = convert_legacy_rule(&row).expect("convert");
        assert_eq!(rule.conditions.len(), 7);
    }

    #[test]
    fn approval_falls_back_to_result_source() {
        let mut row = abp_row();
        let map = row.as_object_mut().expect("object");
        map.remove("approval_type");
        map.remove("approval_number");
        let rule = convert_legacy_rule(&row).expect("convert");
        assert_eq!(
            rule.approval.map(|a| a.number).as_deref(),
            Some("ABP-2024-INOX-001")
        );
    }

    #[test]
    fn unknown_condition_key_is_rejected() {
        let mut row = abp_row();
        row["conditions_json"]["DN_maximum"] = json!(100);
        let err = convert_legacy_rule(&row).expect_err("unknown key");
        assert!(format!("{err:#}").contains("DN_maximum"));
    }

    #[test]
    fn mlar_marker_yields_rule_without_approval() {
        let row = json!({
            "id": "mlar-default",
            "priority": 10,
            "conditions_json": {"applies_if_no_abp_match": true},
            "result_json": {
                "min_clearance_mm": 50,
                "status": "default",
                "source": {"type": "MLAR", "ref": "Kapitel 3.2.1", "anchor": "mlar-3.2.1"}
            }
        });
        let rule = convert_legacy_rule(&row).expect("convert");
        assert!(rule.approval.is_none());
        assert!(rule.conditions.is_empty());
        assert_eq!(rule.result.status, ClearanceStatus::Default);
    }

    #[test]
    fn marker_cannot_be_combined_with_conditions() {
        let row = json!({
            "id": "x",
            "conditions_json": {"applies_if_no_abp_match": true, "DN_max": 100},
            "result_json": {"min_clearance_mm": 50, "status": "default"}
        });
        assert!(convert_legacy_rule(&row).is_err());
    }
}
