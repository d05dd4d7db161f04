//! Property-based tests for the clearance engine.
//!
//! These cover determinism, strictness monotonicity, open-world clauses and
//! the source union, over arbitrary valid requests and rule sets.

use crate::engine::compute;
use crate::policy::EngineConfig;
use crate::test_support::abp_record;
use firegap_types::{
    ClearanceRequest, ClearanceStatus, ConditionClause, InsulationClass, InsulationSpec, Layout,
    Material, MountSpec, RuleRecord, SiteContext,
};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_material() -> impl Strategy<Value = Material> {
    prop::sample::select(Material::ALL.to_vec())
}

fn arb_class() -> impl Strategy<Value = InsulationClass> {
    prop::sample::select(InsulationClass::ALL.to_vec())
}

fn arb_layout() -> impl Strategy<Value = Layout> {
    prop::sample::select(Layout::ALL.to_vec())
}

fn arb_wraps() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::sample::select(vec!["metal_wrap_X", "metal_wrap_Y", "metal_wrap_Z"]),
        0..3,
    )
    .prop_map(|v| v.into_iter().map(str::to_string).collect())
}

fn arb_request() -> impl Strategy<Value = ClearanceRequest> {
    (
        arb_material(),
        1i64..1000,
        arb_class(),
        0i64..200,
        arb_wraps(),
        arb_layout(),
        1i64..10,
        1u32..400,
        prop::sample::select(vec!["BY", "BW", "NW", "HH"]),
    )
        .prop_map(
            |(material, dn, class, thickness, wrap, layout, bundle, spacing_cm, state)| {
                ClearanceRequest {
                    product_id: None,
                    material: material.as_str().to_string(),
                    dn,
                    insulation: InsulationSpec {
                        class: class.as_str().to_string(),
                        thickness_mm: thickness,
                        wrap,
                    },
                    layout: layout.as_str().to_string(),
                    bundle_count: bundle,
                    mount: MountSpec {
                        clamp_spacing_m: f64::from(spacing_cm) / 100.0,
                    },
                    context: SiteContext {
                        location: "shaft".to_string(),
                        jurisdiction: state.to_string(),
                        building_class: "GK5".to_string(),
                    },
                }
            },
        )
}

fn arb_clause() -> impl Strategy<Value = ConditionClause> {
    prop_oneof![
        prop::collection::vec(arb_material(), 1..3).prop_map(ConditionClause::MaterialIn),
        (1u32..1000).prop_map(ConditionClause::DnMax),
        prop::collection::vec(arb_class(), 1..4).prop_map(ConditionClause::InsulationClassIn),
        prop::collection::vec(arb_layout(), 1..3).prop_map(ConditionClause::LayoutIn),
        (1u32..10).prop_map(ConditionClause::BundleCountMax),
        (1u32..400).prop_map(|cm| ConditionClause::ClampSpacingMax(f64::from(cm) / 100.0)),
        arb_wraps()
            .prop_filter("non-empty", |w| !w.is_empty())
            .prop_map(ConditionClause::RequiresWrap),
    ]
}

/// Up to eight rules with unique ids and at most one clause per kind.
fn arb_rules() -> impl Strategy<Value = Vec<RuleRecord>> {
    prop::collection::vec(
        (
            prop::collection::vec(arb_clause(), 0..4),
            0u32..120,
            0i32..100,
        ),
        0..8,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (clauses, mm, priority))| {
                let mut kinds = std::collections::BTreeSet::new();
                let clauses = clauses
                    .into_iter()
                    .filter(|c| kinds.insert(c.kind()))
                    .collect();
                let mut record = abp_record(&format!("r{i}"), mm, clauses);
                record.priority = priority;
                record
            })
            .collect()
    })
}

fn cfg() -> EngineConfig {
    EngineConfig::default()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn compute_is_deterministic(req in arb_request(), rules in arb_rules()) {
        let a = compute(&req, &rules, &cfg(), true).expect("compute");
        let b = compute(&req, &rules, &cfg(), true).expect("compute");
        prop_assert_eq!(
            serde_json::to_string(&a).expect("json"),
            serde_json::to_string(&b).expect("json")
        );
    }

    #[test]
    fn stricter_matching_rule_raises_clearance(
        req in arb_request(),
        rules in arb_rules(),
        extra in 1u32..50,
    ) {
        let before = compute(&req, &rules, &cfg(), true).expect("compute");
        let current_max = before
            .debug_info
            .as_ref()
            .map(|t| {
                t.evaluations
                    .iter()
                    .filter(|e| e.matched)
                    .filter_map(|e| rules.iter().find(|r| r.id == e.rule_id))
                    .map(|r| r.result.min_clearance_mm)
                    .max()
                    .unwrap_or(0)
            })
            .unwrap_or(0);

        let mut extended = rules.clone();
        extended.push(abp_record("stricter", current_max + extra, Vec::new()));
        let after = compute(&req, &extended, &cfg(), false).expect("compute");
        prop_assert_eq!(after.min_clearance_mm, current_max + extra);
    }

    #[test]
    fn rule_without_dn_ceiling_ignores_dn(req in arb_request(), dn in 1i64..5000) {
        let rules = vec![abp_record(
            "open-dn",
            30,
            vec![ConditionClause::MaterialIn(Material::ALL.to_vec())],
        )];
        let mut req = req;
        req.dn = dn;
        let response = compute(&req, &rules, &cfg(), false).expect("compute");
        prop_assert_eq!(response.min_clearance_mm, 30);
        prop_assert_eq!(response.status, ClearanceStatus::Permitted);
    }

    #[test]
    fn every_matching_rule_is_cited(req in arb_request(), low in 0u32..50, high in 50u32..100) {
        let rules = vec![abp_record("low", low, Vec::new()), abp_record("high", high, Vec::new())];
        let response = compute(&req, &rules, &cfg(), false).expect("compute");
        prop_assert_eq!(response.min_clearance_mm, high.max(low));
        prop_assert!(response.sources.len() >= 2);
        let numbers: Vec<_> = response.sources.iter().filter_map(|s| s.number.clone()).collect();
        prop_assert!(numbers.contains(&"LOW".to_string()));
        prop_assert!(numbers.contains(&"HIGH".to_string()));
    }

    #[test]
    fn every_response_cites_unless_hard_floor(req in arb_request(), rules in arb_rules()) {
        let response = compute(&req, &rules, &cfg(), false).expect("compute");
        prop_assert!(!response.sources.is_empty());

        let floor = compute(&req, &[], &EngineConfig::conservative(), false).expect("compute");
        prop_assert_eq!(floor.min_clearance_mm, 100);
        prop_assert!(floor.sources.is_empty());
    }
}
