use crate::model::{Rule, ValidRequest};
use crate::validate::validate_request;
use firegap_types::{
    ApprovalRef, ApprovalType, ClearanceRequest, ClearanceStatus, ConditionClause,
    InsulationClass, InsulationSpec, Layout, Material, MountSpec, RuleRecord, RuleResult,
    SiteContext, SourceRef, ids,
};

/// Scenario A: stainless steel DN 200, A2 with metal wrap Z, parallel, 1.5 m clamps.
pub fn scenario_request() -> ClearanceRequest {
    ClearanceRequest {
        product_id: Some("S-INOX-DN".to_string()),
        material: "stainless_steel".to_string(),
        dn: 200,
        insulation: InsulationSpec {
            class: "A2".to_string(),
            thickness_mm: 30,
            wrap: vec!["metal_wrap_Z".to_string()],
        },
        layout: "parallel".to_string(),
        bundle_count: 1,
        mount: MountSpec {
            clamp_spacing_m: 1.5,
        },
        context: SiteContext {
            location: "shaft".to_string(),
            jurisdiction: "BY".to_string(),
            building_class: "GK5".to_string(),
        },
    }
}

pub fn valid_request() -> ValidRequest {
    validate_request(&scenario_request()).expect("scenario request is valid")
}

pub fn abp_record(id: &str, min_clearance_mm: u32, conditions: Vec<ConditionClause>) -> RuleRecord {
    RuleRecord {
        id: id.to_string(),
        approval: Some(ApprovalRef {
            kind: ApprovalType::Abp,
            number: id.to_uppercase(),
            url: Some(format!("https://www.dibt.de/de/zulassungen/{id}")),
        }),
        scope: ids::SCOPE_PIPE_TO_PIPE.to_string(),
        priority: 50,
        conditions,
        result: RuleResult {
            min_clearance_mm,
            status: ClearanceStatus::Permitted,
            must_have: Vec::new(),
            notes: format!("{min_clearance_mm} mm laut {id}"),
            source: None,
        },
        valid_from: None,
        valid_to: None,
    }
}

pub fn mlar_record(id: &str) -> RuleRecord {
    RuleRecord {
        id: id.to_string(),
        approval: None,
        scope: ids::SCOPE_PIPE_TO_PIPE.to_string(),
        priority: 10,
        conditions: Vec::new(),
        result: RuleResult {
            min_clearance_mm: 50,
            status: ClearanceStatus::Default,
            must_have: Vec::new(),
            notes: "MLAR Standard".to_string(),
            source: None,
        },
        valid_from: None,
        valid_to: None,
    }
}

/// The AbP stainless-steel rule the catalog ships with.
pub fn seed_abp_record() -> RuleRecord {
    let mut record = abp_record(
        "abp-2024-inox-001",
        0,
        vec![
            ConditionClause::MaterialIn(vec![Material::StainlessSteel]),
            ConditionClause::DnMax(200),
            ConditionClause::InsulationClassIn(vec![InsulationClass::A1, InsulationClass::A2]),
            ConditionClause::LayoutIn(vec![Layout::Parallel]),
            ConditionClause::BundleCountMax(2),
            ConditionClause::ClampSpacingMax(1.5),
            ConditionClause::RequiresWrap(vec!["metal_wrap_Z".to_string()]),
        ],
    );
    record.priority = 100;
    record.result.must_have = vec!["metal_wrap_Z".to_string()];
    record.result.notes = "0 mm zulässig bis DN 200 mit A1/A2 Dämmung und Metallummantelung Z. Befestigungsabstand max. 1,5 m beachten.".to_string();
    record.result.source = Some(SourceRef {
        anchor: Some("sec-3.2".to_string()),
        url: None,
        reference: None,
    });
    record
}

pub fn rule(record: &RuleRecord) -> Rule {
    Rule::interpret(0, record).expect("test rule interprets")
}
