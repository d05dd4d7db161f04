use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A pipe/duct configuration submitted for a clearance decision.
///
/// This is the *wire* model: enumerated fields are carried as plain strings and
/// numbers so that an invalid value reaches domain validation and is reported
/// with the offending field, instead of failing opaquely inside the JSON parser.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ClearanceRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,

    /// `stainless_steel`, `copper`, `plastic`, `steel`, or `cast_iron`.
    pub material: String,

    /// Nominal diameter in millimetres.
    #[serde(rename = "DN")]
    pub dn: i64,

    pub insulation: InsulationSpec,

    /// `parallel`, `bundled`, or `single`.
    pub layout: String,

    #[serde(default = "default_bundle_count")]
    pub bundle_count: i64,

    pub mount: MountSpec,

    pub context: SiteContext,
}

fn default_bundle_count() -> i64 {
    1
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InsulationSpec {
    /// `A1`, `A2`, `B`, `C`, `D`, `E`, or `F`.
    pub class: String,
    pub thickness_mm: i64,
    /// Wrapping identifiers, e.g. `metal_wrap_Z`.
    #[serde(default)]
    pub wrap: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MountSpec {
    pub clamp_spacing_m: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SiteContext {
    /// Installation location (shaft, wall, ceiling, ...).
    pub location: String,
    /// Federal state code (BY, BW, NW, ...).
    pub jurisdiction: String,
    pub building_class: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_original_field_names() {
        let req: ClearanceRequest = serde_json::from_value(json!({
            "product_id": "S-INOX-DN",
            "material": "stainless_steel",
            "DN": 200,
            "insulation": {"class": "A2", "thickness_mm": 30, "wrap": ["metal_wrap_Z"]},
            "layout": "parallel",
            "mount": {"clamp_spacing_m": 1.5},
            "context": {"location": "shaft", "jurisdiction": "BY", "building_class": "GK5"}
        }))
        .expect("deserialize");

        assert_eq!(req.dn, 200);
        assert_eq!(req.bundle_count, 1);
        assert_eq!(req.insulation.class, "A2");
        assert_eq!(req.insulation.wrap, vec!["metal_wrap_Z".to_string()]);
    }

    #[test]
    fn serializes_dn_with_upper_case_key() {
        let req = ClearanceRequest {
            product_id: None,
            material: "copper".to_string(),
            dn: 50,
            insulation: InsulationSpec {
                class: "B".to_string(),
                thickness_mm: 20,
                wrap: Vec::new(),
            },
            layout: "single".to_string(),
            bundle_count: 1,
            mount: MountSpec {
                clamp_spacing_m: 1.0,
            },
            context: SiteContext {
                location: "wall".to_string(),
                jurisdiction: "NW".to_string(),
                building_class: "GK3".to_string(),
            },
        };
        let value = serde_json::to_value(&req).expect("serialize");
        assert_eq!(value["DN"], 50);
        assert!(value.get("product_id").is_none());
    }
}
