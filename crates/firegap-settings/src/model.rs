use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `firegap.toml` schema v1.
///
/// User-facing and permissive: every key is optional and falls back to the
/// selected profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FiregapConfigV1 {
    /// Optional schema string for tooling (`firegap.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// `mlar` (default) or `conservative`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Rule catalog directory, relative to the config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules_dir: Option<String>,

    /// Glob patterns selecting catalog files inside `rules_dir`.
    #[serde(default)]
    pub include: Vec<String>,

    /// Date rule validity is checked against (`YYYY-MM-DD`). Defaults to today.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_of: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<FallbackConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FallbackConfig {
    /// Override the profile's enable/disable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_clearance_mm: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<FallbackSourceConfig>,

    /// Map of jurisdiction code -> override. Codes are case-insensitive.
    #[serde(default)]
    pub jurisdictions: BTreeMap<String, JurisdictionFallbackConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct JurisdictionFallbackConfig {
    /// `false` routes the jurisdiction to the hard default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_clearance_mm: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<FallbackSourceConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FallbackSourceConfig {
    /// `MLAR`, `AbP`, `AbZ` or `ETA`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}
