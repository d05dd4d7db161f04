//! Closed vocabularies shared by requests, rules, and responses.
//!
//! Every enum round-trips through its wire literal via `as_str` / `parse`, so
//! the domain can validate permissive request strings against the same set the
//! rule catalogs are deserialized with.

use crate::ids;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    StainlessSteel,
    Copper,
    Plastic,
    Steel,
    CastIron,
}

impl Material {
    pub const ALL: [Material; 5] = [
        Material::StainlessSteel,
        Material::Copper,
        Material::Plastic,
        Material::Steel,
        Material::CastIron,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Material::StainlessSteel => "stainless_steel",
            Material::Copper => "copper",
            Material::Plastic => "plastic",
            Material::Steel => "steel",
            Material::CastIron => "cast_iron",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == s)
    }

    /// German display label.
    pub fn label(self) -> &'static str {
        match self {
            Material::StainlessSteel => "Edelstahl",
            Material::Copper => "Kupfer",
            Material::Plastic => "Kunststoff",
            Material::Steel => "Stahl",
            Material::CastIron => "Gusseisen",
        }
    }
}

/// Building-material fire class of the insulation (EN 13501-1 style letters).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum InsulationClass {
    A1,
    A2,
    B,
    C,
    D,
    E,
    F,
}

impl InsulationClass {
    pub const ALL: [InsulationClass; 7] = [
        InsulationClass::A1,
        InsulationClass::A2,
        InsulationClass::B,
        InsulationClass::C,
        InsulationClass::D,
        InsulationClass::E,
        InsulationClass::F,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            InsulationClass::A1 => "A1",
            InsulationClass::A2 => "A2",
            InsulationClass::B => "B",
            InsulationClass::C => "C",
            InsulationClass::D => "D",
            InsulationClass::E => "E",
            InsulationClass::F => "F",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }

    pub fn is_non_combustible(self) -> bool {
        matches!(self, InsulationClass::A1 | InsulationClass::A2)
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Parallel,
    Bundled,
    Single,
}

impl Layout {
    pub const ALL: [Layout; 3] = [Layout::Parallel, Layout::Bundled, Layout::Single];

    pub fn as_str(self) -> &'static str {
        match self {
            Layout::Parallel => "parallel",
            Layout::Bundled => "bundled",
            Layout::Single => "single",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == s)
    }
}

/// Kind of document a clearance value is cited from.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum ApprovalType {
    /// allgemeines bauaufsichtliches Prüfzeugnis
    #[serde(rename = "AbP")]
    Abp,
    /// allgemeine bauaufsichtliche Zulassung
    #[serde(rename = "AbZ")]
    Abz,
    /// European Technical Assessment
    #[serde(rename = "ETA")]
    Eta,
    /// Muster-Leitungsanlagen-Richtlinie (jurisdiction default)
    #[serde(rename = "MLAR")]
    Mlar,
}

impl ApprovalType {
    pub const ALL: [ApprovalType; 4] = [
        ApprovalType::Abp,
        ApprovalType::Abz,
        ApprovalType::Eta,
        ApprovalType::Mlar,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ApprovalType::Abp => ids::SOURCE_ABP,
            ApprovalType::Abz => ids::SOURCE_ABZ,
            ApprovalType::Eta => ids::SOURCE_ETA,
            ApprovalType::Mlar => ids::SOURCE_MLAR,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

/// Outcome label of a clearance decision. The German literals are the wire format.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum ClearanceStatus {
    #[serde(rename = "zulässig")]
    Permitted,
    #[serde(rename = "bedingt zulässig")]
    Conditional,
    #[serde(rename = "nicht zulässig")]
    NotPermitted,
    #[serde(rename = "default")]
    Default,
}

impl ClearanceStatus {
    pub const ALL: [ClearanceStatus; 4] = [
        ClearanceStatus::Permitted,
        ClearanceStatus::Conditional,
        ClearanceStatus::NotPermitted,
        ClearanceStatus::Default,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ClearanceStatus::Permitted => ids::STATUS_PERMITTED,
            ClearanceStatus::Conditional => ids::STATUS_CONDITIONAL,
            ClearanceStatus::NotPermitted => ids::STATUS_NOT_PERMITTED,
            ClearanceStatus::Default => ids::STATUS_DEFAULT,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|st| st.as_str() == s)
    }
}

macro_rules! display_as_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(Material, InsulationClass, Layout, ApprovalType, ClearanceStatus);
