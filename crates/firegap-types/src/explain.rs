//! Explain registry for clause kinds, statuses, and source types.
//!
//! Maps stable identifiers to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a clause kind, status, or source type.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the identifier.
    pub title: &'static str,
    /// What it means for a clearance decision.
    pub description: &'static str,
    /// What to change in the configuration when it blocks an approval.
    pub remediation: &'static str,
    /// Request fragments that fail and satisfy a clause; absent for statuses and sources.
    pub examples: Option<ExamplePair>,
}

/// Before and after request fragments.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Fragment that does not satisfy the clause.
    pub before: &'static str,
    /// Fragment that does.
    pub after: &'static str,
}

/// Look up an explanation by clause kind, status literal, or source type.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Clause kinds
        ids::CLAUSE_MATERIAL_IN => Some(explain_material_in()),
        ids::CLAUSE_DN_MAX => Some(explain_dn_max()),
        ids::CLAUSE_INSULATION_CLASS_IN => Some(explain_insulation_class_in()),
        ids::CLAUSE_LAYOUT_IN => Some(explain_layout_in()),
        ids::CLAUSE_BUNDLE_COUNT_MAX => Some(explain_bundle_count_max()),
        ids::CLAUSE_CLAMP_SPACING_M_MAX => Some(explain_clamp_spacing_m_max()),
        ids::CLAUSE_REQUIRES_WRAP => Some(explain_requires_wrap()),

        // Statuses
        ids::STATUS_PERMITTED => Some(explain_permitted()),
        ids::STATUS_CONDITIONAL => Some(explain_conditional()),
        ids::STATUS_NOT_PERMITTED => Some(explain_not_permitted()),
        ids::STATUS_DEFAULT => Some(explain_default()),

        // Source types
        ids::SOURCE_ABP => Some(explain_abp()),
        ids::SOURCE_ABZ => Some(explain_abz()),
        ids::SOURCE_ETA => Some(explain_eta()),
        ids::SOURCE_MLAR => Some(explain_mlar()),

        _ => None,
    }
}

/// List all known clause kinds.
pub fn all_clause_kinds() -> &'static [&'static str] {
    &[
        ids::CLAUSE_MATERIAL_IN,
        ids::CLAUSE_DN_MAX,
        ids::CLAUSE_INSULATION_CLASS_IN,
        ids::CLAUSE_LAYOUT_IN,
        ids::CLAUSE_BUNDLE_COUNT_MAX,
        ids::CLAUSE_CLAMP_SPACING_M_MAX,
        ids::CLAUSE_REQUIRES_WRAP,
    ]
}

/// List all status literals.
pub fn all_statuses() -> &'static [&'static str] {
    &[
        ids::STATUS_PERMITTED,
        ids::STATUS_CONDITIONAL,
        ids::STATUS_NOT_PERMITTED,
        ids::STATUS_DEFAULT,
    ]
}

/// List all source types.
pub fn all_source_types() -> &'static [&'static str] {
    &[
        ids::SOURCE_ABP,
        ids::SOURCE_ABZ,
        ids::SOURCE_ETA,
        ids::SOURCE_MLAR,
    ]
}

// --- Clause kinds ---

fn explain_material_in() -> Explanation {
    Explanation {
        title: "Material Whitelist",
        description: "\
The approval only covers pipes made of the listed materials. A request with any \
other material is outside the scope of the approval.",
        remediation: "\
Use a pipe material covered by the approval, or look for an approval that covers \
the material in use.",
        examples: Some(ExamplePair {
            before: r#"{"material": "copper"}"#,
            after: r#"{"material": "stainless_steel"}"#,
        }),
    }
}

fn explain_dn_max() -> Explanation {
    Explanation {
        title: "Nominal Diameter Ceiling",
        description: "\
The approval was tested up to a maximum nominal diameter (DN). Larger pipes are not \
covered, regardless of insulation or layout.",
        remediation: "\
Reduce the nominal diameter to the tested maximum or use an approval tested for the \
larger size.",
        examples: Some(ExamplePair {
            before: r#"{"DN": 250}"#,
            after: r#"{"DN": 200}"#,
        }),
    }
}

fn explain_insulation_class_in() -> Explanation {
    Explanation {
        title: "Insulation Class Whitelist",
        description: "\
The approval requires insulation of one of the listed building-material classes, \
typically the non-combustible classes A1 or A2.",
        remediation: "Switch to an insulation product of a permitted class.",
        examples: Some(ExamplePair {
            before: r#"{"insulation": {"class": "B", "thickness_mm": 30}}"#,
            after: r#"{"insulation": {"class": "A2", "thickness_mm": 30}}"#,
        }),
    }
}

fn explain_layout_in() -> Explanation {
    Explanation {
        title: "Layout Whitelist",
        description: "\
The approval covers only the listed installation layouts (parallel, bundled, single).",
        remediation: "Route the pipes in one of the tested layouts.",
        examples: Some(ExamplePair {
            before: r#"{"layout": "bundled"}"#,
            after: r#"{"layout": "parallel"}"#,
        }),
    }
}

fn explain_bundle_count_max() -> Explanation {
    Explanation {
        title: "Bundle Size Ceiling",
        description: "\
The approval allows at most the given number of pipes in one bundle.",
        remediation: "Split the bundle so that no bundle exceeds the permitted count.",
        examples: Some(ExamplePair {
            before: r#"{"bundle_count": 4}"#,
            after: r#"{"bundle_count": 2}"#,
        }),
    }
}

fn explain_clamp_spacing_m_max() -> Explanation {
    Explanation {
        title: "Clamp Spacing Ceiling",
        description: "\
Pipe clamps must not be further apart than the tested spacing, otherwise the pipe may \
sag into the neighbouring service in a fire.",
        remediation: "Add clamps until the spacing is at or below the permitted maximum.",
        examples: Some(ExamplePair {
            before: r#"{"mount": {"clamp_spacing_m": 2.0}}"#,
            after: r#"{"mount": {"clamp_spacing_m": 1.5}}"#,
        }),
    }
}

fn explain_requires_wrap() -> Explanation {
    Explanation {
        title: "Required Wrapping",
        description: "\
The approval only applies when every listed wrapping is present on the insulation. \
Missing wraps exclude the approval and are also reported as unmet conditions when \
another approval applies.",
        remediation: "Add the listed wrapping (for example metal wrap type Z) to the insulation.",
        examples: Some(ExamplePair {
            before: r#"{"insulation": {"class": "A2", "thickness_mm": 30, "wrap": []}}"#,
            after: r#"{"insulation": {"class": "A2", "thickness_mm": 30, "wrap": ["metal_wrap_Z"]}}"#,
        }),
    }
}

// --- Statuses ---

fn explain_permitted() -> Explanation {
    Explanation {
        title: "zulässig (permitted)",
        description: "\
A specific approval covers the configuration and the stated clearance may be used.",
        remediation: "No action required beyond the notes of the cited approval.",
        examples: None,
    }
}

fn explain_conditional() -> Explanation {
    Explanation {
        title: "bedingt zulässig (conditionally permitted)",
        description: "\
An approval covers the configuration provided that additional requirements are met. \
Unmet requirements are listed in `conditions_unmet`.",
        remediation: "Fulfil every listed requirement before relying on the clearance.",
        examples: None,
    }
}

fn explain_not_permitted() -> Explanation {
    Explanation {
        title: "nicht zulässig (not permitted)",
        description: "\
No approval and no jurisdiction default applies. The conservative clearance of 100 mm \
is returned and the configuration needs a case-by-case review.",
        remediation: "Request an individual assessment (Einzelfallprüfung) or change the configuration.",
        examples: None,
    }
}

fn explain_default() -> Explanation {
    Explanation {
        title: "default (jurisdiction default)",
        description: "\
No specific approval matched, so the jurisdiction-wide default of the MLAR applies. \
This is a regular outcome, not an error.",
        remediation: "Keep the default clearance, or meet the conditions of an approval to reduce it.",
        examples: None,
    }
}

// --- Source types ---

fn explain_abp() -> Explanation {
    Explanation {
        title: "AbP",
        description: "allgemeines bauaufsichtliches Prüfzeugnis: a general test certificate for a construction product.",
        remediation: "Check that the certificate number and version match the installed product.",
        examples: None,
    }
}

fn explain_abz() -> Explanation {
    Explanation {
        title: "AbZ",
        description: "allgemeine bauaufsichtliche Zulassung: a general technical approval issued by the DIBt.",
        remediation: "Check that the approval is still valid on the installation date.",
        examples: None,
    }
}

fn explain_eta() -> Explanation {
    Explanation {
        title: "ETA",
        description: "European Technical Assessment for a construction product.",
        remediation: "Check the national application document for the assessment.",
        examples: None,
    }
}

fn explain_mlar() -> Explanation {
    Explanation {
        title: "MLAR",
        description: "\
Muster-Leitungsanlagen-Richtlinie: the model directive on fire protection for line \
installations, used as the regulatory floor when no approval applies.",
        remediation: "Check the state-specific adoption of the MLAR for the jurisdiction.",
        examples: None,
    }
}
