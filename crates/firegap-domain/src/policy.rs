use firegap_types::{ApprovalType, ClearanceSource, ClearanceStatus, ids};
use std::collections::BTreeMap;

pub const MLAR_DEFAULT_CLEARANCE_MM: u32 = 50;
pub const MLAR_DEFAULT_ANCHOR: &str = "mlar-3.2.1";
pub const MLAR_DEFAULT_URL: &str = "https://www.mlar-brandschutz.de/kapitel-3";
pub const MLAR_DEFAULT_REF: &str = "Kapitel 3.2.1 - Mindestabstände für Rohrleitungen";
pub const MLAR_DEFAULT_NOTES: &str =
    "MLAR Standardregelung angewendet - keine spezifische Zulassung gefunden.";

pub const HARD_FLOOR_CLEARANCE_MM: u32 = 100;
pub const HARD_FLOOR_NOTES: &str = "Keine anwendbare Brandschutzregel für diese Konfiguration gefunden. Bitte Einzelfallprüfung durchführen.";

/// Jurisdiction default applied when no approval-linked rule matches.
#[derive(Clone, Debug, PartialEq)]
pub struct FallbackDescriptor {
    pub min_clearance_mm: u32,
    pub notes: String,
    pub source: ClearanceSource,
}

impl FallbackDescriptor {
    /// The nationwide MLAR default (50 mm, chapter 3.2.1).
    pub fn mlar() -> Self {
        Self {
            min_clearance_mm: MLAR_DEFAULT_CLEARANCE_MM,
            notes: MLAR_DEFAULT_NOTES.to_string(),
            source: ClearanceSource {
                kind: ApprovalType::Mlar,
                number: None,
                anchor: MLAR_DEFAULT_ANCHOR.to_string(),
                url: MLAR_DEFAULT_URL.to_string(),
                reference: Some(MLAR_DEFAULT_REF.to_string()),
            },
        }
    }

    pub fn status(&self) -> ClearanceStatus {
        ClearanceStatus::Default
    }
}

/// Which fallback applies where.
///
/// `jurisdictions` overrides `default` per state code; an override of `None`
/// disables the fallback for that state so the hard floor applies.
#[derive(Clone, Debug, PartialEq)]
pub struct FallbackPolicy {
    pub default: Option<FallbackDescriptor>,
    pub jurisdictions: BTreeMap<String, Option<FallbackDescriptor>>,
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        Self {
            default: Some(FallbackDescriptor::mlar()),
            jurisdictions: BTreeMap::new(),
        }
    }
}

impl FallbackPolicy {
    pub fn disabled() -> Self {
        Self {
            default: None,
            jurisdictions: BTreeMap::new(),
        }
    }

    pub fn fallback_for(&self, jurisdiction: &str) -> Option<&FallbackDescriptor> {
        match self.jurisdictions.get(jurisdiction) {
            Some(over) => over.as_ref(),
            None => self.default.as_ref(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EngineConfig {
    pub fallback: FallbackPolicy,
}

impl EngineConfig {
    /// No jurisdiction default anywhere; every miss hits the hard floor.
    pub fn conservative() -> Self {
        Self {
            fallback: FallbackPolicy::disabled(),
        }
    }
}

/// Marker placed in `conditions_unmet` when the hard floor applies.
pub fn hard_floor_unmet() -> Vec<String> {
    vec![ids::UNMET_NO_APPLICABLE_RULE.to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_uses_mlar_everywhere() {
        let policy = FallbackPolicy::default();
        let fb = policy.fallback_for("BY").expect("fallback");
        assert_eq!(fb.min_clearance_mm, 50);
        assert_eq!(fb.source.kind, ApprovalType::Mlar);
        assert!(fb.source.number.is_none());
    }

    #[test]
    fn jurisdiction_override_can_disable_or_replace() {
        let mut policy = FallbackPolicy::default();
        policy.jurisdictions.insert("HH".to_string(), None);
        let mut stricter = FallbackDescriptor::mlar();
        stricter.min_clearance_mm = 80;
        policy.jurisdictions.insert("BW".to_string(), Some(stricter));

        assert!(policy.fallback_for("HH").is_none());
        assert_eq!(policy.fallback_for("BW").map(|f| f.min_clearance_mm), Some(80));
        assert_eq!(policy.fallback_for("NW").map(|f| f.min_clearance_mm), Some(50));
    }

    #[test]
    fn conservative_disables_fallback() {
        assert!(EngineConfig::conservative().fallback.fallback_for("BY").is_none());
    }
}
