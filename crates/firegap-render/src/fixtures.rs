use firegap_types::{
    ApprovalType, ClearanceResponse, ClearanceSource, ClearanceStatus, DebugTrace,
    RuleEvaluation,
};

pub fn approval_response() -> ClearanceResponse {
    ClearanceResponse {
        min_clearance_mm: 25,
        status: ClearanceStatus::Conditional,
        conditions_unmet: vec!["Metallummantelung metal_wrap_Y erforderlich".to_string()],
        sources: vec![
            ClearanceSource {
                kind: ApprovalType::Abp,
                number: Some("ABP-2024-INOX-001".to_string()),
                anchor: "sec-3.2".to_string(),
                url: "https://www.dibt.de/de/zulassungen/abp-2024-inox-001".to_string(),
                reference: None,
            },
            ClearanceSource {
                kind: ApprovalType::Abz,
                number: Some("Z-19.17-1".to_string()),
                anchor: "rule-abz-1".to_string(),
                url: "#".to_string(),
                reference: Some("Anlage 2".to_string()),
            },
        ],
        notes: "25 mm mit Metallummantelung Y.".to_string(),
        debug_info: None,
    }
}

pub fn mlar_response() -> ClearanceResponse {
    ClearanceResponse {
        min_clearance_mm: 50,
        status: ClearanceStatus::Default,
        conditions_unmet: Vec::new(),
        sources: vec![ClearanceSource {
            kind: ApprovalType::Mlar,
            number: None,
            anchor: "mlar-3.2.1".to_string(),
            url: "https://www.mlar-brandschutz.de/kapitel-3".to_string(),
            reference: Some("Kapitel 3.2.1 - Mindestabstände für Rohrleitungen".to_string()),
        }],
        notes: "MLAR Standardregelung angewendet - keine spezifische Zulassung gefunden."
            .to_string(),
        debug_info: Some(DebugTrace {
            rules_loaded: 2,
            approval_matches: 0,
            rules: Vec::new(),
            evaluations: vec![RuleEvaluation {
                rule_id: "abp-2024-inox-001".to_string(),
                matched: false,
                reasons: vec!["Fehlende Ummantelung: metal_wrap_Z".to_string()],
            }],
        }),
    }
}

pub fn floor_response() -> ClearanceResponse {
    ClearanceResponse {
        min_clearance_mm: 100,
        status: ClearanceStatus::NotPermitted,
        conditions_unmet: vec!["Keine anwendbare Regel gefunden".to_string()],
        sources: Vec::new(),
        notes: "Keine anwendbare Brandschutzregel für diese Konfiguration gefunden. Bitte Einzelfallprüfung durchführen.".to_string(),
        debug_info: None,
    }
}
