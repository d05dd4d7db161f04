use crate::conditions::evaluate_rule;
use crate::error::{ComputationError, EngineError};
use crate::model::{Rule, ValidRequest};
use crate::policy::{self, EngineConfig};
use crate::select::{strictest, union_sources};
use crate::unmet::unmet_conditions;
use crate::validate::validate_request;
use firegap_types::{
    ClearanceRequest, ClearanceResponse, ClearanceStatus, DebugTrace, RuleEvaluation, RuleRecord,
};

/// Validate `request`, then decide its clearance against `rules`.
pub fn compute(
    request: &ClearanceRequest,
    rules: &[RuleRecord],
    cfg: &EngineConfig,
    debug: bool,
) -> Result<ClearanceResponse, EngineError> {
    let valid = validate_request(request)?;
    Ok(compute_validated(&valid, rules, cfg, debug)?)
}

/// Decide the clearance for an already validated request.
///
/// Every record is interpreted up front, so malformed rule data fails the
/// whole call even if the rule would not have matched.
pub fn compute_validated(
    req: &ValidRequest,
    rules: &[RuleRecord],
    cfg: &EngineConfig,
    debug: bool,
) -> Result<ClearanceResponse, ComputationError> {
    let mut interpreted = rules
        .iter()
        .enumerate()
        .map(|(i, record)| Rule::interpret(i, record))
        .collect::<Result<Vec<_>, _>>()?;

    // Stable: equal priorities keep input order.
    interpreted.sort_by(|a, b| b.priority.cmp(&a.priority));

    let mut evaluations = Vec::new();
    let mut matches: Vec<&Rule> = Vec::new();
    for rule in interpreted.iter().filter(|r| r.is_approval_linked()) {
        let outcome = evaluate_rule(rule, req);
        if outcome.matched {
            matches.push(rule);
        }
        evaluations.push(RuleEvaluation {
            rule_id: rule.id.clone(),
            matched: outcome.matched,
            reasons: outcome.reasons,
        });
    }

    let mut response = match strictest(&matches) {
        Some(governing) => ClearanceResponse {
            min_clearance_mm: governing.result.min_clearance_mm,
            status: governing.result.status,
            conditions_unmet: unmet_conditions(&matches, req),
            sources: union_sources(&matches),
            notes: governing.result.notes.clone(),
            debug_info: None,
        },
        None => match cfg.fallback.fallback_for(&req.jurisdiction) {
            Some(fallback) => ClearanceResponse {
                min_clearance_mm: fallback.min_clearance_mm,
                status: fallback.status(),
                conditions_unmet: Vec::new(),
                sources: vec![fallback.source.clone()],
                notes: fallback.notes.clone(),
                debug_info: None,
            },
            None => ClearanceResponse {
                min_clearance_mm: policy::HARD_FLOOR_CLEARANCE_MM,
                status: ClearanceStatus::NotPermitted,
                conditions_unmet: policy::hard_floor_unmet(),
                sources: Vec::new(),
                notes: policy::HARD_FLOOR_NOTES.to_string(),
                debug_info: None,
            },
        },
    };

    if debug {
        response.debug_info = Some(DebugTrace {
            rules_loaded: count(rules.len()),
            approval_matches: count(matches.len()),
            rules: rules.to_vec(),
            evaluations,
        });
    }

    Ok(response)
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
