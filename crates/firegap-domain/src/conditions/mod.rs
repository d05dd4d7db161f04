//! Per-clause evaluation.
//!
//! Every clause of a rule is checked; a rule matches only when no clause
//! produced a reason. Reason texts are German and end up in the debug trace.

use crate::model::{Condition, Rule, ValidRequest};

mod dimensions;
mod insulation;
mod layout;
mod material;
mod mount;


#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleOutcome {
    pub matched: bool,
    pub reasons: Vec<String>,
}

pub fn evaluate_rule(rule: &Rule, req: &ValidRequest) -> RuleOutcome {
    let mut reasons = Vec::new();
    for condition in &rule.conditions {
        if let Some(reason) = check(condition, req) {
            reasons.push(reason);
        }
    }
    RuleOutcome {
        matched: reasons.is_empty(),
        reasons,
    }
}

fn check(condition: &Condition, req: &ValidRequest) -> Option<String> {
    match condition {
        Condition::MaterialIn(allowed) => material::check(allowed, req),
        Condition::DnMax(max) => dimensions::check_dn(*max, req),
        Condition::BundleCountMax(max) => dimensions::check_bundle(*max, req),
        Condition::InsulationClassIn(allowed) => insulation::check_class(allowed, req),
        Condition::RequiresWrap(required) => insulation::check_wraps(required, req),
        Condition::LayoutIn(allowed) => layout::check(allowed, req),
        Condition::ClampSpacingMax(max) => mount::check(*max, req),
    }
}
