use crate::model::ValidRequest;
use firegap_types::InsulationClass;
use std::collections::BTreeSet;

pub fn check_class(allowed: &BTreeSet<InsulationClass>, req: &ValidRequest) -> Option<String> {
    if allowed.contains(&req.insulation_class) {
        return None;
    }
    Some(format!("Dämmklasse {} nicht erlaubt", req.insulation_class))
}

/// All listed wraps must be present; extra wraps on the request are fine.
pub fn check_wraps(required: &[String], req: &ValidRequest) -> Option<String> {
    let missing: Vec<&str> = required
        .iter()
        .map(String::as_str)
        .filter(|w| !req.has_wrap(w))
        .collect();
    if missing.is_empty() {
        return None;
    }
    Some(format!("Fehlende Ummantelung: {}", missing.join(", ")))
}
