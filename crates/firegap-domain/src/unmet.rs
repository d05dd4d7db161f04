use crate::model::{Rule, ValidRequest};
use firegap_types::ids::WRAP_REQUIREMENT_PREFIX;

/// Union of `must_have` entries the request does not satisfy.
///
/// Only wrap requirements are recognised; other entries are skipped.
pub fn unmet_conditions(matches: &[&Rule], req: &ValidRequest) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for requirement in matches.iter().flat_map(|r| r.result.must_have.iter()) {
        let requirement = requirement.trim();
        if !requirement.starts_with(WRAP_REQUIREMENT_PREFIX) || req.has_wrap(requirement) {
            continue;
        }
        let line = format!("Metallummantelung {requirement} erforderlich");
        if !out.contains(&line) {
            out.push(line);
        }
    }
    out
}
