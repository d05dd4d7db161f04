use crate::model::ValidRequest;
use firegap_types::Material;
use std::collections::BTreeSet;

pub fn check(allowed: &BTreeSet<Material>, req: &ValidRequest) -> Option<String> {
    if allowed.contains(&req.material) {
        return None;
    }
    Some(format!(
        "Material {} nicht in erlaubten Materialien",
        req.material
    ))
}
