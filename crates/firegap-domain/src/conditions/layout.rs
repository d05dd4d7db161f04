use crate::model::ValidRequest;
use firegap_types::Layout;
use std::collections::BTreeSet;

pub fn check(allowed: &BTreeSet<Layout>, req: &ValidRequest) -> Option<String> {
    if allowed.contains(&req.layout) {
        return None;
    }
    Some(format!("Layout {} nicht erlaubt", req.layout))
}
