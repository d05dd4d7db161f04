use crate::model::ValidRequest;

pub fn check_dn(max: u32, req: &ValidRequest) -> Option<String> {
    (req.dn > max).then(|| format!("DN {} > max erlaubte {}", req.dn, max))
}

pub fn check_bundle(max: u32, req: &ValidRequest) -> Option<String> {
    (req.bundle_count > max).then(|| format!("Bündelanzahl {} > max {}", req.bundle_count, max))
}
