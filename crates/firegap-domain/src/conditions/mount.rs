use crate::model::ValidRequest;

/// Spacing equal to the ceiling is inside the tested range.
pub fn check(max: f64, req: &ValidRequest) -> Option<String> {
    (req.clamp_spacing_m > max).then(|| {
        format!(
            "Befestigungsabstand {}m > max {}m",
            req.clamp_spacing_m, max
        )
    })
}
