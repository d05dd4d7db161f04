//! Wire request to [`ValidRequest`].
//!
//! The first offending field wins; fields are checked in wire order.

use crate::error::ValidationError;
use crate::model::ValidRequest;
use firegap_types::{ClearanceRequest, InsulationClass, Layout, Material};
use std::collections::BTreeSet;

pub fn validate_request(req: &ClearanceRequest) -> Result<ValidRequest, ValidationError> {
    let material = Material::parse(req.material.trim()).ok_or_else(|| {
        ValidationError::new(
            "material",
            format!(
                "unknown material `{}`; expected one of {}",
                req.material,
                list(Material::ALL.iter().map(|m| m.as_str()))
            ),
        )
    })?;

    let dn = positive("DN", req.dn)?;

    let insulation_class = InsulationClass::parse(req.insulation.class.trim()).ok_or_else(|| {
        ValidationError::new(
            "insulation.class",
            format!(
                "unknown insulation class `{}`; expected one of {}",
                req.insulation.class,
                list(InsulationClass::ALL.iter().map(|c| c.as_str()))
            ),
        )
    })?;

    let insulation_thickness_mm = u32::try_from(req.insulation.thickness_mm).map_err(|_| {
        ValidationError::new(
            "insulation.thickness_mm",
            format!("must be a non-negative integer, got {}", req.insulation.thickness_mm),
        )
    })?;

    let mut wraps = BTreeSet::new();
    for (i, wrap) in req.insulation.wrap.iter().enumerate() {
        let wrap = wrap.trim();
        if wrap.is_empty() {
            return Err(ValidationError::new(
                format!("insulation.wrap[{i}]"),
                "wrap identifier is empty",
            ));
        }
        wraps.insert(wrap.to_string());
    }

    let layout = Layout::parse(req.layout.trim()).ok_or_else(|| {
        ValidationError::new(
            "layout",
            format!(
                "unknown layout `{}`; expected one of {}",
                req.layout,
                list(Layout::ALL.iter().map(|l| l.as_str()))
            ),
        )
    })?;

    let bundle_count = positive("bundle_count", req.bundle_count)?;

    let clamp_spacing_m = req.mount.clamp_spacing_m;
    if !clamp_spacing_m.is_finite() || clamp_spacing_m <= 0.0 {
        return Err(ValidationError::new(
            "mount.clamp_spacing_m",
            format!("must be a positive number of metres, got {clamp_spacing_m}"),
        ));
    }

    let location = non_empty("context.location", &req.context.location)?;
    // State codes compare case-insensitively against fallback overrides.
    let jurisdiction =
        non_empty("context.jurisdiction", &req.context.jurisdiction)?.to_ascii_uppercase();
    let building_class = non_empty("context.building_class", &req.context.building_class)?;

    Ok(ValidRequest {
        product_id: req
            .product_id
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string),
        material,
        dn,
        insulation_class,
        insulation_thickness_mm,
        wraps,
        layout,
        bundle_count,
        clamp_spacing_m,
        location,
        jurisdiction,
        building_class,
    })
}

fn positive(field: &str, value: i64) -> Result<u32, ValidationError> {
    match u32::try_from(value) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(ValidationError::new(
            field,
            format!("must be a positive integer, got {value}"),
        )),
    }
}

fn non_empty(field: &str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    Ok(trimmed.to_string())
}

fn list<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items.collect::<Vec<_>>().join(", ")
}
