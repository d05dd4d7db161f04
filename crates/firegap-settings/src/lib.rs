//! Config parsing and profile/preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{FallbackConfig, FallbackSourceConfig, FiregapConfigV1, JurisdictionFallbackConfig};
pub use presets::{DEFAULT_PROFILE, PROFILES};
pub use resolve::{Overrides, ResolvedConfig, RuleSourceSettings};

/// Parse `firegap.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<FiregapConfigV1> {
    let cfg: FiregapConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config (profile + `[fallback]` + overrides).
pub fn resolve_config(cfg: FiregapConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
