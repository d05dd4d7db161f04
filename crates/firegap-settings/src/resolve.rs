use crate::model::{FallbackConfig, FallbackSourceConfig, FiregapConfigV1, JurisdictionFallbackConfig};
use crate::presets;
use anyhow::{Context, bail};
use firegap_domain::policy::{EngineConfig, FallbackDescriptor};
use firegap_types::{ApprovalType, date::parse_iso_date};
use globset::Glob;
use time::Date;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub rules_dir: Option<String>,
    pub as_of: Option<String>,
}

/// Where the rule store reads catalogs from.
#[derive(Clone, Debug, PartialEq)]
pub struct RuleSourceSettings {
    /// As written; relative paths are resolved by the caller.
    pub rules_dir: String,
    pub include: Vec<String>,
    /// `None` means "today" at the time of the query.
    pub as_of: Option<Date>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub profile: String,
    pub engine: EngineConfig,
    pub rules: RuleSourceSettings,
}

pub fn resolve_config(cfg: FiregapConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let requested = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| presets::DEFAULT_PROFILE.to_string());

    let (profile, mut engine) = presets::preset(&requested);

    if let Some(fallback) = &cfg.fallback {
        apply_fallback(&mut engine, fallback).context("invalid [fallback] section")?;
    }

    let include = if cfg.include.is_empty() {
        presets::default_include()
    } else {
        validate_include(&cfg.include)?;
        cfg.include.clone()
    };

    let as_of = match overrides.as_of.as_deref().or(cfg.as_of.as_deref()) {
        Some(raw) => Some(
            parse_iso_date(raw.trim())
                .with_context(|| format!("invalid as_of date: {raw} (expected YYYY-MM-DD)"))?,
        ),
        None => None,
    };

    let rules_dir = overrides
        .rules_dir
        .or(cfg.rules_dir)
        .unwrap_or_else(|| presets::DEFAULT_RULES_DIR.to_string());

    Ok(ResolvedConfig {
        profile: profile.to_string(),
        engine,
        rules: RuleSourceSettings {
            rules_dir,
            include,
            as_of,
        },
    })
}

fn apply_fallback(engine: &mut EngineConfig, cfg: &FallbackConfig) -> anyhow::Result<()> {
    let base = engine
        .fallback
        .default
        .clone()
        .unwrap_or_else(FallbackDescriptor::mlar);
    let configured = overlay(
        base,
        cfg.min_clearance_mm,
        cfg.notes.as_deref(),
        cfg.source.as_ref(),
    )?;

    // An explicit `enabled` wins over the profile; otherwise customising the
    // descriptor keeps the profile's on/off choice.
    let enabled = cfg.enabled.unwrap_or(engine.fallback.default.is_some());
    engine.fallback.default = enabled.then(|| configured.clone());

    // Keys are matched against upper-cased request jurisdictions.
    for (key, jc) in &cfg.jurisdictions {
        let jurisdiction = key.trim().to_ascii_uppercase();
        if jurisdiction.is_empty() {
            bail!("fallback jurisdiction key must not be empty");
        }
        let descriptor = resolve_jurisdiction(&configured, enabled, jc)
            .with_context(|| format!("invalid fallback override for jurisdiction {key}"))?;
        if engine
            .fallback
            .jurisdictions
            .insert(jurisdiction.clone(), descriptor)
            .is_some()
        {
            bail!("fallback jurisdiction {jurisdiction} is configured more than once");
        }
    }
    Ok(())
}

fn resolve_jurisdiction(
    base: &FallbackDescriptor,
    default_enabled: bool,
    jc: &JurisdictionFallbackConfig,
) -> anyhow::Result<Option<FallbackDescriptor>> {
    let touched = jc.min_clearance_mm.is_some() || jc.notes.is_some() || jc.source.is_some();
    let enabled = jc.enabled.unwrap_or(default_enabled || touched);
    if !enabled {
        return Ok(None);
    }
    let descriptor = overlay(
        base.clone(),
        jc.min_clearance_mm,
        jc.notes.as_deref(),
        jc.source.as_ref(),
    )?;
    Ok(Some(descriptor))
}

fn overlay(
    mut descriptor: FallbackDescriptor,
    min_clearance_mm: Option<u32>,
    notes: Option<&str>,
    source: Option<&FallbackSourceConfig>,
) -> anyhow::Result<FallbackDescriptor> {
    if let Some(mm) = min_clearance_mm {
        descriptor.min_clearance_mm = mm;
    }
    if let Some(notes) = notes {
        descriptor.notes = notes.to_string();
    }
    if let Some(src) = source {
        if let Some(kind) = src.kind.as_deref() {
            descriptor.source.kind = parse_source_type(kind)?;
        }
        if src.number.is_some() {
            descriptor.source.number = src.number.clone();
        }
        if let Some(anchor) = &src.anchor {
            anyhow::ensure!(!anchor.trim().is_empty(), "fallback source anchor is empty");
            descriptor.source.anchor = anchor.clone();
        }
        if let Some(url) = &src.url {
            descriptor.source.url = url.clone();
        }
        if src.reference.is_some() {
            descriptor.source.reference = src.reference.clone();
        }
    }
    Ok(descriptor)
}

fn parse_source_type(v: &str) -> anyhow::Result<ApprovalType> {
    ApprovalType::parse(v)
        .ok_or_else(|| anyhow::anyhow!("unknown source type: {v} (expected MLAR|AbP|AbZ|ETA)"))
}

fn validate_include(patterns: &[String]) -> anyhow::Result<()> {
    for pattern in patterns {
        Glob::new(pattern).with_context(|| format!("invalid include glob: {pattern}"))?;
    }
    Ok(())
}
