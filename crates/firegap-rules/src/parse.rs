use crate::legacy;
use anyhow::Context;
use firegap_types::{RuleCatalogFile, RuleRecord, ids};
use serde_json::Value;

/// Parse one catalog file; the format is picked from the extension.
///
/// JSON catalogs may be a `{schema, rules}` object or a bare array. Entries
/// carrying `conditions_json` are converted with [`legacy::convert_legacy_rule`].
pub fn parse_catalog_text(path: &str, text: &str) -> anyhow::Result<Vec<RuleRecord>> {
    if path.ends_with(".toml") {
        let file: RuleCatalogFile = toml::from_str(text).context("parse TOML catalog")?;
        check_schema(file.schema.as_deref())?;
        return Ok(file.rules);
    }

    let value: Value = serde_json::from_str(text).context("parse JSON catalog")?;
    let entries = match value {
        Value::Array(entries) => entries,
        Value::Object(mut map) => {
            let schema = match map.remove("schema") {
                Some(Value::String(s)) => Some(s),
                Some(other) => anyhow::bail!("`schema` must be a string, got {other}"),
                None => None,
            };
            check_schema(schema.as_deref())?;
            if let Some(key) = map.keys().find(|k| k.as_str() != "rules") {
                anyhow::bail!("unknown catalog key `{key}`");
            }
            match map.remove("rules") {
                Some(Value::Array(entries)) => entries,
                Some(_) => anyhow::bail!("`rules` must be an array"),
                None => Vec::new(),
            }
        }
        _ => anyhow::bail!("catalog must be an object or an array of rules"),
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| parse_entry(entry).with_context(|| format!("rule #{i}")))
        .collect()
}

fn parse_entry(entry: Value) -> anyhow::Result<RuleRecord> {
    if legacy::is_legacy_shape(&entry) {
        return legacy::convert_legacy_rule(&entry);
    }
    Ok(serde_json::from_value(entry)?)
}

fn check_schema(schema: Option<&str>) -> anyhow::Result<()> {
    match schema {
        None => Ok(()),
        Some(s) if s == ids::SCHEMA_RULES_V1 => Ok(()),
        Some(other) => anyhow::bail!(
            "unsupported catalog schema `{other}` (expected `{}`)",
            ids::SCHEMA_RULES_V1
        ),
    }
}
