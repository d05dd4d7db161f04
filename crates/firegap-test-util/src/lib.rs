//! Shared test utilities for the firegap workspace.
//!
//! This crate exists because `xtask conform` needs fixture discovery and
//! `normalize_response` at runtime (not behind `#[cfg(test)]`).

use serde_json::Value;
use std::path::PathBuf;

/// File every fixture scenario carries.
pub const REQUEST_FILE: &str = "request.json";
/// Golden response; present for scenarios that succeed.
pub const EXPECTED_RESPONSE_FILE: &str = "expected.response.json";
/// Expected failure (`{"exit_code": 3, "stderr_contains": "..."}`); present for scenarios that fail.
pub const EXPECTED_ERROR_FILE: &str = "expected.error.json";
/// Optional per-scenario configuration.
pub const CONFIG_FILE: &str = "firegap.toml";

/// Repository root, derived from this crate's manifest directory.
pub fn workspace_root() -> PathBuf {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest
        .ancestors()
        .nth(2)
        .map(PathBuf::from)
        .unwrap_or(manifest)
}

/// `tests/fixtures/` at the repository root.
pub fn fixtures_dir() -> PathBuf {
    workspace_root().join("tests").join("fixtures")
}

/// Names of all fixture scenarios (directories holding a `request.json`), sorted.
pub fn fixture_names() -> std::io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(fixtures_dir())? {
        let entry = entry?;
        if entry.path().join(REQUEST_FILE).is_file()
            && let Some(name) = entry.file_name().to_str()
        {
            names.push(name.to_string());
        }
    }
    names.sort();
    Ok(names)
}

/// Normalize a clearance response for golden-file comparison.
///
/// `debug_info` is replaced with `null`: the trace embeds the full candidate
/// set, so fixtures compare decisions only. Missing optional keys are filled
/// in so hand-written goldens may omit `conditions_unmet`, `number` and `ref`.
pub fn normalize_response(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        obj.insert("debug_info".to_string(), Value::Null);
        obj.entry("conditions_unmet")
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Some(Value::Array(sources)) = obj.get_mut("sources") {
            for source in sources.iter_mut().filter_map(Value::as_object_mut) {
                source.entry("number").or_insert(Value::Null);
                source.entry("ref").or_insert(Value::Null);
            }
        }
    }
    value
}
