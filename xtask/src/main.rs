//! Developer tasks (schema generation, fixture conformance, explain coverage).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use firegap_app::{ComputeInput, run_compute};
use firegap_settings::Overrides;
use firegap_test_util::{
    CONFIG_FILE, EXPECTED_ERROR_FILE, EXPECTED_RESPONSE_FILE, REQUEST_FILE, fixture_names,
    fixtures_dir, normalize_response, workspace_root,
};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the schemas directory path.
fn schemas_dir() -> PathBuf {
    workspace_root().join("schemas")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_request_schema() -> schemars::Schema {
    schema_for!(firegap_types::ClearanceRequest)
}

fn generate_response_schema() -> schemars::Schema {
    schema_for!(firegap_types::ClearanceResponse)
}

fn generate_rules_schema() -> schemars::Schema {
    schema_for!(firegap_types::RuleCatalogFile)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(firegap_settings::FiregapConfigV1)
}

/// List of schemas to generate.
fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "firegap.request.v1.json",
            generate: generate_request_schema,
        },
        SchemaSpec {
            filename: "firegap.response.v1.json",
            generate: generate_response_schema,
        },
        SchemaSpec {
            filename: "firegap.rules.v1.json",
            generate: generate_rules_schema,
        },
        SchemaSpec {
            filename: "firegap.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Fail if schemas/ differs from what the types generate.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {name}");
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {name}");
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Run every fixture through the compute use case and");
    eprintln!("                    compare with its golden response (schema-checked)");
    eprintln!("  explain-coverage  Validate all clause kinds, statuses and source types have explanations");
}

fn read_json(path: &Path) -> anyhow::Result<serde_json::Value> {
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Outcome of one fixture run, compared against its expectation file.
fn conform_fixture(
    name: &str,
    response_schema: &jsonschema::Validator,
) -> anyhow::Result<Vec<String>> {
    let dir = fixtures_dir().join(name);
    let config_dir = Utf8PathBuf::from_path_buf(dir.clone())
        .map_err(|p| anyhow::anyhow!("fixture path is not UTF-8: {}", p.display()))?;
    let config_text = fs::read_to_string(dir.join(CONFIG_FILE)).unwrap_or_default();
    let request_json = fs::read_to_string(dir.join(REQUEST_FILE))
        .with_context(|| format!("{name}: read {REQUEST_FILE}"))?;

    let result = run_compute(ComputeInput {
        config_dir: &config_dir,
        config_text: &config_text,
        overrides: Overrides::default(),
        request_json: &request_json,
        debug: false,
    });

    let mut errors = Vec::new();
    let expected_response = dir.join(EXPECTED_RESPONSE_FILE);
    let expected_error = dir.join(EXPECTED_ERROR_FILE);

    match (result, expected_response.is_file()) {
        (Ok(output), true) => {
            let actual = serde_json::to_value(&output.response)?;
            for e in response_schema.iter_errors(&actual) {
                errors.push(format!("{name}: response violates schema: {e}"));
            }
            let expected = read_json(&expected_response)?;
            if normalize_response(actual) != normalize_response(expected) {
                errors.push(format!("{name}: response differs from {EXPECTED_RESPONSE_FILE}"));
            }
        }
        (Ok(_), false) => {
            errors.push(format!("{name}: succeeded but {EXPECTED_ERROR_FILE} expects a failure"));
        }
        (Err(err), _) if expected_error.is_file() => {
            let expected = read_json(&expected_error)?;
            let code = i64::from(firegap_app::exit_code_for_error(&err));
            if expected["exit_code"].as_i64() != Some(code) {
                errors.push(format!(
                    "{name}: exit code {code}, expected {}",
                    expected["exit_code"]
                ));
            }
            let message = format!("{err:#}");
            if let Some(needle) = expected["stderr_contains"].as_str()
                && !message.contains(needle)
            {
                errors.push(format!("{name}: error `{message}` does not contain `{needle}`"));
            }
        }
        (Err(err), _) => {
            errors.push(format!("{name}: unexpected error: {err:#}"));
        }
    }

    Ok(errors)
}

fn conform() -> anyhow::Result<()> {
    let schema_value = serde_json::to_value(generate_response_schema())?;
    let response_schema = jsonschema::validator_for(&schema_value)
        .map_err(|e| anyhow::anyhow!("Failed to compile response schema: {e}"))?;
    println!("✓ firegap.response.v1 schema compiles");

    let names = fixture_names().context("Failed to list tests/fixtures/")?;
    if names.is_empty() {
        bail!("no fixtures found in {}", fixtures_dir().display());
    }

    let mut errors = Vec::new();
    for name in &names {
        let fixture_errors = conform_fixture(name, &response_schema)?;
        if fixture_errors.is_empty() {
            println!("✓ {name}");
        }
        errors.extend(fixture_errors);
    }

    if errors.is_empty() {
        println!("\n✓ {} fixtures conform", names.len());
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {error}");
        }
        bail!("Conformance failed with {} errors", errors.len())
    }
}

/// Validate that all clause kinds, statuses and source types have explanations.
fn explain_coverage() -> anyhow::Result<()> {
    use firegap_types::explain::{
        all_clause_kinds, all_source_types, all_statuses, lookup_explanation,
    };

    let groups: [(&str, &[&str]); 3] = [
        ("Clause kind", all_clause_kinds()),
        ("Status", all_statuses()),
        ("Source type", all_source_types()),
    ];

    let mut errors = Vec::new();
    for (label, ids) in groups {
        for id in ids {
            match lookup_explanation(id) {
                Some(exp) => {
                    if exp.title.is_empty() {
                        errors.push(format!("{label} '{id}' has empty title"));
                    }
                    if exp.description.is_empty() {
                        errors.push(format!("{label} '{id}' has empty description"));
                    }
                    if exp.remediation.is_empty() {
                        errors.push(format!("{label} '{id}' has empty remediation"));
                    }
                    if label == "Clause kind" && exp.examples.is_none() {
                        errors.push(format!("{label} '{id}' has no examples"));
                    }
                }
                None => errors.push(format!("{label} '{id}' has no explanation")),
            }
        }
    }

    if errors.is_empty() {
        println!("✓ {} clause kinds have explanations", all_clause_kinds().len());
        println!("✓ {} statuses have explanations", all_statuses().len());
        println!("✓ {} source types have explanations", all_source_types().len());
        println!("\n✓ All explain coverage checks passed!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {error}");
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
