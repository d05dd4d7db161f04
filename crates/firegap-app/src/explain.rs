//! The `explain` use case: look up clause, status, and source documentation.

use firegap_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found an explanation for the identifier.
    Found(Explanation),
    /// Unknown identifier; includes everything that can be explained.
    NotFound {
        identifier: String,
        clause_kinds: &'static [&'static str],
        statuses: &'static [&'static str],
        source_types: &'static [&'static str],
    },
}

/// Look up an explanation for a clause kind, status literal, or source type.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier.trim()) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            clause_kinds: explain::all_clause_kinds(),
            statuses: explain::all_statuses(),
            source_types: explain::all_source_types(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.chars().count()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str("Remediation\n");
    out.push_str("-----------\n");
    out.push_str(exp.remediation);
    out.push('\n');

    if let Some(examples) = &exp.examples {
        out.push_str("\nExamples\n");
        out.push_str("--------\n\n");
        out.push_str("Before (clause fails):\n");
        out.push_str("```json\n");
        out.push_str(examples.before);
        out.push('\n');
        out.push_str("```\n\n");
        out.push_str("After (clause holds):\n");
        out.push_str("```json\n");
        out.push_str(examples.after);
        out.push('\n');
        out.push_str("```\n");
    }

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(
    identifier: &str,
    clause_kinds: &[&str],
    statuses: &[&str],
    source_types: &[&str],
) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown clause kind, status, or source type: {identifier}\n"));
    for (heading, items) in [
        ("Clause kinds", clause_kinds),
        ("Statuses", statuses),
        ("Source types", source_types),
    ] {
        out.push_str(&format!("\n{heading}:\n"));
        for item in items {
            out.push_str(&format!("  - {item}\n"));
        }
    }

    out
}
