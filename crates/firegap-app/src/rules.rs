//! The `rules` use case: list and lint the configured rule catalog.

use crate::compute::load_catalog;
use camino::Utf8Path;
use firegap_domain::model::Rule;
use firegap_settings::Overrides;
use firegap_types::date::format_iso_date;
use firegap_types::RuleRecord;
use serde::Serialize;

/// Input for the rules use case.
#[derive(Clone, Debug)]
pub struct RulesInput<'a> {
    pub config_dir: &'a Utf8Path,
    pub config_text: &'a str,
    pub overrides: Overrides,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RulesOutput {
    pub rules_dir: String,
    pub digest: String,
    pub as_of: String,
    pub files: Vec<String>,
    pub rules: Vec<RuleListing>,
    pub problems: Vec<RuleProblem>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RuleListing {
    pub id: String,
    /// `AbP ABP-2024-INOX-001`; `None` for jurisdiction defaults.
    pub approval: Option<String>,
    pub priority: i32,
    pub clauses: Vec<&'static str>,
    pub min_clearance_mm: u32,
    pub status: String,
    pub valid_from: Option<String>,
    pub valid_to: Option<String>,
    /// Whether the validity window contains `as_of`.
    pub active: bool,
}

/// A rule the engine would refuse.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RuleProblem {
    pub rule_id: String,
    pub message: String,
}

impl RulesOutput {
    pub fn is_clean(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Load the catalog and describe every rule in it, highest priority first.
pub fn run_rules(input: RulesInput<'_>) -> anyhow::Result<RulesOutput> {
    let loaded = load_catalog(input.config_dir, input.config_text, input.overrides)?;

    let mut records: Vec<&RuleRecord> = loaded.catalog.rules.iter().collect();
    records.sort_by(|a, b| b.priority.cmp(&a.priority));

    let mut problems = Vec::new();
    for (index, record) in loaded.catalog.rules.iter().enumerate() {
        if let Err(err) = Rule::interpret(index, record) {
            tracing::warn!(rule = %record.id, error = %err, "rule would be rejected by the engine");
            problems.push(RuleProblem {
                rule_id: record.id.clone(),
                message: err.to_string(),
            });
        }
    }

    let rules = records
        .into_iter()
        .map(|r| RuleListing {
            id: r.id.clone(),
            approval: r
                .approval
                .as_ref()
                .map(|a| format!("{} {}", a.kind, a.number)),
            priority: r.priority,
            clauses: r.conditions.iter().map(|c| c.kind()).collect(),
            min_clearance_mm: r.result.min_clearance_mm,
            status: r.result.status.to_string(),
            valid_from: r.valid_from.map(format_iso_date),
            valid_to: r.valid_to.map(format_iso_date),
            active: r.is_valid_on(loaded.as_of),
        })
        .collect();

    Ok(RulesOutput {
        rules_dir: loaded.rules_dir.into_string(),
        digest: loaded.catalog.digest,
        as_of: format_iso_date(loaded.as_of),
        files: loaded.catalog.files.into_iter().map(|f| f.path).collect(),
        rules,
        problems,
    })
}

/// Plain-text listing for terminals.
pub fn format_rules_table(output: &RulesOutput) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} rules in {} file(s) from {} (as of {}, digest {})\n\n",
        output.rules.len(),
        output.files.len(),
        output.rules_dir,
        output.as_of,
        short_digest(&output.digest)
    ));

    for r in &output.rules {
        let approval = r.approval.as_deref().unwrap_or("-");
        let window = match (&r.valid_from, &r.valid_to) {
            (None, None) => "unbegrenzt".to_string(),
            (from, to) => format!(
                "{}..{}",
                from.as_deref().unwrap_or(""),
                to.as_deref().unwrap_or("")
            ),
        };
        let marker = if r.active { ' ' } else { '!' };
        out.push_str(&format!(
            "{marker} {:>4}  {:<24} {:<28} {:>4} mm  {:<18} {}\n",
            r.priority, r.id, approval, r.min_clearance_mm, r.status, window
        ));
        if !r.clauses.is_empty() {
            out.push_str(&format!("        {}\n", r.clauses.join(", ")));
        }
    }

    if !output.problems.is_empty() {
        out.push_str("\nProblems:\n");
        for p in &output.problems {
            out.push_str(&format!("  - {}: {}\n", p.rule_id, p.message));
        }
    }

    out
}

fn short_digest(digest: &str) -> &str {
    digest.get(..12).unwrap_or(digest)
}
