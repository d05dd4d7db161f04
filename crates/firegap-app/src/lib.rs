//! Use case orchestration for firegap.
//!
//! This crate provides the application layer: use cases that coordinate the domain, rule store,
//! settings, and render layers. It is intentionally thin.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod compute;
mod explain;
mod render;
mod response;
mod rules;

pub use compute::{
    CatalogSummary, ClearanceService, ComputeInput, ComputeOutput, EXIT_INTERNAL, EXIT_VALIDATION,
    exit_code_for_error, run_compute,
};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use render::{render_markdown, render_summary_line, write_text};
pub use response::{parse_response_json, serialize_response};
pub use rules::{RuleListing, RuleProblem, RulesInput, RulesOutput, format_rules_table, run_rules};
