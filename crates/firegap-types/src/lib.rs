//! Stable DTOs and IDs used across the firegap workspace.
//!
//! This crate is intentionally boring:
//! - wire types for clearance requests, responses, and rule records
//! - the closed vocabularies (materials, insulation classes, layouts, statuses)
//! - stable string IDs for clause kinds and schemas
//! - explain registry for clause kinds, statuses, and source types

#![forbid(unsafe_code)]

pub mod date;
pub mod explain;
pub mod ids;
pub mod request;
pub mod response;
pub mod rule;
pub mod vocab;

pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use request::{ClearanceRequest, InsulationSpec, MountSpec, SiteContext};
pub use response::{ClearanceResponse, ClearanceSource, DebugTrace, RuleEvaluation};
pub use rule::{ApprovalRef, ConditionClause, RuleCatalogFile, RuleRecord, RuleResult, SourceRef};
pub use vocab::{ApprovalType, ClearanceStatus, InsulationClass, Layout, Material};
