//! Pure clearance evaluation (no IO).
//!
//! Input: a clearance request and the candidate rules a rule store produced.
//! Output: one clearance decision with every supporting citation.

#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod policy;
pub mod select;
pub mod validate;

mod conditions;
mod engine;
mod unmet;

pub use conditions::{RuleOutcome, evaluate_rule};
pub use engine::{compute, compute_validated};
pub use error::{ComputationError, EngineError, ValidationError};

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;
