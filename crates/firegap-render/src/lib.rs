//! Rendering for human surfaces (Markdown reports, terminal summaries).

#![forbid(unsafe_code)]

mod markdown;
mod summary;

pub use markdown::render_markdown;
pub use summary::{render_summary_line, source_label};

#[cfg(test)]
mod fixtures;
