//! Rule catalog adapters: discover catalog files, parse them, serve candidates.
//!
//! This crate is allowed to do filesystem IO. The engine never sees it; it only
//! receives the materialised candidate list a [`RuleStore`] returns.

#![forbid(unsafe_code)]

mod discover;
mod fingerprint;
pub mod legacy;
mod parse;
mod store;

use anyhow::Context;
use camino::Utf8Path;
use firegap_types::RuleRecord;
use rayon::prelude::*;
use std::collections::BTreeMap;

pub use discover::discover_catalogs;
pub use fingerprint::catalog_digest;
pub use parse::parse_catalog_text;
pub use store::{CandidateQuery, CatalogStore, RuleStore};

/// All rules found below one catalog directory.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RuleCatalog {
    /// Catalog files in load order (sorted relative paths).
    pub files: Vec<CatalogFile>,
    /// Rules in file order, then authoring order within a file.
    pub rules: Vec<RuleRecord>,
    /// SHA-256 over the sorted file paths and contents.
    pub digest: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogFile {
    pub path: String,
    pub rule_count: usize,
}

/// Discover and parse every catalog file below `dir`.
///
/// Files are read and parsed in parallel; the result does not depend on
/// scheduling. Rule ids must be unique across the whole directory.
pub fn load_catalog_dir(dir: &Utf8Path, include: &[String]) -> anyhow::Result<RuleCatalog> {
    let paths = discover_catalogs(dir, include)
        .with_context(|| format!("discover rule catalogs in {dir}"))?;

    let parsed: Vec<(String, String, Vec<RuleRecord>)> = paths
        .par_iter()
        .map(|rel| {
            let abs = dir.join(rel);
            let text = std::fs::read_to_string(&abs).with_context(|| format!("read {abs}"))?;
            let rules = parse_catalog_text(rel.as_str(), &text)
                .with_context(|| format!("parse rule catalog {rel}"))?;
            tracing::debug!(file = %rel, rules = rules.len(), "loaded rule catalog");
            Ok((rel.to_string(), text, rules))
        })
        .collect::<anyhow::Result<_>>()?;

    let digest = catalog_digest(
        parsed
            .iter()
            .map(|(path, text, _)| (path.as_str(), text.as_str())),
    );

    let mut seen: BTreeMap<String, String> = BTreeMap::new();
    let mut catalog = RuleCatalog {
        digest,
        ..RuleCatalog::default()
    };
    for (path, _, rules) in parsed {
        for rule in &rules {
            if let Some(first) = seen.insert(rule.id.clone(), path.clone()) {
                anyhow::bail!(
                    "duplicate rule id `{}` in {} (first defined in {})",
                    rule.id,
                    path,
                    first
                );
            }
        }
        catalog.files.push(CatalogFile {
            path,
            rule_count: rules.len(),
        });
        catalog.rules.extend(rules);
    }

    tracing::info!(
        files = catalog.files.len(),
        rules = catalog.rules.len(),
        digest = %catalog.digest,
        "rule catalog loaded"
    );
    Ok(catalog)
}
