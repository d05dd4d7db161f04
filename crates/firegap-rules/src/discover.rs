use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use globset::{Glob, GlobSet, GlobSetBuilder};
use walkdir::WalkDir;

/// Catalog files below `dir` whose relative path matches one of `include`.
///
/// Returned paths are relative to `dir`, use `/` separators, and are sorted.
/// Non-UTF-8 paths are skipped.
pub fn discover_catalogs(dir: &Utf8Path, include: &[String]) -> anyhow::Result<Vec<Utf8PathBuf>> {
    anyhow::ensure!(dir.is_dir(), "rule directory {dir} does not exist");
    let set = build_globset(include).context("compile include globset")?;

    let mut out = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry.with_context(|| format!("walk {dir}"))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(abs) = Utf8Path::from_path(entry.path()) else {
            tracing::warn!(path = %entry.path().display(), "skipping non-UTF-8 path");
            continue;
        };
        let rel = abs
            .strip_prefix(dir)
            .unwrap_or(abs)
            .as_str()
            .replace('\\', "/");
        if set.is_match(&rel) {
            out.push(Utf8PathBuf::from(rel));
        }
    }

    // Stable order.
    out.sort();
    out.dedup();
    Ok(out)
}

fn build_globset(patterns: &[String]) -> anyhow::Result<GlobSet> {
    let mut b = GlobSetBuilder::new();
    for p in patterns {
        b.add(Glob::new(p).with_context(|| format!("invalid include glob: {p}"))?);
    }
    Ok(b.build()?)
}
