//! Render use cases and output helpers.

use anyhow::Context;
use camino::Utf8Path;
use firegap_types::ClearanceResponse;

pub fn render_markdown(response: &ClearanceResponse) -> String {
    firegap_render::render_markdown(response)
}

pub fn render_summary_line(response: &ClearanceResponse) -> String {
    firegap_render::render_summary_line(response)
}

/// Write `text` to `path`, creating parent directories.
pub fn write_text(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create {parent}"))?;
    }
    std::fs::write(path, text).with_context(|| format!("write {path}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use firegap_types::ClearanceStatus;
    use tempfile::TempDir;

    fn floor() -> ClearanceResponse {
        ClearanceResponse {
            min_clearance_mm: 100,
            status: ClearanceStatus::NotPermitted,
            conditions_unmet: Vec::new(),
            sources: Vec::new(),
            notes: String::new(),
            debug_info: None,
        }
    }

    #[test]
    fn render_helpers_smoke() {
        assert!(render_markdown(&floor()).contains("**100 mm**"));
        assert_eq!(
            render_summary_line(&floor()),
            "100 mm (nicht zulässig) - keine Quelle"
        );
    }

    #[test]
    fn write_text_creates_parents() {
        let tmp = TempDir::new().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8");
        let path = root.join("out/nested/report.md");
        write_text(&path, "# x\n").expect("write");
        assert_eq!(std::fs::read_to_string(&path).expect("read"), "# x\n");
    }
}
