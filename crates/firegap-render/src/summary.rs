use firegap_types::{ClearanceResponse, ClearanceSource};

/// Short citation label: `AbP ABP-2024-INOX-001`, or `MLAR mlar-3.2.1` when
/// the source has no number.
pub fn source_label(source: &ClearanceSource) -> String {
    match &source.number {
        Some(number) => format!("{} {}", source.kind, number),
        None => format!("{} {}", source.kind, source.anchor),
    }
}

/// One line for terminals and logs.
pub fn render_summary_line(response: &ClearanceResponse) -> String {
    let sources = if response.sources.is_empty() {
        "keine Quelle".to_string()
    } else {
        response
            .sources
            .iter()
            .map(source_label)
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut line = format!(
        "{} mm ({}) - {}",
        response.min_clearance_mm, response.status, sources
    );
    match response.conditions_unmet.len() {
        0 => {}
        1 => line.push_str(" [1 Bedingung offen]"),
        n => line.push_str(&format!(" [{n} Bedingungen offen]")),
    }
    line
}
