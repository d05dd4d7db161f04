use firegap_types::{ClearanceResponse, ClearanceSource};

pub fn render_markdown(response: &ClearanceResponse) -> String {
    let mut out = String::new();

    out.push_str("# Brandschutz-Abstandsnachweis\n\n");
    out.push_str(&format!(
        "- Mindestabstand: **{} mm**\n- Status: **{}**\n\n",
        response.min_clearance_mm, response.status
    ));

    out.push_str("## Quellen\n\n");
    if response.sources.is_empty() {
        out.push_str("Keine Quelle. Einzelfallprüfung erforderlich.\n\n");
    } else {
        for source in &response.sources {
            out.push_str(&source_line(source));
        }
        out.push('\n');
    }

    if !response.conditions_unmet.is_empty() {
        out.push_str("## Nicht erfüllte Bedingungen\n\n");
        for condition in &response.conditions_unmet {
            out.push_str(&format!("- {condition}\n"));
        }
        out.push('\n');
    }

    if !response.notes.is_empty() {
        out.push_str("## Hinweise\n\n");
        out.push_str(&format!("{}\n", response.notes));
    }

    if let Some(trace) = &response.debug_info {
        out.push_str("\n## Regelauswertung\n\n");
        out.push_str(&format!(
            "- Regeln geladen: {}\n- Zulassungstreffer: {}\n",
            trace.rules_loaded, trace.approval_matches
        ));
        for eval in &trace.evaluations {
            let verdict = if eval.matched { "erfüllt" } else { "nicht erfüllt" };
            out.push_str(&format!("- `{}`: {}\n", eval.rule_id, verdict));
            for reason in &eval.reasons {
                out.push_str(&format!("  - {reason}\n"));
            }
        }
    }

    out
}

fn source_line(source: &ClearanceSource) -> String {
    let mut line = format!("- {}", source.kind);
    if let Some(number) = &source.number {
        line.push_str(&format!(" {number}"));
    }
    if source.url == "#" {
        line.push_str(&format!(": `{}`", source.anchor));
    } else {
        line.push_str(&format!(": [{}]({})", source.anchor, source.url));
    }
    if let Some(reference) = &source.reference {
        line.push_str(&format!(" ({reference})"));
    }
    line.push('\n');
    line
}
