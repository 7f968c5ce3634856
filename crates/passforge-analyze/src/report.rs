use crate::model::{StrengthReport, NOMINAL_MAX_SCORE};

/// Render a strength report as deterministic plain text.
pub fn render_report(report: &StrengthReport) -> String {
    let mut lines = Vec::new();

    lines.push(format!("Strength: {}", report.label));
    lines.push(format!("Length: {} characters", report.length));
    lines.push(format!("Score: {}/{}", report.score, NOMINAL_MAX_SCORE));
    lines.push(format!("Unique characters: {}", report.unique_chars));

    lines.push("Composition:".to_string());
    lines.push(format!("  lowercase: {}", mark(report.has_lowercase)));
    lines.push(format!("  uppercase: {}", mark(report.has_uppercase)));
    lines.push(format!("  digits: {}", mark(report.has_digits)));
    lines.push(format!("  special: {}", mark(report.has_special)));

    if !report.feedback.is_empty() {
        lines.push("Recommendations:".to_string());
        for tip in &report.feedback {
            lines.push(format!("  - {tip}"));
        }
    }

    lines.join("\n")
}

fn mark(present: bool) -> &'static str {
    if present {
        "yes"
    } else {
        "no"
    }
}
