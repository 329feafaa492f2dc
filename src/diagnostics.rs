//! Diagnostic printing for scan warnings.

use std::ops::Range;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};

use crate::error::ScanWarning;

/// Print a warning with a labelled excerpt of `source`, which must be the
/// normalized text the warning's span refers to.
pub fn print_warning(filename: &str, source: &str, warning: &ScanWarning) {
    let report = build_report(filename, warning, true);
    // Nothing useful to do if stderr is gone
    let _ = report.eprint((filename, Source::from(source)));
}

/// Render a warning to a plain string without colors.
pub fn render_warning(filename: &str, source: &str, warning: &ScanWarning) -> String {
    let report = build_report(filename, warning, false);
    let mut out = Vec::new();
    if report
        .write((filename, Source::from(source)), &mut out)
        .is_err()
    {
        return warning.to_string();
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn build_report<'a>(
    filename: &'a str,
    warning: &ScanWarning,
    color: bool,
) -> Report<'static, (&'a str, Range<usize>)> {
    let span = warning.span();
    let (label, note) = match warning {
        ScanWarning::UnterminatedString { .. } => (
            "string runs to the end of the line".to_string(),
            "Highlighted as a string up to the line end",
        ),
        ScanWarning::UnterminatedComment { .. } => (
            "comment opened here is never closed".to_string(),
            "Everything after the opener is highlighted as a comment",
        ),
        ScanWarning::RejectedRegex { pattern, .. } => (
            format!("'{}' does not compile", pattern),
            "The first slash is highlighted as a division operator",
        ),
    };

    let mut report = Report::build(ReportKind::Warning, (filename, span.start..span.end))
        .with_config(Config::default().with_color(color))
        .with_message(warning.to_string())
        .with_label(
            Label::new((filename, span.start..span.end))
                .with_message(label)
                .with_color(Color::Yellow),
        );

    report.add_note(note);

    report.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::format;

    #[test]
    fn test_render_rejected_regex() {
        let source = "x = (a) / (b / c);";
        let result = format(source);
        assert_eq!(result.warnings.len(), 1);
        let text = render_warning("input.js", source, &result.warnings[0]);
        assert!(text.contains("not a valid regular expression"));
        assert!(text.contains("input.js"));
    }

    #[test]
    fn test_render_unterminated_comment() {
        let source = "/* a\nb";
        let result = format(source);
        let text = render_warning("input.js", source, &result.warnings[0]);
        assert!(text.contains("Unterminated block comment"));
        assert!(text.contains("never closed"));
    }
}
