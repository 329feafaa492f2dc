//! Turns a code blob into one HTML list item per line.

use std::fmt::{self, Write};

use tracing::debug;

use crate::config::HighlightConfig;
use crate::error::ScanWarning;
use crate::lexer::{lines, IndentTracker, Scanner};

/// Output of one formatting run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightResult {
    /// Concatenated `<li>` fragments in source order
    pub html: String,
    /// Number of lines, blank ones included
    pub line_count: usize,
    /// Constructs highlighted on a best-effort basis
    pub warnings: Vec<ScanWarning>,
}

/// Formats code with a fixed configuration. All scanning state lives in
/// the individual [`Formatter::format`] call, so one formatter can be
/// shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    config: HighlightConfig,
}

impl Formatter {
    pub fn new(config: HighlightConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    pub fn format(&self, source: &str) -> HighlightResult {
        let mut indent = IndentTracker::new(self.config.indent_unit);
        let mut scanner = Scanner::new(&self.config);
        let mut html = String::new();
        let mut line_count = 0;
        let mut line_start = 0;

        for raw in lines::split(source) {
            let line = lines::prepare_line(&raw, line_start);
            line_start += raw.chars().count() + 1;
            line_count += 1;

            match (line.first, line.last) {
                (Some(first), Some(last)) => {
                    let padding = indent.compute_padding(first, last);
                    let content = scanner.highlight_line(&line);
                    // Writing into a String cannot fail
                    write_item(&mut html, padding, &content).unwrap();
                }
                _ => html.push_str("<li></li>"),
            }
        }

        // Every line but the last was followed by a newline
        let source_len = line_start.saturating_sub(1);
        let warnings = scanner.finish(source_len);
        debug!(
            lines = line_count,
            warnings = warnings.len(),
            "formatted source"
        );

        HighlightResult {
            html,
            line_count,
            warnings,
        }
    }
}

fn write_item(w: &mut impl Write, padding: u32, content: &str) -> fmt::Result {
    write!(w, "<li style=\"padding-left:{}px\">{}</li>", padding, content)
}

/// Format `source` with the default configuration.
pub fn format(source: &str) -> HighlightResult {
    Formatter::default().format(source)
}
