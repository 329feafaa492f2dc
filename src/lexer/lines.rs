//! Line splitting and per-line trimming.

/// Normalize line endings to `\n` and replace every tab with one space.
pub fn normalize(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push('\n');
            }
            '\t' => out.push(' '),
            _ => out.push(ch),
        }
    }
    out
}

/// Split a code blob into its raw lines.
///
/// Always yields at least one line; empty lines, including a trailing one
/// after a final newline, are kept.
pub fn split(source: &str) -> Vec<String> {
    normalize(source).split('\n').map(str::to_string).collect()
}

/// One input line with surrounding spaces removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// The trimmed code
    pub text: String,
    /// First non-space character, `None` for a blank line
    pub first: Option<char>,
    /// Last non-space character, `None` for a blank line
    pub last: Option<char>,
    /// Char offset of `text` within the normalized source
    pub offset: usize,
}

impl SourceLine {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Trim a raw line. `line_start` is the char offset of the raw line in the
/// normalized source.
pub fn prepare_line(raw: &str, line_start: usize) -> SourceLine {
    let leading = raw.chars().take_while(|&c| c == ' ').count();
    let text = raw.trim_start_matches(' ');
    if text.is_empty() {
        return SourceLine {
            text: String::new(),
            first: None,
            last: None,
            offset: line_start + leading,
        };
    }
    let text = text.trim_end_matches(' ');
    SourceLine {
        text: text.to_string(),
        first: text.chars().next(),
        last: text.chars().next_back(),
        offset: line_start + leading,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_normalizes_line_endings() {
        assert_eq!(split("a\r\nb\rc\nd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split("\r\n"), vec!["", ""]);
    }

    #[test]
    fn test_split_replaces_tabs() {
        assert_eq!(split("\tx\t= 1;"), vec![" x = 1;"]);
    }

    #[test]
    fn test_split_keeps_empty_lines() {
        assert_eq!(split(""), vec![""]);
        assert_eq!(split("\n\na\n"), vec!["", "", "a", ""]);
    }

    #[test]
    fn test_prepare_line() {
        let line = prepare_line("   if (x) {  ", 10);
        assert_eq!(line.text, "if (x) {");
        assert_eq!(line.first, Some('i'));
        assert_eq!(line.last, Some('{'));
        assert_eq!(line.offset, 13);
        assert!(!line.is_empty());
    }

    #[test]
    fn test_prepare_blank_line() {
        let line = prepare_line("     ", 0);
        assert!(line.is_empty());
        assert_eq!(line.first, None);
        assert_eq!(line.last, None);
    }

    #[test]
    fn test_prepare_single_char_line() {
        let line = prepare_line("}", 0);
        assert_eq!(line.first, Some('}'));
        assert_eq!(line.last, Some('}'));
    }
}
