//! Character-level scanner that turns one line of JavaScript into HTML spans.
//!
//! Every consumer returns the index of the last character it wrote; the
//! dispatch loop resumes one past it. The only state carried from line to
//! line is whether a block comment is still open.

use std::fmt;

use tracing::trace;

use super::lines::SourceLine;
use super::regex_check::is_valid_regex;
use super::token::{close_span, open_span, write_escaped, write_span, Span, TokenClass};
use crate::builtins::{KeywordCategory, KeywordEntry, KeywordTable};
use crate::config::HighlightConfig;
use crate::error::ScanWarning;

/// Index of the last consumed character, or a write failure.
type Consumed = Result<usize, fmt::Error>;

/// What the character under the cursor starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Quote,
    Space,
    Bracket,
    Operator,
    Punctuation(TokenClass),
    Digit,
    Slash,
    IdentStart,
    Other,
}

fn classify(ch: char) -> CharClass {
    if let Some(class) = TokenClass::punctuation(ch) {
        return CharClass::Punctuation(class);
    }
    match ch {
        '\'' | '"' => CharClass::Quote,
        ' ' => CharClass::Space,
        '{' | '[' | '(' | ')' | ']' | '}' => CharClass::Bracket,
        '*' | '%' | '+' | '-' | '<' | '>' | '&' | '^' | '|' | '=' | '!' | '~' | '?' => {
            CharClass::Operator
        }
        '0'..='9' => CharClass::Digit,
        '/' => CharClass::Slash,
        c if is_ident_start(c) => CharClass::IdentStart,
        _ => CharClass::Other,
    }
}

fn is_ident_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_' || ch == '$'
}

fn is_ident_part(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '$'
}

/// Characters after which a slash may open a regex literal. The trailing
/// letters catch the ends of `return`, `case`, `typeof`, `instanceof` and
/// `in`.
fn regex_may_follow(prev: Option<char>) -> bool {
    match prev {
        None => true,
        Some(ch) => matches!(
            ch,
            '(' | ')'
                | '['
                | '{'
                | '}'
                | ';'
                | '*'
                | '/'
                | '%'
                | '+'
                | '-'
                | '<'
                | '>'
                | '&'
                | '^'
                | '|'
                | '='
                | '!'
                | ':'
                | '?'
                | 'n'
                | 'e'
                | 'f'
        ),
    }
}

fn is_regex_flag(ch: char) -> bool {
    matches!(ch, 'g' | 'i' | 'm' | 'y')
}

/// The characters of one trimmed line and where they sit in the source.
struct Line<'a> {
    chars: &'a [char],
    offset: usize,
}

impl Line<'_> {
    fn len(&self) -> usize {
        self.chars.len()
    }

    fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    fn span(&self, start: usize, end: usize) -> Span {
        Span::new(self.offset + start, self.offset + end)
    }

    fn prev_non_space(&self, index: usize) -> Option<char> {
        self.chars[..index].iter().rev().find(|&&c| c != ' ').copied()
    }

    /// Index of the `*` of the first `*/` at or after `from`.
    fn find_comment_close(&self, from: usize) -> Option<usize> {
        (from..self.len().saturating_sub(1))
            .find(|&i| self.chars[i] == '*' && self.chars[i + 1] == '/')
    }
}

/// Per-run highlighting state. Create one per formatted blob.
pub struct Scanner<'c> {
    config: &'c HighlightConfig,
    table: &'static KeywordTable,
    block_comment_open: bool,
    /// Source offset of the `/*` that opened the current block comment
    comment_start: usize,
    warnings: Vec<ScanWarning>,
}

impl<'c> Scanner<'c> {
    pub fn new(config: &'c HighlightConfig) -> Self {
        Self {
            config,
            table: KeywordTable::global(),
            block_comment_open: false,
            comment_start: 0,
            warnings: Vec::new(),
        }
    }

    pub fn is_block_comment_open(&self) -> bool {
        self.block_comment_open
    }

    pub fn warnings(&self) -> &[ScanWarning] {
        &self.warnings
    }

    /// Highlight one already-trimmed line whose first character sits at
    /// offset 0 of the source.
    pub fn highlight(&mut self, line: &str) -> String {
        let chars: Vec<char> = line.chars().collect();
        self.highlight_chars(&chars, 0)
    }

    pub fn highlight_line(&mut self, line: &SourceLine) -> String {
        let chars: Vec<char> = line.text.chars().collect();
        self.highlight_chars(&chars, line.offset)
    }

    /// End the run. `source_len` is the char length of the normalized
    /// source, used to close the span of a comment left open.
    pub fn finish(mut self, source_len: usize) -> Vec<ScanWarning> {
        if self.block_comment_open {
            trace!(start = self.comment_start, "block comment open at end of input");
            self.warnings.push(ScanWarning::UnterminatedComment {
                span: Span::new(self.comment_start, source_len.max(self.comment_start)),
            });
        }
        self.warnings
    }

    fn highlight_chars(&mut self, chars: &[char], offset: usize) -> String {
        let line = Line { chars, offset };
        let mut out = String::new();
        // Writing into a String cannot fail
        self.scan_line(&line, &mut out).unwrap();
        out
    }

    fn scan_line(&mut self, line: &Line, out: &mut String) -> fmt::Result {
        if line.chars.is_empty() {
            return Ok(());
        }
        let mut cursor = 0;
        if self.block_comment_open {
            cursor = self.continue_block_comment(line, out)? + 1;
        }
        while cursor < line.len() {
            cursor = self.dispatch(line, cursor, out)? + 1;
        }
        Ok(())
    }

    fn dispatch(&mut self, line: &Line, start: usize, out: &mut String) -> Consumed {
        let config = self.config;
        let prefix = config.class_prefix.as_str();
        let single = &line.chars[start..=start];
        match classify(line.chars[start]) {
            CharClass::Quote => self.scan_string(line, start, out),
            CharClass::Space => self.scan_whitespace(line, start, out),
            CharClass::Bracket => {
                write_span(out, prefix, TokenClass::Bracket, single)?;
                Ok(start)
            }
            CharClass::Operator => {
                write_span(out, prefix, TokenClass::Operator, single)?;
                Ok(start)
            }
            CharClass::Punctuation(class) => {
                write_span(out, prefix, class, single)?;
                Ok(start)
            }
            CharClass::Digit => self.scan_number(line, start, out),
            CharClass::Slash => self.scan_slash(line, start, out),
            CharClass::IdentStart => self.scan_identifier(line, start, None, 0, out),
            CharClass::Other => {
                write_span(out, prefix, TokenClass::Misc, single)?;
                Ok(start)
            }
        }
    }

    fn scan_string(&mut self, line: &Line, start: usize, out: &mut String) -> Consumed {
        let quote = line.chars[start];
        let mut i = start + 1;
        let mut close = None;
        while i < line.len() {
            match line.chars[i] {
                '\\' => i += 2,
                ch if ch == quote => {
                    close = Some(i);
                    break;
                }
                _ => i += 1,
            }
        }

        let last = match close {
            Some(close) => close,
            None => {
                let last = line.len() - 1;
                trace!(offset = line.offset + start, "unterminated string literal");
                self.warnings.push(ScanWarning::UnterminatedString {
                    span: line.span(start, last + 1),
                });
                last
            }
        };
        write_span(
            out,
            &self.config.class_prefix,
            TokenClass::String,
            &line.chars[start..=last],
        )?;
        Ok(last)
    }

    fn scan_whitespace(&self, line: &Line, start: usize, out: &mut String) -> Consumed {
        let mut last = start;
        while line.get(last + 1) == Some(' ') {
            last += 1;
        }
        write_span(
            out,
            &self.config.class_prefix,
            TokenClass::Whitespace,
            &line.chars[start..=last],
        )?;
        Ok(last)
    }

    fn scan_number(&self, line: &Line, start: usize, out: &mut String) -> Consumed {
        let hex = line.chars[start] == '0' && matches!(line.get(start + 1), Some('x' | 'X'));
        let in_number = |ch: char| {
            if hex {
                ch.is_ascii_hexdigit() || ch == 'x' || ch == 'X' || ch == '.'
            } else {
                ch.is_ascii_digit() || ch == '.'
            }
        };

        let mut last = start;
        while line.get(last + 1).is_some_and(in_number) {
            last += 1;
        }
        write_span(
            out,
            &self.config.class_prefix,
            TokenClass::Number,
            &line.chars[start..=last],
        )?;
        Ok(last)
    }

    fn scan_slash(&mut self, line: &Line, start: usize, out: &mut String) -> Consumed {
        let config = self.config;
        let prefix = config.class_prefix.as_str();
        match line.get(start + 1) {
            Some('/') => {
                let last = line.len() - 1;
                write_span(out, prefix, TokenClass::Comment, &line.chars[start..=last])?;
                Ok(last)
            }
            Some('*') => self.scan_block_comment(line, start, out),
            _ => {
                if regex_may_follow(line.prev_non_space(start)) {
                    if let Some(last) = self.scan_regex(line, start, out)? {
                        return Ok(last);
                    }
                }
                write_span(out, prefix, TokenClass::Operator, &line.chars[start..=start])?;
                Ok(start)
            }
        }
    }

    fn scan_block_comment(&mut self, line: &Line, start: usize, out: &mut String) -> Consumed {
        let last = match line.find_comment_close(start + 2) {
            Some(star) => star + 1,
            None => {
                self.block_comment_open = true;
                self.comment_start = line.offset + start;
                line.len() - 1
            }
        };
        write_span(
            out,
            &self.config.class_prefix,
            TokenClass::Comment,
            &line.chars[start..=last],
        )?;
        Ok(last)
    }

    fn continue_block_comment(&mut self, line: &Line, out: &mut String) -> Consumed {
        let last = match line.find_comment_close(0) {
            Some(star) => {
                self.block_comment_open = false;
                star + 1
            }
            None => line.len() - 1,
        };
        write_span(
            out,
            &self.config.class_prefix,
            TokenClass::Comment,
            &line.chars[..=last],
        )?;
        Ok(last)
    }

    /// Try to read a regex literal starting at the slash at `start`.
    /// Returns `None` when the text is better read as division.
    fn scan_regex(
        &mut self,
        line: &Line,
        start: usize,
        out: &mut String,
    ) -> Result<Option<usize>, fmt::Error> {
        let mut i = start + 1;
        let mut close = None;
        while i < line.len() {
            match line.chars[i] {
                '\\' => i += 2,
                '/' => {
                    close = Some(i);
                    break;
                }
                _ => i += 1,
            }
        }
        let Some(close) = close else {
            return Ok(None);
        };

        let body: String = line.chars[start + 1..close].iter().collect();
        if !is_valid_regex(&body) {
            trace!(pattern = %body, "rejected regex candidate");
            self.warnings.push(ScanWarning::RejectedRegex {
                pattern: body,
                span: line.span(start, close + 1),
            });
            return Ok(None);
        }

        let mut last = close;
        let mut flags = 0;
        while flags < self.config.max_regex_flags && line.get(last + 1).is_some_and(is_regex_flag)
        {
            last += 1;
            flags += 1;
        }
        write_span(
            out,
            &self.config.class_prefix,
            TokenClass::Regex,
            &line.chars[start..=last],
        )?;
        Ok(Some(last))
    }

    /// Highlight an identifier and, when a `.member` follows, the rest of
    /// the dotted chain inside its span. Members are checked against the
    /// parent's property table before the global table.
    fn scan_identifier(
        &mut self,
        line: &Line,
        start: usize,
        parent: Option<&'static KeywordEntry>,
        depth: usize,
        out: &mut String,
    ) -> Consumed {
        let mut end = start;
        while line.get(end + 1).is_some_and(is_ident_part) {
            end += 1;
        }
        let name: String = line.chars[start..=end].iter().collect();
        let table: &'static KeywordTable = self.table;
        let entry = table.lookup(&name);

        let class = match (parent, entry) {
            (Some(parent), _) if parent.has_property(&name) => TokenClass::Keyword(parent.category),
            (_, Some(_)) if name == "function" && opens_call(line, end) => {
                TokenClass::Keyword(KeywordCategory::Reserved)
            }
            (_, Some(entry)) => TokenClass::Keyword(entry.category),
            (_, None) => TokenClass::Identifier,
        };

        open_span(out, &self.config.class_prefix, class)?;
        write_escaped(out, line.chars[start..=end].iter().copied())?;

        let mut last = end;
        let has_member =
            line.get(end + 1) == Some('.') && line.get(end + 2).is_some_and(is_ident_start);
        if has_member && depth < self.config.max_member_depth {
            write_span(
                out,
                &self.config.class_prefix,
                TokenClass::Period,
                &line.chars[end + 1..=end + 1],
            )?;
            last = self.scan_identifier(line, end + 2, entry, depth + 1, out)?;
        }
        close_span(out)?;
        Ok(last)
    }
}

/// `function` directly followed by `(`, optionally through one space.
fn opens_call(line: &Line, end: usize) -> bool {
    match line.get(end + 1) {
        Some('(') => true,
        Some(' ') => line.get(end + 2) == Some('('),
        _ => false,
    }
}
