//! Token classes and the HTML span vocabulary they render to.

use std::fmt::{self, Write};

use crate::builtins::KeywordCategory;

/// Source location in char offsets of the normalized source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Highlight category of a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    String,
    Whitespace,
    Bracket,
    Operator,
    Comma,
    Semicolon,
    Colon,
    Period,
    Number,
    Comment,
    Regex,
    Keyword(KeywordCategory),
    Identifier,
    Misc,
}

impl TokenClass {
    /// The CSS class name a stylesheet targets for this category.
    pub fn css_class(&self) -> &'static str {
        match self {
            TokenClass::String => "string",
            TokenClass::Whitespace => "whitespace",
            TokenClass::Bracket => "bracket",
            TokenClass::Operator => "operator",
            TokenClass::Comma => "comma",
            TokenClass::Semicolon => "semicolon",
            TokenClass::Colon => "colon",
            TokenClass::Period => "period",
            TokenClass::Number => "number",
            TokenClass::Comment => "comment",
            TokenClass::Regex => "regex",
            TokenClass::Keyword(category) => category.css_class(),
            TokenClass::Identifier => "identifier",
            TokenClass::Misc => "miscellaneous",
        }
    }

    /// Single-character punctuation that gets its own span class.
    pub fn punctuation(ch: char) -> Option<TokenClass> {
        match ch {
            ',' => Some(TokenClass::Comma),
            ';' => Some(TokenClass::Semicolon),
            ':' => Some(TokenClass::Colon),
            '.' => Some(TokenClass::Period),
            _ => None,
        }
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

/// Write `text` with the characters that are significant in HTML text
/// content replaced by entities.
pub fn write_escaped(w: &mut impl Write, text: impl IntoIterator<Item = char>) -> fmt::Result {
    for ch in text {
        match ch {
            '<' => w.write_str("&lt;")?,
            '>' => w.write_str("&gt;")?,
            '&' => w.write_str("&amp;")?,
            _ => w.write_char(ch)?,
        }
    }
    Ok(())
}

/// Write the opening tag of a span for `class`.
pub fn open_span(w: &mut impl Write, prefix: &str, class: TokenClass) -> fmt::Result {
    write!(w, "<span class=\"{}{}\">", prefix, class)
}

pub fn close_span(w: &mut impl Write) -> fmt::Result {
    w.write_str("</span>")
}

/// Write a complete span around the escaped `text`.
pub fn write_span(
    w: &mut impl Write,
    prefix: &str,
    class: TokenClass,
    text: &[char],
) -> fmt::Result {
    open_span(w, prefix, class)?;
    write_escaped(w, text.iter().copied())?;
    close_span(w)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span_of(class: TokenClass, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::new();
        write_span(&mut out, "", class, &chars).unwrap();
        out
    }

    #[test]
    fn test_css_classes() {
        assert_eq!(TokenClass::Misc.css_class(), "miscellaneous");
        assert_eq!(
            TokenClass::Keyword(KeywordCategory::Native).css_class(),
            "native-keyword"
        );
        assert_eq!(TokenClass::punctuation(';'), Some(TokenClass::Semicolon));
        assert_eq!(TokenClass::punctuation('+'), None);
    }

    #[test]
    fn test_span_escapes_markup() {
        assert_eq!(
            span_of(TokenClass::Operator, "<"),
            "<span class=\"operator\">&lt;</span>"
        );
        assert_eq!(
            span_of(TokenClass::String, "'a & b'"),
            "<span class=\"string\">'a &amp; b'</span>"
        );
    }

    #[test]
    fn test_prefixed_span() {
        let mut out = String::new();
        write_span(&mut out, "js-", TokenClass::Number, &['4', '2']).unwrap();
        assert_eq!(out, "<span class=\"js-number\">42</span>");
    }
}
