//! Syntax check used to tell regex literals from division.
//!
//! The body between the slashes is parsed, never compiled, with
//! `regex-syntax`, so repetition counts and Unicode classes cost nothing.
//! JavaScript constructs that parser does not know (lookaround,
//! backreferences, `[^]`, `\cX`, `[\b]`, Annex-B braces and brackets) are
//! rewritten to neutral equivalents first, so the check answers "is this
//! plausibly a regex" rather than "does Rust accept this pattern".

use regex_syntax::ast::parse::Parser;
use regex_syntax::is_meta_character;

/// Whether `body` parses as a regular expression.
pub fn is_valid_regex(body: &str) -> bool {
    if body.is_empty() {
        return false;
    }
    Parser::new().parse(&rewrite_for_check(body)).is_ok()
}

fn is_class_escape(ch: char) -> bool {
    matches!(ch, 'd' | 'D' | 'w' | 'W' | 's' | 'S')
}

fn rewrite_for_check(body: &str) -> String {
    let chars: Vec<char> = body.chars().collect();
    let mut out = String::with_capacity(body.len());
    let mut in_class = false;
    // `\d`, `\w` and `\s` cannot bound a range in Rust, so a dash next to
    // one is a literal dash
    let mut after_class_escape = false;
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        let dash_is_literal = after_class_escape || starts_class_escape(&chars, i + 1);
        after_class_escape = false;
        match ch {
            '\\' => {
                if i + 1 == chars.len() {
                    out.push('\\');
                    break;
                }
                after_class_escape = in_class && is_class_escape(chars[i + 1]);
                i += 1 + rewrite_escape(&chars[i + 1..], in_class, &mut out);
                continue;
            }
            '[' if in_class => out.push_str(r"\["),
            '[' => match chars.get(i + 1) {
                Some('^') if chars.get(i + 2) == Some(&']') => {
                    out.push_str(r"[\s\S]");
                    i += 3;
                    continue;
                }
                Some(']') => {
                    out.push_str(r"[^\s\S]");
                    i += 2;
                    continue;
                }
                _ => {
                    in_class = true;
                    out.push('[');
                }
            },
            ']' if in_class => {
                in_class = false;
                out.push(']');
            }
            ']' => out.push_str(r"\]"),
            '-' if in_class && dash_is_literal => out.push_str(r"\-"),
            // Set operators in Rust classes
            '&' | '~' if in_class => {
                out.push('\\');
                out.push(ch);
            }
            '{' if !in_class => match quantifier_len(&chars[i..]) {
                Some(len) => {
                    out.extend(&chars[i..i + len]);
                    i += len;
                    continue;
                }
                None => out.push_str(r"\{"),
            },
            '}' if !in_class => out.push_str(r"\}"),
            '(' if !in_class && chars.get(i + 1) == Some(&'?') => {
                let lookaround = match (chars.get(i + 2), chars.get(i + 3)) {
                    (Some('=' | '!'), _) => Some(3),
                    (Some('<'), Some('=' | '!')) => Some(4),
                    _ => None,
                };
                match lookaround {
                    Some(len) => {
                        out.push_str("(?:");
                        i += len;
                        continue;
                    }
                    None => out.push('('),
                }
            }
            _ => out.push(ch),
        }
        i += 1;
    }
    out
}

/// Rewrite the escape whose body starts at `rest[0]` (just past the
/// backslash). Returns how many chars of `rest` were consumed.
fn rewrite_escape(rest: &[char], in_class: bool, out: &mut String) -> usize {
    let next = rest[0];
    match next {
        // Legacy octal inside a class
        '0'..='9' if in_class => {
            out.push_str(r"\x00");
            1
        }
        // Backreference `\1`
        '0'..='9' => {
            out.push_str("(?:)");
            1 + rest[1..].iter().take_while(|c| c.is_ascii_digit()).count()
        }
        // Named backreference `\k<name>`
        'k' if !in_class && rest.get(1) == Some(&'<') => {
            out.push_str("(?:)");
            rest.iter()
                .position(|&c| c == '>')
                .map_or(rest.len(), |end| end + 1)
        }
        'c' => match rest.get(1) {
            Some(&letter) if letter.is_ascii_alphabetic() => {
                out.push_str(&format!(r"\x{:02X}", letter as u32 % 32));
                2
            }
            // A `\c` without a letter is a literal backslash
            _ => {
                out.push_str(r"\\");
                0
            }
        },
        'b' if in_class => {
            out.push_str(r"\x08");
            1
        }
        'x' if hex_digits(&rest[1..]) >= 2 => {
            out.push('\\');
            out.extend(&rest[..3]);
            3
        }
        'u' if hex_digits(&rest[1..]) >= 4 => {
            out.push('\\');
            out.extend(&rest[..5]);
            5
        }
        'd' | 'D' | 'w' | 'W' | 's' | 'S' | 'n' | 'r' | 't' | 'v' | 'f' => {
            out.push('\\');
            out.push(next);
            1
        }
        'b' | 'B' if !in_class => {
            out.push('\\');
            out.push(next);
            1
        }
        // Identity escape
        c if is_meta_character(c) => {
            out.push('\\');
            out.push(c);
            1
        }
        c => {
            out.push(c);
            1
        }
    }
}

fn starts_class_escape(chars: &[char], at: usize) -> bool {
    chars.get(at) == Some(&'\\') && chars.get(at + 1).is_some_and(|&c| is_class_escape(c))
}

fn hex_digits(chars: &[char]) -> usize {
    chars.iter().take_while(|c| c.is_ascii_hexdigit()).count()
}

/// Length of a `{n}`, `{n,}` or `{n,m}` quantifier at the start of
/// `chars`, if there is one.
fn quantifier_len(chars: &[char]) -> Option<usize> {
    let mut i = 1;
    let digits = |from: usize| chars[from..].iter().take_while(|c| c.is_ascii_digit()).count();
    let min = digits(i);
    if min == 0 {
        return None;
    }
    i += min;
    if chars.get(i) == Some(&',') {
        i += 1;
        i += digits(i);
    }
    (chars.get(i) == Some(&'}')).then_some(i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_patterns() {
        assert!(is_valid_regex("abc"));
        assert!(is_valid_regex(r"^\s+|\s+$"));
        assert!(is_valid_regex("[a-z]+"));
        assert!(is_valid_regex(r"\/\/"));
    }

    #[test]
    fn test_rejects_unbalanced() {
        assert!(!is_valid_regex("("));
        assert!(!is_valid_regex("a)"));
        assert!(!is_valid_regex("[abc"));
        assert!(!is_valid_regex("*a"));
        assert!(!is_valid_regex(""));
    }

    #[test]
    fn test_accepts_javascript_only_constructs() {
        assert!(is_valid_regex("a(?=b)"));
        assert!(is_valid_regex("a(?!b)"));
        assert!(is_valid_regex("(?<=a)b"));
        assert!(is_valid_regex(r"(a)\1"));
        assert!(is_valid_regex(r"(?<q>'|)x\k<q>"));
        assert!(is_valid_regex("[^]*"));
        assert!(is_valid_regex(r"[-\/\\^$*+?.()|[\]{}]"));
        assert!(is_valid_regex(r"\w{100}"));
        assert!(is_valid_regex(r"[\b]"));
        assert!(is_valid_regex(r"\cJ"));
        assert!(is_valid_regex("[[]"));
        assert!(is_valid_regex(r"[\d-z]"));
        assert!(is_valid_regex(r"[a-\s]"));
        assert!(is_valid_regex("a{"));
        assert!(is_valid_regex("x{a}y"));
        assert!(is_valid_regex("[&&]"));
        assert!(is_valid_regex(r"\e\q"));
        assert!(is_valid_regex(r"\x4"));
    }

    #[test]
    fn test_quantifiers_pass_through() {
        assert_eq!(quantifier_len(&['{', '2', '}']), Some(3));
        assert_eq!(quantifier_len(&['{', '2', ',', '}']), Some(4));
        assert_eq!(quantifier_len(&['{', '2', ',', '5', '}', 'a']), Some(5));
        assert_eq!(quantifier_len(&['{', ',', '5', '}']), None);
        assert!(!is_valid_regex("{2}"));
        assert!(!is_valid_regex("a{5,2}"));
    }

    #[test]
    fn test_division_bodies() {
        // Text between two division slashes, e.g. `a / b / c`
        assert!(is_valid_regex(" b "));
        assert!(!is_valid_regex(" 2) + (3 "));
    }
}
