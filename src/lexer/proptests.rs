//! Property-based tests for splitting, indentation and span output.

use proptest::prelude::*;

use super::lines::{normalize, split};
use super::IndentTracker;
use crate::builtins::KeywordTable;
use crate::format::format;

// Strategy for code-like text, including line breaks, tabs and the
// characters that drive comment, string and regex handling
fn source_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 \t\r\n(){}\\[\\];:,.=+*/'\"\\\\<>&!?%-]{0,80}").unwrap()
}

// Identifiers that are not keyword-table entries
fn plain_ident_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z_][a-zA-Z0-9_]{0,8}")
        .unwrap()
        .prop_filter("not a table entry", |s| {
            KeywordTable::global().lookup(s).is_none()
        })
}

fn count_open_tags(html: &str) -> usize {
    html.matches("<span").count()
}

fn count_close_tags(html: &str) -> usize {
    html.matches("</span>").count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn resplit_is_idempotent(source in source_strategy()) {
        prop_assert_eq!(split(&source), split(&source));
    }

    #[test]
    fn line_count_matches_segments(source in source_strategy()) {
        let expected = normalize(&source).split('\n').count();
        let result = format(&source);
        prop_assert_eq!(result.line_count, expected);
        prop_assert_eq!(result.html.matches("<li").count(), expected);
    }

    #[test]
    fn spans_are_balanced(source in source_strategy()) {
        let html = format(&source).html;
        prop_assert_eq!(count_open_tags(&html), count_close_tags(&html));
    }

    #[test]
    fn normalized_text_has_no_tabs_or_carriage_returns(source in source_strategy()) {
        let normalized = normalize(&source);
        prop_assert!(!normalized.contains('\t'));
        prop_assert!(!normalized.contains('\r'));
    }

    #[test]
    fn bracket_triangle(depth in 1usize..12) {
        let mut indent = IndentTracker::new(20);
        let mut paddings = Vec::new();
        for _ in 0..depth {
            paddings.push(indent.compute_padding('{', '{'));
        }
        for _ in 0..depth {
            paddings.push(indent.compute_padding('}', '}'));
        }

        let reversed: Vec<u32> = paddings.iter().rev().copied().collect();
        prop_assert_eq!(&paddings, &reversed);
        for pair in paddings[..depth].windows(2) {
            prop_assert_eq!(pair[1], pair[0] + 20);
        }
        prop_assert_eq!(paddings[0], 0);
        prop_assert_eq!(indent.compute_padding('x', ';'), 0);
    }

    #[test]
    fn bracket_lines_format_as_triangle(depth in 1usize..8) {
        let source = format!("{}{}", "{\n".repeat(depth), vec!["}"; depth].join("\n"));
        let html = format(&source).html;
        let paddings: Vec<u32> = html
            .split("padding-left:")
            .skip(1)
            .map(|rest| rest.split("px").next().unwrap().parse().unwrap())
            .collect();
        let reversed: Vec<u32> = paddings.iter().rev().copied().collect();
        prop_assert_eq!(paddings.len(), depth * 2);
        prop_assert_eq!(&paddings, &reversed);
        prop_assert_eq!(paddings[depth - 1], (depth as u32 - 1) * 20);
    }

    #[test]
    fn plain_identifier_round_trips(name in plain_ident_strategy()) {
        let html = format(&name).html;
        prop_assert_eq!(
            html,
            format!(
                "<li style=\"padding-left:0px\"><span class=\"identifier\">{}</span></li>",
                name
            )
        );
    }
}
