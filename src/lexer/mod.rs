//! Line-oriented lexing of JavaScript source into highlighted HTML.

mod indent;
pub mod lines;
mod regex_check;
mod scanner;
mod token;

#[cfg(test)]
mod proptests;

pub use indent::IndentTracker;
pub use lines::{prepare_line, split, SourceLine};
pub use regex_check::is_valid_regex;
pub use scanner::Scanner;
pub use token::{Span, TokenClass};
