//! Prettifier: a single-pass JavaScript syntax highlighter.
//!
//! Source text is split into lines, each line is scanned character by
//! character, and every token is wrapped in a `<span>` whose class names
//! its category. The result is one `<li>` per line, indented by nesting
//! depth. It features:
//!
//! - **Regex literal detection** from the preceding character and a syntax check
//! - **Block comments** that continue across lines
//! - **Dotted member resolution** against per-global property tables (`Math.floor`)
//! - **No host dependencies**, so it runs the same natively, in wasm and in a web worker

pub mod builtins;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod format;
pub mod lexer;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::HighlightConfig;
pub use error::{PrettifierError, Result, ScanWarning};
pub use format::{format, Formatter, HighlightResult};
