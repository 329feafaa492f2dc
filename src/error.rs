//! Error and warning types for the prettifier.

use std::path::PathBuf;

use crate::lexer::Span;
use thiserror::Error;

/// Result type for prettifier operations.
pub type Result<T> = std::result::Result<T, PrettifierError>;

/// Errors raised around the highlighter: reading input and loading
/// configuration. Highlighting itself never fails.
#[derive(Debug, Error)]
pub enum PrettifierError {
    #[error("Cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// Input the scanner highlighted on a best-effort basis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanWarning {
    #[error("Unterminated string literal")]
    UnterminatedString { span: Span },

    #[error("Unterminated block comment")]
    UnterminatedComment { span: Span },

    #[error("'/{pattern}/' is not a valid regular expression; treated as division")]
    RejectedRegex { pattern: String, span: Span },
}

impl ScanWarning {
    pub fn span(&self) -> Span {
        match self {
            ScanWarning::UnterminatedString { span } => *span,
            ScanWarning::UnterminatedComment { span } => *span,
            ScanWarning::RejectedRegex { span, .. } => *span,
        }
    }
}
