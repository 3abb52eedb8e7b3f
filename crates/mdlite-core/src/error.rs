//! Error types for mdlite

use crate::token::TokenKind;
use thiserror::Error;

/// Main error type for mdlite operations.
///
/// Every variant is unrecoverable for the document being compiled: the
/// pipeline performs no resynchronization and no skip-and-continue.
#[derive(Error, Debug)]
pub enum MdliteError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A tokenizer segment matched no classification rule
    #[error("no classification rule matches segment {segment:?}")]
    Classify { segment: String },

    /// The parser met a token kind its current rule cannot accept
    #[error("unexpected {kind} token at index {position}")]
    UnexpectedToken { kind: TokenKind, position: usize },

    /// End of input reached while scanning for a closing delimiter
    #[error("unterminated construct opened at index {position}: no closing {expected} before end of input")]
    Unterminated { expected: TokenKind, position: usize },
}

/// Result type alias for mdlite operations
pub type Result<T> = std::result::Result<T, MdliteError>;
