//! Token vocabulary for the tokenizer stage.
//!
//! A token pairs a classified kind with the verbatim source segment it was
//! cut from. Tokens never span a whitespace boundary: a value is either
//! whitespace-free or carries only the leading whitespace that was glued to
//! the word or marker following it.

use serde::{Deserialize, Serialize};

/// The closed set of kinds the classifier can assign to a segment.
///
/// Two kinds are synthetic: every token stream ends with one `LineBreak`
/// and one `Eof`, both carrying empty values, regardless of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Segment containing `#`; opens a level-1 heading
    HeadingMarker,
    /// Segment ending in a newline, or the synthetic stream terminator
    LineBreak,
    /// Triple-backtick fence delimiting a code block
    CodeFence,
    /// Single backtick delimiting inline code
    InlineCodeMarker,
    /// `[`, opening link text
    OpenSquareBracket,
    /// `]`, closing link text
    CloseSquareBracket,
    /// `(`, opening a link href (literal text elsewhere)
    OpenParen,
    /// `)`, closing a link href (literal text elsewhere)
    CloseParen,
    /// Segment containing `>`; opens a block quote
    BlockQuoteMarker,
    /// `*`, the italic delimiter
    EmphasisMarker,
    /// Any remaining segment with at least one non-newline character
    Text,
    /// Pure-whitespace segment not claimed by an earlier rule
    Whitespace,
    /// Synthetic end-of-input marker, always last
    Eof,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::HeadingMarker => write!(f, "heading-marker"),
            TokenKind::LineBreak => write!(f, "line-break"),
            TokenKind::CodeFence => write!(f, "code-fence"),
            TokenKind::InlineCodeMarker => write!(f, "inline-code-marker"),
            TokenKind::OpenSquareBracket => write!(f, "open-square-bracket"),
            TokenKind::CloseSquareBracket => write!(f, "close-square-bracket"),
            TokenKind::OpenParen => write!(f, "open-paren"),
            TokenKind::CloseParen => write!(f, "close-paren"),
            TokenKind::BlockQuoteMarker => write!(f, "block-quote-marker"),
            TokenKind::EmphasisMarker => write!(f, "emphasis-marker"),
            TokenKind::Text => write!(f, "text"),
            TokenKind::Whitespace => write!(f, "whitespace"),
            TokenKind::Eof => write!(f, "end-of-input"),
        }
    }
}

/// A classified source segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// What the classifier decided this segment is
    pub kind: TokenKind,
    /// The verbatim segment text (empty for synthetic tokens)
    pub value: String,
}

impl Token {
    /// Create a token from a kind and its source segment.
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
