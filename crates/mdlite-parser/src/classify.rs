//! Segment classification.
//!
//! Every segment the splitter produces is assigned a [`TokenKind`] by the
//! first matching rule in an ordered table. The order is load-bearing, not
//! incidental: patterns overlap, and moving a rule changes the grammar.

use mdlite_core::{MdliteError, Result, TokenKind};
use regex::Regex;
use std::sync::LazyLock;

/// The ordered classification table. First match wins.
///
/// Ordering invariants:
/// - `CodeFence` sits above `InlineCodeMarker`, which would otherwise
///   claim every fence.
/// - `Text` matches any segment with a non-newline character and must
///   stay second-to-last.
/// - `Whitespace` is the floor. `Text` already claims a lone space and
///   pure-newline segments end in `\n`, so the floor is unreachable for
///   segments the splitter emits today; it stays so that loosening an
///   earlier rule cannot silently widen what `Text` means.
static RULES: LazyLock<[(Regex, TokenKind); 12]> = LazyLock::new(|| {
    [
        (Regex::new(r"#").unwrap(), TokenKind::HeadingMarker),
        (Regex::new(r"\n$").unwrap(), TokenKind::LineBreak),
        (Regex::new(r"^\s?```").unwrap(), TokenKind::CodeFence),
        (Regex::new(r"^\s?`").unwrap(), TokenKind::InlineCodeMarker),
        (Regex::new(r"\[").unwrap(), TokenKind::OpenSquareBracket),
        (Regex::new(r"\]").unwrap(), TokenKind::CloseSquareBracket),
        (Regex::new(r"\(").unwrap(), TokenKind::OpenParen),
        (Regex::new(r"\)").unwrap(), TokenKind::CloseParen),
        (Regex::new(r">").unwrap(), TokenKind::BlockQuoteMarker),
        (Regex::new(r"\*").unwrap(), TokenKind::EmphasisMarker),
        (Regex::new(r".").unwrap(), TokenKind::Text),
        (Regex::new(r"\s").unwrap(), TokenKind::Whitespace),
    ]
});

/// Classify one segment.
///
/// # Errors
/// [`MdliteError::Classify`] when no rule matches. The shipped table
/// covers every non-empty string, so hitting this means the table was
/// edited and a gap opened; it is a defect report, not an input error.
pub fn classify(segment: &str) -> Result<TokenKind> {
    for (pattern, kind) in RULES.iter() {
        if pattern.is_match(segment) {
            return Ok(*kind);
        }
    }
    Err(MdliteError::Classify {
        segment: segment.to_string(),
    })
}
