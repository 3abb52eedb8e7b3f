//! Tokenizer: raw document text to classified tokens.
//!
//! Splitting happens in fixed passes before any classification:
//!
//! 1. Cut immediately *before* every whitespace character, so whitespace
//!    stays glued to the front of whatever follows it.
//! 2. Isolate every triple-backtick fence as its own segment. Segments
//!    containing a fence are never re-split, so fence content is not
//!    broken apart by the marker passes.
//! 3. In the remaining segments, cut around each `*`, `[`, `]`, `(`, `)`
//!    and `>` character.
//! 4. Cut around each single backtick, keeping at most one whitespace
//!    character glued to its front.
//!
//! The passes never emit empty segments. Every stream ends with one
//! synthetic line-break token and one end-of-input token, even for empty
//! input, so the parser always observes a clean terminator.

use mdlite_core::{Result, Token, TokenKind};
use regex::Regex;
use std::sync::LazyLock;

use crate::classify::classify;

/// Triple-backtick fences are isolated before any other marker split.
static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"```").unwrap());

/// One-character structural markers cut out of non-fence segments.
static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[*\[\]()>]").unwrap());

/// Backtick split. The optional `\s` glues a single preceding whitespace
/// character onto the marker; the generator's trailing-space rule for text
/// children depends on markers swallowing that space.
static BACKTICK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s?`").unwrap());

/// Tokenize a whole document.
///
/// Total over any string input: the classifier's rule table covers every
/// segment the splitter can produce, so the `Err` arm only fires if the
/// table is edited into a gap.
pub fn tokenize(text: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    for segment in segments(text) {
        let kind = classify(segment)?;
        tokens.push(Token::new(kind, segment));
    }
    tokens.push(Token::new(TokenKind::LineBreak, ""));
    tokens.push(Token::new(TokenKind::Eof, ""));
    Ok(tokens)
}

/// Run the split passes in order.
fn segments(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    for chunk in split_before_whitespace(text) {
        for piece in split_keeping(&FENCE_RE, chunk) {
            if piece.contains("```") {
                out.push(piece);
                continue;
            }
            for marked in split_keeping(&MARKER_RE, piece) {
                out.extend(split_keeping(&BACKTICK_RE, marked));
            }
        }
    }
    out
}

/// Cut immediately before every whitespace character (Unicode definition,
/// matching the `\s` class used by the classifier).
fn split_before_whitespace(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for (idx, ch) in text.char_indices() {
        if ch.is_whitespace() && idx > start {
            pieces.push(&text[start..idx]);
            start = idx;
        }
    }
    if start < text.len() {
        pieces.push(&text[start..]);
    }
    pieces
}

/// Split `text` around every match of `pattern`, keeping each match as its
/// own piece. Gaps between matches survive untouched; nothing is dropped.
fn split_keeping<'a>(pattern: &Regex, text: &'a str) -> Vec<&'a str> {
    let mut pieces = Vec::new();
    let mut last = 0;
    for m in pattern.find_iter(text) {
        if m.start() > last {
            pieces.push(&text[last..m.start()]);
        }
        pieces.push(m.as_str());
        last = m.end();
    }
    if last < text.len() {
        pieces.push(&text[last..]);
    }
    pieces
}
