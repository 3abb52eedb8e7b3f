//! Inline-level parsing: the children of paragraphs and block quotes.
//!
//! Both block rules share one loop that walks tokens until the line break
//! terminating the block. Plain tokens become [`Inline::Text`] children one
//! to one; marker tokens open the delimited productions (inline code,
//! italics, links). Emphasis and link openers are gated on a two-token
//! lookahead so `* a` and `[ x` keep their literal meaning.

use mdlite_core::{escape_angle_brackets, Inline, MdliteError, Result, TokenKind};

use crate::Parser;

impl Parser {
    /// The shared inline-children loop for paragraphs and block quotes.
    /// Runs until a `LineBreak` is seen; the line break itself is left for
    /// the block loop to discard.
    ///
    /// # Errors
    /// [`MdliteError::UnexpectedToken`] for a kind with no inline
    /// production (a stray `]`, a mid-line `>` or `#`, a fence, `Eof`);
    /// [`MdliteError::Unterminated`] out of the delimited scans.
    pub(crate) fn parse_inline_children(&mut self) -> Result<Vec<Inline>> {
        let mut children = Vec::new();
        while let Some(kind) = self.peek_kind(0) {
            match kind {
                TokenKind::LineBreak => break,
                // Parens are literal text here: links are recognized from
                // `[` with lookahead, never from a bare paren.
                TokenKind::Text
                | TokenKind::Whitespace
                | TokenKind::OpenParen
                | TokenKind::CloseParen => {
                    if let Some(token) = self.consume() {
                        children.push(Inline::Text(token.value.clone()));
                    }
                }
                TokenKind::InlineCodeMarker => {
                    let opened_at = self.pos;
                    self.consume();
                    let text = self.consume_until(TokenKind::InlineCodeMarker, opened_at)?;
                    children.push(Inline::InlineCode(escape_angle_brackets(&text)));
                }
                TokenKind::EmphasisMarker if self.next_starts_flush() => {
                    let opened_at = self.pos;
                    self.consume();
                    let text = self.consume_until(TokenKind::EmphasisMarker, opened_at)?;
                    children.push(Inline::Italic(text));
                }
                TokenKind::OpenSquareBracket if self.next_starts_flush() => {
                    children.push(self.parse_link()?);
                }
                // A marker followed by whitespace reads as plain text
                // (`2 * 3`, `[ ]`), so it falls through verbatim.
                TokenKind::EmphasisMarker | TokenKind::OpenSquareBracket => {
                    if let Some(token) = self.consume() {
                        children.push(Inline::Text(token.value.clone()));
                    }
                }
                kind => {
                    return Err(MdliteError::UnexpectedToken {
                        kind,
                        position: self.pos,
                    });
                }
            }
        }
        Ok(children)
    }

    /// `[text](href)`. The opener is already known to be flush; after the
    /// closing `]` the very next token must be `(` or the link is rejected
    /// with the kind actually found. Both parts are stored raw.
    fn parse_link(&mut self) -> Result<Inline> {
        let opened_at = self.pos;
        self.consume();
        let text = self.consume_until(TokenKind::CloseSquareBracket, opened_at)?;
        match self.peek_kind(0) {
            Some(TokenKind::OpenParen) => {}
            Some(kind) => {
                return Err(MdliteError::UnexpectedToken {
                    kind,
                    position: self.pos,
                });
            }
            None => {
                return Err(MdliteError::Unterminated {
                    expected: TokenKind::OpenParen,
                    position: opened_at,
                });
            }
        }
        let href_opened_at = self.pos;
        self.consume();
        let href = self.consume_until(TokenKind::CloseParen, href_opened_at)?;
        Ok(Inline::Link { text, href })
    }

    // =========================================================================
    // Delimited-scan helpers
    // =========================================================================

    /// Concatenate the values of every token, whatever its kind, up to the
    /// first token of kind `closing`; consume that closing token too and
    /// return the accumulated text.
    ///
    /// # Errors
    /// [`MdliteError::Unterminated`] if `Eof` (or the physical end) arrives
    /// first, reporting `opened_at` as the opener's position.
    fn consume_until(&mut self, closing: TokenKind, opened_at: usize) -> Result<String> {
        let mut text = String::new();
        loop {
            match self.peek_kind(0) {
                Some(kind) if kind == closing => {
                    self.consume();
                    return Ok(text);
                }
                Some(TokenKind::Eof) | None => {
                    return Err(MdliteError::Unterminated {
                        expected: closing,
                        position: opened_at,
                    });
                }
                Some(_) => {
                    if let Some(token) = self.consume() {
                        text.push_str(&token.value);
                    }
                }
            }
        }
    }

    /// Lookahead gate for emphasis and link openers: the token after the
    /// marker must exist, must not be a whitespace-like kind, and its value
    /// must not begin with whitespace. The value check matters because the
    /// splitter glues leading spaces onto text tokens, so after `"* a"` the
    /// marker is followed by `Text(" a")` — whitespace-bearing, not flush.
    fn next_starts_flush(&self) -> bool {
        let Some(token) = self.tokens.get(self.pos + 1) else {
            return false;
        };
        if matches!(
            token.kind,
            TokenKind::Whitespace | TokenKind::LineBreak | TokenKind::Eof
        ) {
            return false;
        }
        !token.value.starts_with(char::is_whitespace)
    }
}
