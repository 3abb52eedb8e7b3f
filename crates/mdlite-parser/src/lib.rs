//! Mdlite Parser
//!
//! Front half of the mdlite pipeline: a tokenizer that cuts raw document
//! text into classified segments, and a recursive-descent parser that
//! assembles those tokens into block-level AST nodes.
//!
//! # Overview
//!
//! Both stages are pure functions of their input. The tokenizer is total;
//! the parser rejects ungrammatical streams with a typed error instead of
//! recovering, so a document either parses whole or not at all.
//!
//! # Example
//!
//! ```
//! use mdlite_parser::{tokenize, Parser};
//! use mdlite_core::Block;
//!
//! let tokens = tokenize("# Hello World").unwrap();
//! let blocks = Parser::new(tokens).parse().unwrap();
//!
//! match &blocks[0] {
//!     Block::Heading { level, text } => {
//!         assert_eq!(*level, 1);
//!         assert_eq!(text, " Hello World");
//!     }
//!     _ => panic!("expected a heading"),
//! }
//! ```

pub mod classify;
mod inline;
pub mod tokenizer;

pub use classify::classify;
pub use tokenizer::tokenize;

use mdlite_core::{escape_angle_brackets, Block, MdliteError, Result, Token, TokenKind};
use regex::Regex;
use std::sync::LazyLock;

/// A highlight spec is the whole first token inside a fence when it looks
/// like `{2}` or `{2,5-10}`: brace-wrapped with nothing glued around it.
static HIGHLIGHT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\{.*\}$").unwrap());

/// Recursive-descent parser over a fully-materialized token arena.
///
/// The token vector is never mutated or drained; `pos` is the only moving
/// part, which keeps consumption O(1) and lookahead trivial. A parser is
/// single-use: [`Parser::parse`] consumes it.
#[derive(Debug)]
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Wrap a token stream for parsing.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parse the whole stream into block nodes.
    ///
    /// # Errors
    /// [`MdliteError::UnexpectedToken`] on a grammar violation and
    /// [`MdliteError::Unterminated`] when a closing delimiter is missing.
    /// Either way the document is rejected whole; there is no partial AST.
    pub fn parse(mut self) -> Result<Vec<Block>> {
        let mut blocks = Vec::new();
        while let Some(kind) = self.peek_kind(0) {
            match kind {
                TokenKind::Eof => break,
                TokenKind::HeadingMarker => blocks.push(self.parse_heading()),
                TokenKind::BlockQuoteMarker => blocks.push(self.parse_block_quote()?),
                TokenKind::CodeFence => blocks.push(self.parse_code_block()?),
                TokenKind::Whitespace | TokenKind::LineBreak => {
                    self.consume();
                }
                // Everything else opens a paragraph. Kinds with no inline
                // production (a stray `]`, a `>` mid-line) fail inside the
                // inline rule with the position intact.
                _ => blocks.push(self.parse_paragraph()?),
            }
        }
        Ok(blocks)
    }

    // =========================================================================
    // Block-level rules
    // =========================================================================

    /// `# ...`: the marker's own value is discarded, then text and
    /// whitespace tokens are taken greedily. There is no closing marker;
    /// the heading ends at the first token of any other kind. The text is
    /// kept raw, leading space included.
    fn parse_heading(&mut self) -> Block {
        self.consume();
        let mut text = String::new();
        while self.peek(0, &[TokenKind::Text, TokenKind::Whitespace]) {
            if let Some(token) = self.consume() {
                text.push_str(&token.value);
            }
        }
        Block::Heading { level: 1, text }
    }

    /// `> ...`: the marker is dropped and the rest of the line is parsed
    /// with the same inline rule paragraphs use.
    fn parse_block_quote(&mut self) -> Result<Block> {
        self.consume();
        let children = self.parse_inline_children()?;
        Ok(Block::BlockQuote { children })
    }

    fn parse_paragraph(&mut self) -> Result<Block> {
        let children = self.parse_inline_children()?;
        Ok(Block::Paragraph { children })
    }

    /// Fenced code block. Every token up to the closing fence is consumed
    /// whatever its kind; the first one becomes the highlight spec when it
    /// matches `{...}` whole, and is then excluded from the text. The
    /// assembled text is escaped and leading-trimmed, which removes the
    /// newline glued to the first content word but keeps the one belonging
    /// to the closing fence's line.
    fn parse_code_block(&mut self) -> Result<Block> {
        let opened_at = self.pos;
        self.consume();
        let mut highlight = None;
        let mut text = String::new();
        let mut first = true;
        loop {
            match self.peek_kind(0) {
                Some(TokenKind::CodeFence) => break,
                Some(TokenKind::Eof) | None => {
                    return Err(MdliteError::Unterminated {
                        expected: TokenKind::CodeFence,
                        position: opened_at,
                    });
                }
                Some(_) => {
                    if let Some(token) = self.consume() {
                        if first && HIGHLIGHT_RE.is_match(&token.value) {
                            highlight = Some(token.value.clone());
                        } else {
                            text.push_str(&token.value);
                        }
                        first = false;
                    }
                }
            }
        }
        self.consume();
        let text = escape_angle_brackets(&text);
        Ok(Block::CodeBlock {
            text: text.trim_start().to_string(),
            highlight,
        })
    }

    // =========================================================================
    // Cursor primitives
    // =========================================================================

    /// Non-destructive kind test at `offset` tokens ahead of the cursor.
    fn peek(&self, offset: usize, kinds: &[TokenKind]) -> bool {
        self.tokens
            .get(self.pos + offset)
            .is_some_and(|token| kinds.contains(&token.kind))
    }

    fn peek_kind(&self, offset: usize) -> Option<TokenKind> {
        self.tokens.get(self.pos + offset).map(|token| token.kind)
    }

    /// Yield the current token and advance; `None` past the end.
    fn consume(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdlite_core::Inline;

    fn parse_text(text: &str) -> Result<Vec<Block>> {
        Parser::new(tokenize(text).unwrap()).parse()
    }

    #[test]
    fn test_empty_input_parses_to_no_blocks() {
        assert_eq!(parse_text("").unwrap(), vec![]);
    }

    #[test]
    fn test_heading_keeps_raw_text() {
        let blocks = parse_text("# Title").unwrap();
        assert_eq!(
            blocks,
            vec![Block::Heading {
                level: 1,
                text: " Title".to_string(),
            }]
        );
    }

    #[test]
    fn test_heading_ends_at_non_text_token() {
        // The emphasis marker terminates the heading and opens a paragraph.
        let blocks = parse_text("# a *b*").unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(
            blocks[0],
            Block::Heading {
                level: 1,
                text: " a ".to_string(),
            }
        );
        assert_eq!(
            blocks[1],
            Block::Paragraph {
                children: vec![Inline::Italic("b".to_string())],
            }
        );
    }

    #[test]
    fn test_paragraph_collects_word_tokens() {
        let blocks = parse_text("hello world").unwrap();
        assert_eq!(
            blocks,
            vec![Block::Paragraph {
                children: vec![
                    Inline::Text("hello".to_string()),
                    Inline::Text(" world".to_string()),
                ],
            }]
        );
    }

    #[test]
    fn test_interior_newline_stays_in_one_paragraph() {
        let blocks = parse_text("a\nb").unwrap();
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn test_line_break_token_splits_paragraphs() {
        let blocks = parse_text("a\n b").unwrap();
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn test_block_quote_shares_the_inline_rule() {
        let blocks = parse_text("> quoted `code`").unwrap();
        assert_eq!(
            blocks,
            vec![Block::BlockQuote {
                children: vec![
                    Inline::Text(" quoted".to_string()),
                    Inline::InlineCode("code".to_string()),
                ],
            }]
        );
    }

    #[test]
    fn test_code_block_with_highlight_spec() {
        let blocks = parse_text("```{2,5-10}\ncode\n```").unwrap();
        assert_eq!(
            blocks,
            vec![Block::CodeBlock {
                text: "code\n".to_string(),
                highlight: Some("{2,5-10}".to_string()),
            }]
        );
    }

    #[test]
    fn test_code_block_without_highlight_spec() {
        let blocks = parse_text("```\ncode\n```").unwrap();
        assert_eq!(
            blocks,
            vec![Block::CodeBlock {
                text: "code\n".to_string(),
                highlight: None,
            }]
        );
    }

    #[test]
    fn test_code_block_escapes_angle_brackets() {
        let blocks = parse_text("```\na<b>\n```").unwrap();
        match &blocks[0] {
            Block::CodeBlock { text, .. } => assert_eq!(text, "a&lt;b&gt;\n"),
            other => panic!("expected a code block, got {other:?}"),
        }
    }

    #[test]
    fn test_highlight_spec_on_its_own_line_is_content() {
        // Whitespace attachment glues the newline to the spec, so the
        // anchored `{...}` match fails and the word stays in the text.
        let blocks = parse_text("```\n{2}\ncode\n```").unwrap();
        assert_eq!(
            blocks,
            vec![Block::CodeBlock {
                text: "{2}\ncode\n".to_string(),
                highlight: None,
            }]
        );
    }

    #[test]
    fn test_unterminated_fence_is_an_explicit_error() {
        let err = parse_text("```\ncode").unwrap_err();
        assert!(matches!(
            err,
            MdliteError::Unterminated {
                expected: TokenKind::CodeFence,
                ..
            }
        ));
    }

    #[test]
    fn test_stray_block_quote_marker_mid_line_is_rejected() {
        // Tokens are `a`, ` `, `>`, ` b`: the marker sits at index 2.
        let err = parse_text("a > b").unwrap_err();
        match err {
            MdliteError::UnexpectedToken { kind, position } => {
                assert_eq!(kind, TokenKind::BlockQuoteMarker);
                assert_eq!(position, 2);
            }
            other => panic!("expected UnexpectedToken, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_lines_between_blocks_are_discarded() {
        let blocks = parse_text("# a\n\nb").unwrap();
        assert_eq!(blocks.len(), 2);
    }
}
