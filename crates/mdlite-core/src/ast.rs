//! AST node types built by the parser and walked by the generator.
//!
//! A document is a flat `Vec<Block>`; only paragraphs and block quotes
//! carry children, and those children are always leaf [`Inline`] nodes
//! (the dialect has no nested inline constructs).

use serde::{Deserialize, Serialize};

/// A block-level node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    /// `# text`. Only level 1 exists in this dialect; the field is kept
    /// so the generator can emit `<h{level}>` without special-casing.
    Heading { level: u8, text: String },
    /// Fenced code block. `text` has angle brackets escaped and leading
    /// whitespace trimmed; `highlight` is the verbatim `{...}` word from
    /// the head of the fence, braces included, when one was present.
    CodeBlock {
        text: String,
        highlight: Option<String>,
    },
    /// A run of inline content up to a line break.
    Paragraph { children: Vec<Inline> },
    /// `> ...`, a quoted run of inline content.
    BlockQuote { children: Vec<Inline> },
}

/// An inline node inside a paragraph or block quote.
///
/// Only `InlineCode` stores escaped text; every other variant keeps the
/// source verbatim, including any leading whitespace the tokenizer glued
/// onto the segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Inline {
    /// One token's worth of plain text; adjacent text children are never
    /// merged.
    Text(String),
    /// `` `code` `` with angle brackets escaped.
    InlineCode(String),
    /// `*italic*`, stored raw.
    Italic(String),
    /// `[text](href)`, both parts stored raw.
    Link { text: String, href: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_equality() {
        let a = Block::Heading {
            level: 1,
            text: " Title".to_string(),
        };
        let b = Block::Heading {
            level: 1,
            text: " Title".to_string(),
        };
        assert_eq!(a, b);
    }

    #[test]
    fn test_inline_variants_are_distinct() {
        assert_ne!(
            Inline::Text("code".to_string()),
            Inline::InlineCode("code".to_string())
        );
    }
}
