//! Mdlite Render
//!
//! Back half of the mdlite pipeline: walk a parsed block sequence and emit
//! the HTML string. Generation is pure and total — every block renders, in
//! document order, with no separators between blocks beyond what the markup
//! itself carries.
//!
//! All escaping already happened at parse time (code content only), so this
//! crate concatenates stored text verbatim. Two quirks of the output format
//! are deliberate and kept bit-compatible with the program this grew out of:
//! a fence with no highlight spec renders the literal placeholder
//! `data-line="undefined"`, and the `</pre></code>` close order is inverted.
//!
//! # Example
//!
//! ```
//! use mdlite_core::Block;
//! use mdlite_render::generate;
//!
//! let blocks = vec![Block::Heading {
//!     level: 1,
//!     text: " Title".to_string(),
//! }];
//! assert_eq!(generate(&blocks), "<h1> Title</h1>");
//! ```

use mdlite_core::{Block, Inline};

/// Render a block sequence to a single HTML string.
pub fn generate(blocks: &[Block]) -> String {
    let mut html = String::new();
    for block in blocks {
        html.push_str(&render_block(block));
    }
    html
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Heading { level, text } => format!("<h{level}>{text}</h{level}>"),
        Block::Paragraph { children } => format!("<p>{}</p>", render_children(children)),
        Block::BlockQuote { children } => {
            format!("<blockquote>{}</blockquote>", render_children(children))
        }
        Block::CodeBlock { text, highlight } => {
            let spec = highlight.as_deref().unwrap_or("undefined");
            format!("<pre data-line=\"{spec}\"><code>{text}</pre></code>")
        }
    }
}

fn render_children(children: &[Inline]) -> String {
    let mut html = String::new();
    for child in children {
        html.push_str(&render_inline(child));
    }
    html
}

/// One inline child's markup. Text children render as their value plus one
/// trailing space: marker tokens swallow the whitespace in front of them, so
/// the trailing space is what keeps a word apart from the `<code>` or `<em>`
/// span that follows it. Between two plain words it doubles up with the next
/// value's leading space; that too is kept.
fn render_inline(inline: &Inline) -> String {
    match inline {
        Inline::Text(text) => format!("{text} "),
        Inline::InlineCode(text) => format!("<code>{text}</code>"),
        Inline::Italic(text) => format!("<em>{text}</em>"),
        Inline::Link { text, href } => format!("<a href=\"{href}\">{text}</a>"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_renders_empty_string() {
        assert_eq!(generate(&[]), "");
    }

    #[test]
    fn test_heading_format() {
        let blocks = vec![Block::Heading {
            level: 1,
            text: " Title".to_string(),
        }];
        assert_eq!(generate(&blocks), "<h1> Title</h1>");
    }

    #[test]
    fn test_text_child_carries_one_trailing_space() {
        let blocks = vec![Block::Paragraph {
            children: vec![
                Inline::Text("hello".to_string()),
                Inline::Text(" world".to_string()),
            ],
        }];
        assert_eq!(generate(&blocks), "<p>hello  world </p>");
    }

    #[test]
    fn test_inline_code_has_no_trailing_space() {
        let blocks = vec![Block::Paragraph {
            children: vec![
                Inline::Text("Welcome".to_string()),
                Inline::InlineCode("markdown".to_string()),
                Inline::Text(".".to_string()),
            ],
        }];
        assert_eq!(generate(&blocks), "<p>Welcome <code>markdown</code>. </p>");
    }

    #[test]
    fn test_italic_format() {
        let blocks = vec![Block::Paragraph {
            children: vec![Inline::Italic("a".to_string())],
        }];
        assert_eq!(generate(&blocks), "<p><em>a</em></p>");
    }

    #[test]
    fn test_link_format() {
        let blocks = vec![Block::Paragraph {
            children: vec![Inline::Link {
                text: "blog".to_string(),
                href: "https://example.com".to_string(),
            }],
        }];
        assert_eq!(
            generate(&blocks),
            "<p><a href=\"https://example.com\">blog</a></p>"
        );
    }

    #[test]
    fn test_block_quote_shares_inline_rendering() {
        let blocks = vec![Block::BlockQuote {
            children: vec![Inline::Text(" quoted".to_string())],
        }];
        assert_eq!(generate(&blocks), "<blockquote> quoted </blockquote>");
    }

    #[test]
    fn test_code_block_with_highlight_spec() {
        let blocks = vec![Block::CodeBlock {
            text: "code\n".to_string(),
            highlight: Some("{2,5-10}".to_string()),
        }];
        assert_eq!(
            generate(&blocks),
            "<pre data-line=\"{2,5-10}\"><code>code\n</pre></code>"
        );
    }

    #[test]
    fn test_missing_highlight_renders_undefined_placeholder() {
        let blocks = vec![Block::CodeBlock {
            text: "code\n".to_string(),
            highlight: None,
        }];
        assert_eq!(
            generate(&blocks),
            "<pre data-line=\"undefined\"><code>code\n</pre></code>"
        );
    }

    #[test]
    fn test_blocks_concatenate_without_separators() {
        let blocks = vec![
            Block::Heading {
                level: 1,
                text: " a ".to_string(),
            },
            Block::Paragraph {
                children: vec![Inline::Italic("b".to_string())],
            },
        ];
        assert_eq!(generate(&blocks), "<h1> a </h1><p><em>b</em></p>");
    }

    #[test]
    fn test_stored_text_is_not_escaped_again() {
        // Escaping is a parse-time concern; stored entities pass through.
        let blocks = vec![Block::Paragraph {
            children: vec![Inline::InlineCode("&lt;b&gt;".to_string())],
        }];
        assert_eq!(generate(&blocks), "<p><code>&lt;b&gt;</code></p>");
    }
}
