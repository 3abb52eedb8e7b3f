//! Angle-bracket escaping for code content.
//!
//! Escaping happens once, at parse time, and only for the two places code
//! content is stored: inline code spans and fenced code blocks. Headings,
//! plain text, italics, link parts, and highlight specs reach the generator
//! raw, and the generator itself never escapes.

/// Escape `<` and `>` as HTML entities. Nothing else is rewritten; in
/// particular `&` and quotes pass through untouched.
///
/// # Arguments
/// * `text` - The code content to escape
///
/// # Returns
/// A new string with angle brackets replaced by `&lt;` / `&gt;`.
///
/// # Example
/// ```
/// use mdlite_core::sanitize::escape_angle_brackets;
///
/// assert_eq!(escape_angle_brackets("Vec<u8>"), "Vec&lt;u8&gt;");
/// assert_eq!(escape_angle_brackets("a & b"), "a & b");
/// ```
pub fn escape_angle_brackets(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
