// Attribute codec
// Indentation travels to the outside world as a pixel left margin on
// the block's style attribute and is read back from the same property
// on load.

use crate::options::IndentOptions;
use regex::Regex;

/// Render an indent value as an inline style declaration
pub fn render_indent_style(indent: i32) -> String {
    format!("margin-left: {indent}px !important")
}

/// Parse an indent value back out of an inline style declaration.
/// Missing or malformed margins fall back to the policy default.
/// Values are taken as written; only command-driven mutations clamp.
pub fn parse_indent_style(style: &str, options: &IndentOptions) -> i32 {
    let margin_re = Regex::new(r"margin-left:\s*(-?\d+)px").unwrap();
    margin_re
        .captures(style)
        .and_then(|cap| cap.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(options.default_level)
}
