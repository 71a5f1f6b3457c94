//! Regex-based minification for CSS and JS.
//!
//! Both minifiers are lexical: each step is a textual substitution over the
//! whole blob, not a token-aware rewrite. String literals containing the
//! punctuation they tighten will be altered. Output is deterministic for a
//! given input.

mod css;
mod js;

pub use css::minify_css;
pub use js::minify_js;

/// Byte order mark. JS engines count it as whitespace, Rust's `\s` does not.
const BOM: char = '\u{feff}';

/// `str::trim`, also dropping byte order marks.
fn trim_whitespace(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == BOM)
}
