//! CSS minifier.

use std::sync::LazyLock;

use regex::Regex;

/// `/* ... */`, non-greedy, across newlines.
static BLOCK_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

/// Whitespace runs, byte order marks included.
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s\x{FEFF}]+").unwrap());

/// Whitespace around `{ } : ; , > + ~`.
static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\x{FEFF}]*([{}:;,>+~])[\s\x{FEFF}]*").unwrap());

/// Minify a CSS text blob.
///
/// Steps, in order:
/// 1. drop block comments
/// 2. collapse whitespace runs to a single space
/// 3. drop whitespace around `{ } : ; , > + ~`
/// 4. `;}` becomes `}`
/// 5. trim
pub fn minify_css(source: &str) -> String {
    let stripped = BLOCK_COMMENT.replace_all(source, "");
    let collapsed = WHITESPACE.replace_all(&stripped, " ");
    let tightened = PUNCTUATION.replace_all(&collapsed, "$1");
    super::trim_whitespace(&tightened.replace(";}", "}")).to_string()
}
