//! JavaScript minifier.

use std::sync::LazyLock;

use regex::Regex;

/// `/* ... */`, non-greedy, across newlines.
static BLOCK_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

/// Whitespace runs, byte order marks included.
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s\x{FEFF}]+").unwrap());

/// Whitespace around `{ } ( ) ; , = + - * /`.
static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\x{FEFF}]*([{}();,=+\-*/])[\s\x{FEFF}]*").unwrap());

/// URL marker that disables line-comment stripping.
const URL_SCHEME_SEP: &str = "://";

/// Minify a JavaScript text blob.
///
/// Steps, in order:
/// 1. drop `//` line comments, unless the rest of the line contains `://`
/// 2. drop block comments
/// 3. collapse whitespace runs to a single space
/// 4. drop whitespace around `{ } ( ) ; , = + - * /`
/// 5. trim
///
/// Not safe for regex literals, division next to comment-like text, or code
/// that relies on automatic semicolon insertion.
pub fn minify_js(source: &str) -> String {
    let without_lines = strip_line_comments(source);
    let stripped = BLOCK_COMMENT.replace_all(&without_lines, "");
    let collapsed = WHITESPACE.replace_all(&stripped, " ");
    let tightened = PUNCTUATION.replace_all(&collapsed, "$1");
    super::trim_whitespace(&tightened).to_string()
}

/// Remove `//` comments line by line.
///
/// Lines end at `\n` or `\r`. The first `//` on a line starts the comment.
/// If the text after it contains `://` the whole line is kept, so
/// `// see https://...` survives.
fn strip_line_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());

    for line in source.split_inclusive(['\n', '\r']) {
        let body = line.trim_end_matches(['\n', '\r']);
        match body.find("//") {
            Some(start) if !body[start + 2..].contains(URL_SCHEME_SEP) => {
                out.push_str(&body[..start]);
            }
            _ => out.push_str(body),
        }
        out.push_str(&line[body.len()..]);
    }

    out
}
