//! Asset kind definitions.

use std::path::Path;

/// Kind of text asset handled by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum AssetKind {
    /// Style sheet (`.css`).
    Css,
    /// Script (`.js`).
    Js,
}

impl AssetKind {
    /// Detect the kind from a file extension.
    ///
    /// Returns `None` for anything other than `.css` / `.js`.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "css" => Some(Self::Css),
            "js" => Some(Self::Js),
            _ => None,
        }
    }

    /// File extension without the leading dot.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Js => "js",
        }
    }

    /// Section heading used by generated documents.
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Css => "CSS Files",
            Self::Js => "JavaScript Files",
        }
    }

    /// Minify `source` with the minifier for this kind.
    pub fn minify(self, source: &str) -> String {
        match self {
            Self::Css => super::minify::minify_css(source),
            Self::Js => super::minify::minify_js(source),
        }
    }
}
