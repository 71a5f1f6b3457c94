//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = "dist"
//! fonts = "fonts"
//! docs = "CDN.md"
//! report = "SIZE_REPORT.md"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::{validate_file_name, validate_relative_path};
use crate::config::ConfigDiagnostics;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Output directory (relative to the project root until normalized).
    pub output: PathBuf,
    /// Static font directory, copied to `{output}/fonts/`.
    pub fonts: PathBuf,
    /// Usage documentation file name inside the output directory.
    pub docs: String,
    /// Size report file name inside the output directory.
    pub report: String,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            output: "dist".into(),
            fonts: "fonts".into(),
            docs: "CDN.md".into(),
            report: "SIZE_REPORT.md".into(),
        }
    }
}

impl BuildSectionConfig {
    /// Subdirectory of the output that receives the copied fonts.
    pub const FONTS_DIR: &'static str = "fonts";

    /// Destination directory for copied fonts.
    pub fn fonts_output(&self) -> PathBuf {
        self.output.join(Self::FONTS_DIR)
    }

    pub fn docs_path(&self) -> PathBuf {
        self.output.join(&self.docs)
    }

    pub fn report_path(&self) -> PathBuf {
        self.output.join(&self.report)
    }

    /// Join relative paths with `root`.
    pub fn normalize(&mut self, root: &Path) {
        self.output = root.join(&self.output);
        self.fonts = root.join(&self.fonts);
    }

    /// Validate path safety. Must run before `normalize()`.
    pub fn validate_paths(&self, diag: &mut ConfigDiagnostics) {
        validate_relative_path(&self.fonts, "build.fonts", diag);
        if self.output.as_os_str().is_empty() {
            diag.error("build.output", "must not be empty");
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        validate_file_name(&self.docs, "build.docs", diag);
        validate_file_name(&self.report, "build.report", diag);
        if self.docs == self.report {
            diag.error(
                "build.report",
                format!("'{}' is also used by build.docs", self.report),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let mut build = BuildSectionConfig::default();
        build.normalize(Path::new("/project"));
        assert_eq!(build.output, PathBuf::from("/project/dist"));
        assert_eq!(build.fonts, PathBuf::from("/project/fonts"));
        assert_eq!(build.fonts_output(), PathBuf::from("/project/dist/fonts"));
        assert_eq!(build.docs_path(), PathBuf::from("/project/dist/CDN.md"));
        assert_eq!(
            build.report_path(),
            PathBuf::from("/project/dist/SIZE_REPORT.md")
        );
    }

    #[test]
    fn test_validate_conflicting_names() {
        let build = BuildSectionConfig {
            docs: "OUT.md".into(),
            report: "OUT.md".into(),
            ..BuildSectionConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        build.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_validate_fonts_outside_root() {
        let build = BuildSectionConfig {
            fonts: "../shared/fonts".into(),
            ..BuildSectionConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        build.validate_paths(&mut diag);
        assert!(diag.has_errors());
    }
}
