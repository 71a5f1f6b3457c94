//! `[package]` section configuration.
//!
//! Identifies the published npm package. Only used to render CDN URLs in the
//! generated usage documentation.

use serde::Deserialize;

use crate::config::ConfigDiagnostics;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PackageConfig {
    /// npm package name, e.g. `retro-ui-vanilla`.
    pub name: String,
    /// Version pinned in "specific version" URLs.
    pub version: String,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            name: "retro-ui-vanilla".into(),
            version: "1.0.0".into(),
        }
    }
}

impl PackageConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error("package.name", "must not be empty");
        }
        if self.name.contains(char::is_whitespace) {
            diag.error("package.name", format!("'{}' contains whitespace", self.name));
        }
        if self.version.trim().is_empty() {
            diag.error("package.version", "must not be empty");
        }
    }
}
