//! `[report]` section configuration.

use std::path::Path;

use serde::Deserialize;

use super::validate_relative_path;
use crate::config::ConfigDiagnostics;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Font files (relative to `{output}/fonts/`) listed in the size report
    /// and in the usage documentation. Missing files show as `N/A`.
    pub fonts: Vec<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            fonts: vec!["Minecraft.otf".into(), "Minecraft-Bold.otf".into()],
        }
    }
}

impl ReportConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (i, font) in self.fonts.iter().enumerate() {
            let field = format!("report.fonts[{i}]");
            if font.is_empty() {
                diag.error(field, "must not be empty");
            } else {
                validate_relative_path(Path::new(font), &field, diag);
            }
        }
    }
}
