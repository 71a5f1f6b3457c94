//! File size report.
//!
//! Reads back the sizes of the artifacts just written. Files that do not
//! exist are listed as `N/A`.
//!
//! # Format
//!
//! ```text
//! # File Size Report
//!
//! ## CSS Files
//! - retro-ui.css: 48.12 KB
//! - retro-ui.min.css: 31.07 KB
//!
//! ## Font Files
//! - Minecraft.otf: N/A
//!
//! Generated: 2025-01-01T12:00:00.000Z
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};

use super::artifact_groups;
use crate::config::BuildConfig;

const FONT_HEADING: &str = "Font Files";

/// Build and write the size report. Returns the written path.
pub fn write_report(config: &BuildConfig) -> Result<PathBuf> {
    let path = config.build.report_path();
    let generated = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let content = SizeReport::build(config).render(&generated);

    fs::write(&path, content)
        .with_context(|| format!("Failed to write size report to {}", path.display()))?;
    Ok(path)
}

/// Human-readable size of `path`, or `N/A` if it cannot be stat'ed.
pub fn file_size(path: &Path) -> String {
    fs::metadata(path)
        .map(|meta| format_size(meta.len()))
        .unwrap_or_else(|_| "N/A".to_string())
}

/// Kilobytes with two decimals.
#[allow(clippy::cast_precision_loss)]
fn format_size(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

struct SizeReport {
    sections: Vec<Section>,
}

struct Section {
    heading: &'static str,
    /// (display name, path on disk)
    entries: Vec<(String, PathBuf)>,
}

impl SizeReport {
    fn build(config: &BuildConfig) -> Self {
        let output = &config.build.output;

        let mut sections: Vec<Section> = artifact_groups(config)
            .into_iter()
            .map(|(kind, artifacts)| Section {
                heading: kind.heading(),
                entries: artifacts
                    .into_iter()
                    .map(|a| {
                        let path = output.join(&a.file_name);
                        (a.file_name, path)
                    })
                    .collect(),
            })
            .collect();

        if !config.report.fonts.is_empty() {
            let fonts_dir = config.build.fonts_output();
            sections.push(Section {
                heading: FONT_HEADING,
                entries: config
                    .report
                    .fonts
                    .iter()
                    .map(|font| (font.clone(), fonts_dir.join(font)))
                    .collect(),
            });
        }

        Self { sections }
    }

    fn render(&self, generated: &str) -> String {
        let mut out = String::with_capacity(512);
        out.push_str("# File Size Report\n\n");

        for section in &self.sections {
            out.push_str("## ");
            out.push_str(section.heading);
            out.push('\n');
            for (name, path) in &section.entries {
                out.push_str(&format!("- {}: {}\n", name, file_size(path)));
            }
            out.push('\n');
        }

        out.push_str("Generated: ");
        out.push_str(generated);
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;
    use tempfile::TempDir;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0.00 KB");
        assert_eq!(format_size(1024), "1.00 KB");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(2560 * 1024), "2560.00 KB");
    }

    #[test]
    fn test_file_size_missing() {
        let dir = TempDir::new().unwrap();
        assert_eq!(file_size(&dir.path().join("missing.css")), "N/A");
    }

    #[test]
    fn test_render_sections() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path());
        let dist = &config.build.output;
        fs::create_dir_all(dist.join("fonts")).unwrap();
        fs::write(dist.join("retro-ui.css"), vec![b'a'; 2048]).unwrap();
        fs::write(dist.join("fonts/Minecraft.otf"), vec![0u8; 512]).unwrap();

        let report = SizeReport::build(&config).render("2025-01-01T00:00:00.000Z");

        assert!(report.starts_with("# File Size Report\n\n## CSS Files\n"));
        assert!(report.contains("- retro-ui.css: 2.00 KB\n"));
        assert!(report.contains("- retro-ui.min.css: N/A\n"));
        assert!(report.contains("## JavaScript Files\n- retro-ui.js: N/A\n"));
        assert!(report.contains("## Font Files\n- Minecraft.otf: 0.50 KB\n- Minecraft-Bold.otf: N/A\n"));
        assert!(report.ends_with("Generated: 2025-01-01T00:00:00.000Z\n"));
    }

    #[test]
    fn test_write_report_timestamp() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path());
        fs::create_dir_all(&config.build.output).unwrap();

        let path = write_report(&config).unwrap();
        let content = fs::read_to_string(path).unwrap();
        let stamp = content
            .lines()
            .find_map(|l| l.strip_prefix("Generated: "))
            .unwrap();

        assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok());
        assert!(stamp.ends_with('Z'));
    }
}
