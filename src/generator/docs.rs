//! CDN usage documentation.
//!
//! Pure templating over the package metadata and the bundle manifests: quick
//! start snippet, list of distributed files, version-pinned URLs for jsDelivr
//! and unpkg, and a font-face example.

use std::fmt::Write as _;
use std::fs;
use std::path::{Component, PathBuf};

use anyhow::{Context, Result};

use super::{Artifact, artifact_groups};
use crate::asset::AssetKind;
use crate::config::{BuildConfig, BuildSectionConfig};

const JSDELIVR: &str = "https://cdn.jsdelivr.net/npm";
const UNPKG: &str = "https://unpkg.com";

/// Render and write the usage documentation. Returns the written path.
pub fn write_docs(config: &BuildConfig) -> Result<PathBuf> {
    let path = config.build.docs_path();
    let content = UsageDocs::build(config).render();

    fs::write(&path, content)
        .with_context(|| format!("Failed to write usage docs to {}", path.display()))?;
    Ok(path)
}

/// Output directory as published in the package, `/`-separated.
///
/// An output outside the project root is published under its own name.
fn dist_prefix(config: &BuildConfig) -> String {
    let relative = config.root_relative(&config.build.output);
    let published = if relative.is_absolute() {
        relative.file_name().map(PathBuf::from).unwrap_or_default()
    } else {
        relative
    };

    published
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

struct UsageDocs<'a> {
    name: &'a str,
    version: &'a str,
    /// Output directory as seen from the package root, `/`-separated.
    dist: String,
    groups: Vec<(AssetKind, Vec<Artifact>)>,
    fonts: &'a [String],
    report: &'a str,
}

impl<'a> UsageDocs<'a> {
    fn build(config: &'a BuildConfig) -> Self {
        Self {
            name: &config.package.name,
            version: &config.package.version,
            dist: dist_prefix(config),
            groups: artifact_groups(config),
            fonts: &config.report.fonts,
            report: &config.build.report,
        }
    }

    /// CDN URL of a file inside the output directory.
    fn url(&self, cdn: &str, tag: &str, file: &str) -> String {
        if self.dist.is_empty() {
            format!("{cdn}/{}@{tag}/{file}", self.name)
        } else {
            format!("{cdn}/{}@{tag}/{}/{file}", self.name, self.dist)
        }
    }

    /// First minified artifact of `kind`, used in snippets.
    fn primary(&self, kind: AssetKind) -> Option<&str> {
        self.groups
            .iter()
            .find(|(k, _)| *k == kind)
            .and_then(|(_, artifacts)| artifacts.iter().find(|a| a.minified))
            .map(|a| a.file_name.as_str())
    }

    /// `<link>` / `<script>` tags for the primary artifacts.
    fn tags(&self, cdn: &str, tag: &str) -> String {
        let mut out = String::new();
        if let Some(css) = self.primary(AssetKind::Css) {
            let _ = writeln!(
                out,
                "<link rel=\"stylesheet\" href=\"{}\">",
                self.url(cdn, tag, css)
            );
        }
        if let Some(js) = self.primary(AssetKind::Js) {
            let _ = writeln!(out, "<script src=\"{}\"></script>", self.url(cdn, tag, js));
        }
        out
    }

    fn render(&self) -> String {
        let mut out = String::with_capacity(4096);
        out.push_str("# CDN Usage\n\n");
        self.render_quick_start(&mut out);
        self.render_files(&mut out);
        self.render_versions(&mut out);
        self.render_fonts(&mut out);
        self.render_alternatives(&mut out);
        out
    }

    fn render_quick_start(&self, out: &mut String) {
        out.push_str("## Quick Start\n\nInclude the minified files directly from a CDN:\n\n");
        out.push_str("```html\n<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("    <meta charset=\"UTF-8\">\n");
        out.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        out.push_str("    <title>Retro UI Example</title>\n");
        if let Some(css) = self.primary(AssetKind::Css) {
            let _ = writeln!(
                out,
                "    <link rel=\"stylesheet\" href=\"{}\">",
                self.url(JSDELIVR, self.version, css)
            );
        }
        out.push_str("</head>\n<body class=\"retro-ui\">\n");
        out.push_str("    <div class=\"retro-card\">\n");
        out.push_str("        <h1>Hello Retro World!</h1>\n");
        out.push_str("        <button class=\"retro-button\">Click me!</button>\n");
        out.push_str("    </div>\n");
        if let Some(js) = self.primary(AssetKind::Js) {
            out.push_str("    <!-- JavaScript is optional -->\n");
            let _ = writeln!(
                out,
                "    <script src=\"{}\"></script>",
                self.url(JSDELIVR, self.version, js)
            );
        }
        out.push_str("</body>\n</html>\n```\n\n");
    }

    fn render_files(&self, out: &mut String) {
        out.push_str("## Available Files\n\n");
        for (kind, artifacts) in &self.groups {
            let _ = writeln!(out, "### {}", kind.heading());
            for artifact in artifacts {
                let what = if artifact.minified {
                    "Minified"
                } else {
                    "Full, with comments"
                };
                let _ = writeln!(
                    out,
                    "- `{}` - {what} ({})",
                    self.dist_path(&artifact.file_name),
                    artifact.bundle
                );
            }
            out.push('\n');
        }

        if !self.fonts.is_empty() {
            out.push_str("### Fonts\n");
            for font in self.fonts {
                let file = format!("{}/{font}", BuildSectionConfig::FONTS_DIR);
                let _ = writeln!(out, "- `{}`", self.dist_path(&file));
            }
            out.push('\n');
        }
    }

    fn render_versions(&self, out: &mut String) {
        out.push_str("## Version-specific URLs\n\n");
        let _ = write!(
            out,
            "### Latest Version\n```html\n{}```\n\n",
            self.tags(JSDELIVR, "latest")
        );
        let _ = write!(
            out,
            "### Specific Version\n```html\n{}```\n\n",
            self.tags(JSDELIVR, self.version)
        );
    }

    fn render_fonts(&self, out: &mut String) {
        let Some(font) = self.fonts.first() else {
            return;
        };
        let family = font.rsplit_once('.').map_or(font.as_str(), |(stem, _)| stem);
        let file = format!("{}/{font}", BuildSectionConfig::FONTS_DIR);

        out.push_str("## Font Loading\n\n");
        out.push_str("The CSS includes font-face declarations that reference the CDN:\n\n");
        let _ = write!(
            out,
            "```css\n@font-face {{\n    font-family: '{family}';\n    src: url('{}') format('opentype');\n}}\n```\n\n",
            self.url(JSDELIVR, self.version, &file)
        );
        let _ = write!(out, "Exact file sizes are listed in `{}`.\n\n", self.dist_path(self.report));
    }

    fn render_alternatives(&self, out: &mut String) {
        out.push_str("## Alternative CDNs\n\n");
        let _ = write!(
            out,
            "### unpkg\n```html\n{}```\n",
            self.tags(UNPKG, self.version)
        );
    }

    fn dist_path(&self, file: &str) -> String {
        if self.dist.is_empty() {
            file.to_string()
        } else {
            format!("{}/{file}", self.dist)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;
    use std::path::Path;
    use tempfile::TempDir;

    #[test]
    fn test_render_default_docs() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path());
        let docs = UsageDocs::build(&config).render();

        assert!(docs.starts_with("# CDN Usage\n"));
        assert!(docs.contains(
            "<link rel=\"stylesheet\" href=\"https://cdn.jsdelivr.net/npm/retro-ui-vanilla@1.0.0/dist/retro-ui.min.css\">"
        ));
        assert!(docs.contains(
            "<script src=\"https://cdn.jsdelivr.net/npm/retro-ui-vanilla@latest/dist/retro-ui.min.js\"></script>"
        ));
        assert!(docs.contains("https://unpkg.com/retro-ui-vanilla@1.0.0/dist/retro-ui.min.css"));
        assert!(docs.contains("- `dist/retro-ui-classless.min.css` - Minified (classless)"));
        assert!(docs.contains("- `dist/fonts/Minecraft-Bold.otf`"));
        assert!(docs.contains("font-family: 'Minecraft';"));
        assert!(docs.contains("`dist/SIZE_REPORT.md`"));
    }

    #[test]
    fn test_render_uses_package_metadata() {
        let dir = TempDir::new().unwrap();
        let mut config = test_config(dir.path());
        config.package.name = "retro-ui-next".into();
        config.package.version = "2.1.0".into();
        config.report.fonts.clear();

        let docs = UsageDocs::build(&config).render();
        assert!(docs.contains("retro-ui-next@2.1.0/dist/retro-ui.min.js"));
        assert!(!docs.contains("Font Loading"));
        assert!(!docs.contains("### Fonts"));
    }

    #[test]
    fn test_render_without_js_bundle() {
        let dir = TempDir::new().unwrap();
        let mut config = test_config(dir.path());
        config.bundles.retain(|b| b.kind() == Some(AssetKind::Css));

        let docs = UsageDocs::build(&config).render();
        assert!(!docs.contains("<script"));
        assert!(!docs.contains("JavaScript Files"));
    }

    #[test]
    fn test_output_outside_root() {
        let project = TempDir::new().unwrap();
        let elsewhere = TempDir::new().unwrap();
        let mut config = BuildConfig::default();
        config.finalize(project.path(), Some(&elsewhere.path().join("public")));

        assert_eq!(dist_prefix(&config), "public");
        let docs = UsageDocs::build(&config).render();
        assert!(docs.contains("retro-ui-vanilla@1.0.0/public/retro-ui.min.css"));
        assert!(!docs.contains("@1.0.0//"));
    }

    #[test]
    fn test_nested_output_prefix() {
        let dir = TempDir::new().unwrap();
        let mut config = BuildConfig::default();
        config.finalize(dir.path(), Some(Path::new("build/dist")));
        assert_eq!(dist_prefix(&config), "build/dist");
    }

    #[test]
    fn test_write_docs() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path());
        fs::create_dir_all(&config.build.output).unwrap();

        let path = write_docs(&config).unwrap();
        assert_eq!(path, config.build.output.join("CDN.md"));
        assert!(fs::read_to_string(path).unwrap().contains("## Alternative CDNs"));
    }
}
