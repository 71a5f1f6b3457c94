//! Bundle assembly.
//!
//! For every source in manifest order that exists, the raw content and its
//! minified form are each appended to their buffer followed by `\n`. Missing
//! sources are skipped. Both buffers are then written to the output
//! directory, replacing any previous file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::asset::AssetKind;
use crate::config::BundleConfig;
use crate::debug;

/// Result of assembling one bundle.
#[derive(Debug, Clone)]
pub struct BundleOutput {
    pub name: String,
    pub kind: AssetKind,
    /// Raw artifact path.
    pub raw_path: PathBuf,
    /// Minified artifact path.
    pub minified_path: PathBuf,
    /// Concatenated source content.
    pub raw: String,
    /// Concatenated minified content.
    pub minified: String,
    /// Sources that were read, in order.
    pub included: Vec<PathBuf>,
    /// Sources that did not exist.
    pub skipped: Vec<PathBuf>,
}

impl BundleOutput {
    /// Bytes saved by minification.
    pub fn saved_bytes(&self) -> usize {
        self.raw.len().saturating_sub(self.minified.len())
    }
}

/// Read and concatenate a bundle's sources without writing anything.
///
/// Artifact paths are resolved against `output_dir`.
pub fn assemble_bundle(bundle: &BundleConfig, output_dir: &Path) -> Result<BundleOutput> {
    let kind = bundle
        .kind()
        .ok_or_else(|| anyhow!("bundle '{}' has unsupported output '{}'", bundle.name, bundle.output))?;

    let mut raw = String::new();
    let mut minified = String::new();
    let mut included = Vec::with_capacity(bundle.sources.len());
    let mut skipped = Vec::new();

    for source in &bundle.sources {
        if !source.exists() {
            debug!("bundle"; "{}: skipping missing {}", bundle.name, source.display());
            skipped.push(source.clone());
            continue;
        }

        let content = fs::read_to_string(source)
            .with_context(|| format!("Failed to read {}", source.display()))?;

        raw.push_str(&content);
        raw.push('\n');
        minified.push_str(&kind.minify(&content));
        minified.push('\n');
        included.push(source.clone());
    }

    Ok(BundleOutput {
        name: bundle.name.clone(),
        kind,
        raw_path: output_dir.join(&bundle.output),
        minified_path: output_dir.join(bundle.minified_name()),
        raw,
        minified,
        included,
        skipped,
    })
}

/// Write both artifacts, overwriting existing files.
pub fn write_bundle(output: &BundleOutput) -> Result<()> {
    for (path, content) in [
        (&output.raw_path, &output.raw),
        (&output.minified_path, &output.minified),
    ] {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    Ok(())
}

/// Assemble a bundle and write its artifacts into `output_dir`.
pub fn build_bundle(bundle: &BundleConfig, output_dir: &Path) -> Result<BundleOutput> {
    let output = assemble_bundle(bundle, output_dir)?;
    write_bundle(&output)?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn bundle_in(dir: &Path, output: &str, sources: &[&str]) -> BundleConfig {
        let mut bundle = BundleConfig::new("test", output, sources);
        bundle.normalize(dir);
        bundle
    }

    #[test]
    fn test_missing_source_skipped() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.css"), "a { color: red; }").unwrap();
        fs::write(dir.path().join("c.css"), "/* c */ c { margin: 0; }").unwrap();

        let bundle = bundle_in(dir.path(), "out.css", &["a.css", "b.css", "c.css"]);
        let out = assemble_bundle(&bundle, &dir.path().join("dist")).unwrap();

        assert_eq!(out.raw, "a { color: red; }\n/* c */ c { margin: 0; }\n");
        assert_eq!(out.minified, "a{color:red}\nc{margin:0}\n");
        assert_eq!(out.included.len(), 2);
        assert_eq!(out.skipped, vec![dir.path().join("b.css")]);
    }

    #[test]
    fn test_manifest_order_preserved() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("first.js"), "var a = 1;").unwrap();
        fs::write(dir.path().join("second.js"), "var b = 2;").unwrap();

        let bundle = bundle_in(dir.path(), "out.js", &["second.js", "first.js"]);
        let out = assemble_bundle(&bundle, dir.path()).unwrap();

        assert_eq!(out.kind, AssetKind::Js);
        assert_eq!(out.raw, "var b = 2;\nvar a = 1;\n");
        assert_eq!(out.minified, "var b=2;\nvar a=1;\n");
    }

    #[test]
    fn test_all_sources_missing() {
        let dir = TempDir::new().unwrap();
        let bundle = bundle_in(dir.path(), "out.css", &["nope.css"]);
        let out = build_bundle(&bundle, &dir.path().join("dist")).unwrap();

        assert!(out.raw.is_empty());
        assert!(out.minified.is_empty());
        // Still written (empty), replacing stale output.
        assert_eq!(fs::read_to_string(dir.path().join("dist/out.css")).unwrap(), "");
        assert_eq!(fs::read_to_string(dir.path().join("dist/out.min.css")).unwrap(), "");
    }

    #[test]
    fn test_build_overwrites_previous_output() {
        let dir = TempDir::new().unwrap();
        let dist = dir.path().join("dist");
        fs::create_dir_all(&dist).unwrap();
        fs::write(dist.join("out.css"), "stale content that is much longer").unwrap();
        fs::write(dir.path().join("a.css"), "p { }").unwrap();

        let bundle = bundle_in(dir.path(), "out.css", &["a.css"]);
        let out = build_bundle(&bundle, &dist).unwrap();

        assert_eq!(fs::read_to_string(dist.join("out.css")).unwrap(), "p { }\n");
        assert_eq!(fs::read_to_string(dist.join("out.min.css")).unwrap(), "p{}\n");
        assert_eq!(out.saved_bytes(), 2);
    }

    #[test]
    fn test_directory_source_is_error() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("css")).unwrap();
        let bundle = bundle_in(dir.path(), "out.css", &["css"]);
        assert!(assemble_bundle(&bundle, dir.path()).is_err());
    }

    #[test]
    fn test_unsupported_output_is_error() {
        let dir = TempDir::new().unwrap();
        let bundle = bundle_in(dir.path(), "out.txt", &["a.txt"]);
        assert!(assemble_bundle(&bundle, dir.path()).is_err());
    }
}
