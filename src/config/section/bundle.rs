//! `[[bundle]]` manifests.
//!
//! Each bundle concatenates an ordered list of sources into a raw artifact
//! and a minified artifact. The asset kind comes from the output extension.
//!
//! # Example
//!
//! ```toml
//! [[bundle]]
//! name = "class-based"
//! output = "retro-ui.css"              # minified: retro-ui.min.css
//! sources = ["css/retro-ui.css", "css/retro-ui-components.css"]
//!
//! [[bundle]]
//! name = "runtime"
//! output = "retro-ui.js"
//! minified = "retro-ui.slim.js"
//! sources = ["js/retro-ui.js"]
//! ```
//!
//! Declaring any `[[bundle]]` replaces the built-in manifests entirely.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use serde::Deserialize;

use super::{BuildSectionConfig, validate_file_name, validate_relative_path};
use crate::asset::AssetKind;
use crate::config::ConfigDiagnostics;

#[derive(Debug, Clone, Deserialize)]
pub struct BundleConfig {
    /// Display name used in logs.
    pub name: String,
    /// Raw artifact file name inside the output directory.
    pub output: String,
    /// Minified artifact file name. Derived from `output` when omitted.
    #[serde(default)]
    pub minified: Option<String>,
    /// Source files in concatenation order (relative to the project root
    /// until normalized).
    pub sources: Vec<PathBuf>,
}

/// Manifests used when the config declares no `[[bundle]]`.
pub fn default_bundles() -> Vec<BundleConfig> {
    vec![
        BundleConfig::new(
            "class-based",
            "retro-ui.css",
            &["css/retro-ui.css", "css/retro-ui-components.css"],
        ),
        BundleConfig::new(
            "classless",
            "retro-ui-classless.css",
            &[
                "css/retro-ui-classless.css",
                "css/retro-ui-components.css",
                "css/retro-ui-utilities.css",
            ],
        ),
        BundleConfig::new("runtime", "retro-ui.js", &["js/retro-ui.js"]),
    ]
}

impl BundleConfig {
    pub fn new(name: &str, output: &str, sources: &[&str]) -> Self {
        Self {
            name: name.into(),
            output: output.into(),
            minified: None,
            sources: sources.iter().map(PathBuf::from).collect(),
        }
    }

    /// Asset kind from the output extension.
    pub fn kind(&self) -> Option<AssetKind> {
        AssetKind::from_path(Path::new(&self.output))
    }

    /// Minified artifact name: explicit, or `.min` inserted before the
    /// extension (`retro-ui.css` → `retro-ui.min.css`).
    pub fn minified_name(&self) -> String {
        if let Some(name) = &self.minified {
            return name.clone();
        }
        let path = Path::new(&self.output);
        match (path.file_stem(), path.extension()) {
            (Some(stem), Some(ext)) => {
                format!("{}.min.{}", stem.to_string_lossy(), ext.to_string_lossy())
            }
            _ => format!("{}.min", self.output),
        }
    }

    pub fn normalize(&mut self, root: &Path) {
        for source in &mut self.sources {
            *source = root.join(&*source);
        }
    }

    /// Validate path safety. Must run before `normalize()`.
    pub fn validate_paths(&self, idx: usize, diag: &mut ConfigDiagnostics) {
        for (i, source) in self.sources.iter().enumerate() {
            validate_relative_path(source, &format!("bundle[{idx}].sources[{i}]"), diag);
        }
    }

    fn validate(&self, idx: usize, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error(format!("bundle[{idx}].name"), "must not be empty");
        }
        if self.sources.is_empty() {
            diag.error(
                format!("bundle[{idx}].sources"),
                format!("bundle '{}' has an empty manifest", self.name),
            );
        }

        let output_field = format!("bundle[{idx}].output");
        validate_file_name(&self.output, &output_field, diag);
        if self.kind().is_none() {
            diag.error_with_hint(
                output_field,
                format!("unsupported output '{}'", self.output),
                "bundle outputs must end in .css or .js",
            );
        }

        if let Some(minified) = &self.minified {
            let field = format!("bundle[{idx}].minified");
            validate_file_name(minified, &field, diag);
            if AssetKind::from_path(Path::new(minified)) != self.kind() {
                diag.error(
                    field,
                    format!("'{minified}' must have the same extension as '{}'", self.output),
                );
            }
        }
    }
}

// ============================================================================
// Output Name Tracker (Validation Helper)
// ============================================================================

/// Tracks output names to detect two artifacts writing the same file.
struct OutputNameTracker {
    seen: FxHashMap<String, String>,
}

impl OutputNameTracker {
    fn new() -> Self {
        Self {
            seen: FxHashMap::default(),
        }
    }

    fn check_and_insert(
        &mut self,
        name: String,
        owner: String,
        field: String,
        diag: &mut ConfigDiagnostics,
    ) {
        if let Some(prev) = self.seen.get(&name) {
            diag.error(
                field,
                format!("output conflict: {owner} and {prev} both write '{name}'"),
            );
        } else {
            self.seen.insert(name, owner);
        }
    }
}

/// Validate all bundles, including output name conflicts across bundles and
/// with the generated documents.
pub(crate) fn validate_bundles(
    bundles: &[BundleConfig],
    build: &BuildSectionConfig,
    diag: &mut ConfigDiagnostics,
) {
    if bundles.is_empty() {
        diag.error("bundle", "at least one bundle is required");
        return;
    }

    let mut tracker = OutputNameTracker::new();
    tracker.check_and_insert(build.docs.clone(), "build.docs".into(), "build.docs".into(), diag);
    tracker.check_and_insert(
        build.report.clone(),
        "build.report".into(),
        "build.report".into(),
        diag,
    );
    tracker.check_and_insert(
        BuildSectionConfig::FONTS_DIR.into(),
        "the fonts directory".into(),
        "build.fonts".into(),
        diag,
    );

    for (idx, bundle) in bundles.iter().enumerate() {
        bundle.validate(idx, diag);

        let owner = format!("bundle '{}'", bundle.name);
        tracker.check_and_insert(
            bundle.output.clone(),
            owner.clone(),
            format!("bundle[{idx}].output"),
            diag,
        );
        tracker.check_and_insert(
            bundle.minified_name(),
            format!("{owner} (minified)"),
            format!("bundle[{idx}].minified"),
            diag,
        );
    }
}
