//! Build configuration management for `retroui.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [package], [build], [report], [[bundle]]
//! ├── types/         # ConfigError, ConfigDiagnostics
//! ├── util.rs        # config file lookup
//! └── mod.rs         # BuildConfig (this file)
//! ```
//!
//! The config file is optional. Without it the built-in manifests are used,
//! rooted at the current directory.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{BuildSectionConfig, BundleConfig, PackageConfig, ReportConfig};
pub use types::{ConfigDiagnostics, ConfigError};

use crate::{cli::Cli, debug, log};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing retroui.toml
#[derive(Debug, Clone, Deserialize)]
pub struct BuildConfig {
    /// Path of the loaded config file, empty when running on defaults
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root: sources, fonts and output are resolved against it
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub package: PackageConfig,

    #[serde(default)]
    pub build: BuildSectionConfig,

    #[serde(default)]
    pub report: ReportConfig,

    /// Bundle manifests, in build order
    #[serde(default = "section::default_bundles", rename = "bundle")]
    pub bundles: Vec<BundleConfig>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            package: PackageConfig::default(),
            build: BuildSectionConfig::default(),
            report: ReportConfig::default(),
            bundles: section::default_bundles(),
        }
    }
}

impl BuildConfig {
    /// Load configuration from CLI arguments.
    ///
    /// With `--root`, the config is looked up only in that directory.
    /// Otherwise it is searched upward from cwd and its parent directory
    /// becomes the project root. No config file means built-in defaults
    /// rooted at `--root` or cwd.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let config_path = match &cli.root {
            Some(root) => {
                let candidate = cwd.join(root).join(&cli.config);
                candidate.is_file().then_some(candidate)
            }
            None => find_config_file(&cli.config, &cwd),
        };

        let mut config = match &config_path {
            Some(path) => Self::from_path(path)?,
            None => {
                debug!("config"; "{} not found, using built-in manifests", cli.config.display());
                Self::default()
            }
        };

        // Validate raw paths before normalization
        config.validate_paths()?;

        let root = match (&cli.root, &config_path) {
            (Some(root), _) => cwd.join(root),
            (None, Some(path)) => path.parent().map(Path::to_path_buf).unwrap_or(cwd),
            (None, None) => cwd,
        };

        config.config_path = config_path.unwrap_or_default();
        config.finalize(&root, cli.output.as_deref());
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Get path relative to the project root, for display.
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Set the root, apply the CLI output override and resolve every
    /// project-relative path against the root.
    pub fn finalize(&mut self, root: &Path, output: Option<&Path>) {
        let root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());

        if let Some(output) = output {
            self.build.output = output.to_path_buf();
        }

        self.build.normalize(&root);
        for bundle in &mut self.bundles {
            bundle.normalize(&root);
        }
        self.root = root;
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Pre-validate paths before normalization.
    ///
    /// Normalization turns every path absolute, so absolute or `..` paths
    /// written in the config can only be detected here.
    fn validate_paths(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.build.validate_paths(&mut diag);
        for (idx, bundle) in self.bundles.iter().enumerate() {
            bundle.validate_paths(idx, &mut diag);
        }

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Validate the whole configuration, collecting all errors at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.package.validate(&mut diag);
        self.build.validate(&mut diag);
        self.report.validate(&mut diag);
        section::validate_bundles(&self.bundles, &self.build, &mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Default configuration rooted at `root`.
#[cfg(test)]
pub fn test_config(root: &Path) -> BuildConfig {
    let mut config = BuildConfig::default();
    config.finalize(root, None);
    config
}

/// Parse config, panicking on unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> BuildConfig {
    let (parsed, ignored) = BuildConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
