//! Asset build orchestration.
//!
//! Build pipeline phases, strictly sequential:
//! - **Init** - create the output directory
//! - **Bundles** - concatenate + minify every manifest, write raw and minified
//! - **Fonts** - mirror the fonts directory into `{output}/fonts/`
//! - **Docs** - CDN usage documentation
//! - **Report** - file size report read back from disk
//!
//! Any error aborts the remaining phases. Nothing already written is rolled
//! back.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::{
    config::BuildConfig,
    debug,
    generator::{docs::write_docs, report::write_report},
    log,
    logger::status_success,
    pipeline::{BundleOutput, build_bundle, copy_static_dir},
};

/// What a build produced.
#[derive(Debug)]
pub struct BuildSummary {
    pub bundles: Vec<BundleOutput>,
    pub fonts_copied: usize,
    pub docs: PathBuf,
    pub report: PathBuf,
}

/// Run the whole pipeline for `config`.
pub fn build_assets(config: &BuildConfig) -> Result<BuildSummary> {
    log!("build"; "building {} {}", config.package.name, config.package.version);

    init_output(config)?;
    let bundles = build_bundles(config)?;
    let fonts_copied = copy_fonts(config)?;

    let docs = write_docs(config)?;
    status_success(&format!("docs: {}", config.root_relative(&docs).display()));

    let report = write_report(config)?;
    status_success(&format!("report: {}", config.root_relative(&report).display()));

    Ok(BuildSummary {
        bundles,
        fonts_copied,
        docs,
        report,
    })
}

fn init_output(config: &BuildConfig) -> Result<()> {
    let output = &config.build.output;
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory {}", output.display()))?;
    debug!("build"; "root: {}", config.get_root().display());
    debug!("build"; "output: {}", output.display());
    Ok(())
}

/// Build every bundle in manifest order.
fn build_bundles(config: &BuildConfig) -> Result<Vec<BundleOutput>> {
    let mut outputs = Vec::with_capacity(config.bundles.len());

    for bundle in &config.bundles {
        let output = build_bundle(bundle, &config.build.output)
            .with_context(|| format!("Failed to build bundle '{}'", bundle.name))?;

        for missing in &output.skipped {
            debug!("build"; "{}: {} not found", output.name, config.root_relative(missing).display());
        }

        log!(
            output.kind.extension();
            "{} <- {} ({} -> {} bytes)",
            bundle.output,
            plural_count(output.included.len(), "file"),
            output.raw.len(),
            output.minified.len()
        );
        outputs.push(output);
    }

    status_success(&format!("built {}", plural_count(outputs.len(), "bundle")));
    Ok(outputs)
}

fn copy_fonts(config: &BuildConfig) -> Result<usize> {
    let count = copy_static_dir(&config.build.fonts, &config.build.fonts_output())
        .context("Failed to copy fonts")?;
    status_success(&format!("copied {}", plural_count(count, "font file")));
    Ok(count)
}

/// Format count with noun, handling pluralization.
fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}
