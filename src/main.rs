//! RetroUI asset builder: bundles and minifies the component library's CSS and
//! JS, copies fonts, and generates CDN docs plus a size report.

mod asset;
mod cli;
mod config;
mod generator;
mod logger;
mod pipeline;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, build::build_assets, minify::run_minify};
use config::{BuildConfig, ConfigError};

fn main() {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    if let Err(e) = run(&cli) {
        report_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.is_build() {
        return build(cli);
    }
    if let Some(Commands::Minify { file, kind }) = &cli.command {
        run_minify(file, *kind)?;
    }
    Ok(())
}

fn build(cli: &Cli) -> Result<()> {
    let config = BuildConfig::load(cli)?;
    let summary = build_assets(&config)?;

    let saved: usize = summary.bundles.iter().map(|b| b.saved_bytes()).sum();
    log!(
        "build";
        "done: {} bundles, {} font files, minification saved {} bytes",
        summary.bundles.len(),
        summary.fonts_copied,
        saved
    );
    debug!("build"; "docs: {}", summary.docs.display());
    debug!("build"; "report: {}", summary.report.display());
    Ok(())
}

fn report_error(e: &anyhow::Error) {
    match e.downcast_ref::<ConfigError>() {
        // Diagnostics already render their own header and hints
        Some(ConfigError::Diagnostics(diag)) => {
            logger::status_error("invalid configuration", &diag.to_string())
        }
        _ => log!("error"; "build failed: {:#}", e),
    }
}
