//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::asset::AssetKind;

/// RetroUI asset builder
///
/// Without a subcommand, builds every bundle into the output directory.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: retroui.toml, searched upward from cwd)
    #[arg(short = 'C', long, default_value = "retroui.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Project root directory (disables the upward config search)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build all bundles, fonts, docs and the size report (default)
    #[command(visible_alias = "b")]
    Build,

    /// Print the minified content of a single file to stdout
    #[command(visible_alias = "m")]
    Minify {
        /// CSS or JS file to minify
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,

        /// Asset kind, inferred from the extension when omitted
        #[arg(short, long)]
        kind: Option<AssetKind>,
    },
}

impl Cli {
    pub const fn is_build(&self) -> bool {
        matches!(self.command, None | Some(Commands::Build))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_builds() {
        let cli = Cli::try_parse_from(["retroui-build"]).unwrap();
        assert!(cli.is_build());
        assert_eq!(cli.config, PathBuf::from("retroui.toml"));
        assert!(cli.root.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_build_overrides() {
        let cli =
            Cli::try_parse_from(["retroui-build", "-r", "site", "-o", "public", "build", "-v"])
                .unwrap();
        assert!(cli.is_build());
        assert_eq!(cli.root, Some(PathBuf::from("site")));
        assert_eq!(cli.output, Some(PathBuf::from("public")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_minify_subcommand() {
        let cli = Cli::try_parse_from(["retroui-build", "minify", "a.txt", "--kind", "css"]).unwrap();
        assert!(!cli.is_build());
        match cli.command {
            Some(Commands::Minify { file, kind }) => {
                assert_eq!(file, PathBuf::from("a.txt"));
                assert_eq!(kind, Some(AssetKind::Css));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
