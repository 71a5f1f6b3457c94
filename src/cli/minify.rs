//! `minify` subcommand: minify a single file to stdout.

use std::fs;
use std::io::{Write, stdout};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::asset::AssetKind;

/// Minify `file` and print the result.
///
/// The asset kind comes from `--kind`, else from the file extension.
pub fn run_minify(file: &Path, kind: Option<AssetKind>) -> Result<()> {
    let minified = minify_file(file, kind)?;

    let mut stdout = stdout().lock();
    writeln!(stdout, "{minified}").context("Failed to write to stdout")?;
    Ok(())
}

fn minify_file(file: &Path, kind: Option<AssetKind>) -> Result<String> {
    let Some(kind) = kind.or_else(|| AssetKind::from_path(file)) else {
        bail!(
            "cannot infer asset kind of {}\nhint: use `--kind css` or `--kind js`",
            file.display()
        );
    };

    let content =
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;
    Ok(kind.minify(&content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_minify_by_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("button.css");
        fs::write(&path, "/* btn */\n.btn {\n  color: red;\n}\n").unwrap();

        assert_eq!(minify_file(&path, None).unwrap(), ".btn{color:red}");
    }

    #[test]
    fn test_kind_overrides_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("runtime.txt");
        fs::write(&path, "// init\nvar a = 1;\n").unwrap();

        assert_eq!(minify_file(&path, Some(AssetKind::Js)).unwrap(), "var a=1;");
    }

    #[test]
    fn test_unknown_kind_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "hello").unwrap();

        let err = minify_file(&path, None).unwrap_err();
        assert!(err.to_string().contains("--kind"));
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        assert!(minify_file(&dir.path().join("missing.js"), None).is_err());
    }
}
