//! Static directory mirroring (fonts and other binary assets).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use jwalk::WalkDir;

const IGNORED_FILES: &[&str] = &[".DS_Store", "Thumbs.db"];

/// Collect all files under `dir` recursively, sorted by path.
///
/// Hidden files are included. Any walk error is returned.
fn collect_all_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).sort(true).skip_hidden(false) {
        let entry = entry.with_context(|| format!("Failed to read {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_str().unwrap_or_default();
        if !IGNORED_FILES.contains(&name) {
            files.push(entry.path());
        }
    }

    Ok(files)
}

/// Copy every file from `src_dir` into `dest_dir`, preserving sub-paths.
///
/// `dest_dir` is created even if `src_dir` does not exist; a missing source
/// directory copies nothing. Existing destination files are overwritten.
///
/// Returns the number of files copied.
pub fn copy_static_dir(src_dir: &Path, dest_dir: &Path) -> Result<usize> {
    fs::create_dir_all(dest_dir)
        .with_context(|| format!("Failed to create {}", dest_dir.display()))?;

    if !src_dir.exists() {
        return Ok(0);
    }

    let mut count = 0;
    for src_path in collect_all_files(src_dir)? {
        let rel = src_path.strip_prefix(src_dir)?;
        let dest_path = dest_dir.join(rel);

        if let Some(parent) = dest_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(&src_path, &dest_path).with_context(|| {
            format!(
                "Failed to copy {} to {}",
                src_path.display(),
                dest_path.display()
            )
        })?;
        count += 1;
    }

    Ok(count)
}
