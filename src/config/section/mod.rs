//! Configuration section definitions.
//!
//! | Section      | Purpose                                         |
//! |--------------|-------------------------------------------------|
//! | `[package]`  | Published package name/version (docs, CDN URLs) |
//! | `[build]`    | Output, fonts, generated file names             |
//! | `[report]`   | Extra files listed in the size report           |
//! | `[[bundle]]` | Bundle manifests                                |

mod build;
mod bundle;
mod package;
mod report;

pub use build::BuildSectionConfig;
pub use bundle::{BundleConfig, default_bundles};
pub(crate) use bundle::validate_bundles;
pub use package::PackageConfig;
pub use report::ReportConfig;

use std::path::{Component, Path};

use super::ConfigDiagnostics;

/// Check a project-relative path for unsafe components (`..` or absolute).
pub(crate) fn validate_relative_path(path: &Path, field: &str, diag: &mut ConfigDiagnostics) {
    for comp in path.components() {
        let reason = match comp {
            Component::ParentDir => "parent directory '..' not allowed",
            Component::Prefix(_) | Component::RootDir => "absolute paths not allowed",
            _ => continue,
        };
        diag.error(field, format!("path '{}': {reason}", path.display()));
        return;
    }
}

/// Check that `name` is a bare file name (no directory part).
pub(crate) fn validate_file_name(name: &str, field: &str, diag: &mut ConfigDiagnostics) {
    let path = Path::new(name);
    let is_bare = path.file_name().is_some_and(|f| f == path.as_os_str());
    if name.is_empty() || !is_bare {
        diag.error_with_hint(
            field,
            format!("'{name}' is not a plain file name"),
            "output names are written directly inside the output directory",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_relative_path() {
        let mut diag = ConfigDiagnostics::new();
        validate_relative_path(Path::new("css/retro-ui.css"), "f", &mut diag);
        assert!(!diag.has_errors());

        validate_relative_path(Path::new("../outside.css"), "f", &mut diag);
        validate_relative_path(Path::new("/etc/passwd"), "f", &mut diag);
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_validate_file_name() {
        let mut diag = ConfigDiagnostics::new();
        validate_file_name("retro-ui.min.css", "f", &mut diag);
        assert!(!diag.has_errors());

        validate_file_name("nested/retro-ui.css", "f", &mut diag);
        validate_file_name("", "f", &mut diag);
        validate_file_name("..", "f", &mut diag);
        assert_eq!(diag.len(), 3);
    }
}
