//! Generated documents written after the bundles.
//!
//! - **Docs**: CDN usage documentation (`CDN.md`)
//! - **Report**: file size report (`SIZE_REPORT.md`)
//!
//! Both derive their file lists from the bundle manifests rather than from
//! what the build produced, so absent artifacts still get a line.

pub mod docs;
pub mod report;

use crate::asset::AssetKind;
use crate::config::BuildConfig;

/// One output file of a bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub bundle: String,
    pub file_name: String,
    pub minified: bool,
}

/// Bundle artifacts grouped by kind, CSS first, in manifest order.
///
/// Kinds without bundles are omitted.
pub fn artifact_groups(config: &BuildConfig) -> Vec<(AssetKind, Vec<Artifact>)> {
    [AssetKind::Css, AssetKind::Js]
        .into_iter()
        .filter_map(|kind| {
            let artifacts: Vec<_> = config
                .bundles
                .iter()
                .filter(|b| b.kind() == Some(kind))
                .flat_map(|b| {
                    [
                        Artifact {
                            bundle: b.name.clone(),
                            file_name: b.output.clone(),
                            minified: false,
                        },
                        Artifact {
                            bundle: b.name.clone(),
                            file_name: b.minified_name(),
                            minified: true,
                        },
                    ]
                })
                .collect();
            (!artifacts.is_empty()).then_some((kind, artifacts))
        })
        .collect()
}
