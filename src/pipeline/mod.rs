//! Asset pipeline stages.
//!
//! - [`bundle`]: read a manifest, concatenate raw and minified content, write both
//! - [`copy`]: mirror a static directory (fonts) into the output

pub mod bundle;
pub mod copy;

pub use bundle::{BundleOutput, build_bundle};
pub use copy::copy_static_dir;
