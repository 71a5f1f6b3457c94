//! Asset kinds and text minification.

mod kind;
pub mod minify;

pub use kind::AssetKind;
