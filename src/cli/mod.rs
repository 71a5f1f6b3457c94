//! Command-line interface module.

mod args;
pub mod build;
pub mod minify;

pub use args::{Cli, Commands};
