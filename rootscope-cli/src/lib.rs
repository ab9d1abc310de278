//! Library exports for rootscope-cli.
//!
//! The binary is a thin layer over these modules; exposing them lets the
//! argument definitions be inspected (completions, man pages) outside
//! `main`.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
pub use error::CliError;
