//! Library exports for foldpath-cli.
//!
//! The binary drives these modules; exposing them as a library also lets
//! tests exercise argument parsing and rendering directly.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod utils;

pub use cli::Cli;
