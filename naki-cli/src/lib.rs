//! Library target for the `naki` package.
//!
//! The primary deliverable of this package is the `naki` CLI binary
//! (`src/main.rs`). The modules are exposed so the binary and the
//! integration tests share one implementation.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
