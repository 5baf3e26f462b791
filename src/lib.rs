//! Version consistency checks and version bumps for multi-module SDK monorepos.
//!
//! - [`parser`]: line and document parsers for each manifest kind
//! - [`version`]: extraction, verification and rewriting of module versions
//! - [`commands`]: the `verify`, `current` and `update` entry points
//! - [`config`]: repository layout and policy configuration
//! - [`output`]: styled terminal diagnostics

pub mod commands;
pub mod config;
pub mod output;
pub mod parser;
pub mod version;
