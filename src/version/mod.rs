//! Version management layer for module manifests
//!
//! This module extracts module versions from the manifests of a repository,
//! checks them for consistency and rewrites them in place.
//!
//! # Architecture
//!
//! ```text
//!                     ┌─────────────┐     ┌─────────────┐
//!                ┌───▶│   Checker   │     │   Parsers   │
//! ┌───────────┐  │    │  (verify)   │     │ (line/JSON) │
//! │ Extractor │──┤    └─────────────┘     └─────────────┘
//! │  (scan)   │  │    ┌─────────────┐            ▲
//! └───────────┘  └───▶│   Updater   │────────────┘
//!                     │  (rewrite)  │
//!                     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`extractor`]: `VersionSource` trait and the filesystem scanner
//! - [`checker`]: consistency verification and current-version lookup
//! - [`updater`]: in-place version rewriting
//! - [`error`]: error taxonomy shared by all stages
//! - [`types`]: `VersionRecord` and verification findings

pub mod checker;
pub mod error;
pub mod extractor;
pub mod types;
pub mod updater;

pub use checker::{Report, current_version, verify};
pub use error::VersionError;
pub use extractor::{Extractor, VersionSource};
pub use types::{ALL_MODULES, Finding, FindingKind, Severity, VersionRecord};
pub use updater::{UpdateRequest, UpdateSummary, Updater};
