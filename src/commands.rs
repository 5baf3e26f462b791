//! Subcommand implementations
//!
//! Each command re-scans the repository at `root`; nothing is carried over
//! between invocations.

use std::path::Path;

use tracing::info;

use crate::config::Config;
use crate::output;
use crate::version::checker;
use crate::version::{Extractor, UpdateRequest, UpdateSummary, Updater, VersionError};

/// Confirmation printed when verification passes
pub const CONSISTENT_MESSAGE: &str =
    "Package manifest, pod manifests and project files are consistent.";

/// Check every manifest for consistency.
///
/// Warnings are printed whether or not verification passes.
pub fn verify(root: &Path, config: &Config) -> Result<(), VersionError> {
    let extractor = Extractor::new(root, config);
    let report = checker::verify(&extractor, config.policy)?;

    for finding in report.warnings() {
        output::warning(&finding.message);
    }
    report.into_result()?;

    output::success(CONSISTENT_MESSAGE);
    Ok(())
}

/// Print the version of `module`, or the repository version when `None`.
pub fn current(root: &Path, config: &Config, module: Option<&str>) -> Result<(), VersionError> {
    let extractor = Extractor::new(root, config);
    let version = checker::current_version(&extractor, module)?;
    output::plain(version);
    Ok(())
}

/// Rewrite `old` to `new` for `modules`, or for every module when empty.
pub fn update(
    root: &Path,
    config: &Config,
    old: &str,
    new: &str,
    modules: Vec<String>,
) -> Result<UpdateSummary, VersionError> {
    let request = UpdateRequest::new(old, new, modules)?;
    let summary = Updater::new(root, config).update(&request)?;

    for path in &summary.skipped {
        output::warning(format!("File {} not found. Skipping...", path.display()));
    }
    info!(
        "Updated {} file(s) from {} to {}",
        summary.updated.len(),
        old,
        new
    );
    Ok(summary)
}
