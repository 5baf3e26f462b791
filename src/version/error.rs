use std::path::PathBuf;

use thiserror::Error;

use crate::parser::{ManifestKind, ParseError};
use crate::version::types::Finding;

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("Found multiple versions for {module} in {kind}s: {found} and {existing}")]
    Conflict {
        kind: ManifestKind,
        module: String,
        existing: String,
        found: String,
    },

    #[error("Incompatible versions within {kind}s: {versions}")]
    NotUniform { kind: ManifestKind, versions: String },

    #[error("No {0}s found")]
    NoModules(ManifestKind),

    #[error("{}", join_findings(.0))]
    Inconsistent(Vec<Finding>),

    #[error("Required file not found: {}", .0.display())]
    MissingRequiredFile(PathBuf),

    #[error("Failed to parse {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern {pattern}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Invalid version '{0}': expected at least one '.' separator")]
    InvalidVersion(String),

    #[error("Module {0} not found")]
    UnknownModule(String),
}

impl VersionError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        VersionError::Io {
            path: path.into(),
            source,
        }
    }
}

fn join_findings(findings: &[Finding]) -> String {
    findings
        .iter()
        .map(|f| f.message.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
