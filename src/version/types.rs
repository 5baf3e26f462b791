//! Common types for version extraction and verification

use std::fmt;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::parser::ManifestKind;
use crate::version::error::VersionError;

/// Versions of every module found in one manifest kind
///
/// Modules keep the order in which they were discovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRecord {
    kind: ManifestKind,
    versions: IndexMap<String, String>,
    files: IndexMap<String, Vec<PathBuf>>,
}

impl VersionRecord {
    pub fn new(kind: ManifestKind) -> Self {
        Self {
            kind,
            versions: IndexMap::new(),
            files: IndexMap::new(),
        }
    }

    pub fn kind(&self) -> ManifestKind {
        self.kind
    }

    /// Record `version` for `module` as read from `path`.
    ///
    /// A module may be seen many times, but always with the same version.
    pub fn insert(
        &mut self,
        module: &str,
        version: &str,
        path: &Path,
    ) -> Result<(), VersionError> {
        if let Some(existing) = self.versions.get(module) {
            if existing != version {
                return Err(VersionError::Conflict {
                    kind: self.kind,
                    module: module.to_string(),
                    existing: existing.clone(),
                    found: version.to_string(),
                });
            }
        } else {
            self.versions
                .insert(module.to_string(), version.to_string());
        }

        let files = self.files.entry(module.to_string()).or_default();
        if !files.iter().any(|f| f == path) {
            files.push(path.to_path_buf());
        }
        Ok(())
    }

    pub fn get(&self, module: &str) -> Option<&str> {
        self.versions.get(module).map(String::as_str)
    }

    pub fn contains(&self, module: &str) -> bool {
        self.versions.contains_key(module)
    }

    pub fn modules(&self) -> impl Iterator<Item = &str> {
        self.versions.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.versions
            .iter()
            .map(|(module, version)| (module.as_str(), version.as_str()))
    }

    /// Files the module's version was read from
    pub fn files(&self, module: &str) -> &[PathBuf] {
        self.files.get(module).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Distinct versions in discovery order
    pub fn distinct_versions(&self) -> Vec<&str> {
        let mut distinct: Vec<&str> = Vec::new();
        for version in self.versions.values() {
            if !distinct.contains(&version.as_str()) {
                distinct.push(version.as_str());
            }
        }
        distinct
    }
}

impl fmt::Display for VersionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (module, version)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{module}: {version}")?;
        }
        f.write_str("}")
    }
}

/// Severity of a verification finding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Reduced distribution; never affects the exit status
    Warning,
    /// Contradiction; verification fails
    Error,
}

/// What a verification finding is about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindingKind {
    /// Pod manifest and project file disagree
    CrossKindMismatch,
    /// Pod manifest without a project file
    MissingProjectFile,
    /// Package manifest lists a module without a pod manifest
    MissingPodManifest,
    /// Pod manifest not listed in the package manifest
    NotInPackageManifest,
    /// Project file not released through any channel
    Unreleased,
}

/// Module name of findings about the repository as a whole
pub const ALL_MODULES: &str = "*";

/// A single verification result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub severity: Severity,
    pub kind: FindingKind,
    /// Affected module, or [`ALL_MODULES`]
    pub module: String,
    pub message: String,
}

impl Finding {
    pub fn error(kind: FindingKind, module: &str, message: String) -> Self {
        Self {
            severity: Severity::Error,
            kind,
            module: module.to_string(),
            message,
        }
    }

    pub fn warning(kind: FindingKind, module: &str, message: String) -> Self {
        Self {
            severity: Severity::Warning,
            kind,
            module: module.to_string(),
            message,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
