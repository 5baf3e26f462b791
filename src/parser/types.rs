//! Common types for parsers

use std::fmt;

/// Kind of manifest a version was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManifestKind {
    /// Build-tool project file (`*.xcodeproj/project.pbxproj`)
    ProjectFile,
    /// JSON pod manifest (`*.podspec.json`)
    PodManifest,
    /// Package manifest listing distributed libraries (`Package.swift`)
    PackageManifest,
}

impl ManifestKind {
    /// Returns the human readable name of the manifest kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ManifestKind::ProjectFile => "project file",
            ManifestKind::PodManifest => "pod manifest",
            ManifestKind::PackageManifest => "package manifest",
        }
    }
}

impl fmt::Display for ManifestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A build setting line carrying a version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSetting {
    /// Line number (0-indexed)
    pub line: usize,
    /// Version exactly as written, without surrounding quotes
    pub version: String,
}
