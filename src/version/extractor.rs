//! Version extraction from the manifests of a repository

#[cfg(test)]
use mockall::automock;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::{Config, PodNaming};
use crate::parser::{
    ManifestKind, PackageManifestParser, Parser, PodManifestParser, ProjectFileParser,
};
use crate::version::error::VersionError;
use crate::version::types::VersionRecord;

/// Trait for reading module versions out of the three manifest kinds
#[cfg_attr(test, automock)]
pub trait VersionSource {
    /// Versions declared by project build settings
    fn project_versions(&self) -> Result<VersionRecord, VersionError>;

    /// Versions declared by pod manifests
    fn pod_versions(&self) -> Result<VersionRecord, VersionError>;

    /// Modules listed by the package manifest, in declaration order
    fn package_modules(&self) -> Result<Vec<String>, VersionError>;
}

/// Scans a repository on disk
pub struct Extractor<'a> {
    root: &'a Path,
    config: &'a Config,
    project_parser: ProjectFileParser,
    pod_parser: PodManifestParser,
    package_parser: PackageManifestParser,
}

impl<'a> Extractor<'a> {
    pub fn new(root: &'a Path, config: &'a Config) -> Self {
        Self {
            root,
            config,
            project_parser: ProjectFileParser::new(&config.build_setting_key),
            pod_parser: PodManifestParser::new(),
            package_parser: PackageManifestParser::new(),
        }
    }

    fn pod_module_name(&self, path: &Path) -> Option<String> {
        match self.config.layout.pod_naming {
            PodNaming::FileStem => module_from_file_name(path),
            PodNaming::Directory => module_from_parent(path),
        }
    }
}

impl VersionSource for Extractor<'_> {
    fn project_versions(&self) -> Result<VersionRecord, VersionError> {
        let mut record = VersionRecord::new(ManifestKind::ProjectFile);

        for path in glob_files(self.root, &self.config.layout.project_files)? {
            let Some(module) = module_from_parent_stem(&path) else {
                continue;
            };
            debug!("Reading project file for {}: {:?}", module, path);

            let content = read(&path)?;
            let settings = self
                .project_parser
                .parse(&content)
                .map_err(|source| VersionError::Malformed {
                    path: path.clone(),
                    source,
                })?;
            for setting in settings {
                record.insert(&module, &setting.version, &path)?;
            }
        }

        Ok(record)
    }

    fn pod_versions(&self) -> Result<VersionRecord, VersionError> {
        let mut record = VersionRecord::new(ManifestKind::PodManifest);

        for path in glob_files(self.root, &self.config.layout.pod_manifests)? {
            let Some(module) = self.pod_module_name(&path) else {
                continue;
            };
            debug!("Reading pod manifest for {}: {:?}", module, path);

            let content = read(&path)?;
            let manifest =
                self.pod_parser
                    .parse(&content)
                    .map_err(|source| VersionError::Malformed {
                        path: path.clone(),
                        source,
                    })?;
            record.insert(&module, manifest.version(), &path)?;
        }

        Ok(record)
    }

    fn package_modules(&self) -> Result<Vec<String>, VersionError> {
        let path = self.root.join(&self.config.layout.package_manifest);
        if !path.is_file() {
            return Err(VersionError::MissingRequiredFile(path));
        }

        let content = read(&path)?;
        self.package_parser
            .parse(&content)
            .map_err(|source| VersionError::Malformed { path, source })
    }
}

/// Files under `root` matching `pattern`, in glob order.
///
/// A pattern matching nothing yields an empty list.
pub(crate) fn glob_files(root: &Path, pattern: &str) -> Result<Vec<PathBuf>, VersionError> {
    let full = format!(
        "{}/{}",
        glob::Pattern::escape(&root.to_string_lossy()),
        pattern
    );
    let entries = glob::glob(&full).map_err(|source| VersionError::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            VersionError::io(path, e.into_error())
        })?;
        if path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}

pub(crate) fn read(path: &Path) -> Result<String, VersionError> {
    std::fs::read_to_string(path).map_err(|e| VersionError::io(path, e))
}

/// `sdk/core/AzureCore/AzureCore.xcodeproj/project.pbxproj` -> `AzureCore`
fn module_from_parent_stem(path: &Path) -> Option<String> {
    path.parent()?
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
}

/// `AzureCore.podspec.json` -> `AzureCore`
fn module_from_file_name(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_string_lossy();
    name.split('.')
        .next()
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
}

/// `sdk/core/AzureCore/AzureCore.podspec.json` -> `AzureCore`
fn module_from_parent(path: &Path) -> Option<String> {
    path.parent()?
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
}
