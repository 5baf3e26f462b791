//! In-place version rewriting
//!
//! Every rewrite is a literal substring replacement scoped to the places a
//! version is expected: build-setting lines of project files, the version,
//! source and dependency fields of pod manifests, and whole auxiliary text
//! files. A coincidental match inside those places is replaced too.
//!
//! Files are rewritten one at a time; a failure part way through leaves the
//! files already processed updated.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use tracing::{debug, info};

use crate::config::Config;
use crate::parser::{Parser, PodManifestParser, ProjectFileParser};
use crate::version::error::VersionError;
use crate::version::extractor::{Extractor, VersionSource, glob_files, read};

/// Separator every version argument must contain
pub const VERSION_SEPARATOR: char = '.';

/// A requested version bump
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRequest {
    pub old: String,
    pub new: String,
    /// Modules to bump; empty means every module
    pub modules: Vec<String>,
}

impl UpdateRequest {
    pub fn new(
        old: impl Into<String>,
        new: impl Into<String>,
        modules: Vec<String>,
    ) -> Result<Self, VersionError> {
        let request = Self {
            old: old.into(),
            new: new.into(),
            modules,
        };
        validate_version(&request.old)?;
        validate_version(&request.new)?;
        Ok(request)
    }

    pub fn is_all_modules(&self) -> bool {
        self.modules.is_empty()
    }
}

/// Files touched by an update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateSummary {
    /// Files whose content changed
    pub updated: Vec<PathBuf>,
    /// Auxiliary files that did not exist
    pub skipped: Vec<PathBuf>,
}

pub struct Updater<'a> {
    root: &'a Path,
    config: &'a Config,
    extractor: Extractor<'a>,
    project_parser: ProjectFileParser,
    pod_parser: PodManifestParser,
}

impl<'a> Updater<'a> {
    pub fn new(root: &'a Path, config: &'a Config) -> Self {
        Self {
            root,
            config,
            extractor: Extractor::new(root, config),
            project_parser: ProjectFileParser::new(&config.build_setting_key),
            pod_parser: PodManifestParser::new(),
        }
    }

    pub fn update(&self, request: &UpdateRequest) -> Result<UpdateSummary, VersionError> {
        validate_version(&request.old)?;
        validate_version(&request.new)?;

        let project = self.extractor.project_versions()?;
        let pods = self.extractor.pod_versions()?;

        let modules: Vec<String> = if request.is_all_modules() {
            let mut all: IndexSet<&str> = project.modules().collect();
            all.extend(pods.modules());
            all.into_iter().map(str::to_string).collect()
        } else {
            if let Some(unknown) = request.modules.iter().find(|m| !project.contains(m)) {
                return Err(VersionError::UnknownModule(unknown.clone()));
            }
            request.modules.clone()
        };

        let mut summary = UpdateSummary::default();

        for module in &modules {
            for path in pods.files(module) {
                self.update_pod_manifest(path, module, &modules, request, &mut summary)?;
            }
            for path in project.files(module) {
                let content = read(path)?;
                let rewritten = self
                    .project_parser
                    .rewrite(&content, &request.old, &request.new);
                write_if_changed(path, &content, &rewritten, &mut summary)?;
            }
        }

        let mut aux_patterns: IndexSet<String> = modules
            .iter()
            .flat_map(|module| self.config.aux_files.for_module(module))
            .collect();
        if request.is_all_modules() {
            aux_patterns.extend(self.config.aux_files.repository.iter().cloned());
        }

        let mut aux_files: IndexSet<PathBuf> = IndexSet::new();
        for pattern in &aux_patterns {
            if is_glob(pattern) {
                let matches = glob_files(self.root, pattern)?;
                if matches.is_empty() {
                    summary.skipped.push(self.root.join(pattern));
                }
                aux_files.extend(matches);
            } else {
                let path = self.root.join(pattern);
                if path.is_file() {
                    aux_files.insert(path);
                } else {
                    summary.skipped.push(path);
                }
            }
        }

        for path in &aux_files {
            let content = read(path)?;
            let rewritten = content.replace(&request.old, &request.new);
            write_if_changed(path, &content, &rewritten, &mut summary)?;
        }

        Ok(summary)
    }

    fn update_pod_manifest(
        &self,
        path: &Path,
        module: &str,
        modules: &[String],
        request: &UpdateRequest,
        summary: &mut UpdateSummary,
    ) -> Result<(), VersionError> {
        let content = read(path)?;
        let mut manifest =
            self.pod_parser
                .parse(&content)
                .map_err(|source| VersionError::Malformed {
                    path: path.to_path_buf(),
                    source,
                })?;

        let name = manifest.name().unwrap_or(module).to_string();
        manifest.set_version(&request.new);
        if self.config.scoped_tags {
            manifest.rewrite_source(
                &format!("{name}_{}", request.old),
                &format!("{name}_{}", request.new),
            );
        } else {
            manifest.rewrite_source(&request.old, &request.new);
        }
        manifest.rewrite_dependencies(
            |dependency| modules.iter().any(|m| m == dependency),
            &request.old,
            &request.new,
        );

        write_if_changed(path, &content, &manifest.to_pretty_string(), summary)
    }
}

/// Versions must contain at least one separator, e.g. `1.0`.
pub fn validate_version(version: &str) -> Result<(), VersionError> {
    if version.contains(VERSION_SEPARATOR) {
        Ok(())
    } else {
        Err(VersionError::InvalidVersion(version.to_string()))
    }
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

fn write_if_changed(
    path: &Path,
    original: &str,
    rewritten: &str,
    summary: &mut UpdateSummary,
) -> Result<(), VersionError> {
    if original == rewritten {
        debug!("No changes for {:?}", path);
        return Ok(());
    }
    fs::write(path, rewritten).map_err(|e| VersionError::io(path, e))?;
    info!("Updated {:?}", path);
    summary.updated.push(path.to_path_buf());
    Ok(())
}
