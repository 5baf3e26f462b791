use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::parser::project_file::DEFAULT_BUILD_SETTING_KEY;

/// Configuration file looked up at the repository root
pub const CONFIG_FILE_NAME: &str = ".sdk-version.json";

/// Placeholder substituted with the module name in per-module file templates
pub const MODULE_PLACEHOLDER: &str = "{module}";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration in {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub policy: VersionPolicy,
    /// Build setting carrying the module version in project files
    pub build_setting_key: String,
    /// Scope source tag rewrites as `<name>_<version>`
    pub scoped_tags: bool,
    pub layout: LayoutConfig,
    pub aux_files: AuxFilesConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            policy: VersionPolicy::default(),
            build_setting_key: DEFAULT_BUILD_SETTING_KEY.to_string(),
            scoped_tags: true,
            layout: LayoutConfig::default(),
            aux_files: AuxFilesConfig::default(),
        }
    }
}

impl Config {
    /// Load `<root>/.sdk-version.json`, falling back to defaults when absent.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            return Ok(Self::default());
        }
        Self::from_file(&path)
    }

    /// Load an explicit configuration file, which must exist.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// How versions relate across modules
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum VersionPolicy {
    /// Every module carries its own version
    #[default]
    PerModule,
    /// The whole repository shares one version
    Uniform,
}

/// How a pod manifest's module name is derived
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PodNaming {
    /// File name up to its first `.`
    #[default]
    FileStem,
    /// Name of the directory containing the manifest
    Directory,
}

/// Where manifests live, relative to the repository root
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub project_files: String,
    pub pod_manifests: String,
    pub pod_naming: PodNaming,
    pub package_manifest: PathBuf,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            project_files: "sdk/*/*/*.xcodeproj/project.pbxproj".to_string(),
            pod_manifests: "sdk/**/*.podspec.json".to_string(),
            pod_naming: PodNaming::default(),
            package_manifest: PathBuf::from("Package.swift"),
        }
    }
}

/// Documentation files that mention versions in free text
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AuxFilesConfig {
    /// Templates containing `{module}`, expanded for each updated module
    pub per_module: Vec<String>,
    /// Files only updated when every module is bumped
    pub repository: Vec<String>,
}

impl Default for AuxFilesConfig {
    fn default() -> Self {
        Self {
            per_module: vec![
                "jazzy/{module}.yml".to_string(),
                "sdk/*/{module}/README.md".to_string(),
            ],
            repository: vec!["README.md".to_string(), "eng/ignore-links.txt".to_string()],
        }
    }
}

impl AuxFilesConfig {
    /// Expand the per-module templates for one module
    pub fn for_module(&self, module: &str) -> Vec<String> {
        self.per_module
            .iter()
            .map(|template| template.replace(MODULE_PLACEHOLDER, module))
            .collect()
    }
}
