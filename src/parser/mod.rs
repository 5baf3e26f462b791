//! Parser layer
//! - traits.rs: Parser trait definition
//! - types.rs: Common types (ManifestKind, BuildSetting)
//! - project_file.rs: build-setting lines of project files
//! - pod_manifest.rs: pod manifest JSON documents
//! - package_manifest.rs: library declarations of the package manifest

pub mod package_manifest;
pub mod pod_manifest;
pub mod project_file;
pub mod traits;
pub mod types;

pub use package_manifest::PackageManifestParser;
pub use pod_manifest::{PodManifest, PodManifestParser};
pub use project_file::ProjectFileParser;
pub use traits::{ParseError, Parser};
pub use types::{BuildSetting, ManifestKind};
