//! Package manifest parser
//!
//! Extracts the libraries a package manifest exposes, in declaration order:
//!
//! ```text
//! .library(name: "AzureCore", targets: ["AzureCore"]),
//! .library(
//!     name: "AzureCommunicationChat",
//!     targets: ["AzureCommunicationChat"]
//! ),
//! ```

use regex::Regex;

use crate::parser::traits::{ParseError, Parser};

/// Parser for package manifests
pub struct PackageManifestParser {
    /// Regex for library declarations: `library(name: "Module"`
    library_re: Regex,
}

impl PackageManifestParser {
    pub fn new() -> Self {
        Self {
            library_re: Regex::new(r#"library\(\s*name:\s*"([A-Za-z0-9_]+)""#).unwrap(),
        }
    }
}

impl Default for PackageManifestParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for PackageManifestParser {
    type Output = Vec<String>;

    fn parse(&self, content: &str) -> Result<Vec<String>, ParseError> {
        Ok(self
            .library_re
            .captures_iter(content)
            .map(|caps| caps[1].to_string())
            .collect())
    }
}
