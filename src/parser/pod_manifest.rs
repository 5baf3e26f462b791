//! Pod manifest parser
//!
//! Pod manifests are JSON documents describing one module:
//!
//! ```json
//! {
//!   "name": "AzureCommunicationChat",
//!   "version": "1.0.0",
//!   "source": { "git": "https://github.com/Azure/azure-sdk-for-ios.git", "tag": "AzureCommunicationChat_1.0.0" },
//!   "dependencies": { "AzureCore": ["~> 1.0.0"] }
//! }
//! ```
//!
//! Key order is preserved so that a rewritten manifest only differs in the
//! fields that were changed.

use serde_json::Value;

use crate::parser::traits::{ParseError, Parser};

/// Parser for pod manifest JSON documents
pub struct PodManifestParser;

impl PodManifestParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PodManifestParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for PodManifestParser {
    type Output = PodManifest;

    fn parse(&self, content: &str) -> Result<PodManifest, ParseError> {
        let document: Value = serde_json::from_str(content)?;
        let Some(fields) = document.as_object() else {
            return Err(ParseError::ParseFailed(
                "expected a JSON object at the top level".to_string(),
            ));
        };
        if !fields.get("version").is_some_and(Value::is_string) {
            return Err(ParseError::MissingField("version"));
        }
        Ok(PodManifest { document })
    }
}

/// A parsed pod manifest
///
/// Always a JSON object with a string `version` field.
#[derive(Debug, Clone, PartialEq)]
pub struct PodManifest {
    document: Value,
}

impl PodManifest {
    /// Declared pod name, if any
    pub fn name(&self) -> Option<&str> {
        self.document.get("name").and_then(Value::as_str)
    }

    /// Version exactly as written
    pub fn version(&self) -> &str {
        self.document
            .get("version")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn set_version(&mut self, new: &str) {
        self.document["version"] = Value::String(new.to_string());
    }

    /// Replace `old` with `new` inside the `source.http` and `source.tag` strings.
    pub fn rewrite_source(&mut self, old: &str, new: &str) {
        let Some(source) = self.document.get_mut("source").and_then(Value::as_object_mut) else {
            return;
        };
        for field in ["http", "tag"] {
            if let Some(Value::String(value)) = source.get_mut(field) {
                *value = value.replace(old, new);
            }
        }
    }

    /// Replace `old` with `new` in every constraint of the dependencies
    /// for which `is_module` holds.
    ///
    /// Constraints may be a list of strings or a single string.
    pub fn rewrite_dependencies<F>(&mut self, is_module: F, old: &str, new: &str)
    where
        F: Fn(&str) -> bool,
    {
        let Some(dependencies) = self
            .document
            .get_mut("dependencies")
            .and_then(Value::as_object_mut)
        else {
            return;
        };

        for (name, constraints) in dependencies.iter_mut() {
            if !is_module(name.as_str()) {
                continue;
            }
            match constraints {
                Value::String(constraint) => *constraint = constraint.replace(old, new),
                Value::Array(items) => {
                    for item in items.iter_mut() {
                        if let Value::String(constraint) = item {
                            *constraint = constraint.replace(old, new);
                        }
                    }
                }
                _ => {}
            }
        }
    }

    /// Serialize with two-space indentation; non-ASCII text is written as is.
    pub fn to_pretty_string(&self) -> String {
        format!("{:#}", self.document)
    }
}
