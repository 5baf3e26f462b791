//! Project file parser
//!
//! Scans build-setting lines of a project file for a marketing version.
//! The value may or may not be quoted:
//!
//! ```text
//! MARKETING_VERSION = "1.0.0-beta.12";
//! MARKETING_VERSION = 1.0.0;
//! ```
//!
//! Only lines containing the build-setting key are considered; everything
//! else in the file is opaque.

use std::borrow::Cow;

use regex::Regex;

use crate::parser::traits::{ParseError, Parser};
use crate::parser::types::BuildSetting;

/// Default build-setting key carrying the module version
pub const DEFAULT_BUILD_SETTING_KEY: &str = "MARKETING_VERSION";

/// Parser for build-setting lines in project files
pub struct ProjectFileParser {
    key: String,
    /// Regex for quoted values: `KEY = "1.0.0";`
    quoted_re: Regex,
    /// Regex for bare values: `KEY = 1.0.0;`
    bare_re: Regex,
}

impl ProjectFileParser {
    pub fn new(key: &str) -> Self {
        let escaped = regex::escape(key);
        Self {
            key: key.to_string(),
            quoted_re: Regex::new(&format!(r#"{escaped}\s*=\s*"([^"]+)""#))
                .expect("escaped key forms a valid regex"),
            bare_re: Regex::new(&format!(r#"{escaped}\s*=\s*([^;"\s]+)\s*;"#))
                .expect("escaped key forms a valid regex"),
        }
    }

    /// Replace `old` with `new` on build-setting lines only.
    ///
    /// Every other line, including its line terminator, is passed through
    /// untouched. Replacement is a literal substring match.
    pub fn rewrite(&self, content: &str, old: &str, new: &str) -> String {
        content
            .split_inclusive('\n')
            .map(|line| {
                if line.contains(&self.key) {
                    Cow::Owned(line.replace(old, new))
                } else {
                    Cow::Borrowed(line)
                }
            })
            .collect()
    }
}

impl Default for ProjectFileParser {
    fn default() -> Self {
        Self::new(DEFAULT_BUILD_SETTING_KEY)
    }
}

impl Parser for ProjectFileParser {
    type Output = Vec<BuildSetting>;

    fn parse(&self, content: &str) -> Result<Vec<BuildSetting>, ParseError> {
        let mut results = Vec::new();

        for (line_num, line) in content.lines().enumerate() {
            if !line.contains(&self.key) {
                continue;
            }

            let caps = self
                .quoted_re
                .captures(line)
                .or_else(|| self.bare_re.captures(line))
                .ok_or_else(|| ParseError::InvalidSyntax {
                    line: line_num,
                    message: format!("no value found for {}", self.key),
                })?;

            results.push(BuildSetting {
                line: line_num,
                version: caps[1].to_string(),
            });
        }

        Ok(results)
    }
}
