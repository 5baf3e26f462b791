//! Parser trait definition

/// Trait for parsing manifest contents without touching the filesystem
pub trait Parser {
    /// What a successful parse produces
    type Output;

    /// Parse the content and extract version information
    fn parse(&self, content: &str) -> Result<Self::Output, ParseError>;
}

/// Error type for parsing operations
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Failed to parse the file structure
    #[error("Failed to parse file: {0}")]
    ParseFailed(String),

    /// Invalid syntax in the file
    #[error("Invalid syntax at line {line}: {message}")]
    InvalidSyntax { line: usize, message: String },

    /// A required field is absent or has the wrong type
    #[error("Missing or invalid field: {0}")]
    MissingField(&'static str),
}

impl From<serde_json::Error> for ParseError {
    fn from(e: serde_json::Error) -> Self {
        ParseError::ParseFailed(e.to_string())
    }
}
