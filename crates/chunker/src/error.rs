use thiserror::Error;

/// Result type for chunker operations
pub type Result<T> = std::result::Result<T, ChunkerError>;

/// Errors that can occur during chunk extraction
#[derive(Error, Debug)]
pub enum ChunkerError {
    /// The parser produced no tree for the given source
    #[error("Parse error: {0}")]
    Parse(String),

    /// Tree-sitter grammar error
    #[error("Tree-sitter error: {0}")]
    TreeSitter(String),

    /// A node's byte range did not decode as UTF-8
    #[error("Invalid UTF-8 in node text: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ChunkerError {
    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a tree-sitter error
    pub fn tree_sitter(msg: impl Into<String>) -> Self {
        Self::TreeSitter(msg.into())
    }
}
