use serde::{Deserialize, Serialize};

/// Kind of extracted definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkKind {
    /// Class definition (including nested classes)
    Class,
    /// Function definition (module-level function or method)
    Function,
}

impl ChunkKind {
    /// Get human-readable name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Function => "function",
        }
    }

    /// Sentinel used when the grammar exposes no `name` field for a definition
    #[must_use]
    pub const fn unknown_name(self) -> &'static str {
        match self {
            Self::Class => "UnknownClass",
            Self::Function => "UnknownFunction",
        }
    }
}

/// Metadata about an extracted chunk
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChunkMetadata {
    /// Whether this chunk is a class or a function
    pub kind: ChunkKind,

    /// Identifier of the definition, or a sentinel when unresolvable
    pub name: String,

    /// Start line (1-indexed)
    pub start_line: usize,

    /// End line (1-indexed, inclusive)
    pub end_line: usize,

    /// Name of the nearest ancestor class, if any
    pub enclosing_class: Option<String>,
}

/// A semantic code chunk: one class/function definition plus its
/// relevant-import preamble
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodeChunk {
    /// Import preamble (when any imports matched) followed by the
    /// definition's source text, trimmed
    pub text: String,

    /// Location and nesting metadata
    pub metadata: ChunkMetadata,
}

impl CodeChunk {
    /// Create a new code chunk
    #[must_use]
    pub const fn new(text: String, metadata: ChunkMetadata) -> Self {
        Self { text, metadata }
    }

    /// Get the number of source lines spanned by this chunk
    #[must_use]
    pub const fn line_count(&self) -> usize {
        self.metadata
            .end_line
            .saturating_sub(self.metadata.start_line)
            + 1
    }

    /// Check if the chunk's source range contains a specific line
    #[must_use]
    pub const fn contains_line(&self, line: usize) -> bool {
        line >= self.metadata.start_line && line <= self.metadata.end_line
    }
}

/// Result of parsing one source file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParseResult {
    /// Extracted chunks, in pre-order: a class precedes everything found in
    /// its body, siblings keep source order
    pub chunks: Vec<CodeChunk>,

    /// Every import statement in the file, verbatim, deduplicated in
    /// first-seen order
    pub file_imports: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(start: usize, end: usize) -> CodeChunk {
        CodeChunk::new(
            "def f():\n    pass".to_string(),
            ChunkMetadata {
                kind: ChunkKind::Function,
                name: "f".to_string(),
                start_line: start,
                end_line: end,
                enclosing_class: None,
            },
        )
    }

    #[test]
    fn test_chunk_line_count() {
        assert_eq!(chunk(10, 15).line_count(), 6);
        assert_eq!(chunk(3, 3).line_count(), 1);
    }

    #[test]
    fn test_chunk_contains_line() {
        let c = chunk(10, 15);
        assert!(c.contains_line(10));
        assert!(c.contains_line(12));
        assert!(c.contains_line(15));
        assert!(!c.contains_line(9));
        assert!(!c.contains_line(16));
    }

    #[test]
    fn test_kind_strings() {
        assert_eq!(ChunkKind::Class.as_str(), "class");
        assert_eq!(ChunkKind::Function.as_str(), "function");
        assert_eq!(ChunkKind::Class.unknown_name(), "UnknownClass");
        assert_eq!(ChunkKind::Function.unknown_name(), "UnknownFunction");
    }

    #[test]
    fn test_metadata_serialization() {
        let c = chunk(1, 2);
        let json = serde_json::to_string(&c.metadata).unwrap();
        assert!(json.contains(r#""kind":"function""#));
        assert!(json.contains(r#""enclosing_class":null"#));

        let back: ChunkMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c.metadata);
    }
}
