use std::path::Path;

use tree_sitter::Parser;

use crate::config::ChunkerConfig;
use crate::error::{ChunkerError, Result};
use crate::extractor;
use crate::grammar;
use crate::imports;
use crate::types::ParseResult;

/// Main chunker interface: parses Python source and extracts definition
/// chunks with their relevant-import preambles.
///
/// Holds a reusable tree-sitter parser bound to the shared grammar. Each
/// parse call is independent; for parallel work, give each worker its own
/// `Chunker`.
pub struct Chunker {
    config: ChunkerConfig,
    parser: Parser,
}

impl Chunker {
    /// Create a new chunker with configuration
    pub fn new(config: ChunkerConfig) -> Result<Self> {
        Ok(Self {
            config,
            parser: grammar::parser()?,
        })
    }

    /// Create a chunker with the default configuration
    pub fn with_defaults() -> Result<Self> {
        Self::new(ChunkerConfig::default())
    }

    /// Parse source text and extract chunks
    ///
    /// Empty source is a valid parse: it yields an empty result.
    pub fn parse(&mut self, source: &str) -> Result<ParseResult> {
        self.parse_bytes(source.as_bytes())
    }

    /// Parse raw source bytes
    ///
    /// A definition or import whose byte range is not valid UTF-8 aborts the
    /// whole call with [`ChunkerError::Encoding`]; no partial result is
    /// returned.
    pub fn parse_bytes(&mut self, source: &[u8]) -> Result<ParseResult> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| ChunkerError::parse("Failed to parse Python source"))?;
        let root = tree.root_node();

        let file_imports = imports::extract_file_imports(root, source)?;

        let mut chunks = Vec::new();
        extractor::extract_chunks(root, source, &file_imports, None, &self.config, &mut chunks)?;

        log::debug!(
            "extracted {} chunks and {} file imports",
            chunks.len(),
            file_imports.len()
        );

        Ok(ParseResult {
            chunks,
            file_imports,
        })
    }

    /// Parse a file from disk
    pub fn parse_file(&mut self, path: impl AsRef<Path>) -> Result<ParseResult> {
        let source = std::fs::read(path)?;
        self.parse_bytes(&source)
    }

    /// Get configuration
    #[must_use]
    pub const fn config(&self) -> &ChunkerConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChunkKind;

    const PY_CODE: &str = "\
import os

class Store:
    def get(self, key):
        return os.environ.get(key)

def free():
    return 1
";

    #[test]
    fn test_parse_basic() {
        let mut chunker = Chunker::with_defaults().unwrap();
        let result = chunker.parse(PY_CODE).unwrap();

        assert_eq!(result.file_imports, vec!["import os".to_string()]);
        assert_eq!(result.chunks.len(), 3);
        assert_eq!(result.chunks[0].metadata.kind, ChunkKind::Class);
        assert_eq!(result.chunks[1].metadata.name, "get");
        assert_eq!(result.chunks[2].metadata.name, "free");
    }

    #[test]
    fn test_parse_empty_source() {
        let mut chunker = Chunker::with_defaults().unwrap();
        let result = chunker.parse("").unwrap();
        assert!(result.chunks.is_empty());
        assert!(result.file_imports.is_empty());
    }

    #[test]
    fn test_parse_bytes_rejects_invalid_utf8() {
        let mut chunker = Chunker::with_defaults().unwrap();
        // Invalid continuation byte inside a function body.
        let source = b"def f():\n    return \"\xff\xfe\"\n";
        let result = chunker.parse_bytes(source);
        assert!(matches!(result, Err(ChunkerError::Encoding(_))));
    }

    #[test]
    fn test_parse_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{PY_CODE}").unwrap();

        let mut chunker = Chunker::with_defaults().unwrap();
        let result = chunker.parse_file(file.path()).unwrap();
        assert_eq!(result.chunks.len(), 3);
    }

    #[test]
    fn test_parser_reuse_across_calls() {
        let mut chunker = Chunker::with_defaults().unwrap();
        let first = chunker.parse(PY_CODE).unwrap();
        let second = chunker.parse("def solo():\n    pass\n").unwrap();

        assert_eq!(first.chunks.len(), 3);
        assert_eq!(second.chunks.len(), 1);
        assert_eq!(second.chunks[0].metadata.name, "solo");
    }
}
