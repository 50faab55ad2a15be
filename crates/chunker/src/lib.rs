//! # py-chunker
//!
//! AST-aware extraction of Python class and function chunks for semantic
//! search and retrieval pipelines.
//!
//! ## Philosophy
//!
//! The chunker turns one Python source file into self-contained code
//! fragments that:
//! - Preserve syntactic boundaries (classes, functions, methods)
//! - Carry the file-level imports that are textually relevant to each chunk
//! - Record location and nesting metadata for downstream indexing
//!
//! ## Architecture
//!
//! ```text
//! Source Code
//!     │
//!     ├──> Tree-sitter Parsing → AST
//!     │
//!     ├──> Import Extraction
//!     │    └─> All import statements, deduplicated, in file order
//!     │
//!     └──> Chunk Extraction (pre-order traversal)
//!          ├─> One chunk per class/function definition
//!          ├─> Relevant-import preamble per chunk (substring heuristic)
//!          └─> Emit ParseResult { chunks, file_imports }
//! ```
//!
//! Import relevance is a deliberately coarse textual heuristic, not scope
//! resolution; see [`ChunkMetadata`] and the module docs on `imports`.
//!
//! ## Example
//!
//! ```rust
//! use py_chunker::Chunker;
//!
//! let mut chunker = Chunker::with_defaults().unwrap();
//! let result = chunker
//!     .parse("import os\n\ndef where(p):\n    return os.path.abspath(p)\n")
//!     .unwrap();
//!
//! assert_eq!(result.file_imports, vec!["import os".to_string()]);
//! assert_eq!(result.chunks.len(), 1);
//! assert_eq!(result.chunks[0].metadata.name, "where");
//! assert!(result.chunks[0].text.starts_with("import os"));
//! ```

mod chunker;
mod config;
mod error;
mod extractor;
mod grammar;
mod imports;
mod types;

pub use chunker::Chunker;
pub use config::ChunkerConfig;
pub use error::{ChunkerError, Result};
pub use types::{ChunkKind, ChunkMetadata, CodeChunk, ParseResult};
