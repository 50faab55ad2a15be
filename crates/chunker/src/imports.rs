//! File-level import extraction and chunk-to-import correlation.
//!
//! Correlation is a textual heuristic: an import line is considered relevant
//! to a chunk when any of its meaningful tokens occurs as a substring of the
//! chunk's text. That admits false positives (short module names inside other
//! words) and false negatives (aliased or attribute-style usage) — accepted
//! as a best-effort approximation, not scope resolution.

use std::collections::HashSet;

use streaming_iterator::StreamingIterator;
use tree_sitter::{Node, QueryCursor};

use crate::error::Result;
use crate::grammar;

/// Keywords skipped when tokenizing an import line for correlation.
const IMPORT_STOPWORDS: &[&str] = &[
    "import", "from", "as", "class", "def", "return", "if", "else", "elif", "try", "except",
    "with",
];

/// Collect every import statement in the file, verbatim.
///
/// Deduplicated by exact text, first occurrence wins, document order
/// preserved.
pub(crate) fn extract_file_imports(root: Node<'_>, source: &[u8]) -> Result<Vec<String>> {
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&grammar::IMPORT_QUERY, root, source);

    let mut imports = Vec::new();
    let mut seen = HashSet::new();

    while let Some(mat) = matches.next() {
        for capture in mat.captures {
            let text = capture.node.utf8_text(source)?;
            if !seen.contains(text) {
                seen.insert(text.to_string());
                imports.push(text.to_string());
            }
        }
    }

    Ok(imports)
}

/// Select the import lines textually relevant to a chunk, joined by newline.
///
/// Returns an empty string when nothing matches. Input order is preserved.
pub(crate) fn correlate_imports(chunk_text: &str, file_imports: &[String]) -> String {
    let relevant: Vec<&str> = file_imports
        .iter()
        .filter(|line| import_matches_chunk(line, chunk_text))
        .map(String::as_str)
        .collect();

    relevant.join("\n")
}

/// One import line matches when any non-keyword token, trimmed of `,` and
/// `.`, occurs anywhere in the chunk text. Tokens starting with `.` are
/// relative-import markers and never match.
fn import_matches_chunk(import_line: &str, chunk_text: &str) -> bool {
    import_line
        .split_whitespace()
        .filter(|token| !IMPORT_STOPWORDS.contains(token) && !token.starts_with('.'))
        .map(|token| token.trim_matches([',', '.']))
        .any(|token| chunk_text.contains(token))
}
