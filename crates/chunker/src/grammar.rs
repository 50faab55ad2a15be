use once_cell::sync::Lazy;
use tree_sitter::{Language, Parser, Query};

use crate::error::{ChunkerError, Result};

/// Both Python import forms, unified under a single capture.
const IMPORT_QUERY_SOURCE: &str = r"
(import_statement) @import
(import_from_statement) @import
";

/// Process-wide Python grammar, loaded once and never mutated.
pub(crate) static PYTHON: Lazy<Language> =
    Lazy::new(|| tree_sitter_python::LANGUAGE.into());

/// Compiled import query, shared across calls and threads.
///
/// The pattern is a compile-time constant, so failure here is a programming
/// error rather than an input error.
pub(crate) static IMPORT_QUERY: Lazy<Query> = Lazy::new(|| {
    Query::new(&PYTHON, IMPORT_QUERY_SOURCE)
        .expect("import query must compile against the Python grammar")
});

/// Create a parser bound to the shared Python grammar.
pub(crate) fn parser() -> Result<Parser> {
    let mut parser = Parser::new();
    parser
        .set_language(&PYTHON)
        .map_err(|e| ChunkerError::tree_sitter(format!("Failed to set language: {e}")))?;
    Ok(parser)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_construction() {
        assert!(parser().is_ok());
    }

    #[test]
    fn test_import_query_compiles() {
        let query = Lazy::force(&IMPORT_QUERY);
        assert_eq!(query.pattern_count(), 2);
    }
}
