//! Recursive traversal engine: one chunk per class/function definition.

use tree_sitter::Node;

use crate::config::ChunkerConfig;
use crate::error::Result;
use crate::imports;
use crate::types::{ChunkKind, ChunkMetadata, CodeChunk};

/// Walk the tree depth-first and append a chunk for every definition found.
///
/// Pre-order: a class chunk is pushed before anything discovered in its body.
/// `enclosing_class` is the name of the nearest ancestor class, `None` at the
/// module level.
pub(crate) fn extract_chunks(
    node: Node<'_>,
    source: &[u8],
    file_imports: &[String],
    enclosing_class: Option<&str>,
    config: &ChunkerConfig,
    chunks: &mut Vec<CodeChunk>,
) -> Result<()> {
    match node.kind() {
        "class_definition" => {
            let chunk =
                definition_chunk(node, source, file_imports, enclosing_class, ChunkKind::Class, config)?;
            let class_name = chunk.metadata.name.clone();
            chunks.push(chunk);

            // Nested classes and methods hang off the class node's children;
            // non-definition children (name, body block, colon) just
            // propagate the recursion.
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                extract_chunks(child, source, file_imports, Some(&class_name), config, chunks)?;
            }
        }
        "function_definition" => {
            // Function bodies are atomic: definitions nested inside them do
            // not become separate chunks.
            let chunk = definition_chunk(
                node,
                source,
                file_imports,
                enclosing_class,
                ChunkKind::Function,
                config,
            )?;
            chunks.push(chunk);
        }
        _ => {
            // Includes ERROR nodes from tolerant parses: traversed through,
            // never chunked.
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                extract_chunks(child, source, file_imports, enclosing_class, config, chunks)?;
            }
        }
    }

    Ok(())
}

/// Materialize one chunk from a definition node.
fn definition_chunk(
    node: Node<'_>,
    source: &[u8],
    file_imports: &[String],
    enclosing_class: Option<&str>,
    kind: ChunkKind,
    config: &ChunkerConfig,
) -> Result<CodeChunk> {
    let raw = node.utf8_text(source)?;

    let text = if config.include_imports {
        let preamble = imports::correlate_imports(raw, file_imports);
        format!("{preamble}\n\n{raw}").trim().to_string()
    } else {
        raw.trim().to_string()
    };

    let name = match node.child_by_field_name("name") {
        Some(name_node) => name_node.utf8_text(source)?.to_string(),
        None => kind.unknown_name().to_string(),
    };

    let metadata = ChunkMetadata {
        kind,
        name,
        start_line: node.start_position().row + 1,
        end_line: node.end_position().row + 1,
        enclosing_class: if config.include_enclosing_class {
            enclosing_class.map(str::to_string)
        } else {
            None
        },
    };

    Ok(CodeChunk::new(text, metadata))
}
