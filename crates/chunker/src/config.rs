use serde::{Deserialize, Serialize};

/// Configuration for chunk extraction
///
/// The defaults reproduce the full behavior: import preambles attached and
/// enclosing-class names recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkerConfig {
    /// Prepend the correlated file imports to each chunk's text
    pub include_imports: bool,

    /// Record the nearest enclosing class name in chunk metadata
    pub include_enclosing_class: bool,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            include_imports: true,
            include_enclosing_class: true,
        }
    }
}
