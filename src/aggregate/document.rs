// src/aggregate/document.rs
// =============================================================================
// The aggregated document: fetched files, in selection order, plus the
// warnings for files that were skipped.
// =============================================================================

use serde::Serialize;

/// One successfully fetched file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileBlock {
    pub path: String,
    pub content: String,
}

/// A file that was selected but could not be included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub path: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedDocument {
    blocks: Vec<FileBlock>,
    warnings: Vec<Warning>,
}

impl AggregatedDocument {
    pub(crate) fn push_block(&mut self, path: String, content: String) {
        self.blocks.push(FileBlock { path, content });
    }

    pub(crate) fn push_warning(&mut self, path: String, reason: String) {
        self.warnings.push(Warning { path, reason });
    }

    pub fn blocks(&self) -> &[FileBlock] {
        &self.blocks
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// True when no file made it into the document.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Plain-text rendering.
    ///
    /// Each file becomes "### File: {path}\n\n{content}\n\n", and blocks are
    /// joined with one extra newline. An empty document is "".
    pub fn to_plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(|block| format!("### File: {}\n\n{}\n\n", block.path, block.content))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_layout() {
        let mut doc = AggregatedDocument::default();
        doc.push_block("a.md".to_string(), "alpha".to_string());
        doc.push_block("b.py".to_string(), "print(1)\n".to_string());
        assert_eq!(
            doc.to_plain_text(),
            "### File: a.md\n\nalpha\n\n\n### File: b.py\n\nprint(1)\n\n\n"
        );
    }

    #[test]
    fn test_empty_document_renders_empty() {
        let mut doc = AggregatedDocument::default();
        doc.push_warning("a.md".to_string(), "HTTP 404".to_string());
        assert!(doc.is_empty());
        assert_eq!(doc.to_plain_text(), "");
        assert_eq!(doc.warnings().len(), 1);
    }
}
