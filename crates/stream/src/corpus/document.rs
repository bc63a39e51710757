//! Per-stream document cursor.

use super::line::DocumentHeader;

/// Tracks the open document and how many content lines it has produced.
#[derive(Debug, Default)]
pub struct DocumentState {
    current: Option<DocumentHeader>,
    label: Option<String>,
    line_index: usize,
    documents: usize,
}

impl DocumentState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new document and reset the line counter.
    pub fn begin(&mut self, header: DocumentHeader, label: String) {
        self.current = Some(header);
        self.label = Some(label);
        self.line_index = 0;
        self.documents += 1;
    }

    /// Tags for the next content line, then advance the line counter.
    ///
    /// The label is attached only while the counter is below `window`.
    pub fn next_tags(&mut self, window: usize) -> Vec<String> {
        let tags = match &self.label {
            Some(label) if self.line_index < window => vec![label.clone()],
            _ => Vec::new(),
        };
        self.line_index += 1;
        tags
    }

    pub fn current(&self) -> Option<&DocumentHeader> {
        self.current.as_ref()
    }

    pub fn current_label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Content lines seen since the last document marker.
    pub fn line_index(&self) -> usize {
        self.line_index
    }

    /// Number of document markers seen.
    pub fn documents(&self) -> usize {
        self.documents
    }
}
