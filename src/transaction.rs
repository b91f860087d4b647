// Transactions
// An ordered, mutable batch of changes scoped to one user action.
// Changes apply eagerly to the transaction's own document snapshot, so
// later steps in the same batch observe earlier ones; the editor swaps
// the snapshot in atomically on dispatch or discards it untouched.

use crate::document::{Attrs, Document, NodeKind};
use crate::selection::Selection;

/// A single recorded change within a transaction
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Replace the kind and attributes of the node at `pos`, keeping
    /// its inline content and marks
    SetNodeMarkup {
        pos: usize,
        kind: NodeKind,
        attrs: Attrs,
    },
    /// Insert text into the inline content of the node at `pos`
    InsertText {
        pos: usize,
        offset: usize,
        text: String,
    },
}

/// A batch of document changes awaiting dispatch
#[derive(Debug, Clone)]
pub struct Transaction {
    doc: Document,
    selection: Selection,
    steps: Vec<Step>,
}

impl Transaction {
    pub fn new(doc: Document, selection: Selection) -> Self {
        Transaction {
            doc,
            selection,
            steps: Vec::new(),
        }
    }

    /// The transaction's live document, with all steps so far applied
    pub fn doc(&self) -> &Document {
        &self.doc
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    /// Whether any step changed the document
    pub fn doc_changed(&self) -> bool {
        !self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Replace the kind and attributes of the node at `pos`.
    /// Inline content and marks stay untouched. Silently does nothing
    /// when no node starts at `pos`.
    pub fn set_node_markup(&mut self, pos: usize, kind: NodeKind, attrs: Attrs) {
        let Some(node) = self.doc.node_at_mut(pos) else {
            return;
        };
        node.kind = kind.clone();
        node.attrs = attrs;
        self.steps.push(Step::SetNodeMarkup { pos, kind, attrs });
    }

    /// Insert text into the node at `pos`, at a flattened offset within
    /// its inline content. Silently does nothing when the text is empty
    /// or no node starts at `pos`.
    pub fn insert_text(&mut self, pos: usize, offset: usize, text: &str) {
        if text.is_empty() {
            return;
        }
        let Some(node) = self.doc.node_at_mut(pos) else {
            return;
        };
        node.insert_plain_text(offset, text);
        self.steps.push(Step::InsertText {
            pos,
            offset,
            text: text.to_string(),
        });
    }

    /// Consume the transaction, yielding the updated document and
    /// selection
    pub(crate) fn into_parts(self) -> (Document, Selection) {
        (self.doc, self.selection)
    }
}
