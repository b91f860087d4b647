// Selection state over the linear document coordinate space.
// Supplied by the embedding editor shell; the indentation walk only ever
// reads it.

use crate::document::Document;

/// A selection over the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Contiguous range between two positions; `anchor` may lie after
    /// `head` when the user selected backwards.
    Range { anchor: usize, head: usize },
    /// The whole document
    All,
    /// A single node selected as an object, addressed by its position.
    /// Not an indentation target.
    Node(usize),
}

impl Selection {
    /// Collapsed range at a single position
    pub fn caret(pos: usize) -> Self {
        Selection::Range {
            anchor: pos,
            head: pos,
        }
    }

    pub fn range(anchor: usize, head: usize) -> Self {
        Selection::Range { anchor, head }
    }

    /// Resolve to ordered `(from, to)` bounds, clamped to the document
    pub fn bounds(&self, doc: &Document) -> (usize, usize) {
        let size = doc.content_size();
        match *self {
            Selection::Range { anchor, head } => {
                let from = anchor.min(head).min(size);
                let to = anchor.max(head).min(size);
                (from, to)
            }
            Selection::All => (0, size),
            Selection::Node(pos) => {
                let pos = pos.min(size);
                let end = doc.node_at(pos).map(|n| pos + n.size()).unwrap_or(pos);
                (pos, end.min(size))
            }
        }
    }

    pub fn is_empty(&self, doc: &Document) -> bool {
        let (from, to) = self.bounds(doc);
        from == to
    }
}
