// Editor state and the indentation command surface.
// Owns the document, the selection, the indent policy, and the
// change-pending flag; commands build a transaction, dispatch it if it
// changed anything, and the document-update observer drives the
// node-change notification.

use crate::document::{Document, Node};
use crate::indent::update_indent_level;
use crate::keymap::{Action, KeyCombo, Keymap};
use crate::options::IndentOptions;
use crate::selection::Selection;
use crate::transaction::Transaction;

/// Payload delivered to the node-change handler: every node whose span
/// intersected the selection when the armed update landed.
#[derive(Debug, Clone)]
pub struct NodeChangeEvent {
    pub nodes: Vec<(Node, usize)>,
}

impl NodeChangeEvent {
    /// The anchor node, for consumers that only track a single block
    /// (e.g. a toolbar reflecting the current indent level)
    pub fn primary(&self) -> Option<&(Node, usize)> {
        self.nodes.first()
    }
}

/// Observer invoked after a keyboard-triggered indentation took effect
pub type NodeChangeHandler = Box<dyn FnMut(&NodeChangeEvent, &Editor)>;

/// The editor: document, selection, indent policy, key bindings
pub struct Editor {
    document: Document,
    selection: Selection,
    options: IndentOptions,
    keymap: Keymap,
    /// Armed when a keyboard indent/outdent changed the document,
    /// consumed by the next document update. Per editor instance, so
    /// editors in one process never leak notifications to each other.
    change_pending: bool,
    node_change_handler: Option<NodeChangeHandler>,
}

impl Editor {
    pub fn new() -> Self {
        Self::with_document(Document::new())
    }

    pub fn with_document(document: Document) -> Self {
        Self::with_options(document, IndentOptions::default())
    }

    pub fn with_options(document: Document, options: IndentOptions) -> Self {
        Editor {
            document,
            selection: Selection::caret(0),
            options,
            keymap: Keymap::default(),
            change_pending: false,
            node_change_handler: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    pub fn select_all(&mut self) {
        self.selection = Selection::All;
    }

    pub fn options(&self) -> &IndentOptions {
        &self.options
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn keymap_mut(&mut self) -> &mut Keymap {
        &mut self.keymap
    }

    /// Whether an indentation change is waiting for its notification
    pub fn is_change_pending(&self) -> bool {
        self.change_pending
    }

    /// Register the node-change observer, replacing any previous one
    pub fn set_node_change_handler(&mut self, handler: NodeChangeHandler) {
        self.node_change_handler = Some(handler);
    }

    pub fn clear_node_change_handler(&mut self) {
        self.node_change_handler = None;
    }

    /// Start a transaction against the current document and selection
    pub fn transaction(&self) -> Transaction {
        Transaction::new(self.document.clone(), self.selection)
    }

    /// Commit a transaction: swap in its document and selection, then
    /// run the document-update observer.
    pub fn dispatch(&mut self, tr: Transaction) {
        let (doc, selection) = tr.into_parts();
        let prev = std::mem::replace(&mut self.document, doc);
        self.selection = selection;
        self.doc_updated(&prev);
    }

    /// Indent the blocks under the selection by one step.
    /// Returns whether the document changed.
    pub fn indent(&mut self) -> bool {
        self.apply_indent(self.options.step)
    }

    /// Outdent the blocks under the selection by one step.
    /// Returns whether the document changed.
    pub fn outdent(&mut self) -> bool {
        self.apply_indent(-self.options.step)
    }

    fn apply_indent(&mut self, delta: i32) -> bool {
        let mut tr = self.transaction();
        // Guard against a transaction carrying a stale selection
        tr.set_selection(self.selection);
        update_indent_level(&mut tr, delta, &self.options);

        if !tr.doc_changed() {
            log::debug!("indent delta {delta}: nothing eligible changed");
            return false;
        }

        self.dispatch(tr);
        // Armed after the dispatch: the indent commit itself never
        // fires the notification, the next qualifying update does.
        self.change_pending = true;
        true
    }

    /// Route a key event through the binding table.
    /// Returns whether a bound action changed the document.
    pub fn handle_key(&mut self, combo: KeyCombo) -> bool {
        let Some(action) = self.keymap.lookup(combo) else {
            return false;
        };
        match action {
            Action::Indent => self.indent(),
            Action::Outdent => self.outdent(),
        }
    }

    /// Insert text into the block at `pos`, at a flattened offset
    /// within its inline content. Commits like any other edit but never
    /// arms the change-pending flag: only the keyboard indentation
    /// commands do that.
    pub fn insert_text(&mut self, pos: usize, offset: usize, text: &str) -> bool {
        let mut tr = self.transaction();
        tr.insert_text(pos, offset, text);
        if !tr.doc_changed() {
            return false;
        }
        self.dispatch(tr);
        true
    }

    /// Document-update observer: fires the node-change handler once per
    /// armed cycle, on the first update whose document actually differs.
    fn doc_updated(&mut self, prev: &Document) {
        if self.document == *prev || !self.change_pending {
            return;
        }
        self.change_pending = false;

        let (from, to) = self.selection.bounds(&self.document);
        let nodes = self.document.nodes_in_range(from, to);
        log::debug!(
            "indentation change confirmed, notifying observer of {} node(s)",
            nodes.len()
        );

        // Best effort: with no observer registered the cycle is simply
        // consumed, nothing is queued.
        let Some(mut handler) = self.node_change_handler.take() else {
            return;
        };
        let event = NodeChangeEvent { nodes };
        handler(&event, self);
        self.node_change_handler = Some(handler);
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}
