// Indentation core
// Clamp policy, node eligibility, and the selection-scoped walk that
// applies one indent step per eligible block inside a transaction.

use crate::document::{Attrs, NodeClass, Traversal};
use crate::options::IndentOptions;
use crate::selection::Selection;
use crate::transaction::Transaction;

/// Clamp `value` into `[min, max]`. Total for any bounds ordering.
pub fn clamp(value: i32, min: i32, max: i32) -> i32 {
    if value < min {
        return min;
    }
    if value > max {
        return max;
    }
    value
}

/// Apply one indentation step to the node at `pos`.
///
/// Resolves the node against the transaction's live document, so
/// mutations applied earlier in the same walk stay visible. Missing
/// nodes and steps that clamp to the current value leave the
/// transaction unchanged.
pub(crate) fn set_node_indent_markup(
    tr: &mut Transaction,
    pos: usize,
    delta: i32,
    options: &IndentOptions,
) {
    let Some(node) = tr.doc().node_at(pos) else {
        return;
    };

    let current = node.attrs.indent;
    let indent = clamp(current + delta, options.min, options.max);
    if indent == current {
        return;
    }

    let kind = node.kind.clone();
    let attrs = Attrs {
        indent,
        ..node.attrs
    };
    tr.set_node_markup(pos, kind, attrs);
}

/// Walk the transaction's selection and move every eligible block by
/// `delta`.
///
/// Only range and whole-document selections are supported; anything
/// else leaves the transaction untouched. Eligible blocks stop the
/// walk at their own depth, list containers are skipped subtree and
/// all, and other containers are transparent.
pub(crate) fn update_indent_level(tr: &mut Transaction, delta: i32, options: &IndentOptions) {
    let selection = tr.selection();
    if !matches!(selection, Selection::Range { .. } | Selection::All) {
        return;
    }
    let (from, to) = selection.bounds(tr.doc());

    // Markup-only changes keep every node size intact, so positions
    // gathered up front stay valid while the mutations land.
    let mut targets: Vec<usize> = Vec::new();
    tr.doc().nodes_between(from, to, &mut |node, pos| {
        match node.kind.classify() {
            NodeClass::Indentable => {
                targets.push(pos);
                Traversal::SkipChildren
            }
            NodeClass::ListContainer => Traversal::SkipChildren,
            NodeClass::Container => Traversal::Descend,
        }
    });

    for pos in targets {
        set_node_indent_markup(tr, pos, delta, options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Document, Node};

    fn options() -> IndentOptions {
        IndentOptions::default()
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(-5, 0, 210), 0);
        assert_eq!(clamp(0, 0, 210), 0);
        assert_eq!(clamp(90, 0, 210), 90);
        assert_eq!(clamp(211, 0, 210), 210);
    }

    #[test]
    fn test_clamp_is_idempotent() {
        for v in [-300, -1, 0, 29, 30, 209, 210, 211, 10_000] {
            assert_eq!(clamp(clamp(v, 0, 210), 0, 210), clamp(v, 0, 210));
        }
    }

    #[test]
    fn test_indent_single_paragraph() {
        let doc = Document::from_nodes(vec![Node::paragraph().with_plain_text("hello")]);
        let mut tr = Transaction::new(doc, Selection::range(1, 3));
        update_indent_level(&mut tr, 30, &options());
        assert!(tr.doc_changed());
        assert_eq!(tr.doc().node_at(0).unwrap().attrs.indent, 30);
    }

    #[test]
    fn test_off_grid_value_steps_then_clamps() {
        // 7 + 30 = 37; no snapping to a multiple of the step
        let doc =
            Document::from_nodes(vec![Node::paragraph().with_plain_text("x").with_indent(7)]);
        let mut tr = Transaction::new(doc, Selection::All);
        update_indent_level(&mut tr, 30, &options());
        assert_eq!(tr.doc().node_at(0).unwrap().attrs.indent, 37);
    }

    #[test]
    fn test_outdent_at_floor_is_noop() {
        let doc = Document::from_nodes(vec![Node::paragraph().with_plain_text("x")]);
        let mut tr = Transaction::new(doc, Selection::All);
        update_indent_level(&mut tr, -30, &options());
        assert!(!tr.doc_changed());
        assert_eq!(tr.doc().node_at(0).unwrap().attrs.indent, 0);
    }

    #[test]
    fn test_indent_at_ceiling_is_noop() {
        let doc =
            Document::from_nodes(vec![Node::paragraph().with_plain_text("x").with_indent(210)]);
        let mut tr = Transaction::new(doc, Selection::All);
        update_indent_level(&mut tr, 30, &options());
        assert!(!tr.doc_changed());
    }

    #[test]
    fn test_heading_is_indentable() {
        let doc = Document::from_nodes(vec![Node::heading(2).with_plain_text("title")]);
        let mut tr = Transaction::new(doc, Selection::All);
        update_indent_level(&mut tr, 30, &options());
        assert_eq!(tr.doc().node_at(0).unwrap().attrs.indent, 30);
    }

    #[test]
    fn test_list_subtree_is_skipped() {
        let doc = Document::from_nodes(vec![Node::bullet_list(vec![
            Node::list_item().with_children(vec![Node::paragraph().with_plain_text("inside")]),
            Node::list_item().with_children(vec![Node::paragraph().with_plain_text("also")]),
        ])]);
        let mut tr = Transaction::new(doc, Selection::All);
        update_indent_level(&mut tr, 30, &options());

        assert!(!tr.doc_changed());
        let list = tr.doc().node_at(0).unwrap();
        for item in &list.children {
            assert_eq!(item.attrs.indent, 0);
            for para in &item.children {
                assert_eq!(para.attrs.indent, 0);
            }
        }
    }

    #[test]
    fn test_blockquote_children_are_reached() {
        let doc = Document::from_nodes(vec![Node::blockquote(vec![
            Node::paragraph().with_plain_text("inner"),
        ])]);
        let mut tr = Transaction::new(doc, Selection::All);
        update_indent_level(&mut tr, 30, &options());

        let quote = tr.doc().node_at(0).unwrap();
        assert_eq!(quote.attrs.indent, 0); // the quote itself is untouched
        assert_eq!(quote.children[0].attrs.indent, 30);
    }

    #[test]
    fn test_node_selection_is_unsupported() {
        let doc = Document::from_nodes(vec![Node::paragraph().with_plain_text("x")]);
        let mut tr = Transaction::new(doc, Selection::Node(0));
        update_indent_level(&mut tr, 30, &options());
        assert!(!tr.doc_changed());
    }

    #[test]
    fn test_selection_spanning_nothing_eligible() {
        let doc = Document::from_nodes(vec![Node::bullet_list(vec![
            Node::list_item().with_children(vec![Node::paragraph().with_plain_text("x")]),
        ])]);
        let mut tr = Transaction::new(doc, Selection::range(1, 2));
        update_indent_level(&mut tr, 30, &options());
        assert!(!tr.doc_changed());
    }

    #[test]
    fn test_mixed_selection_updates_both_paragraphs() {
        let doc = Document::from_nodes(vec![
            Node::paragraph().with_plain_text("one").with_indent(60),
            Node::paragraph().with_plain_text("two").with_indent(60),
        ]);
        let size = doc.content_size();
        let mut tr = Transaction::new(doc, Selection::range(1, size - 1));
        update_indent_level(&mut tr, 30, &options());

        assert_eq!(tr.doc().node_at(0).unwrap().attrs.indent, 90);
        assert_eq!(tr.doc().node_at(5).unwrap().attrs.indent, 90);
        assert_eq!(tr.steps().len(), 2);
    }
}
