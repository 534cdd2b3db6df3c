//! Adaptation of the caller's raw tree into the internal node table.
//!
//! One pre-order walk over the raw tree produces an engine-owned table:
//! one [`Node`] per raw node, keyed by its interned identifier, with
//! parent/children links. The walk uses an explicit work stack, so raw
//! tree depth never translates into native call-stack depth. The raw tree
//! itself is only read, never mutated.

use indexmap::IndexMap;
use log::debug;

use arbor_core::identifier::Id;

use crate::{error::ArborError, extract::Extractors, layout::Node};

/// Builds the internal node table for `input`.
///
/// Returns the root identifier and the table. Table insertion order is the
/// pre-order visit order: parents before descendants, siblings in
/// extractor order.
///
/// # Errors
///
/// Returns [`ArborError::DuplicateId`] as soon as two distinct raw nodes
/// produce the same identifier. A cyclic children extractor trips the same
/// check when the walk reaches an already-tabled node again.
pub(crate) fn adapt<'t, T, R>(
    extractors: &Extractors<T, R>,
    input: &'t T,
) -> Result<(Id, IndexMap<Id, Node<'t, R>>), ArborError> {
    let mut nodes = IndexMap::new();
    let mut root_id = None;

    // Frames carry the parent link; children are pushed in reverse so
    // they pop, and therefore visit, in extractor order.
    let mut stack: Vec<(Option<Id>, &'t R)> = vec![(None, (extractors.root)(input))];
    while let Some((parent_id, raw)) = stack.pop() {
        let id = Id::new(&(extractors.id)(raw));
        if nodes.contains_key(&id) {
            return Err(ArborError::DuplicateId(id));
        }
        nodes.insert(id, Node::new(id, parent_id, raw));

        match parent_id {
            Some(parent_id) => nodes
                .get_mut(&parent_id)
                .expect("parent was inserted before its children")
                .children
                .push(id),
            None => root_id = Some(id),
        }

        let raw_children = (extractors.children)(raw, input);
        for raw_child in raw_children.into_iter().rev() {
            stack.push((Some(id), raw_child));
        }
    }

    debug!(nodes_count = nodes.len(); "Internal node table built");

    let root_id = root_id.expect("the walk started at the root");
    Ok((root_id, nodes))
}
