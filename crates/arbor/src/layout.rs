//! The layout result handed back across the engine boundary.
//!
//! [`Layout`] packages the positioned node table, the root identifier, the
//! occupied vertical extent (`size`), and the number of depth levels
//! (`deep`). It is pure packaging: all computation happens in the adapter
//! and the position pass, and the value is immutable once returned.

use indexmap::IndexMap;

use arbor_core::{geometry::Point, identifier::Id};

/// One laid-out node.
///
/// Holds the identifier links into the table, a shared reference back to
/// the caller's raw node, and the computed cell-center position. Every node
/// occupies a conceptual 1x1 cell; `left` and `top` name the cell's center.
#[derive(Debug)]
pub struct Node<'t, R> {
    pub(crate) id: Id,
    pub(crate) parent_id: Option<Id>,
    pub(crate) children: Vec<Id>,
    pub(crate) data: &'t R,
    pub(crate) position: Point,
}

impl<'t, R> Node<'t, R> {
    pub(crate) fn new(id: Id, parent_id: Option<Id>, data: &'t R) -> Self {
        Self {
            id,
            parent_id,
            children: Vec::new(),
            data,
            position: Point::default(),
        }
    }

    /// Returns this node's identifier.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Returns the parent identifier, or `None` for the root.
    pub fn parent_id(&self) -> Option<Id> {
        self.parent_id
    }

    /// Returns the child identifiers in extractor order.
    pub fn children(&self) -> &[Id] {
        &self.children
    }

    /// Returns true when this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the caller's raw node this entry was built from.
    pub fn data(&self) -> &'t R {
        self.data
    }

    /// Returns the cell-center position (`left` on x, `top` on y).
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns the horizontal coordinate: `depth + 0.5`.
    pub fn left(&self) -> f32 {
        self.position.x()
    }

    /// Returns the vertical coordinate.
    pub fn top(&self) -> f32 {
        self.position.y()
    }
}

/// An immutable layout snapshot.
///
/// The table iterates in pre-order (parents before their descendants,
/// siblings in extractor order).
#[derive(Debug)]
pub struct Layout<'t, R> {
    nodes: IndexMap<Id, Node<'t, R>>,
    root: Id,
    size: f32,
    deep: usize,
}

impl<'t, R> Layout<'t, R> {
    pub(crate) fn new(nodes: IndexMap<Id, Node<'t, R>>, root: Id, size: f32, deep: usize) -> Self {
        Self {
            nodes,
            root,
            size,
            deep,
        }
    }

    /// Returns the root identifier.
    pub fn root_id(&self) -> Id {
        self.root
    }

    /// Returns the vertical extent: `max(top) + 0.5` over all nodes, the
    /// number of vertical units needed to draw the tree.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Returns the number of horizontal levels: `max(depth) + 1`.
    pub fn deep(&self) -> usize {
        self.deep
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true when the layout holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the node for the given identifier, if present.
    pub fn node(&self, id: Id) -> Option<&Node<'t, R>> {
        self.nodes.get(&id)
    }

    /// Returns an iterator over all nodes in table (pre-)order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<'t, R>> {
        self.nodes.values()
    }

    /// Returns an iterator over `(parent, child)` identifier pairs, parents
    /// in table order and children in extractor order.
    pub fn edges(&self) -> impl Iterator<Item = (Id, Id)> + '_ {
        self.nodes
            .values()
            .flat_map(|node| node.children.iter().map(move |&child| (node.id, child)))
    }
}
