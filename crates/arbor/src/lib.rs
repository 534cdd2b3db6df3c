//! Arbor - a layout engine for left-to-right tree diagrams.
//!
//! Arbor computes a 2D position for every node of an arbitrary,
//! externally-owned tree so a caller can render it as a diagram growing
//! from left to right. The engine never owns the tree: it reads it through
//! three caller-supplied extractors (root, children, id) and returns an
//! immutable [`Layout`] of cell-center coordinates.
//!
//! Each node occupies a conceptual 1x1 cell. `left` is purely a function
//! of depth (`depth + 0.5`); `top` stacks siblings in extractor order,
//! centers every parent over the span of its children, and keeps any two
//! nodes sharing a depth at least 1.0 apart.
//!
//! # Examples
//!
//! ```
//! use arbor::LayoutBuilder;
//!
//! struct Item {
//!     name: &'static str,
//!     kids: Vec<Item>,
//! }
//!
//! let tree = Item {
//!     name: "root",
//!     kids: vec![
//!         Item { name: "a", kids: Vec::new() },
//!         Item { name: "b", kids: Vec::new() },
//!     ],
//! };
//!
//! let engine = LayoutBuilder::new()
//!     .with_root(|input: &Item| input)
//!     .with_children(|item: &Item, _: &Item| item.kids.iter().collect())
//!     .with_id(|item: &Item| item.name.to_string())
//!     .build()
//!     .expect("all extractors registered");
//!
//! let layout = engine.layout(&tree).expect("well-formed tree");
//!
//! assert_eq!(layout.deep(), 2);
//! assert_eq!(layout.size(), 2.0);
//! let root = layout.node(layout.root_id()).unwrap();
//! assert_eq!((root.left(), root.top()), (0.5, 1.0));
//! ```

mod adapter;
mod error;
mod extract;
mod layout;
mod position;

pub use arbor_core::{curve, geometry, identifier, transform};

pub use error::ArborError;
pub use extract::{ChildrenFn, Extractors, IdFn, LayoutBuilder, RootFn};
pub use layout::{Layout, Node};

use log::info;

/// A configured layout engine.
///
/// Built by [`LayoutBuilder::build`] once all three extractors are
/// registered. The engine holds no per-invocation state: every
/// [`layout`](Self::layout) call adapts the raw tree into a fresh node
/// table, positions it, and hands the table back inside the returned
/// [`Layout`].
pub struct LayoutEngine<T, R> {
    extractors: Extractors<T, R>,
}

impl<T, R> LayoutEngine<T, R> {
    pub(crate) fn new(extractors: Extractors<T, R>) -> Self {
        Self { extractors }
    }

    #[cfg(test)]
    pub(crate) fn into_extractors(self) -> Extractors<T, R> {
        self.extractors
    }

    /// Computes the layout for `input`.
    ///
    /// `input` is passed unchanged to the root extractor and to every
    /// children call, so extractors can resolve children through auxiliary
    /// context carried in the input value.
    ///
    /// # Errors
    ///
    /// Returns [`ArborError::DuplicateId`] when two distinct raw nodes
    /// produce the same identifier. A cyclic children extractor surfaces
    /// as the same error; the engine performs no other cycle detection.
    pub fn layout<'t>(&self, input: &'t T) -> Result<Layout<'t, R>, ArborError> {
        info!("Adapting raw tree");
        let (root, mut nodes) = adapter::adapt(&self.extractors, input)?;

        info!("Calculating positions");
        let (size, max_depth) = position::position(root, &mut nodes)?;

        Ok(Layout::new(nodes, root, size, max_depth + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_core::identifier::Id;

    struct Item {
        name: &'static str,
        kids: Vec<Item>,
    }

    fn engine() -> LayoutEngine<Item, Item> {
        LayoutBuilder::new()
            .with_root(|input: &Item| input)
            .with_children(|item: &Item, _: &Item| item.kids.iter().collect())
            .with_id(|item: &Item| item.name.to_string())
            .build()
            .expect("all extractors registered")
    }

    #[test]
    fn test_layout_exposes_table_root_and_extent() {
        let tree = Item {
            name: "root",
            kids: vec![
                Item {
                    name: "a",
                    kids: Vec::new(),
                },
                Item {
                    name: "b",
                    kids: Vec::new(),
                },
            ],
        };

        let layout = engine().layout(&tree).unwrap();

        assert_eq!(layout.root_id(), Id::new("root"));
        assert_eq!(layout.len(), 3);
        assert!(!layout.is_empty());
        assert_eq!(layout.deep(), 2);

        let edges: Vec<(Id, Id)> = layout.edges().collect();
        assert_eq!(
            edges,
            vec![
                (Id::new("root"), Id::new("a")),
                (Id::new("root"), Id::new("b")),
            ]
        );
    }

    #[test]
    fn test_flat_records_resolve_through_the_input_context() {
        // The same engine API serves a flat record list; children are
        // resolved against the input value, not the node itself.
        struct Record {
            id: &'static str,
            parent: Option<&'static str>,
        }

        let records = vec![
            Record {
                id: "root",
                parent: None,
            },
            Record {
                id: "left",
                parent: Some("root"),
            },
            Record {
                id: "right",
                parent: Some("root"),
            },
        ];

        let engine = LayoutBuilder::new()
            .with_root(|input: &Vec<Record>| &input[0])
            .with_children(|record: &Record, input: &Vec<Record>| {
                input
                    .iter()
                    .filter(|candidate| candidate.parent == Some(record.id))
                    .collect()
            })
            .with_id(|record: &Record| record.id.to_string())
            .build()
            .unwrap();

        let layout = engine.layout(&records).unwrap();
        assert_eq!(layout.len(), 3);
        assert_eq!(layout.deep(), 2);

        let root = layout.node(Id::new("root")).unwrap();
        assert_eq!(root.children(), &[Id::new("left"), Id::new("right")]);
    }

    #[test]
    fn test_layout_is_idempotent() {
        let tree = Item {
            name: "root",
            kids: vec![
                Item {
                    name: "a",
                    kids: vec![Item {
                        name: "a1",
                        kids: Vec::new(),
                    }],
                },
                Item {
                    name: "b",
                    kids: Vec::new(),
                },
            ],
        };

        let engine = engine();
        let first = engine.layout(&tree).unwrap();
        let second = engine.layout(&tree).unwrap();

        assert_eq!(first.size(), second.size());
        assert_eq!(first.deep(), second.deep());
        for node in first.nodes() {
            let other = second.node(node.id()).unwrap();
            assert_eq!(node.position(), other.position());
            assert_eq!(node.children(), other.children());
        }
    }
}
