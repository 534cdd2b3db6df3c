//! The position pass: one post-order walk assigning every node its cell.
//!
//! The tree grows left to right. A node's horizontal coordinate is purely
//! a function of its depth (`left = depth + 0.5`, depth 0 is the root
//! column). Vertical coordinates are chosen so that siblings stack in
//! extractor order, every parent centers over the span of its children,
//! and any two nodes sharing a depth stay at least 1.0 apart.
//!
//! Children must be placed before their parent can center over them, so
//! the walk is post-order. It runs on an explicit frame stack with a
//! next-child cursor per frame; tree depth never grows the native call
//! stack.
//!
//! While subtrees are placed one after another, a per-depth frontier
//! records the lowest vertical position already committed at each level.
//! New nodes are placed below their frontier. A parent's centered position
//! can still collide with earlier subtrees at its own level, because that
//! level was invisible while the children were placed; when that happens
//! the parent and its whole placed subtree shift down together and the
//! frontiers rise with them.

use indexmap::IndexMap;
use log::debug;

use arbor_core::identifier::Id;

use crate::{error::ArborError, layout::Node};

/// Per-depth record of the lowest already-committed vertical position.
///
/// A slot of `None` means no node at that depth has been committed yet.
/// First placement at a depth starts from an implicit edge of -0.5, so the
/// first top lands at 0.5.
struct Frontier(Vec<Option<f32>>);

impl Frontier {
    fn new() -> Self {
        Self(Vec::new())
    }

    fn get(&self, depth: usize) -> Option<f32> {
        self.0.get(depth).copied().flatten()
    }

    /// Returns the committed edge at `depth`, initializing the slot to the
    /// implicit -0.5 edge when it is still unset.
    fn init(&mut self, depth: usize) -> f32 {
        if self.0.len() <= depth {
            self.0.resize(depth + 1, None);
        }
        *self.0[depth].get_or_insert(-0.5)
    }

    fn set(&mut self, depth: usize, value: f32) {
        if self.0.len() <= depth {
            self.0.resize(depth + 1, None);
        }
        self.0[depth] = Some(value);
    }

    /// Raises a committed slot to `value` if it is currently lower. Unset
    /// slots stay unset; a shift only moves nodes that were committed.
    fn raise(&mut self, depth: usize, value: f32) {
        if let Some(Some(current)) = self.0.get_mut(depth) {
            if *current < value {
                *current = value;
            }
        }
    }
}

/// A post-order traversal frame.
#[derive(Clone, Copy)]
struct Frame {
    id: Id,
    depth: usize,
    next_child: usize,
}

/// Fills in the position of every node in the table.
///
/// Returns `(size, max_depth)`: the vertical extent (`max(top) + 0.5` over
/// all nodes) and the deepest level visited.
pub(crate) fn position<R>(
    root: Id,
    nodes: &mut IndexMap<Id, Node<'_, R>>,
) -> Result<(f32, usize), ArborError> {
    let mut pass = Pass {
        nodes,
        frontier: Frontier::new(),
        size: 0.0,
        max_depth: 0,
    };
    pass.run(root)?;

    let (size, max_depth) = (pass.size, pass.max_depth);
    debug!(size = size, max_depth = max_depth; "Positions calculated");
    Ok((size, max_depth))
}

struct Pass<'a, 't, R> {
    nodes: &'a mut IndexMap<Id, Node<'t, R>>,
    frontier: Frontier,
    size: f32,
    max_depth: usize,
}

impl<R> Pass<'_, '_, R> {
    fn run(&mut self, root: Id) -> Result<(), ArborError> {
        let mut stack = vec![Frame {
            id: root,
            depth: 0,
            next_child: 0,
        }];

        while let Some(&Frame {
            id,
            depth,
            next_child,
        }) = stack.last()
        {
            match self.node(id)?.children().get(next_child).copied() {
                Some(child) => {
                    stack
                        .last_mut()
                        .expect("frame was just peeked")
                        .next_child += 1;
                    stack.push(Frame {
                        id: child,
                        depth: depth + 1,
                        next_child: 0,
                    });
                }
                None => {
                    // All children placed; the node itself is next.
                    stack.pop();
                    self.place(id, depth)?;
                }
            }
        }

        Ok(())
    }

    /// Places one node, all of whose children are already placed.
    fn place(&mut self, id: Id, depth: usize) -> Result<(), ArborError> {
        if depth > self.max_depth {
            self.max_depth = depth;
        }

        let (first_child, last_child, parent) = {
            let node = self.node(id)?;
            (
                node.children().first().copied(),
                node.children().last().copied(),
                node.parent_id(),
            )
        };

        let top = match (first_child, last_child) {
            (Some(first), Some(last)) => {
                // The parent centers exactly between its first and last
                // child; middle children do not pull it.
                (self.node(first)?.top() + self.node(last)?.top()) / 2.0
            }
            _ => self.place_leaf(depth, parent)?,
        };

        let left = depth as f32 + 0.5;
        self.set_position(id, left, top)?;

        // Placing this subtree could not see earlier subtrees at this
        // level, so the overlap surfaces only now. The node and everything
        // under it move down together until the separation holds again.
        if let Some(committed) = self.frontier.get(depth) {
            if top < committed + 1.0 {
                let need_up = committed + 1.0 - top;
                self.shift_subtree(id, depth, need_up)?;
            }
        }

        let final_top = self.node(id)?.top();
        self.frontier.set(depth, final_top);
        if final_top + 0.5 > self.size {
            self.size = final_top + 0.5;
        }

        Ok(())
    }

    /// Chooses the vertical position for a leaf.
    fn place_leaf(&mut self, depth: usize, parent: Option<Id>) -> Result<f32, ArborError> {
        let prev = self.frontier.init(depth);

        // First candidate: stack directly below the previous node at this
        // depth, keeping the minimum separation of 1.0.
        let mut top = prev + 1.0;

        if let Some(parent_id) = parent {
            let parent_edge = self.frontier.init(depth - 1);
            let sibling_count = self.node(parent_id)?.children().len();
            let spread = (sibling_count - 1) as f32 * 0.5;

            // The parent will center over its children, so stacking this
            // leaf low can drag the parent into the level above. When it
            // would, derive the leaf from the parent level instead so the
            // parent lands one unit below its own frontier.
            let parent_top = prev + 1.0 + spread;
            if parent_top - 1.0 < parent_edge {
                top = parent_edge + 1.0 - spread;
            }
        }

        Ok(top)
    }

    /// Moves `id` and its whole placed subtree down by `need_up`, raising
    /// the frontier and the running size along the way.
    fn shift_subtree(&mut self, id: Id, depth: usize, need_up: f32) -> Result<(), ArborError> {
        let mut stack = vec![(id, depth)];
        while let Some((shift_id, shift_depth)) = stack.pop() {
            let node = self
                .nodes
                .get_mut(&shift_id)
                .ok_or(ArborError::UnknownNode(shift_id))?;
            let top = node.top() + need_up;
            node.position = node.position.with_y(top);

            self.frontier.raise(shift_depth, top);
            if top + 0.5 > self.size {
                self.size = top + 0.5;
            }

            let children = node.children.clone();
            stack.extend(children.into_iter().map(|child| (child, shift_depth + 1)));
        }

        Ok(())
    }

    fn set_position(&mut self, id: Id, left: f32, top: f32) -> Result<(), ArborError> {
        let node = self
            .nodes
            .get_mut(&id)
            .ok_or(ArborError::UnknownNode(id))?;
        node.position = node.position.with_x(left).with_y(top);
        Ok(())
    }

    fn node(&self, id: Id) -> Result<&Node<'_, R>, ArborError> {
        self.nodes.get(&id).ok_or(ArborError::UnknownNode(id))
    }
}
