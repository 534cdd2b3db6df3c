//! Extractor configuration for reading externally-owned trees.
//!
//! The engine never owns or inspects the caller's tree. It reads it through
//! three capabilities, all mandatory:
//!
//! - **root**: the raw root node for the caller's top-level input
//! - **children**: the ordered raw children of a raw node (empty = leaf)
//! - **id**: a unique, stable identifier for a raw node
//!
//! The top-level input is passed unchanged to both `root` and every
//! `children` call, so extractors can carry auxiliary lookup context such
//! as a flat record array keyed by a parent-id field.

use crate::error::ArborError;

/// Returns the raw root for the caller's input.
pub type RootFn<T, R> = dyn for<'t> Fn(&'t T) -> &'t R;

/// Returns the ordered raw children of a raw node. Order is significant
/// and preserved; an empty result marks a leaf.
pub type ChildrenFn<T, R> = dyn for<'t> Fn(&'t R, &'t T) -> Vec<&'t R>;

/// Returns the identifier of a raw node. Must be unique across the tree
/// and stable for the duration of one invocation.
pub type IdFn<R> = dyn Fn(&R) -> String;

/// The validated set of extractors behind a built [`LayoutEngine`].
///
/// [`LayoutEngine`]: crate::LayoutEngine
pub struct Extractors<T, R> {
    pub(crate) root: Box<RootFn<T, R>>,
    pub(crate) children: Box<ChildrenFn<T, R>>,
    pub(crate) id: Box<IdFn<R>>,
}

/// Collects the three extractors and validates that none is missing.
///
/// Validation happens in [`build`](LayoutBuilder::build), before any
/// traversal work: an incomplete configuration is rejected up front rather
/// than failing lazily mid-walk.
pub struct LayoutBuilder<T, R> {
    root: Option<Box<RootFn<T, R>>>,
    children: Option<Box<ChildrenFn<T, R>>>,
    id: Option<Box<IdFn<R>>>,
}

impl<T, R> Default for LayoutBuilder<T, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R> LayoutBuilder<T, R> {
    /// Creates a builder with no extractors registered.
    pub fn new() -> Self {
        Self {
            root: None,
            children: None,
            id: None,
        }
    }

    /// Registers the root extractor.
    pub fn with_root(mut self, root: impl for<'t> Fn(&'t T) -> &'t R + 'static) -> Self {
        self.root = Some(Box::new(root));
        self
    }

    /// Registers the children extractor.
    pub fn with_children(
        mut self,
        children: impl for<'t> Fn(&'t R, &'t T) -> Vec<&'t R> + 'static,
    ) -> Self {
        self.children = Some(Box::new(children));
        self
    }

    /// Registers the identifier extractor.
    pub fn with_id(mut self, id: impl Fn(&R) -> String + 'static) -> Self {
        self.id = Some(Box::new(id));
        self
    }

    /// Validates the configuration and builds a [`LayoutEngine`].
    ///
    /// # Errors
    ///
    /// Returns [`ArborError::MissingExtractor`] naming the first extractor
    /// that was never registered.
    ///
    /// [`LayoutEngine`]: crate::LayoutEngine
    pub fn build(self) -> Result<crate::LayoutEngine<T, R>, ArborError> {
        let root = self.root.ok_or(ArborError::MissingExtractor("root"))?;
        let children = self
            .children
            .ok_or(ArborError::MissingExtractor("children"))?;
        let id = self.id.ok_or(ArborError::MissingExtractor("id"))?;

        Ok(crate::LayoutEngine::new(Extractors { root, children, id }))
    }
}
