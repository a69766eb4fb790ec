//! Input boundary: building a [`PageTree`] from a hierarchical source.
//!
//! The engine is agnostic to where the hierarchy comes from; an admin UI
//! reads it out of nested ordered-list markup, a test reads it from a
//! fixture. Either way the collaborator exposes the shape through
//! [`PageSource`] and the whole forest is snapshotted up front, so later
//! mutation of the source cannot disturb a running layout pass.

use crate::{PageId, PageTree, Result};
use pagetree_geom::Expanse;

/// One element of a hierarchical page source.
pub trait PageSource {
    /// The opaque handle for the rendering-surface element this page maps
    /// to.
    fn handle(&self) -> &str;

    /// The measured extent of the element. Measurements must be taken
    /// before the snapshot; the tree reads them exactly once.
    fn extent(&self) -> Expanse;

    /// Child elements in display order.
    fn children(&self) -> Vec<&Self>;
}

/// Snapshot a forest of source roots into a [`PageTree`].
pub fn build_forest<S: PageSource + ?Sized>(roots: &[&S]) -> Result<PageTree> {
    let mut tree = PageTree::new();
    for root in roots {
        let id = tree.add_root(root.handle(), root.extent());
        for child in root.children() {
            graft(&mut tree, id, child)?;
        }
    }
    Ok(tree)
}

/// Copy `src` and its descendants under `parent`.
fn graft<S: PageSource + ?Sized>(tree: &mut PageTree, parent: PageId, src: &S) -> Result<()> {
    let id = tree.add_child(parent, src.handle(), src.extent())?;
    for child in src.children() {
        graft(tree, id, child)?;
    }
    Ok(())
}
