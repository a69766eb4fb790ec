//! The centered org-chart layout engine.
//!
//! One layout pass assigns an absolute position to every page reachable
//! from a root: each level sits below its parent, and a page's children are
//! placed left to right, centered as a block under the parent's horizontal
//! midpoint. The pass is a pure function of the tree shape and the
//! container width; nothing is cached between calls.

use crate::{Error, PageId, PageTree, Result};
use pagetree_geom::Point;
use tracing::{debug, trace};

/// Default horizontal gap between adjacent sibling bounding boxes.
pub const HORIZONTAL_GAP: f64 = 20.0;

/// Default vertical gap between a page and its children.
pub const VERTICAL_GAP: f64 = 20.0;

/// Layout configuration. The gaps are fixed inputs to a pass, never
/// computed from the tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Horizontal gap between adjacent siblings.
    pub h_gap: f64,
    /// Vertical gap between a parent and its children.
    pub v_gap: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            h_gap: HORIZONTAL_GAP,
            v_gap: VERTICAL_GAP,
        }
    }
}

impl Layout {
    /// Construct a layout with the default gaps.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a layout with explicit gaps.
    pub fn with_gaps(h_gap: f64, v_gap: f64) -> Self {
        Self { h_gap, v_gap }
    }

    /// Compute a position for every page reachable from `root`.
    ///
    /// `container_width` is the available horizontal extent and is used
    /// only to center the root; `root.x = container_width/2 - root.w/2`,
    /// `root.y = 0`. For every other page, `y` is its parent's bottom edge
    /// plus the vertical gap, and `x` places the sibling block centered
    /// under the parent.
    ///
    /// The whole subtree is validated before any position is written: if
    /// any page has a non-finite or negative extent the pass fails with
    /// [`Error::MalformedTree`] and no coordinates are assigned. Partial
    /// layout is never produced, since a renderer expects a complete,
    /// consistent tree.
    pub fn solve(&self, tree: &mut PageTree, root: PageId, container_width: f64) -> Result<()> {
        if !container_width.is_finite() {
            return Err(Error::Invalid(format!(
                "container width is not finite: {container_width}"
            )));
        }
        // Reject an id this tree never issued before walking from it.
        tree.get(root)?;
        let order: Vec<PageId> = tree.preorder(root).collect();
        for id in &order {
            let page = tree.get(*id)?;
            if !page.extent().is_valid() {
                return Err(Error::MalformedTree(format!(
                    "page {} has no valid measurement: {:?}",
                    page.handle(),
                    page.extent()
                )));
            }
        }
        debug!(
            "layout pass: root={} pages={} container_width={}",
            tree.get(root)?.handle(),
            order.len(),
            container_width
        );

        let rw = tree.get(root)?.extent().w;
        let rx = container_width / 2.0 - rw / 2.0;
        tree.get_mut(root)?.set_pos(Point::new(rx, 0.0));
        trace!("placed {} at ({}, {})", tree.get(root)?.handle(), rx, 0.0);

        // Preorder guarantees a page is positioned before its children are
        // visited.
        for id in order {
            self.place_children(tree, id)?;
        }
        Ok(())
    }

    /// Lay out every root of the forest. Roots are independent of one
    /// another; each is centered in the same container.
    pub fn solve_forest(&self, tree: &mut PageTree, container_width: f64) -> Result<()> {
        for root in tree.roots().to_vec() {
            self.solve(tree, root, container_width)?;
        }
        Ok(())
    }

    /// Position the children of an already-positioned page.
    fn place_children(&self, tree: &mut PageTree, id: PageId) -> Result<()> {
        let page = tree.get(id)?;
        let children = page.children().to_vec();
        if children.is_empty() {
            return Ok(());
        }
        let pos = page
            .pos()
            .ok_or_else(|| Error::MalformedTree(format!("page {} not positioned", page.handle())))?;
        let extent = page.extent();
        let block = self.child_block_width(tree, &children)?;

        let y = pos.y + extent.h + self.v_gap;
        let mut x = pos.x + extent.w / 2.0 - block / 2.0;
        for child in children {
            let w = tree.get(child)?.extent().w;
            tree.get_mut(child)?.set_pos(Point::new(x, y));
            trace!("placed {} at ({}, {})", tree.get(child)?.handle(), x, y);
            x += w;
            x += self.h_gap;
        }
        Ok(())
    }

    /// The horizontal span needed to lay out `children` side by side: the
    /// sum of their widths with one gap between consecutive children and no
    /// trailing gap. Zero for no children; a childless page never
    /// contributes a phantom gap to an ancestor. Summation is strictly left
    /// to right so repeated passes over an unchanged tree are bit-identical.
    fn child_block_width(&self, tree: &PageTree, children: &[PageId]) -> Result<f64> {
        let mut block = 0.0;
        for (i, child) in children.iter().enumerate() {
            if i > 0 {
                block += self.h_gap;
            }
            block += tree.get(*child)?.extent().w;
        }
        Ok(block)
    }

}
