//! An arena-backed forest of pages.
//!
//! Pages live in a flat `Vec` owned by [`PageTree`]; identity and the
//! parent back-reference are indices into that vector, so the structure has
//! no ownership cycles and a child never outlives its tree. Because
//! children are always freshly pushed nodes, the arena structurally cannot
//! contain a cycle.

use crate::{Error, Result};
use pagetree_geom::{Expanse, Point, Rect};

/// A unique ID for a page within one [`PageTree`].
///
/// IDs are only meaningful for the tree that issued them; using one with a
/// different tree is a contract violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageId(usize);

/// One page in the hierarchy being laid out.
#[derive(Debug, Clone)]
pub struct Page {
    /// Opaque identity mapping 1:1 to a rendering-surface element. Not
    /// interpreted by the engine.
    handle: String,
    /// Measured extent, fixed for the duration of one layout pass.
    extent: Expanse,
    parent: Option<PageId>,
    /// Ordered children; insertion order is display order, left to right.
    children: Vec<PageId>,
    /// Computed position. `None` until a layout pass completes for the
    /// root this page belongs to.
    pos: Option<Point>,
}

impl Page {
    /// The rendering-surface handle this page corresponds to.
    pub fn handle(&self) -> &str {
        &self.handle
    }

    /// The measured extent of this page.
    pub fn extent(&self) -> Expanse {
        self.extent
    }

    /// The parent page, if any.
    pub fn parent(&self) -> Option<PageId> {
        self.parent
    }

    /// The page's children in display order.
    pub fn children(&self) -> &[PageId] {
        &self.children
    }

    /// The computed position, valid only after a layout pass.
    pub fn pos(&self) -> Option<Point> {
        self.pos
    }

    /// Record a computed position.
    pub(crate) fn set_pos(&mut self, pos: Point) {
        self.pos = Some(pos);
    }
}

/// A forest of pages stored in a single arena. Roots are laid out
/// independently of one another.
#[derive(Debug, Clone, Default)]
pub struct PageTree {
    nodes: Vec<Page>,
    roots: Vec<PageId>,
}

impl PageTree {
    /// Construct an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a root page and return its ID.
    pub fn add_root(&mut self, handle: impl Into<String>, extent: Expanse) -> PageId {
        let id = self.push(handle.into(), extent, None);
        self.roots.push(id);
        id
    }

    /// Add a child under `parent`, after any existing children.
    pub fn add_child(
        &mut self,
        parent: PageId,
        handle: impl Into<String>,
        extent: Expanse,
    ) -> Result<PageId> {
        if parent.0 >= self.nodes.len() {
            return Err(Error::Invalid(format!(
                "no such parent page: {}",
                parent.0
            )));
        }
        let id = self.push(handle.into(), extent, Some(parent));
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    /// Append a node to the arena.
    fn push(&mut self, handle: String, extent: Expanse, parent: Option<PageId>) -> PageId {
        let id = PageId(self.nodes.len());
        self.nodes.push(Page {
            handle,
            extent,
            parent,
            children: Vec::new(),
            pos: None,
        });
        id
    }

    /// Look up a page by ID.
    pub fn get(&self, id: PageId) -> Result<&Page> {
        self.nodes
            .get(id.0)
            .ok_or_else(|| Error::Invalid(format!("no such page: {}", id.0)))
    }

    /// Look up a page mutably by ID.
    pub(crate) fn get_mut(&mut self, id: PageId) -> Result<&mut Page> {
        self.nodes
            .get_mut(id.0)
            .ok_or_else(|| Error::Invalid(format!("no such page: {}", id.0)))
    }

    /// The roots of the forest, in insertion order.
    pub fn roots(&self) -> &[PageId] {
        &self.roots
    }

    /// The number of pages in the forest.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the forest holds no pages.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Depth-first traversal starting at `id`: a page is yielded before its
    /// children, and siblings are yielded left to right. An `id` this tree
    /// never issued yields nothing.
    pub fn preorder(&self, id: PageId) -> Preorder<'_> {
        Preorder {
            tree: self,
            stack: vec![id],
        }
    }

    /// The bounding box of a laid-out subtree, for sizing a scroll
    /// container. `None` if the subtree has not been laid out or `root` is
    /// unknown to this tree.
    pub fn bounds(&self, root: PageId) -> Option<Rect> {
        let mut acc: Option<Rect> = None;
        for id in self.preorder(root) {
            let page = self.get(id).ok()?;
            let r = page.extent().at(page.pos()?);
            acc = Some(match acc {
                Some(b) => b.union(&r),
                None => r,
            });
        }
        acc
    }
}

/// Iterator returned by [`PageTree::preorder`].
pub struct Preorder<'a> {
    /// The tree being walked.
    tree: &'a PageTree,
    /// Pending pages; children are pushed reversed so the leftmost pops
    /// first.
    stack: Vec<PageId>,
}

impl Iterator for Preorder<'_> {
    type Item = PageId;

    fn next(&mut self) -> Option<PageId> {
        let id = self.stack.pop()?;
        // Only the starting id can miss; children always come off a page
        // that resolved.
        let page = self.tree.nodes.get(id.0)?;
        for child in page.children.iter().rev() {
            self.stack.push(*child);
        }
        Some(id)
    }
}
