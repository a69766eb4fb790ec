//! pagetree computes a centered, top-down org-chart layout for a
//! hierarchical tree of pages, as displayed in a site admin UI.
//!
//! The caller snapshots its page hierarchy into a [`PageTree`] (via
//! [`source::PageSource`] or the arena API directly), runs a
//! [`Layout`] pass, and hands the resulting positions to its rendering
//! surface through [`surface::Surface`]. The engine itself does no I/O and
//! keeps no state between passes.

pub mod error;
pub mod layout;
pub mod source;
pub mod surface;
pub mod tree;

pub use error::{Error, Result};
pub use layout::{HORIZONTAL_GAP, Layout, VERTICAL_GAP};
pub use source::{PageSource, build_forest};
pub use surface::{Surface, Translate3d, apply};
pub use tree::{Page, PageId, PageTree};

// Export the geometry types pages are measured and positioned in.
pub use pagetree_geom as geom;
pub use pagetree_geom::{Expanse, Point, Rect};
