//! Output boundary: applying computed positions to a rendering surface.
//!
//! The engine only guarantees numeric positions in the same coordinate
//! space as the input measurements; what a position becomes on screen (a
//! CSS transform, absolute layout, SVG coordinates) is the surface's
//! business.

use crate::{Error, PageTree, Result};
use pagetree_geom::Point;

/// A rendering surface that positions can be applied to.
pub trait Surface {
    /// Apply one computed position to the element identified by `handle`.
    fn position(&mut self, handle: &str, pos: Point);
}

/// Apply every computed position in the forest to `surface`, one call per
/// page in depth-first order. Fails with [`Error::MalformedTree`] if any
/// page has no position yet; a surface never sees an incomplete tree.
pub fn apply<S: Surface + ?Sized>(tree: &PageTree, surface: &mut S) -> Result<()> {
    for root in tree.roots() {
        for id in tree.preorder(*root) {
            let page = tree.get(id)?;
            let pos = page.pos().ok_or_else(|| {
                Error::MalformedTree(format!("page {} has not been laid out", page.handle()))
            })?;
            surface.position(page.handle(), pos);
        }
    }
    Ok(())
}

/// A [`Surface`] that records positions as CSS `translate3d` transform
/// strings, for callers driving a DOM renderer.
#[derive(Debug, Clone, Default)]
pub struct Translate3d {
    transforms: Vec<(String, String)>,
}

impl Translate3d {
    /// Construct an empty transform recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded (handle, transform) pairs, in application order.
    pub fn transforms(&self) -> &[(String, String)] {
        &self.transforms
    }

    /// The recorded transform for `handle`, if any.
    pub fn get(&self, handle: &str) -> Option<&str> {
        self.transforms
            .iter()
            .find(|(h, _)| h == handle)
            .map(|(_, t)| t.as_str())
    }
}

impl Surface for Translate3d {
    fn position(&mut self, handle: &str, pos: Point) {
        self.transforms.push((
            handle.to_string(),
            format!("translate3d({}px, {}px, 0)", pos.x, pos.y),
        ));
    }
}
