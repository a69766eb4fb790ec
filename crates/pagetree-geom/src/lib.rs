//! Float geometry primitives used across pagetree.
//!
//! Coordinates and extents are `f64` in the same unit as the rendering
//! surface's measurements (pixels, for a browser surface).

#![warn(missing_docs)]

/// Width/height size type.
mod expanse;
/// Point helpers.
mod point;
/// Rectangle operations.
mod rect;

pub use expanse::Expanse;
pub use point::Point;
pub use rect::Rect;
