//! Algorithms implemented on decoded geometries using georust/geo algorithms.

/// Calculate the bounding rectangle of a `Geometry`.
pub mod bounding_rect;
pub use bounding_rect::BoundingRect;
