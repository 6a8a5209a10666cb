//! GeoJSON-shaped features assembled from decoded geometries and row properties.
//!
//! Output goes through the [`geojson`] crate's object model.

pub use feature::{Feature, FeatureCollection, Properties, SkipReason, SkippedRow};
pub use writer::write_geojson;

mod feature;
mod geometry;
mod writer;
