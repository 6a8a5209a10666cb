//! Eager decoding of WKB Polygon and MultiPolygon geometries into owned values.
//!
//! Layouts follow the [WKB spec](https://portal.ogc.org/files/?artifact_id=25355), 2D only.

mod cursor;
mod geometry;
mod linearring;
mod multipolygon;
mod polygon;

pub(crate) use geometry::read_geometry;
