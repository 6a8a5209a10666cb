//! Readers and writers: WKB geometry encoding and GeoJSON-shaped feature output.

pub mod geojson;
pub mod wkb;
