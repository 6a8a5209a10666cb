//! Reading and writing ISO-flavored 2D WKB Polygon and MultiPolygon geometries.

mod api;
mod common;
pub(crate) mod reader;
pub(crate) mod writer;

pub use api::{decode_geometries, decode_geometry, decode_geometry_with_options};
pub use common::{Endianness, WKBType};
pub use writer::{
    geometry_wkb_size, multi_polygon_wkb_size, polygon_wkb_size, to_wkb, write_geometry_as_wkb,
    write_multi_polygon_as_wkb, write_polygon_as_wkb,
};
