use std::io::Write;

use crate::error::{WKBError, WKBResult};
use crate::geometry::Geometry;
use crate::io::wkb::common::Endianness;
use crate::io::wkb::writer::multipolygon::{multi_polygon_wkb_size, write_multi_polygon_as_wkb};
use crate::io::wkb::writer::polygon::{polygon_wkb_size, write_polygon_as_wkb};

/// The byte length of a geometry encoded as WKB. Zero for [`Geometry::Absent`].
pub fn geometry_wkb_size(geom: &Geometry) -> usize {
    match geom {
        Geometry::Polygon(g) => polygon_wkb_size(g),
        Geometry::MultiPolygon(g) => multi_polygon_wkb_size(g),
        Geometry::Absent => 0,
    }
}

/// Write a geometry to a Writer encoded as WKB
///
/// [`Geometry::Absent`] has no WKB representation and returns [`WKBError::IncorrectType`].
pub fn write_geometry_as_wkb<W: Write>(
    writer: W,
    geom: &Geometry,
    byte_order: Endianness,
) -> WKBResult<()> {
    match geom {
        Geometry::Polygon(g) => write_polygon_as_wkb(writer, g, byte_order),
        Geometry::MultiPolygon(g) => write_multi_polygon_as_wkb(writer, g, byte_order),
        Geometry::Absent => Err(WKBError::IncorrectType(
            "an absent geometry cannot be encoded as WKB".into(),
        )),
    }
}

/// Encode a geometry as a new WKB buffer.
pub fn to_wkb(geom: &Geometry, byte_order: Endianness) -> WKBResult<Vec<u8>> {
    let mut buf = Vec::with_capacity(geometry_wkb_size(geom));
    write_geometry_as_wkb(&mut buf, geom, byte_order)?;
    Ok(buf)
}
