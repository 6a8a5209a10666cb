use std::io::Write;

use crate::error::WKBResult;
use crate::geometry::MultiPolygon;
use crate::io::wkb::common::{Endianness, WKBType};
use crate::io::wkb::writer::polygon::{polygon_wkb_size, write_polygon_as_wkb};
use crate::io::wkb::writer::{write_count, write_header, HEADER_BYTES};

/// The byte length of a WKBMultiPolygon
pub fn multi_polygon_wkb_size(geom: &MultiPolygon) -> usize {
    let mut sum = HEADER_BYTES + 4;
    for polygon in geom.polygons() {
        sum += polygon_wkb_size(polygon);
    }

    sum
}

/// Write a MultiPolygon geometry to a Writer encoded as WKB
///
/// Every member polygon is written with its own header in the same byte order.
pub fn write_multi_polygon_as_wkb<W: Write>(
    mut writer: W,
    geom: &MultiPolygon,
    byte_order: Endianness,
) -> WKBResult<()> {
    write_header(&mut writer, WKBType::MultiPolygon, byte_order)?;
    write_count(&mut writer, geom.num_polygons(), byte_order)?;

    for polygon in geom.polygons() {
        write_polygon_as_wkb(&mut writer, polygon, byte_order)?;
    }

    Ok(())
}
