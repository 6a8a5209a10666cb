use std::io::Write;

use crate::error::WKBResult;
use crate::geometry::Polygon;
use crate::io::wkb::common::{Endianness, WKBType};
use crate::io::wkb::writer::{write_count, write_f64, write_header, HEADER_BYTES};

/// The byte length of a WKBPolygon
pub fn polygon_wkb_size(geom: &Polygon) -> usize {
    // numRings, then numPoints and two f64 per coordinate for each ring
    let rings: usize = geom
        .rings()
        .iter()
        .map(|ring| 4 + ring.num_coords() * 2 * 8)
        .sum();
    HEADER_BYTES + 4 + rings
}

/// Write a Polygon geometry to a Writer encoded as WKB
pub fn write_polygon_as_wkb<W: Write>(
    mut writer: W,
    geom: &Polygon,
    byte_order: Endianness,
) -> WKBResult<()> {
    write_header(&mut writer, WKBType::Polygon, byte_order)?;
    write_count(&mut writer, geom.num_rings(), byte_order)?;

    for ring in geom.rings() {
        write_count(&mut writer, ring.num_coords(), byte_order)?;
        for coord in ring.coords() {
            write_f64(&mut writer, coord.x, byte_order)?;
            write_f64(&mut writer, coord.y, byte_order)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::polygon::{p0, p1};
    use geozero::{CoordDimensions, ToWkb};

    #[test]
    fn matches_geozero() {
        for geo_polygon in [p0(), p1()] {
            let expected = geo::Geometry::Polygon(geo_polygon.clone())
                .to_wkb(CoordDimensions::xy())
                .unwrap();

            let polygon = Polygon::from(&geo_polygon);
            let mut buf = Vec::new();
            write_polygon_as_wkb(&mut buf, &polygon, Endianness::LittleEndian).unwrap();

            assert_eq!(buf, expected);
            assert_eq!(polygon_wkb_size(&polygon), buf.len());
        }
    }

    #[test]
    fn empty_polygon() {
        let mut buf = Vec::new();
        write_polygon_as_wkb(&mut buf, &Polygon::default(), Endianness::BigEndian).unwrap();
        assert_eq!(buf, [0, 0, 0, 0, 3, 0, 0, 0, 0]);
        assert_eq!(polygon_wkb_size(&Polygon::default()), 9);
    }
}
