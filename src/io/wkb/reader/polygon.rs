use crate::error::WKBResult;
use crate::geometry::Polygon;
use crate::io::wkb::common::Endianness;
use crate::io::wkb::reader::cursor::WKBReader;
use crate::io::wkb::reader::linearring::read_linear_ring;

/// Smallest possible encoded ring: just its point count.
const MIN_RING_BYTES: u64 = 4;

/// Read the body of a WKB Polygon, positioned just after its 5-byte header.
///
/// A ring count of zero produces a polygon without rings.
pub(crate) fn read_polygon(reader: &mut WKBReader, byte_order: Endianness) -> WKBResult<Polygon> {
    let num_rings = reader.read_u32(byte_order)?;
    reader.ensure_items(num_rings, MIN_RING_BYTES)?;

    let mut rings = Vec::with_capacity(num_rings as usize);
    for _ in 0..num_rings {
        rings.push(read_linear_ring(reader, byte_order)?);
    }

    Ok(Polygon::new(rings))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::WKBError;
    use crate::geometry::Coord;
    use byteorder::{BigEndian, LittleEndian, WriteBytesExt};

    #[test]
    fn reads_rings_in_order() {
        let mut buf: Vec<u8> = vec![];
        buf.write_u32::<LittleEndian>(2).unwrap();
        for (num_points, start) in [(2u32, 0.), (1, 10.)] {
            buf.write_u32::<LittleEndian>(num_points).unwrap();
            for i in 0..num_points {
                buf.write_f64::<LittleEndian>(start + i as f64).unwrap();
                buf.write_f64::<LittleEndian>(-(start + i as f64)).unwrap();
            }
        }

        let mut reader = WKBReader::new(&buf);
        let polygon = read_polygon(&mut reader, Endianness::LittleEndian).unwrap();
        assert_eq!(reader.remaining(), 0);
        assert_eq!(polygon.num_rings(), 2);
        assert_eq!(
            polygon.rings()[0].coords(),
            &[Coord::new(0., -0.), Coord::new(1., -1.)]
        );
        assert_eq!(polygon.rings()[1].coords(), &[Coord::new(10., -10.)]);
    }

    #[test]
    fn zero_rings() {
        let buf = [0u8; 4];
        let mut reader = WKBReader::new(&buf);
        let polygon = read_polygon(&mut reader, Endianness::BigEndian).unwrap();
        assert!(polygon.is_empty());
    }

    #[test]
    fn ring_count_past_end() {
        let mut buf: Vec<u8> = vec![];
        buf.write_u32::<BigEndian>(3).unwrap();
        buf.write_u32::<BigEndian>(0).unwrap();

        let mut reader = WKBReader::new(&buf);
        let err = read_polygon(&mut reader, Endianness::BigEndian).unwrap_err();
        assert!(matches!(err, WKBError::MalformedGeometry { offset: 4, .. }));
    }
}
