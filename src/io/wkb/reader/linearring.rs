use crate::error::WKBResult;
use crate::geometry::Ring;
use crate::io::wkb::common::Endianness;
use crate::io::wkb::reader::cursor::{WKBReader, COORD_WIDTH};

/// Read a linear ring: a `u32` point count followed by that many `(x, y)` pairs of `f64`.
///
/// Consumes exactly `4 + 16 * numPoints` bytes.
pub(crate) fn read_linear_ring(reader: &mut WKBReader, byte_order: Endianness) -> WKBResult<Ring> {
    let num_points = reader.read_u32(byte_order)?;
    reader.ensure_items(num_points, COORD_WIDTH)?;

    let mut coords = Vec::with_capacity(num_points as usize);
    for _ in 0..num_points {
        coords.push(reader.read_coord(byte_order)?);
    }

    Ok(Ring::new(coords))
}
