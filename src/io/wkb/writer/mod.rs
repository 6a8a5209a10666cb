//! Encode [`Polygon`](crate::Polygon) and [`MultiPolygon`](crate::MultiPolygon) values as 2D WKB.

mod geometry;
mod multipolygon;
mod polygon;

pub use geometry::{geometry_wkb_size, to_wkb, write_geometry_as_wkb};
pub use multipolygon::{multi_polygon_wkb_size, write_multi_polygon_as_wkb};
pub use polygon::{polygon_wkb_size, write_polygon_as_wkb};

use std::io::Write;

use byteorder::{BigEndian, LittleEndian, WriteBytesExt};

use crate::error::{WKBError, WKBResult};
use crate::io::wkb::common::{Endianness, WKBType};

/// byteOrder + wkbType
pub(crate) const HEADER_BYTES: usize = 1 + 4;

fn write_u32<W: Write>(writer: &mut W, value: u32, byte_order: Endianness) -> WKBResult<()> {
    match byte_order {
        Endianness::BigEndian => writer.write_u32::<BigEndian>(value)?,
        Endianness::LittleEndian => writer.write_u32::<LittleEndian>(value)?,
    }
    Ok(())
}

fn write_f64<W: Write>(writer: &mut W, value: f64, byte_order: Endianness) -> WKBResult<()> {
    match byte_order {
        Endianness::BigEndian => writer.write_f64::<BigEndian>(value)?,
        Endianness::LittleEndian => writer.write_f64::<LittleEndian>(value)?,
    }
    Ok(())
}

fn write_count<W: Write>(writer: &mut W, count: usize, byte_order: Endianness) -> WKBResult<()> {
    let count = u32::try_from(count).map_err(|_| WKBError::Overflow)?;
    write_u32(writer, count, byte_order)
}

fn write_header<W: Write>(
    writer: &mut W,
    wkb_type: WKBType,
    byte_order: Endianness,
) -> WKBResult<()> {
    writer.write_u8(byte_order.into())?;
    write_u32(writer, wkb_type.into(), byte_order)
}
