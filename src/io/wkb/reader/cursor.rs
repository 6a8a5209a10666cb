use std::io::Cursor;

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};

use crate::error::{WKBError, WKBResult};
use crate::geometry::Coord;
use crate::io::wkb::common::Endianness;

/// Width in bytes of one 2D coordinate.
pub(crate) const COORD_WIDTH: u64 = 2 * 8;

/// A bounds-checked cursor over one WKB buffer.
///
/// The position only moves forward. Byte order is a parameter of each read, so nested structures
/// with their own byte-order marker can be read through the same cursor.
pub(crate) struct WKBReader<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> WKBReader<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(buf),
        }
    }

    pub(crate) fn position(&self) -> u64 {
        self.cursor.position()
    }

    pub(crate) fn remaining(&self) -> u64 {
        (self.cursor.get_ref().len() as u64).saturating_sub(self.position())
    }

    /// Fail with [`WKBError::MalformedGeometry`] unless `needed` more bytes are available.
    pub(crate) fn ensure(&self, needed: u64) -> WKBResult<()> {
        let available = self.remaining();
        if needed > available {
            return Err(WKBError::MalformedGeometry {
                offset: self.position(),
                needed,
                available,
            });
        }
        Ok(())
    }

    /// Check that `count` items of at least `width` bytes each can still fit in the buffer.
    ///
    /// Called before allocating for a declared count so that a garbage count fails instead of
    /// reserving a huge vector.
    pub(crate) fn ensure_items(&self, count: u32, width: u64) -> WKBResult<()> {
        self.ensure(u64::from(count) * width)
    }

    pub(crate) fn read_u8(&mut self) -> WKBResult<u8> {
        self.ensure(1)?;
        Ok(self.cursor.read_u8()?)
    }

    pub(crate) fn read_u32(&mut self, byte_order: Endianness) -> WKBResult<u32> {
        self.ensure(4)?;
        let value = match byte_order {
            Endianness::BigEndian => self.cursor.read_u32::<BigEndian>()?,
            Endianness::LittleEndian => self.cursor.read_u32::<LittleEndian>()?,
        };
        Ok(value)
    }

    pub(crate) fn read_f64(&mut self, byte_order: Endianness) -> WKBResult<f64> {
        self.ensure(8)?;
        let value = match byte_order {
            Endianness::BigEndian => self.cursor.read_f64::<BigEndian>()?,
            Endianness::LittleEndian => self.cursor.read_f64::<LittleEndian>()?,
        };
        Ok(value)
    }

    pub(crate) fn read_coord(&mut self, byte_order: Endianness) -> WKBResult<Coord> {
        self.ensure(COORD_WIDTH)?;
        let x = self.read_f64(byte_order)?;
        let y = self.read_f64(byte_order)?;
        Ok(Coord::new(x, y))
    }

    /// Read a byte-order marker followed by a raw type code in that byte order.
    pub(crate) fn read_header(&mut self) -> WKBResult<(Endianness, u32)> {
        let byte_order = Endianness::from(self.read_u8()?);
        let type_code = self.read_u32(byte_order)?;
        Ok((byte_order, type_code))
    }
}
