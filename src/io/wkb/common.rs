use num_enum::{IntoPrimitive, TryFromPrimitive};

/// The OGC 2D WKB geometry type codes.
///
/// Only [`WKBType::Polygon`] and [`WKBType::MultiPolygon`] are decoded; the rest exist so that
/// diagnostics can name what was skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum WKBType {
    /// A WKB Point
    Point = 1,
    /// A WKB LineString
    LineString = 2,
    /// A WKB Polygon
    Polygon = 3,
    /// A WKB MultiPoint
    MultiPoint = 4,
    /// A WKB MultiLineString
    MultiLineString = 5,
    /// A WKB MultiPolygon
    MultiPolygon = 6,
    /// A WKB GeometryCollection
    GeometryCollection = 7,
}

impl WKBType {
    /// Mask applied to a raw type code before dispatch.
    ///
    /// Producers may set high bits for SRID, Z or M flags. Those are ignored, and Z/M coordinates
    /// are not supported.
    pub const BASE_TYPE_MASK: u32 = 0xFF;

    /// The base type code of a raw WKB type code.
    pub fn base_code(raw: u32) -> u32 {
        raw & Self::BASE_TYPE_MASK
    }
}

/// Byte order of the multi-byte fields that follow a byte-order marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    BigEndian,
    LittleEndian,
}

/// `1` means little endian. Every other marker value is read as big endian.
impl From<u8> for Endianness {
    fn from(value: u8) -> Self {
        match value {
            1 => Endianness::LittleEndian,
            _ => Endianness::BigEndian,
        }
    }
}

impl From<Endianness> for u8 {
    fn from(value: Endianness) -> Self {
        use Endianness::*;
        match value {
            BigEndian => 0,
            LittleEndian => 1,
        }
    }
}
