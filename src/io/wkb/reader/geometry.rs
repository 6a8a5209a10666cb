use tracing::{debug, warn};

use crate::error::{WKBError, WKBResult};
use crate::geometry::Geometry;
use crate::io::wkb::common::WKBType;
use crate::io::wkb::reader::cursor::WKBReader;
use crate::io::wkb::reader::multipolygon::read_multi_polygon;
use crate::io::wkb::reader::polygon::read_polygon;
use crate::options::{DecodeOptions, UnsupportedTypePolicy};

/// Decode one WKB buffer into an owned [`Geometry`].
///
/// An empty buffer is [`Geometry::Absent`]. Bytes after the end of the geometry are ignored.
pub(crate) fn read_geometry(buf: &[u8], options: &DecodeOptions) -> WKBResult<Geometry> {
    if buf.is_empty() {
        return Ok(Geometry::Absent);
    }

    let mut reader = WKBReader::new(buf);
    let (byte_order, raw_type) = reader.read_header()?;
    let type_code = WKBType::base_code(raw_type);

    let geometry = match WKBType::try_from(type_code) {
        Ok(WKBType::Polygon) => Geometry::Polygon(read_polygon(&mut reader, byte_order)?),
        Ok(WKBType::MultiPolygon) => Geometry::MultiPolygon(read_multi_polygon(
            &mut reader,
            byte_order,
            options.member_policy,
        )?),
        other => {
            let type_name = other.map(|t| format!("{t:?}")).unwrap_or_default();
            match options.unsupported_type_policy {
                UnsupportedTypePolicy::Absent => {
                    warn!(type_code, type_name = %type_name, "Unsupported WKB type");
                    return Ok(Geometry::Absent);
                }
                UnsupportedTypePolicy::Error => {
                    return Err(WKBError::UnsupportedGeometryType(type_code));
                }
            }
        }
    };

    if reader.remaining() > 0 {
        debug!(
            trailing = reader.remaining(),
            "Ignoring trailing bytes after WKB geometry"
        );
    }

    Ok(geometry)
}
