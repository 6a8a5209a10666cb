use tracing::warn;

use crate::error::{WKBError, WKBResult};
use crate::geometry::MultiPolygon;
use crate::io::wkb::common::{Endianness, WKBType};
use crate::io::wkb::reader::cursor::WKBReader;
use crate::io::wkb::reader::polygon::read_polygon;
use crate::options::MemberPolicy;

/// Smallest possible encoded member: byte-order marker plus type code.
const MIN_MEMBER_BYTES: u64 = 1 + 4;

/// Read the body of a WKB MultiPolygon, positioned just after its 5-byte header.
///
/// Every member carries its own byte-order marker, which overrides `byte_order` for that member.
/// `byte_order` itself only applies to the member count.
pub(crate) fn read_multi_polygon(
    reader: &mut WKBReader,
    byte_order: Endianness,
    member_policy: MemberPolicy,
) -> WKBResult<MultiPolygon> {
    let num_polygons = reader.read_u32(byte_order)?;
    reader.ensure_items(num_polygons, MIN_MEMBER_BYTES)?;

    let mut polygons = Vec::with_capacity(num_polygons as usize);
    for index in 0..num_polygons as usize {
        let (member_byte_order, raw_type) = reader.read_header()?;
        let type_code = WKBType::base_code(raw_type);

        if type_code != u32::from(WKBType::Polygon) {
            match member_policy {
                MemberPolicy::Skip => {
                    // The body is left unread, so later members are read from inside it.
                    warn!(
                        index,
                        type_code,
                        offset = reader.position(),
                        "Unexpected geometry type within MultiPolygon, skipping member"
                    );
                    continue;
                }
                MemberPolicy::Reject => {
                    return Err(WKBError::UnexpectedMemberType { index, type_code });
                }
            }
        }

        polygons.push(read_polygon(reader, member_byte_order)?);
    }

    Ok(MultiPolygon::new(polygons))
}
