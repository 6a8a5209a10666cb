#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::error::WKBResult;
use crate::geometry::Geometry;
use crate::io::wkb::reader::read_geometry;
use crate::options::DecodeOptions;

/// Decode one WKB value with the default [`DecodeOptions`].
///
/// `None` and empty buffers are [`Geometry::Absent`], as are geometry types other than Polygon
/// and MultiPolygon. A buffer too short for the counts it declares is
/// [`WKBError::MalformedGeometry`](crate::error::WKBError::MalformedGeometry).
///
/// ```
/// use wkb_features::io::wkb::decode_geometry;
/// use wkb_features::Geometry;
///
/// assert_eq!(decode_geometry(None).unwrap(), Geometry::Absent);
///
/// // A big-endian Point is not decoded
/// let point = [0u8, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
/// assert_eq!(decode_geometry(Some(&point[..])).unwrap(), Geometry::Absent);
/// ```
pub fn decode_geometry(buf: Option<&[u8]>) -> WKBResult<Geometry> {
    decode_geometry_with_options(buf, &DecodeOptions::default())
}

/// Decode one WKB value.
pub fn decode_geometry_with_options(
    buf: Option<&[u8]>,
    options: &DecodeOptions,
) -> WKBResult<Geometry> {
    match buf {
        Some(buf) => read_geometry(buf, options),
        None => Ok(Geometry::Absent),
    }
}

/// Decode many independent WKB values, returning one result per input in the same order.
///
/// With the `rayon` feature the values are decoded in parallel.
pub fn decode_geometries(
    bufs: &[Option<&[u8]>],
    options: &DecodeOptions,
) -> Vec<WKBResult<Geometry>> {
    #[cfg(feature = "rayon")]
    {
        let mut output_vec = Vec::with_capacity(bufs.len());
        bufs.par_iter()
            .map(|buf| decode_geometry_with_options(*buf, options))
            .collect_into_vec(&mut output_vec);
        output_vec
    }

    #[cfg(not(feature = "rayon"))]
    {
        bufs.iter()
            .map(|buf| decode_geometry_with_options(*buf, options))
            .collect()
    }
}
