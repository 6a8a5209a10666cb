use std::io::Write;

use crate::error::WKBResult;
use crate::io::geojson::FeatureCollection;

/// Write a FeatureCollection to GeoJSON
///
/// Coordinates are written as decoded; nothing is reprojected. Skipped rows are not written.
pub fn write_geojson<W: Write>(collection: &FeatureCollection, writer: W) -> WKBResult<()> {
    serde_json::to_writer(writer, &geojson::FeatureCollection::from(collection))?;
    Ok(())
}
