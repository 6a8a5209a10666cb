use tracing::warn;

use crate::error::WKBResult;
use crate::geometry::Geometry;
use crate::io::wkb::decode_geometry_with_options;
use crate::options::DecodeOptions;

/// Attribute values of one row, keyed by column name.
pub type Properties = geojson::JsonObject;

/// A geometry paired with its row's attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub properties: Properties,
    pub geometry: Geometry,
}

impl Feature {
    pub fn new(geometry: Geometry, properties: Properties) -> Self {
        Self {
            properties,
            geometry,
        }
    }
}

/// Why a row did not produce a feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The geometry value was null or empty.
    MissingGeometry,

    /// The geometry decoded to [`Geometry::Absent`], i.e. it has an unsupported type.
    UnsupportedGeometry,

    /// Decoding failed; holds the error message.
    InvalidGeometry(String),
}

/// A row left out of a [`FeatureCollection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// Index of the row in its input.
    pub row: usize,
    pub reason: SkipReason,
}

/// Features decoded from a sequence of rows.
///
/// Rows without a usable geometry are not included in `features`; they are listed in `skipped`
/// instead, which is not part of the GeoJSON output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
    pub skipped: Vec<SkippedRow>,
}

impl FeatureCollection {
    /// Decode the geometry of each `(wkb, properties)` row and keep the rows that have one.
    ///
    /// A row that fails to decode never prevents the other rows from being decoded.
    ///
    /// ```
    /// use wkb_features::io::geojson::{FeatureCollection, Properties, SkipReason};
    /// use wkb_features::DecodeOptions;
    ///
    /// let rows = vec![(None, Properties::new()), (Some(&b"\x01\x03\x00"[..]), Properties::new())];
    /// let collection = FeatureCollection::from_rows(rows, &DecodeOptions::default());
    ///
    /// assert!(collection.is_empty());
    /// assert_eq!(collection.skipped[0].reason, SkipReason::MissingGeometry);
    /// assert!(matches!(collection.skipped[1].reason, SkipReason::InvalidGeometry(_)));
    /// ```
    pub fn from_rows<'a, I>(rows: I, options: &DecodeOptions) -> Self
    where
        I: IntoIterator<Item = (Option<&'a [u8]>, Properties)>,
    {
        let mut collection = Self::default();
        for (row, (buf, properties)) in rows.into_iter().enumerate() {
            let decoded = decode_geometry_with_options(buf, options);
            collection.push_decoded(row, buf, decoded, properties);
        }
        collection
    }

    /// Add the outcome of decoding row `row`, whose raw geometry value was `buf`.
    pub fn push_decoded(
        &mut self,
        row: usize,
        buf: Option<&[u8]>,
        decoded: WKBResult<Geometry>,
        properties: Properties,
    ) {
        let reason = match decoded {
            Ok(Geometry::Absent) if buf.map_or(true, <[u8]>::is_empty) => {
                SkipReason::MissingGeometry
            }
            Ok(Geometry::Absent) => SkipReason::UnsupportedGeometry,
            Ok(geometry) => {
                self.features.push(Feature::new(geometry, properties));
                return;
            }
            Err(err) => {
                warn!(row, error = %err, "Error parsing geometry");
                SkipReason::InvalidGeometry(err.to_string())
            }
        };

        warn!(row, reason = ?reason, "Row has invalid or missing geometry data, skipping");
        self.skipped.push(SkippedRow { row, reason });
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter()
    }
}

impl From<&Feature> for geojson::Feature {
    fn from(value: &Feature) -> Self {
        geojson::Feature {
            geometry: (&value.geometry).into(),
            properties: Some(value.properties.clone()),
            ..Default::default()
        }
    }
}

impl From<&FeatureCollection> for geojson::FeatureCollection {
    fn from(value: &FeatureCollection) -> Self {
        geojson::FeatureCollection {
            bbox: None,
            features: value.iter().map(geojson::Feature::from).collect(),
            foreign_members: None,
        }
    }
}

impl FromIterator<Feature> for FeatureCollection {
    fn from_iter<T: IntoIterator<Item = Feature>>(iter: T) -> Self {
        Self {
            features: iter.into_iter().collect(),
            skipped: vec![],
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::wkb::{to_wkb, Endianness};
    use crate::test::polygon::square;
    use serde_json::json;

    fn props(name: &str) -> Properties {
        let mut properties = Properties::new();
        properties.insert("name".to_string(), json!(name));
        properties
    }

    #[test]
    fn keeps_only_rows_with_geometry() {
        let polygon = Geometry::Polygon(square(0., 0.));
        let good = to_wkb(&polygon, Endianness::LittleEndian).unwrap();
        let point = [1u8, 1, 0, 0, 0];
        let truncated = &good[..good.len() - 1];

        let rows = vec![
            (Some(good.as_slice()), props("a")),
            (None, props("b")),
            (Some(&point[..]), props("c")),
            (Some(truncated), props("d")),
            (Some(&b""[..]), props("e")),
            (Some(good.as_slice()), props("f")),
        ];
        let collection = FeatureCollection::from_rows(rows, &DecodeOptions::default());

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.features[0].properties, props("a"));
        assert_eq!(collection.features[1].properties, props("f"));
        assert_eq!(collection.features[1].geometry, polygon);

        let skipped: Vec<_> = collection.skipped.iter().map(|s| s.row).collect();
        assert_eq!(skipped, vec![1, 2, 3, 4]);
        assert_eq!(collection.skipped[0].reason, SkipReason::MissingGeometry);
        assert_eq!(collection.skipped[1].reason, SkipReason::UnsupportedGeometry);
        assert!(matches!(
            collection.skipped[2].reason,
            SkipReason::InvalidGeometry(_)
        ));
        assert_eq!(collection.skipped[3].reason, SkipReason::MissingGeometry);
    }

    #[test]
    fn serializes_as_geojson() {
        let collection: FeatureCollection =
            vec![Feature::new(Geometry::Polygon(square(0., 0.)), props("a"))]
                .into_iter()
                .collect();

        let value = serde_json::to_value(geojson::FeatureCollection::from(&collection)).unwrap();
        assert_eq!(value["type"], "FeatureCollection");
        assert_eq!(value["features"][0]["type"], "Feature");
        assert_eq!(value["features"][0]["properties"], json!({"name": "a"}));
        assert_eq!(value["features"][0]["geometry"]["type"], "Polygon");
        assert_eq!(
            value["features"][0]["geometry"]["coordinates"][0][2],
            json!([1.0, 1.0])
        );
        assert!(value.get("skipped").is_none());
    }
}
