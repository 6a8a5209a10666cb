use geojson::{PolygonType, Position, Value};

use crate::geometry::{Coord, Geometry, MultiPolygon, Polygon};

fn position(coord: &Coord) -> Position {
    vec![coord.x, coord.y]
}

fn polygon_type(polygon: &Polygon) -> PolygonType {
    polygon
        .rings()
        .iter()
        .map(|ring| ring.coords().iter().map(position).collect())
        .collect()
}

impl From<&Polygon> for Value {
    fn from(value: &Polygon) -> Self {
        Value::Polygon(polygon_type(value))
    }
}

impl From<&MultiPolygon> for Value {
    fn from(value: &MultiPolygon) -> Self {
        Value::MultiPolygon(value.polygons().iter().map(polygon_type).collect())
    }
}

/// `Absent` has no GeoJSON geometry and converts to `None`.
impl From<&Geometry> for Option<geojson::Geometry> {
    fn from(value: &Geometry) -> Self {
        let value = match value {
            Geometry::Polygon(geom) => Value::from(geom),
            Geometry::MultiPolygon(geom) => Value::from(geom),
            Geometry::Absent => return None,
        };
        Some(geojson::Geometry::new(value))
    }
}
