use crate::geometry::Polygon;

/// An ordered collection of polygons. Order is preserved and members are not deduplicated.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
}

impl MultiPolygon {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn num_polygons(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    pub fn into_inner(self) -> Vec<Polygon> {
        self.polygons
    }
}

impl From<Vec<Polygon>> for MultiPolygon {
    fn from(polygons: Vec<Polygon>) -> Self {
        Self::new(polygons)
    }
}

impl From<&MultiPolygon> for geo::MultiPolygon {
    fn from(value: &MultiPolygon) -> Self {
        geo::MultiPolygon::new(value.polygons.iter().map(geo::Polygon::from).collect())
    }
}

impl From<&geo::MultiPolygon> for MultiPolygon {
    fn from(value: &geo::MultiPolygon) -> Self {
        Self::new(value.iter().map(Polygon::from).collect())
    }
}
