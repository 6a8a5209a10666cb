use crate::geometry::Coord;

/// An ordered sequence of coordinates bounding a polygon's exterior or one of its holes.
///
/// Closure (first coordinate equal to the last) is the producer's responsibility and is not
/// checked here.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ring {
    coords: Vec<Coord>,
}

impl Ring {
    pub fn new(coords: Vec<Coord>) -> Self {
        Self { coords }
    }

    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    pub fn num_coords(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn into_inner(self) -> Vec<Coord> {
        self.coords
    }
}

impl From<Vec<Coord>> for Ring {
    fn from(coords: Vec<Coord>) -> Self {
        Self::new(coords)
    }
}

impl From<&Ring> for geo::LineString {
    fn from(value: &Ring) -> Self {
        value.coords.iter().copied().map(geo::Coord::from).collect()
    }
}

impl From<&geo::LineString> for Ring {
    fn from(value: &geo::LineString) -> Self {
        Self::new(value.coords().copied().map(Coord::from).collect())
    }
}
