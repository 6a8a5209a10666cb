//! Owned geometry values produced by the WKB decoder.

mod coord;
mod multipolygon;
mod polygon;
mod ring;

pub use coord::Coord;
pub use multipolygon::MultiPolygon;
pub use polygon::Polygon;
pub use ring::Ring;

/// The result of decoding one WKB value.
///
/// `Absent` is a normal outcome meaning "no geometry for this row": the input was missing or
/// empty, or it held a geometry type this crate does not decode.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Geometry {
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
    #[default]
    Absent,
}

impl Geometry {
    pub fn is_absent(&self) -> bool {
        matches!(self, Geometry::Absent)
    }

    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Geometry::Polygon(geom) => Some(geom),
            _ => None,
        }
    }

    pub fn as_multi_polygon(&self) -> Option<&MultiPolygon> {
        match self {
            Geometry::MultiPolygon(geom) => Some(geom),
            _ => None,
        }
    }

    /// Iterate over every coordinate of every ring, in storage order.
    pub fn coords(&self) -> Box<dyn Iterator<Item = &Coord> + '_> {
        match self {
            Geometry::Polygon(geom) => Box::new(polygon_coords(geom)),
            Geometry::MultiPolygon(geom) => {
                Box::new(geom.polygons().iter().flat_map(|polygon| polygon_coords(polygon)))
            }
            Geometry::Absent => Box::new(std::iter::empty()),
        }
    }

    /// Convert to a [`geo::Geometry`] for use with the `geo` algorithms.
    pub fn to_geo(&self) -> Option<geo::Geometry> {
        match self {
            Geometry::Polygon(geom) => Some(geo::Geometry::Polygon(geom.into())),
            Geometry::MultiPolygon(geom) => Some(geo::Geometry::MultiPolygon(geom.into())),
            Geometry::Absent => None,
        }
    }
}

fn polygon_coords(polygon: &Polygon) -> impl Iterator<Item = &Coord> {
    polygon.rings().iter().flat_map(|ring| ring.coords())
}

impl From<Polygon> for Geometry {
    fn from(value: Polygon) -> Self {
        Geometry::Polygon(value)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(value: MultiPolygon) -> Self {
        Geometry::MultiPolygon(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn square() -> Polygon {
        Polygon::new(vec![Ring::new(vec![
            Coord::new(0., 0.),
            Coord::new(0., 1.),
            Coord::new(1., 1.),
            Coord::new(0., 0.),
        ])])
    }

    #[test]
    fn coords_iterates_all_rings() {
        let geom = Geometry::MultiPolygon(MultiPolygon::new(vec![square(), square()]));
        assert_eq!(geom.coords().count(), 8);
        assert_eq!(Geometry::Absent.coords().count(), 0);
    }
}
