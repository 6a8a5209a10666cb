use geo::algorithm::bounding_rect::BoundingRect as GeoBoundingRect;
use geo::{coord, Rect};

use crate::geometry::{Geometry, MultiPolygon, Polygon};
use crate::io::geojson::{Feature, FeatureCollection};

/// Calculation of the bounding rectangle of a geometry.
///
/// This is the extent a map view zooms to when a region is selected.
pub trait BoundingRect {
    /// Return the bounding rectangle of a geometry, or `None` if it has no coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// use wkb_features::algorithm::geo::BoundingRect;
    /// use wkb_features::{Coord, Polygon, Ring};
    ///
    /// let polygon = Polygon::new(vec![Ring::new(vec![
    ///     Coord::new(40.02, 116.34),
    ///     Coord::new(42.02, 116.34),
    ///     Coord::new(42.02, 118.34),
    ///     Coord::new(40.02, 116.34),
    /// ])]);
    ///
    /// let bounding_rect = polygon.bounding_rect().unwrap();
    ///
    /// assert_eq!(40.02f64, bounding_rect.min().x);
    /// assert_eq!(42.02f64, bounding_rect.max().x);
    /// assert_eq!(116.34, bounding_rect.min().y);
    /// assert_eq!(118.34, bounding_rect.max().y);
    /// ```
    fn bounding_rect(&self) -> Option<Rect>;
}

impl BoundingRect for Polygon {
    fn bounding_rect(&self) -> Option<Rect> {
        geo::Polygon::from(self).bounding_rect()
    }
}

impl BoundingRect for MultiPolygon {
    fn bounding_rect(&self) -> Option<Rect> {
        geo::MultiPolygon::from(self).bounding_rect()
    }
}

impl BoundingRect for Geometry {
    fn bounding_rect(&self) -> Option<Rect> {
        match self {
            Geometry::Polygon(geom) => geom.bounding_rect(),
            Geometry::MultiPolygon(geom) => geom.bounding_rect(),
            Geometry::Absent => None,
        }
    }
}

impl BoundingRect for Feature {
    fn bounding_rect(&self) -> Option<Rect> {
        self.geometry.bounding_rect()
    }
}

/// The union of the bounding rectangles of all features.
impl BoundingRect for FeatureCollection {
    fn bounding_rect(&self) -> Option<Rect> {
        self.iter()
            .filter_map(|feature| feature.bounding_rect())
            .reduce(union)
    }
}

fn union(a: Rect, b: Rect) -> Rect {
    Rect::new(
        coord! { x: a.min().x.min(b.min().x), y: a.min().y.min(b.min().y) },
        coord! { x: a.max().x.max(b.max().x), y: a.max().y.max(b.max().y) },
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::geojson::Properties;
    use crate::test::multipolygon::mp0;
    use crate::test::polygon::square;
    use approx::assert_relative_eq;

    #[test]
    fn multi_polygon() {
        let rect = MultiPolygon::from(&mp0()).bounding_rect().unwrap();
        assert_relative_eq!(rect.min().x, -111.);
        assert_relative_eq!(rect.min().y, 41.);
        assert_relative_eq!(rect.max().x, -104.);
        assert_relative_eq!(rect.max().y, 45.);
    }

    #[test]
    fn empty_geometries() {
        assert!(Geometry::Absent.bounding_rect().is_none());
        assert!(Polygon::default().bounding_rect().is_none());
        assert!(FeatureCollection::default().bounding_rect().is_none());
    }

    #[test]
    fn feature_collection_union() {
        let collection: FeatureCollection = [square(0., 0.), square(-5., 3.), Polygon::default()]
            .into_iter()
            .map(|polygon| Feature::new(Geometry::Polygon(polygon), Properties::new()))
            .collect();

        let rect = collection.bounding_rect().unwrap();
        assert_relative_eq!(rect.min().x, -5.);
        assert_relative_eq!(rect.min().y, 0.);
        assert_relative_eq!(rect.max().x, 1.);
        assert_relative_eq!(rect.max().y, 4.);
    }
}
