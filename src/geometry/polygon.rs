use crate::geometry::Ring;

/// A polygon: the first ring is the exterior, any further rings are holes.
///
/// A polygon decoded from WKB that declares zero rings is kept as a polygon with no rings rather
/// than being rejected.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    rings: Vec<Ring>,
}

impl Polygon {
    pub fn new(rings: Vec<Ring>) -> Self {
        Self { rings }
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn num_rings(&self) -> usize {
        self.rings.len()
    }

    pub fn exterior(&self) -> Option<&Ring> {
        self.rings.first()
    }

    pub fn interiors(&self) -> &[Ring] {
        self.rings.get(1..).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    pub fn into_inner(self) -> Vec<Ring> {
        self.rings
    }
}

impl From<Vec<Ring>> for Polygon {
    fn from(rings: Vec<Ring>) -> Self {
        Self::new(rings)
    }
}

/// Note that [`geo::Polygon::new`] closes any open ring.
impl From<&Polygon> for geo::Polygon {
    fn from(value: &Polygon) -> Self {
        let exterior = value
            .exterior()
            .map(geo::LineString::from)
            .unwrap_or_else(|| geo::LineString::new(vec![]));
        let interiors = value.interiors().iter().map(geo::LineString::from).collect();
        geo::Polygon::new(exterior, interiors)
    }
}

impl From<&geo::Polygon> for Polygon {
    fn from(value: &geo::Polygon) -> Self {
        if value.exterior().0.is_empty() && value.interiors().is_empty() {
            return Self::default();
        }

        let rings = std::iter::once(value.exterior())
            .chain(value.interiors())
            .map(Ring::from)
            .collect();
        Self::new(rings)
    }
}
