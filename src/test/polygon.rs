use geo::{polygon, Polygon};

use crate::geometry::{Coord, Ring};

pub(crate) fn p0() -> Polygon {
    polygon![
        (x: -111., y: 45.),
        (x: -111., y: 41.),
        (x: -104., y: 41.),
        (x: -104., y: 45.),
    ]
}

pub(crate) fn p1() -> Polygon {
    polygon!(
        exterior: [
            (x: -111., y: 45.),
            (x: -111., y: 41.),
            (x: -104., y: 41.),
            (x: -104., y: 45.),
        ],
        interiors: [
            [
                (x: -110., y: 44.),
                (x: -110., y: 42.),
                (x: -105., y: 42.),
                (x: -105., y: 44.),
            ],
        ],
    )
}

/// A closed unit square with its lower left corner at `(x, y)`.
pub(crate) fn square(x: f64, y: f64) -> crate::Polygon {
    crate::Polygon::new(vec![Ring::new(vec![
        Coord::new(x, y),
        Coord::new(x, y + 1.),
        Coord::new(x + 1., y + 1.),
        Coord::new(x + 1., y),
        Coord::new(x, y),
    ])])
}
