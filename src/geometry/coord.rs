/// A 2D coordinate, `x` being longitude and `y` latitude for geographic data.
///
/// Values are carried exactly as decoded; no range validation is done.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Coord {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Coord> for geo::Coord {
    fn from(value: Coord) -> Self {
        geo::coord! { x: value.x, y: value.y }
    }
}

impl From<geo::Coord> for Coord {
    fn from(value: geo::Coord) -> Self {
        Self::new(value.x, value.y)
    }
}
