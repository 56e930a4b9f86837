mod coordinate;
mod dimension_location;
mod geometry;
mod sequence;

pub use coordinate::Coordinate;
pub use dimension_location::DimensionLocation;
pub use geometry::*;
pub use sequence::{CoordinateSequence, PackedCoordinates};

/// Topological location of a coordinate relative to a geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
  Interior,
  Boundary,
  Exterior,
  /// Not yet determined. Never returned from a locate operation.
  None,
}

impl Location {
  /// Merge two component locations. Boundary wins over Interior, which wins
  /// over Exterior. `None` is the identity.
  #[must_use]
  pub fn merge(self, other: Location) -> Location {
    use Location::*;
    match (self, other) {
      (Boundary, _) | (_, Boundary) => Boundary,
      (Interior, _) | (_, Interior) => Interior,
      (Exterior, _) | (_, Exterior) => Exterior,
      (None, None) => None,
    }
  }

  pub fn is_exterior(self) -> bool {
    matches!(self, Location::Exterior)
  }
}

/// Topological dimension of a geometry component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
  Point = 0,
  Line = 1,
  Area = 2,
}
