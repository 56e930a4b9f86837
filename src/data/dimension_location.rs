use std::convert::TryFrom;
use std::fmt;

use super::{Dimension, Location};
use crate::Error;

/// A location tagged with the dimension of the component that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DimensionLocation {
  Exterior,
  PointInterior,
  LineInterior,
  LineBoundary,
  AreaInterior,
  AreaBoundary,
}

impl DimensionLocation {
  pub const ALL: [DimensionLocation; 6] = [
    DimensionLocation::Exterior,
    DimensionLocation::PointInterior,
    DimensionLocation::LineInterior,
    DimensionLocation::LineBoundary,
    DimensionLocation::AreaInterior,
    DimensionLocation::AreaBoundary,
  ];

  /// Points have no boundary: anything but Interior is Exterior.
  pub fn point(loc: Location) -> DimensionLocation {
    match loc {
      Location::Interior => DimensionLocation::PointInterior,
      _ => DimensionLocation::Exterior,
    }
  }

  pub fn line(loc: Location) -> DimensionLocation {
    match loc {
      Location::Interior => DimensionLocation::LineInterior,
      Location::Boundary => DimensionLocation::LineBoundary,
      _ => DimensionLocation::Exterior,
    }
  }

  pub fn area(loc: Location) -> DimensionLocation {
    match loc {
      Location::Interior => DimensionLocation::AreaInterior,
      Location::Boundary => DimensionLocation::AreaBoundary,
      _ => DimensionLocation::Exterior,
    }
  }

  pub fn location(self) -> Location {
    match self {
      DimensionLocation::Exterior => Location::Exterior,
      DimensionLocation::PointInterior
      | DimensionLocation::LineInterior
      | DimensionLocation::AreaInterior => Location::Interior,
      DimensionLocation::LineBoundary | DimensionLocation::AreaBoundary => Location::Boundary,
    }
  }

  /// `None` for [`DimensionLocation::Exterior`].
  pub fn dimension(self) -> Option<Dimension> {
    match self {
      DimensionLocation::Exterior => None,
      DimensionLocation::PointInterior => Some(Dimension::Point),
      DimensionLocation::LineInterior | DimensionLocation::LineBoundary => Some(Dimension::Line),
      DimensionLocation::AreaInterior | DimensionLocation::AreaBoundary => Some(Dimension::Area),
    }
  }
}

impl TryFrom<(Dimension, Location)> for DimensionLocation {
  type Error = Error;

  /// Strict construction: `Point` with `Boundary`, or any `Location::None`,
  /// is rejected.
  fn try_from((dim, loc): (Dimension, Location)) -> Result<DimensionLocation, Error> {
    match (dim, loc) {
      (_, Location::None) | (Dimension::Point, Location::Boundary) => {
        Err(Error::InvalidDimensionLocation)
      }
      (Dimension::Point, loc) => Ok(DimensionLocation::point(loc)),
      (Dimension::Line, loc) => Ok(DimensionLocation::line(loc)),
      (Dimension::Area, loc) => Ok(DimensionLocation::area(loc)),
    }
  }
}

impl fmt::Display for DimensionLocation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      DimensionLocation::Exterior => "Exterior",
      DimensionLocation::PointInterior => "Point/Interior",
      DimensionLocation::LineInterior => "Line/Interior",
      DimensionLocation::LineBoundary => "Line/Boundary",
      DimensionLocation::AreaInterior => "Area/Interior",
      DimensionLocation::AreaBoundary => "Area/Boundary",
    };
    f.write_str(name)
  }
}
