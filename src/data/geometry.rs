use claims::debug_assert_ok;

use super::{Coordinate, Dimension};
use crate::Error;

///////////////////////////////////////////////////////////////////////////////
// Point

/// A single coordinate, or nothing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Point(Option<Coordinate>);

impl Point {
  pub fn new(coordinate: Coordinate) -> Point {
    Point(Some(coordinate))
  }

  pub fn empty() -> Point {
    Point(None)
  }

  pub fn coordinate(&self) -> Option<&Coordinate> {
    self.0.as_ref()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_none()
  }
}

impl From<Coordinate> for Point {
  fn from(coordinate: Coordinate) -> Point {
    Point::new(coordinate)
  }
}

///////////////////////////////////////////////////////////////////////////////
// LineString

/// An open or closed polyline. Empty, or at least two coordinates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineString(Vec<Coordinate>);

impl LineString {
  pub fn new(coordinates: Vec<Coordinate>) -> Result<LineString, Error> {
    let line = LineString(coordinates);
    line.validate()?;
    Ok(line)
  }

  pub fn new_unchecked(coordinates: Vec<Coordinate>) -> LineString {
    let line = LineString(coordinates);
    debug_assert_ok!(line.validate());
    line
  }

  pub fn validate(&self) -> Result<(), Error> {
    if self.0.len() == 1 {
      return Err(Error::InsufficientVertices {
        required: 2,
        actual: 1,
      });
    }
    Ok(())
  }

  pub fn coordinates(&self) -> &[Coordinate] {
    &self.0
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// First and last coordinate.
  pub fn endpoints(&self) -> Option<(&Coordinate, &Coordinate)> {
    Some((self.0.first()?, self.0.last()?))
  }

  pub fn is_closed(&self) -> bool {
    matches!(self.endpoints(), Some((start, end)) if start.equals_2d(end))
  }
}

///////////////////////////////////////////////////////////////////////////////
// LinearRing

/// A closed polyline: empty, or at least four coordinates with the first equal
/// to the last.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LinearRing(Vec<Coordinate>);

impl LinearRing {
  pub const MIN_VERTICES: usize = 4;

  pub fn new(coordinates: Vec<Coordinate>) -> Result<LinearRing, Error> {
    let ring = LinearRing(coordinates);
    ring.validate()?;
    Ok(ring)
  }

  pub fn new_unchecked(coordinates: Vec<Coordinate>) -> LinearRing {
    let ring = LinearRing(coordinates);
    debug_assert_ok!(ring.validate());
    ring
  }

  pub fn validate(&self) -> Result<(), Error> {
    let n = self.0.len();
    if n == 0 {
      return Ok(());
    }
    if n < Self::MIN_VERTICES {
      return Err(Error::InsufficientVertices {
        required: Self::MIN_VERTICES,
        actual: n,
      });
    }
    if !self.0[0].equals_2d(&self.0[n - 1]) {
      return Err(Error::RingNotClosed);
    }
    Ok(())
  }

  pub fn coordinates(&self) -> &[Coordinate] {
    &self.0
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// First (and last) coordinate.
  pub fn start(&self) -> Option<&Coordinate> {
    self.0.first()
  }

  #[must_use]
  pub fn reversed(&self) -> LinearRing {
    let mut coordinates = self.0.clone();
    coordinates.reverse();
    LinearRing(coordinates)
  }
}

///////////////////////////////////////////////////////////////////////////////
// Polygon

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
  shell: LinearRing,
  holes: Vec<LinearRing>,
}

impl Polygon {
  pub fn new(shell: LinearRing, holes: Vec<LinearRing>) -> Polygon {
    Polygon { shell, holes }
  }

  pub fn shell(&self) -> &LinearRing {
    &self.shell
  }

  pub fn holes(&self) -> &[LinearRing] {
    &self.holes
  }

  /// The shell followed by the holes.
  pub fn rings(&self) -> impl Iterator<Item = &LinearRing> + '_ {
    std::iter::once(&self.shell).chain(self.holes.iter())
  }

  pub fn is_empty(&self) -> bool {
    self.shell.is_empty()
  }
}

///////////////////////////////////////////////////////////////////////////////
// Geometry

/// A planar geometry. The variant is the geometry's type tag.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
  Point(Point),
  LineString(LineString),
  /// A ring that is not part of a polygon. Topologically it is a closed line.
  LinearRing(LinearRing),
  Polygon(Polygon),
  MultiPoint(Vec<Point>),
  MultiLineString(Vec<LineString>),
  MultiPolygon(Vec<Polygon>),
  GeometryCollection(Vec<Geometry>),
}

impl Geometry {
  /// Topological dimension. Collections report the highest dimension among
  /// their members, and `None` when they have no members.
  pub fn dimension(&self) -> Option<Dimension> {
    match self {
      Geometry::Point(_) | Geometry::MultiPoint(_) => Some(Dimension::Point),
      Geometry::LineString(_) | Geometry::LinearRing(_) | Geometry::MultiLineString(_) => {
        Some(Dimension::Line)
      }
      Geometry::Polygon(_) | Geometry::MultiPolygon(_) => Some(Dimension::Area),
      Geometry::GeometryCollection(geoms) => geoms.iter().filter_map(Geometry::dimension).max(),
    }
  }

  /// A collection is empty when all of its members are.
  pub fn is_empty(&self) -> bool {
    match self {
      Geometry::Point(pt) => pt.is_empty(),
      Geometry::LineString(line) => line.is_empty(),
      Geometry::LinearRing(ring) => ring.is_empty(),
      Geometry::Polygon(poly) => poly.is_empty(),
      Geometry::MultiPoint(pts) => pts.iter().all(Point::is_empty),
      Geometry::MultiLineString(lines) => lines.iter().all(LineString::is_empty),
      Geometry::MultiPolygon(polys) => polys.iter().all(Polygon::is_empty),
      Geometry::GeometryCollection(geoms) => geoms.iter().all(Geometry::is_empty),
    }
  }

  pub fn is_polygonal(&self) -> bool {
    matches!(self, Geometry::Polygon(_) | Geometry::MultiPolygon(_))
  }

  pub fn name(&self) -> &'static str {
    match self {
      Geometry::Point(_) => "Point",
      Geometry::LineString(_) => "LineString",
      Geometry::LinearRing(_) => "LinearRing",
      Geometry::Polygon(_) => "Polygon",
      Geometry::MultiPoint(_) => "MultiPoint",
      Geometry::MultiLineString(_) => "MultiLineString",
      Geometry::MultiPolygon(_) => "MultiPolygon",
      Geometry::GeometryCollection(_) => "GeometryCollection",
    }
  }
}

impl From<Point> for Geometry {
  fn from(pt: Point) -> Geometry {
    Geometry::Point(pt)
  }
}

impl From<LineString> for Geometry {
  fn from(line: LineString) -> Geometry {
    Geometry::LineString(line)
  }
}

impl From<LinearRing> for Geometry {
  fn from(ring: LinearRing) -> Geometry {
    Geometry::LinearRing(ring)
  }
}

impl From<Polygon> for Geometry {
  fn from(poly: Polygon) -> Geometry {
    Geometry::Polygon(poly)
  }
}
