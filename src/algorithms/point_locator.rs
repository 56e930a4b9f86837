use super::point_location::{is_on_line, locate_in_ring};
use super::{AdjacentEdgeLocator, BoundaryNodeRule};
use crate::data::{Coordinate, Geometry, Location, Point, Polygon};

/// Locates coordinates relative to arbitrary geometries.
///
/// Collections merge the answers of their members with the precedence
/// Boundary > Interior > Exterior. Line endpoints are counted across all
/// linear members before the [`BoundaryNodeRule`] is applied, and a
/// coordinate on the boundary of two or more polygonal members is resolved by
/// an [`AdjacentEdgeLocator`], so polygons that share edges behave like their
/// union.
///
/// `PointLocator` keeps no state about the geometry. Each query on a shared
/// polygon boundary builds a fresh [`AdjacentEdgeLocator`], which copies every
/// polygon of the geometry. For repeated queries against one geometry use a
/// [`RelatePointLocator`](super::RelatePointLocator), which builds it once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointLocator {
  rule: BoundaryNodeRule,
}

impl PointLocator {
  pub fn new(rule: BoundaryNodeRule) -> PointLocator {
    PointLocator { rule }
  }

  pub fn rule(&self) -> BoundaryNodeRule {
    self.rule
  }

  /// Does `p` touch `geom` at all?
  pub fn intersects(&self, p: &Coordinate, geom: &Geometry) -> bool {
    !self.locate(p, geom).is_exterior()
  }

  /// $O(n)$ where $n$ is the number of vertices in `geom`, or $O(n \log n)$
  /// when several polygons share a boundary through `p`.
  ///
  /// ```rust
  /// # use rlocate::algorithms::{BoundaryNodeRule, PointLocator};
  /// # use rlocate::data::*;
  /// let triangle = LineString::new(vec![
  ///   Coordinate::new(10.0, 10.0),
  ///   Coordinate::new(10.0, 20.0),
  ///   Coordinate::new(20.0, 10.0),
  ///   Coordinate::new(10.0, 10.0),
  /// ])?;
  /// let geom = Geometry::LineString(triangle);
  /// let start = Coordinate::new(10.0, 10.0);
  /// let mod2 = PointLocator::new(BoundaryNodeRule::Mod2);
  /// let endpoint = PointLocator::new(BoundaryNodeRule::Endpoint);
  /// assert_eq!(mod2.locate(&start, &geom), Location::Interior);
  /// assert_eq!(endpoint.locate(&start, &geom), Location::Boundary);
  /// # Ok::<(), rlocate::Error>(())
  /// ```
  pub fn locate(&self, p: &Coordinate, geom: &Geometry) -> Location {
    if geom.is_empty() {
      return Location::Exterior;
    }
    match geom {
      Geometry::Point(pt) => locate_on_point(p, pt),
      Geometry::LineString(line) => self.locate_on_line(p, line.coordinates()),
      Geometry::LinearRing(ring) => self.locate_on_line(p, ring.coordinates()),
      Geometry::Polygon(poly) => locate_in_polygon(p, poly),
      Geometry::MultiPoint(_)
      | Geometry::MultiLineString(_)
      | Geometry::MultiPolygon(_)
      | Geometry::GeometryCollection(_) => self.locate_in_collection(p, geom),
    }
  }

  fn locate_on_line(&self, p: &Coordinate, line: &[Coordinate]) -> Location {
    let mut tally = LineTally::default();
    tally.add(p, line);
    tally.location(self.rule)
  }

  fn locate_in_collection(&self, p: &Coordinate, geom: &Geometry) -> Location {
    let mut tally = CollectionTally::default();
    tally.visit(p, geom);

    let mut polygonal = tally.polygonal;
    if tally.polygonal_boundaries > 1 {
      let adjacent = AdjacentEdgeLocator::new(geom).locate(p);
      tracing::trace!(
        %p,
        boundaries = tally.polygonal_boundaries,
        ?adjacent,
        "shared polygon boundary"
      );
      polygonal = adjacent;
    }
    let location = polygonal
      .merge(tally.points)
      .merge(tally.lines.location(self.rule));
    match location {
      Location::None => Location::Exterior,
      location => location,
    }
  }
}

fn locate_on_point(p: &Coordinate, pt: &Point) -> Location {
  match pt.coordinate() {
    Some(c) if c.equals_2d(p) => Location::Interior,
    _ => Location::Exterior,
  }
}

/// Shell first, then holes. Inside a hole is outside the polygon.
pub(crate) fn locate_in_polygon(p: &Coordinate, poly: &Polygon) -> Location {
  if poly.is_empty() {
    return Location::Exterior;
  }
  match locate_in_ring(p, poly.shell().coordinates()) {
    Location::Interior => {}
    location => return location,
  }
  for hole in poly.holes() {
    match locate_in_ring(p, hole.coordinates()) {
      Location::Boundary => return Location::Boundary,
      Location::Interior => return Location::Exterior,
      _ => {}
    }
  }
  Location::Interior
}

///////////////////////////////////////////////////////////////////////////////
// Tallies

// Endpoint touches and interior hits over any number of lines.
#[derive(Debug, Default)]
struct LineTally {
  valence: usize,
  on_interior: bool,
}

impl LineTally {
  fn add(&mut self, p: &Coordinate, line: &[Coordinate]) {
    let (start, end) = match (line.first(), line.last()) {
      (Some(start), Some(end)) => (start, end),
      _ => return,
    };
    let touches = usize::from(start.equals_2d(p)) + usize::from(end.equals_2d(p));
    if touches > 0 {
      self.valence += touches;
    } else if is_on_line(p, line) {
      self.on_interior = true;
    }
  }

  fn location(&self, rule: BoundaryNodeRule) -> Location {
    if self.valence > 0 && rule.is_in_boundary(self.valence) {
      Location::Boundary
    } else if self.valence > 0 || self.on_interior {
      Location::Interior
    } else {
      Location::Exterior
    }
  }
}

#[derive(Debug)]
struct CollectionTally {
  points: Location,
  lines: LineTally,
  polygonal: Location,
  polygonal_boundaries: usize,
}

impl Default for CollectionTally {
  fn default() -> CollectionTally {
    CollectionTally {
      points: Location::None,
      lines: LineTally::default(),
      polygonal: Location::None,
      polygonal_boundaries: 0,
    }
  }
}

impl CollectionTally {
  fn visit(&mut self, p: &Coordinate, geom: &Geometry) {
    match geom {
      Geometry::Point(pt) => self.add_point(p, pt),
      Geometry::MultiPoint(pts) => pts.iter().for_each(|pt| self.add_point(p, pt)),
      Geometry::LineString(line) => self.lines.add(p, line.coordinates()),
      Geometry::LinearRing(ring) => self.lines.add(p, ring.coordinates()),
      Geometry::MultiLineString(lines) => {
        for line in lines {
          self.lines.add(p, line.coordinates());
        }
      }
      Geometry::Polygon(poly) => self.add_polygon(p, poly),
      Geometry::MultiPolygon(polys) => polys.iter().for_each(|poly| self.add_polygon(p, poly)),
      Geometry::GeometryCollection(geoms) => geoms.iter().for_each(|g| self.visit(p, g)),
    }
  }

  fn add_point(&mut self, p: &Coordinate, pt: &Point) {
    self.points = self.points.merge(locate_on_point(p, pt));
  }

  fn add_polygon(&mut self, p: &Coordinate, poly: &Polygon) {
    let location = locate_in_polygon(p, poly);
    if location == Location::Boundary {
      self.polygonal_boundaries += 1;
    }
    self.polygonal = self.polygonal.merge(location);
  }
}
