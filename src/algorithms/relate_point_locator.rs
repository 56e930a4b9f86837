use std::collections::HashSet;
use std::ptr;
use std::sync::OnceLock;

use super::linear_boundary::{key, Key};
use super::point_location::is_on_line;
use super::point_locator::locate_in_polygon;
use super::{AdjacentEdgeLocator, BoundaryNodeRule, LinearBoundary};
use crate::data::{Coordinate, DimensionLocation, Geometry, Location, Polygon};

/// Locates coordinates against a geometry and reports which dimension of
/// component they hit.
///
/// Components are searched by dimension: areas first, then lines, then
/// points. The first dimension that does not report Exterior decides, so a
/// coordinate on a polygon boundary and on a line interior is reported as
/// [`DimensionLocation::AreaBoundary`].
///
/// The geometry is borrowed for the lifetime of the locator. Queries only
/// take `&self` and the locator is `Send + Sync`.
#[derive(Debug)]
pub struct RelatePointLocator<'a> {
  geom: &'a Geometry,
  points: HashSet<Key>,
  lines: Vec<&'a [Coordinate]>,
  polygons: Vec<&'a Polygon>,
  line_boundary: LinearBoundary,
  adjacent: OnceLock<AdjacentEdgeLocator>,
}

impl<'a> RelatePointLocator<'a> {
  pub fn new(geom: &'a Geometry, rule: BoundaryNodeRule) -> RelatePointLocator<'a> {
    let mut points = HashSet::new();
    let mut lines = Vec::new();
    let mut polygons = Vec::new();
    extract(geom, &mut points, &mut lines, &mut polygons);
    let line_boundary = LinearBoundary::new(lines.iter().copied(), rule);
    RelatePointLocator {
      geom,
      points,
      lines,
      polygons,
      line_boundary,
      adjacent: OnceLock::new(),
    }
  }

  pub fn geometry(&self) -> &'a Geometry {
    self.geom
  }

  pub fn rule(&self) -> BoundaryNodeRule {
    self.line_boundary.rule()
  }

  /// Does the linear part of the geometry have a non-empty boundary under the
  /// rule? Points and polygons never add to it.
  pub fn has_boundary(&self) -> bool {
    self.line_boundary.has_boundary()
  }

  pub fn locate(&self, p: &Coordinate) -> Location {
    self.locate_with_dim(p).location()
  }

  pub fn locate_with_dim(&self, p: &Coordinate) -> DimensionLocation {
    self.compute_dim_location(p, None)
  }

  /// Locate `p`, known to be an endpoint of a line from another geometry.
  ///
  /// If `p` is not in an area it is taken to lie on this geometry's lines,
  /// and only the line boundary decides between boundary and interior.
  pub fn locate_line_end_with_dim(&self, p: &Coordinate) -> DimensionLocation {
    let area = self.locate_on_polygons(p, None);
    if !area.is_exterior() {
      return DimensionLocation::area(area);
    }
    if self.line_boundary.is_boundary(p) {
      DimensionLocation::LineBoundary
    } else {
      DimensionLocation::LineInterior
    }
  }

  /// Locate a node of an edge arrangement built from this geometry.
  ///
  /// `excluding` is the coordinate list of the edge the node was reached
  /// through, compared by address. If it is one of the geometry's lines its
  /// endpoints are removed from the valence and the line itself is ignored.
  /// If it is a ring of a polygon, that polygon reports Boundary without a
  /// containment test. Any other slice is ignored.
  pub fn locate_node(&self, p: &Coordinate, excluding: Option<&[Coordinate]>) -> Location {
    self.locate_node_with_dim(p, excluding).location()
  }

  pub fn locate_node_with_dim(
    &self,
    p: &Coordinate,
    excluding: Option<&[Coordinate]>,
  ) -> DimensionLocation {
    self.compute_dim_location(p, excluding)
  }

  fn compute_dim_location(
    &self,
    p: &Coordinate,
    excluding: Option<&[Coordinate]>,
  ) -> DimensionLocation {
    let area = self.locate_on_polygons(p, excluding);
    if !area.is_exterior() {
      return DimensionLocation::area(area);
    }
    let line = self.locate_on_lines(p, excluding);
    if !line.is_exterior() {
      return DimensionLocation::line(line);
    }
    DimensionLocation::point(self.locate_on_points(p))
  }

  fn locate_on_points(&self, p: &Coordinate) -> Location {
    if !p.is_nan() && self.points.contains(&key(p)) {
      Location::Interior
    } else {
      Location::Exterior
    }
  }

  fn locate_on_lines(&self, p: &Coordinate, excluding: Option<&[Coordinate]>) -> Location {
    let excluded = excluding.filter(|e| self.lines.iter().any(|line| ptr::eq(*line, *e)));
    let mut valence = self.line_boundary.valence(p);
    if let Some(line) = excluded {
      let touches = line.first().map_or(0, |c| usize::from(c.equals_2d(p)))
        + line.last().map_or(0, |c| usize::from(c.equals_2d(p)));
      valence = valence.saturating_sub(touches);
      tracing::trace!(%p, valence, touches, "excluded line from node");
    }
    if valence > 0 {
      return if self.rule().is_in_boundary(valence) {
        Location::Boundary
      } else {
        Location::Interior
      };
    }
    let on_line = self
      .lines
      .iter()
      .filter(|line| !excluded.is_some_and(|e| ptr::eq(**line, e)))
      .any(|line| is_on_line(p, line));
    if on_line {
      Location::Interior
    } else {
      Location::Exterior
    }
  }

  fn locate_on_polygons(&self, p: &Coordinate, excluding: Option<&[Coordinate]>) -> Location {
    let mut boundaries = 0;
    let mut interior = false;
    for poly in &self.polygons {
      let owns_excluded =
        excluding.is_some_and(|e| poly.rings().any(|ring| ptr::eq(ring.coordinates(), e)));
      let location = if owns_excluded {
        Location::Boundary
      } else {
        locate_in_polygon(p, poly)
      };
      match location {
        Location::Boundary => boundaries += 1,
        Location::Interior => interior = true,
        _ => {}
      }
    }
    match boundaries {
      0 if interior => Location::Interior,
      0 => Location::Exterior,
      1 => Location::Boundary,
      _ => {
        let location = self.adjacent().locate(p);
        tracing::debug!(%p, boundaries, ?location, "resolved node shared by polygons");
        location
      }
    }
  }

  fn adjacent(&self) -> &AdjacentEdgeLocator {
    self.adjacent.get_or_init(|| AdjacentEdgeLocator::new(self.geom))
  }
}

fn extract<'a>(
  geom: &'a Geometry,
  points: &mut HashSet<Key>,
  lines: &mut Vec<&'a [Coordinate]>,
  polygons: &mut Vec<&'a Polygon>,
) {
  match geom {
    Geometry::Point(pt) => points.extend(pt.coordinate().filter(|c| !c.is_nan()).map(key)),
    Geometry::MultiPoint(pts) => {
      for pt in pts {
        points.extend(pt.coordinate().filter(|c| !c.is_nan()).map(key));
      }
    }
    Geometry::LineString(line) if !line.is_empty() => lines.push(line.coordinates()),
    Geometry::LinearRing(ring) if !ring.is_empty() => lines.push(ring.coordinates()),
    Geometry::MultiLineString(members) => lines.extend(
      members
        .iter()
        .filter(|line| !line.is_empty())
        .map(|line| line.coordinates()),
    ),
    Geometry::Polygon(poly) if !poly.is_empty() => polygons.push(poly),
    Geometry::MultiPolygon(members) => {
      polygons.extend(members.iter().filter(|poly| !poly.is_empty()))
    }
    Geometry::GeometryCollection(geoms) => {
      for g in geoms {
        extract(g, points, lines, polygons);
      }
    }
    Geometry::LineString(_) | Geometry::LinearRing(_) | Geometry::Polygon(_) => {}
  }
}
