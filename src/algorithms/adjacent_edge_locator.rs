//! Location of a coordinate against the union of several polygons.
//!
//! Testing each polygon on its own cannot tell whether a coordinate on the
//! boundary of two polygons is inside their union: that depends on whether
//! the polygons together fill every direction around it. The locator
//! collects the ring corners incident to the coordinate, splits the
//! neighbourhood into angular sectors at every incident edge, and checks
//! that each sector is covered by the interior of some polygon.
use std::cmp::Ordering;

use super::point_location::{is_on_line, is_on_segment, locate_in_ring};
use super::point_locator::locate_in_polygon;
use super::polygon_node_topology::{compare_angle, is_interior_segment};
use crate::data::{Coordinate, Geometry, LinearRing, Location, Polygon};
use crate::Orientation;

/// Locates coordinates against the union of the polygonal components of a
/// geometry. Points and lines in the geometry are ignored.
///
/// Only polygons with a ring through the coordinate take part in the sector
/// test. A polygon that merely contains the coordinate does not hide another
/// polygon's boundary.
///
/// ```rust
/// # use rlocate::algorithms::AdjacentEdgeLocator;
/// # use rlocate::data::*;
/// let square = |pts: [(f64, f64); 5]| -> Result<Polygon, rlocate::Error> {
///   let ring = LinearRing::new(pts.iter().map(|&p| Coordinate::from(p)).collect())?;
///   Ok(Polygon::new(ring, vec![]))
/// };
/// let geom = Geometry::MultiPolygon(vec![
///   square([(1., 9.), (5., 9.), (5., 1.), (1., 1.), (1., 9.)])?,
///   square([(9., 9.), (9., 1.), (5., 1.), (5., 9.), (9., 9.)])?,
/// ]);
/// let locator = AdjacentEdgeLocator::new(&geom);
/// assert_eq!(locator.locate(&Coordinate::new(5., 5.)), Location::Interior);
/// assert_eq!(locator.locate(&Coordinate::new(5., 9.)), Location::Boundary);
/// # Ok::<(), rlocate::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct AdjacentEdgeLocator {
  // Shells clockwise, holes counter-clockwise: the interior is always on the
  // right of a ring.
  polygons: Vec<Polygon>,
  // Shells without area. They have no interior but still have a boundary.
  flat_shells: Vec<LinearRing>,
}

impl AdjacentEdgeLocator {
  pub fn new(geom: &Geometry) -> AdjacentEdgeLocator {
    let mut locator = AdjacentEdgeLocator {
      polygons: Vec::new(),
      flat_shells: Vec::new(),
    };
    locator.collect(geom);
    locator
  }

  pub fn locate(&self, p: &Coordinate) -> Location {
    let touching: Vec<PolygonNode> = self
      .polygons
      .iter()
      .filter_map(|poly| PolygonNode::new(p, poly))
      .collect();
    // A flat shell through p covers no sector, so p stays on the boundary.
    let on_flat_shell = self
      .flat_shells
      .iter()
      .any(|shell| is_on_line(p, shell.coordinates()));
    if on_flat_shell && touching.is_empty() {
      return Location::Boundary;
    }
    // Polygons that do not touch p only matter when none does. A boundary
    // always wins over an interior.
    if touching.is_empty() {
      let inside = self
        .polygons
        .iter()
        .any(|poly| locate_in_polygon(p, poly) == Location::Interior);
      return if inside {
        Location::Interior
      } else {
        Location::Exterior
      };
    }

    let mut directions: Vec<Coordinate> = touching
      .iter()
      .flat_map(|node| node.sections())
      .flat_map(|s| [s.prev, s.next])
      .collect();
    directions.sort_by(|a, b| compare_angle(p, a, b));
    directions.dedup_by(|a, b| compare_angle(p, a, b) == Ordering::Equal);
    if directions.is_empty() {
      // Only spikes touch p.
      return Location::Boundary;
    }

    // Sector i runs counter-clockwise from directions[i] to the next one.
    let uncovered = directions
      .iter()
      .find(|start| !touching.iter().any(|node| node.covers(p, start)));
    let location = match uncovered {
      Some(_) => Location::Boundary,
      None => Location::Interior,
    };
    tracing::debug!(
      %p,
      polygons = touching.len(),
      sectors = directions.len(),
      gap = ?uncovered,
      ?location,
      "located shared vertex"
    );
    location
  }
}

impl AdjacentEdgeLocator {
  fn collect(&mut self, geom: &Geometry) {
    match geom {
      Geometry::Polygon(poly) => self.add_polygon(poly),
      Geometry::MultiPolygon(polys) => polys.iter().for_each(|poly| self.add_polygon(poly)),
      Geometry::GeometryCollection(geoms) => geoms.iter().for_each(|g| self.collect(g)),
      Geometry::Point(_)
      | Geometry::LineString(_)
      | Geometry::LinearRing(_)
      | Geometry::MultiPoint(_)
      | Geometry::MultiLineString(_) => {}
    }
  }

  fn add_polygon(&mut self, poly: &Polygon) {
    match oriented_polygon(poly) {
      Some(oriented) => self.polygons.push(oriented),
      None if !poly.is_empty() => self.flat_shells.push(poly.shell().clone()),
      None => {}
    }
  }
}

// Holes without area are dropped. A polygon whose shell has no area has no
// interior at all.
fn oriented_polygon(poly: &Polygon) -> Option<Polygon> {
  let shell = oriented_ring(poly.shell(), Orientation::ClockWise)?;
  let holes = poly
    .holes()
    .iter()
    .filter_map(|hole| oriented_ring(hole, Orientation::CounterClockWise))
    .collect();
  Some(Polygon::new(shell, holes))
}

fn oriented_ring(ring: &LinearRing, orientation: Orientation) -> Option<LinearRing> {
  match Orientation::of_ring(ring.coordinates()) {
    Orientation::CoLinear => None,
    o if o == orientation => Some(ring.clone()),
    _ => Some(ring.reversed()),
  }
}

///////////////////////////////////////////////////////////////////////////////
// Node sections

/// A ring corner `prev -> p -> next`. The interior of the ring sweeps
/// counter-clockwise from the direction of `prev` to the direction of `next`.
#[derive(Debug, Clone, Copy)]
struct Section {
  prev: Coordinate,
  next: Coordinate,
}

impl Section {
  fn is_spike(&self, p: &Coordinate) -> bool {
    compare_angle(p, &self.prev, &self.next) == Ordering::Equal
  }

  // Is the sector starting at `start` inside the corner? No incident
  // direction lies strictly inside a sector, so its start decides.
  fn covers(&self, p: &Coordinate, start: &Coordinate) -> bool {
    if compare_angle(p, start, &self.prev) == Ordering::Equal {
      true
    } else if compare_angle(p, start, &self.next) == Ordering::Equal {
      false
    } else {
      is_interior_segment(p, &self.prev, &self.next, start)
    }
  }
}

// Corners of one ring at p: one per vertex equal to p and one per segment
// passing through p. Zero-length segments are skipped.
fn ring_sections(p: &Coordinate, ring: &[Coordinate]) -> Vec<Section> {
  let mut sections = Vec::new();
  if ring.len() < LinearRing::MIN_VERTICES {
    return sections;
  }
  let n = ring.len() - 1;
  for i in 0..n {
    let p0 = &ring[i];
    let next = &ring[i + 1];
    if p0.equals_2d(next) {
      continue;
    }
    if p0.equals_2d(p) {
      if let Some(prev) = previous_distinct(ring, i) {
        sections.push(Section {
          prev: *prev,
          next: *next,
        });
      }
    } else if !next.equals_2d(p) && is_on_segment(p, p0, next) {
      sections.push(Section {
        prev: *p0,
        next: *next,
      });
    }
  }
  sections
}

// Walks backwards around the closed ring. The last coordinate repeats the
// first and is never visited.
fn previous_distinct(ring: &[Coordinate], i: usize) -> Option<&Coordinate> {
  let n = ring.len() - 1;
  let pt = &ring[i];
  let mut j = i;
  loop {
    j = if j == 0 { n - 1 } else { j - 1 };
    if j == i {
      return None;
    }
    if !ring[j].equals_2d(pt) {
      return Some(&ring[j]);
    }
  }
}

// How one polygon fills the neighbourhood of p.
#[derive(Debug)]
enum ShellCover {
  // The shell passes through p. Spikes are already removed.
  Corners(Vec<Section>),
  // p is strictly inside the shell.
  Inside,
  Outside,
}

#[derive(Debug)]
struct PolygonNode {
  shell: ShellCover,
  // Every hole corner at p must be satisfied: the polygon's material is the
  // outside of each hole.
  holes: Vec<Section>,
}

impl PolygonNode {
  // None if no ring of the polygon touches p.
  fn new(p: &Coordinate, poly: &Polygon) -> Option<PolygonNode> {
    let shell_sections = ring_sections(p, poly.shell().coordinates());
    let holes: Vec<Section> = poly
      .holes()
      .iter()
      .flat_map(|hole| ring_sections(p, hole.coordinates()))
      .collect();
    if shell_sections.is_empty() && holes.is_empty() {
      return None;
    }
    let shell = if !shell_sections.is_empty() {
      ShellCover::Corners(
        shell_sections
          .into_iter()
          .filter(|s| !s.is_spike(p))
          .collect(),
      )
    } else if locate_in_ring(p, poly.shell().coordinates()) == Location::Interior {
      ShellCover::Inside
    } else {
      ShellCover::Outside
    };
    let holes = holes.into_iter().filter(|s| !s.is_spike(p)).collect();
    Some(PolygonNode { shell, holes })
  }

  fn sections(&self) -> impl Iterator<Item = &Section> + '_ {
    let shell: &[Section] = match &self.shell {
      ShellCover::Corners(sections) => sections,
      ShellCover::Inside | ShellCover::Outside => &[],
    };
    shell.iter().chain(self.holes.iter())
  }

  fn covers(&self, p: &Coordinate, start: &Coordinate) -> bool {
    let in_shell = match &self.shell {
      ShellCover::Corners(sections) => sections.iter().any(|s| s.covers(p, start)),
      ShellCover::Inside => true,
      ShellCover::Outside => false,
    };
    in_shell && self.holes.iter().all(|s| s.covers(p, start))
  }
}
