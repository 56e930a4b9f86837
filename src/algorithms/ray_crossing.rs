use crate::data::{Coordinate, CoordinateSequence, Location};
use crate::Orientation;

/// Counts the crossings of a horizontal ray with the edges of a ring.
///
/// The ray starts at the query point and extends in the +x direction. Edges
/// straddle the ray using a half-open rule (an endpoint exactly on the ray
/// counts as above it), so a ray through a vertex is counted once. The side of
/// a straddling edge is decided by an exact orientation test, never by
/// computing the intersection.
///
/// Segments may be fed in any order. As soon as the point is found on a
/// segment the result is [`Location::Boundary`] and further segments are
/// irrelevant.
///
/// A point with a NaN ordinate is never on a segment and never crosses one.
#[derive(Debug, Clone)]
pub struct RayCrossingCounter {
  p: Coordinate,
  crossing_count: usize,
  is_point_on_segment: bool,
}

impl RayCrossingCounter {
  pub fn new(p: Coordinate) -> RayCrossingCounter {
    RayCrossingCounter {
      p,
      crossing_count: 0,
      is_point_on_segment: false,
    }
  }

  /// $O(n)$ Locate a point in a ring. The ring is implicitly closed: if the
  /// last coordinate differs from the first, the closing edge is still
  /// counted.
  ///
  /// ```rust
  /// # use rlocate::algorithms::RayCrossingCounter;
  /// # use rlocate::data::{Coordinate, Location};
  /// let ring = [
  ///   Coordinate::new(0.0, 0.0),
  ///   Coordinate::new(0.0, 20.0),
  ///   Coordinate::new(20.0, 20.0),
  ///   Coordinate::new(20.0, 0.0),
  /// ];
  /// let p = Coordinate::new(10.0, 10.0);
  /// assert_eq!(RayCrossingCounter::locate_point_in_ring(&p, &ring), Location::Interior);
  /// ```
  pub fn locate_point_in_ring(p: &Coordinate, ring: &[Coordinate]) -> Location {
    RayCrossingCounter::locate_point_in_ring_seq(p, ring)
  }

  /// Sequence flavour of [`RayCrossingCounter::locate_point_in_ring`]. Extra
  /// ordinates of the sequence are ignored.
  pub fn locate_point_in_ring_seq<S>(p: &Coordinate, ring: &S) -> Location
  where
    S: CoordinateSequence + ?Sized,
  {
    let mut counter = RayCrossingCounter::new(*p);
    let n = ring.len();
    for i in 0..n {
      let p1 = ring.get(i);
      let p2 = ring.get((i + 1) % n);
      counter.count_segment(&p1, &p2);
      if counter.is_on_segment() {
        return counter.location();
      }
    }
    counter.location()
  }

  /// Account for the segment `p1`-`p2`.
  pub fn count_segment(&mut self, p1: &Coordinate, p2: &Coordinate) {
    let p = &self.p;
    // Repeated vertices never change the count.
    if p1.equals_2d(p2) || p.is_nan() || p1.is_nan() || p2.is_nan() {
      return;
    }
    // Entirely to the left of the point.
    if p1.x < p.x && p2.x < p.x {
      return;
    }
    if p.equals_2d(p1) || p.equals_2d(p2) {
      self.is_point_on_segment = true;
      return;
    }
    // Horizontal segment on the ray's line.
    if p1.y == p.y && p2.y == p.y {
      let min_x = p1.x.min(p2.x);
      let max_x = p1.x.max(p2.x);
      if min_x <= p.x && p.x <= max_x {
        self.is_point_on_segment = true;
      }
      return;
    }
    // Non-horizontal segment straddling the ray. The upper endpoint is
    // strictly above, the lower one is below or on the ray.
    if (p1.y > p.y && p2.y <= p.y) || (p2.y > p.y && p1.y <= p.y) {
      let mut orient = Orientation::new(p1, p2, p);
      if orient.is_colinear() {
        self.is_point_on_segment = true;
        return;
      }
      // Normalize to an upward segment.
      if p2.y < p1.y {
        orient = orient.reverse();
      }
      // The point is left of the upward segment, so the ray crosses it.
      if orient.is_ccw() {
        self.crossing_count += 1;
      }
    }
  }

  pub fn is_on_segment(&self) -> bool {
    self.is_point_on_segment
  }

  pub fn crossing_count(&self) -> usize {
    self.crossing_count
  }

  /// Location of the point given the segments counted so far. Only correct
  /// once every segment of the ring has been counted, or as soon as
  /// [`RayCrossingCounter::is_on_segment`] is true.
  pub fn location(&self) -> Location {
    if self.is_point_on_segment {
      Location::Boundary
    } else if self.crossing_count % 2 == 1 {
      Location::Interior
    } else {
      Location::Exterior
    }
  }

  /// Interior or Boundary.
  pub fn is_point_in_polygon(&self) -> bool {
    self.location() != Location::Exterior
  }
}
