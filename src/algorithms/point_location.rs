//! Point-on-segment, point-on-line and point-in-ring tests over raw
//! coordinates.
use super::RayCrossingCounter;
use crate::data::{Coordinate, CoordinateSequence, Location};
use crate::Orientation;

fn in_envelope(p: &Coordinate, p0: &Coordinate, p1: &Coordinate) -> bool {
  p.x >= p0.x.min(p1.x) && p.x <= p0.x.max(p1.x) && p.y >= p0.y.min(p1.y) && p.y <= p0.y.max(p1.y)
}

/// True iff `p` lies on the closed segment `p0`-`p1`. A zero-length segment
/// only contains its single point.
///
/// ```rust
/// # use rlocate::algorithms::point_location::is_on_segment;
/// # use rlocate::data::Coordinate;
/// let p0 = Coordinate::new(0.0, 0.0);
/// let p1 = Coordinate::new(4.0, 2.0);
/// assert!(is_on_segment(&Coordinate::new(2.0, 1.0), &p0, &p1));
/// assert!(!is_on_segment(&Coordinate::new(6.0, 3.0), &p0, &p1));
/// ```
pub fn is_on_segment(p: &Coordinate, p0: &Coordinate, p1: &Coordinate) -> bool {
  if !in_envelope(p, p0, p1) {
    return false;
  }
  if p.equals_2d(p0) {
    return true;
  }
  Orientation::new(p0, p1, p).is_colinear()
}

/// True iff `p` lies on any segment of the open polyline. A polyline with
/// fewer than two coordinates has no segments.
pub fn is_on_line(p: &Coordinate, line: &[Coordinate]) -> bool {
  is_on_line_seq(p, line)
}

/// Sequence flavour of [`is_on_line`].
pub fn is_on_line_seq<S>(p: &Coordinate, line: &S) -> bool
where
  S: CoordinateSequence + ?Sized,
{
  (1..line.len()).any(|i| is_on_segment(p, &line.get(i - 1), &line.get(i)))
}

/// Interior or Boundary of the ring.
pub fn is_in_ring(p: &Coordinate, ring: &[Coordinate]) -> bool {
  locate_in_ring(p, ring) != Location::Exterior
}

pub fn locate_in_ring(p: &Coordinate, ring: &[Coordinate]) -> Location {
  RayCrossingCounter::locate_point_in_ring(p, ring)
}
