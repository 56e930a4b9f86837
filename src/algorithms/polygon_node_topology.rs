//! Angular reasoning about edges that meet at a node.
//!
//! Directions from a node are ordered counter-clockwise starting at the +x
//! axis. The order is decided in two exact steps: each direction is first
//! bucketed into one of eight octants using only comparisons of coordinate
//! differences, and directions in the same octant are then ordered by an
//! exact orientation test. No angle is ever computed, so the order stays
//! correct at any coordinate magnitude.
use std::cmp::Ordering;

use crate::data::Coordinate;
use crate::Orientation;

/// `a - b` as an unevaluated sum `hi + lo`, exactly.
fn two_diff(a: f64, b: f64) -> (f64, f64) {
  let hi = a - b;
  let b_virt = a - hi;
  let a_virt = hi + b_virt;
  let b_round = b_virt - b;
  let a_round = a - a_virt;
  (hi, a_round + b_round)
}

// A coordinate difference kept exact.
#[derive(Debug, Clone, Copy)]
struct Delta {
  hi: f64,
  lo: f64,
}

impl Delta {
  fn new(a: f64, b: f64) -> Delta {
    let (hi, lo) = two_diff(a, b);
    Delta { hi, lo }
  }

  // Rounding never flips the sign of a difference, and it is zero only if
  // the operands are equal.
  fn is_positive(self) -> bool {
    self.hi > 0.0
  }

  fn is_negative(self) -> bool {
    self.hi < 0.0
  }

  fn is_zero(self) -> bool {
    self.hi == 0.0
  }

  // Compare absolute values. Rounding is monotonic, so the rounded parts
  // decide unless they tie, in which case the exact remainders do.
  fn cmp_abs(self, other: Delta) -> Ordering {
    let signed_lo = |d: Delta| if d.hi < 0.0 { -d.lo } else { d.lo };
    match self.hi.abs().total_cmp(&other.hi.abs()) {
      Ordering::Equal => signed_lo(self).total_cmp(&signed_lo(other)),
      ord => ord,
    }
  }
}

/// The octant of the direction from `origin` to `p`, numbered 0 to 7
/// counter-clockwise. Octant `k` holds the angles in `[45k, 45(k+1))` degrees.
///
/// # Panics
///
/// Panics if `p` equals `origin`: a zero vector has no direction.
pub fn octant(origin: &Coordinate, p: &Coordinate) -> u8 {
  let dx = Delta::new(p.x, origin.x);
  let dy = Delta::new(p.y, origin.y);
  assert!(
    !(dx.is_zero() && dy.is_zero()),
    "Cannot compute the octant of a zero-length direction at {}",
    origin
  );
  let steeper = |a: Delta, b: Delta| a.cmp_abs(b) == Ordering::Less;
  if dx.is_positive() && !dy.is_negative() {
    if steeper(dy, dx) {
      0
    } else {
      1
    }
  } else if !dx.is_positive() && dy.is_positive() {
    if steeper(dx, dy) {
      2
    } else {
      3
    }
  } else if dx.is_negative() && !dy.is_positive() {
    if steeper(dy, dx) {
      4
    } else {
      5
    }
  } else if steeper(dx, dy) {
    6
  } else {
    7
  }
}

/// Compare the angles of the directions `origin -> p` and `origin -> q`,
/// measured counter-clockwise from the +x axis. Collinear directions pointing
/// the same way compare equal.
///
/// # Panics
///
/// Panics if either point equals `origin`.
pub fn compare_angle(origin: &Coordinate, p: &Coordinate, q: &Coordinate) -> Ordering {
  let octant_p = octant(origin, p);
  let octant_q = octant(origin, q);
  match octant_p.cmp(&octant_q) {
    Ordering::Equal => {}
    ord => return ord,
  }
  // Same octant, so the directions are less than 45 degrees apart and the
  // turn direction decides.
  match Orientation::new(origin, q, p) {
    Orientation::CounterClockWise => Ordering::Greater,
    Orientation::ClockWise => Ordering::Less,
    Orientation::CoLinear => Ordering::Equal,
  }
}

/// True if the angle of `origin -> p` is greater than that of `origin -> q`.
pub fn is_angle_greater(origin: &Coordinate, p: &Coordinate, q: &Coordinate) -> bool {
  compare_angle(origin, p, q) == Ordering::Greater
}

// Some(true) if p lies strictly between e0 and e1 (with e0 < e1),
// Some(false) if strictly outside, None if collinear with either.
fn compare_between(
  origin: &Coordinate,
  p: &Coordinate,
  e0: &Coordinate,
  e1: &Coordinate,
) -> Option<bool> {
  let comp0 = compare_angle(origin, p, e0);
  if comp0 == Ordering::Equal {
    return None;
  }
  let comp1 = compare_angle(origin, p, e1);
  if comp1 == Ordering::Equal {
    return None;
  }
  Some(comp0 == Ordering::Greater && comp1 == Ordering::Less)
}

/// Do the edge pairs `a0-origin-a1` and `b0-origin-b1` cross at `origin`?
///
/// They cross iff `b0` and `b1` fall on different sides of the angular split
/// made by `a0` and `a1`. If any `b` direction is collinear with an `a`
/// direction the edges touch without crossing.
///
/// # Panics
///
/// Panics if any of the points equals `origin`.
pub fn is_crossing(
  origin: &Coordinate,
  a0: &Coordinate,
  a1: &Coordinate,
  b0: &Coordinate,
  b1: &Coordinate,
) -> bool {
  let (a_lo, a_hi) = if is_angle_greater(origin, a0, a1) {
    (a1, a0)
  } else {
    (a0, a1)
  };
  match (
    compare_between(origin, b0, a_lo, a_hi),
    compare_between(origin, b1, a_lo, a_hi),
  ) {
    (Some(between0), Some(between1)) => between0 != between1,
    _ => false,
  }
}

/// Does the segment `origin -> b` lie in the interior of the ring corner
/// `a0 -> origin -> a1`?
///
/// The ring interior is on the right of the corner (a clockwise shell or a
/// counter-clockwise hole), so the interior wedge sweeps counter-clockwise
/// from the direction of `a0` to the direction of `a1`. `b` must not be
/// collinear with either corner edge.
///
/// # Panics
///
/// Panics if any of the points equals `origin`.
pub fn is_interior_segment(
  origin: &Coordinate,
  a0: &Coordinate,
  a1: &Coordinate,
  b: &Coordinate,
) -> bool {
  let (a_lo, a_hi, is_interior_between) = if is_angle_greater(origin, a0, a1) {
    (a1, a0, false)
  } else {
    (a0, a1, true)
  };
  let is_between = is_angle_greater(origin, b, a_lo) && !is_angle_greater(origin, b, a_hi);
  is_between == is_interior_between
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;
  use crate::testing::*;

  use num_rational::BigRational;
  use num_traits::{Signed, Zero};
  use proptest::prelude::*;
  use test_strategy::proptest;

  fn c(x: f64, y: f64) -> Coordinate {
    Coordinate::new(x, y)
  }

  // Reference order using exact rational arithmetic: the upper half-plane
  // (including the +x axis) comes first, then the cross product decides.
  fn exact_compare(origin: &Coordinate, p: &Coordinate, q: &Coordinate) -> Ordering {
    let r = |v: f64| BigRational::from_float(v).unwrap();
    let (px, py) = (r(p.x) - r(origin.x), r(p.y) - r(origin.y));
    let (qx, qy) = (r(q.x) - r(origin.x), r(q.y) - r(origin.y));
    let half = |x: &BigRational, y: &BigRational| {
      if y.is_positive() || (y.is_zero() && x.is_positive()) {
        0
      } else {
        1
      }
    };
    match half(&px, &py).cmp(&half(&qx, &qy)) {
      Ordering::Equal => {}
      ord => return ord,
    }
    let cross = &px * &qy - &py * &qx;
    if cross.is_zero() {
      Ordering::Equal
    } else if cross.is_positive() {
      Ordering::Less
    } else {
      Ordering::Greater
    }
  }

  #[test]
  fn octant_boundaries() {
    let o = c(0., 0.);
    let expected = [
      ((1., 0.), 0),
      ((2., 1.), 0),
      ((1., 1.), 1),
      ((0., 1.), 2),
      ((-1., 1.), 3),
      ((-1., 0.), 4),
      ((-1., -1.), 5),
      ((0., -1.), 6),
      ((1., -1.), 7),
      ((2., -1.), 7),
    ];
    for ((x, y), oct) in expected {
      assert_eq!(octant(&o, &c(x, y)), oct, "({} {})", x, y);
    }
  }

  // 0.3 - 0.1 and 0.5 - 0.3 round to neighbouring doubles; only the exact
  // remainders tell which side of the diagonal the direction is on.
  #[test]
  fn octant_near_diagonal_is_exact() {
    let r = |v: f64| BigRational::from_float(v).unwrap();
    let origin = c(0.1, 0.3);
    for p in [c(0.3, 0.5), c(0.7, 0.9), c(0.4, 0.6)] {
      let dx = r(p.x) - r(origin.x);
      let dy = r(p.y) - r(origin.y);
      let expected = if dy < dx { 0 } else { 1 };
      assert_eq!(octant(&origin, &p), expected, "{}", p);
    }
    let p = c(0.3, 0.5);
    let q = c(0.7, 0.9);
    assert_eq!(compare_angle(&origin, &p, &q), exact_compare(&origin, &p, &q));
  }

  #[test]
  #[should_panic]
  fn zero_direction_panics() {
    octant(&c(1., 1.), &c(1., 1.));
  }

  #[test]
  fn angle_order_around_origin() {
    let o = c(10., 10.);
    let mut dirs = vec![c(10., 0.), c(0., 10.), c(20., 10.), c(10., 20.), c(11., 11.), c(0., 0.)];
    dirs.sort_by(|p, q| compare_angle(&o, p, q));
    assert_eq!(
      dirs,
      vec![c(20., 10.), c(11., 11.), c(10., 20.), c(0., 10.), c(0., 0.), c(10., 0.)]
    );
    assert_eq!(compare_angle(&o, &c(11., 11.), &c(13., 13.)), Ordering::Equal);
  }

  #[test]
  fn huge_magnitudes() {
    let o = c(1e15, 1e15);
    let east = c(1e15 + 1., 1e15);
    let barely_north_of_east = c(1e15 + 8., 1e15 + 1.);
    assert_eq!(compare_angle(&o, &east, &barely_north_of_east), Ordering::Less);
    assert!(is_angle_greater(&o, &barely_north_of_east, &east));
  }

  #[test]
  fn crossing() {
    let o = c(1000., 1000.);
    let west = c(500., 1000.);
    let north = c(1000., 1500.);
    // One edge inside the west-north quadrant, one outside.
    assert!(is_crossing(&o, &west, &north, &c(1000., 500.), &c(500., 1500.)));
    // Both outside.
    assert!(!is_crossing(&o, &west, &north, &c(1000., 500.), &c(1500., 1500.)));
    // Both inside.
    assert!(!is_crossing(&o, &west, &north, &c(300., 1200.), &c(500., 1500.)));
    // Touching at the east direction only.
    assert!(!is_crossing(&o, &west, &north, &c(1000., 500.), &c(1500., 1000.)));
  }

  #[test]
  fn collinear_is_not_crossing() {
    let o = c(5., 5.);
    assert!(!is_crossing(&o, &c(3., 1.), &c(9., 9.), &c(2., 1.), &c(9., 9.)));
    assert!(!is_crossing(&o, &c(3., 1.), &c(9., 9.), &c(3., 1.), &c(9., 9.)));
    // Exactly opposite directions.
    assert!(!is_crossing(&o, &c(0., 5.), &c(10., 5.), &c(0., 5.), &c(5., 10.)));
  }

  #[test]
  fn interior_segment() {
    // Corner (5 9) -> (5 5) -> (9 5): interior on the right, i.e. the
    // reflex side towards the south-west.
    let o = c(5., 5.);
    let a0 = c(5., 9.);
    let a1 = c(9., 5.);
    assert!(is_interior_segment(&o, &a0, &a1, &c(0., 0.)));
    assert!(is_interior_segment(&o, &a0, &a1, &c(0., 9.)));
    assert!(!is_interior_segment(&o, &a0, &a1, &c(9., 9.)));
    // The reversed corner has the opposite interior.
    assert!(!is_interior_segment(&o, &a1, &a0, &c(0., 0.)));
    assert!(is_interior_segment(&o, &a1, &a0, &c(9., 9.)));
  }

  #[proptest]
  fn compare_angle_is_exact(
    #[strategy(any_coordinate())] origin: Coordinate,
    #[strategy(any_coordinate())] p: Coordinate,
    #[strategy(any_coordinate())] q: Coordinate,
  ) {
    prop_assume!(!p.equals_2d(&origin) && !q.equals_2d(&origin));
    prop_assert_eq!(compare_angle(&origin, &p, &q), exact_compare(&origin, &p, &q));
  }

  #[proptest]
  fn crossing_is_symmetric(
    #[strategy(any_grid_coordinate())] a0: Coordinate,
    #[strategy(any_grid_coordinate())] a1: Coordinate,
    #[strategy(any_grid_coordinate())] b0: Coordinate,
    #[strategy(any_grid_coordinate())] b1: Coordinate,
  ) {
    let o = c(0.5, 0.25);
    prop_assert_eq!(
      is_crossing(&o, &a0, &a1, &b0, &b1),
      is_crossing(&o, &b0, &b1, &a0, &a1)
    );
    prop_assert_eq!(
      is_crossing(&o, &a0, &a1, &b0, &b1),
      is_crossing(&o, &a1, &a0, &b1, &b0)
    );
  }

  #[proptest]
  fn interior_segment_complements(
    #[strategy(any_grid_coordinate())] a0: Coordinate,
    #[strategy(any_grid_coordinate())] a1: Coordinate,
    #[strategy(any_grid_coordinate())] b: Coordinate,
  ) {
    let o = c(0.5, 0.25);
    prop_assume!(compare_angle(&o, &a0, &a1) != Ordering::Equal);
    prop_assume!(compare_angle(&o, &b, &a0) != Ordering::Equal);
    prop_assume!(compare_angle(&o, &b, &a1) != Ordering::Equal);
    prop_assert_ne!(
      is_interior_segment(&o, &a0, &a1, &b),
      is_interior_segment(&o, &a1, &a0, &b)
    );
  }
}
