use std::cmp::Ordering;

use crate::data::Coordinate;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// The sign of the determinant is computed with adaptive-precision
  /// arithmetic and is exact for every finite input. A NaN ordinate makes the
  /// determinant NaN, which is reported as [`Orientation::CoLinear`]; callers
  /// that care reject NaN coordinates before asking.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use rlocate::data::Coordinate;
  /// # use rlocate::Orientation;
  /// let p1 = Coordinate::new(0.0, 0.0);
  /// let p2 = Coordinate::new(0.0, 1.0); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Coordinate::new(0.0, 2.0)).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Coordinate::new(-1.0, 2.0)).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Coordinate::new(1.0, 2.0)).is_cw());
  /// ```
  pub fn new(p1: &Coordinate, p2: &Coordinate, p3: &Coordinate) -> Orientation {
    let orient =
      geometry_predicates::predicates::orient2d(p1.to_array(), p2.to_array(), p3.to_array());
    if orient > 0.0 {
      Orientation::CounterClockWise
    } else if orient < 0.0 {
      Orientation::ClockWise
    } else {
      Orientation::CoLinear
    }
  }

  /// Orientation of a closed ring.
  ///
  /// The ring must be closed (first == last). The test only inspects the
  /// neighbourhood of the highest vertex, so it tolerates repeated points and
  /// self-touching rings. Flat or degenerate rings (fewer than three
  /// distinct vertices) are reported as [`Orientation::CoLinear`].
  pub fn of_ring(ring: &[Coordinate]) -> Orientation {
    // The closing point is not considered.
    let n = ring.len().saturating_sub(1);
    if n < 3 {
      return Orientation::CoLinear;
    }

    // Find the first highest point that follows a strictly lower one.
    let mut up_hi = 0;
    let mut up_lo = None;
    let mut prev_y = ring[0].y;
    for i in 1..=n {
      let py = ring[i].y;
      if py > prev_y && py >= ring[up_hi].y {
        up_hi = i;
        up_lo = Some(i - 1);
      }
      prev_y = py;
    }
    let up_lo = match up_lo {
      Some(up_lo) => up_lo,
      None => return Orientation::CoLinear,
    };
    let up_hi_pt = &ring[up_hi];

    // Walk forward past the flat run to the next lower point.
    let mut down_lo = up_hi;
    loop {
      down_lo = (down_lo + 1) % n;
      if down_lo == up_hi || ring[down_lo].y != up_hi_pt.y {
        break;
      }
    }
    let down_hi = if down_lo > 0 { down_lo - 1 } else { n - 1 };
    let up_lo_pt = &ring[up_lo];
    let down_lo_pt = &ring[down_lo];
    let down_hi_pt = &ring[down_hi];

    if up_hi_pt.equals_2d(down_hi_pt) {
      // A single highest vertex: its two neighbours decide.
      if up_lo_pt.equals_2d(up_hi_pt)
        || down_lo_pt.equals_2d(up_hi_pt)
        || up_lo_pt.equals_2d(down_lo_pt)
      {
        return Orientation::CoLinear;
      }
      Orientation::new(up_lo_pt, up_hi_pt, down_lo_pt)
    } else {
      // A flat top: its direction decides.
      match down_hi_pt.x.total_cmp(&up_hi_pt.x) {
        Ordering::Less => Orientation::CounterClockWise,
        Ordering::Greater => Orientation::ClockWise,
        Ordering::Equal => Orientation::CoLinear,
      }
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn then(self, other: Orientation) -> Orientation {
    match self {
      Orientation::CoLinear => other,
      _ => self,
    }
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }
}
