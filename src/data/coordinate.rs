use std::fmt;

/// A planar coordinate. Any z or m ordinates of the source data are ignored.
///
/// Equality is exact value equality of both ordinates, so `-0.0 == 0.0` and a
/// coordinate with a NaN ordinate equals nothing, not even itself.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
  pub x: f64,
  pub y: f64,
}

impl Coordinate {
  pub const fn new(x: f64, y: f64) -> Coordinate {
    Coordinate { x, y }
  }

  pub fn equals_2d(&self, other: &Coordinate) -> bool {
    self.x == other.x && self.y == other.y
  }

  pub fn is_nan(&self) -> bool {
    self.x.is_nan() || self.y.is_nan()
  }

  pub fn to_array(self) -> [f64; 2] {
    [self.x, self.y]
  }
}

impl From<(f64, f64)> for Coordinate {
  fn from((x, y): (f64, f64)) -> Coordinate {
    Coordinate { x, y }
  }
}

impl From<[f64; 2]> for Coordinate {
  fn from([x, y]: [f64; 2]) -> Coordinate {
    Coordinate { x, y }
  }
}

impl From<Coordinate> for [f64; 2] {
  fn from(c: Coordinate) -> [f64; 2] {
    c.to_array()
  }
}

impl fmt::Display for Coordinate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({} {})", self.x, self.y)
  }
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;

  #[test]
  fn signed_zero_is_equal() {
    assert!(Coordinate::new(0.0, -0.0).equals_2d(&Coordinate::new(-0.0, 0.0)));
  }

  #[test]
  fn nan_is_never_equal() {
    let c = Coordinate::new(f64::NAN, 1.0);
    assert!(c.is_nan());
    assert!(!c.equals_2d(&c));
    assert_ne!(c, c);
  }
}
