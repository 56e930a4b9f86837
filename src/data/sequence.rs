use claims::debug_assert_ok;

use super::Coordinate;
use crate::Error;

/// Read access to an ordered sequence of coordinates.
///
/// This is the sequence-valued counterpart of `&[Coordinate]`: storage may
/// carry extra ordinates (z, m) per coordinate, but only x and y are exposed.
pub trait CoordinateSequence {
  fn len(&self) -> usize;

  fn get(&self, index: usize) -> Coordinate;

  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  fn first(&self) -> Option<Coordinate> {
    if self.is_empty() {
      None
    } else {
      Some(self.get(0))
    }
  }

  fn last(&self) -> Option<Coordinate> {
    self.len().checked_sub(1).map(|i| self.get(i))
  }

  fn is_closed(&self) -> bool {
    match (self.first(), self.last()) {
      (Some(first), Some(last)) => first.equals_2d(&last),
      _ => false,
    }
  }
}

impl CoordinateSequence for [Coordinate] {
  fn len(&self) -> usize {
    <[Coordinate]>::len(self)
  }

  fn get(&self, index: usize) -> Coordinate {
    self[index]
  }
}

impl CoordinateSequence for Vec<Coordinate> {
  fn len(&self) -> usize {
    Vec::len(self)
  }

  fn get(&self, index: usize) -> Coordinate {
    self[index]
  }
}

/// Coordinates stored as one interleaved ordinate buffer: `x y [z [m]]` per
/// coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct PackedCoordinates {
  dimension: usize,
  ordinates: Vec<f64>,
}

impl PackedCoordinates {
  pub const MIN_DIMENSION: usize = 2;
  pub const MAX_DIMENSION: usize = 4;

  /// Wrap an ordinate buffer with 2 (XY), 3 (XYZ) or 4 (XYZM) ordinates per
  /// coordinate.
  pub fn new(dimension: usize, ordinates: Vec<f64>) -> Result<PackedCoordinates, Error> {
    let seq = PackedCoordinates {
      dimension,
      ordinates,
    };
    seq.validate()?;
    Ok(seq)
  }

  pub fn new_unchecked(dimension: usize, ordinates: Vec<f64>) -> PackedCoordinates {
    let seq = PackedCoordinates {
      dimension,
      ordinates,
    };
    debug_assert_ok!(seq.validate());
    seq
  }

  pub fn validate(&self) -> Result<(), Error> {
    if !(Self::MIN_DIMENSION..=Self::MAX_DIMENSION).contains(&self.dimension) {
      return Err(Error::UnsupportedDimension(self.dimension));
    }
    if self.ordinates.len() % self.dimension != 0 {
      return Err(Error::InvalidOrdinateCount {
        count: self.ordinates.len(),
        dimension: self.dimension,
      });
    }
    Ok(())
  }

  pub fn dimension(&self) -> usize {
    self.dimension
  }

  /// Ordinate `ordinate` (0 = x, 1 = y, ...) of coordinate `index`.
  pub fn ordinate(&self, index: usize, ordinate: usize) -> f64 {
    self.ordinates[index * self.dimension + ordinate]
  }

  pub fn iter(&self) -> impl Iterator<Item = Coordinate> + '_ {
    self
      .ordinates
      .chunks_exact(self.dimension)
      .map(|c| Coordinate::new(c[0], c[1]))
  }
}

impl CoordinateSequence for PackedCoordinates {
  fn len(&self) -> usize {
    self.ordinates.len() / self.dimension
  }

  fn get(&self, index: usize) -> Coordinate {
    Coordinate::new(self.ordinate(index, 0), self.ordinate(index, 1))
  }
}

impl<'a> From<&'a [Coordinate]> for PackedCoordinates {
  fn from(coords: &[Coordinate]) -> PackedCoordinates {
    PackedCoordinates {
      dimension: 2,
      ordinates: coords.iter().flat_map(|c| [c.x, c.y]).collect(),
    }
  }
}
