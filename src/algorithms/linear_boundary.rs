use std::collections::HashMap;

use ordered_float::OrderedFloat;

use super::BoundaryNodeRule;
use crate::data::Coordinate;

pub(crate) type Key = [OrderedFloat<f64>; 2];

/// Exact hash key of a coordinate. Signed zeros share a key.
pub(crate) fn key(p: &Coordinate) -> Key {
  [OrderedFloat(p.x), OrderedFloat(p.y)]
}

/// The boundary of a set of lines under a [`BoundaryNodeRule`].
///
/// Every line contributes its start and its end coordinate. The valence of a
/// coordinate is the number of contributions landing on it, so a closed line
/// gives its start point valence 2 and two lines meeting end to end share a
/// node of valence 2. Empty lines contribute nothing.
#[derive(Debug, Clone)]
pub struct LinearBoundary {
  valence: HashMap<Key, usize>,
  rule: BoundaryNodeRule,
}

impl LinearBoundary {
  pub fn new<'a, I>(lines: I, rule: BoundaryNodeRule) -> LinearBoundary
  where
    I: IntoIterator<Item = &'a [Coordinate]>,
  {
    let mut valence = HashMap::new();
    for line in lines {
      if let (Some(start), Some(end)) = (line.first(), line.last()) {
        *valence.entry(key(start)).or_insert(0) += 1;
        *valence.entry(key(end)).or_insert(0) += 1;
      }
    }
    LinearBoundary { valence, rule }
  }

  pub fn rule(&self) -> BoundaryNodeRule {
    self.rule
  }

  /// Number of line endpoints at `p`. A NaN coordinate touches nothing.
  pub fn valence(&self, p: &Coordinate) -> usize {
    if p.is_nan() {
      return 0;
    }
    self.valence.get(&key(p)).copied().unwrap_or(0)
  }

  pub fn is_boundary(&self, p: &Coordinate) -> bool {
    self.rule.is_in_boundary(self.valence(p))
  }

  /// Does any endpoint survive the rule? Under Mod2 a set of closed lines has
  /// an empty boundary.
  pub fn has_boundary(&self) -> bool {
    self.valence.values().any(|&v| self.rule.is_in_boundary(v))
  }
}
