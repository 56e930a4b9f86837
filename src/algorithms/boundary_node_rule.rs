use std::fmt;

/// Decides whether a point where line endpoints meet is on the boundary of a
/// linear geometry, given its valence: the number of line endpoints that
/// coincide with the point.
///
/// The rule only matters where endpoints coincide (the start/end vertex of a
/// closed line, or a vertex shared by several lines). It has no influence on
/// polygonal classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoundaryNodeRule {
  /// A point is on the boundary iff its valence is odd. This is the rule used
  /// by the OGC Simple Features specification.
  #[default]
  Mod2,
  /// Every endpoint is on the boundary.
  Endpoint,
  /// Only endpoints of exactly one line are on the boundary.
  Monovalent,
  /// Only endpoints shared by more than one line are on the boundary.
  Multivalent,
}

impl BoundaryNodeRule {
  pub const OGC_SFS: BoundaryNodeRule = BoundaryNodeRule::Mod2;

  pub const ALL: [BoundaryNodeRule; 4] = [
    BoundaryNodeRule::Mod2,
    BoundaryNodeRule::Endpoint,
    BoundaryNodeRule::Monovalent,
    BoundaryNodeRule::Multivalent,
  ];

  pub fn is_in_boundary(self, valence: usize) -> bool {
    match self {
      BoundaryNodeRule::Mod2 => valence % 2 == 1,
      BoundaryNodeRule::Endpoint => valence >= 1,
      BoundaryNodeRule::Monovalent => valence == 1,
      BoundaryNodeRule::Multivalent => valence > 1,
    }
  }
}

impl fmt::Display for BoundaryNodeRule {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      BoundaryNodeRule::Mod2 => "Mod2",
      BoundaryNodeRule::Endpoint => "EndPoint",
      BoundaryNodeRule::Monovalent => "MonoValent",
      BoundaryNodeRule::Multivalent => "MultiValent",
    };
    f.write_str(name)
  }
}
