// This module contains fixtures and strategies for:
//  * coordinates
//  * rings and polygons
// A Strategy is a way to generate a shrinkable value.
use crate::data::{Coordinate, Geometry, LineString, LinearRing, Polygon};

use proptest::collection::vec;
use proptest::prelude::*;

///////////////////////////////////////////////////////////////////////////////
// Fixtures

pub fn coords(pts: &[(f64, f64)]) -> Vec<Coordinate> {
  pts.iter().map(|&pt| Coordinate::from(pt)).collect()
}

pub fn line(pts: &[(f64, f64)]) -> LineString {
  LineString::new_unchecked(coords(pts))
}

pub fn ring(pts: &[(f64, f64)]) -> LinearRing {
  LinearRing::new_unchecked(coords(pts))
}

pub fn polygon(shell: &[(f64, f64)], holes: &[&[(f64, f64)]]) -> Polygon {
  Polygon::new(ring(shell), holes.iter().map(|h| ring(h)).collect())
}

pub fn polygons(shells: &[&[(f64, f64)]]) -> Geometry {
  Geometry::GeometryCollection(
    shells
      .iter()
      .map(|s| Geometry::Polygon(polygon(s, &[])))
      .collect(),
  )
}

///////////////////////////////////////////////////////////////////////////////
// Strategies

/// Small integer coordinates. Collinear and coincident points are common.
pub fn any_grid_coordinate() -> impl Strategy<Value = Coordinate> {
  (-10i32..=10, -10i32..=10).prop_map(|(x, y)| Coordinate::new(f64::from(x), f64::from(y)))
}

/// Finite coordinates: a mix of grid points and arbitrary doubles of moderate
/// magnitude.
pub fn any_coordinate() -> impl Strategy<Value = Coordinate> {
  prop_oneof![
    any_grid_coordinate(),
    (-1e6f64..1e6, -1e6f64..1e6).prop_map(Coordinate::from),
    (-1e-3f64..1e-3, -1e-3f64..1e-3).prop_map(Coordinate::from),
  ]
}

/// Star-shaped (hence simple) rings around the origin with vertices snapped to
/// the integer grid, closed and in random orientation.
pub fn any_star_ring() -> impl Strategy<Value = Vec<Coordinate>> {
  (vec((0u32..360, 1u32..20), 3..12), any::<bool>()).prop_filter_map(
    "degenerate star",
    |(mut spokes, reverse)| {
      spokes.sort_by_key(|&(angle, _)| angle);
      spokes.dedup_by_key(|&mut (angle, _)| angle);
      if spokes.len() < 3 {
        return None;
      }
      let mut pts: Vec<Coordinate> = spokes
        .iter()
        .map(|&(angle, radius)| {
          let a = f64::from(angle).to_radians();
          let r = f64::from(radius);
          Coordinate::new((r * a.cos()).round(), (r * a.sin()).round())
        })
        .collect();
      pts.dedup();
      if pts.len() < 3 || !is_star_simple(&pts) {
        return None;
      }
      if reverse {
        pts.reverse();
      }
      pts.push(pts[0]);
      Some(pts)
    },
  )
}

// Rounding to the grid may fold spokes over each other. Keep only rings whose
// vertices still turn monotonically around the origin.
fn is_star_simple(pts: &[Coordinate]) -> bool {
  let origin = Coordinate::new(0.0, 0.0);
  if pts.iter().any(|p| p.equals_2d(&origin)) {
    return false;
  }
  let n = pts.len();
  let mut winding = 0.0;
  for i in 0..n {
    let a = pts[i];
    let b = pts[(i + 1) % n];
    let cross = a.x * b.y - a.y * b.x;
    if cross <= 0.0 {
      return false;
    }
    winding += cross.atan2(a.x * b.x + a.y * b.y);
  }
  (winding - std::f64::consts::TAU).abs() < 1e-6
}
