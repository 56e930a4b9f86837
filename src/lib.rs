// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Robust topological point location for planar geometries.
//!
//! Given a coordinate and a [`Geometry`](data::Geometry), the locators in
//! [`algorithms`] decide whether the coordinate lies in the
//! [Interior](data::Location::Interior), on the [Boundary](data::Location::Boundary)
//! or in the [Exterior](data::Location::Exterior) of the geometry. All
//! predicates are exact: orientation is decided by adaptive-precision
//! arithmetic and directions around a vertex are ordered without
//! trigonometry.
//!
//! ```rust
//! # use rlocate::algorithms::PointLocator;
//! # use rlocate::data::*;
//! let square = Polygon::new(
//!   LinearRing::new(vec![
//!     Coordinate::new(0.0, 0.0),
//!     Coordinate::new(0.0, 10.0),
//!     Coordinate::new(10.0, 10.0),
//!     Coordinate::new(10.0, 0.0),
//!     Coordinate::new(0.0, 0.0),
//!   ])?,
//!   vec![],
//! );
//! let geom = Geometry::Polygon(square);
//! let locator = PointLocator::default();
//! assert_eq!(locator.locate(&Coordinate::new(5.0, 5.0), &geom), Location::Interior);
//! assert_eq!(locator.locate(&Coordinate::new(0.0, 5.0), &geom), Location::Boundary);
//! assert_eq!(locator.locate(&Coordinate::new(11.0, 5.0), &geom), Location::Exterior);
//! # Ok::<(), rlocate::Error>(())
//! ```

pub mod algorithms;
pub mod data;
mod orientation;

pub use orientation::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
  #[error("Insufficient vertices: a ring needs at least {required}, got {actual}")]
  InsufficientVertices { required: usize, actual: usize },
  #[error("Ring is not closed")]
  RingNotClosed,
  /// The ordinate buffer of a packed sequence is not a multiple of its dimension.
  #[error("Ordinate count {count} is not a multiple of dimension {dimension}")]
  InvalidOrdinateCount { count: usize, dimension: usize },
  #[error("Unsupported coordinate dimension: {0}")]
  UnsupportedDimension(usize),
  /// Points have no boundary, and `Location::None` is never a final answer.
  #[error("Invalid dimension/location pair")]
  InvalidDimensionLocation,
}

#[cfg(test)]
pub mod testing;
