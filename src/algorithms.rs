pub mod adjacent_edge_locator;
pub mod boundary_node_rule;
pub mod linear_boundary;
pub mod point_location;
pub mod point_locator;
pub mod polygon_node_topology;
pub mod ray_crossing;
pub mod relate_point_locator;

#[doc(inline)]
pub use adjacent_edge_locator::AdjacentEdgeLocator;

#[doc(inline)]
pub use boundary_node_rule::BoundaryNodeRule;

#[doc(inline)]
pub use linear_boundary::LinearBoundary;

#[doc(inline)]
pub use point_locator::PointLocator;

#[doc(inline)]
pub use ray_crossing::RayCrossingCounter;

#[doc(inline)]
pub use relate_point_locator::RelatePointLocator;
