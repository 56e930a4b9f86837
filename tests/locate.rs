mod locate {
  use rlocate::algorithms::*;
  use rlocate::data::*;
  use rlocate::Error;

  fn ring(pts: &[(f64, f64)]) -> Result<LinearRing, Error> {
    LinearRing::new(pts.iter().map(|&p| Coordinate::from(p)).collect())
  }

  fn polygon(shell: &[(f64, f64)], holes: &[&[(f64, f64)]]) -> Result<Polygon, Error> {
    let holes = holes.iter().map(|h| ring(h)).collect::<Result<Vec<_>, _>>()?;
    Ok(Polygon::new(ring(shell)?, holes))
  }

  fn c(x: f64, y: f64) -> Coordinate {
    Coordinate::new(x, y)
  }

  #[test]
  fn polygon_with_hole() -> Result<(), Error> {
    let geom = Geometry::Polygon(polygon(
      &[(0., 0.), (0., 30.), (30., 30.), (30., 0.), (0., 0.)],
      &[&[(10., 10.), (10., 20.), (20., 20.), (20., 10.), (10., 10.)]],
    )?);
    let locator = PointLocator::default();
    assert_eq!(locator.locate(&c(5., 5.), &geom), Location::Interior);
    assert_eq!(locator.locate(&c(15., 15.), &geom), Location::Exterior);
    assert_eq!(locator.locate(&c(10., 15.), &geom), Location::Boundary);
    assert_eq!(locator.locate(&c(50., 50.), &geom), Location::Exterior);

    let relate = RelatePointLocator::new(&geom, BoundaryNodeRule::Mod2);
    assert_eq!(relate.locate_with_dim(&c(5., 5.)), DimensionLocation::AreaInterior);
    assert_eq!(relate.locate_with_dim(&c(10., 15.)), DimensionLocation::AreaBoundary);
    assert_eq!(relate.locate_with_dim(&c(15., 15.)), DimensionLocation::Exterior);
    Ok(())
  }

  #[test]
  fn repeated_points_ring() {
    let mut pts = vec![(0., 0.), (0., 10.)];
    pts.extend([(2., 5.); 5]);
    pts.extend([(3., 10.), (6., 10.)]);
    pts.extend([(8., 5.); 4]);
    pts.push((10., 10.));
    pts.extend([(10., 5.); 4]);
    pts.extend([(10., 0.), (0., 0.)]);
    let ring: Vec<Coordinate> = pts.into_iter().map(Coordinate::from).collect();
    let locate = |x, y| RayCrossingCounter::locate_point_in_ring(&c(x, y), &ring);
    assert_eq!(locate(1., 5.), Location::Interior);
    assert_eq!(locate(2., 5.), Location::Boundary);
    assert_eq!(locate(0., 0.), Location::Boundary);
  }

  #[test]
  fn closed_line_under_each_rule() -> Result<(), Error> {
    let geom = Geometry::LinearRing(ring(&[(10., 10.), (10., 20.), (20., 10.), (10., 10.)])?);
    let expected = [
      (BoundaryNodeRule::Mod2, Location::Interior),
      (BoundaryNodeRule::Endpoint, Location::Boundary),
      (BoundaryNodeRule::Monovalent, Location::Interior),
      (BoundaryNodeRule::Multivalent, Location::Boundary),
    ];
    for (rule, location) in expected {
      assert_eq!(PointLocator::new(rule).locate(&c(10., 10.), &geom), location);
      assert_eq!(RelatePointLocator::new(&geom, rule).locate(&c(10., 10.)), location);
    }
    Ok(())
  }

  #[test]
  fn adjacent_squares() -> Result<(), Error> {
    let left = polygon(&[(1., 9.), (5., 9.), (5., 1.), (1., 1.), (1., 9.)], &[])?;
    let right = polygon(&[(9., 9.), (9., 1.), (5., 1.), (5., 9.), (9., 9.)], &[])?;
    let geom = Geometry::GeometryCollection(vec![left.into(), right.into()]);
    let p = c(5., 5.);
    assert_eq!(PointLocator::default().locate(&p, &geom), Location::Interior);
    assert_eq!(AdjacentEdgeLocator::new(&geom).locate(&p), Location::Interior);
    assert_eq!(
      RelatePointLocator::new(&geom, BoundaryNodeRule::Mod2).locate_with_dim(&p),
      DimensionLocation::AreaInterior
    );
    Ok(())
  }

  #[test]
  fn squares_touching_at_a_corner() -> Result<(), Error> {
    let low = polygon(&[(1., 1.), (1., 5.), (5., 5.), (5., 1.), (1., 1.)], &[])?;
    let high = polygon(&[(5., 5.), (5., 9.), (9., 9.), (9., 5.), (5., 5.)], &[])?;
    let geom = Geometry::MultiPolygon(vec![low, high]);
    let p = c(5., 5.);
    assert_eq!(PointLocator::default().locate(&p, &geom), Location::Boundary);
    assert_eq!(
      RelatePointLocator::new(&geom, BoundaryNodeRule::Mod2).locate_with_dim(&p),
      DimensionLocation::AreaBoundary
    );
    Ok(())
  }

  #[test]
  fn line_interior_on_area_boundary() -> Result<(), Error> {
    let square = polygon(&[(0., 0.), (0., 10.), (10., 10.), (10., 0.), (0., 0.)], &[])?;
    let crossing = LineString::new(vec![c(-5., 5.), c(15., 5.)])?;
    let geom = Geometry::GeometryCollection(vec![square.into(), crossing.into()]);
    let p = c(10., 5.);
    assert_eq!(
      RelatePointLocator::new(&geom, BoundaryNodeRule::Mod2).locate_with_dim(&p),
      DimensionLocation::AreaBoundary
    );
    assert_eq!(PointLocator::default().locate(&p, &geom), Location::Boundary);
    assert!(PointLocator::default().intersects(&c(12., 5.), &geom));
    Ok(())
  }

  #[test]
  fn malformed_rings_are_rejected() {
    assert_eq!(
      ring(&[(0., 0.), (1., 0.), (0., 0.)]).err(),
      Some(Error::InsufficientVertices {
        required: 4,
        actual: 3
      })
    );
    assert_eq!(
      ring(&[(0., 0.), (1., 0.), (1., 1.), (0., 1.)]).err(),
      Some(Error::RingNotClosed)
    );
  }

  #[test]
  fn four_dimensional_sequence() -> Result<(), Error> {
    let ordinates = vec![
      0., 0., 1., 2., //
      0., 10., 1., 2., //
      10., 10., 1., 2., //
      10., 0., 1., 2., //
      0., 0., 1., 2.,
    ];
    let seq = PackedCoordinates::new(4, ordinates)?;
    assert_eq!(
      RayCrossingCounter::locate_point_in_ring_seq(&c(5., 5.), &seq),
      Location::Interior
    );
    assert!(point_location::is_on_line_seq(&c(10., 5.), &seq));
    Ok(())
  }
}
