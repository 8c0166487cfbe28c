mod hull_equivalence {
  use polylab::algorithms::*;
  use polylab::data::*;
  use polylab::*;

  use proptest::collection::vec;
  use proptest::prelude::*;
  use rand::rngs::SmallRng;
  use rand::SeedableRng;
  use test_strategy::proptest;

  fn pts(points: &[(i32, i32)]) -> Vec<Point> {
    points.iter().copied().map(Point::from).collect()
  }

  fn any_points() -> impl Strategy<Value = Vec<Point>> {
    vec((-1000..=1000i32, -1000..=1000i32).prop_map(Point::from), 4..9)
  }

  fn general_position(points: &[Point]) -> bool {
    let n = points.len();
    (0..n).all(|i| {
      (i + 1..n).all(|j| {
        !points[i].approx_eq(&points[j])
          && (j + 1..n).all(|k| !Orientation::new(&points[i], &points[j], &points[k]).is_colinear())
      })
    })
  }

  fn sorted(polygon: &Polygon) -> Vec<Point> {
    let mut points = polygon.points().to_vec();
    points.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    points
  }

  #[test]
  fn scenario() -> Result<(), Error> {
    let points = pts(&[(0, 0), (10, 1), (11, 9), (5, 5), (1, 10)]);
    let expected = pts(&[(0, 0), (10, 1), (11, 9), (1, 10)]);
    assert_eq!(get_convex(&points, ConvexAlgorithm::Triangle)?.points(), &expected[..]);
    assert_eq!(get_convex(&points, ConvexAlgorithm::Jarvis)?.points(), &expected[..]);
    assert_eq!(
      get_convex(&points, ConvexAlgorithm::Graham)?.points(),
      &pts(&[(10, 1), (11, 9), (1, 10), (0, 0)])[..]
    );
    Ok(())
  }

  #[test]
  fn hull_of_generated_polygon() -> Result<(), Error> {
    let mut rng = SmallRng::seed_from_u64(11);
    let polygon = generate_polygon(&GeneratorConfig::default(), &mut rng)?;
    for algorithm in ConvexAlgorithm::ALL {
      let hull = get_convex(polygon.points(), algorithm)?;
      assert!(is_convex_polygon(&hull), "{algorithm}");
      assert!(hull.len() <= polygon.len());
      let center = GeneratorConfig::default().center;
      assert!(is_point_in_polygon(&hull, &center), "{algorithm}");
    }
    Ok(())
  }

  #[test]
  fn convex_input_is_its_own_hull() -> Result<(), Error> {
    let mut rng = SmallRng::seed_from_u64(5);
    let polygon = generate_convex_polygon(&GeneratorConfig::default(), &mut rng)?;
    let hull = get_convex(polygon.points(), ConvexAlgorithm::Graham)?;
    for pt in hull.iter() {
      assert!(polygon.points().contains(pt));
    }
    Ok(())
  }

  #[proptest]
  fn algorithms_agree(#[strategy(any_points())] points: Vec<Point>) {
    prop_assume!(general_position(&points));
    let triangle = get_convex(&points, ConvexAlgorithm::Triangle).unwrap();
    let jarvis = get_convex(&points, ConvexAlgorithm::Jarvis).unwrap();
    let graham = get_convex(&points, ConvexAlgorithm::Graham).unwrap();
    prop_assert_eq!(sorted(&triangle), sorted(&jarvis));
    prop_assert_eq!(sorted(&jarvis), sorted(&graham));
  }
}
