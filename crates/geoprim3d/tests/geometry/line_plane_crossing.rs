use geoprim3d::math::{Point, Vector, DEFAULT_EPSILON};
use geoprim3d::query::details::{intersection_line_plane, intersection_segment_plane};
use geoprim3d::shape::{Line, Plane, Segment};

#[test]
fn line_hits_plane_from_both_sides() {
    let plane = Plane::new(Point::new(0.0, 0.0, 1.0), Vector::new(0.0, 0.0, 2.0));
    let expected = Point::new(1.0, 1.0, 1.0);

    // The direction points with, then against, the plane normal.
    for dir in [Vector::new(1.0, 0.0, 1.0), Vector::new(-1.0, 0.0, -1.0)] {
        let line = Line::new(Point::new(0.0, 1.0, 0.0), dir);
        let hit = intersection_line_plane(&line, &plane, DEFAULT_EPSILON).unwrap();
        assert_relative_eq!(hit, expected, epsilon = 1.0e-12);
    }

    let reversed = plane.reversed();
    let line = Line::new(Point::new(0.0, 1.0, 0.0), Vector::new(1.0, 0.0, 1.0));
    let hit = intersection_line_plane(&line, &reversed, DEFAULT_EPSILON).unwrap();
    assert_relative_eq!(hit, expected, epsilon = 1.0e-12);
}

#[test]
fn segment_crosses_plane_in_both_directions() {
    let plane = Plane::new(Point::origin(), Vector::y());
    let seg = Segment::new(Point::new(0.0, -1.0, 0.0), Point::new(0.0, 3.0, 4.0));
    let mut rev = seg;
    rev.swap();

    let hit = intersection_segment_plane(&seg, &plane, DEFAULT_EPSILON).unwrap();
    assert_relative_eq!(hit, Point::new(0.0, 0.0, 1.0), epsilon = 1.0e-12);
    let hit = intersection_segment_plane(&rev, &plane, DEFAULT_EPSILON).unwrap();
    assert_relative_eq!(hit, Point::new(0.0, 0.0, 1.0), epsilon = 1.0e-12);
}
