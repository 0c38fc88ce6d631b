use survey_reduction::geometry::{distance, Point, Polyline};
use survey_reduction::surveying::{bearing, point_along, screen_bearing, segment_bearings};
use survey_reduction::DegenerateReading;

#[test]
fn bearing_matches_reference_value() {
    let b = bearing(Point::new(247.32, 870.54), Point::new(705.65, -567.83)).unwrap();
    assert!((b - 287.674241).abs() < 1e-6);
}

#[test]
fn bearing_of_identical_points_is_degenerate() {
    assert_eq!(
        bearing(Point::new(0.0, 0.0), Point::new(0.0, 0.0)),
        Err(DegenerateReading)
    );
}

#[test]
fn survey_and_screen_bearings_differ_off_axis() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(3.0, 4.0);
    let survey = bearing(a, b).unwrap();
    let screen = screen_bearing(a, b).unwrap();
    assert!((survey + screen - 360.0).abs() < 1e-9);
    assert!((survey - screen).abs() > 1.0);
}

#[test]
fn point_along_reference_value() {
    let p = point_along(Point::new(1.0, 4.0), Point::new(5.0, 7.0), 2.0).unwrap();
    assert!((p.x - 2.6).abs() < 0.1);
    assert!((p.y - 5.2).abs() < 0.1);
}

#[test]
fn polyline_drives_segment_queries() {
    let line = Polyline::new(vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 5.0),
    ]);
    assert!((line.length() - 15.0).abs() < 1e-9);
    let bearings = segment_bearings(&line.vertices).unwrap();
    assert_eq!(bearings, vec![0.0, 90.0]);
    assert!((distance(line.vertices[0], line.vertices[2]) - 125.0f64.sqrt()).abs() < 1e-9);
}

#[test]
fn repeated_vertex_poisons_segment_bearings() {
    let pts = [Point::new(0.0, 0.0), Point::new(0.0, 0.0)];
    assert_eq!(segment_bearings(&pts), Err(DegenerateReading));
}
