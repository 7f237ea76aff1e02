use super::*;

#[test]
fn rect_contains_interior_point() {
    let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
    assert!(rect.contains(Point::new(60.0, 40.0)));
}

#[test]
fn rect_contains_edges() {
    let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
    assert!(rect.contains(Point::new(10.0, 20.0)));
    assert!(rect.contains(Point::new(110.0, 70.0)));
}

#[test]
fn rect_excludes_outside_points() {
    let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
    assert!(!rect.contains(Point::new(9.9, 40.0)));
    assert!(!rect.contains(Point::new(60.0, 70.1)));
    assert!(!rect.contains(Point::new(200.0, 200.0)));
}

#[test]
fn degenerate_rect_contains_nothing() {
    let rect = Rect::new(0.0, 0.0, 0.0, 0.0);
    assert!(!rect.contains(Point::new(0.0, 0.0)));
}

#[test]
fn rect_right_and_bottom() {
    let rect = Rect::new(5.0, 7.0, 10.0, 3.0);
    assert!((rect.right() - 15.0).abs() < f64::EPSILON);
    assert!((rect.bottom() - 10.0).abs() < f64::EPSILON);
}
