use super::*;

fn mapper_100() -> CoordinateMapper {
    CoordinateMapper::new(
        Canvas {
            width: 100,
            height: 100,
        },
        Point::new(50.0, 50.0),
        YAxis::Up,
    )
}

#[test]
fn origin_maps_to_center() {
    let m = mapper_100();
    assert_eq!(
        m.project(Some(ModelPoint::new(0.0, 0.0)), 10.0),
        Some(PixelPoint::new(50, 50))
    );
}

#[test]
fn y_axis_up_inverts_rows() {
    let m = mapper_100();
    assert_eq!(
        m.project(Some(ModelPoint::new(1.0, 2.0)), 10.0),
        Some(PixelPoint::new(60, 30))
    );

    let down = CoordinateMapper::new(m.canvas(), m.center(), YAxis::Down);
    assert_eq!(
        down.project(Some(ModelPoint::new(1.0, 2.0)), 10.0),
        Some(PixelPoint::new(60, 70))
    );
}

#[test]
fn rounds_to_nearest_pixel() {
    let m = mapper_100();
    assert_eq!(
        m.project(Some(ModelPoint::new(0.26, -0.14)), 10.0),
        Some(PixelPoint::new(53, 51))
    );
}

#[test]
fn undefined_sample_projects_to_none() {
    assert_eq!(mapper_100().project(None, 10.0), None);
}

#[test]
fn none_iff_outside_canvas() {
    let m = mapper_100();
    // x = 50 + 4.9 * 10 = 99 is the last column; 5.0 lands on 100.
    assert!(m.project(Some(ModelPoint::new(4.9, 0.0)), 10.0).is_some());
    assert_eq!(m.project(Some(ModelPoint::new(5.0, 0.0)), 10.0), None);
    assert!(m.project(Some(ModelPoint::new(-5.0, 0.0)), 10.0).is_some());
    assert_eq!(m.project(Some(ModelPoint::new(-5.1, 0.0)), 10.0), None);
    assert_eq!(m.project(Some(ModelPoint::new(0.0, 5.1)), 10.0), None);
    assert_eq!(m.project(Some(ModelPoint::new(1000.0, 0.0)), 10.0), None);
    assert_eq!(m.project(Some(ModelPoint::new(1e300, 0.0)), 1e300), None);
}

#[test]
fn projection_is_pure() {
    let m = mapper_100();
    let p = Some(ModelPoint::new(1.5, -2.25));
    let first = m.project(p, 7.0);
    for _ in 0..4 {
        assert_eq!(m.project(p, 7.0), first);
    }
}
