use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(60, 0).is_err());
    assert!(Fps::new(60, 1).is_ok());
}

#[test]
fn fps_frame_conversions() {
    let fps = Fps::new(60, 1).unwrap();
    assert_eq!(fps.secs_to_frames_floor(10.0), 600);
    assert_eq!(fps.secs_to_frames_floor(-1.0), 0);
    assert!((fps.frames_to_secs(30) - 0.5).abs() < 1e-12);

    let ntsc = Fps::new(30_000, 1001).unwrap();
    assert_eq!(ntsc.secs_to_frames_floor(1.0), 29);
}

#[test]
fn canvas_center_uses_integer_division() {
    let canvas = Canvas {
        width: 1921,
        height: 1081,
    };
    assert_eq!(canvas.center(), Point::new(960.0, 540.0));
}

#[test]
fn canvas_contains_is_half_open() {
    let canvas = Canvas {
        width: 10,
        height: 5,
    };
    assert!(canvas.contains(PixelPoint::new(0, 0)));
    assert!(canvas.contains(PixelPoint::new(9, 4)));
    assert!(!canvas.contains(PixelPoint::new(10, 4)));
    assert!(!canvas.contains(PixelPoint::new(9, 5)));
    assert!(!canvas.contains(PixelPoint::new(-1, 0)));
}

#[test]
fn rgb8_serde_accepts_hex_and_arrays() {
    let c: Rgb8 = serde_json::from_str("\"#C8c8C8\"").unwrap();
    assert_eq!(c, Rgb8::gray(200));
    let c: Rgb8 = serde_json::from_str("[1, 2, 3]").unwrap();
    assert_eq!(c, Rgb8::new(1, 2, 3));
    assert_eq!(
        serde_json::to_string(&Rgb8::new(255, 0, 16)).unwrap(),
        "\"#ff0010\""
    );
    assert!(serde_json::from_str::<Rgb8>("\"#12345\"").is_err());
    assert!(serde_json::from_str::<Rgb8>("\"#zz0000\"").is_err());
}
