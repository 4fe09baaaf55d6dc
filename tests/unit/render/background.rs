use super::*;
use crate::foundation::core::Canvas;

fn canvas() -> Canvas {
    Canvas {
        width: 4,
        height: 256,
    }
}

#[test]
fn solid_fills_every_pixel() {
    let mut out = Layer::black(canvas());
    let bg = BackgroundMode::Solid {
        color: Rgb8::WHITE,
    };
    bg.render(FrameIndex(3), 10, &mut out);
    assert_eq!(out, Layer::new(canvas(), Rgb8::WHITE));
    assert!(bg.is_static());
}

#[test]
fn gradient_rows_follow_the_ramp() {
    let mut out = Layer::black(canvas());
    let bg = BackgroundMode::Gradient {
        colormap: Colormap::Gray,
        phase_cycles: 0.0,
    };
    bg.render(FrameIndex(0), 1, &mut out);
    for y in [0, 1, 100, 255] {
        for x in 0..4 {
            assert_eq!(out.pixel(x, y), Some(Rgb8::gray(y as u8)));
        }
    }
    assert!(bg.is_static());
}

#[test]
fn gradient_ramp_spans_full_range_for_any_height() {
    assert_eq!(ramp_value(0, 1080), 0);
    assert_eq!(ramp_value(1079, 1080), 255);
    assert_eq!(ramp_value(0, 1), 0);
    assert_eq!(ramp_value(1, 3), 127);
}

#[test]
fn phased_gradient_scrolls_with_frame_index() {
    let bg = BackgroundMode::Gradient {
        colormap: Colormap::Gray,
        phase_cycles: 1.0,
    };
    assert!(!bg.is_static());

    let mut first = Layer::black(canvas());
    bg.render(FrameIndex(0), 4, &mut first);
    let mut quarter = Layer::black(canvas());
    bg.render(FrameIndex(1), 4, &mut quarter);

    assert_eq!(first.pixel(0, 0), Some(Rgb8::gray(0)));
    assert_eq!(quarter.pixel(0, 0), Some(Rgb8::gray(64)));
    assert_eq!(quarter.pixel(0, 200), Some(Rgb8::gray(8)));

    let mut wrapped = Layer::black(canvas());
    bg.render(FrameIndex(4), 4, &mut wrapped);
    assert_eq!(wrapped, first);
}

#[test]
fn validate_rejects_non_finite_phase() {
    let bg = BackgroundMode::Gradient {
        colormap: Colormap::Jet,
        phase_cycles: f64::INFINITY,
    };
    assert!(bg.validate().is_err());
    assert!(BackgroundMode::default().validate().is_ok());
}
