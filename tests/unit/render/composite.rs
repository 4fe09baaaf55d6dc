use super::*;
use crate::foundation::core::Canvas;

fn canvas() -> Canvas {
    Canvas {
        width: 2,
        height: 2,
    }
}

#[test]
fn blend_px_matches_weighted_sum() {
    let w = BlendWeights { bg: 0.6, fg: 0.8 };
    assert_eq!(blend_px(100, 50, w), 100);
    assert_eq!(blend_px(0, 0, w), 0);
    assert_eq!(blend_px(10, 0, w), 6);
}

#[test]
fn blend_px_saturates() {
    let w = BlendWeights { bg: 0.7, fg: 0.8 };
    assert_eq!(blend_px(255, 255, w), 255);
    assert_eq!(blend_px(200, 200, w), 255);
    let zero = BlendWeights { bg: 0.0, fg: 0.0 };
    assert_eq!(blend_px(255, 255, zero), 0);
}

#[test]
fn blend_is_per_channel_and_weight_order_independent() {
    let bg = Layer::from_rgb8(canvas(), vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 250, 250, 250])
        .unwrap();
    let fg = Layer::from_rgb8(canvas(), vec![0, 100, 200, 255, 0, 5, 1, 2, 3, 250, 10, 0])
        .unwrap();
    let w = BlendWeights { bg: 0.5, fg: 1.25 };

    let out = blend(&bg, &fg, w).unwrap();
    for ((o, b), f) in out.as_rgb8().iter().zip(bg.as_rgb8()).zip(fg.as_rgb8()) {
        let expected = (f64::from(*b) * 0.5 + f64::from(*f) * 1.25)
            .round()
            .clamp(0.0, 255.0) as u8;
        assert_eq!(*o, expected);
    }

    let swapped = blend(&fg, &bg, BlendWeights { bg: 1.25, fg: 0.5 }).unwrap();
    assert_eq!(out, swapped);
}

#[test]
fn blend_does_not_mutate_inputs() {
    let bg = Layer::new(canvas(), Rgb8::gray(100));
    let fg = Layer::new(canvas(), Rgb8::gray(50));
    let (bg_before, fg_before) = (bg.clone(), fg.clone());
    let _ = blend(&bg, &fg, BlendWeights::default()).unwrap();
    assert_eq!(bg, bg_before);
    assert_eq!(fg, fg_before);
}

#[test]
fn blend_into_rejects_mismatched_layers() {
    let bg = Layer::black(canvas());
    let fg = Layer::black(Canvas {
        width: 3,
        height: 2,
    });
    let mut out = Layer::black(canvas());
    assert!(blend_into(&mut out, &bg, &fg, BlendWeights::default()).is_err());
}

#[test]
fn overlay_takes_foreground_only_under_the_mask() {
    let bg = Layer::new(canvas(), Rgb8::WHITE);
    let mut fg = Layer::black(canvas());
    fg.put_pixel(1, 0, Rgb8::new(200, 10, 10));
    let mut mask = Layer::black(canvas());
    mask.put_pixel(0, 0, Rgb8::WHITE);
    mask.put_pixel(1, 0, Rgb8::WHITE);

    let mut out = Layer::black(canvas());
    overlay_into(&mut out, &bg, &fg, &mask).unwrap();
    assert_eq!(out.pixel(0, 0), Some(Rgb8::BLACK));
    assert_eq!(out.pixel(1, 0), Some(Rgb8::new(200, 10, 10)));
    assert_eq!(out.pixel(0, 1), Some(Rgb8::WHITE));
    assert_eq!(out.pixel(1, 1), Some(Rgb8::WHITE));
}

#[test]
fn overlay_into_rejects_mismatched_mask() {
    let bg = Layer::black(canvas());
    let fg = Layer::black(canvas());
    let mask = Layer::black(Canvas {
        width: 2,
        height: 3,
    });
    let mut out = Layer::black(canvas());
    assert!(overlay_into(&mut out, &bg, &fg, &mask).is_err());
}

#[test]
fn composite_mode_defaults_to_weighted() {
    assert_eq!(CompositeMode::default(), CompositeMode::Weighted);
    let mode: CompositeMode = serde_json::from_str(r#""overlay""#).unwrap();
    assert_eq!(mode, CompositeMode::Overlay);
}

#[test]
fn axes_are_drawn_unweighted_when_enabled() {
    let mut out = Layer::black(Canvas {
        width: 5,
        height: 5,
    });
    draw_axes(&mut out, Point::new(2.0, 2.0), AxesStyle::default());
    assert_eq!(out, Layer::black(out.canvas()));

    let style = AxesStyle {
        enabled: true,
        color: Rgb8::gray(200),
    };
    draw_axes(&mut out, Point::new(2.0, 3.0), style);
    assert_eq!(out.pixel(0, 3), Some(Rgb8::gray(200)));
    assert_eq!(out.pixel(2, 0), Some(Rgb8::gray(200)));
    assert_eq!(out.pixel(0, 0), Some(Rgb8::BLACK));
}

#[test]
fn weights_validation() {
    assert!(BlendWeights::default().validate().is_ok());
    assert!(BlendWeights { bg: -0.1, fg: 1.0 }.validate().is_err());
    assert!(
        BlendWeights {
            bg: 1.0,
            fg: f64::NAN
        }
        .validate()
        .is_err()
    );
}
