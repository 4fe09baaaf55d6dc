use super::*;
use crate::foundation::core::Canvas;

fn blank() -> Layer {
    Layer::black(Canvas {
        width: 100,
        height: 100,
    })
}

fn painted_count(layer: &Layer) -> usize {
    layer
        .as_rgb8()
        .chunks_exact(3)
        .filter(|px| px.iter().any(|&c| c != 0))
        .count()
}

#[test]
fn undefined_samples_never_draw() {
    let mut acc = PathAccumulator::new();
    let mut layer = blank();
    for _ in 0..16 {
        assert!(!acc.advance(None, &mut layer, Rgb8::WHITE, 3));
    }
    assert_eq!(painted_count(&layer), 0);
    assert_eq!(acc.last_valid(), None);
}

#[test]
fn first_point_is_recorded_without_drawing() {
    let mut acc = PathAccumulator::new();
    let mut layer = blank();
    let a = PixelPoint::new(50, 50);
    assert!(!acc.advance(Some(a), &mut layer, Rgb8::WHITE, 1));
    assert_eq!(acc.last_valid(), Some(a));
    assert_eq!(painted_count(&layer), 0);
}

#[test]
fn two_points_draw_exactly_one_segment() {
    let mut acc = PathAccumulator::new();
    let mut layer = blank();
    let (a, b) = (PixelPoint::new(50, 50), PixelPoint::new(60, 50));
    acc.advance(Some(a), &mut layer, Rgb8::WHITE, 1);
    assert!(acc.advance(Some(b), &mut layer, Rgb8::WHITE, 1));

    let mut expected = blank();
    expected.draw_line(a, b, Rgb8::WHITE, 1);
    assert_eq!(layer, expected);
    assert_eq!(acc.last_valid(), Some(b));
}

#[test]
fn gap_breaks_continuity() {
    let mut acc = PathAccumulator::new();
    let mut layer = blank();
    acc.advance(Some(PixelPoint::new(10, 10)), &mut layer, Rgb8::WHITE, 1);
    acc.advance(None, &mut layer, Rgb8::WHITE, 1);
    assert!(!acc.advance(Some(PixelPoint::new(90, 90)), &mut layer, Rgb8::WHITE, 1));
    assert_eq!(painted_count(&layer), 0);
    assert_eq!(acc.last_valid(), Some(PixelPoint::new(90, 90)));
}

#[test]
fn explicit_reset_breaks_continuity() {
    let mut acc = PathAccumulator::new();
    let mut layer = blank();
    acc.advance(Some(PixelPoint::new(10, 10)), &mut layer, Rgb8::WHITE, 1);
    acc.reset();
    assert!(!acc.advance(Some(PixelPoint::new(20, 20)), &mut layer, Rgb8::WHITE, 1));
    assert_eq!(painted_count(&layer), 0);
}

#[test]
fn each_segment_uses_its_own_color() {
    let mut acc = PathAccumulator::new();
    let mut layer = blank();
    let red = Rgb8::new(255, 0, 0);
    let blue = Rgb8::new(0, 0, 255);
    acc.advance(Some(PixelPoint::new(0, 0)), &mut layer, red, 1);
    acc.advance(Some(PixelPoint::new(4, 0)), &mut layer, red, 1);
    acc.advance(Some(PixelPoint::new(8, 0)), &mut layer, blue, 1);
    assert_eq!(layer.pixel(2, 0), Some(red));
    // Shared endpoint is overdrawn by the later segment.
    assert_eq!(layer.pixel(4, 0), Some(blue));
    assert_eq!(layer.pixel(8, 0), Some(blue));
}
