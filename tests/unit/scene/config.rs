use super::*;

#[test]
fn defaults_describe_ten_seconds_of_1080p60() {
    let cfg = RenderConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.canvas(), Canvas { width: 1920, height: 1080 });
    assert_eq!(cfg.resolved_frame_count(), 600);
    assert_eq!(cfg.resolved_center(), Point::new(960.0, 540.0));
}

#[test]
fn duration_is_floored_to_whole_frames() {
    let cfg = RenderConfig {
        fps: Fps { num: 24, den: 1 },
        duration_seconds: Some(1.99),
        ..RenderConfig::default()
    };
    assert_eq!(cfg.resolved_frame_count(), 47);
}

#[test]
fn frame_count_and_duration_are_exclusive() {
    let cfg = RenderConfig {
        frame_count: Some(10),
        duration_seconds: Some(1.0),
        ..RenderConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn odd_canvas_center_is_integer_divided() {
    let cfg = RenderConfig {
        width: 101,
        height: 51,
        ..RenderConfig::default()
    };
    assert_eq!(cfg.resolved_center(), Point::new(50.0, 25.0));

    let explicit = RenderConfig {
        center: Some(Point::new(3.0, 4.0)),
        ..cfg
    };
    assert_eq!(explicit.resolved_center(), Point::new(3.0, 4.0));
}

#[test]
fn scale_grows_linearly_per_frame() {
    let cfg = RenderConfig {
        scale_initial: 10.0,
        scale_step: 0.5,
        ..RenderConfig::default()
    };
    assert_eq!(cfg.scale_at(FrameIndex(0)), 10.0);
    assert_eq!(cfg.scale_at(FrameIndex(4)), 12.0);
}

#[test]
fn invalid_settings_are_rejected() {
    let bad = [
        RenderConfig {
            width: 0,
            ..RenderConfig::default()
        },
        RenderConfig {
            fps: Fps { num: 30, den: 0 },
            ..RenderConfig::default()
        },
        RenderConfig {
            line_thickness: 0,
            ..RenderConfig::default()
        },
        RenderConfig {
            frame_count: Some(0),
            ..RenderConfig::default()
        },
        RenderConfig {
            duration_seconds: Some(0.001),
            ..RenderConfig::default()
        },
        RenderConfig {
            scale_step: f64::INFINITY,
            ..RenderConfig::default()
        },
        RenderConfig {
            blend: BlendWeights { bg: -1.0, fg: 1.0 },
            ..RenderConfig::default()
        },
        RenderConfig {
            time: Some(TimeMapping::Linear {
                step: f64::NAN,
                offset: 0.0,
            }),
            ..RenderConfig::default()
        },
    ];
    for cfg in bad {
        assert!(
            matches!(cfg.validate(), Err(CurvecastError::Validation(_))),
            "{cfg:?} should be rejected"
        );
    }
}

#[test]
fn json_fields_are_snake_case() {
    let cfg: RenderConfig = serde_json::from_str(
        r#"{
            "width": 64,
            "height": 32,
            "fps": {"num": 30, "den": 1},
            "frame_count": 90,
            "y_axis": "down",
            "draw_mode": "full_redraw",
            "background": {"kind": "gradient", "colormap": "jet"},
            "color": {"mode": "index"},
            "axes": {"enabled": true}
        }"#,
    )
    .unwrap();
    cfg.validate().unwrap();
    assert_eq!(cfg.y_axis, YAxis::Down);
    assert_eq!(cfg.draw_mode, DrawMode::FullRedraw);
    assert_eq!(cfg.resolved_frame_count(), 90);
    assert_eq!(cfg.color, ColorMode::Index { speed: 0.1 });
    assert!(cfg.axes.enabled);
}
