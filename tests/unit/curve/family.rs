use super::*;
use std::f64::consts::PI;

fn approx(p: ModelPoint, x: f64, y: f64) -> bool {
    (p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9
}

#[test]
fn presets_round_trip_through_names() {
    for preset in CurveFamily::presets() {
        assert_eq!(CurveFamily::preset(preset.name()), Some(preset.clone()));
        preset.validate().unwrap();
    }
    assert_eq!(CurveFamily::preset("spirograph"), None);
}

#[test]
fn cardioid_cusp_at_origin() {
    let c = CurveFamily::Cardioid(CardioidParams { a: 100.0 });
    assert!(approx(c.sample(0.0).unwrap(), 0.0, 0.0));
    assert!(approx(c.sample(PI).unwrap(), -200.0, 0.0));
}

#[test]
fn cissoid_undefined_at_zero_and_asymptote() {
    let c = CurveFamily::Cissoid(CissoidParams { a: 100.0 });
    assert_eq!(c.sample(0.0), None);
    assert_eq!(c.sample(PI / 2.0), None);
    let p = c.sample(PI / 4.0).unwrap();
    assert!(approx(p, 50.0, 50.0));
}

#[test]
fn epicycloid_starts_on_fixed_circle() {
    let c = CurveFamily::Epicycloid(EpicycloidParams {
        fixed_radius: 100.0,
        rolling_radius: 25.0,
    });
    assert!(approx(c.sample(0.0).unwrap(), 100.0, 0.0));
}

#[test]
fn hypotrochoid_at_zero() {
    let c = CurveFamily::Hypotrochoid(HypotrochoidParams {
        fixed_radius: 200.0,
        rolling_radius: 50.0,
        pen_distance: 30.0,
    });
    assert!(approx(c.sample(0.0).unwrap(), 180.0, 0.0));
}

#[test]
fn harmonograph_decays() {
    let c = CurveFamily::Harmonograph(HarmonographParams::default());
    let early = c.sample(0.0).unwrap();
    let late = c.sample(500.0).unwrap();
    assert!(late.x.abs() < early.x.abs().max(1.0));
    assert!(late.x.abs() < 1e-3);
}

#[test]
fn logarithmic_spiral_overflow_becomes_undefined() {
    let c = CurveFamily::LogarithmicSpiral(LogSpiralParams { a: 1.0, b: 0.5 });
    assert!(c.sample(10.0).is_some());
    assert_eq!(c.sample(5000.0), None);
}

#[test]
fn superellipse_preserves_quadrant_signs() {
    let c = CurveFamily::Superellipse(SuperellipseParams {
        a: 10.0,
        b: 20.0,
        n: 4.0,
    });
    let p = c.sample(PI * 1.25).unwrap();
    assert!(p.x < 0.0 && p.y < 0.0);
    assert!(approx(c.sample(0.0).unwrap(), 10.0, 0.0));
}

#[test]
fn viviani_projection_at_zero() {
    let c = CurveFamily::Viviani(VivianiParams { a: 10.0 });
    assert!(approx(c.sample(0.0).unwrap(), 20.0, 0.0));
}

#[test]
fn lissajous_default_starts_at_right_extreme() {
    let c = CurveFamily::Lissajous(LissajousParams::default());
    assert!(approx(c.sample(0.0).unwrap(), 1.0, 0.0));
}

#[test]
fn butterfly_at_zero() {
    let p = CurveFamily::Butterfly.sample(0.0).unwrap();
    assert!(approx(p, 0.0, std::f64::consts::E - 2.0));
}

#[test]
fn rose_petal_tip() {
    let c = CurveFamily::Rose(RoseParams { k: 4, a: 50.0 });
    assert!(approx(c.sample(0.0).unwrap(), 50.0, 0.0));
}

#[test]
fn validate_rejects_degenerate_params() {
    let zero_roll = CurveFamily::Epicycloid(EpicycloidParams {
        fixed_radius: 100.0,
        rolling_radius: 0.0,
    });
    assert!(zero_roll.validate().is_err());

    let bad_exp = CurveFamily::Superellipse(SuperellipseParams {
        a: 1.0,
        b: 1.0,
        n: 0.0,
    });
    assert!(bad_exp.validate().is_err());

    let nan = CurveFamily::Cardioid(CardioidParams { a: f64::NAN });
    assert!(nan.validate().is_err());
}

#[test]
fn serde_tags_by_family() {
    let c: CurveFamily = serde_json::from_str(
        r#"{"family":"epicycloid","fixed_radius":120.0,"rolling_radius":40.0}"#,
    )
    .unwrap();
    assert_eq!(
        c,
        CurveFamily::Epicycloid(EpicycloidParams {
            fixed_radius: 120.0,
            rolling_radius: 40.0
        })
    );

    let b: CurveFamily = serde_json::from_str(r#"{"family":"butterfly"}"#).unwrap();
    assert_eq!(b, CurveFamily::Butterfly);
}

#[test]
fn default_time_mapping_and_scale_are_finite() {
    for c in CurveFamily::presets() {
        c.default_time_mapping().validate().unwrap();
        assert!(c.default_scale().is_finite() && c.default_scale() > 0.0);
    }
}
