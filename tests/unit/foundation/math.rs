use super::*;

#[test]
fn round_sat_u8_saturates_and_rounds() {
    assert_eq!(round_sat_u8(-3.0), 0);
    assert_eq!(round_sat_u8(0.49), 0);
    assert_eq!(round_sat_u8(0.5), 1);
    assert_eq!(round_sat_u8(254.6), 255);
    assert_eq!(round_sat_u8(1e9), 255);
    assert_eq!(round_sat_u8(f64::NAN), 0);
}

#[test]
fn trunc_sat_u8_truncates() {
    assert_eq!(trunc_sat_u8(254.99), 254);
    assert_eq!(trunc_sat_u8(255.5), 255);
    assert_eq!(trunc_sat_u8(-0.5), 0);
}

#[test]
fn round_to_i32_rejects_unrepresentable() {
    assert_eq!(round_to_i32(59.5), Some(60));
    assert_eq!(round_to_i32(-0.4), Some(0));
    assert_eq!(round_to_i32(f64::INFINITY), None);
    assert_eq!(round_to_i32(f64::NAN), None);
    assert_eq!(round_to_i32(1e12), None);
}

#[test]
fn lerp_u8_endpoints() {
    assert_eq!(lerp_u8(10, 200, 0.0), 10);
    assert_eq!(lerp_u8(10, 200, 1.0), 200);
    assert_eq!(lerp_u8(0, 100, 0.5), 50);
    assert_eq!(lerp_u8(0, 100, 2.0), 100);
}
