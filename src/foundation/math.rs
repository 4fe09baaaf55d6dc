/// Round and saturate a channel value into `u8`. NaN maps to 0.
pub(crate) fn round_sat_u8(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(0.0, 255.0) as u8
}

/// Truncate and saturate a channel value into `u8`. NaN maps to 0.
pub(crate) fn trunc_sat_u8(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.clamp(0.0, 255.0) as u8
}

/// Round to the nearest `i32` when the result is representable.
pub(crate) fn round_to_i32(v: f64) -> Option<i32> {
    let r = v.round();
    if r.is_finite() && r >= f64::from(i32::MIN) && r <= f64::from(i32::MAX) {
        Some(r as i32)
    } else {
        None
    }
}

/// Linear interpolation between two bytes, `t` in `[0, 1]`.
pub(crate) fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
    round_sat_u8(f64::from(a) + (f64::from(b) - f64::from(a)) * t.clamp(0.0, 1.0))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
