use crate::curve::sample::Curve;
use crate::curve::time::TimeMapping;
use crate::foundation::core::ModelPoint;
use crate::foundation::error::{CurvecastError, CurvecastResult};
use std::f64::consts::{FRAC_PI_2, TAU};

/// The closed set of built-in curve families, each carrying its per-run parameters.
///
/// Serialized with a `family` tag, e.g. `{"family": "epicycloid", "fixed_radius": 120.0,
/// "rolling_radius": 40.0}`. Parameters are fixed for the lifetime of a run.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum CurveFamily {
    /// Cardioid `r = a(1 - cos t)`.
    Cardioid(CardioidParams),
    /// Cissoid of Diocles.
    Cissoid(CissoidParams),
    /// Circle rolling outside a fixed circle.
    Epicycloid(EpicycloidParams),
    /// Pen point on a circle rolling inside a fixed circle.
    Hypotrochoid(HypotrochoidParams),
    /// Two damped pendulums.
    Harmonograph(HarmonographParams),
    /// Logarithmic spiral `r = a e^(bt)`.
    LogarithmicSpiral(LogSpiralParams),
    /// Nephroid.
    Nephroid(NephroidParams),
    /// Lamé curve `|x/a|^n + |y/b|^n = 1`.
    Superellipse(SuperellipseParams),
    /// Viviani's curve, obliquely projected to the plane.
    Viviani(VivianiParams),
    /// Cloverleaf with `lobes` lobes.
    Cloverleaf(CloverleafParams),
    /// Lissajous figure.
    Lissajous(LissajousParams),
    /// Temple Fay's butterfly curve.
    Butterfly,
    /// Rhodonea (rose) curve `r = a cos(kt)`.
    Rose(RoseParams),
}

/// Cardioid parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CardioidParams {
    /// Generating radius.
    pub a: f64,
}

/// Cissoid parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CissoidParams {
    /// Generating circle diameter.
    pub a: f64,
}

/// Epicycloid parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EpicycloidParams {
    /// Radius of the fixed circle.
    pub fixed_radius: f64,
    /// Radius of the rolling circle (non-zero).
    pub rolling_radius: f64,
}

/// Hypotrochoid parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HypotrochoidParams {
    /// Radius of the fixed circle.
    pub fixed_radius: f64,
    /// Radius of the rolling circle (non-zero).
    pub rolling_radius: f64,
    /// Distance of the pen from the rolling circle's center.
    pub pen_distance: f64,
}

/// Harmonograph parameters: per axis amplitude, frequency, damping, and phase.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HarmonographParams {
    /// Amplitudes `[x, y]`.
    pub amplitude: [f64; 2],
    /// Angular frequencies `[x, y]`.
    pub frequency: [f64; 2],
    /// Exponential damping rates `[x, y]`.
    pub damping: [f64; 2],
    /// Phase shifts `[x, y]`.
    pub phase: [f64; 2],
}

/// Logarithmic spiral parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LogSpiralParams {
    /// Radius at `t = 0`.
    pub a: f64,
    /// Growth rate.
    pub b: f64,
}

/// Nephroid parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NephroidParams {
    /// Rolling circle radius.
    pub a: f64,
}

/// Superellipse parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SuperellipseParams {
    /// Horizontal semi-axis.
    pub a: f64,
    /// Vertical semi-axis.
    pub b: f64,
    /// Shape exponent (positive).
    pub n: f64,
}

/// Viviani curve parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VivianiParams {
    /// Sphere radius.
    pub a: f64,
}

/// Cloverleaf parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CloverleafParams {
    /// Lobe frequency.
    pub lobes: u32,
}

/// Lissajous parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LissajousParams {
    /// Amplitudes `[x, y]`.
    pub amplitude: [f64; 2],
    /// Frequencies `[x, y]`.
    pub frequency: [f64; 2],
    /// Phase shift applied to the x component.
    pub delta: f64,
}

/// Rose curve parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RoseParams {
    /// Petal frequency.
    pub k: u32,
    /// Petal length.
    pub a: f64,
}

impl Default for CardioidParams {
    fn default() -> Self {
        Self { a: 200.0 }
    }
}

impl Default for CissoidParams {
    fn default() -> Self {
        Self { a: 150.0 }
    }
}

impl Default for EpicycloidParams {
    fn default() -> Self {
        Self {
            fixed_radius: 125.0,
            rolling_radius: 55.0,
        }
    }
}

impl Default for HypotrochoidParams {
    fn default() -> Self {
        Self {
            fixed_radius: 200.0,
            rolling_radius: 55.0,
            pen_distance: 100.0,
        }
    }
}

impl Default for HarmonographParams {
    fn default() -> Self {
        Self {
            amplitude: [100.0, 100.0],
            frequency: [1.25, 0.75],
            damping: [0.03, 0.02],
            phase: [0.5, 1.5],
        }
    }
}

impl Default for LogSpiralParams {
    fn default() -> Self {
        Self { a: 1.0, b: 0.3 }
    }
}

impl Default for NephroidParams {
    fn default() -> Self {
        Self { a: 120.0 }
    }
}

impl Default for SuperellipseParams {
    fn default() -> Self {
        Self {
            a: 200.0,
            b: 200.0,
            n: 3.0,
        }
    }
}

impl Default for VivianiParams {
    fn default() -> Self {
        Self { a: 150.0 }
    }
}

impl Default for CloverleafParams {
    fn default() -> Self {
        Self { lobes: 3 }
    }
}

impl Default for LissajousParams {
    fn default() -> Self {
        Self {
            amplitude: [1.0, 1.0],
            frequency: [3.0, 2.0],
            delta: FRAC_PI_2,
        }
    }
}

impl Default for RoseParams {
    fn default() -> Self {
        Self { k: 5, a: 250.0 }
    }
}

impl CurveFamily {
    /// One instance of every family with its default parameters.
    pub fn presets() -> Vec<Self> {
        vec![
            Self::Cardioid(CardioidParams::default()),
            Self::Cissoid(CissoidParams::default()),
            Self::Epicycloid(EpicycloidParams::default()),
            Self::Hypotrochoid(HypotrochoidParams::default()),
            Self::Harmonograph(HarmonographParams::default()),
            Self::LogarithmicSpiral(LogSpiralParams::default()),
            Self::Nephroid(NephroidParams::default()),
            Self::Superellipse(SuperellipseParams::default()),
            Self::Viviani(VivianiParams::default()),
            Self::Cloverleaf(CloverleafParams::default()),
            Self::Lissajous(LissajousParams::default()),
            Self::Butterfly,
            Self::Rose(RoseParams::default()),
        ]
    }

    /// Look up a preset by its serialized family name.
    pub fn preset(name: &str) -> Option<Self> {
        Self::presets().into_iter().find(|c| c.name() == name)
    }

    /// Serialized family name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cardioid(_) => "cardioid",
            Self::Cissoid(_) => "cissoid",
            Self::Epicycloid(_) => "epicycloid",
            Self::Hypotrochoid(_) => "hypotrochoid",
            Self::Harmonograph(_) => "harmonograph",
            Self::LogarithmicSpiral(_) => "logarithmic_spiral",
            Self::Nephroid(_) => "nephroid",
            Self::Superellipse(_) => "superellipse",
            Self::Viviani(_) => "viviani",
            Self::Cloverleaf(_) => "cloverleaf",
            Self::Lissajous(_) => "lissajous",
            Self::Butterfly => "butterfly",
            Self::Rose(_) => "rose",
        }
    }

    /// Time mapping that draws the family's characteristic figure at 60 fps / 10 s.
    pub fn default_time_mapping(&self) -> TimeMapping {
        match self {
            Self::Cardioid(_) | Self::Nephroid(_) | Self::Superellipse(_) => {
                TimeMapping::Cycles { cycles: 1.0 }
            }
            Self::Cissoid(_) => TimeMapping::Cycles { cycles: 0.25 },
            Self::Viviani(_) => TimeMapping::Cycles { cycles: 2.0 },
            Self::Hypotrochoid(_) => TimeMapping::Cycles { cycles: 10.0 },
            Self::Rose(p) => TimeMapping::Cycles {
                cycles: f64::from(p.k),
            },
            Self::Epicycloid(_) => TimeMapping::PerSecond { rate: TAU / 5.0 },
            Self::Harmonograph(_) => TimeMapping::PerSecond { rate: 1.0 },
            Self::LogarithmicSpiral(_) | Self::Cloverleaf(_) => TimeMapping::Linear {
                step: 1.0 / 30.0,
                offset: 0.0,
            },
            Self::Lissajous(_) | Self::Butterfly => TimeMapping::Linear {
                step: 1.0 / 60.0,
                offset: 0.0,
            },
        }
    }

    /// Pixels per model unit that fits the default figure on a 1920×1080 canvas.
    pub fn default_scale(&self) -> f64 {
        match self {
            Self::Epicycloid(p) => 200.0 / p.fixed_radius,
            Self::Hypotrochoid(p) => 200.0 / p.fixed_radius,
            Self::Harmonograph(_) => 4.0,
            Self::LogarithmicSpiral(_) => 10.0,
            Self::Cloverleaf(_) | Self::Lissajous(_) => 300.0,
            Self::Butterfly => 150.0,
            Self::Cardioid(_)
            | Self::Cissoid(_)
            | Self::Nephroid(_)
            | Self::Superellipse(_)
            | Self::Viviani(_)
            | Self::Rose(_) => 1.0,
        }
    }

    /// Reject parameters that make the family degenerate or non-finite.
    pub fn validate(&self) -> CurvecastResult<()> {
        let finite = |name: &str, vals: &[f64]| -> CurvecastResult<()> {
            if vals.iter().all(|v| v.is_finite()) {
                Ok(())
            } else {
                Err(CurvecastError::validation(format!(
                    "{name} parameters must be finite"
                )))
            }
        };

        match self {
            Self::Cardioid(p) => finite("cardioid", &[p.a]),
            Self::Cissoid(p) => finite("cissoid", &[p.a]),
            Self::Epicycloid(p) => {
                finite("epicycloid", &[p.fixed_radius, p.rolling_radius])?;
                nonzero("epicycloid rolling_radius", p.rolling_radius)
            }
            Self::Hypotrochoid(p) => {
                finite(
                    "hypotrochoid",
                    &[p.fixed_radius, p.rolling_radius, p.pen_distance],
                )?;
                nonzero("hypotrochoid rolling_radius", p.rolling_radius)
            }
            Self::Harmonograph(p) => {
                let mut all = Vec::with_capacity(8);
                all.extend_from_slice(&p.amplitude);
                all.extend_from_slice(&p.frequency);
                all.extend_from_slice(&p.damping);
                all.extend_from_slice(&p.phase);
                finite("harmonograph", &all)
            }
            Self::LogarithmicSpiral(p) => finite("logarithmic_spiral", &[p.a, p.b]),
            Self::Nephroid(p) => finite("nephroid", &[p.a]),
            Self::Superellipse(p) => {
                finite("superellipse", &[p.a, p.b, p.n])?;
                if p.n > 0.0 {
                    Ok(())
                } else {
                    Err(CurvecastError::validation(
                        "superellipse exponent n must be > 0",
                    ))
                }
            }
            Self::Viviani(p) => finite("viviani", &[p.a]),
            Self::Cloverleaf(_) | Self::Butterfly => Ok(()),
            Self::Lissajous(p) => finite(
                "lissajous",
                &[
                    p.amplitude[0],
                    p.amplitude[1],
                    p.frequency[0],
                    p.frequency[1],
                    p.delta,
                ],
            ),
            Self::Rose(p) => finite("rose", &[p.a]),
        }
    }
}

fn nonzero(name: &str, v: f64) -> CurvecastResult<()> {
    if v == 0.0 {
        return Err(CurvecastError::validation(format!("{name} must be non-zero")));
    }
    Ok(())
}

impl Curve for CurveFamily {
    fn eval(&self, t: f64) -> Option<ModelPoint> {
        let (x, y) = match self {
            Self::Cardioid(p) => {
                let r = p.a * (1.0 - t.cos());
                (r * t.cos(), r * t.sin())
            }
            Self::Cissoid(p) => {
                if t == 0.0 || t.cos().abs() < 1e-12 {
                    return None;
                }
                let tan = t.tan();
                let x = p.a * tan * tan / (1.0 + tan * tan);
                (x, tan * x)
            }
            Self::Epicycloid(p) => {
                let (big, small) = (p.fixed_radius, p.rolling_radius);
                let k = (big + small) / small;
                (
                    (big + small) * t.cos() - small * (k * t).cos(),
                    (big + small) * t.sin() - small * (k * t).sin(),
                )
            }
            Self::Hypotrochoid(p) => {
                let (big, small, d) = (p.fixed_radius, p.rolling_radius, p.pen_distance);
                let k = (big - small) / small;
                (
                    (big - small) * t.cos() + d * (k * t).cos(),
                    (big - small) * t.sin() - d * (k * t).sin(),
                )
            }
            Self::Harmonograph(p) => {
                let axis = |i: usize| {
                    p.amplitude[i]
                        * (p.frequency[i] * t + p.phase[i]).sin()
                        * (-p.damping[i] * t).exp()
                };
                (axis(0), axis(1))
            }
            Self::LogarithmicSpiral(p) => {
                let r = p.a * (p.b * t).exp();
                (r * t.cos(), r * t.sin())
            }
            Self::Nephroid(p) => (
                p.a * (3.0 * t.cos() - (3.0 * t).cos()),
                p.a * (3.0 * t.sin() - (3.0 * t).sin()),
            ),
            Self::Superellipse(p) => {
                let e = 2.0 / p.n;
                let (c, s) = (t.cos(), t.sin());
                (
                    p.a * c.abs().powf(e).copysign(c),
                    p.b * s.abs().powf(e).copysign(s),
                )
            }
            Self::Viviani(p) => {
                let x = p.a * (1.0 + t.cos());
                let y = p.a * t.sin();
                let z = 2.0 * p.a * (t / 2.0).sin();
                (x + z * 0.5, y - z * 0.5)
            }
            Self::Cloverleaf(p) => {
                let n = f64::from(p.lobes);
                (t.sin() * (n * t).cos(), t.cos() * (n * t).sin())
            }
            Self::Lissajous(p) => (
                p.amplitude[0] * (p.frequency[0] * t + p.delta).sin(),
                p.amplitude[1] * (p.frequency[1] * t).sin(),
            ),
            Self::Butterfly => {
                let r = t.cos().exp() - 2.0 * (4.0 * t).cos() - (t / 12.0).sin().powi(5);
                (t.sin() * r, t.cos() * r)
            }
            Self::Rose(p) => {
                let r = p.a * (f64::from(p.k) * t).cos();
                (r * t.cos(), r * t.sin())
            }
        };
        Some(ModelPoint::new(x, y))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/family.rs"]
mod tests;
