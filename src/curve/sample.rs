use crate::foundation::core::ModelPoint;

/// A parametric curve: pure function from the curve parameter `t` to a model-space point.
///
/// Implementors provide [`Curve::eval`] and return `None` where the curve is undefined
/// (asymptotes, out-of-domain inputs). Callers go through [`Curve::sample`], which additionally
/// maps non-finite results to `None` so that NaN/Inf never reach coordinate mapping.
///
/// Any `Fn(f64) -> Option<ModelPoint>` closure is a curve.
pub trait Curve: Send + Sync {
    /// Raw evaluation at `t`.
    fn eval(&self, t: f64) -> Option<ModelPoint>;

    /// Evaluate at `t`, treating numeric faults as undefined samples.
    fn sample(&self, t: f64) -> Option<ModelPoint> {
        self.eval(t)
            .filter(|p| p.x.is_finite() && p.y.is_finite())
    }
}

impl<F> Curve for F
where
    F: Fn(f64) -> Option<ModelPoint> + Send + Sync,
{
    fn eval(&self, t: f64) -> Option<ModelPoint> {
        self(t)
    }
}
