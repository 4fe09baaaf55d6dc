use crate::foundation::core::Rgb8;
use crate::foundation::math::{lerp_u8, round_sat_u8};

/// Named scalar-to-color maps used for gradient backgrounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Colormap {
    /// Blue → cyan → yellow → red.
    Jet,
    /// Cyclic light → blue → dark → red → light.
    #[default]
    Twilight,
    /// Perceptually uniform purple → green → yellow.
    Viridis,
    /// Black → white.
    Gray,
}

const TWILIGHT: &[(f64, [u8; 3])] = &[
    (0.00, [226, 217, 226]),
    (0.12, [166, 186, 210]),
    (0.25, [98, 137, 193]),
    (0.37, [92, 79, 168]),
    (0.50, [47, 20, 54]),
    (0.62, [118, 43, 84]),
    (0.75, [177, 92, 72]),
    (0.87, [210, 167, 152]),
    (1.00, [226, 217, 226]),
];

const VIRIDIS: &[(f64, [u8; 3])] = &[
    (0.00, [68, 1, 84]),
    (0.25, [59, 82, 139]),
    (0.50, [33, 145, 140]),
    (0.75, [94, 201, 98]),
    (1.00, [253, 231, 37]),
];

impl Colormap {
    /// Map a byte-valued gradient sample to a color.
    pub fn map(self, v: u8) -> Rgb8 {
        let t = f64::from(v) / 255.0;
        match self {
            Self::Jet => {
                let ch = |center: f64| round_sat_u8(255.0 * (1.5 - (4.0 * t - center).abs()));
                Rgb8::new(ch(3.0), ch(2.0), ch(1.0))
            }
            Self::Twilight => interpolate(TWILIGHT, t),
            Self::Viridis => interpolate(VIRIDIS, t),
            Self::Gray => Rgb8::gray(v),
        }
    }

    /// Precompute all 256 entries.
    pub fn lut(self) -> [Rgb8; 256] {
        std::array::from_fn(|i| self.map(i as u8))
    }
}

fn interpolate(stops: &[(f64, [u8; 3])], t: f64) -> Rgb8 {
    let t = t.clamp(0.0, 1.0);
    for pair in stops.windows(2) {
        let (t0, c0) = pair[0];
        let (t1, c1) = pair[1];
        if t <= t1 {
            let u = if t1 > t0 { (t - t0) / (t1 - t0) } else { 0.0 };
            return Rgb8::new(
                lerp_u8(c0[0], c1[0], u),
                lerp_u8(c0[1], c1[1], u),
                lerp_u8(c0[2], c1[2], u),
            );
        }
    }
    let [r, g, b] = stops.last().map(|s| s.1).unwrap_or([0, 0, 0]);
    Rgb8::new(r, g, b)
}
