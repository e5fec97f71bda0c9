use std::f64::consts::PI;
use std::str::FromStr;

use crate::animation::interp::{bezier, bezier_derivative};
use crate::foundation::error::{FluxError, FluxResult};

/// Named easing curves mapping normalized progress to eased progress.
///
/// Every curve returns exactly `0.0` at `t = 0` and `1.0` at `t = 1`. Elastic and back
/// curves overshoot `[0, 1]` in between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Ease {
    /// Identity.
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
    /// Quartic ease-in.
    InQuart,
    /// Quartic ease-out.
    OutQuart,
    /// Quartic ease-in/out.
    InOutQuart,
    /// Quintic ease-in.
    InQuint,
    /// Quintic ease-out.
    OutQuint,
    /// Quintic ease-in/out.
    InOutQuint,
    /// Sinusoidal ease-in.
    InSine,
    /// Sinusoidal ease-out.
    OutSine,
    /// Sinusoidal ease-in/out.
    InOutSine,
    /// Exponential ease-in.
    InExpo,
    /// Exponential ease-out.
    OutExpo,
    /// Exponential ease-in/out.
    InOutExpo,
    /// Circular ease-in.
    InCirc,
    /// Circular ease-out.
    OutCirc,
    /// Circular ease-in/out.
    InOutCirc,
    /// Elastic ease-in (overshoots below 0).
    InElastic,
    /// Elastic ease-out (overshoots above 1).
    OutElastic,
    /// Elastic ease-in/out (overshoots on both sides).
    InOutElastic,
    /// Back ease-in (dips below 0).
    InBack,
    /// Back ease-out (overshoots above 1).
    OutBack,
    /// Back ease-in/out.
    InOutBack,
    /// Bounce ease-in.
    InBounce,
    /// Bounce ease-out.
    OutBounce,
    /// Bounce ease-in/out.
    InOutBounce,
}

impl Ease {
    /// Every curve, in declaration order.
    pub const ALL: [Ease; 31] = [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::InQuart,
        Ease::OutQuart,
        Ease::InOutQuart,
        Ease::InQuint,
        Ease::OutQuint,
        Ease::InOutQuint,
        Ease::InSine,
        Ease::OutSine,
        Ease::InOutSine,
        Ease::InExpo,
        Ease::OutExpo,
        Ease::InOutExpo,
        Ease::InCirc,
        Ease::OutCirc,
        Ease::InOutCirc,
        Ease::InElastic,
        Ease::OutElastic,
        Ease::InOutElastic,
        Ease::InBack,
        Ease::OutBack,
        Ease::InOutBack,
        Ease::InBounce,
        Ease::OutBounce,
        Ease::InOutBounce,
    ];

    /// Apply this easing function to normalized progress `t`, clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        // Endpoints are exact for every curve.
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        (self.curve())(t)
    }

    /// Canonical snake_case name, e.g. `"quad_in"` or `"elastic_out"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::InQuad => "quad_in",
            Self::OutQuad => "quad_out",
            Self::InOutQuad => "quad_in_out",
            Self::InCubic => "cubic_in",
            Self::OutCubic => "cubic_out",
            Self::InOutCubic => "cubic_in_out",
            Self::InQuart => "quart_in",
            Self::OutQuart => "quart_out",
            Self::InOutQuart => "quart_in_out",
            Self::InQuint => "quint_in",
            Self::OutQuint => "quint_out",
            Self::InOutQuint => "quint_in_out",
            Self::InSine => "sine_in",
            Self::OutSine => "sine_out",
            Self::InOutSine => "sine_in_out",
            Self::InExpo => "expo_in",
            Self::OutExpo => "expo_out",
            Self::InOutExpo => "expo_in_out",
            Self::InCirc => "circ_in",
            Self::OutCirc => "circ_out",
            Self::InOutCirc => "circ_in_out",
            Self::InElastic => "elastic_in",
            Self::OutElastic => "elastic_out",
            Self::InOutElastic => "elastic_in_out",
            Self::InBack => "back_in",
            Self::OutBack => "back_out",
            Self::InOutBack => "back_in_out",
            Self::InBounce => "bounce_in",
            Self::OutBounce => "bounce_out",
            Self::InOutBounce => "bounce_in_out",
        }
    }

    /// Return `true` for curves whose interior values leave `[0, 1]`.
    pub fn overshoots(self) -> bool {
        matches!(
            self,
            Self::InElastic
                | Self::OutElastic
                | Self::InOutElastic
                | Self::InBack
                | Self::OutBack
                | Self::InOutBack
        )
    }

    fn curve(self) -> fn(f64) -> f64 {
        match self {
            Self::Linear => |t| t,
            Self::InQuad => |t| t * t,
            Self::OutQuad => |t| 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => |t| in_out_pow(t, 2),
            Self::InCubic => |t| t * t * t,
            Self::OutCubic => |t| 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => |t| in_out_pow(t, 3),
            Self::InQuart => |t| t.powi(4),
            Self::OutQuart => |t| 1.0 - (1.0 - t).powi(4),
            Self::InOutQuart => |t| in_out_pow(t, 4),
            Self::InQuint => |t| t.powi(5),
            Self::OutQuint => |t| 1.0 - (1.0 - t).powi(5),
            Self::InOutQuint => |t| in_out_pow(t, 5),
            Self::InSine => |t| 1.0 - (t * PI / 2.0).cos(),
            Self::OutSine => |t| (t * PI / 2.0).sin(),
            Self::InOutSine => |t| -((PI * t).cos() - 1.0) / 2.0,
            Self::InExpo => |t| 2.0_f64.powf(10.0 * t - 10.0),
            Self::OutExpo => |t| 1.0 - 2.0_f64.powf(-10.0 * t),
            Self::InOutExpo => in_out_expo,
            Self::InCirc => |t| 1.0 - (1.0 - t * t).sqrt(),
            Self::OutCirc => |t| (1.0 - (t - 1.0) * (t - 1.0)).sqrt(),
            Self::InOutCirc => in_out_circ,
            Self::InElastic => in_elastic,
            Self::OutElastic => out_elastic,
            Self::InOutElastic => in_out_elastic,
            Self::InBack => in_back,
            Self::OutBack => out_back,
            Self::InOutBack => in_out_back,
            Self::InBounce => |t| 1.0 - out_bounce(1.0 - t),
            Self::OutBounce => out_bounce,
            Self::InOutBounce => in_out_bounce,
        }
    }
}

/// Evaluate `curve` at normalized progress `t`.
#[inline]
pub fn ease(curve: Ease, t: f64) -> f64 {
    curve.apply(t)
}

impl std::fmt::Display for Ease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Ease {
    type Err = FluxError;

    fn from_str(s: &str) -> FluxResult<Self> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "ease_in" => return Ok(Self::InQuad),
            "ease_out" => return Ok(Self::OutQuad),
            "ease_in_out" => return Ok(Self::InOutQuad),
            "elastic" => return Ok(Self::OutElastic),
            _ => {}
        }
        Self::ALL
            .into_iter()
            .find(|e| e.name() == name)
            .ok_or_else(|| FluxError::format(format!("unknown easing curve '{}'", s.trim())))
    }
}

impl From<Ease> for &'static str {
    fn from(ease: Ease) -> Self {
        ease.name()
    }
}

impl TryFrom<String> for Ease {
    type Error = FluxError;

    fn try_from(s: String) -> FluxResult<Self> {
        s.parse()
    }
}

// 2^(n-1) * t^n on the first half, mirrored on the second.
fn in_out_pow(t: f64, n: i32) -> f64 {
    if t < 0.5 {
        2.0_f64.powi(n - 1) * t.powi(n)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(n) / 2.0
    }
}

fn in_out_expo(t: f64) -> f64 {
    if t < 0.5 {
        2.0_f64.powf(20.0 * t - 10.0) / 2.0
    } else {
        (2.0 - 2.0_f64.powf(-20.0 * t + 10.0)) / 2.0
    }
}

fn in_out_circ(t: f64) -> f64 {
    if t < 0.5 {
        (1.0 - (1.0 - (2.0 * t).powi(2)).sqrt()) / 2.0
    } else {
        ((1.0 - (-2.0 * t + 2.0).powi(2)).sqrt() + 1.0) / 2.0
    }
}

const ELASTIC_C4: f64 = (2.0 * PI) / 3.0;
const ELASTIC_C5: f64 = (2.0 * PI) / 4.5;

fn in_elastic(t: f64) -> f64 {
    -(2.0_f64.powf(10.0 * t - 10.0)) * ((t * 10.0 - 10.75) * ELASTIC_C4).sin()
}

fn out_elastic(t: f64) -> f64 {
    2.0_f64.powf(-10.0 * t) * ((t * 10.0 - 0.75) * ELASTIC_C4).sin() + 1.0
}

fn in_out_elastic(t: f64) -> f64 {
    if t < 0.5 {
        -(2.0_f64.powf(20.0 * t - 10.0) * ((20.0 * t - 11.125) * ELASTIC_C5).sin()) / 2.0
    } else {
        (2.0_f64.powf(-20.0 * t + 10.0) * ((20.0 * t - 11.125) * ELASTIC_C5).sin()) / 2.0 + 1.0
    }
}

const BACK_C1: f64 = 1.70158;
const BACK_C2: f64 = BACK_C1 * 1.525;
const BACK_C3: f64 = BACK_C1 + 1.0;

fn in_back(t: f64) -> f64 {
    BACK_C3 * t * t * t - BACK_C1 * t * t
}

fn out_back(t: f64) -> f64 {
    1.0 + BACK_C3 * (t - 1.0).powi(3) + BACK_C1 * (t - 1.0).powi(2)
}

fn in_out_back(t: f64) -> f64 {
    if t < 0.5 {
        ((2.0 * t).powi(2) * ((BACK_C2 + 1.0) * 2.0 * t - BACK_C2)) / 2.0
    } else {
        ((2.0 * t - 2.0).powi(2) * ((BACK_C2 + 1.0) * (t * 2.0 - 2.0) + BACK_C2) + 2.0) / 2.0
    }
}

fn out_bounce(t: f64) -> f64 {
    const N1: f64 = 7.5625;
    const D1: f64 = 2.75;

    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

fn in_out_bounce(t: f64) -> f64 {
    if t < 0.5 {
        (1.0 - out_bounce(1.0 - 2.0 * t)) / 2.0
    } else {
        (1.0 + out_bounce(2.0 * t - 1.0)) / 2.0
    }
}

/// CSS-style timing curve through `(0, 0)`, `(x1, y1)`, `(x2, y2)`, `(1, 1)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "CubicBezierRepr")]
pub struct CubicBezierEase {
    /// First control point x, in `[0, 1]`.
    pub x1: f64,
    /// First control point y.
    pub y1: f64,
    /// Second control point x, in `[0, 1]`.
    pub x2: f64,
    /// Second control point y.
    pub y2: f64,
}

#[derive(serde::Deserialize)]
struct CubicBezierRepr {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl TryFrom<CubicBezierRepr> for CubicBezierEase {
    type Error = FluxError;

    fn try_from(r: CubicBezierRepr) -> FluxResult<Self> {
        Self::new(r.x1, r.y1, r.x2, r.y2)
    }
}

impl CubicBezierEase {
    /// CSS `ease`.
    pub const EASE: Self = Self::from_raw(0.25, 0.1, 0.25, 1.0);
    /// CSS `ease-in`.
    pub const EASE_IN: Self = Self::from_raw(0.42, 0.0, 1.0, 1.0);
    /// CSS `ease-out`.
    pub const EASE_OUT: Self = Self::from_raw(0.0, 0.0, 0.58, 1.0);
    /// CSS `ease-in-out`.
    pub const EASE_IN_OUT: Self = Self::from_raw(0.42, 0.0, 0.58, 1.0);

    const fn from_raw(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Create a timing curve. `x1` and `x2` must lie in `[0, 1]` so that x is monotonic.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> FluxResult<Self> {
        if ![x1, y1, x2, y2].iter().all(|v| v.is_finite()) {
            return Err(FluxError::domain("cubic-bezier controls must be finite"));
        }
        if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
            return Err(FluxError::domain(format!(
                "cubic-bezier x controls must be in [0, 1] (got x1={x1}, x2={x2})"
            )));
        }
        Ok(Self::from_raw(x1, y1, x2, y2))
    }

    /// Eased output for input progress `x`, clamped to `[0, 1]`.
    pub fn apply(&self, x: f64) -> f64 {
        let x = x.clamp(0.0, 1.0);
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        let p = self.solve_param(x);
        bezier(p, 0.0, self.y1, self.y2, 1.0)
    }

    // Find the curve parameter whose x equals `x`: Newton first, bisection when the slope
    // flattens out.
    fn solve_param(&self, x: f64) -> f64 {
        const EPS: f64 = 1e-9;

        let x_at = |p: f64| bezier(p, 0.0, self.x1, self.x2, 1.0);

        let mut p = x;
        for _ in 0..8 {
            let err = x_at(p) - x;
            if err.abs() < EPS {
                return p;
            }
            let slope = bezier_derivative(p, 0.0, self.x1, self.x2, 1.0);
            if slope.abs() < 1e-7 {
                break;
            }
            p -= err / slope;
        }

        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        p = x;
        for _ in 0..64 {
            let v = x_at(p);
            if (v - x).abs() < EPS {
                break;
            }
            if v < x {
                lo = p;
            } else {
                hi = p;
            }
            p = (lo + hi) * 0.5;
        }
        p
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
