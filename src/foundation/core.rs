use crate::foundation::error::{FluxError, FluxResult};

pub use kurbo::{Affine, Circle, Point, Rect, Vec2};

/// Absolute 0-based frame index on a timeline.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "FpsRepr", into = "FpsRepr")]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32, // must be > 0
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> FluxResult<Self> {
        if den == 0 {
            return Err(FluxError::domain("fps den must be > 0"));
        }
        if num == 0 {
            return Err(FluxError::domain("fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Integer frame rate, e.g. `Fps::integer(30)`.
    pub fn integer(fps: u32) -> FluxResult<Self> {
        Self::new(fps, 1)
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }
}

impl std::fmt::Display for Fps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

// Either a bare integer (`60`) or `{ "num": 30000, "den": 1001 }`.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum FpsRepr {
    Integer(u32),
    Rational { num: u32, den: u32 },
}

impl TryFrom<FpsRepr> for Fps {
    type Error = FluxError;

    fn try_from(repr: FpsRepr) -> FluxResult<Self> {
        match repr {
            FpsRepr::Integer(n) => Fps::integer(n),
            FpsRepr::Rational { num, den } => Fps::new(num, den),
        }
    }
}

impl From<Fps> for FpsRepr {
    fn from(fps: Fps) -> Self {
        if fps.den == 1 {
            FpsRepr::Integer(fps.num)
        } else {
            FpsRepr::Rational {
                num: fps.num,
                den: fps.den,
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
