use std::str::FromStr;

use crate::{
    animation::ease::Ease,
    foundation::error::{FluxError, FluxResult},
};

/// Direction a slide or wipe travels toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoomDir {
    In,
    Out,
}

/// Closed set of scene transitions the render engine understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TransitionKind {
    Fade,
    Slide(Direction),
    Zoom(ZoomDir),
    Rotate,
    Wipe(Direction),
    Blur,
    Glitch,
    Pixelate,
}

impl TransitionKind {
    pub fn name(self) -> String {
        fn dir(d: Direction) -> &'static str {
            match d {
                Direction::Left => "left",
                Direction::Right => "right",
                Direction::Up => "up",
                Direction::Down => "down",
            }
        }

        match self {
            Self::Fade => "fade".to_owned(),
            Self::Slide(d) => format!("slide_{}", dir(d)),
            Self::Zoom(ZoomDir::In) => "zoom_in".to_owned(),
            Self::Zoom(ZoomDir::Out) => "zoom_out".to_owned(),
            Self::Rotate => "rotate".to_owned(),
            Self::Wipe(d) => format!("wipe_{}", dir(d)),
            Self::Blur => "blur".to_owned(),
            Self::Glitch => "glitch".to_owned(),
            Self::Pixelate => "pixelate".to_owned(),
        }
    }
}

pub fn parse_transition(name: &str) -> FluxResult<TransitionKind> {
    let kind = name.trim().to_ascii_lowercase();
    if kind.is_empty() {
        return Err(FluxError::format("transition kind must be non-empty"));
    }

    let direction = |s: &str| match s {
        "left" => Some(Direction::Left),
        "right" => Some(Direction::Right),
        "up" => Some(Direction::Up),
        "down" => Some(Direction::Down),
        _ => None,
    };

    let parsed = match kind.as_str() {
        "fade" | "crossfade" => Some(TransitionKind::Fade),
        "zoom_in" => Some(TransitionKind::Zoom(ZoomDir::In)),
        "zoom_out" => Some(TransitionKind::Zoom(ZoomDir::Out)),
        "rotate" => Some(TransitionKind::Rotate),
        "blur" => Some(TransitionKind::Blur),
        "glitch" => Some(TransitionKind::Glitch),
        "pixelate" => Some(TransitionKind::Pixelate),
        other => {
            if let Some(d) = other.strip_prefix("slide_") {
                direction(d).map(TransitionKind::Slide)
            } else if let Some(d) = other.strip_prefix("wipe_") {
                direction(d).map(TransitionKind::Wipe)
            } else {
                None
            }
        }
    };

    let parsed =
        parsed.ok_or_else(|| FluxError::format(format!("unknown transition kind '{kind}'")))?;
    tracing::debug!(kind = %kind, ?parsed, "parsed transition");
    Ok(parsed)
}

impl FromStr for TransitionKind {
    type Err = FluxError;

    fn from_str(s: &str) -> FluxResult<Self> {
        parse_transition(s)
    }
}

impl TryFrom<String> for TransitionKind {
    type Error = FluxError;

    fn try_from(s: String) -> FluxResult<Self> {
        parse_transition(&s)
    }
}

impl From<TransitionKind> for String {
    fn from(kind: TransitionKind) -> Self {
        kind.name()
    }
}

/// A transition between two scenes: what it looks like, how long it takes and how it is paced.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transition {
    pub kind: TransitionKind,
    pub duration: f64, // seconds
    #[serde(default = "default_transition_ease")]
    pub ease: Ease,
}

fn default_transition_ease() -> Ease {
    Ease::InOutQuad
}

impl Transition {
    pub fn new(kind: TransitionKind, duration: f64) -> FluxResult<Self> {
        if !duration.is_finite() || duration < 0.0 {
            return Err(FluxError::validation(
                "transition duration must be finite and >= 0",
            ));
        }
        Ok(Self {
            kind,
            duration,
            ease: default_transition_ease(),
        })
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Eased progress after `elapsed` seconds. Zero-length transitions are complete.
    pub fn progress(&self, elapsed: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        self.ease.apply(elapsed / self.duration)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/transitions.rs"]
mod tests;
