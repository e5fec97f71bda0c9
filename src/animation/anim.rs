use crate::{
    animation::ease::Ease,
    color::rgb::{Rgb8, Rgba8},
    foundation::core::{Point, Vec2},
    foundation::error::{FluxError, FluxResult},
};

/// Values that can be blended between two keyframes.
pub trait Lerp: Sized {
    /// Blend from `a` (at `t = 0`) to `b` (at `t = 1`).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        crate::animation::interp::lerp(*a, *b, t)
    }
}

impl Lerp for f32 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        (*a as f64 + ((*b as f64 - *a as f64) * t)) as f32
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a.lerp(*b, t)
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a.lerp(*b, t)
    }
}

fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
    let a = f64::from(a);
    let b = f64::from(b);
    (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
}

impl Lerp for Rgb8 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
        }
    }
}

impl Lerp for Rgba8 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
            a: lerp_u8(a.a, b.a, t),
        }
    }
}

/// A value pinned at a point in time (seconds).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframe<T> {
    pub time: f64,
    pub value: T,
    #[serde(default = "default_ease")]
    pub ease: Ease, // ease applied toward next key
}

fn default_ease() -> Ease {
    Ease::Linear
}

impl<T> Keyframe<T> {
    pub fn new(time: f64, value: T, ease: Ease) -> Self {
        Self { time, value, ease }
    }
}

/// Keyframe track sampled by time in seconds.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframes<T> {
    pub keys: Vec<Keyframe<T>>, // sorted by time
    pub default: Option<T>, // value when no keys exist
}

impl<T> Default for Keyframes<T> {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            default: None,
        }
    }
}

impl<T> Keyframes<T>
where
    T: Lerp + Clone,
{
    pub fn new(keys: Vec<Keyframe<T>>) -> FluxResult<Self> {
        let kf = Self {
            keys,
            default: None,
        };
        kf.validate()?;
        Ok(kf)
    }

    pub fn validate(&self) -> FluxResult<()> {
        if self.keys.is_empty() && self.default.is_none() {
            return Err(FluxError::validation(
                "keyframes must have at least one key or a default value",
            ));
        }
        if self.keys.iter().any(|k| !k.time.is_finite()) {
            return Err(FluxError::validation("keyframe times must be finite"));
        }
        if !self.keys.windows(2).all(|w| w[0].time <= w[1].time) {
            return Err(FluxError::validation("keyframes must be sorted by time"));
        }
        Ok(())
    }

    /// Insert a key, keeping the track sorted. Keys with equal times keep insertion order.
    pub fn insert(&mut self, key: Keyframe<T>) -> FluxResult<()> {
        if !key.time.is_finite() {
            return Err(FluxError::validation("keyframe time must be finite"));
        }
        let idx = self.keys.partition_point(|k| k.time <= key.time);
        self.keys.insert(idx, key);
        Ok(())
    }

    /// Time of the last key, or `0.0` for an empty track.
    pub fn end_time(&self) -> f64 {
        self.keys.last().map_or(0.0, |k| k.time)
    }

    /// Sample the track at `time`.
    ///
    /// Holds the first value before the first key and the last value after the last key.
    /// Between keys the left key's ease shapes the blend.
    pub fn sample(&self, time: f64) -> FluxResult<T> {
        if self.keys.is_empty() {
            return self
                .default
                .clone()
                .ok_or_else(|| FluxError::validation("keyframes has no keys and no default"));
        }

        let idx = self.keys.partition_point(|k| k.time <= time);

        if idx == 0 {
            return Ok(self.keys[0].value.clone());
        }
        if idx >= self.keys.len() {
            return Ok(self.keys[self.keys.len() - 1].value.clone());
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let span = b.time - a.time;
        if span <= 0.0 {
            return Ok(b.value.clone());
        }

        let t = (time - a.time) / span;
        Ok(T::lerp(&a.value, &b.value, a.ease.apply(t)))
    }
}

/// How many times an [`Animation`] plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Repeat {
    Count(u32),
    Infinite,
}

impl Default for Repeat {
    fn default() -> Self {
        Self::Count(1)
    }
}

/// A keyframe track bound to a named property with a play duration and repeat policy.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Animation<T> {
    pub property: String,
    pub track: Keyframes<T>,
    pub duration: f64, // seconds per play
    #[serde(default)]
    pub repeat: Repeat,
}

impl<T> Animation<T>
where
    T: Lerp + Clone,
{
    pub fn new(property: impl Into<String>, duration: f64) -> Self {
        Self {
            property: property.into(),
            track: Keyframes::default(),
            duration,
            repeat: Repeat::default(),
        }
    }

    pub fn with_key(mut self, time: f64, value: T, ease: Ease) -> FluxResult<Self> {
        self.track.insert(Keyframe::new(time, value, ease))?;
        Ok(self)
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn validate(&self) -> FluxResult<()> {
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(FluxError::validation(format!(
                "animation '{}' duration must be finite and >= 0",
                self.property
            )));
        }
        if self.repeat == Repeat::Count(0) {
            return Err(FluxError::validation(format!(
                "animation '{}' repeat count must be > 0",
                self.property
            )));
        }
        self.track.validate()
    }

    /// Total play time in seconds, `None` when repeating forever.
    pub fn total_duration(&self) -> Option<f64> {
        match self.repeat {
            Repeat::Count(n) => Some(self.duration * f64::from(n)),
            Repeat::Infinite => None,
        }
    }

    /// Sample at `time` seconds since the animation started.
    pub fn sample(&self, time: f64) -> FluxResult<T> {
        self.track.sample(self.local_time(time))
    }

    fn local_time(&self, time: f64) -> f64 {
        if time <= 0.0 || self.duration <= 0.0 {
            return time.max(0.0).min(self.duration.max(0.0));
        }
        match self.total_duration() {
            Some(total) if time >= total => self.duration,
            _ => time.rem_euclid(self.duration),
        }
    }
}

/// Composition of animation durations, played either one after another or together.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationSequence {
    Step(f64),
    Sequential(Vec<AnimationSequence>),
    Parallel(Vec<AnimationSequence>),
}

impl AnimationSequence {
    pub fn of<T: Lerp + Clone>(anim: &Animation<T>) -> Self {
        Self::Step(anim.total_duration().unwrap_or(f64::INFINITY))
    }

    /// Sum for sequential groups, maximum for parallel groups.
    pub fn duration(&self) -> f64 {
        match self {
            Self::Step(d) => *d,
            Self::Sequential(items) => items.iter().map(Self::duration).sum(),
            Self::Parallel(items) => items.iter().map(Self::duration).fold(0.0, f64::max),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
