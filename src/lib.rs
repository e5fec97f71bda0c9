//! fluxreel is the numeric kernel behind a programmatic video authoring layer.
//!
//! Everything here is a pure function over plain value types: easing curves and
//! interpolation drive animated properties, color conversions feed effects, and timecode
//! helpers translate between frames and seconds. Scene graphs, rendering and audio analysis
//! live in the external engine; this crate only produces the numbers they consume.
//!
//! - Interpolation: [`lerp`], [`clamp`], [`map_range`], [`smoothstep`], [`bezier`], [`normalize`]
//! - Easing: [`Ease`], [`ease`], [`CubicBezierEase`]
//! - Color: [`Rgb8`], [`Hsl`], [`hex_to_rgb`], [`rgb_to_hsl`], [`hsl_to_rgb`]
//! - Geometry: [`point_distance`], [`point_angle`], [`rotate_point`]
//! - Time: [`frames_to_seconds`], [`format_time`], [`parse_time`]
//!
//! All functions are reentrant; there is no global state. Project-wide settings are carried
//! by an explicit [`ProjectConfig`] value.
#![forbid(unsafe_code)]

mod animation;
mod color;
mod effects;
mod foundation;
mod geometry;
mod project;
mod time;

pub use animation::anim::{Animation, AnimationSequence, Keyframe, Keyframes, Lerp, Repeat};
pub use animation::ease::{CubicBezierEase, Ease, ease};
pub use animation::interp::{
    bezier, bezier_derivative, bezier_point, clamp, denormalize, lerp, map_range, normalize,
    remap, smoothstep,
};
pub use color::hsl::{Hsl, hsl_to_rgb, rgb_to_hsl};
pub use color::rgb::{Rgb8, Rgba8, hex_to_rgb, hex_to_rgba, rgb_to_hex};
pub use effects::transitions::{Direction, Transition, TransitionKind, ZoomDir, parse_transition};
pub use foundation::core::{Affine, Circle, Fps, FrameIndex, Point, Rect, Vec2};
pub use foundation::error::{FluxError, FluxResult};
pub use geometry::point::{
    deg_to_rad, normalize_angle_deg, point_angle, point_distance, rad_to_deg, rotate_point,
};
pub use geometry::shapes::{
    circle_contains, circles_intersect, polygon_contains, rect_center, rect_contains,
    rects_intersect,
};
pub use project::config::{OutputFormat, ProjectConfig, Resolution};
pub use time::timecode::{
    format_time, frame_time, frames_to_seconds, parse_time, seconds_to_frames,
    seconds_to_frames_round,
};
