use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{FluxError, FluxResult};

/// Convert a frame count to seconds.
pub fn frames_to_seconds(frames: u64, fps: Fps) -> f64 {
    (frames as f64) * f64::from(fps.den) / f64::from(fps.num)
}

/// Convert seconds to a frame count using floor semantics. Negative input yields 0.
pub fn seconds_to_frames(seconds: f64, fps: Fps) -> u64 {
    (seconds * fps.as_f64()).floor().max(0.0) as u64
}

/// Convert seconds to the nearest frame. Negative input yields 0.
pub fn seconds_to_frames_round(seconds: f64, fps: Fps) -> u64 {
    (seconds * fps.as_f64()).round().max(0.0) as u64
}

/// Timeline position of `frame` in seconds.
pub fn frame_time(frame: FrameIndex, fps: Fps) -> f64 {
    frames_to_seconds(frame.0, fps)
}

/// Format seconds as `HH:MM:SS.mmm`.
///
/// The value is rounded to whole milliseconds before splitting, so `59.9996` becomes
/// `00:01:00.000`. Hours do not wrap at 24. Negative and non-finite input formats as zero.
pub fn format_time(seconds: f64) -> String {
    let total_ms = if seconds.is_finite() && seconds > 0.0 {
        (seconds * 1000.0).round() as u64
    } else {
        0
    };
    let ms = total_ms % 1000;
    let total_secs = total_ms / 1000;
    let secs = total_secs % 60;
    let minutes = (total_secs / 60) % 60;
    let hours = total_secs / 3600;
    format!("{hours:02}:{minutes:02}:{secs:02}.{ms:03}")
}

/// Parse `MM:SS[.fff]` or `HH:MM:SS[.fff]` into seconds.
///
/// # Errors
///
/// [`FluxError::Format`] for any other shape, or when a component is not a finite,
/// non-negative number.
pub fn parse_time(s: &str) -> FluxResult<f64> {
    let parts: Vec<&str> = s.trim().split(':').collect();

    let component = |part: &str| -> FluxResult<f64> {
        let v: f64 = part
            .parse()
            .map_err(|_| FluxError::format(format!("invalid time component '{part}' in '{s}'")))?;
        if !v.is_finite() || v < 0.0 || part.starts_with(['+', '-']) {
            return Err(FluxError::format(format!(
                "time component '{part}' in '{s}' must be a non-negative number"
            )));
        }
        Ok(v)
    };

    match parts.as_slice() {
        [m, sec] => Ok(component(m)? * 60.0 + component(sec)?),
        [h, m, sec] => Ok(component(h)? * 3600.0 + component(m)? * 60.0 + component(sec)?),
        _ => Err(FluxError::format(format!(
            "invalid time '{s}', expected MM:SS or HH:MM:SS"
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/time/timecode.rs"]
mod tests;
