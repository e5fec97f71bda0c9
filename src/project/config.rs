use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use crate::foundation::core::Fps;
use crate::foundation::error::{FluxError, FluxResult};

/// Output frame size, either a named preset or explicit pixel dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Resolution {
    /// 3840x2160.
    FourK,
    /// 1920x1080.
    FullHd,
    /// 1280x720.
    Hd,
    /// 1080x1920 portrait, for short-form platforms.
    Vertical,
    /// Explicit size.
    Custom { width: u32, height: u32 },
}

impl Resolution {
    /// Parse `4K`, `1080p`, `720p`, `9:16` (also `tiktok`, `reels`) or `WIDTHxHEIGHT`.
    pub fn parse(s: &str) -> FluxResult<Self> {
        let name = s.trim().to_ascii_lowercase();
        let res = match name.as_str() {
            "4k" | "2160p" => Self::FourK,
            "1080p" => Self::FullHd,
            "720p" => Self::Hd,
            "9:16" | "tiktok" | "reels" => Self::Vertical,
            other => {
                let (w, h) = other.split_once('x').ok_or_else(|| {
                    FluxError::format(format!(
                        "unknown resolution '{}', expected a preset or WIDTHxHEIGHT",
                        s.trim()
                    ))
                })?;
                let dim = |v: &str| -> FluxResult<u32> {
                    match v.trim().parse::<u32>() {
                        Ok(n) if n > 0 => Ok(n),
                        _ => Err(FluxError::format(format!(
                            "invalid resolution dimension '{v}' in '{}'",
                            s.trim()
                        ))),
                    }
                };
                Self::Custom {
                    width: dim(w)?,
                    height: dim(h)?,
                }
            }
        };
        Ok(res)
    }

    pub fn width(self) -> u32 {
        self.size().0
    }

    pub fn height(self) -> u32 {
        self.size().1
    }

    /// `(width, height)` in pixels.
    pub fn size(self) -> (u32, u32) {
        match self {
            Self::FourK => (3840, 2160),
            Self::FullHd => (1920, 1080),
            Self::Hd => (1280, 720),
            Self::Vertical => (1080, 1920),
            Self::Custom { width, height } => (width, height),
        }
    }

    /// Width divided by height.
    pub fn aspect_ratio(self) -> f64 {
        let (w, h) = self.size();
        f64::from(w) / f64::from(h)
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FourK => f.write_str("4K"),
            Self::FullHd => f.write_str("1080p"),
            Self::Hd => f.write_str("720p"),
            Self::Vertical => f.write_str("9:16"),
            Self::Custom { width, height } => write!(f, "{width}x{height}"),
        }
    }
}

impl FromStr for Resolution {
    type Err = FluxError;

    fn from_str(s: &str) -> FluxResult<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Resolution {
    type Error = FluxError;

    fn try_from(s: String) -> FluxResult<Self> {
        Self::parse(&s)
    }
}

impl From<Resolution> for String {
    fn from(r: Resolution) -> Self {
        r.to_string()
    }
}

/// Container the external renderer should produce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Mp4,
    Mov,
    Gif,
    Webp,
    PngSequence,
}

impl FromStr for OutputFormat {
    type Err = FluxError;

    fn from_str(s: &str) -> FluxResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mp4" => Ok(Self::Mp4),
            "mov" => Ok(Self::Mov),
            "gif" => Ok(Self::Gif),
            "webp" => Ok(Self::Webp),
            "png_sequence" | "png" => Ok(Self::PngSequence),
            other => Err(FluxError::format(format!("unknown output format '{other}'"))),
        }
    }
}

/// Project-wide settings, passed explicitly to whatever consumes them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProjectConfig {
    pub resolution: Resolution,
    pub fps: Fps,
    #[serde(default)]
    pub output_format: OutputFormat,
}

impl ProjectConfig {
    /// Build a config from a resolution preset and an integer frame rate.
    pub fn setup(res: &str, fps: u32) -> FluxResult<Self> {
        let cfg = Self {
            resolution: Resolution::parse(res)?,
            fps: Fps::integer(fps)?,
            output_format: OutputFormat::default(),
        };
        tracing::debug!(resolution = %cfg.resolution, fps = %cfg.fps, "project config");
        Ok(cfg)
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    pub fn width(&self) -> u32 {
        self.resolution.width()
    }

    pub fn height(&self) -> u32 {
        self.resolution.height()
    }

    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FluxResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| FluxError::serde(format!("parse project config JSON: {e}")))
    }

    /// Parse a config from a JSON string.
    pub fn from_json_str(s: &str) -> FluxResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| FluxError::serde(format!("parse project config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> FluxResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FluxError::Other(
                anyhow::Error::new(e)
                    .context(format!("open project config '{}'", path.display())),
            )
        })?;
        let cfg = Self::from_reader(BufReader::new(f))?;
        tracing::debug!(resolution = %cfg.resolution, fps = %cfg.fps, "loaded project config");
        Ok(cfg)
    }

    pub fn to_json_pretty(&self) -> FluxResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| FluxError::serde(e.to_string()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/project/config.rs"]
mod tests;
