use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{FluxError, FluxResult};

/// 8-bit straight RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Build from channels already in `[0, 255]`.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from wider integers, rejecting channels outside `[0, 255]`.
    pub fn try_from_ints(r: i64, g: i64, b: i64) -> FluxResult<Self> {
        fn channel(name: &str, v: i64) -> FluxResult<u8> {
            u8::try_from(v).map_err(|_| {
                FluxError::domain(format!("{name} channel {v} is outside [0, 255]"))
            })
        }
        Ok(Self::new(channel("red", r)?, channel("green", g)?, channel("blue", b)?))
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        rgb_to_hex(self)
    }

    /// Attach an alpha channel.
    pub const fn with_alpha(self, a: u8) -> Rgba8 {
        Rgba8 {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb8 {
    type Err = FluxError;

    fn from_str(s: &str) -> FluxResult<Self> {
        hex_to_rgb(s)
    }
}

impl TryFrom<String> for Rgb8 {
    type Error = FluxError;

    fn try_from(s: String) -> FluxResult<Self> {
        hex_to_rgb(&s)
    }
}

impl From<Rgb8> for String {
    fn from(c: Rgb8) -> Self {
        c.to_hex()
    }
}

impl From<(u8, u8, u8)> for Rgb8 {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

/// 8-bit straight (non-premultiplied) RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, 255 is opaque.
    pub a: u8,
}

impl Rgba8 {
    /// Build from channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Drop the alpha channel.
    pub const fn rgb(self) -> Rgb8 {
        Rgb8::new(self.r, self.g, self.b)
    }

    /// Lowercase `#rrggbbaa`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl TryFrom<String> for Rgba8 {
    type Error = FluxError;

    fn try_from(s: String) -> FluxResult<Self> {
        hex_to_rgba(&s)
    }
}

impl From<Rgba8> for String {
    fn from(c: Rgba8) -> Self {
        c.to_hex()
    }
}

fn hex_digits(s: &str) -> &str {
    s.strip_prefix('#').unwrap_or(s)
}

fn hex_byte(pair: &str) -> FluxResult<u8> {
    u8::from_str_radix(pair, 16)
        .map_err(|_| FluxError::format(format!("invalid hex byte \"{pair}\"")))
}

fn check_hex(original: &str, digits: &str, lens: &[usize]) -> FluxResult<()> {
    // `from_str_radix` would accept a leading '+', so validate digits up front.
    if !lens.contains(&digits.len()) || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        let expected = if lens.len() == 1 {
            "#RRGGBB"
        } else {
            "#RRGGBB or #RRGGBBAA"
        };
        return Err(FluxError::format(format!(
            "hex color \"{original}\" must be {expected} (case-insensitive)"
        )));
    }
    Ok(())
}

/// Parse `#rrggbb` (the `#` is optional, digits are case-insensitive).
///
/// # Errors
///
/// [`FluxError::Format`] unless exactly six hex digits remain after stripping `#`.
pub fn hex_to_rgb(hex: &str) -> FluxResult<Rgb8> {
    let digits = hex_digits(hex);
    check_hex(hex, digits, &[6])?;
    Ok(Rgb8::new(
        hex_byte(&digits[0..2])?,
        hex_byte(&digits[2..4])?,
        hex_byte(&digits[4..6])?,
    ))
}

/// Parse `#rrggbb` or `#rrggbbaa`; alpha defaults to 255.
pub fn hex_to_rgba(hex: &str) -> FluxResult<Rgba8> {
    let digits = hex_digits(hex);
    check_hex(hex, digits, &[6, 8])?;
    let a = if digits.len() == 8 {
        hex_byte(&digits[6..8])?
    } else {
        255
    };
    Ok(Rgba8::new(
        hex_byte(&digits[0..2])?,
        hex_byte(&digits[2..4])?,
        hex_byte(&digits[4..6])?,
        a,
    ))
}

/// Format as lowercase `#rrggbb`.
pub fn rgb_to_hex(c: Rgb8) -> String {
    c.to_string()
}

#[cfg(test)]
#[path = "../../tests/unit/color/rgb.rs"]
mod tests;
