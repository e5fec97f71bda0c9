use crate::color::rgb::Rgb8;

/// Hue/saturation/lightness. `h` in degrees `[0, 360)`, `s` and `l` in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Hsl {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation.
    pub s: f64,
    /// Lightness.
    pub l: f64,
}

impl Hsl {
    /// Build from components.
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Rotate the hue by `degrees`, wrapping into `[0, 360)`.
    pub fn rotate_hue(self, degrees: f64) -> Self {
        Self {
            h: wrap_hue(self.h + degrees),
            ..self
        }
    }
}

fn wrap_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid may round up to the modulus itself for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

/// Convert RGB to HSL.
///
/// Achromatic colors (`max == min`) get `h = s = 0`. Hue follows the red-max, green-max,
/// blue-max branch order.
pub fn rgb_to_hsl(c: Rgb8) -> Hsl {
    let r = f64::from(c.r) / 255.0;
    let g = f64::from(c.g) / 255.0;
    let b = f64::from(c.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    if delta == 0.0 {
        return Hsl::new(0.0, 0.0, l);
    }

    let s = delta / (1.0 - (2.0 * l - 1.0).abs());
    let sector = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    Hsl::new(wrap_hue(sector * 60.0), s, l)
}

/// Convert HSL to RGB.
///
/// `h` is reduced into `[0, 360)` first. Channels are rounded to nearest (half away from
/// zero) and clamped to `[0, 255]`.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb8 {
    let h = wrap_hue(hsl.h);
    let Hsl { s, l, .. } = hsl;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    fn to_u8(v: f64) -> u8 {
        (v * 255.0).round().clamp(0.0, 255.0) as u8
    }

    Rgb8::new(to_u8(r + m), to_u8(g + m), to_u8(b + m))
}

impl From<Rgb8> for Hsl {
    fn from(c: Rgb8) -> Self {
        rgb_to_hsl(c)
    }
}

impl From<Hsl> for Rgb8 {
    fn from(hsl: Hsl) -> Self {
        hsl_to_rgb(hsl)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/hsl.rs"]
mod tests;
