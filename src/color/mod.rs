//! Color representations and conversions between hex, RGB and HSL.

pub(crate) mod hsl;
pub(crate) mod rgb;
