//! HSV to RGB conversion.
//!
//! The converter works on the percentage scale used throughout the crate:
//! hue in degrees, saturation and value in `0..=100`. Output channels are
//! rounded to whole 8-bit levels and returned as `palette::Srgb<u8>`.
//!
//! The transform is the classic six-sector hexagon: the hue picks one of six
//! 60° sectors, and each output channel is one of `v`, `p`, `q`, `t`.

use palette::{Hsv as PaletteHsv, Srgb};

/// Distance from 360° under which a hue is treated as 0°.
pub const HUE_EPSILON: f32 = 0.00001;

/// An HSV color on the percentage scale.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsv {
    /// Hue in degrees. Any finite value; wrapped into `[0, 360)`.
    pub hue: f32,

    /// Saturation in percent, `0..=100`.
    pub saturation: f32,

    /// Value (brightness) in percent, `0..=100`.
    pub value: f32,
}

impl Hsv {
    /// Creates an HSV color.
    #[inline]
    pub const fn new(hue: f32, saturation: f32, value: f32) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Converts to 8-bit RGB.
    #[inline]
    pub fn to_rgb(self) -> Srgb<u8> {
        hsv_to_rgb(self.hue, self.saturation, self.value)
    }
}

impl From<Hsv> for Srgb<u8> {
    fn from(hsv: Hsv) -> Self {
        hsv.to_rgb()
    }
}

/// One of the six 60° hue sectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Sector {
    RedToYellow,
    YellowToGreen,
    GreenToCyan,
    CyanToBlue,
    BlueToMagenta,
    MagentaToRed,
}

impl Sector {
    /// Returns the sector for a hue already wrapped into `[0, 360)`.
    ///
    /// Anything past the last sector (or NaN) is pinned to the nearest end.
    pub fn of(hue: f32) -> Self {
        let index = libm::floorf(hue / 60.0);
        if !(index >= 1.0) {
            return Sector::RedToYellow;
        }
        match index as u8 {
            1 => Sector::YellowToGreen,
            2 => Sector::GreenToCyan,
            3 => Sector::CyanToBlue,
            4 => Sector::BlueToMagenta,
            _ => Sector::MagentaToRed,
        }
    }

    /// Zero-based sector index.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Arranges `v`, `p`, `q`, `t` into `(r, g, b)` for this sector.
    #[inline]
    pub fn arrange(self, v: f32, p: f32, q: f32, t: f32) -> (f32, f32, f32) {
        match self {
            Sector::RedToYellow => (v, t, p),
            Sector::YellowToGreen => (q, v, p),
            Sector::GreenToCyan => (p, v, t),
            Sector::CyanToBlue => (p, q, v),
            Sector::BlueToMagenta => (t, p, v),
            Sector::MagentaToRed => (v, p, q),
        }
    }
}

/// Wraps a hue into `[0, 360)`, snapping values within `HUE_EPSILON` of 360
/// back to 0.
pub fn normalize_hue(hue: f32) -> f32 {
    let mut h = libm::fmodf(hue, 360.0);
    if h < 0.0 {
        h += 360.0;
    }
    if libm::fabsf(h - 360.0) < HUE_EPSILON {
        h = 0.0;
    }
    h
}

/// Converts HSV (degrees, percent, percent) to 8-bit RGB.
///
/// Total and deterministic: the hue is wrapped with [`normalize_hue`] and
/// saturation and value are clamped to `0..=100` before conversion. Each
/// channel is rounded half away from zero.
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> Srgb<u8> {
    let h = normalize_hue(hue);
    let s = saturation.clamp(0.0, 100.0) / 100.0;
    let v = value.clamp(0.0, 100.0) / 100.0;

    // Achromatic: every channel equals the value, hue is irrelevant.
    if !(s >= HUE_EPSILON) {
        let level = to_level(v);
        return Srgb::new(level, level, level);
    }

    let sector = Sector::of(h);
    let frac = h / 60.0 - sector.index() as f32;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * frac);
    let t = v * (1.0 - s * (1.0 - frac));

    let (r, g, b) = sector.arrange(v, p, q, t);
    Srgb::new(to_level(r), to_level(g), to_level(b))
}

/// Converts a palette HSV color (unit saturation and value) with the same
/// sector arithmetic as [`hsv_to_rgb`].
pub fn from_palette(hsv: PaletteHsv) -> Srgb<u8> {
    hsv_to_rgb(
        hsv.hue.into_positive_degrees(),
        hsv.saturation * 100.0,
        hsv.value * 100.0,
    )
}

/// Creates a fully saturated, full brightness color from a hue.
#[inline]
pub fn hue(hue: f32) -> Srgb<u8> {
    hsv_to_rgb(hue, 100.0, 100.0)
}

#[inline]
fn to_level(unit: f32) -> u8 {
    libm::roundf(unit * 255.0) as u8
}
