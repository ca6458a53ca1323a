// SPDX-License-Identifier: MIT
//
// swatch color system. HSL-native with hex and RGB views.
//
// Palette generation is a handful of closed-form moves on the HSL
// cylinder: rotate the hue, pin the lightness, walk the lightness toward
// white. Keeping HSL as the canonical form makes those moves exact, and
// the RGB view is only materialized when a color is blended or printed.
//
// Conversion pipeline:
//
//   hex / rgb() / hsl() string → RGB (0–255) ↔ HSL (canonical) → hex
//
// Blending is linear per RGB channel. Conversions are lossless to the
// nearest 8-bit channel value.

use std::fmt;
use std::hash::{Hash, Hasher};

// ─── Color ───────────────────────────────────────────────────────────────────

/// An immutable color stored as hue, saturation and lightness.
///
/// HSL is the cylindrical form of sRGB: hue is an angle on the color
/// wheel, saturation is distance from the gray axis, and lightness runs
/// from black through the pure hue to white. Palette schemes are defined
/// as hue rotations and lightness ramps, so they map onto this form
/// without any round-tripping.
///
/// Two colors are equal when they render to the same 8-bit RGB value,
/// regardless of how they were constructed.
///
/// # Examples
///
/// ```
/// use swatch_color::Color;
///
/// // From a hex string
/// let blue = Color::hex("#3366CC").unwrap();
/// assert_eq!(blue.to_hex(), "#3366CC");
///
/// // From HSL directly
/// let red = Color::hsl(0.0, 100.0, 50.0);
/// assert_eq!(red.to_rgb8(), (255, 0, 0));
///
/// // Palette moves
/// let complement = blue.complement();
/// let lighter = blue.set_lightness(80.0);
/// let halfway = blue.mix(&complement, 0.5);
/// # let _ = (lighter, halfway);
/// ```
#[derive(Clone, Copy)]
pub struct Color {
    /// Hue angle in degrees: 0.0 to 360.0 (exclusive).
    /// 0° = red, 120° = green, 240° = blue.
    pub h: f64,

    /// Saturation: 0.0 (gray) to 100.0 (fully saturated).
    pub s: f64,

    /// Lightness: 0.0 (black) to 100.0 (white). 50.0 is the pure hue.
    pub l: f64,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from HSL values.
    ///
    /// - `h`: Hue angle in degrees, 0.0 to 360.0
    /// - `s`: Saturation, 0.0 to 100.0
    /// - `l`: Lightness, 0.0 to 100.0
    ///
    /// Values are stored as given. Use [`Color::rotate`] or
    /// [`Color::set_hue`] for wrapped hue angles.
    #[inline]
    #[must_use]
    pub const fn hsl(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Create a color from RGB channel values in the 0.0–255.0 range.
    ///
    /// Fractional channels are kept; they only get rounded when the
    /// color is rendered.
    #[must_use]
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        let (h, s, l) = rgb_to_hsl(r, g, b);
        Self { h, s, l }
    }

    /// Create a color from 8-bit RGB values.
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(f64::from(r), f64::from(g), f64::from(b))
    }

    /// Create a color from a hex string.
    ///
    /// Supports `#RGB`, `#RGBA`, `#RRGGBB` and `#RRGGBBAA`, with or without the
    /// `#`. Alpha digits are checked and dropped.
    /// For the CSS functional forms use [`str::parse`].
    #[must_use]
    pub fn hex(s: &str) -> Option<Self> {
        crate::parse::parse_hex(s).ok()
    }

    /// Pure black.
    pub const BLACK: Self = Self::hsl(0.0, 0.0, 0.0);

    /// Pure white.
    pub const WHITE: Self = Self::hsl(0.0, 0.0, 100.0);

    /// Whether this color has no visible saturation (a gray).
    #[inline]
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.s.abs() < 1e-9
    }

    // ─── Palette Operations ──────────────────────────────────────────────
    //
    // These all work on the HSL cylinder and leave the other two
    // components untouched.

    /// Rotate the hue by `degrees` (wraps around 360°, negative allowed).
    #[inline]
    #[must_use]
    pub fn rotate(self, degrees: f64) -> Self {
        Self {
            h: normalize_hue(self.h + degrees),
            ..self
        }
    }

    /// Set hue to an absolute angle (normalized to 0°–360°).
    #[inline]
    #[must_use]
    pub fn set_hue(self, h: f64) -> Self {
        Self {
            h: normalize_hue(h),
            ..self
        }
    }

    /// Get the complementary color (hue rotated 180°).
    #[inline]
    #[must_use]
    pub fn complement(self) -> Self {
        self.rotate(180.0)
    }

    /// Set lightness to an absolute value (clamped to 0.0–100.0).
    ///
    /// A NaN lightness is stored as-is.
    #[inline]
    #[must_use]
    pub fn set_lightness(self, l: f64) -> Self {
        Self {
            l: l.clamp(0.0, 100.0),
            ..self
        }
    }

    /// Set saturation to an absolute value (clamped to 0.0–100.0).
    #[inline]
    #[must_use]
    pub fn set_saturation(self, s: f64) -> Self {
        Self {
            s: s.clamp(0.0, 100.0),
            ..self
        }
    }

    /// Move lightness toward white by `fraction` of the remaining headroom.
    ///
    /// `tint(0.1)` on a color at lightness 50 gives lightness 55; applied
    /// again it gives 59.5. Repeated tints approach white but never reach it.
    #[inline]
    #[must_use]
    pub fn tint(self, fraction: f64) -> Self {
        self.set_lightness((100.0 - self.l).mul_add(fraction, self.l))
    }

    /// Mix this color with another, linearly per RGB channel.
    ///
    /// `t` = 0.0 returns `self`, `t` = 1.0 returns `other`.
    #[must_use]
    pub fn mix(self, other: &Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let inv_t = 1.0 - t;
        let (r1, g1, b1) = self.to_rgb();
        let (r2, g2, b2) = other.to_rgb();
        Self::rgb(
            r1.mul_add(inv_t, r2 * t),
            g1.mul_add(inv_t, g2 * t),
            b1.mul_add(inv_t, b2 * t),
        )
    }

    // ─── Conversions ─────────────────────────────────────────────────────

    /// Convert to RGB channel values in the 0.0–255.0 range (unrounded).
    #[must_use]
    pub fn to_rgb(self) -> (f64, f64, f64) {
        hsl_to_rgb(self.h, self.s, self.l)
    }

    /// Convert to 8-bit RGB, rounding each channel to the nearest integer.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let (r, g, b) = self.to_rgb();
        (to_u8(r), to_u8(g), to_u8(b))
    }

    /// Convert to an uppercase `#RRGGBB` hex string.
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{r:02X}{g:02X}{b:02X}")
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color::hsl({:.1}, {:.1}, {:.1})", self.h, self.s, self.l)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.to_rgb8() == other.to_rgb8()
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_rgb8().hash(state);
    }
}

impl Default for Color {
    /// Default is black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb8(r, g, b)
    }
}

impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ─── Color Space Conversion Functions ────────────────────────────────────────
//
// Standard RGB ↔ HSL formulas. RGB channels are 0–255 floats; HSL is
// degrees / percent / percent.

/// Normalize a hue angle to the range [0, 360).
#[inline]
pub(crate) fn normalize_hue(h: f64) -> f64 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

/// Absolute hue difference (shortest arc on the color wheel).
#[inline]
#[must_use]
pub fn hue_diff(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

/// Convert RGB (0.0–255.0) → HSL.
fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let r = r / 255.0;
    let g = g / 255.0;
    let b = b / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    if delta == 0.0 {
        return (0.0, 0.0, l * 100.0);
    }

    let h = if max == r {
        (g - b) / delta
    } else if max == g {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };

    let s = if l <= 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    (normalize_hue(h * 60.0), s * 100.0, l * 100.0)
}

/// Convert HSL → RGB (0.0–255.0).
fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let h = h / 360.0;
    let s = s / 100.0;
    let l = l / 100.0;

    if s == 0.0 {
        let v = l * 255.0;
        return (v, v, v);
    }

    let t2 = if l < 0.5 { l * (1.0 + s) } else { l.mul_add(-s, l + s) };
    let t1 = 2.0f64.mul_add(l, -t2);

    (
        hue_to_channel(t1, t2, h + 1.0 / 3.0) * 255.0,
        hue_to_channel(t1, t2, h) * 255.0,
        hue_to_channel(t1, t2, h - 1.0 / 3.0) * 255.0,
    )
}

/// One channel of the HSL → RGB piecewise ramp.
#[inline]
fn hue_to_channel(t1: f64, t2: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if 6.0 * t < 1.0 {
        ((t2 - t1) * 6.0).mul_add(t, t1)
    } else if 2.0 * t < 1.0 {
        t2
    } else if 3.0 * t < 2.0 {
        ((t2 - t1) * (2.0 / 3.0 - t)).mul_add(6.0, t1)
    } else {
        t1
    }
}

/// Round a 0.0–255.0 channel to a u8.
///
/// NaN saturates to 0, so degenerate colors render as black.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
