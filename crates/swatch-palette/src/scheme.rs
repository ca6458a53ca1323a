//! Named color schemes, the palettes offered by the tools site.
//!
//! Each scheme takes a base color and a count and dispatches to the
//! divisive generator in [`harmony`] or [`tone`] with default parameters.
//!
//! [`harmony`]: crate::harmony
//! [`tone`]: crate::tone

use swatch_color::Color;
use tracing::debug;

use crate::harmony::{self, DEFAULT_SPREAD};
use crate::tone::{self, DEFAULT_MAX_LIGHTNESS, DEFAULT_MIN_LIGHTNESS};

/// The kind of scheme used to build a palette from a base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    /// Blend from the base to its complement (`n + 1` colors).
    Complementary,
    /// Neighbours within ±40° of the base.
    Analogous,
    /// Wheel divided into `n` equal parts.
    Triadic,
    /// Wheel divided into `n` equal parts.
    Tetradic,
    /// Wheel divided into `n + 1` parts, base slot skipped.
    SplitComplementary,
    /// Lightness 30 → 90 at the base hue.
    Monochromatic,
}

impl ColorScheme {
    /// Generate a palette from `base` with this scheme.
    ///
    /// `n` is the count handed to the underlying generator. For
    /// [`ColorScheme::Complementary`] it is the number of blend steps, so
    /// the palette has `n + 1` colors; every other scheme returns `n`.
    #[must_use]
    pub fn generate(self, base: Color, n: usize) -> Vec<Color> {
        debug!(scheme = self.name(), %base, n, "generating palette");
        match self {
            Self::Complementary => harmony::complementary_gradient(base, n),
            Self::Analogous => harmony::analogous(base, n, DEFAULT_SPREAD),
            Self::Triadic => harmony::triadic(base, n),
            Self::Tetradic => harmony::tetradic(base, n),
            Self::SplitComplementary => harmony::split_complementary(base, n),
            Self::Monochromatic => {
                tone::monochromatic(base, n, DEFAULT_MIN_LIGHTNESS, DEFAULT_MAX_LIGHTNESS)
            }
        }
    }

    /// Human-readable name of this scheme.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
            Self::SplitComplementary => "split-complementary",
            Self::Monochromatic => "monochromatic",
        }
    }

    /// Parse a scheme from its name (case-insensitive, `_` and `-` both accepted).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase().replace('_', "-");
        Self::all().iter().find(|s| s.name() == lower).copied()
    }

    /// All available schemes.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Complementary,
            Self::Analogous,
            Self::Triadic,
            Self::Tetradic,
            Self::SplitComplementary,
            Self::Monochromatic,
        ]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
