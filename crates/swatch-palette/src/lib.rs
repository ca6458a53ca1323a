//! # swatch-palette: palette generation from a single base color
//!
//! Every generator is a pure function of a base [`Color`] and a few numeric
//! parameters, returning an ordered `Vec<Color>`. Nothing is cached and
//! nothing is shared between calls.
//!
//! # Architecture
//!
//! ```text
//! base Color + parameters
//!     │
//!     ├── harmony.rs: hue rotations (complementary, analogous, triadic,
//!     │               split-complementary, tetradic, square)
//!     ├── tone.rs:    lightness ramps (monochromatic, tints, shades)
//!     └── random.rs:  balanced random palettes (injected RNG, no base)
//!
//! scheme.rs:  named schemes of the tools site → harmony/tone generators
//! curated.rs: hand-picked five-color reference palettes
//! menu.rs:    navigation table of the tools site, looked up by tag
//! ```
//!
//! # Degenerate parameters
//!
//! Formulas that divide by `n - 1` or `steps` are not guarded. Asking for a
//! one-color lightness range, a one-step shade ramp or a zero-step gradient
//! produces NaN channels (rendered as `#000000`) and logs a warning. The
//! only validated parameter is the fixed-angle analogous count, which fails
//! with [`PaletteError::InvalidParameter`].
//!
//! [`Color`]: swatch_color::Color

// Loop indices and counts are cast to f64 throughout the palette math.
#![allow(clippy::cast_precision_loss)]

pub mod curated;
pub mod error;
pub mod harmony;
pub mod menu;
pub mod random;
pub mod scheme;
pub mod tone;

pub use error::PaletteError;
pub use random::{BalancedPalette, Bounds};
pub use scheme::ColorScheme;
pub use swatch_color::Color;
