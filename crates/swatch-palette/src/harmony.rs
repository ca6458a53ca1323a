//! Hue harmonies: palettes built by rotating the base hue.
//!
//! Two families live here. The *divisive* generators take a count and
//! spread that many colors around the wheel (`triadic(base, 5)` gives five
//! colors 72° apart). The *fixed* generators return the textbook harmony
//! with a fixed size (`triad(base)` is always base, +120°, +240°).
//!
//! Saturation and lightness are never touched; only the hue moves. All
//! rotations wrap modulo 360.

use swatch_color::Color;
use tracing::warn;

use crate::error::{PaletteError, Result};

/// Default half-width, in degrees, of an analogous spread.
pub const DEFAULT_SPREAD: f64 = 40.0;

/// Angle between neighbours in a fixed-angle analogous palette.
const ANALOGOUS_STEP: f64 = 30.0;

/// Rotate `base` by `i * angle` for `i` in `0..n`.
fn rotations(base: Color, n: usize, angle: f64) -> Vec<Color> {
    (0..n).map(|i| base.rotate(i as f64 * angle)).collect()
}

// ---------------------------------------------------------------------------
// Complementary
// ---------------------------------------------------------------------------

/// Blend from `base` to its complement in `steps` equal steps.
///
/// Returns `steps + 1` colors: `t = i / steps` for `i` in `0..=steps`, so
/// the first color is `base` and the last is `base` rotated 180°. The
/// blend is linear in RGB, which means the middle of the ramp passes
/// close to gray.
///
/// `steps == 0` divides by zero: the single returned color is NaN.
#[must_use]
pub fn complementary_gradient(base: Color, steps: usize) -> Vec<Color> {
    if steps == 0 {
        warn!("complementary gradient with zero steps divides by zero");
    }
    let complement = base.complement();
    (0..=steps)
        .map(|i| {
            let t = i as f64 / steps as f64;
            base.mix(&complement, t)
        })
        .collect()
}

/// The base color and its complement.
#[must_use]
pub fn complementary(base: Color) -> Vec<Color> {
    vec![base, base.rotate(180.0)]
}

// ---------------------------------------------------------------------------
// Analogous
// ---------------------------------------------------------------------------

/// `n` colors evenly spaced from `-spread` to `+spread` degrees around `base`.
///
/// With `n <= 1` the palette is just `[base]`. Note the base itself only
/// appears in the output when `n` is odd.
#[must_use]
pub fn analogous(base: Color, n: usize, spread: f64) -> Vec<Color> {
    if n <= 1 {
        return vec![base];
    }
    let step = 2.0 * spread / (n - 1) as f64;
    (0..n)
        .map(|i| base.rotate((i as f64).mul_add(step, -spread)))
        .collect()
}

/// The base color followed by `count - 1` neighbours 30° apart.
///
/// # Errors
///
/// Returns [`PaletteError::InvalidParameter`] if `count` is not 3, 4 or 5.
pub fn analogous_fixed(base: Color, count: usize) -> Result<Vec<Color>> {
    if !(3..=5).contains(&count) {
        return Err(PaletteError::InvalidParameter {
            name: "count",
            value: count,
            expected: "3..=5",
        });
    }
    Ok(rotations(base, count, ANALOGOUS_STEP))
}

// ---------------------------------------------------------------------------
// Triadic / Tetradic
// ---------------------------------------------------------------------------

/// `n` colors at `i * 360/n` degrees, starting with `base`.
#[must_use]
pub fn triadic(base: Color, n: usize) -> Vec<Color> {
    rotations(base, n, 360.0 / n as f64)
}

/// Base, +120°, +240°.
#[must_use]
pub fn triad(base: Color) -> Vec<Color> {
    rotations(base, 3, 120.0)
}

/// `n` colors at `i * 360/n` degrees, starting with `base`.
///
/// Same wheel division as [`triadic`]; the two names are kept because the
/// tools site offers both schemes.
#[must_use]
pub fn tetradic(base: Color, n: usize) -> Vec<Color> {
    rotations(base, n, 360.0 / n as f64)
}

/// Base, +90°, +180°, +270° (the fixed tetradic harmony).
#[must_use]
pub fn square(base: Color) -> Vec<Color> {
    rotations(base, 4, 90.0)
}

// ---------------------------------------------------------------------------
// Split-complementary
// ---------------------------------------------------------------------------

/// `n` colors at `(i + 1) * 360/(n + 1)` degrees.
///
/// The wheel is divided into `n + 1` slots and the base's own slot is
/// skipped, so `base` is not part of the result.
#[must_use]
pub fn split_complementary(base: Color, n: usize) -> Vec<Color> {
    let angle = split_angle(n);
    (0..n).map(|i| base.rotate((i as f64 + 1.0) * angle)).collect()
}

/// Slot width when the wheel is cut into `n + 1` parts.
fn split_angle(n: usize) -> f64 {
    360.0 / (n as f64 + 1.0)
}

/// Base, +150°, +210°.
#[must_use]
pub fn split_complement(base: Color) -> Vec<Color> {
    vec![base, base.rotate(150.0), base.rotate(210.0)]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
