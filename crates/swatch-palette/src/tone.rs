//! Tonal palettes: one hue, many lightness values.
//!
//! These keep hue and saturation fixed and only move lightness: a linear
//! ramp between two bounds, a compounding walk toward white, or the full
//! white-to-black gradient.

use swatch_color::Color;
use tracing::warn;

/// Default darkest lightness of a monochromatic ramp.
pub const DEFAULT_MIN_LIGHTNESS: f64 = 30.0;

/// Default lightest lightness of a monochromatic ramp.
pub const DEFAULT_MAX_LIGHTNESS: f64 = 90.0;

/// Default number of tints added after the base.
pub const DEFAULT_TINTS: usize = 5;

/// Default length of a white-to-black shade ramp.
pub const DEFAULT_SHADE_STEPS: usize = 30;

/// Share of the remaining headroom each tint step moves toward white.
const TINT_FRACTION: f64 = 0.1;

/// `n` colors with lightness linearly spaced from `min_lightness` to
/// `max_lightness`, keeping the base hue and saturation.
///
/// `n == 1` divides by zero and yields a single NaN-lightness color.
#[must_use]
pub fn monochromatic(base: Color, n: usize, min_lightness: f64, max_lightness: f64) -> Vec<Color> {
    if n == 1 {
        warn!("monochromatic ramp of one color divides by zero");
    }
    let span = max_lightness - min_lightness;
    let last = n as f64 - 1.0;
    (0..n)
        .map(|i| base.set_lightness(min_lightness + (i as f64 * span) / last))
        .collect()
}

/// The base color followed by `shades` progressively lighter tints.
///
/// Each step moves 10% of the remaining distance to white, so the steps
/// shrink as the palette approaches white. Returns `shades + 1` colors
/// (saturating at `usize::MAX`).
#[must_use]
pub fn tints(base: Color, shades: usize) -> Vec<Color> {
    std::iter::successors(Some(base), |c| Some(c.tint(TINT_FRACTION)))
        .take(tint_count(shades))
        .collect()
}

/// Length of a tint palette: the base plus `shades` tints.
const fn tint_count(shades: usize) -> usize {
    shades.saturating_add(1)
}

/// `steps` colors from white (`i = 0`) to black (`i = steps - 1`) at the
/// base hue and saturation.
///
/// `steps == 1` divides by zero and yields a single NaN-lightness color.
#[must_use]
pub fn shades(base: Color, steps: usize) -> Vec<Color> {
    if steps == 1 {
        warn!("shade ramp of one step divides by zero");
    }
    let last = steps as f64 - 1.0;
    (0..steps)
        .map(|i| base.set_lightness(100.0 * (1.0 - i as f64 / last)))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn base() -> Color {
        Color::hex("#3366CC").unwrap()
    }

    #[test]
    fn monochromatic_endpoints() {
        let p = monochromatic(base(), 4, DEFAULT_MIN_LIGHTNESS, DEFAULT_MAX_LIGHTNESS);
        assert_eq!(p.len(), 4);
        assert!((p[0].l - 30.0).abs() < 1e-9);
        assert!((p[1].l - 50.0).abs() < 1e-9);
        assert!((p[2].l - 70.0).abs() < 1e-9);
        assert!((p[3].l - 90.0).abs() < 1e-9);
    }

    #[test]
    fn monochromatic_keeps_hue_and_saturation() {
        for c in monochromatic(base(), 6, 10.0, 95.0) {
            assert!((c.h - 220.0).abs() < 1e-9);
            assert!((c.s - 60.0).abs() < 1e-9);
        }
    }

    #[test]
    fn monochromatic_reversed_bounds_descend() {
        let p = monochromatic(base(), 3, 80.0, 20.0);
        assert!((p[0].l - 80.0).abs() < 1e-9);
        assert!((p[2].l - 20.0).abs() < 1e-9);
    }

    #[test]
    fn monochromatic_one_is_nan() {
        let p = monochromatic(base(), 1, DEFAULT_MIN_LIGHTNESS, DEFAULT_MAX_LIGHTNESS);
        assert_eq!(p.len(), 1);
        assert!(p[0].l.is_nan());
    }

    #[test]
    fn monochromatic_zero_is_empty() {
        assert!(monochromatic(base(), 0, 30.0, 90.0).is_empty());
    }

    #[test]
    fn tints_count_and_order() {
        let p = tints(base(), DEFAULT_TINTS);
        assert_eq!(p.len(), 6);
        assert_eq!(p[0], base());
        for pair in p.windows(2) {
            assert!(pair[1].l > pair[0].l);
        }
    }

    #[test]
    fn tints_compound_toward_white() {
        let p = tints(Color::hsl(0.0, 100.0, 50.0), 3);
        let expected = [50.0, 55.0, 59.5, 63.55];
        for (c, l) in p.iter().zip(expected) {
            assert!((c.l - l).abs() < 1e-9, "expected {l}, got {}", c.l);
        }
    }

    #[test]
    fn tint_count_saturates() {
        assert_eq!(tint_count(0), 1);
        assert_eq!(tint_count(5), 6);
        assert_eq!(tint_count(usize::MAX), usize::MAX);
    }

    #[test]
    fn tints_zero_is_base_only() {
        assert_eq!(tints(base(), 0), vec![base()]);
    }

    #[test]
    fn shades_run_white_to_black() {
        let p = shades(base(), DEFAULT_SHADE_STEPS);
        assert_eq!(p.len(), 30);
        assert_eq!(p[0].to_hex(), "#FFFFFF");
        assert_eq!(p[29].to_hex(), "#000000");
        assert!((p[0].l - 100.0).abs() < 1e-9);
        assert!(p[29].l.abs() < 1e-9);
    }

    #[test]
    fn shades_descend() {
        let p = shades(base(), 5);
        let expected = [100.0, 75.0, 50.0, 25.0, 0.0];
        for (c, l) in p.iter().zip(expected) {
            assert!((c.l - l).abs() < 1e-9, "expected {l}, got {}", c.l);
        }
        assert_eq!(p[2], base());
    }

    #[test]
    fn shades_one_is_nan() {
        let p = shades(base(), 1);
        assert_eq!(p.len(), 1);
        assert!(p[0].l.is_nan());
    }
}
