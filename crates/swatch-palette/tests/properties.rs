//! Property-based tests for palette generation
//!
//! Uses proptest to check the geometric invariants of each scheme over
//! arbitrary base colors and counts.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use swatch_color::Color;
use swatch_color::color::hue_diff;
use swatch_palette::{harmony, random, tone};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Any 8-bit RGB color.
fn color_strategy() -> impl Strategy<Value = Color> {
    any::<(u8, u8, u8)>().prop_map(Color::from)
}

/// Colors with a well-defined hue (saturation and lightness away from the edges).
fn chromatic_strategy() -> impl Strategy<Value = Color> {
    (0.0..360.0f64, 10.0..100.0f64, 10.0..90.0f64).prop_map(|(h, s, l)| Color::hsl(h, s, l))
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// A full turn of the hue wheel is the identity
    #[test]
    fn rotate_full_turn_is_identity(c in color_strategy()) {
        prop_assert_eq!(c.rotate(360.0), c);
    }

    /// hex → HSL → hex is exact
    #[test]
    fn hex_roundtrip(c in color_strategy()) {
        let hex = c.to_hex();
        let back = Color::hex(&hex).unwrap();
        prop_assert_eq!(back.to_hex(), hex);
    }

    /// 8-bit RGB survives the trip through HSL
    #[test]
    fn rgb8_roundtrip(rgb in any::<(u8, u8, u8)>()) {
        prop_assert_eq!(Color::from(rgb).to_rgb8(), rgb);
    }

    /// The second color of the complementary pair is 180° away
    #[test]
    fn complementary_is_opposite(c in chromatic_strategy()) {
        let p = harmony::complementary(c);
        prop_assert_eq!(p.len(), 2);
        prop_assert_eq!(p[0], c);
        prop_assert!((hue_diff(p[0].h, p[1].h) - 180.0).abs() < 1e-6);
    }

    /// Divisive triadic/tetradic hues are evenly spaced by 360/n
    #[test]
    fn divisive_spacing(c in chromatic_strategy(), n in 2usize..24) {
        let step = 360.0 / n as f64;
        for p in [harmony::triadic(c, n), harmony::tetradic(c, n)] {
            prop_assert_eq!(p.len(), n);
            for (i, color) in p.iter().enumerate() {
                let expected = (c.h + i as f64 * step) % 360.0;
                prop_assert!(hue_diff(color.h, expected) < 1e-6);
            }
        }
    }

    /// Square hues are 90° apart
    #[test]
    fn square_spacing(c in chromatic_strategy()) {
        let p = harmony::square(c);
        for pair in p.windows(2) {
            prop_assert!((hue_diff(pair[0].h, pair[1].h) - 90.0).abs() < 1e-6);
        }
    }

    /// Split-complementary never contains the base hue
    #[test]
    fn split_complementary_skips_base(c in chromatic_strategy(), n in 1usize..12) {
        let p = harmony::split_complementary(c, n);
        prop_assert_eq!(p.len(), n);
        for color in p {
            prop_assert!(hue_diff(color.h, c.h) > 1.0);
        }
    }

    /// Analogous palettes stay within the spread
    #[test]
    fn analogous_within_spread(c in chromatic_strategy(), n in 0usize..12, spread in 0.0..90.0f64) {
        let p = harmony::analogous(c, n, spread);
        prop_assert_eq!(p.len(), n.max(1));
        for color in p {
            prop_assert!(hue_diff(color.h, c.h) <= spread + 1e-6);
        }
    }

    /// Fixed-angle analogous accepts exactly 3, 4 and 5
    #[test]
    fn analogous_fixed_validation(c in color_strategy(), count in 0usize..10) {
        let result = harmony::analogous_fixed(c, count);
        if (3..=5).contains(&count) {
            prop_assert_eq!(result.unwrap().len(), count);
        } else {
            prop_assert!(result.is_err());
        }
    }

    /// Monochromatic ramps hit both bounds and never decrease
    #[test]
    fn monochromatic_ramp(
        c in chromatic_strategy(),
        n in 2usize..20,
        min in 0.0..50.0f64,
        extra in 0.0..50.0f64,
    ) {
        let max = min + extra;
        let p = tone::monochromatic(c, n, min, max);
        prop_assert_eq!(p.len(), n);
        prop_assert!((p[0].l - min).abs() < 1e-9);
        prop_assert!((p[n - 1].l - max).abs() < 1e-9);
        for pair in p.windows(2) {
            prop_assert!(pair[1].l >= pair[0].l);
        }
    }

    /// Shades start at white and end at black
    #[test]
    fn shades_white_to_black(c in color_strategy(), steps in 2usize..64) {
        let p = tone::shades(c, steps);
        prop_assert_eq!(p.len(), steps);
        prop_assert_eq!(p[0].to_hex(), "#FFFFFF");
        prop_assert_eq!(p[steps - 1].to_hex(), "#000000");
    }

    /// Tints never get darker
    #[test]
    fn tints_monotonic(c in color_strategy(), shades in 0usize..20) {
        let p = tone::tints(c, shades);
        prop_assert_eq!(p.len(), shades + 1);
        for pair in p.windows(2) {
            prop_assert!(pair[1].l >= pair[0].l);
        }
    }

    /// Random palettes respect their drawn bands
    #[test]
    fn balanced_respects_bands(seed in any::<u64>(), count in 0usize..16) {
        let mut rng = StdRng::seed_from_u64(seed);
        let p = random::balanced(&mut rng, count);
        prop_assert_eq!(p.colors.len(), count);
        for c in &p.colors {
            prop_assert!(p.saturation.contains(c.s));
            prop_assert!(p.lightness.contains(c.l));
        }
    }
}

// ============================================================================
// Scenario Tests
// ============================================================================

#[test]
fn triadic_red_scenario() {
    let red = Color::hex("#FF0000").unwrap();
    let p = harmony::triadic(red, 3);
    let hues: Vec<f64> = p.iter().map(|c| c.h).collect();
    assert!(hue_diff(hues[0], 0.0) < 1e-6);
    assert!(hue_diff(hues[1], 120.0) < 1e-6);
    assert!(hue_diff(hues[2], 240.0) < 1e-6);
}

#[test]
fn complementary_3366cc_scenario() {
    let base = Color::hex("#3366CC").unwrap();
    let p = harmony::complementary(base);
    assert_eq!(p[0].to_hex(), "#3366CC");
    assert!(hue_diff(p[1].h, 40.0) < 1e-6);
}
