//! Balanced random palettes.
//!
//! A fully random palette looks like confetti. To keep a random set
//! cohesive, each call first draws one saturation band and one lightness
//! band, and every color then picks its saturation and lightness inside
//! those bands. Only the hue is free to roam the whole wheel.
//!
//! The random source is a parameter: pass `rand::rng()` for variety or a
//! seeded `StdRng` for reproducible output.

use rand::Rng;
use serde::Serialize;
use swatch_color::Color;

/// Range the lower saturation bound is drawn from.
const SATURATION_FLOOR: (f64, f64) = (30.0, 70.0);
/// Largest possible upper saturation bound.
const SATURATION_CEIL: f64 = 100.0;
/// Range the lower lightness bound is drawn from.
const LIGHTNESS_FLOOR: (f64, f64) = (30.0, 60.0);
/// Largest possible upper lightness bound.
const LIGHTNESS_CEIL: f64 = 85.0;

/// An inclusive `[min, max]` band of one HSL channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    /// Draw a band whose lower edge lies in `floor` and whose upper edge
    /// lies between that lower edge and `ceil`.
    fn draw<R: Rng + ?Sized>(rng: &mut R, floor: (f64, f64), ceil: f64) -> Self {
        let min = rng.random_range(floor.0..floor.1);
        let max = rng.random_range(min..=ceil);
        Self { min, max }
    }

    /// Uniform sample inside the band.
    fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> f64 {
        rng.random_range(self.min..=self.max)
    }

    /// Whether `value` lies inside the band.
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// A random palette together with the bands it was drawn from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalancedPalette {
    pub colors: Vec<Color>,
    pub saturation: Bounds,
    pub lightness: Bounds,
}

/// Generate `count` random colors that share a saturation and lightness band.
///
/// Hues are uniform over `[0, 360)`. The bands are drawn once per call,
/// before any color, so even `count == 0` consumes randomness.
#[must_use]
pub fn balanced<R: Rng + ?Sized>(rng: &mut R, count: usize) -> BalancedPalette {
    let saturation = Bounds::draw(rng, SATURATION_FLOOR, SATURATION_CEIL);
    let lightness = Bounds::draw(rng, LIGHTNESS_FLOOR, LIGHTNESS_CEIL);

    let colors = (0..count)
        .map(|_| {
            let h = rng.random_range(0.0..360.0);
            let s = saturation.sample(rng);
            let l = lightness.sample(rng);
            Color::hsl(h, s, l)
        })
        .collect();

    BalancedPalette { colors, saturation, lightness }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn zero_count_is_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(balanced(&mut rng, 0).colors.is_empty());
    }

    #[test]
    fn returns_requested_count() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(balanced(&mut rng, 5).colors.len(), 5);
    }

    #[test]
    fn colors_stay_inside_bands() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let p = balanced(&mut rng, 8);
            for c in &p.colors {
                assert!((0.0..360.0).contains(&c.h), "hue out of range: {}", c.h);
                assert!(p.saturation.contains(c.s), "s={} not in {:?}", c.s, p.saturation);
                assert!(p.lightness.contains(c.l), "l={} not in {:?}", c.l, p.lightness);
            }
        }
    }

    #[test]
    fn bands_are_ordered_and_bounded() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let p = balanced(&mut rng, 1);
            assert!(p.saturation.min <= p.saturation.max);
            assert!(p.lightness.min <= p.lightness.max);
            assert!((30.0..70.0).contains(&p.saturation.min));
            assert!(p.saturation.max <= 100.0);
            assert!((30.0..60.0).contains(&p.lightness.min));
            assert!(p.lightness.max <= 85.0);
        }
    }

    #[test]
    fn deterministic_with_seed() {
        let a = balanced(&mut StdRng::seed_from_u64(99), 5);
        let b = balanced(&mut StdRng::seed_from_u64(99), 5);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let a = balanced(&mut StdRng::seed_from_u64(1), 5);
        let b = balanced(&mut StdRng::seed_from_u64(2), 5);
        // Five identical random hues from different seeds is not a real outcome.
        assert_ne!(a.colors, b.colors);
    }

    #[test]
    fn works_with_thread_rng() {
        let p = balanced(&mut rand::rng(), 3);
        assert_eq!(p.colors.len(), 3);
    }
}
