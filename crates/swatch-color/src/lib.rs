// SPDX-License-Identifier: MIT
//
// swatch-color: the color value underneath every swatch palette.
//
// A color is stored once, in HSL, and viewed as hex or RGB on demand.
// Palette math (hue rotation, lightness ramps) happens directly on the
// stored cylinder; blending happens in RGB. There is no mutable builder:
// every operation returns a fresh value.

// Single-character variable names (r, g, b, h, s, l, t) are the standard
// convention in color math.
#![allow(clippy::many_single_char_names)]

pub mod color;
pub mod named;
pub mod parse;

pub use color::Color;
pub use parse::ParseColorError;
