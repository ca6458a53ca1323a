// SPDX-License-Identifier: MIT
//
// swatch: palettes from a base color, on the command line.
//
// This binary wires together the workspace crates:
//
//   swatch-color   → Color value, parsing, hex/RGB/HSL views
//   swatch-palette → harmonies, tonal ramps, random palettes,
//                    curated palettes, the tools-site menu
//
// Each subcommand parses its base color once, hands it to one generator
// and prints the palette: one hex color per line, or a JSON array with
// `--json`. Logs go to stderr so stdout stays pipeable.
//
//   swatch scheme triadic '#FF0000' -n 3
//   swatch fixed analogous '#3366CC' --count 4
//   swatch shades '#3366CC' --steps 10
//   swatch random --count 5 --seed 42

use anyhow::{Context, Result, bail};
use clap::builder::BoolishValueParser;
use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{debug, info};

use swatch_color::Color;
use swatch_palette::harmony::{self, DEFAULT_SPREAD};
use swatch_palette::tone::{
    self, DEFAULT_MAX_LIGHTNESS, DEFAULT_MIN_LIGHTNESS, DEFAULT_SHADE_STEPS, DEFAULT_TINTS,
};
use swatch_palette::{ColorScheme, curated, menu, random};

// ─── CLI ─────────────────────────────────────────────────────────────────────

/// Color palette toolkit
#[derive(Parser)]
#[command(name = "swatch", version)]
#[command(about = "Generate color palettes from a base color")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Print JSON instead of one color per line
    #[arg(long, global = true)]
    json: bool,

    /// Include the developer section of the menu
    #[arg(long, global = true, env = "SWATCH_DEV", value_parser = BoolishValueParser::new())]
    dev: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a palette with a named scheme
    Scheme {
        /// complementary, analogous, triadic, tetradic, split-complementary, monochromatic
        scheme: String,
        /// Base color (hex, rgb(...), hsl(...), or a CSS name like `rebeccapurple`)
        color: String,
        /// Number of colors (blend steps for complementary)
        #[arg(short, default_value_t = 5, value_parser = parse_count)]
        n: usize,
    },

    /// Fixed-size textbook harmony
    Fixed {
        #[arg(value_enum)]
        harmony: Harmony,
        color: String,
        /// Palette size for the analogous harmony (3 to 5)
        #[arg(long, default_value_t = 3, value_parser = parse_count)]
        count: usize,
    },

    /// Blend from the base color to its complement
    Gradient {
        color: String,
        #[arg(long, default_value_t = 5, value_parser = parse_count)]
        steps: usize,
    },

    /// Analogous colors spread evenly around the base hue
    Spread {
        color: String,
        #[arg(short, default_value_t = 5, value_parser = parse_count)]
        n: usize,
        /// Degrees on each side of the base hue
        #[arg(long, default_value_t = DEFAULT_SPREAD, allow_negative_numbers = true)]
        spread: f64,
    },

    /// Lightness ramp at the base hue
    Mono {
        color: String,
        #[arg(short, default_value_t = 5, value_parser = parse_count)]
        n: usize,
        #[arg(long, default_value_t = DEFAULT_MIN_LIGHTNESS)]
        min: f64,
        #[arg(long, default_value_t = DEFAULT_MAX_LIGHTNESS)]
        max: f64,
    },

    /// Base color followed by progressively lighter tints
    Tints {
        color: String,
        #[arg(long, default_value_t = DEFAULT_TINTS, value_parser = parse_count)]
        shades: usize,
    },

    /// White-to-black ramp at the base hue
    Shades {
        color: String,
        #[arg(long, default_value_t = DEFAULT_SHADE_STEPS, value_parser = parse_count)]
        steps: usize,
    },

    /// Random colors sharing a saturation and lightness band
    Random {
        #[arg(long, default_value_t = 5, value_parser = parse_count)]
        count: usize,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Curated reference palettes
    Examples {
        /// Show only the palette at this index
        #[arg(long)]
        index: Option<usize>,
    },

    /// Show the tools-site menu
    Menu,

    /// Look up the title of a menu entry by tag
    Title { tag: String },
}

/// Fixed-size harmonies.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Harmony {
    /// Base and +180°
    Complementary,
    /// Base and neighbours 30° apart (--count 3 to 5)
    Analogous,
    /// Base, +120°, +240°
    Triadic,
    /// Base, +150°, +210°
    Split,
    /// Base, +90°, +180°, +270°
    Square,
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Largest palette size accepted on the command line.
const MAX_COUNT: usize = 100_000;

/// Parse a palette size argument, bounded by [`MAX_COUNT`].
fn parse_count(s: &str) -> std::result::Result<usize, String> {
    let n: usize = s.parse().map_err(|e: std::num::ParseIntError| e.to_string())?;
    if n > MAX_COUNT {
        return Err(format!("must be at most {MAX_COUNT}"));
    }
    Ok(n)
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Parse a base color argument.
fn parse_color(s: &str) -> Result<Color> {
    s.parse().with_context(|| format!("Invalid color '{s}'"))
}

/// Parse a scheme name.
fn parse_scheme(s: &str) -> Result<ColorScheme> {
    ColorScheme::from_name(s).with_context(|| {
        let names: Vec<&str> = ColorScheme::all().iter().map(|c| c.name()).collect();
        format!("Unknown scheme '{s}'. Must be one of: {}", names.join(", "))
    })
}

fn fixed_harmony(kind: Harmony, base: Color, count: usize) -> Result<Vec<Color>> {
    Ok(match kind {
        Harmony::Complementary => harmony::complementary(base),
        Harmony::Analogous => harmony::analogous_fixed(base, count)?,
        Harmony::Triadic => harmony::triad(base),
        Harmony::Split => harmony::split_complement(base),
        Harmony::Square => harmony::square(base),
    })
}

/// Print a palette as one hex per line, or as JSON.
fn print_palette(colors: &[Color], json: bool) -> Result<()> {
    if json {
        print_json(colors)
    } else {
        for color in colors {
            println!("{color}");
        }
        Ok(())
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ─── Main ────────────────────────────────────────────────────────────────────

fn run(cli: Cli) -> Result<()> {
    let json = cli.json;

    match cli.command {
        Commands::Scheme { scheme, color, n } => {
            let scheme = parse_scheme(&scheme)?;
            let base = parse_color(&color)?;
            print_palette(&scheme.generate(base, n), json)
        }
        Commands::Fixed { harmony: kind, color, count } => {
            let base = parse_color(&color)?;
            debug!(?kind, %base, count, "fixed harmony");
            print_palette(&fixed_harmony(kind, base, count)?, json)
        }
        Commands::Gradient { color, steps } => {
            let base = parse_color(&color)?;
            print_palette(&harmony::complementary_gradient(base, steps), json)
        }
        Commands::Spread { color, n, spread } => {
            let base = parse_color(&color)?;
            print_palette(&harmony::analogous(base, n, spread), json)
        }
        Commands::Mono { color, n, min, max } => {
            let base = parse_color(&color)?;
            print_palette(&tone::monochromatic(base, n, min, max), json)
        }
        Commands::Tints { color, shades } => {
            let base = parse_color(&color)?;
            print_palette(&tone::tints(base, shades), json)
        }
        Commands::Shades { color, steps } => {
            let base = parse_color(&color)?;
            print_palette(&tone::shades(base, steps), json)
        }
        Commands::Random { count, seed } => {
            let palette = match seed {
                Some(seed) => random::balanced(&mut StdRng::seed_from_u64(seed), count),
                None => random::balanced(&mut rand::rng(), count),
            };
            info!(
                saturation = ?palette.saturation,
                lightness = ?palette.lightness,
                "drew balanced palette"
            );
            if json {
                print_json(&palette)
            } else {
                print_palette(&palette.colors, false)
            }
        }
        Commands::Examples { index } => match index {
            Some(i) => {
                let palette = curated::example_palette(i).with_context(|| {
                    format!(
                        "No example palette at index {i} (have {})",
                        curated::EXAMPLE_PALETTES.len()
                    )
                })?;
                print_palette(&palette, json)
            }
            None if json => print_json(curated::EXAMPLE_PALETTES),
            None => {
                for row in curated::EXAMPLE_PALETTES {
                    println!("{}", row.join(" "));
                }
                Ok(())
            }
        },
        Commands::Menu => {
            let items = menu::menu_items(cli.dev);
            if json {
                return print_json(&items);
            }
            for section in items {
                println!("{} ({})", section.title, section.tag);
                for item in section.items {
                    println!("  {} ({})", item.title, item.tag);
                }
            }
            Ok(())
        }
        Commands::Title { tag } => {
            let Some(title) = menu::title_for_tag(&tag, cli.dev) else {
                bail!("No menu entry tagged '{tag}'");
            };
            println!("{title}");
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    run(cli)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_color_reports_input() {
        let err = parse_color("nope").unwrap_err();
        assert!(err.to_string().contains("'nope'"), "{err}");
    }

    #[test]
    fn parse_scheme_lists_choices() {
        assert_eq!(parse_scheme("Triadic").unwrap(), ColorScheme::Triadic);
        let err = parse_scheme("pentagram").unwrap_err().to_string();
        assert!(err.contains("split-complementary"), "{err}");
    }

    #[test]
    fn fixed_analogous_validates_count() {
        let base = Color::hex("#FF0000").unwrap();
        assert_eq!(fixed_harmony(Harmony::Analogous, base, 4).unwrap().len(), 4);
        assert!(fixed_harmony(Harmony::Analogous, base, 6).is_err());
        // Count only applies to the analogous harmony.
        assert_eq!(fixed_harmony(Harmony::Square, base, 6).unwrap().len(), 4);
    }

    #[test]
    fn counts_are_bounded() {
        assert_eq!(parse_count("0"), Ok(0));
        assert_eq!(parse_count("100000"), Ok(MAX_COUNT));
        assert!(parse_count("100001").is_err());
        assert!(parse_count("18446744073709551615").is_err());
        assert!(parse_count("-1").is_err());
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["swatch", "menu", "--dev", "--json"]).unwrap();
        assert!(cli.dev);
        assert!(cli.json);
    }
}
