//! Navigation menu of the tools site.
//!
//! A static, hand-authored tree: sections with an icon and a list of
//! tool pages. Every entry carries a tag, which is what routes use to
//! find the page title. The developer section only shows up when the
//! caller asks for it (`--dev` or `SWATCH_DEV` in the CLI).

use serde::Serialize;

/// A tool page inside a menu section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuSubItem {
    pub title: &'static str,
    pub url: &'static str,
    pub tag: &'static str,
}

/// A top-level menu section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub title: &'static str,
    pub url: &'static str,
    pub tag: &'static str,
    /// Icon name from the site's icon set.
    pub icon: &'static str,
    /// Whether the section starts expanded.
    pub is_active: bool,
    pub items: &'static [MenuSubItem],
}

const MENU: &[MenuItem] = &[MenuItem {
    title: "Color",
    url: "#",
    tag: "color",
    icon: "paint-bucket",
    is_active: true,
    items: &[
        // The route is published under this spelling.
        MenuSubItem { title: "All Conversions", url: "all-converions", tag: "all-conversions" },
        MenuSubItem { title: "Palette Generator", url: "palettes", tag: "palettes" },
        MenuSubItem { title: "Example Palettes", url: "examples", tag: "examples" },
    ],
}];

const DEV_MENU: &[MenuItem] = &[MenuItem {
    title: "Developer",
    url: "#",
    tag: "dev",
    icon: "code",
    is_active: false,
    items: &[
        MenuSubItem { title: "Scheme Preview", url: "scheme-preview", tag: "scheme-preview" },
        MenuSubItem { title: "Random Palettes", url: "random", tag: "random" },
    ],
}];

/// The menu sections, with the developer section appended when `include_dev`.
#[must_use]
pub fn menu_items(include_dev: bool) -> Vec<&'static MenuItem> {
    let dev: &[MenuItem] = if include_dev { DEV_MENU } else { &[] };
    MENU.iter().chain(dev).collect()
}

/// Look up the display title of the section or page with `tag`.
///
/// Returns `None` if no visible entry carries the tag.
#[must_use]
pub fn title_for_tag(tag: &str, include_dev: bool) -> Option<&'static str> {
    menu_items(include_dev).into_iter().find_map(|section| {
        if section.tag == tag {
            return Some(section.title);
        }
        section.items.iter().find(|item| item.tag == tag).map(|item| item.title)
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
