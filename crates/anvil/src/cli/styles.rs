//! Styles for the anvil CLI.
//!
//! Templates refer to semantic style names (`path`, `muted`, ...) through the
//! `style` filter; this module maps those names to `console` styles. Unknown
//! names render unstyled.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub mod names {
    pub const PATH: &str = "path";
    pub const TITLE: &str = "title";
    pub const URL: &str = "url";
    pub const MUTED: &str = "muted";
    pub const FOUND: &str = "found";
    pub const MISSING: &str = "missing";
    pub const WARNING: &str = "warning";
    pub const KEY: &str = "key";
}

pub static ANVIL_STYLES: Lazy<HashMap<&'static str, Style>> = Lazy::new(|| {
    HashMap::from([
        (names::PATH, Style::new().cyan()),
        (names::TITLE, Style::new().bold()),
        (names::URL, Style::new().dim().underlined()),
        (names::MUTED, Style::new().dim()),
        (names::FOUND, Style::new().green().bold()),
        (names::MISSING, Style::new().red()),
        (names::WARNING, Style::new().yellow()),
        (names::KEY, Style::new().blue()),
    ])
});

/// Apply the named style, or return `value` untouched when colors are off.
pub fn apply(value: &str, name: &str, use_color: bool) -> String {
    match ANVIL_STYLES.get(name) {
        Some(style) if use_color => style.apply_to(value).force_styling(true).to_string(),
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_color_is_plain() {
        assert_eq!(apply("x", names::PATH, false), "x");
    }

    #[test]
    fn unknown_style_is_plain() {
        assert_eq!(apply("x", "nope", true), "x");
    }

    #[test]
    fn color_adds_escape_codes() {
        let styled = apply("x", names::FOUND, true);
        assert!(styled.contains('\u{1b}'));
        assert!(styled.contains('x'));
    }
}
