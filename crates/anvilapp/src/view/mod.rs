//! # View Resolution
//!
//! Templates are addressed by a logical **view identifier** rather than a file path.
//! The view layer turns that identifier into a concrete file on disk.
//!
//! ## Identifier Syntax
//!
//! - `name`: an unscoped view, looked up in the active theme (e.g. `home`)
//! - `module::name`: a module view, overridable per theme (e.g. `blog::post`)
//! - Dots in `name` are hierarchy separators: `admin.home` → `admin/home.<ext>`
//!
//! Only the **first** `::` separates module from name, so `a::b::c` is module `a`,
//! name `b::c`.
//!
//! ## Search Order
//!
//! ```text
//! 1. explicit locations          (registration order, always first)
//! 2. module view:  {themes}/{theme}/views/partials/{module}
//!                  {modules}/{module}/views
//!    plain view:   {themes}/{theme}/views
//! ```
//!
//! Identifier parts are always appended below the candidate directory: root,
//! prefix and `..` components are dropped, so `/etc::passwd` or `/etc/passwd`
//! cannot name a file outside the configured roots.
//!
//! Inside each directory every recognized extension is probed in configured order
//! (`php`, then `blade.php` by default). The first existing file wins.
//!
//! ## Layout
//!
//! - [`paths`]: candidate directory generation ([`ViewFinderState`], [`ViewFinderBuilder`])
//! - [`probe`]: extension probing over a [`probe::FileProbe`]
//! - [`finder`]: the [`ViewResolver`] tying both together with a [`finder::ThemeProvider`]

use std::fmt;
use std::path::{Component, Path, PathBuf};

pub mod finder;
pub mod paths;
pub mod probe;

pub use finder::{FixedTheme, ThemeProvider, ViewResolver};
pub use paths::{ViewFinderBuilder, ViewFinderState};

pub const MODULE_SEPARATOR: &str = "::";

/// A parsed view identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewIdentifier {
    pub module: Option<String>,
    pub name: String,
}

impl ViewIdentifier {
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(MODULE_SEPARATOR) {
            Some((module, name)) => Self {
                module: Some(module.to_string()),
                name: name.to_string(),
            },
            None => Self {
                module: None,
                name: raw.to_string(),
            },
        }
    }

    /// The name's hierarchy segments (`admin.home` → `["admin", "home"]`).
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.name.split('.')
    }
}

/// Append `relative` below `base`, keeping only its normal components.
pub(crate) fn push_relative(base: &mut PathBuf, relative: &str) {
    base.extend(
        Path::new(relative)
            .components()
            .filter(|c| matches!(c, Component::Normal(_))),
    );
}

impl fmt::Display for ViewIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.module {
            Some(module) => write!(f, "{}{}{}", module, MODULE_SEPARATOR, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

impl From<&str> for ViewIdentifier {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}
