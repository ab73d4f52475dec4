//! # Configuration
//!
//! Anvil configuration is managed by [`clapfig`], which handles layered loading
//! from TOML files, environment variables, and programmatic overrides.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `ANVIL__THEME`, `ANVIL__THEME_PATH`, etc.
//! 2. **Site Config**: `<site root>/anvil.toml`.
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `theme_path` | `themes` | Directory holding one sub-directory per theme |
//! | `module_path` | `modules` | Directory holding one sub-directory per module |
//! | `theme` | `default` | Active theme |
//! | `locations` | none | Extra view directories, searched before everything else |
//! | `extensions` | `["php", "blade.php"]` | View file extensions, in probe order |
//! | `links_file` | `menus.json` | JSON file backing the link store |
//! | `missing_menu` | `empty` | `empty` or `error` when a menu does not exist |
//!
//! Relative paths are taken relative to the site root.

use crate::menu::MissingMenu;
use crate::view::paths::DEFAULT_EXTENSIONS;
use crate::view::ViewFinderState;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "anvil.toml";

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

/// Configuration for a site, stored in `anvil.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AnvilConfig {
    /// Directory holding the themes
    #[config(default = "themes")]
    pub theme_path: String,

    /// Directory holding the modules
    #[config(default = "modules")]
    pub module_path: String,

    /// Name of the active theme
    #[config(default = "default")]
    pub theme: String,

    /// Extra view directories, highest priority first
    pub locations: Option<Vec<String>>,

    /// Recognized view extensions, in probe order.
    /// When absent, defaults to ["php", "blade.php"].
    pub extensions: Option<Vec<String>>,

    /// JSON file holding the site's menus
    #[config(default = "menus.json")]
    pub links_file: String,

    /// Behavior when a requested menu does not exist ("empty" or "error")
    #[config(default = "empty")]
    pub missing_menu: MissingMenu,
}

impl Default for AnvilConfig {
    fn default() -> Self {
        Self {
            theme_path: "themes".to_string(),
            module_path: "modules".to_string(),
            theme: "default".to_string(),
            locations: None,
            extensions: None,
            links_file: "menus.json".to_string(),
            missing_menu: MissingMenu::Empty,
        }
    }
}

impl AnvilConfig {
    /// Get view extensions, using defaults if not configured.
    pub fn extensions(&self) -> Vec<String> {
        self.extensions.clone().unwrap_or_else(default_extensions)
    }

    pub fn locations(&self) -> Vec<String> {
        self.locations.clone().unwrap_or_default()
    }

    pub fn links_file(&self, site_root: &Path) -> PathBuf {
        site_root.join(&self.links_file)
    }

    /// Build the view finder state with every path anchored at `site_root`.
    pub fn finder_state(&self, site_root: &Path) -> ViewFinderState {
        let builder = ViewFinderState::builder()
            .theme_path(site_root.join(&self.theme_path))
            .module_path(site_root.join(&self.module_path))
            .extensions(self.extensions());

        self.locations()
            .iter()
            .fold(builder, |builder, location| {
                builder.add_location(site_root.join(location))
            })
            .build()
    }
}
