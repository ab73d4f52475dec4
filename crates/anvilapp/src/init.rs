//! # Site Initialization
//!
//! A **site root** is the directory holding a site's `anvil.toml`, its themes,
//! modules and menu file:
//!
//! ```text
//! site/
//! ├── anvil.toml
//! ├── menus.json
//! ├── themes/
//! │   └── default/views/...
//! └── modules/
//!     └── blog/views/...
//! ```
//!
//! [`initialize`] loads the configuration and wires the production collaborators
//! (filesystem probe, JSON link store, fixed theme) into an [`AnvilApi`].
//!
//! ## Theme Override
//!
//! The active theme comes from `theme` in the config unless a `theme_override`
//! is passed (the CLI's `--theme` flag).

use crate::api::AnvilApi;
use crate::config::{AnvilConfig, CONFIG_FILENAME};
use crate::error::{AnvilError, Result};
use crate::menu::MenuFacade;
use crate::store::json::JsonLinkStore;
use crate::view::probe::FsProbe;
use crate::view::{FixedTheme, ViewResolver};
use clapfig::{Clapfig, SearchMode, SearchPath};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct AnvilContext {
    pub api: AnvilApi<JsonLinkStore, FsProbe, FixedTheme>,
    pub config: AnvilConfig,
    pub site_root: PathBuf,
}

/// Load `anvil.toml` from `site_root`, falling back to defaults when absent.
pub fn load_config(site_root: &Path) -> Result<AnvilConfig> {
    Clapfig::builder()
        .app_name("anvil")
        .file_name(CONFIG_FILENAME)
        .search_paths(vec![SearchPath::Path(site_root.to_path_buf())])
        .search_mode(SearchMode::Merge)
        .load()
        .map_err(|e| AnvilError::Config(e.to_string()))
}

/// Initialize the anvil context for a site.
///
/// # Arguments
///
/// * `site_root` - Directory containing `anvil.toml`; relative config paths are anchored here
/// * `theme_override` - Theme to use instead of the configured one
pub fn initialize(site_root: &Path, theme_override: Option<String>) -> Result<AnvilContext> {
    let mut config = load_config(site_root)?;
    if let Some(theme) = theme_override {
        config.theme = theme;
    }

    debug!(
        site = %site_root.display(),
        theme = %config.theme,
        "initializing anvil context"
    );

    let views = ViewResolver::new(
        config.finder_state(site_root),
        FsProbe,
        FixedTheme::new(config.theme.clone()),
    );
    let menus = MenuFacade::new(JsonLinkStore::new(config.links_file(site_root)))
        .with_missing_menu(config.missing_menu);

    Ok(AnvilContext {
        api: AnvilApi::new(views, menus),
        config,
        site_root: site_root.to_path_buf(),
    })
}
