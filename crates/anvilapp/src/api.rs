//! # API Facade
//!
//! The API layer is a **thin facade** over the view and menu engines. It serves as
//! the single entry point for presentation code, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to [`ViewResolver`] and [`MenuFacade`]
//! - **Returns structured types** (`Result<PathBuf>`, `Result<MenuNode>`)
//!
//! It holds no logic of its own: search order, filtering and tree assembly all
//! live in the `view` and `menu` modules.
//!
//! ## Generic Over Collaborators
//!
//! `AnvilApi<S, F, T>` is generic over the link store, the file probe and the
//! theme provider:
//! - Production: `AnvilApi<JsonLinkStore, FsProbe, FixedTheme>`
//! - Testing: `AnvilApi<MemoryLinkStore, MemProbe, FixedTheme>`

use crate::error::Result;
use crate::menu::{LinkRecord, MenuBuild, MenuFacade, MenuNode, Power};
use crate::store::LinkStore;
use crate::view::probe::FileProbe;
use crate::view::{ThemeProvider, ViewResolver};
use std::path::PathBuf;

pub struct AnvilApi<S: LinkStore, F: FileProbe, T: ThemeProvider> {
    views: ViewResolver<F, T>,
    menus: MenuFacade<S>,
}

impl<S: LinkStore, F: FileProbe, T: ThemeProvider> AnvilApi<S, F, T> {
    pub fn new(views: ViewResolver<F, T>, menus: MenuFacade<S>) -> Self {
        Self { views, menus }
    }

    pub fn views(&self) -> &ViewResolver<F, T> {
        &self.views
    }

    pub fn menus(&self) -> &MenuFacade<S> {
        &self.menus
    }

    pub fn resolve_view(&self, identifier: &str) -> Result<PathBuf> {
        self.views.resolve(identifier)
    }

    pub fn view_candidates(&self, identifier: &str) -> Vec<PathBuf> {
        self.views.candidates(identifier)
    }

    pub fn add_location(&mut self, location: impl Into<PathBuf>) {
        self.views.add_location(location);
    }

    pub fn get_menu(&self, name: &str, power: Option<Power>) -> Result<MenuNode> {
        self.menus.get_menu(name, power)
    }

    pub fn get_menu_report(&self, name: &str, power: Option<Power>) -> Result<MenuBuild> {
        self.menus.get_menu_report(name, power)
    }

    pub fn menu_names(&self) -> Result<Vec<String>> {
        self.menus.store().menu_names()
    }

    pub fn filter_links<P>(&mut self, predicate: P)
    where
        P: Fn(&LinkRecord) -> bool + Send + Sync + 'static,
    {
        self.menus.filter(predicate);
    }
}
