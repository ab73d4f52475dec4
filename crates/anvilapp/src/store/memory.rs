use super::{LinkStore, MenuRecord};
use crate::error::Result;
use crate::menu::{LinkRecord, Power};

/// In-memory link store.
///
/// Menus keep their insertion order; inserting an existing slug replaces its links.
#[derive(Debug, Clone, Default)]
pub struct MemoryLinkStore {
    menus: Vec<MenuRecord>,
}

impl MemoryLinkStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(menus: Vec<MenuRecord>) -> Self {
        let mut store = Self::new();
        for menu in menus {
            store.insert_menu(menu.slug, menu.links);
        }
        store
    }

    pub fn insert_menu(&mut self, slug: impl Into<String>, links: Vec<LinkRecord>) {
        let slug = slug.into();
        match self.menus.iter_mut().find(|m| m.slug == slug) {
            Some(menu) => menu.links = links,
            None => self.menus.push(MenuRecord { slug, links }),
        }
    }
}

impl LinkStore for MemoryLinkStore {
    fn fetch_links(&self, name: &str, _power: Option<Power>) -> Result<Option<Vec<LinkRecord>>> {
        Ok(self
            .menus
            .iter()
            .find(|m| m.slug == name)
            .map(|m| m.links.clone()))
    }

    fn menu_names(&self) -> Result<Vec<String>> {
        Ok(self.menus.iter().map(|m| m.slug.clone()).collect())
    }
}
