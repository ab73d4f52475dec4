use super::filter::{filter_links, passes_all, LinkPredicate};
use super::model::{LinkRecord, MenuNode, Power};
use super::tree::{find_parent_cycles, MenuBuild, MenuTreeBuilder};
use crate::error::{AnvilError, Result};
use crate::store::LinkStore;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// What to do when a requested menu does not exist in the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingMenu {
    /// Return an empty root.
    #[default]
    Empty,
    /// Fail with [`AnvilError::MenuNotFound`].
    Error,
}

/// Entry point for composing named menus.
///
/// Pipeline per request: store fetch → power filter → registered predicates → tree build.
pub struct MenuFacade<S: LinkStore> {
    store: S,
    builder: MenuTreeBuilder,
    predicates: Vec<LinkPredicate>,
    missing_menu: MissingMenu,
}

impl<S: LinkStore> MenuFacade<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            builder: MenuTreeBuilder::default(),
            predicates: Vec::new(),
            missing_menu: MissingMenu::default(),
        }
    }

    pub fn with_missing_menu(mut self, policy: MissingMenu) -> Self {
        self.missing_menu = policy;
        self
    }

    pub fn with_builder(mut self, builder: MenuTreeBuilder) -> Self {
        self.builder = builder;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Register a predicate a link must pass to appear in any menu.
    ///
    /// Predicates run in registration order after the power filter.
    pub fn filter<P>(&mut self, predicate: P)
    where
        P: Fn(&LinkRecord) -> bool + Send + Sync + 'static,
    {
        self.predicates.push(Box::new(predicate));
    }

    pub fn get_menu(&self, name: &str, power: Option<Power>) -> Result<MenuNode> {
        Ok(self.get_menu_report(name, power)?.root)
    }

    /// Like [`Self::get_menu`], also reporting where each link was attached.
    pub fn get_menu_report(&self, name: &str, power: Option<Power>) -> Result<MenuBuild> {
        let links = self.fetch_links(name, power)?;

        for cycle in find_parent_cycles(&links) {
            warn!(menu = name, ?cycle, "menu links form a parent cycle");
        }

        let build = self.builder.build_with_report(&links);
        debug!(
            menu = name,
            links = links.len(),
            fallbacks = build.fallbacks().count(),
            "built menu"
        );
        Ok(build)
    }

    /// The links of `name` visible at `power`, after every filter.
    pub fn fetch_links(&self, name: &str, power: Option<Power>) -> Result<Vec<LinkRecord>> {
        let Some(links) = self.store.fetch_links(name, power)? else {
            return match self.missing_menu {
                MissingMenu::Empty => {
                    debug!(menu = name, "menu not found, returning empty menu");
                    Ok(Vec::new())
                }
                MissingMenu::Error => Err(AnvilError::MenuNotFound(name.to_string())),
            };
        };

        Ok(filter_links(links, power)
            .into_iter()
            .filter(|link| passes_all(&self.predicates, link))
            .collect())
    }
}
