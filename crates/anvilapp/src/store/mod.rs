//! # Link Storage
//!
//! Menus and their links are persisted outside of this crate. The [`LinkStore`]
//! trait is the seam: the menu facade only ever asks for "the links of menu X,
//! as seen by power P".
//!
//! ## Implementations
//!
//! - [`json::JsonLinkStore`]: reads a `menus.json` file on every fetch
//! - [`memory::MemoryLinkStore`]: in-memory menus, for tests and embedding
//!
//! ## The Power Hint
//!
//! Stores receive the requester's power and may use it to narrow results at
//! query level. This is an optimization only: the facade re-applies the same
//! power filter to whatever the store returns.
//!
//! ## File Format
//!
//! ```text
//! [
//!   { "slug": "main", "links": [ { "id": 1, "title": "Home", "url": "/" }, ... ] },
//!   ...
//! ]
//! ```

use crate::error::Result;
use crate::menu::{LinkRecord, Power};
use serde::{Deserialize, Serialize};

pub mod json;
pub mod memory;

/// A named menu with its links, in display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuRecord {
    pub slug: String,
    #[serde(default)]
    pub links: Vec<LinkRecord>,
}

/// Source of menu links.
pub trait LinkStore {
    /// Links of the menu `name`, in display order.
    ///
    /// Returns `Ok(None)` when the menu does not exist. `power` is a narrowing hint.
    fn fetch_links(&self, name: &str, power: Option<Power>) -> Result<Option<Vec<LinkRecord>>>;

    /// Slugs of all known menus.
    fn menu_names(&self) -> Result<Vec<String>>;
}

impl<S: LinkStore + ?Sized> LinkStore for &S {
    fn fetch_links(&self, name: &str, power: Option<Power>) -> Result<Option<Vec<LinkRecord>>> {
        (**self).fetch_links(name, power)
    }

    fn menu_names(&self) -> Result<Vec<String>> {
        (**self).menu_names()
    }
}
