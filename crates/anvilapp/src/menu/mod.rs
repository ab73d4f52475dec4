//! # Menus
//!
//! Navigation menus are stored as flat lists of [`LinkRecord`]s. Each link may name
//! a parent link and may carry a power range restricting who sees it.
//!
//! Composing a menu for a request is a three step pipeline:
//!
//! ```text
//! LinkStore::fetch_links ──► filter_links (power range) ──► predicates ──► MenuTreeBuilder
//! ```
//!
//! - [`model`]: [`LinkRecord`] and the produced [`MenuNode`] tree
//! - [`filter`]: power range filtering and external predicates
//! - [`tree`]: parent/child assembly and dropdown decoration
//! - [`facade`]: [`MenuFacade`], the per-menu entry point

pub mod facade;
pub mod filter;
pub mod model;
pub mod tree;

pub use facade::{MenuFacade, MissingMenu};
pub use filter::filter_links;
pub use model::{LinkId, LinkRecord, MenuNode, Power};
pub use tree::{find_parent_cycles, Attachment, MenuBuild, MenuTreeBuilder};
