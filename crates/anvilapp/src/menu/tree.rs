//! # Menu Tree Assembly
//!
//! Links arrive as a flat, ordered list. Each one is attached, in input order,
//! under the node built from its parent link, or under the root.
//!
//! ## Attachment Rules
//!
//! - No `parent_id` → attach under the root.
//! - `parent_id` found anywhere in the tree built **so far** → attach under it.
//! - `parent_id` not (yet) in the tree → fall back to the root. This covers
//!   parents filtered out by access rules, parents listed after their
//!   children, and links naming themselves as parent.
//!
//! Because lookup only scans nodes that already exist, cyclic parent references
//! can never loop: whichever link of the cycle comes first lands on the root.
//! [`find_parent_cycles`] reports such cycles for diagnostics.
//!
//! ## Presentation Attributes
//!
//! Every time a node gains a child it is decorated with the dropdown attribute
//! set (see [`DROPDOWN_ATTRIBUTES`]). Attributes live in a map, so decorating a
//! node twice leaves it unchanged.

use super::model::{LinkId, LinkRecord, MenuNode};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// Attributes set on every node that has children.
pub const DROPDOWN_ATTRIBUTES: [(&str, &str); 6] = [
    ("li.class", "dropdown"),
    ("a.role", "button"),
    ("a.class", "dropdown-toggle"),
    ("a.data-toggle", "dropdown"),
    ("ul.class", "dropdown-menu"),
    ("ul.role", "menu"),
];

/// Where a link ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attachment {
    /// The link has no parent.
    Root,
    /// Attached under the node of the given parent link.
    Attached(LinkId),
    /// The parent was not in the tree; attached under the root instead.
    FellBackToRoot(LinkId),
}

/// A built menu plus the attachment outcome of every link, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuBuild {
    pub root: MenuNode,
    pub attachments: Vec<(LinkId, Attachment)>,
}

impl MenuBuild {
    /// Links whose parent could not be found.
    pub fn fallbacks(&self) -> impl Iterator<Item = (LinkId, LinkId)> + '_ {
        self.attachments.iter().filter_map(|(id, att)| match att {
            Attachment::FellBackToRoot(parent) => Some((*id, *parent)),
            _ => None,
        })
    }
}

#[derive(Debug, Clone)]
pub struct MenuTreeBuilder {
    parent_attributes: Vec<(String, String)>,
}

impl Default for MenuTreeBuilder {
    fn default() -> Self {
        Self {
            parent_attributes: DROPDOWN_ATTRIBUTES
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl MenuTreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom attribute set for parent nodes instead of the dropdown one.
    pub fn with_parent_attributes<I, K, V>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.parent_attributes = attributes
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    pub fn build(&self, links: &[LinkRecord]) -> MenuNode {
        self.build_with_report(links).root
    }

    pub fn build_with_report(&self, links: &[LinkRecord]) -> MenuBuild {
        let mut root = MenuNode::root();
        let attachments = links
            .iter()
            .map(|link| (link.id, self.attach(&mut root, link)))
            .collect();

        MenuBuild { root, attachments }
    }

    /// Add one link to the tree under `root`, decorating its parent.
    pub fn attach(&self, root: &mut MenuNode, link: &LinkRecord) -> Attachment {
        let (path, attachment) = match link.parent_id {
            None => (Vec::new(), Attachment::Root),
            Some(parent_id) => match root.position_of(parent_id) {
                Some(path) => (path, Attachment::Attached(parent_id)),
                None => {
                    warn!(
                        link = link.id,
                        parent = parent_id,
                        "menu link parent not found, attaching to root"
                    );
                    (Vec::new(), Attachment::FellBackToRoot(parent_id))
                }
            },
        };

        let parent = root.descendant_mut(&path);
        parent.children.push(MenuNode::from_link(link));
        for (key, value) in &self.parent_attributes {
            parent.set_attribute(key.as_str(), value.as_str());
        }

        debug!(link = link.id, ?attachment, "attached menu link");
        attachment
    }
}

/// Parent-reference cycles among `links`, each reported once.
///
/// A cycle is listed starting from its smallest id, following parent links.
/// Self-references are cycles of length one.
pub fn find_parent_cycles(links: &[LinkRecord]) -> Vec<Vec<LinkId>> {
    let parents: HashMap<LinkId, LinkId> = links
        .iter()
        .filter_map(|link| link.parent_id.map(|parent| (link.id, parent)))
        .collect();

    let mut settled: HashSet<LinkId> = HashSet::new();
    let mut cycles = Vec::new();

    for link in links {
        let mut trail: Vec<LinkId> = Vec::new();
        let mut current = Some(link.id);

        while let Some(id) = current {
            if settled.contains(&id) {
                break;
            }
            if let Some(start) = trail.iter().position(|&seen| seen == id) {
                let mut cycle = trail[start..].to_vec();
                if let Some(min_pos) = cycle
                    .iter()
                    .enumerate()
                    .min_by_key(|(_, id)| **id)
                    .map(|(pos, _)| pos)
                {
                    cycle.rotate_left(min_pos);
                }
                cycles.push(cycle);
                break;
            }
            trail.push(id);
            current = parents.get(&id).copied();
        }

        settled.extend(trail);
    }

    cycles
}
