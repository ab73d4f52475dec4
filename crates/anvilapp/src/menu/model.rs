use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type LinkId = u64;

/// Access rank of a requester.
pub type Power = i64;

/// A single menu link as stored, before tree assembly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkRecord {
    pub id: LinkId,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub parent_id: Option<LinkId>,
    /// Inclusive lower bound on the requester's power.
    #[serde(default)]
    pub required_power: Option<Power>,
    /// Inclusive upper bound on the requester's power.
    #[serde(default)]
    pub max_power: Option<Power>,
}

impl LinkRecord {
    pub fn new(id: LinkId, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            url: url.into(),
            parent_id: None,
            required_power: None,
            max_power: None,
        }
    }

    pub fn with_parent(mut self, parent_id: LinkId) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn with_required_power(mut self, power: Power) -> Self {
        self.required_power = Some(power);
        self
    }

    pub fn with_max_power(mut self, power: Power) -> Self {
        self.max_power = Some(power);
        self
    }

    /// Whether a requester with `power` may see this link.
    ///
    /// `None` is unfiltered and always passes; absent bounds are permissive.
    pub fn permits(&self, power: Option<Power>) -> bool {
        let Some(power) = power else {
            return true;
        };

        self.required_power.is_none_or(|min| power >= min)
            && self.max_power.is_none_or(|max| power <= max)
    }
}

/// One entry of a composed menu. The root carries no title, url or link id.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct MenuNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_id: Option<LinkId>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_link(link: &LinkRecord) -> Self {
        let mut node = Self {
            title: Some(link.title.clone()),
            url: Some(link.url.clone()),
            link_id: Some(link.id),
            ..Default::default()
        };
        node.set_attribute("li.id", link.id.to_string());
        node
    }

    pub fn is_root(&self) -> bool {
        self.link_id.is_none()
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Child index path to the first node (depth-first) carrying `id`.
    pub fn position_of(&self, id: LinkId) -> Option<Vec<usize>> {
        if self.link_id == Some(id) {
            return Some(Vec::new());
        }

        self.children.iter().enumerate().find_map(|(i, child)| {
            child.position_of(id).map(|mut rest| {
                rest.insert(0, i);
                rest
            })
        })
    }

    pub fn find(&self, id: LinkId) -> Option<&MenuNode> {
        let path = self.position_of(id)?;
        Some(path.iter().fold(self, |node, &i| &node.children[i]))
    }

    /// Node reached by following `path` from here. `path` must come from [`Self::position_of`].
    pub(crate) fn descendant_mut(&mut self, path: &[usize]) -> &mut MenuNode {
        path.iter()
            .fold(self, |node, &i| &mut node.children[i])
    }

    /// Total number of nodes below this one.
    pub fn len(&self) -> usize {
        self.children.iter().map(|c| 1 + c.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
