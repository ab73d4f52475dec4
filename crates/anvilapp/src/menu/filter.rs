//! Access filtering.
//!
//! Links carry an optional power *range* rather than a single required level,
//! so a link can be gated from below (admin-only) or from above (guest-only).

use super::model::{LinkRecord, Power};

/// Keep the links a requester with `power` may see, preserving order.
///
/// `None` returns the input unchanged.
pub fn filter_links(links: Vec<LinkRecord>, power: Option<Power>) -> Vec<LinkRecord> {
    if power.is_none() {
        return links;
    }

    links
        .into_iter()
        .filter(|link| link.permits(power))
        .collect()
}

/// An externally supplied predicate over links.
pub type LinkPredicate = Box<dyn Fn(&LinkRecord) -> bool + Send + Sync>;

/// True when every predicate accepts `link`. Checked in order, stops at the first rejection.
pub fn passes_all(predicates: &[LinkPredicate], link: &LinkRecord) -> bool {
    predicates.iter().all(|predicate| predicate(link))
}
