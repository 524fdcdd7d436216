use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

pub type LinkTable = HashMap<String, Link>;

/// Links of an event as they appear in a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LinkRefs {
    Embedded(Vec<Link>),
    Ids(Vec<String>),
}

impl Default for LinkRefs {
    fn default() -> Self {
        LinkRefs::Embedded(Vec::new())
    }
}

impl LinkRefs {
    pub fn resolve(&self, table: &LinkTable) -> Vec<Link> {
        match self {
            LinkRefs::Embedded(links) => links.clone(),
            LinkRefs::Ids(ids) => resolve_links(ids, table),
        }
    }
}

/// Looks up `ids` in `table`, keeping their order. Unknown ids are skipped.
pub fn resolve_links<S: AsRef<str>>(ids: &[S], table: &LinkTable) -> Vec<Link> {
    ids.iter()
        .filter_map(|id| {
            let link = table.get(id.as_ref());
            if link.is_none() {
                log::debug!("Dropping unknown link '{}'", id.as_ref());
            }
            link.cloned()
        })
        .collect()
}
