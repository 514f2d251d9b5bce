//! Datamap: a bidirectional string mapping entity
//!
//! Datamaps translate values between naming domains (a keyboard layout name
//! to its os-specific spelling, for example). Entries keep insertion order;
//! inserting an existing inbound value replaces its outbound value in
//! place.

use osidb_core::{AsEntity, Entity};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

struct DatamapInner {
    entity: Entity,
    entries: RwLock<Vec<(String, String)>>,
}

/// A bidirectional string mapping.
#[derive(Clone)]
pub struct Datamap {
    inner: Arc<DatamapInner>,
}

impl Datamap {
    /// Create a datamap with the mandatory id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(DatamapInner {
                entity: Entity::new(id),
                entries: RwLock::new(Vec::new()),
            }),
        }
    }

    /// Record a mapping from `inbound` to `outbound`. An existing entry for
    /// `inbound` is replaced in place.
    pub fn insert(&self, inbound: &str, outbound: &str) {
        let mut entries = self.inner.entries.write();
        match entries.iter().position(|(i, _)| i == inbound) {
            Some(idx) => entries[idx].1 = outbound.to_string(),
            None => entries.push((inbound.to_string(), outbound.to_string())),
        }
    }

    /// Translate `inbound` to its outbound value.
    pub fn lookup(&self, inbound: &str) -> Option<String> {
        self.inner
            .entries
            .read()
            .iter()
            .find(|(i, _)| i == inbound)
            .map(|(_, o)| o.clone())
    }

    /// Translate `outbound` back to the first inbound value mapping to it.
    pub fn reverse_lookup(&self, outbound: &str) -> Option<String> {
        self.inner
            .entries
            .read()
            .iter()
            .find(|(_, o)| o == outbound)
            .map(|(i, _)| i.clone())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.inner.entries.read().len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.entries.read().is_empty()
    }
}

impl AsEntity for Datamap {
    fn entity(&self) -> &Entity {
        &self.inner.entity
    }
}

impl fmt::Debug for Datamap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Datamap")
            .field("id", &self.id())
            .field("entries", &self.len())
            .finish()
    }
}
