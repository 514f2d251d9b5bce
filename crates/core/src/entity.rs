//! Entity: the foundation of the catalog data model
//!
//! ## Design
//!
//! An [`Entity`] is a uniquely identified object carrying an ordered
//! multi-valued property bag. Every catalog kind (os, platform, device,
//! media, ...) embeds one.
//!
//! Entities are cheap-to-clone handles: `Clone` copies an `Arc`, so every
//! clone aliases the same underlying state. A property written through one
//! handle is visible through all of them. Several lists may hold the same
//! entity simultaneously without copying it.
//!
//! ## Identity
//!
//! Two handles are the same entity iff they point at the same allocation
//! ([`Entity::ptr_eq`]). The id string is unique within a catalog, but id
//! equality is deliberately weaker than identity: lists deduplicate by id,
//! relationship constraints compare by identity.
//!
//! ## Typed readers
//!
//! The property store holds strings. Typed readers (`param_value_bool`,
//! `param_value_i64`, `param_value_date`, `param_value_enum`) are layered on
//! top and never fail: absence or a malformed value yields the documented
//! default or sentinel.

use crate::dates;
use chrono::NaiveDate;
use parking_lot::RwLock;
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// Per-key value storage. Most keys hold exactly one value, so the first
/// value lives inline.
type Values = SmallVec<[String; 1]>;

/// Insertion-ordered multimap from property key to values.
///
/// Key iteration follows key insertion order; values under one key keep the
/// order they were appended in. This is the raw store underneath [`Entity`];
/// it has no identity and no sharing semantics of its own.
#[derive(Debug, Clone, Default)]
pub struct PropertyBag {
    entries: Vec<(String, Values)>,
}

impl PropertyBag {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    /// Append a value under `key`, keeping existing values.
    pub fn add(&mut self, key: &str, value: &str) {
        match self.position(key) {
            Some(idx) => self.entries[idx].1.push(value.to_string()),
            None => {
                let mut values = Values::new();
                values.push(value.to_string());
                self.entries.push((key.to_string(), values));
            }
        }
    }

    /// Replace all values under `key` with the single `value`.
    ///
    /// The key keeps its original position in key iteration order if it was
    /// already present.
    pub fn set(&mut self, key: &str, value: &str) {
        match self.position(key) {
            Some(idx) => {
                let values = &mut self.entries[idx].1;
                values.clear();
                values.push(value.to_string());
            }
            None => self.add(key, value),
        }
    }

    /// Remove `key` entirely. No-op when absent.
    pub fn clear(&mut self, key: &str) {
        if let Some(idx) = self.position(key) {
            self.entries.remove(idx);
        }
    }

    /// First value under `key`, if any.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.position(key)
            .and_then(|idx| self.entries[idx].1.first())
            .map(String::as_str)
    }

    /// All values under `key` in insertion order; empty when absent.
    pub fn all(&self, key: &str) -> &[String] {
        match self.position(key) {
            Some(idx) => &self.entries[idx].1,
            None => &[],
        }
    }

    /// Whether `key` holds at least one value.
    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bag holds no keys at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

struct EntityInner {
    id: String,
    params: RwLock<PropertyBag>,
}

/// A uniquely identified object with a multi-valued property bag.
///
/// See the module documentation for the sharing and identity semantics.
///
/// # Example
///
/// ```
/// use osidb_core::Entity;
///
/// let dev = Entity::new("pci/8086/10d3");
/// dev.add_param("class", "network");
/// dev.add_param("class", "audio");
///
/// assert_eq!(dev.param_value("class").as_deref(), Some("network"));
/// assert_eq!(dev.param_value_list("class"), vec!["network", "audio"]);
/// ```
#[derive(Clone)]
pub struct Entity {
    inner: Arc<EntityInner>,
}

impl Entity {
    /// Create an entity with the mandatory id.
    ///
    /// The id is immutable for the lifetime of the entity. An empty id is a
    /// contract violation and asserts.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        assert!(!id.is_empty(), "entity id must not be empty");
        Self {
            inner: Arc::new(EntityInner {
                id,
                params: RwLock::new(PropertyBag::new()),
            }),
        }
    }

    /// The unique identifier.
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    /// Identity comparison: true iff both handles alias the same entity.
    pub fn ptr_eq(a: &Entity, b: &Entity) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }

    // ========== Mutation ==========

    /// Append a value under `key`, keeping existing values.
    pub fn add_param(&self, key: &str, value: &str) {
        self.inner.params.write().add(key, value);
    }

    /// Replace all values under `key` with the single `value`.
    pub fn set_param(&self, key: &str, value: &str) {
        self.inner.params.write().set(key, value);
    }

    /// Remove `key` entirely. No-op when absent.
    pub fn clear_param(&self, key: &str) {
        self.inner.params.write().clear(key);
    }

    // ========== String readers ==========

    /// First value under `key`, if any.
    pub fn param_value(&self, key: &str) -> Option<String> {
        self.inner.params.read().first(key).map(str::to_string)
    }

    /// All values under `key` in insertion order; empty when absent.
    pub fn param_value_list(&self, key: &str) -> Vec<String> {
        self.inner.params.read().all(key).to_vec()
    }

    /// Keys in insertion order.
    pub fn param_keys(&self) -> Vec<String> {
        self.inner.params.read().keys().map(str::to_string).collect()
    }

    /// Whether `key` holds at least one value.
    pub fn has_param(&self, key: &str) -> bool {
        self.inner.params.read().contains(key)
    }

    // ========== Typed readers ==========

    /// Boolean reader with the sentinel default `false`.
    pub fn param_value_bool(&self, key: &str) -> bool {
        self.param_value_bool_with_default(key, false)
    }

    /// Boolean reader. `"true"` and `"false"` parse; anything else, or an
    /// absent key, yields `default`.
    pub fn param_value_bool_with_default(&self, key: &str, default: bool) -> bool {
        match self.param_value(key).as_deref() {
            Some("true") => true,
            Some("false") => false,
            _ => default,
        }
    }

    /// Integer reader with the sentinel `-1` for "absent or unparsable".
    pub fn param_value_i64(&self, key: &str) -> i64 {
        self.param_value_i64_with_default(key, -1)
    }

    /// Integer reader; absence or parse failure yields `default`.
    pub fn param_value_i64_with_default(&self, key: &str, default: i64) -> i64 {
        self.param_value(key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Date reader; absence or a malformed date yields `None`.
    pub fn param_value_date(&self, key: &str) -> Option<NaiveDate> {
        self.param_value(key)
            .and_then(|v| dates::parse_date(&v).ok())
    }

    /// Enum reader; absence or an unknown mapping yields `default`.
    pub fn param_value_enum<E: ParamEnum>(&self, key: &str, default: E) -> E {
        self.param_value(key)
            .and_then(|v| E::from_param(&v))
            .unwrap_or(default)
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("id", &self.inner.id)
            .field("params", &*self.inner.params.read())
            .finish()
    }
}

/// String-to-enum mapping used by [`Entity::param_value_enum`].
///
/// Implementors map the schema's string spelling to a variant; unknown
/// strings map to `None` and the reader falls back to its default.
pub trait ParamEnum: Copy {
    /// Map a property value to a variant, `None` when unknown.
    fn from_param(value: &str) -> Option<Self>;
}
