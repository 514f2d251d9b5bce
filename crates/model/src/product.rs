//! Product: relationship-bearing catalog kinds
//!
//! ## Design
//!
//! Os and Platform are both "products": they carry vendor/version metadata,
//! optional release and end-of-life dates, and directed relationship edges
//! to other products of the same kind. Rather than a base class, [`Product`]
//! is a trait over the concrete kind, so `related()` returns a typed
//! `List<Os>` or `List<Platform>` with no downcasting.
//!
//! ## Edge storage
//!
//! Edges live in a per-product [`Relationships`] map from kind to targets,
//! most-recently-added first. Edges are directed and stored on the source
//! only; nothing is mirrored onto the target. Cycles are legal: every
//! traversal is a single hop, so they cannot cause non-termination.
//!
//! ## Support window
//!
//! Release and end-of-life dates travel through the property store
//! (`release-date` / `eol-date`). A product is supported on a query date
//! unless its release date is strictly after it or its end-of-life date is
//! strictly before it; a missing date never excludes, and day equality
//! passes on both ends.

use crate::relationship::RelationshipKind;
use chrono::NaiveDate;
use osidb_core::{dates, AsEntity, List};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// Property key for the human-readable product name.
pub const PROP_NAME: &str = "name";
/// Property key for the short id (e.g. `fedora39`).
pub const PROP_SHORT_ID: &str = "short-id";
/// Property key for the vendor name.
pub const PROP_VENDOR: &str = "vendor";
/// Property key for the version string.
pub const PROP_VERSION: &str = "version";
/// Property key for the release date (`%Y-%m-%d`).
pub const PROP_RELEASE_DATE: &str = "release-date";
/// Property key for the end-of-life date (`%Y-%m-%d`).
pub const PROP_EOL_DATE: &str = "eol-date";

/// Directed relationship edges of one product.
///
/// Targets are shared handles; an edge keeps its target alive. Iteration
/// order within a kind is most-recently-added first.
pub struct Relationships<T> {
    map: RwLock<FxHashMap<RelationshipKind, Vec<T>>>,
}

impl<T> Default for Relationships<T> {
    fn default() -> Self {
        Self {
            map: RwLock::new(FxHashMap::default()),
        }
    }
}

impl<T: Clone> Relationships<T> {
    /// Create an empty edge map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an edge of the given kind, in front of existing targets.
    pub fn add(&self, kind: RelationshipKind, target: T) {
        self.map.write().entry(kind).or_default().insert(0, target);
    }

    /// Targets of the given kind, most-recently-added first. Empty when the
    /// product has no edges of that kind.
    pub fn get(&self, kind: RelationshipKind) -> Vec<T> {
        self.map.read().get(&kind).cloned().unwrap_or_default()
    }

    /// Kinds with at least one edge.
    pub fn kinds(&self) -> Vec<RelationshipKind> {
        RelationshipKind::ALL
            .into_iter()
            .filter(|kind| self.map.read().get(kind).is_some_and(|v| !v.is_empty()))
            .collect()
    }
}

/// A catalog kind participating in the product relationship graph.
pub trait Product: AsEntity + Clone {
    /// The product's edge map.
    fn relationships(&self) -> &Relationships<Self>;

    /// Record a directed edge from this product to `target`.
    fn add_related(&self, kind: RelationshipKind, target: &Self) {
        self.relationships().add(kind, target.clone());
    }

    /// Direct targets for one relationship kind; no transitive closure.
    ///
    /// The result deduplicates by id (list semantics) but preserves the
    /// most-recently-added-first edge order.
    fn related(&self, kind: RelationshipKind) -> List<Self> {
        self.relationships().get(kind).into_iter().collect()
    }

    /// Human-readable name.
    fn name(&self) -> Option<String> {
        self.entity().param_value(PROP_NAME)
    }

    /// Short id, e.g. `fedora39`.
    fn short_id(&self) -> Option<String> {
        self.entity().param_value(PROP_SHORT_ID)
    }

    /// Vendor name.
    fn vendor(&self) -> Option<String> {
        self.entity().param_value(PROP_VENDOR)
    }

    /// Version string.
    fn version(&self) -> Option<String> {
        self.entity().param_value(PROP_VERSION)
    }

    /// Release date, `None` when unknown or malformed.
    fn release_date(&self) -> Option<NaiveDate> {
        self.entity().param_value_date(PROP_RELEASE_DATE)
    }

    /// End-of-life date, `None` when unknown or malformed.
    fn eol_date(&self) -> Option<NaiveDate> {
        self.entity().param_value_date(PROP_EOL_DATE)
    }

    /// Record the release date in the schema format.
    fn set_release_date(&self, date: NaiveDate) {
        self.entity()
            .set_param(PROP_RELEASE_DATE, &dates::format_date(date));
    }

    /// Record the end-of-life date in the schema format.
    fn set_eol_date(&self, date: NaiveDate) {
        self.entity()
            .set_param(PROP_EOL_DATE, &dates::format_date(date));
    }

    /// Whether the product's support window contains `when`.
    ///
    /// Fails only on `release_date > when` or `eol_date < when`; unknown
    /// dates never exclude, and equality on either boundary passes.
    fn supported_on(&self, when: NaiveDate) -> bool {
        if let Some(release) = self.release_date() {
            if release > when {
                return false;
            }
        }
        if let Some(eol) = self.eol_date() {
            if eol < when {
                return false;
            }
        }
        true
    }
}
