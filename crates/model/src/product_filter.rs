//! ProductFilter: property constraints plus relationship and support-date
//! constraints
//!
//! Matching runs base-then-specialized and short-circuits: the structural
//! property constraints are evaluated first, and the relationship/date
//! checks only ever see candidates that already passed them.
//!
//! Relationship constraints compare targets by **identity**
//! ([`Entity::ptr_eq`]), not by id string: the constraint is "this very
//! product appears among the candidate's edges".

use crate::product::Product;
use crate::relationship::RelationshipKind;
use chrono::NaiveDate;
use osidb_core::{AsEntity, Entity, Filter, Matcher};

/// Filter over products: property constraints, required relationship
/// targets, and an optional support-date test.
///
/// # Example
///
/// ```
/// use osidb_model::{Os, OsFilter, Product, RelationshipKind};
/// use osidb_core::Matcher;
///
/// let fedora = Os::new("os/fedora/39");
/// let core = Os::new("os/fedora-core/6");
/// fedora.add_related(RelationshipKind::DerivesFrom, &core);
///
/// let mut filter = OsFilter::new();
/// filter.add_related_constraint(RelationshipKind::DerivesFrom, &core);
/// assert!(filter.matches(&fedora));
/// assert!(!filter.matches(&core));
/// ```
#[derive(Debug, Clone)]
pub struct ProductFilter<T: Product> {
    base: Filter,
    related: Vec<(RelationshipKind, Vec<T>)>,
    support_date: Option<NaiveDate>,
}

/// Filter over operating systems.
pub type OsFilter = ProductFilter<crate::os::Os>;

/// Filter over platforms.
pub type PlatformFilter = ProductFilter<crate::platform::Platform>;

impl<T: Product> Default for ProductFilter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Product> ProductFilter<T> {
    /// Create a filter with no constraints. It matches every product.
    pub fn new() -> Self {
        Self {
            base: Filter::new(),
            related: Vec::new(),
            support_date: None,
        }
    }

    /// Register a required property value (see [`Filter::add_constraint`]).
    pub fn add_constraint(&mut self, key: &str, value: &str) {
        self.base.add_constraint(key, value);
    }

    /// Drop the property constraints registered under `key`.
    pub fn clear_constraint(&mut self, key: &str) {
        self.base.clear_constraint(key);
    }

    /// Require `target` to appear among the candidate's edges of `kind`.
    ///
    /// Constraints accumulate: every registered target must be present.
    pub fn add_related_constraint(&mut self, kind: RelationshipKind, target: &T) {
        match self.related.iter().position(|(k, _)| *k == kind) {
            Some(idx) => self.related[idx].1.push(target.clone()),
            None => self.related.push((kind, vec![target.clone()])),
        }
    }

    /// Drop the relationship constraints registered for `kind`.
    pub fn clear_related_constraint(&mut self, kind: RelationshipKind) {
        self.related.retain(|(k, _)| *k != kind);
    }

    /// Require the candidate's support window to contain `when`.
    pub fn set_support_date(&mut self, when: NaiveDate) {
        self.support_date = Some(when);
    }

    /// Drop the support-date constraint.
    pub fn clear_support_date(&mut self) {
        self.support_date = None;
    }

    /// The support-date constraint, if any.
    pub fn support_date(&self) -> Option<NaiveDate> {
        self.support_date
    }
}

impl<T: Product> Matcher<T> for ProductFilter<T> {
    fn matches(&self, item: &T) -> bool {
        // structural property constraints first
        if !self.base.matches(item) {
            return false;
        }

        for (kind, targets) in &self.related {
            if targets.is_empty() {
                continue;
            }
            let held = item.relationships().get(*kind);
            if held.is_empty() {
                return false;
            }
            for target in targets {
                if !held
                    .iter()
                    .any(|h| Entity::ptr_eq(h.entity(), target.entity()))
                {
                    return false;
                }
            }
        }

        if let Some(when) = self.support_date {
            if !item.supported_on(when) {
                return false;
            }
        }

        true
    }
}
