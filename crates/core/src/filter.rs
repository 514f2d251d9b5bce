//! Filter: constraint predicate over entity properties
//!
//! ## Matching semantics
//!
//! A filter holds constraints keyed by property name. An entity matches when
//! **every** constraint key passes, and a key passes when **every** value
//! registered under it is held by the entity under that key. Registering two
//! values for the same key therefore narrows the filter (the entity must
//! carry both), it does not widen it to an either/or.
//!
//! Consequences worth spelling out:
//! - An empty filter matches every entity.
//! - A constraint on a key the entity never set always fails.
//! - Matching short-circuits on the first failing key.
//!
//! The evaluator is stateless beyond the constraint map: re-entrant,
//! side-effect-free, and cheap enough to run inside list filtering loops.

use crate::entity::Entity;
use crate::traits::{AsEntity, Matcher};

/// An AND-composed set of property constraints.
///
/// # Example
///
/// ```
/// use osidb_core::{Entity, Filter, Matcher};
///
/// let dev = Entity::new("dev");
/// dev.add_param("class", "network");
/// dev.add_param("bus-type", "pci");
///
/// let mut filter = Filter::new();
/// filter.add_constraint("class", "network");
/// filter.add_constraint("bus-type", "pci");
/// assert!(filter.matches(&dev));
///
/// filter.add_constraint("class", "audio");
/// assert!(!filter.matches(&dev));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Filter {
    constraints: Vec<(String, Vec<String>)>,
}

impl Filter {
    /// Create a filter with no constraints. It matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.constraints.iter().position(|(k, _)| k == key)
    }

    /// Register `value` as required under `key`.
    ///
    /// Values accumulate: each call adds one more requirement for that key.
    pub fn add_constraint(&mut self, key: &str, value: &str) {
        match self.position(key) {
            Some(idx) => self.constraints[idx].1.push(value.to_string()),
            None => self
                .constraints
                .push((key.to_string(), vec![value.to_string()])),
        }
    }

    /// Drop every constraint registered under `key`. No-op when absent.
    pub fn clear_constraint(&mut self, key: &str) {
        if let Some(idx) = self.position(key) {
            self.constraints.remove(idx);
        }
    }

    /// Drop all constraints, restoring the match-everything filter.
    pub fn clear_constraints(&mut self) {
        self.constraints.clear();
    }

    /// Constraint keys in registration order.
    pub fn constraint_keys(&self) -> Vec<String> {
        self.constraints.iter().map(|(k, _)| k.clone()).collect()
    }

    /// Values registered under `key`; empty when unconstrained.
    pub fn constraint_values(&self, key: &str) -> &[String] {
        match self.position(key) {
            Some(idx) => &self.constraints[idx].1,
            None => &[],
        }
    }

    /// Whether no constraints are registered.
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// The structural matching algorithm, shared with specialized filters.
    pub(crate) fn matches_entity(&self, entity: &Entity) -> bool {
        for (key, required) in &self.constraints {
            let held = entity.param_value_list(key);
            for value in required {
                if !held.iter().any(|h| h == value) {
                    return false;
                }
            }
        }
        true
    }
}

impl<T: AsEntity> Matcher<T> for Filter {
    fn matches(&self, item: &T) -> bool {
        self.matches_entity(item.entity())
    }
}
