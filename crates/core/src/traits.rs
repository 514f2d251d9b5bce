//! Core trait seams
//!
//! Two small traits tie the model together without a class hierarchy:
//!
//! - [`AsEntity`] exposes the embedded [`Entity`] of any catalog kind. Lists
//!   and filters are written against it, so one `List` implementation and one
//!   structural matching algorithm serve every kind.
//! - [`Matcher`] is the predicate seam. The base [`Filter`](crate::Filter)
//!   implements it for anything entity-backed; specialized filters implement
//!   it for the kinds they understand, and
//!   [`List::new_filtered`](crate::List::new_filtered) accepts them all
//!   uniformly.

use crate::entity::Entity;

/// Access to the embedded [`Entity`] of a catalog kind.
///
/// Every concrete kind (os, platform, device, device link, media, ...)
/// embeds exactly one entity; this trait is how generic code reaches it.
pub trait AsEntity {
    /// The embedded entity.
    fn entity(&self) -> &Entity;

    /// The unique identifier, delegated to the embedded entity.
    fn id(&self) -> &str {
        self.entity().id()
    }
}

impl AsEntity for Entity {
    fn entity(&self) -> &Entity {
        self
    }
}

/// A pure predicate over items of type `T`.
///
/// Matchers hold no mutable state and may be evaluated any number of times
/// in any order; a mismatch is `false`, never an error.
pub trait Matcher<T: ?Sized> {
    /// Whether `item` satisfies this predicate.
    fn matches(&self, item: &T) -> bool;
}
