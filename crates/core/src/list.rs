//! List: homogeneous, id-deduplicated ordered container
//!
//! ## Design
//!
//! A `List<T>` holds catalog handles of one kind in insertion order, with at
//! most one element per id. Adding an element whose id is already present
//! replaces the old element **in place**, keeping its positional slot.
//!
//! The element type restriction is enforced by the type system: a
//! `List<Device>` cannot receive an os. There is no runtime kind check.
//!
//! ## Set algebra
//!
//! `new_filtered`, `new_intersection` and `new_union` build fresh lists and
//! never mutate their arguments; the returned list shares element handles
//! with the sources (no deep copies). The `add_*` variants do the same work
//! into an existing receiver, mutating only the receiver.

use crate::traits::{AsEntity, Matcher};
use rustc_hash::FxHashSet;

/// Ordered, id-deduplicating container of catalog handles.
///
/// # Example
///
/// ```
/// use osidb_core::{Entity, List};
///
/// let mut list = List::new();
/// list.add(Entity::new("a"));
/// list.add(Entity::new("b"));
///
/// let replacement = Entity::new("a");
/// replacement.set_param("name", "second");
/// list.add(replacement);
///
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.get(0).unwrap().param_value("name").as_deref(), Some("second"));
/// ```
#[derive(Debug, Clone)]
pub struct List<T> {
    elements: Vec<T>,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
        }
    }
}

impl<T: AsEntity + Clone> List<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements (unique ids).
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element at `index`, in list order.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Handle of the element with the given id, if present.
    pub fn find(&self, id: &str) -> Option<T> {
        self.position(id).map(|idx| self.elements[idx].clone())
    }

    /// Whether an element with the given id is present.
    pub fn contains_id(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.elements.iter().position(|e| e.id() == id)
    }

    /// Add an element. An existing element with the same id is replaced at
    /// its original position; otherwise the element is appended.
    pub fn add(&mut self, element: T) {
        match self.position(element.id()) {
            Some(idx) => self.elements[idx] = element,
            None => self.elements.push(element),
        }
    }

    /// Add every element of `other`, in `other`'s order.
    pub fn add_all(&mut self, other: &List<T>) {
        for element in &other.elements {
            self.add(element.clone());
        }
    }

    /// Add every element of `source` accepted by `matcher`, in source order.
    /// An absent matcher accepts everything.
    pub fn add_filtered<M: Matcher<T>>(&mut self, source: &List<T>, matcher: Option<&M>) {
        for element in &source.elements {
            let accepted = match matcher {
                Some(m) => m.matches(element),
                None => true,
            };
            if accepted {
                self.add(element.clone());
            }
        }
    }

    /// Add the elements present (by id) in both `a` and `b`, in `a`'s order,
    /// taking the element from `a`.
    pub fn add_intersection(&mut self, a: &List<T>, b: &List<T>) {
        let b_ids: FxHashSet<&str> = b.elements.iter().map(|e| e.id()).collect();
        for element in &a.elements {
            if b_ids.contains(element.id()) {
                self.add(element.clone());
            }
        }
    }

    /// Add all of `a` in order, then the elements of `b` whose id is not yet
    /// present, in `b`'s order.
    pub fn add_union(&mut self, a: &List<T>, b: &List<T>) {
        self.add_all(a);
        let seen: FxHashSet<String> = self.elements.iter().map(|e| e.id().to_string()).collect();
        for element in &b.elements {
            if !seen.contains(element.id()) {
                self.add(element.clone());
            }
        }
    }

    /// Fresh list holding the elements of `source` accepted by `matcher`, in
    /// source order. An absent matcher copies the whole list.
    pub fn new_filtered<M: Matcher<T>>(source: &List<T>, matcher: Option<&M>) -> List<T> {
        let mut list = List::new();
        list.add_filtered(source, matcher);
        list
    }

    /// Fresh list holding the ids present in both inputs; `a`'s order,
    /// `a`'s elements.
    pub fn new_intersection(a: &List<T>, b: &List<T>) -> List<T> {
        let mut list = List::new();
        list.add_intersection(a, b);
        list
    }

    /// Fresh list holding all of `a` then the novel elements of `b`.
    pub fn new_union(a: &List<T>, b: &List<T>) -> List<T> {
        let mut list = List::new();
        list.add_union(a, b);
        list
    }

    /// Iterate the elements in list order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// The element ids in list order.
    pub fn ids(&self) -> Vec<String> {
        self.elements.iter().map(|e| e.id().to_string()).collect()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: AsEntity + Clone> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        for element in iter {
            list.add(element);
        }
        list
    }
}
