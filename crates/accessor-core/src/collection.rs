// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Shared, identity-ordered entity collection.
//!
//! [`Collection`] is the container used for collection-valued associations.
//! It behaves like an object collection in a persistence framework:
//!
//! - membership is decided by entity identity ([`Shared::ptr_eq`]), not by
//!   comparing entity contents;
//! - elements keep their insertion order;
//! - cloning a collection yields a second handle to the *same* storage, so a
//!   handle obtained from a getter observes later additions and removals.
//!
//! ```text
//! song.genres ──┐
//!               ├──► Rc<RefCell<Vec<Shared<Genre>>>>  [rock, jazz]
//! let view ─────┘
//! ```

use std::{cell::RefCell, fmt, rc::Rc};

use crate::Shared;

/// Insertion-ordered set of [`Shared`] entity handles.
///
/// # Example
///
/// ```rust
/// use accessor_core::{Collection, Shared};
///
/// let rock = Shared::new("rock");
/// let jazz = Shared::new("jazz");
///
/// let genres = Collection::new();
/// let view = genres.clone();
///
/// genres.add(rock.clone());
/// genres.add(rock.clone());
/// genres.add(jazz.clone());
///
/// assert_eq!(view.len(), 2);
/// assert_eq!(view.first(), Some(rock));
/// assert_eq!(view.last(), Some(jazz));
/// ```
pub struct Collection<T> {
    items: Rc<RefCell<Vec<Shared<T>>>>
}

impl<T> Collection<T> {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Rc::new(RefCell::new(Vec::new()))
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    /// Check if the collection holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Check if this exact entity is an element.
    #[must_use]
    pub fn contains(&self, item: &Shared<T>) -> bool {
        self.items.borrow().iter().any(|existing| existing.ptr_eq(item))
    }

    /// Append an entity unless it is already present.
    ///
    /// Returns `true` when the entity was inserted.
    pub fn add(&self, item: Shared<T>) -> bool {
        if self.contains(&item) {
            log::trace!("collection already holds {item:?}");
            return false;
        }
        self.items.borrow_mut().push(item);
        true
    }

    /// Remove an entity if present.
    ///
    /// Returns `true` when the entity was an element.
    pub fn remove(&self, item: &Shared<T>) -> bool {
        let mut items = self.items.borrow_mut();
        match items.iter().position(|existing| existing.ptr_eq(item)) {
            Some(index) => {
                items.remove(index);
                true
            }
            None => {
                log::trace!("collection does not hold {item:?}");
                false
            }
        }
    }

    /// Remove every element.
    pub fn clear(&self) {
        self.items.borrow_mut().clear();
    }

    /// First element in insertion order.
    #[must_use]
    pub fn first(&self) -> Option<Shared<T>> {
        self.items.borrow().first().cloned()
    }

    /// Last element in insertion order.
    #[must_use]
    pub fn last(&self) -> Option<Shared<T>> {
        self.items.borrow().last().cloned()
    }

    /// Element at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Shared<T>> {
        self.items.borrow().get(index).cloned()
    }

    /// Copy the current elements into a vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Shared<T>> {
        self.items.borrow().clone()
    }

    /// Iterate over a snapshot of the current elements.
    ///
    /// The snapshot makes it safe to mutate the collection while iterating.
    #[must_use]
    pub fn iter(&self) -> Iter<T> {
        Iter {
            inner: self.to_vec().into_iter()
        }
    }

    /// Check whether two handles share the same storage.
    #[must_use]
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.items, &other.items)
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            items: Rc::clone(&self.items)
        }
    }
}

impl<T> fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.borrow().iter()).finish()
    }
}

impl<T> FromIterator<Shared<T>> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = Shared<T>>>(iter: I) -> Self {
        let collection = Self::new();
        for item in iter {
            collection.add(item);
        }
        collection
    }
}

impl<T> IntoIterator for &Collection<T> {
    type Item = Shared<T>;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Snapshot iterator over a [`Collection`].
pub struct Iter<T> {
    inner: std::vec::IntoIter<Shared<T>>
}

impl<T> Iterator for Iter<T> {
    type Item = Shared<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<T> {}
