// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! De-duplicating insert/remove over collection families.
//!
//! Generated `add_*` and `remove_*` methods go through this trait, so the
//! same accessor shape works for every recognized container:
//!
//! | Container | Membership | Order |
//! |-----------|------------|-------|
//! | [`Collection<T>`](crate::Collection) | identity | insertion |
//! | `Vec<T>`, `VecDeque<T>` | `PartialEq` | insertion |
//! | `HashSet<T, S>` | `Hash + Eq` | none |
//! | `BTreeSet<T>` | `Ord` | sorted |
//!
//! Implement it for a custom type and mark the field with
//! `#[generate(collection)]` to get `add_*`/`remove_*` accessors for it.

use std::{
    collections::{BTreeSet, HashSet, VecDeque},
    hash::{BuildHasher, Hash}
};

use crate::{Collection, Shared};

/// Container with set-like insert and remove.
pub trait Container {
    /// Element type accepted by `insert_item`.
    type Item;

    /// Check if `item` is already an element.
    fn contains_item(&self, item: &Self::Item) -> bool;

    /// Insert `item` unless already present.
    ///
    /// Returns `true` when the container changed.
    fn insert_item(&mut self, item: Self::Item) -> bool;

    /// Remove `item` if present.
    ///
    /// Returns `true` when the container changed.
    fn remove_item(&mut self, item: &Self::Item) -> bool;

    /// Number of elements.
    fn item_count(&self) -> usize;
}

impl<T> Container for Collection<T> {
    type Item = Shared<T>;

    fn contains_item(&self, item: &Self::Item) -> bool {
        self.contains(item)
    }

    fn insert_item(&mut self, item: Self::Item) -> bool {
        self.add(item)
    }

    fn remove_item(&mut self, item: &Self::Item) -> bool {
        self.remove(item)
    }

    fn item_count(&self) -> usize {
        self.len()
    }
}

impl<T: PartialEq> Container for Vec<T> {
    type Item = T;

    fn contains_item(&self, item: &T) -> bool {
        self.contains(item)
    }

    fn insert_item(&mut self, item: T) -> bool {
        if self.contains(&item) {
            return false;
        }
        self.push(item);
        true
    }

    fn remove_item(&mut self, item: &T) -> bool {
        match self.iter().position(|existing| existing == item) {
            Some(index) => {
                self.remove(index);
                true
            }
            None => false
        }
    }

    fn item_count(&self) -> usize {
        self.len()
    }
}

impl<T: PartialEq> Container for VecDeque<T> {
    type Item = T;

    fn contains_item(&self, item: &T) -> bool {
        self.contains(item)
    }

    fn insert_item(&mut self, item: T) -> bool {
        if self.contains(&item) {
            return false;
        }
        self.push_back(item);
        true
    }

    fn remove_item(&mut self, item: &T) -> bool {
        match self.iter().position(|existing| existing == item) {
            Some(index) => self.remove(index).is_some(),
            None => false
        }
    }

    fn item_count(&self) -> usize {
        self.len()
    }
}

impl<T: Hash + Eq, S: BuildHasher> Container for HashSet<T, S> {
    type Item = T;

    fn contains_item(&self, item: &T) -> bool {
        self.contains(item)
    }

    fn insert_item(&mut self, item: T) -> bool {
        self.insert(item)
    }

    fn remove_item(&mut self, item: &T) -> bool {
        self.remove(item)
    }

    fn item_count(&self) -> usize {
        self.len()
    }
}

impl<T: Ord> Container for BTreeSet<T> {
    type Item = T;

    fn contains_item(&self, item: &T) -> bool {
        self.contains(item)
    }

    fn insert_item(&mut self, item: T) -> bool {
        self.insert(item)
    }

    fn remove_item(&mut self, item: &T) -> bool {
        self.remove(item)
    }

    fn item_count(&self) -> usize {
        self.len()
    }
}
