// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Inverse side of bidirectional associations.
//!
//! When `song.add_genre(&rock)` runs, the generated code also has to record
//! `song` on `rock.songs`. The generated mutator does not need to know
//! whether `rock.songs` is a collection or a single reference: it calls
//! [`InverseSide::attach`] / [`InverseSide::detach`] on that field.
//!
//! Both operations are idempotent, which keeps the owning side free to
//! repeat them (a setter re-assigning the same value detaches and attaches
//! again without creating duplicates).
//!
//! A single reference holds one owner at a time. Attaching a second owner
//! displaces the first, and [`InverseSide::attach`] hands the displaced
//! owner back so the caller can drop the related object from that owner's
//! side too.

use crate::{Collection, Shared};

/// Field holding the inverse end of a bidirectional association.
pub trait InverseSide<T> {
    /// Record `owner` on this side.
    ///
    /// Returns the owner this side held before, when recording `owner`
    /// replaced it.
    fn attach(&mut self, owner: &Shared<T>) -> Option<Shared<T>>;

    /// Forget `owner` on this side, if it is recorded.
    fn detach(&mut self, owner: &Shared<T>);
}

impl<T> InverseSide<T> for Collection<T> {
    fn attach(&mut self, owner: &Shared<T>) -> Option<Shared<T>> {
        log::trace!("attach {owner:?} to inverse collection");
        self.add(owner.clone());
        None
    }

    fn detach(&mut self, owner: &Shared<T>) {
        log::trace!("detach {owner:?} from inverse collection");
        self.remove(owner);
    }
}

impl<T> InverseSide<T> for Vec<Shared<T>> {
    fn attach(&mut self, owner: &Shared<T>) -> Option<Shared<T>> {
        if !self.iter().any(|existing| existing.ptr_eq(owner)) {
            log::trace!("attach {owner:?} to inverse list");
            self.push(owner.clone());
        }
        None
    }

    fn detach(&mut self, owner: &Shared<T>) {
        log::trace!("detach {owner:?} from inverse list");
        self.retain(|existing| !existing.ptr_eq(owner));
    }
}

impl<T> InverseSide<T> for Option<Shared<T>> {
    fn attach(&mut self, owner: &Shared<T>) -> Option<Shared<T>> {
        log::trace!("attach {owner:?} to inverse reference");
        let previous = self.replace(owner.clone())?;
        if previous.ptr_eq(owner) {
            return None;
        }
        log::trace!("{previous:?} displaced from inverse reference");
        Some(previous)
    }

    fn detach(&mut self, owner: &Shared<T>) {
        // Only clear the reference if it still points at this owner; another
        // owner may have taken it over in the meantime.
        if self.as_ref().is_some_and(|current| current.ptr_eq(owner)) {
            log::trace!("detach {owner:?} from inverse reference");
            *self = None;
        }
    }
}
