// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runtime types for accessor-derive.
//!
//! Code generated by `#[derive(Accessors)]` refers to this crate as
//! `::accessor_core`. It can also be used standalone when writing accessors
//! by hand.
//!
//! # Overview
//!
//! - [`Shared`]: identity-bearing handle to an entity (`Rc<RefCell<T>>`)
//! - [`Collection`]: shared, insertion-ordered set of [`Shared`] handles
//! - [`Container`]: de-duplicating insert/remove over collection families
//! - [`InverseSide`]: attach/detach an owner on the inverse side of a
//!   bidirectional association
//! - [`AccessorError`]: errors returned by coercing setters
//! - [`prelude`]: convenient re-exports
//!
//! # Example
//!
//! ```rust
//! use accessor_core::{Collection, Container, Shared};
//!
//! struct Genre;
//!
//! let rock = Shared::new(Genre);
//! let mut genres: Collection<Genre> = Collection::new();
//!
//! assert!(genres.insert_item(rock.clone()));
//! assert!(!genres.insert_item(rock.clone()));
//! assert_eq!(genres.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod collection;
mod container;
mod error;
mod inverse;
pub mod prelude;
mod shared;

pub use collection::{Collection, Iter};
pub use container::Container;
pub use error::AccessorError;
pub use inverse::InverseSide;
pub use shared::Shared;
