// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # accessor-derive-impl
//!
//! Procedural macro behind `accessor-derive`. Depend on `accessor-derive`
//! instead; it re-exports the derive together with the runtime types the
//! generated code uses.
//!
//! # Attribute Quick Reference
//!
//! ## Struct-Level `#[accessors(...)]`
//!
//! ```rust,ignore
//! #[derive(Accessors)]
//! #[accessors(
//!     module = "song_api",      // Optional: generated module (default: "<snake>_accessors")
//!     suffix = "Methods",       // Optional: bidirectional trait suffix (default: "Methods")
//!     default,                  // Optional: also generate `impl Default`
//!     generated_by = "build"    // Optional: generator named in the marker doc
//! )]
//! pub struct Song { /* ... */ }
//! ```
//!
//! ## Field-Level Attributes
//!
//! ```rust,ignore
//! pub struct Song {
//!     #[id]                                   // Generated by storage: no setter
//!     #[generate]
//!     id: u64,
//!
//!     #[generate(set = "private")]            // Getter public, setter pub(super)
//!     title: String,
//!
//!     #[generate]
//!     #[column(default = "Unknown")]          // Getter falls back to the literal
//!     artist: Option<String>,
//!
//!     #[generate]
//!     #[column(type = i64)]                   // Setter takes i64, fails when out of range
//!     rating: u8,
//!
//!     #[generate(singular = "tag")]           // add_tag / remove_tag
//!     tags: Vec<String>,
//!
//!     #[relation(many_to_one, inversed_by = "songs")]
//!     album: Option<Shared<Album>>,           // Keeps Album::songs in sync
//!
//!     #[relation(many_to_many, inversed_by = "songs")]
//!     genres: Collection<Genre>,              // Keeps Genre::songs in sync
//! }
//! ```
//!
//! # Generated Code Overview
//!
//! | Field | Getter | Mutators |
//! |-------|--------|----------|
//! | `T` | `fn f(&self) -> &T` | `fn set_f(&mut self, T) -> &mut Self` |
//! | `Option<T>` | `fn f(&self) -> Option<&T>` | `fn set_f(&mut self, Option<T>) -> &mut Self` |
//! | `Option<T>` + literal default | `fn f(&self) -> T` | `fn set_f(&mut self, Option<T>) -> &mut Self` |
//! | `Vec<T>`, `HashSet<T>`, .. | `fn f(&self) -> &Vec<T>` | `add_x(&mut self, T)`, `remove_x(&mut self, &T)` |
//! | bidirectional | on `Shared<Self>` through the `<Name>Methods` trait | keep the inverse side in sync |
//! | bidirectional `Vec<Shared<T>>`, .. | `fn f(&self) -> Ref<'_, Vec<Shared<T>>>` | keep the inverse side in sync |
//!
//! Fields without a recognized annotation get nothing. A struct where no
//! field gets anything expands to nothing.

mod accessors;
mod utils;

use proc_macro::TokenStream;

/// Derive macro generating accessor methods from field annotations.
///
/// # Overview
///
/// Each field is inspected for `#[generate(..)]`, `#[column(..)]`,
/// `#[relation(..)]`, `#[id]` and `#[auto]`. The facts found are merged and
/// decide which of the getter, setter, `add_*` and `remove_*` methods
/// exist, their visibility and their exact signatures.
///
/// Accessors are emitted into a child module of the struct's module:
///
/// - plain accessors as an inherent `impl` on the struct;
/// - accessors of bidirectional associations as the `<Name>Methods` trait,
///   implemented for `accessor_core::Shared<Name>` and re-exported with the
///   struct's visibility.
///
/// Types named in generated signatures are imported from the parent module
/// with `use super::Name;`. Types must therefore be in scope where the
/// struct is declared, or written as multi-segment paths.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `#[generate]` | Generate the default accessors for the field. |
/// | `#[generate(get = "..", set = "..", add = "..", remove = "..")]` | Access per accessor: `"public"`, `"protected"`/`"crate"`, `"private"`, `"none"` or a boolean. |
/// | `#[generate(skip)]` | Generate nothing for the field. |
/// | `#[generate(singular = "..")]` | Noun used by `add_*` / `remove_*`. |
/// | `#[generate(collection)]` | Treat the field as a collection. |
/// | `#[generate(type = T)]` / `#[column(type = T)]` | Setter argument type, converted with `TryFrom`. |
/// | `#[column(nullable)]` | Setter accepts `None`. Defaults to `true` for `Option` fields. |
/// | `#[column(default = lit)]` | Getter returns the literal while the field is `None`. |
/// | `#[id]`, `#[auto]`, `#[column(generated)]` | Value comes from storage: no setter. |
/// | `#[relation(kind, inversed_by = "f")]` | Bidirectional association kept in sync with `f` on the related type. `mapped_by` is an alias. |
/// | `#[relation(kind, target = T)]` | Related type when it cannot be read from the field type. |
///
/// `kind` is one of `one_to_one`, `one_to_many`, `many_to_one`,
/// `many_to_many`.
///
/// # Examples
///
/// ```rust,ignore
/// use accessor_derive::{Accessors, Collection, Shared};
///
/// #[derive(Accessors, Default)]
/// pub struct Song {
///     #[generate]
///     title: String,
///
///     #[relation(many_to_many, inversed_by = "songs")]
///     genres: Collection<Genre>,
/// }
///
/// #[derive(Accessors, Default)]
/// pub struct Genre {
///     #[relation(many_to_many, mapped_by = "genres")]
///     songs: Collection<Song>,
/// }
///
/// let song = Shared::new(Song::default());
/// let rock = Shared::new(Genre::default());
/// song.add_genre(rock.clone());
/// assert!(rock.songs().contains(&song));
/// ```
///
/// # Errors
///
/// Compile errors are reported, all at once, for:
///
/// - a malformed `#[accessors(..)]`;
/// - a bidirectional collection whose elements are not `Shared<T>`;
/// - a bidirectional single value not declared as `Option<Shared<T>>`;
/// - a bidirectional association on a generic struct.
#[proc_macro_derive(Accessors, attributes(accessors, generate, column, relation, id, auto))]
pub fn derive_accessors(input: TokenStream) -> TokenStream {
    accessors::derive(input)
}
