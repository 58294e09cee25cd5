// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # accessor-derive
//!
//! One crate, all features. Re-exports:
//! - [`Accessors`] derive macro from `accessor-derive-impl`
//! - All types from `accessor-core` ([`Shared`], [`Collection`],
//!   [`Container`], [`InverseSide`], [`AccessorError`])
//!
//! Generated code names the runtime as `::accessor_core`, so add
//! `accessor-core` next to this crate in `Cargo.toml`.
//!
//! # Quick Start
//!
//! ```rust
//! use accessor_derive::Accessors;
//!
//! #[derive(Accessors, Default)]
//! pub struct Song {
//!     #[generate]
//!     title: String,
//!
//!     #[generate]
//!     #[column(default = "Unknown")]
//!     artist: Option<String>,
//!
//!     #[generate]
//!     tags: Vec<String>,
//! }
//!
//! fn main() {
//!     let mut song = Song::default();
//!     song.set_title("Heroes".to_string()).add_tag("glam".to_string());
//!
//!     assert_eq!(song.title(), "Heroes");
//!     assert_eq!(song.artist(), "Unknown");
//!     assert_eq!(song.tags(), &["glam".to_string()]);
//!
//!     song.set_artist(Some("Bowie".to_string()));
//!     assert_eq!(song.artist(), "Bowie");
//! }
//! ```
//!
//! # Bidirectional Associations
//!
//! Fields annotated with `#[relation(.., inversed_by = "..")]` get their
//! accessors on the shared handle, through the `<Name>Methods` trait. Every
//! mutation updates the inverse side as well.
//!
//! ```rust
//! use accessor_derive::{Accessors, Collection, Shared};
//!
//! #[derive(Accessors, Default)]
//! pub struct Song {
//!     #[relation(many_to_many, inversed_by = "songs")]
//!     genres: Collection<Genre>,
//! }
//!
//! #[derive(Accessors, Default)]
//! pub struct Genre {
//!     #[relation(many_to_many, mapped_by = "genres")]
//!     songs: Collection<Song>,
//! }
//!
//! fn main() {
//!     let song = Shared::new(Song::default());
//!     let rock = Shared::new(Genre::default());
//!
//!     song.add_genre(rock.clone()).add_genre(rock.clone());
//!     assert_eq!(song.genres().len(), 1);
//!     assert!(rock.songs().contains(&song));
//!
//!     song.remove_genre(&rock);
//!     assert!(rock.songs().is_empty());
//! }
//! ```
//!
//! # Arity
//!
//! Generated accessors take exactly the arguments they declare. Extra
//! arguments are rejected by the compiler:
//!
//! ```rust,compile_fail
//! use accessor_derive::Accessors;
//!
//! #[derive(Accessors, Default)]
//! pub struct Song {
//!     #[generate]
//!     title: String,
//! }
//!
//! fn main() {
//!     let song = Song::default();
//!     song.title(1);
//! }
//! ```
//!
//! ```rust,compile_fail
//! use accessor_derive::Accessors;
//!
//! #[derive(Accessors, Default)]
//! pub struct Song {
//!     #[generate]
//!     tags: Vec<String>,
//! }
//!
//! fn main() {
//!     let mut song = Song::default();
//!     song.add_tag("a".to_string(), "b".to_string());
//! }
//! ```
//!
//! ```rust,compile_fail
//! use accessor_derive::Accessors;
//!
//! #[derive(Accessors, Default)]
//! pub struct Song {
//!     #[generate]
//!     title: String,
//! }
//!
//! fn main() {
//!     let mut song = Song::default();
//!     song.set_title("Heroes".to_string(), "Low".to_string());
//! }
//! ```
//!
//! ```rust,compile_fail
//! use accessor_derive::Accessors;
//!
//! #[derive(Accessors, Default)]
//! pub struct Song {
//!     #[generate]
//!     tags: Vec<String>,
//! }
//!
//! fn main() {
//!     let mut song = Song::default();
//!     let tag = "glam".to_string();
//!     song.remove_tag(&tag, &tag);
//! }
//! ```

pub use accessor_core::*;
pub use accessor_derive_impl::Accessors;
