// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Class facts for the Accessors derive macro.
//!
//! This module turns a `syn::DeriveInput` into the read-only facts the
//! generator works from: the struct identity, its struct-level
//! configuration and its fields in declaration order. Field attributes are
//! kept raw here; interpreting them is the job of the fact extractors in
//! [`facts`](super::facts).
//!
//! # Parsing Strategy
//!
//! Struct-level `#[accessors(...)]` is parsed with darling's
//! `FromDeriveInput`. Inputs that are not structs with named fields are
//! reported as [`ClassError::NotFound`]: there is nothing to generate for
//! them, which is not an error.
//!
//! # Data Structures
//!
//! ```text
//! ClassDef
//! ├── ident: Ident            (struct name, e.g. "Song")
//! ├── vis: Visibility
//! ├── generics: Generics
//! ├── config: ClassConfig     (#[accessors(...)])
//! │   ├── module: Ident       (default: song_accessors)
//! │   ├── suffix: String      (default: "Methods")
//! │   ├── default_impl: bool
//! │   └── generator: String
//! └── properties: Vec<PropertyDecl>
//!     └── PropertyDecl
//!         ├── ident: Ident
//!         ├── ty: Type
//!         ├── attrs: Vec<Attribute>
//!         └── doc: Option<String>
//! ```

mod class;
mod property;

pub use class::{ClassDef, ClassError};
pub use property::PropertyDecl;
