// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field declaration.

use syn::{Attribute, Field, Ident, Type};

use crate::utils::docs::extract_doc_comments;

/// One declared field, with its attributes left uninterpreted.
#[derive(Debug, Clone)]
pub struct PropertyDecl {
    /// Field identifier.
    pub ident: Ident,

    /// Declared type.
    pub ty: Type,

    /// Outer attributes as written.
    pub attrs: Vec<Attribute>,

    /// Documentation comment, carried to the getter.
    pub doc: Option<String>
}

impl PropertyDecl {
    /// Build from a named field. Returns `None` for unnamed fields.
    pub fn from_field(field: &Field) -> Option<Self> {
        Some(Self {
            ident: field.ident.clone()?,
            ty: field.ty.clone(),
            attrs: field.attrs.clone(),
            doc: extract_doc_comments(&field.attrs)
        })
    }
}
