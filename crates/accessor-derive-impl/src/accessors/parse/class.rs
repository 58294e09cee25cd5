// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Struct-level definition.

mod attrs;

use attrs::ClassAttrs;
use darling::FromDeriveInput;
use syn::{DeriveInput, Generics, Ident, Visibility};

use super::PropertyDecl;
use crate::utils::{marker, naming};

/// Resolved struct-level configuration.
#[derive(Debug, Clone)]
pub struct ClassConfig {
    /// Name of the generated module.
    pub module: Ident,

    /// Name of the trait holding bidirectional accessors.
    pub trait_ident: Ident,

    /// Generate `impl Default`.
    pub default_impl: bool,

    /// Generator identity for the marker doc.
    pub generator: String
}

/// Why a [`ClassDef`] could not be built.
#[derive(Debug)]
pub enum ClassError {
    /// Input is not a struct with named fields.
    NotFound,

    /// `#[accessors(...)]` is malformed.
    Invalid(darling::Error)
}

/// Read-only facts about the struct being derived.
#[derive(Debug)]
pub struct ClassDef {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct visibility, used for the trait re-export.
    pub vis: Visibility,

    /// Struct generics.
    pub generics: Generics,

    /// Fields in declaration order.
    pub properties: Vec<PropertyDecl>,

    /// Struct-level configuration.
    pub config: ClassConfig
}

impl ClassDef {
    /// Build class facts from a derive input.
    ///
    /// # Errors
    ///
    /// - [`ClassError::NotFound`] for enums, unions, tuple and unit structs
    /// - [`ClassError::Invalid`] for malformed `#[accessors(...)]`
    pub fn from_derive_input(input: &DeriveInput) -> Result<Self, ClassError> {
        let syn::Data::Struct(data) = &input.data else {
            return Err(ClassError::NotFound);
        };
        let syn::Fields::Named(named) = &data.fields else {
            return Err(ClassError::NotFound);
        };

        let attrs = ClassAttrs::from_derive_input(input).map_err(ClassError::Invalid)?;
        let module = match &attrs.module {
            Some(name) => syn::parse_str::<Ident>(name).map_err(|err| {
                ClassError::Invalid(darling::Error::from(err).with_span(&input.ident))
            })?,
            None => naming::module_ident(&attrs.ident)
        };
        let trait_ident = naming::trait_ident(&attrs.ident, &attrs.suffix).map_err(|err| {
            ClassError::Invalid(darling::Error::from(err).with_span(&input.ident))
        })?;
        let config = ClassConfig {
            module,
            trait_ident,
            default_impl: attrs.default,
            generator: attrs
                .generated_by
                .clone()
                .unwrap_or_else(marker::default_generator)
        };

        Ok(Self {
            properties: named.named.iter().filter_map(PropertyDecl::from_field).collect(),
            ident: attrs.ident,
            vis: attrs.vis,
            generics: attrs.generics,
            config
        })
    }

    /// Whether the struct has generic parameters.
    #[must_use]
    pub fn is_generic(&self) -> bool {
        !self.generics.params.is_empty()
    }
}
