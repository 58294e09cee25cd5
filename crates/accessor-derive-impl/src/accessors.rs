// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Accessors derive macro implementation.
//!
//! # Architecture
//!
//! ```text
//! accessors/
//! ├── parse.rs        Class facts (ClassDef, PropertyDecl)
//! ├── facts.rs        Annotation fact extractors
//! ├── resolve.rs      PropertyFact + declaration → PropertyInfo
//! ├── policy.rs       PropertyInfo → ordered AccessorSpecs
//! ├── imports.rs      `use super::..` list of the generated module
//! └── render.rs       AccessorSpecs → tokens
//! ```
//!
//! # Flow
//!
//! 1. Build [`ClassDef`] from the derive input. Inputs that are not structs
//!    with named fields generate nothing.
//! 2. For each field in declaration order: extract facts, resolve, specify.
//! 3. Collect imports for fields that generate something.
//! 4. If no field generates anything, emit nothing. Otherwise render the
//!    module.

pub mod facts;
mod imports;
pub mod parse;
mod policy;
mod render;
mod resolve;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

use self::{
    imports::Imports,
    parse::{ClassDef, ClassError},
    policy::AccessorSpec,
    resolve::PropertyInfo
};

/// One field with the accessors to generate for it.
#[derive(Debug)]
pub struct PropertyUnit {
    /// Resolved field information.
    pub info: PropertyInfo,

    /// Accessors in order. Empty for fields that do not participate.
    pub specs: Vec<AccessorSpec>
}

/// Everything needed to render one struct's accessors.
#[derive(Debug)]
pub struct GeneratedUnit<'a> {
    /// The struct.
    pub class: &'a ClassDef,

    /// Every field in declaration order.
    pub properties: Vec<PropertyUnit>,

    /// Sorted, unique names imported from the defining module.
    pub imports: Vec<String>
}

/// Main entry point for the Accessors derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input).into()
}

/// Expand a derive input to tokens.
fn expand(input: &DeriveInput) -> proc_macro2::TokenStream {
    let class = match ClassDef::from_derive_input(input) {
        Ok(class) => class,
        Err(ClassError::NotFound) => return proc_macro2::TokenStream::new(),
        Err(ClassError::Invalid(err)) => return err.write_errors()
    };

    match generate(&class) {
        Ok(Some(unit)) => render::render_module(&unit),
        Ok(None) => proc_macro2::TokenStream::new(),
        Err(err) => err.write_errors()
    }
}

/// Resolve every field of `class` and decide what to generate.
///
/// Returns `Ok(None)` when no field generates an accessor.
///
/// # Errors
///
/// Accumulated errors of all fields: declarations the resolver rejects and
/// bidirectional properties on generic structs.
pub fn generate(class: &ClassDef) -> darling::Result<Option<GeneratedUnit<'_>>> {
    let extractors = facts::pipeline();
    let mut errors = darling::Error::accumulator();
    let mut imports = Imports::new(&class.ident, &class.generics);
    let mut properties = Vec::with_capacity(class.properties.len());

    for decl in &class.properties {
        let fact = facts::extract_all(&extractors, &decl.attrs);
        let Some(info) = errors.handle(resolve::resolve(decl, fact)) else {
            continue;
        };
        let Some(specs) = errors.handle(policy::specify(&info)) else {
            continue;
        };
        if !specs.is_empty() {
            if info.is_bidirectional() && class.is_generic() {
                errors.push(
                    darling::Error::custom(
                        "bidirectional accessors are not supported on generic structs"
                    )
                    .with_span(&decl.ident)
                );
            }
            imports.add_type(&info.declared);
            imports.add_type(&info.effective);
        }
        properties.push(PropertyUnit { info, specs });
    }

    errors.finish()?;

    if properties.iter().all(|property| property.specs.is_empty()) {
        return Ok(None);
    }

    Ok(Some(GeneratedUnit {
        class,
        properties,
        imports: imports.finish()
    }))
}
