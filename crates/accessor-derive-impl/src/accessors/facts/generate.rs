// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[generate]` extraction.
//!
//! # Recognized Options
//!
//! - `#[generate]`: opt the field in with default access
//! - `get`, `set`, `add`, `remove`: `= "public" | "crate" | "private" |
//!   "none"` or `= true | false`; a bare key is `public`
//! - `singular = "child"`: noun for `add_*` / `remove_*`
//! - `type = i64`: argument type of the setter
//! - `collection`: treat the field as a collection
//! - `skip`: refuse generation

use syn::{Attribute, Meta, parse::ParseStream};

use super::{
    Access, FactExtractor, PropertyFact, lenient, parse_flag, parse_string, parse_type, skip_value
};

/// Extractor for `#[generate(...)]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateExtractor;

/// Parse an access value. A bare key is `public`; an unrecognized string
/// is no opinion.
fn parse_access(input: ParseStream<'_>) -> syn::Result<Option<Access>> {
    if !input.peek(syn::Token![=]) {
        return Ok(Some(Access::Public));
    }
    let _: syn::Token![=] = input.parse()?;
    if input.peek(syn::LitBool) {
        let value: syn::LitBool = input.parse()?;
        return Ok(Some(Access::from_bool(value.value)));
    }
    let value: syn::LitStr = input.parse()?;
    Ok(Access::parse(&value.value()))
}

impl FactExtractor for GenerateExtractor {
    fn extract(&self, attrs: &[Attribute]) -> PropertyFact {
        let mut fact = PropertyFact::default();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("generate")) {
            fact.generate = Some(true);

            let Meta::List(meta_list) = &attr.meta else {
                continue;
            };
            let _ = meta_list.parse_nested_meta(|meta| {
                let input = meta.input;
                if meta.path.is_ident("get") {
                    fact.get = lenient(input, parse_access)?.flatten().or(fact.get);
                } else if meta.path.is_ident("set") {
                    fact.set = lenient(input, parse_access)?.flatten().or(fact.set);
                } else if meta.path.is_ident("add") {
                    fact.add = lenient(input, parse_access)?.flatten().or(fact.add);
                } else if meta.path.is_ident("remove") {
                    fact.remove = lenient(input, parse_access)?.flatten().or(fact.remove);
                } else if meta.path.is_ident("singular") {
                    if let Some(value) = lenient(input, parse_string)? {
                        fact.singular = Some(value.value());
                    }
                } else if meta.path.is_ident("type") {
                    if let Some(ty) = lenient(input, parse_type)? {
                        fact.type_override = Some(ty);
                    }
                } else if meta.path.is_ident("collection") {
                    fact.is_collection = lenient(input, parse_flag)?.or(fact.is_collection);
                } else if meta.path.is_ident("skip") {
                    if let Some(skip) = lenient(input, parse_flag)? {
                        fact.generate = Some(!skip);
                    }
                } else {
                    skip_value(input)?;
                }
                Ok(())
            });
        }

        fact
    }
}
