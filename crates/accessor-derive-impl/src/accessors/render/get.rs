// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Getter rendering.
//!
//! | Contract | Returns |
//! |----------|---------|
//! | `Reference` | `&T`, or `&C` for a collection (the live container) |
//! | `OptionalReference` | `Option<&T>` |
//! | `ValueOr(lit)` | `T`, the literal while unset |
//! | `Snapshot` | clone of the stored value; for `Collection<T>` a handle to the same storage |
//! | `Borrowed` | `Ref<'_, C>` into the shared handle, the live container |

use quote::quote;
use syn::Lit;

use super::{Method, doc_attrs, sync_note};
use crate::accessors::{
    policy::{AccessorSpec, Contract},
    resolve::PropertyInfo
};

/// Literal default converted to the value type.
pub fn literal_value(lit: &Lit, value: &syn::Type) -> proc_macro2::TokenStream {
    match lit {
        Lit::Str(_) => quote! { <#value as ::core::convert::From<&'static str>>::from(#lit) },
        _ => quote! { #lit }
    }
}

pub fn render(spec: &AccessorSpec, info: &PropertyInfo) -> Method {
    let method = &spec.method;
    let field = &info.ident;
    let declared = &info.declared;
    let value = &info.value;

    let (ret, body) = match &spec.contract {
        Contract::OptionalReference => (
            quote! { ::core::option::Option<&#value> },
            quote! { self.#field.as_ref() }
        ),
        Contract::ValueOr(lit) => {
            let fallback = literal_value(lit, value);
            (
                quote! { #value },
                quote! {
                    match &self.#field {
                        ::core::option::Option::Some(value) => ::core::clone::Clone::clone(value),
                        ::core::option::Option::None => #fallback
                    }
                }
            )
        }
        Contract::Snapshot => (
            quote! { #declared },
            quote! { ::core::clone::Clone::clone(&::accessor_core::Shared::borrow(self).#field) }
        ),
        Contract::Borrowed => (
            quote! { ::core::cell::Ref<'_, #declared> },
            quote! { ::core::cell::Ref::map(::accessor_core::Shared::borrow(self), |this| &this.#field) }
        ),
        _ => (quote! { &#declared }, quote! { &self.#field })
    };

    let mut text = info
        .doc
        .clone()
        .unwrap_or_else(|| format!("Returns `{}`.", spec.method));
    if let Contract::ValueOr(lit) = &spec.contract {
        text.push_str(&format!("\n\nDefaults to `{}` while unset.", quote!(#lit)));
    }
    if info.container.is_some_and(|family| !family.is_ordered()) {
        text.push_str("\n\nIteration order is not insertion order.");
    }
    if matches!(spec.contract, Contract::Borrowed) {
        text.push_str(
            "\n\nThe handle stays borrowed while the returned guard lives; drop it before \
             calling a mutator."
        );
    }
    if let Some(note) = sync_note(info) {
        text.push_str("\n\n");
        text.push_str(&note);
    }
    let doc = doc_attrs(&text);

    Method {
        doc,
        signature: quote! { fn #method(&self) -> #ret },
        body: quote! { { #body } }
    }
}
