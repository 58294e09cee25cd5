// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Setter rendering.
//!
//! # Plain setters
//!
//! ```rust,ignore
//! pub fn set_title(&mut self, value: String) -> &mut Self
//! pub fn set_artist(&mut self, value: Option<String>) -> &mut Self
//! pub fn set_count(&mut self, value: u64) -> Result<&mut Self, AccessorError>
//! ```
//!
//! A setter whose argument type differs from the stored type converts with
//! `TryFrom` and leaves the field untouched when the value does not fit.
//!
//! # Bidirectional setters
//!
//! ```rust,ignore
//! fn set_album(&self, value: Option<Shared<Album>>) -> &Self
//! ```
//!
//! Detaches the owner from the previous album's inverse side, stores the
//! new value, then attaches the owner to the new album's inverse side. An
//! owner displaced from a single-reference inverse side has its own
//! reference cleared.

use proc_macro2::TokenStream;
use quote::quote;
use syn::Type;

use super::{Method, doc_attrs, sync_note};
use crate::accessors::{
    policy::{AccessorSpec, Contract},
    resolve::{IntegerWidth, PropertyInfo}
};

pub fn render(spec: &AccessorSpec, info: &PropertyInfo) -> Method {
    let method = &spec.method;
    let field = &info.ident;

    let (signature, body) = match &spec.contract {
        Contract::Relink { inverse } => relink(method, info, inverse),
        Contract::Assign {
            nullable,
            wrap_some,
            coerce_from
        } => assign(method, info, *nullable, *wrap_some, coerce_from.as_ref()),
        _ => (TokenStream::new(), TokenStream::new())
    };

    let mut text = format!("Sets `{field}`.");
    if let Contract::Assign {
        coerce_from: Some(_),
        ..
    } = &spec.contract
    {
        let value = &info.value;
        text.push_str(&format!(
            "\n\n# Errors\n\n`AccessorError::InvalidArgument` when the value does not fit \
             into `{}`; the field is left unchanged.",
            quote!(#value)
        ));
        match info.integer {
            Some(IntegerWidth::Word { .. }) => {
                text.push_str(" Its range depends on the target pointer width.");
            }
            Some(IntegerWidth::Fixed { bits, signed }) => {
                let sign = if signed { "signed" } else { "unsigned" };
                text.push_str(&format!(" It is a {bits}-bit {sign} integer."));
            }
            None => {}
        }
    }
    if let Some(note) = sync_note(info) {
        text.push_str("\n\n");
        text.push_str(&note);
    }

    Method {
        doc: doc_attrs(&text),
        signature,
        body
    }
}

fn assign(
    method: &syn::Ident,
    info: &PropertyInfo,
    nullable: bool,
    wrap_some: bool,
    coerce_from: Option<&Type>
) -> (TokenStream, TokenStream) {
    let field = &info.ident;
    let value = &info.value;
    let argument = coerce_from.unwrap_or(value);
    let param = if nullable {
        quote! { ::core::option::Option<#argument> }
    } else {
        quote! { #argument }
    };
    let store = if wrap_some {
        quote! { self.#field = ::core::option::Option::Some(value); }
    } else {
        quote! { self.#field = value; }
    };

    let Some(source) = coerce_from else {
        return (
            quote! { fn #method(&mut self, value: #param) -> &mut Self },
            quote! { { #store self } }
        );
    };

    let method_name = method.to_string();
    let expected = quote!(#value).to_string().replace(' ', "");
    let convert = quote! {
        <#value as ::core::convert::TryFrom<#source>>::try_from(value).map_err(|_| {
            ::accessor_core::AccessorError::invalid_argument(#method_name, #expected)
        })?
    };
    let conversion = if nullable {
        quote! {
            let value = match value {
                ::core::option::Option::Some(value) => ::core::option::Option::Some(#convert),
                ::core::option::Option::None => ::core::option::Option::None
            };
        }
    } else {
        quote! { let value = #convert; }
    };

    (
        quote! {
            fn #method(&mut self, value: #param)
                -> ::core::result::Result<&mut Self, ::accessor_core::AccessorError>
        },
        quote! {
            {
                #conversion
                #store
                ::core::result::Result::Ok(self)
            }
        }
    )
}

fn relink(method: &syn::Ident, info: &PropertyInfo, inverse: &syn::Ident) -> (TokenStream, TokenStream) {
    let field = &info.ident;
    let declared = &info.declared;
    (
        quote! { fn #method(&self, value: #declared) -> &Self },
        quote! {
            {
                let previous = ::core::mem::replace(
                    &mut ::accessor_core::Shared::borrow_mut(self).#field,
                    ::core::clone::Clone::clone(&value)
                );
                if let ::core::option::Option::Some(previous) = previous {
                    ::accessor_core::InverseSide::detach(
                        &mut ::accessor_core::Shared::borrow_mut(&previous).#inverse,
                        self
                    );
                }
                if let ::core::option::Option::Some(next) = value {
                    let displaced = ::accessor_core::InverseSide::attach(
                        &mut ::accessor_core::Shared::borrow_mut(&next).#inverse,
                        self
                    );
                    if let ::core::option::Option::Some(displaced) = displaced {
                        ::accessor_core::InverseSide::detach(
                            &mut ::accessor_core::Shared::borrow_mut(&displaced).#field,
                            &next
                        );
                    }
                }
                self
            }
        }
    )
}
