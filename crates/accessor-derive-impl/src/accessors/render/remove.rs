// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `remove_*` rendering.
//!
//! Removing an element that is not present is a no-op. On a bidirectional
//! collection the owner is detached from the element's inverse side only
//! when the element was present.

use proc_macro2::TokenStream;
use quote::quote;

use super::{Method, doc_attrs, sync_note};
use crate::accessors::{
    policy::{AccessorSpec, Contract, Receiver},
    resolve::PropertyInfo
};

pub fn render(spec: &AccessorSpec, info: &PropertyInfo) -> Method {
    let method = &spec.method;
    let field = &info.ident;
    let Contract::Member { item, inverse } = &spec.contract else {
        return Method {
            doc: TokenStream::new(),
            signature: TokenStream::new(),
            body: TokenStream::new()
        };
    };

    let (signature, body) = match (spec.receiver, inverse) {
        (Receiver::Shared, Some(inverse)) => (
            quote! { fn #method(&self, item: &#item) -> &Self },
            quote! {
                {
                    let removed = ::accessor_core::Container::remove_item(
                        &mut ::accessor_core::Shared::borrow_mut(self).#field,
                        item
                    );
                    if removed {
                        ::accessor_core::InverseSide::detach(
                            &mut ::accessor_core::Shared::borrow_mut(item).#inverse,
                            self
                        );
                    }
                    self
                }
            }
        ),
        _ => (
            quote! { fn #method(&mut self, item: &#item) -> &mut Self },
            quote! {
                {
                    ::accessor_core::Container::remove_item(&mut self.#field, item);
                    self
                }
            }
        )
    };

    let mut text = format!(
        "Removes an element from `{field}` if it is there.\n\nReturns the owner for chaining."
    );
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
