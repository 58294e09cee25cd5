// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `add_*` rendering.
//!
//! Insertion goes through `Container::insert_item`, so adding an element
//! that is already present leaves the collection unchanged. On a
//! bidirectional collection the owner is attached to the element's inverse
//! side only when the element was actually inserted. When that inverse side
//! is a single reference, the element leaves the collection of the owner it
//! pointed to before.

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
            quote! { fn #method(&self, item: #item) -> &Self },
            quote! {
                {
                    let inserted = ::accessor_core::Container::insert_item(
                        &mut ::accessor_core::Shared::borrow_mut(self).#field,
                        ::core::clone::Clone::clone(&item)
                    );
                    if inserted {
                        let displaced = ::accessor_core::InverseSide::attach(
                            &mut ::accessor_core::Shared::borrow_mut(&item).#inverse,
                            self
                        );
                        if let ::core::option::Option::Some(displaced) = displaced {
                            ::accessor_core::Container::remove_item(
                                &mut ::accessor_core::Shared::borrow_mut(&displaced).#field,
                                &item
                            );
                        }
                    }
                    self
                }
            }
        ),
        _ => (
            quote! { fn #method(&mut self, item: #item) -> &mut Self },
            quote! {
                {
                    ::accessor_core::Container::insert_item(&mut self.#field, item);
                    self
                }
            }
        )
    };

    let mut text = format!(
        "Adds an element to `{field}` unless it is already there.\n\nReturns the owner for chaining."
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

#[cfg(test)]
mod tests {
    use quote::quote;
    use syn::parse_quote;

    use crate::accessors::{
        facts::{extract_all, pipeline},
        parse::PropertyDecl,
        policy::{AccessorKind, specify},
        render::render_method,
        resolve::resolve
    };

    fn adder(tokens: proc_macro2::TokenStream) -> super::Method {
        let fields: syn::FieldsNamed = parse_quote!({ #tokens });
        let decl = PropertyDecl::from_field(&fields.named[0]).unwrap();
        let info = resolve(&decl, extract_all(&pipeline(), &decl.attrs)).unwrap();
        let specs = specify(&info).unwrap();
        let spec = specs
            .iter()
            .find(|spec| spec.kind == AccessorKind::Add)
            .unwrap();
        render_method(spec, &info)
    }

    fn compact(tokens: proc_macro2::TokenStream) -> String {
        tokens.to_string().replace(' ', "")
    }

    #[test]
    fn owned_add() {
        let method = adder(quote! { #[generate] tags: Vec<String> });
        assert_eq!(
            compact(method.signature),
            "fnadd_tag(&mutself,item:String)->&mutSelf"
        );
        assert_eq!(
            compact(method.body),
            "{::accessor_core::Container::insert_item(&mutself.tags,item);self}"
        );
    }

    #[test]
    fn shared_add_attaches_once() {
        let method = adder(quote! {
            #[relation(many_to_many, inversed_by = "songs")]
            genres: Collection<Genre>
        });
        assert_eq!(
            compact(method.signature),
            "fnadd_genre(&self,item:::accessor_core::Shared<Genre>)->&Self"
        );
        let body = compact(method.body);
        assert!(body.contains("letinserted="));
        assert!(body.contains("ifinserted{letdisplaced=::accessor_core::InverseSide::attach"));
        assert!(body.contains("borrow_mut(&item).songs"));
        assert!(method.doc.to_string().contains("Genre::songs"));
    }

    #[test]
    fn shared_add_takes_element_from_displaced_owner() {
        let method = adder(quote! {
            #[relation(one_to_many, mapped_by = "album")]
            tracks: Vec<Shared<Track>>
        });
        let body = compact(method.body);
        let attach = body.find("InverseSide::attach").unwrap();
        let release = body
            .find("Container::remove_item(&mut::accessor_core::Shared::borrow_mut(&displaced).tracks,&item)")
            .unwrap();
        assert!(attach < release);
    }

    #[test]
    fn explicit_singular() {
        let method = adder(quote! { #[generate(singular = "child")] children: Vec<String> });
        assert!(compact(method.signature).starts_with("fnadd_child("));
    }
}
