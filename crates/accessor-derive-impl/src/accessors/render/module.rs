// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generated module rendering.
//!
//! # Generated Code
//!
//! ```rust,ignore
//! #[doc = "Accessors for [`Song`], generated by accessor-derive 0.1.0. Do not edit."]
//! #[allow(unused_imports)]
//! mod song_accessors {
//!     use super::Collection;
//!     use super::Genre;
//!     use super::Song;
//!
//!     impl Song {
//!         pub fn title(&self) -> &String { .. }
//!         pub fn set_title(&mut self, value: String) -> &mut Self { .. }
//!     }
//!
//!     pub trait SongMethods {
//!         fn genres(&self) -> Collection<Genre>;
//!         fn add_genre(&self, item: ::accessor_core::Shared<Genre>) -> &Self;
//!         fn remove_genre(&self, item: &::accessor_core::Shared<Genre>) -> &Self;
//!     }
//!
//!     impl SongMethods for ::accessor_core::Shared<Song> { .. }
//! }
//! pub use song_accessors::SongMethods;
//! ```
//!
//! The trait and its re-export are only emitted when the struct has
//! bidirectional properties. The re-export takes the struct's visibility.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::{get::literal_value, render_method};
use crate::{
    accessors::{GeneratedUnit, facts::DefaultValue, policy::Receiver, resolve::PropertyInfo},
    utils::marker
};

/// Render the generated module and the trait re-export.
pub fn render_module(unit: &GeneratedUnit<'_>) -> TokenStream {
    let class = unit.class;
    let ident = &class.ident;
    let vis = &class.vis;
    let module = &class.config.module;
    let trait_ident = &class.config.trait_ident;
    let (impl_generics, ty_generics, where_clause) = class.generics.split_for_impl();

    let marker = marker::generated(&class.config.generator, ident);
    let imports = unit.imports.iter().map(|name| {
        let name = format_ident!("{}", name);
        quote! { use super::#name; }
    });

    let mut inherent = Vec::new();
    let mut declarations = Vec::new();
    let mut definitions = Vec::new();
    for property in &unit.properties {
        for spec in &property.specs {
            let method = render_method(spec, &property.info);
            match spec.receiver {
                Receiver::Owned => inherent.push(method.inherent(spec.access)),
                Receiver::Shared => {
                    declarations.push(method.declaration());
                    definitions.push(method.definition());
                }
            }
        }
    }

    let inherent_impl = if inherent.is_empty() {
        TokenStream::new()
    } else {
        quote! {
            impl #impl_generics #ident #ty_generics #where_clause {
                #(#inherent)*
            }
        }
    };

    let (shared_trait, reexport) = if declarations.is_empty() {
        (TokenStream::new(), TokenStream::new())
    } else {
        let trait_doc = format!("Bidirectional accessors of [`{ident}`], called on its shared handle.");
        (
            quote! {
                #[doc = #trait_doc]
                pub trait #trait_ident {
                    #(#declarations)*
                }

                impl #trait_ident for ::accessor_core::Shared<#ident> {
                    #(#definitions)*
                }
            },
            quote! {
                #[allow(unused_imports)]
                #vis use #module::#trait_ident;
            }
        )
    };

    let default_impl = if class.config.default_impl {
        render_default(unit)
    } else {
        TokenStream::new()
    };

    quote! {
        #marker
        #[allow(unused_imports)]
        mod #module {
            #(#imports)*

            #inherent_impl
            #shared_trait
            #default_impl
        }

        #reexport
    }
}

/// `impl Default` honoring resolved defaults.
fn render_default(unit: &GeneratedUnit<'_>) -> TokenStream {
    let class = unit.class;
    let ident = &class.ident;
    let (impl_generics, ty_generics, where_clause) = class.generics.split_for_impl();
    let fields = unit.properties.iter().map(|property| {
        let field = &property.info.ident;
        let value = default_value(&property.info);
        quote! { #field: #value }
    });

    quote! {
        impl #impl_generics ::core::default::Default for #ident #ty_generics #where_clause {
            fn default() -> Self {
                Self {
                    #(#fields),*
                }
            }
        }
    }
}

fn default_value(info: &PropertyInfo) -> TokenStream {
    match &info.default {
        DefaultValue::Literal(lit) if !info.is_collection => {
            let value = literal_value(lit, &info.value);
            if info.optional_storage {
                quote! { ::core::option::Option::Some(#value) }
            } else {
                value
            }
        }
        _ => quote! { ::core::default::Default::default() }
    }
}

#[cfg(test)]
mod tests {
    use syn::{DeriveInput, parse_quote};

    use crate::accessors::{generate, parse::ClassDef};

    fn render(input: DeriveInput) -> String {
        let class = ClassDef::from_derive_input(&input).unwrap();
        let unit = generate(&class).unwrap().unwrap();
        super::render_module(&unit).to_string().replace(' ', "")
    }

    #[test]
    fn inherent_only() {
        let out = render(parse_quote! {
            pub struct Song {
                #[generate]
                title: String,
                notes: String
            }
        });
        assert!(out.contains("modsong_accessors{usesuper::Song;implSong{"));
        assert!(out.contains("pubfntitle(&self)->&String"));
        assert!(!out.contains("notes"));
        assert!(!out.contains("trait"));
        assert!(!out.contains("Default"));
    }

    #[test]
    fn marker_names_generator() {
        let out = render(parse_quote! {
            #[accessors(generated_by = "ci")]
            struct Song {
                #[generate]
                title: String
            }
        });
        assert!(out.contains("generatedbyci"));
    }

    #[test]
    fn shared_trait_and_reexport() {
        let out = render(parse_quote! {
            pub(crate) struct Song {
                #[generate]
                title: String,
                #[relation(many_to_many, inversed_by = "songs")]
                genres: Collection<Genre>
            }
        });
        assert!(out.contains("pubtraitSongMethods{"));
        assert!(out.contains("implSongMethodsfor::accessor_core::Shared<Song>{"));
        assert!(out.contains("pub(crate)usesong_accessors::SongMethods;"));
        assert!(out.contains("usesuper::Collection;usesuper::Genre;usesuper::Song;"));
    }

    #[test]
    fn private_access_is_visible_to_parent() {
        let out = render(parse_quote! {
            struct Song {
                #[generate(set = "private")]
                title: String
            }
        });
        assert!(out.contains("pub(super)fnset_title"));
    }

    #[test]
    fn default_impl() {
        let out = render(parse_quote! {
            #[accessors(default)]
            struct Song {
                #[generate]
                #[column(default = "Untitled")]
                title: String,
                #[generate]
                #[column(default = 3)]
                rating: Option<u8>,
                #[generate(set = false)]
                #[column(default = 7)]
                plays: u32,
                #[generate]
                tags: Vec<String>
            }
        });
        assert!(out.contains("impl::core::default::DefaultforSong"));
        assert!(out.contains("title:<Stringas::core::convert::From<&'staticstr>>::from(\"Untitled\")"));
        assert!(out.contains("rating:::core::option::Option::Some(3)"));
        assert!(out.contains("plays:::core::default::Default::default()"));
        assert!(out.contains("tags:::core::default::Default::default()"));
    }

    #[test]
    fn generic_struct() {
        let out = render(parse_quote! {
            struct Tagged<T: Clone> {
                #[generate]
                value: T
            }
        });
        assert!(out.contains("impl<T:Clone>Tagged<T>{"));
        assert!(out.contains("usesuper::Tagged;"));
        assert!(!out.contains("usesuper::T;"));
    }
}
