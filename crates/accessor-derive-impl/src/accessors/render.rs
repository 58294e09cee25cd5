// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Token rendering of accessor specifications.
//!
//! Each accessor kind has its own renderer producing a [`Method`]: doc,
//! signature and body kept apart, because the same method is emitted in
//! different places depending on its receiver:
//!
//! ```text
//! Receiver::Owned   impl Song { #doc #vis #signature #body }
//! Receiver::Shared  pub trait SongMethods { #doc #signature; }
//!                   impl SongMethods for Shared<Song> { #signature #body }
//! ```
//!
//! Generated code names runtime items by absolute path (`::accessor_core`,
//! `::core`): the generated module imports user types by name and must not
//! be affected by them.

mod add;
mod get;
mod module;
mod remove;
mod set;

pub use module::render_module;
use proc_macro2::TokenStream;
use quote::quote;

use super::{
    facts::Access,
    policy::{AccessorKind, AccessorSpec},
    resolve::PropertyInfo
};

/// One rendered method.
#[derive(Debug)]
pub struct Method {
    /// Doc attributes.
    pub doc: TokenStream,

    /// `fn name(&self, ..) -> ..` without visibility.
    pub signature: TokenStream,

    /// Block.
    pub body: TokenStream
}

impl Method {
    /// Method in an inherent `impl` block.
    pub fn inherent(&self, access: Access) -> TokenStream {
        let Self {
            doc,
            signature,
            body
        } = self;
        let vis = visibility(access);
        quote! { #doc #vis #signature #body }
    }

    /// Declaration in a trait.
    pub fn declaration(&self) -> TokenStream {
        let Self {
            doc, signature, ..
        } = self;
        quote! { #doc #signature; }
    }

    /// Definition in a trait `impl` block.
    pub fn definition(&self) -> TokenStream {
        let Self {
            signature, body, ..
        } = self;
        quote! { #signature #body }
    }
}

/// Render one accessor of `info`.
pub fn render_method(spec: &AccessorSpec, info: &PropertyInfo) -> Method {
    match spec.kind {
        AccessorKind::Get => get::render(spec, info),
        AccessorKind::Set => set::render(spec, info),
        AccessorKind::Add => add::render(spec, info),
        AccessorKind::Remove => remove::render(spec, info)
    }
}

/// Visibility tokens of an inherent method.
///
/// The generated module is a child of the defining module, so private
/// accessors are `pub(super)`.
pub fn visibility(access: Access) -> TokenStream {
    match access {
        Access::Public => quote! { pub },
        Access::Crate => quote! { pub(crate) },
        Access::Private => quote! { pub(super) },
        Access::None => TokenStream::new()
    }
}

/// `#[doc = ..]` attributes from text, one per line.
fn doc_attrs(text: &str) -> TokenStream {
    let lines = text.lines().map(|line| {
        let line = if line.is_empty() {
            String::new()
        } else {
            format!(" {line}")
        };
        quote! { #[doc = #line] }
    });
    quote! { #(#lines)* }
}

/// Sentence noting the inverse side kept in sync.
fn sync_note(info: &PropertyInfo) -> Option<String> {
    let inverse = info.referenced.as_ref()?;
    let related = info.related.as_ref()?;
    let related = quote!(#related).to_string().replace(' ', "");
    Some(format!("Keeps `{related}::{inverse}` in sync."))
}
