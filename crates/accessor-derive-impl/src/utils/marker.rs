// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generated code marker.
//!
//! Every generated accessor module carries a doc line naming the generator.
//! The generator identity is configuration (`#[accessors(generated_by =
//! "...")]`), never read from the build environment, so expansions are
//! reproducible across machines.

use proc_macro2::TokenStream;
use quote::quote;
use syn::Ident;

/// Default generator identity written into the marker.
pub fn default_generator() -> String {
    format!("accessor-derive {}", env!("CARGO_PKG_VERSION"))
}

/// Marker doc attribute for the accessor module of `class`.
pub fn generated(generator: &str, class: &Ident) -> TokenStream {
    let doc = format!("Accessors for [`{class}`], generated by {generator}. Do not edit.");
    quote! { #[doc = #doc] }
}

#[cfg(test)]
mod tests {
    use proc_macro2::Span;

    use super::*;

    #[test]
    fn default_generator_names_crate() {
        assert!(default_generator().starts_with("accessor-derive "));
    }

    #[test]
    fn marker_mentions_class_and_generator() {
        let class = Ident::new("Song", Span::call_site());
        let marker = generated("build-bot", &class).to_string();
        assert!(marker.contains("Song"));
        assert!(marker.contains("build-bot"));
    }
}
