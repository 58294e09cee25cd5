// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Naming of generated items.
//!
//! | Item | Name | Example (`genres` on `Song`) |
//! |------|------|------------------------------|
//! | getter | field name | `genres` |
//! | setter | `set_{field}` | `set_genres` |
//! | add | `add_{singular}` | `add_genre` |
//! | remove | `remove_{singular}` | `remove_genre` |
//! | module | `{snake}_accessors` | `song_accessors` |
//! | trait | `{Class}{suffix}` | `SongMethods` |

use convert_case::{Case, Casing};
use proc_macro2::Span;
use syn::{Ident, ext::IdentExt};

/// Singular form of an English plural field name.
///
/// Only the common suffix rules are handled; irregular nouns can be named
/// explicitly with `#[generate(singular = "...")]`.
pub fn singularize(plural: &str) -> String {
    const KEEP: [&str; 3] = ["ss", "us", "is"];
    const STRIP_ES: [&str; 5] = ["sses", "shes", "ches", "xes", "zzes"];

    if let Some(stem) = plural.strip_suffix("ies")
        && !stem.is_empty()
    {
        return format!("{stem}y");
    }
    if STRIP_ES.iter().any(|suffix| plural.ends_with(suffix)) {
        return plural[..plural.len() - 2].to_string();
    }
    if KEEP.iter().any(|suffix| plural.ends_with(suffix)) {
        return plural.to_string();
    }
    plural
        .strip_suffix('s')
        .filter(|stem| !stem.is_empty())
        .unwrap_or(plural)
        .to_string()
}

/// Field name without a raw identifier prefix (`r#type` → `type`).
pub fn plain_name(ident: &Ident) -> String {
    ident.unraw().to_string()
}

/// Method identifier `{prefix}_{name}`.
///
/// # Errors
///
/// `name` comes from `#[generate(singular = "..")]` and may not form an
/// identifier.
pub fn method_ident(prefix: &str, name: &str, span: Span) -> syn::Result<Ident> {
    identifier(&format!("{prefix}_{name}"), span)
}

/// Default accessor module name for a class.
pub fn module_ident(class: &Ident) -> Ident {
    let snake = class.unraw().to_string().to_case(Case::Snake);
    Ident::new(&format!("{snake}_accessors"), class.span())
}

/// Name of the trait holding bidirectional accessors.
///
/// # Errors
///
/// `suffix` comes from `#[accessors(suffix = "..")]` and may not form an
/// identifier.
pub fn trait_ident(class: &Ident, suffix: &str) -> syn::Result<Ident> {
    identifier(&format!("{}{suffix}", class.unraw()), class.span())
}

fn identifier(name: &str, span: Span) -> syn::Result<Ident> {
    let mut ident = syn::parse_str::<Ident>(name)
        .map_err(|_| syn::Error::new(span, format!("`{name}` is not a valid identifier")))?;
    ident.set_span(span);
    Ok(ident)
}
