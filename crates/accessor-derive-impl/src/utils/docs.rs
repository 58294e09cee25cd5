// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Documentation extraction utilities.
//!
//! Doc comments on entity fields are carried over to the generated getter,
//! so `song.title()` shows the same documentation as the `title` field.
//!
//! Doc comments reach the macro as `#[doc = "..."]` attributes.

use syn::Attribute;

/// Doc comment text of a field, or `None` when it has none.
///
/// Each `#[doc = ".."]` attribute is one line. The single space `///`
/// leaves after the slashes is dropped, deeper indentation is kept so
/// indented code in the comment survives. Blank lines around the text are
/// removed.
pub fn extract_doc_comments(attrs: &[Attribute]) -> Option<String> {
    let lines: Vec<String> = attrs
        .iter()
        .filter_map(doc_line)
        .map(|line| {
            let line = line.strip_prefix(' ').unwrap_or(&line);
            line.trim_end().to_string()
        })
        .collect();

    let first = lines.iter().position(|line| !line.is_empty())?;
    let last = lines.iter().rposition(|line| !line.is_empty())?;
    Some(lines[first..=last].join("\n"))
}

fn doc_line(attr: &Attribute) -> Option<String> {
    if !attr.path().is_ident("doc") {
        return None;
    }
    let syn::Meta::NameValue(meta) = &attr.meta else {
        return None;
    };
    match &meta.value {
        syn::Expr::Lit(syn::ExprLit {
            lit: syn::Lit::Str(text),
            ..
        }) => Some(text.value()),
        _ => None
    }
}
