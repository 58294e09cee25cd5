// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Association facts from `#[relation(...)]`.
//!
//! # Example
//!
//! ```rust,ignore
//! #[relation(many_to_many, inversed_by = "songs")]
//! genres: Collection<Genre>,
//!
//! #[relation(many_to_one, target = Album, inversed_by = "songs")]
//! album: Option<Shared<Album>>,
//! ```
//!
//! Cardinality decides collection-ness: `*_to_many` is a collection,
//! `*_to_one` is a single reference. `inversed_by` and `mapped_by` both
//! name the property on the other side that generated mutators keep in
//! sync.

use syn::{Attribute, Ident, Meta};

use super::{FactExtractor, PropertyFact, lenient, parse_string, parse_type, skip_value};

/// Association cardinality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// `one_to_one`
    OneToOne,

    /// `one_to_many`
    OneToMany,

    /// `many_to_one`
    ManyToOne,

    /// `many_to_many`
    ManyToMany
}

impl Cardinality {
    /// Parse cardinality from its attribute key.
    ///
    /// Returns `None` for unrecognized keys.
    #[must_use]
    pub fn from_key(key: &Ident) -> Option<Self> {
        match key.to_string().as_str() {
            "one_to_one" => Some(Self::OneToOne),
            "one_to_many" => Some(Self::OneToMany),
            "many_to_one" => Some(Self::ManyToOne),
            "many_to_many" => Some(Self::ManyToMany),
            _ => None
        }
    }

    /// Whether this side holds many related objects.
    #[must_use]
    pub fn is_to_many(self) -> bool {
        matches!(self, Self::OneToMany | Self::ManyToMany)
    }
}

/// Extractor for `#[relation(...)]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelationExtractor;

impl FactExtractor for RelationExtractor {
    fn extract(&self, attrs: &[Attribute]) -> PropertyFact {
        let mut fact = PropertyFact::default();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("relation")) {
            let Meta::List(meta_list) = &attr.meta else {
                continue;
            };
            let _ = meta_list.parse_nested_meta(|meta| {
                let input = meta.input;
                if let Some(cardinality) = meta.path.get_ident().and_then(Cardinality::from_key) {
                    fact.is_collection = Some(cardinality.is_to_many());
                    skip_value(input)?;
                } else if meta.path.is_ident("target") {
                    if let Some(ty) = lenient(input, parse_type)? {
                        fact.type_override = Some(ty);
                    }
                } else if meta.path.is_ident("inversed_by") || meta.path.is_ident("mapped_by") {
                    if let Some(value) = lenient(input, parse_string)? {
                        fact.referenced = value.parse::<Ident>().ok();
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

#[cfg(test)]
mod tests {
    use quote::quote;
    use syn::{Type, parse_quote};

    use super::*;

    fn extract(tokens: proc_macro2::TokenStream) -> PropertyFact {
        let attr: Attribute = parse_quote!(#[relation(#tokens)]);
        RelationExtractor.extract(&[attr])
    }

    #[test]
    fn to_many_is_collection() {
        assert_eq!(extract(quote! { many_to_many }).is_collection, Some(true));
        assert_eq!(extract(quote! { one_to_many }).is_collection, Some(true));
    }

    #[test]
    fn to_one_is_scalar() {
        assert_eq!(extract(quote! { many_to_one }).is_collection, Some(false));
        assert_eq!(extract(quote! { one_to_one }).is_collection, Some(false));
    }

    #[test]
    fn inverse_property_names() {
        let fact = extract(quote! { many_to_many, inversed_by = "songs" });
        assert_eq!(fact.referenced.unwrap().to_string(), "songs");

        let fact = extract(quote! { one_to_many, mapped_by = "album" });
        assert_eq!(fact.referenced.unwrap().to_string(), "album");
    }

    #[test]
    fn invalid_inverse_name_is_ignored() {
        let fact = extract(quote! { many_to_one, inversed_by = "not an ident" });
        assert_eq!(fact.referenced, None);
        assert_eq!(fact.is_collection, Some(false));
    }

    #[test]
    fn target_overrides_type() {
        let fact = extract(quote! { many_to_one, target = Album });
        let expected: Type = parse_quote!(Album);
        assert_eq!(fact.type_override, Some(expected));
    }

    #[test]
    fn relation_alone_does_not_request_generation() {
        assert_eq!(extract(quote! { many_to_many }).generate, None);
    }

    #[test]
    fn unknown_cardinality_is_ignored() {
        let fact = extract(quote! { some_to_some, fetch = "lazy" });
        assert_eq!(fact, PropertyFact::default());
    }

    #[test]
    fn list_form_unknown_key_keeps_later_keys() {
        let fact = extract(quote! {
            many_to_one, join_column(name = "album_id"), inversed_by = "songs"
        });
        assert_eq!(fact.is_collection, Some(false));
        assert_eq!(fact.referenced.map(|i| i.to_string()), Some("songs".to_string()));
    }

    #[test]
    fn malformed_value_only_unsets_its_key() {
        let fact = extract(quote! { inversed_by = songs, one_to_many });
        assert_eq!(fact.referenced, None);
        assert_eq!(fact.is_collection, Some(true));
    }
}
