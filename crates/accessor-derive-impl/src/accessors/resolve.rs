// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Property information resolution.
//!
//! Combines one field declaration with its merged [`PropertyFact`] into an
//! immutable [`PropertyInfo`]. Resolution is a pure function of those two
//! inputs.
//!
//! # Rules
//!
//! Applied in order:
//!
//! 1. Effective type: the type override, else the value type (element type
//!    for containers, `T` for `Option<T>`, the declared type otherwise).
//! 2. Collection: the explicit fact, else whether the declared type is a
//!    recognized container family.
//! 3. Opt-in: a field participates when `#[generate]` asked for it or an
//!    inverse property is named. Unset flags then default to public, except
//!    the setter of a persistence-generated value. A field that does not
//!    participate generates nothing.
//! 4. An inverse property forces `add_*`/`remove_*` (collections) or
//!    `set_*` (single values) on.
//! 5. Default: absent when no setter is generated, else the declared
//!    default.
//! 6. Integer width of the effective type is recorded; word-sized values
//!    get a fixed-width setter argument.
//!
//! Declarations that cannot be rendered soundly are rejected with an error
//! spanning the field type.

mod types;

use proc_macro2::Span;
use syn::{Ident, Type, parse_quote};
pub use types::{ContainerFamily, IntegerWidth};

use super::{
    facts::{Access, DefaultValue, PropertyFact},
    parse::PropertyDecl
};
use crate::utils::naming;

/// Immutable per-field descriptor.
#[derive(Debug, Clone)]
pub struct PropertyInfo {
    /// Field identifier.
    pub ident: Ident,

    /// Field documentation.
    pub doc: Option<String>,

    /// Type as declared on the field.
    pub declared: Type,

    /// Element type for containers, `T` for `Option<T>`, else declared.
    pub value: Type,

    /// Type override, else the value type.
    pub effective: Type,

    /// Recognized container family of the declared type.
    pub container: Option<ContainerFamily>,

    /// Field holds a collection.
    pub is_collection: bool,

    /// Setter accepts the absent value.
    pub is_nullable: bool,

    /// Declared as `Option<_>`.
    pub optional_storage: bool,

    /// Resolved default.
    pub default: DefaultValue,

    /// Getter access.
    pub get: Access,

    /// Setter access.
    pub set: Access,

    /// `add_*` access.
    pub add: Access,

    /// `remove_*` access.
    pub remove: Access,

    /// Inverse property on the related type.
    pub referenced: Option<Ident>,

    /// Related type of a bidirectional association.
    pub related: Option<Type>,

    /// Argument type of `add_*` / `remove_*`.
    pub item: Option<Type>,

    /// Setter argument type when it differs from the value type.
    pub coercion: Option<Type>,

    /// Integer width of the effective type.
    pub integer: Option<IntegerWidth>,

    /// Noun naming `add_*` / `remove_*`.
    pub singular: String
}

impl PropertyInfo {
    /// Getter is generated.
    #[must_use]
    pub fn will_generate_get(&self) -> bool {
        self.get.is_enabled()
    }

    /// Setter is generated.
    #[must_use]
    pub fn will_generate_set(&self) -> bool {
        self.set.is_enabled()
    }

    /// `add_*` is generated.
    #[must_use]
    pub fn will_generate_add(&self) -> bool {
        self.add.is_enabled()
    }

    /// `remove_*` is generated.
    #[must_use]
    pub fn will_generate_remove(&self) -> bool {
        self.remove.is_enabled()
    }

    /// Mutators keep an inverse side in sync.
    #[must_use]
    pub fn is_bidirectional(&self) -> bool {
        self.referenced.is_some()
    }

    /// Span for diagnostics about this field.
    #[must_use]
    pub fn span(&self) -> Span {
        self.ident.span()
    }
}

/// Resolve one field.
///
/// # Errors
///
/// - bidirectional single value not stored as `Option<Shared<T>>`
/// - bidirectional collection whose elements are not `Shared<T>`
/// - collection whose element type cannot be determined
pub fn resolve(decl: &PropertyDecl, fact: PropertyFact) -> darling::Result<PropertyInfo> {
    let declared = decl.ty.clone();
    let container = ContainerFamily::of(&declared);
    let is_collection = fact.is_collection.unwrap_or(container.is_some());
    let option = types::option_inner(&declared).filter(|_| !is_collection);
    let optional_storage = option.is_some();

    let value = if is_collection {
        types::first_type_arg(&declared).unwrap_or(&declared).clone()
    } else {
        option.unwrap_or(&declared).clone()
    };
    let effective = fact.type_override.clone().unwrap_or_else(|| value.clone());
    let referenced = fact.referenced.clone();

    let participates = fact.generate == Some(true) || referenced.is_some();
    let (get, mut set, mut add, mut remove) = if participates {
        let generated = fact.is_generated.unwrap_or(false);
        (
            fact.get.unwrap_or(Access::Public),
            fact.set.unwrap_or(if generated { Access::None } else { Access::Public }),
            fact.add.unwrap_or(Access::Public),
            fact.remove.unwrap_or(Access::Public)
        )
    } else {
        (Access::None, Access::None, Access::None, Access::None)
    };

    if referenced.is_some() {
        let force = |access: Access| if access.is_enabled() { access } else { Access::Public };
        if is_collection {
            add = force(add);
            remove = force(remove);
        } else {
            set = force(set);
        }
    }
    if is_collection {
        set = Access::None;
    } else {
        add = Access::None;
        remove = Access::None;
    }

    let default = if set.is_enabled() {
        fact.default.unwrap_or(DefaultValue::Null)
    } else {
        DefaultValue::Null
    };
    let is_nullable = optional_storage && fact.is_nullable.unwrap_or(true);

    let item = if is_collection && participates {
        Some(collection_item(&declared, container)?)
    } else {
        None
    };

    let related = match &referenced {
        None => None,
        Some(_) if is_collection => {
            let element = item.as_ref().and_then(types::shared_inner).ok_or_else(|| {
                darling::Error::custom(
                    "elements of a bidirectional collection must be `Shared<T>` handles"
                )
                .with_span(&decl.ty)
            })?;
            Some(fact.type_override.clone().unwrap_or_else(|| element.clone()))
        }
        Some(_) => {
            let element = option.and_then(types::shared_inner).ok_or_else(|| {
                darling::Error::custom(
                    "a bidirectional single-valued property must be declared as `Option<Shared<T>>`"
                )
                .with_span(&decl.ty)
            })?;
            Some(fact.type_override.clone().unwrap_or_else(|| element.clone()))
        }
    };

    let integer = IntegerWidth::of(&effective);
    let coercion = if is_collection || referenced.is_some() {
        None
    } else if let Some(argument) = fact.type_override.clone() {
        (argument != value).then_some(argument)
    } else {
        match integer {
            Some(IntegerWidth::Word { signed: true }) => Some(parse_quote!(i64)),
            Some(IntegerWidth::Word { signed: false }) => Some(parse_quote!(u64)),
            _ => None
        }
    };

    let singular = fact
        .singular
        .clone()
        .unwrap_or_else(|| naming::singularize(&naming::plain_name(&decl.ident)));

    Ok(PropertyInfo {
        ident: decl.ident.clone(),
        doc: decl.doc.clone(),
        declared,
        value,
        effective,
        container,
        is_collection,
        is_nullable,
        optional_storage,
        default,
        get,
        set,
        add,
        remove,
        referenced,
        related,
        item,
        coercion,
        integer,
        singular
    })
}

/// Argument type of `add_*` / `remove_*` for a collection field.
fn collection_item(declared: &Type, container: Option<ContainerFamily>) -> darling::Result<Type> {
    match (container, types::first_type_arg(declared)) {
        (Some(ContainerFamily::Collection), Some(element)) => {
            Ok(parse_quote!(::accessor_core::Shared<#element>))
        }
        (Some(_), Some(element)) => Ok(element.clone()),
        (None, _) => Ok(parse_quote!(<#declared as ::accessor_core::Container>::Item)),
        (Some(_), None) => Err(darling::Error::custom(
            "cannot determine the element type of this collection"
        )
        .with_span(declared))
    }
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::*;
    use crate::accessors::facts::{extract_all, pipeline};

    fn resolve_field(tokens: proc_macro2::TokenStream) -> darling::Result<PropertyInfo> {
        let fields: syn::FieldsNamed = parse_quote!({ #tokens });
        let decl = PropertyDecl::from_field(&fields.named[0]).unwrap();
        let fact = extract_all(&pipeline(), &decl.attrs);
        resolve(&decl, fact)
    }

    fn info(tokens: proc_macro2::TokenStream) -> PropertyInfo {
        resolve_field(tokens).unwrap()
    }

    #[test]
    fn unannotated_field_generates_nothing() {
        let info = info(quote! { title: String });
        assert!(!info.will_generate_get());
        assert!(!info.will_generate_set());
        assert!(!info.will_generate_add());
        assert!(!info.will_generate_remove());
    }

    #[test]
    fn unannotated_collection_without_element_type_is_accepted() {
        let info = info(quote! { raw: Vec });
        assert!(info.is_collection);
        assert_eq!(info.item, None);
    }

    #[test]
    fn persistence_attributes_alone_do_not_opt_in() {
        let info = info(quote! { #[id] #[column(nullable)] id: Option<u64> });
        assert!(!info.will_generate_get());
        assert!(!info.will_generate_set());
    }

    #[test]
    fn generate_opts_in_scalar() {
        let info = info(quote! { #[generate] title: String });
        assert_eq!(info.get, Access::Public);
        assert_eq!(info.set, Access::Public);
        assert!(!info.will_generate_add());
        assert!(!info.is_collection);
        assert!(!info.is_nullable);
    }

    #[test]
    fn generated_value_has_no_setter() {
        let info = info(quote! { #[generate] #[id] id: u64 });
        assert!(info.will_generate_get());
        assert!(!info.will_generate_set());
    }

    #[test]
    fn explicit_setter_on_generated_value() {
        let info = info(quote! { #[generate(set = "crate")] #[auto] updated_at: u64 });
        assert_eq!(info.set, Access::Crate);
    }

    #[test]
    fn collection_never_has_setter() {
        let info = info(quote! { #[generate(set)] tags: Vec<String> });
        assert!(info.is_collection);
        assert!(!info.will_generate_set());
        assert!(info.will_generate_add());
        assert!(info.will_generate_remove());
        assert_eq!(info.singular, "tag");
        let expected: Type = parse_quote!(String);
        assert_eq!(info.item, Some(expected.clone()));
        assert_eq!(info.value, expected);
    }

    #[test]
    fn collection_items_are_shared_handles() {
        let info = info(quote! { #[generate] genres: Collection<Genre> });
        assert_eq!(info.container, Some(ContainerFamily::Collection));
        let expected: Type = parse_quote!(::accessor_core::Shared<Genre>);
        assert_eq!(info.item, Some(expected));
    }

    #[test]
    fn custom_container_uses_trait_item() {
        let info = info(quote! { #[generate(collection, singular = "entry")] log: Journal });
        assert!(info.is_collection);
        assert_eq!(info.container, None);
        let expected: Type = parse_quote!(<Journal as ::accessor_core::Container>::Item);
        assert_eq!(info.item, Some(expected));
        assert_eq!(info.singular, "entry");
    }

    #[test]
    fn scalar_never_has_add_remove() {
        let info = info(quote! { #[generate(add, remove)] title: String });
        assert!(!info.will_generate_add());
        assert!(!info.will_generate_remove());
    }

    #[test]
    fn referenced_forces_mutators() {
        let info = info(quote! {
            #[generate(add = false, remove = "none")]
            #[relation(many_to_many, inversed_by = "songs")]
            genres: Collection<Genre>
        });
        assert_eq!(info.add, Access::Public);
        assert_eq!(info.remove, Access::Public);
        let genre: Type = parse_quote!(Genre);
        assert_eq!(info.related, Some(genre));
    }

    #[test]
    fn referenced_participates_without_generate() {
        let info = info(quote! {
            #[relation(many_to_one, inversed_by = "songs")]
            album: Option<Shared<Album>>
        });
        assert!(info.will_generate_get());
        assert!(info.will_generate_set());
        assert!(info.is_nullable);
        assert!(info.is_bidirectional());
        assert_eq!(info.coercion, None);
    }

    #[test]
    fn referenced_keeps_explicit_access() {
        let info = info(quote! {
            #[generate(set = "private")]
            #[relation(one_to_one, mapped_by = "cover")]
            song: Option<Shared<Song>>
        });
        assert_eq!(info.set, Access::Private);
    }

    #[test]
    fn bidirectional_scalar_requires_shared_option() {
        let err = resolve_field(quote! {
            #[relation(many_to_one, inversed_by = "songs")]
            album: Shared<Album>
        });
        assert!(err.is_err());

        let err = resolve_field(quote! {
            #[relation(many_to_one, inversed_by = "songs")]
            album: Option<Album>
        });
        assert!(err.is_err());
    }

    #[test]
    fn bidirectional_collection_requires_shared_elements() {
        let err = resolve_field(quote! {
            #[relation(one_to_many, mapped_by = "album")]
            songs: Vec<Song>
        });
        assert!(err.is_err());

        let ok = resolve_field(quote! {
            #[relation(one_to_many, mapped_by = "album")]
            songs: Vec<Shared<Song>>
        });
        assert!(ok.is_ok());
    }

    #[test]
    fn target_names_related_type() {
        let info = info(quote! {
            #[relation(many_to_one, target = Record, inversed_by = "songs")]
            album: Option<Shared<Album>>
        });
        let record: Type = parse_quote!(Record);
        assert_eq!(info.related, Some(record.clone()));
        assert_eq!(info.effective, record);
    }

    #[test]
    fn setter_without_setter_resets_default() {
        let info = info(quote! {
            #[generate(set = false)]
            #[column(default = "Unknown")]
            artist: Option<String>
        });
        assert_eq!(info.default, DefaultValue::Null);
    }

    #[test]
    fn declared_default_kept_with_setter() {
        let info = info(quote! {
            #[generate]
            #[column(default = "Unknown")]
            artist: Option<String>
        });
        assert!(matches!(info.default, DefaultValue::Literal(_)));
    }

    #[test]
    fn nullability() {
        assert!(info(quote! { #[generate] a: Option<String> }).is_nullable);
        assert!(!info(quote! { #[generate] #[column(nullable = false)] a: Option<String> }).is_nullable);
        assert!(!info(quote! { #[generate] #[column(nullable)] a: String }).is_nullable);
    }

    #[test]
    fn optional_value_type() {
        let info = info(quote! { #[generate] a: Option<String> });
        assert!(info.optional_storage);
        let expected: Type = parse_quote!(String);
        assert_eq!(info.value, expected);
    }

    #[test]
    fn word_sized_setter_takes_fixed_width() {
        let info = info(quote! { #[generate] count: usize });
        assert_eq!(info.integer, Some(IntegerWidth::Word { signed: false }));
        let expected: Type = parse_quote!(u64);
        assert_eq!(info.coercion, Some(expected));

        let info = self::info(quote! { #[generate] offset: Option<isize> });
        let expected: Type = parse_quote!(i64);
        assert_eq!(info.coercion, Some(expected));
    }

    #[test]
    fn fixed_width_setter_takes_value() {
        let info = info(quote! { #[generate] count: u32 });
        assert_eq!(
            info.integer,
            Some(IntegerWidth::Fixed {
                bits: 32,
                signed: false
            })
        );
        assert_eq!(info.coercion, None);
    }

    #[test]
    fn type_override_is_setter_argument() {
        let info = info(quote! { #[generate] #[column(type = i64)] count: u8 });
        let expected: Type = parse_quote!(i64);
        assert_eq!(info.coercion, Some(expected.clone()));
        assert_eq!(info.effective, expected);

        let same = self::info(quote! { #[generate(type = u8)] count: u8 });
        assert_eq!(same.coercion, None);
    }

    #[test]
    fn raw_identifier_singular() {
        let info = info(quote! { #[generate] r#types: Vec<String> });
        assert_eq!(info.singular, "type");
    }
}
