// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Imports of the generated module.
//!
//! The generated module is a child of the module defining the struct, so
//! every type the accessors mention is imported from `super`. A type name is
//! imported when it:
//!
//! - is a single-segment path (`Genre`, not `crate::music::Genre`)
//! - starts with an uppercase letter
//! - is not a prelude type (`String`, `Option`, ...)
//! - is not a generic parameter of the struct
//!
//! Names are assumed to resolve in the defining module. A type that is only
//! reachable there through a path the struct does not spell out produces an
//! import that does not resolve; spell such types with a full path.

use std::collections::BTreeSet;

use syn::{GenericArgument, Generics, Ident, PathArguments, Type};

use crate::utils::naming;

/// Type names available everywhere without an import.
const PRELUDE: &[&str] = &[
    "Self",
    "Option",
    "Result",
    "String",
    "Vec",
    "Box",
    "ToString",
    "ToOwned",
    "Clone",
    "Copy",
    "Default",
    "Send",
    "Sync",
    "Sized",
    "Unpin",
    "Iterator",
    "IntoIterator",
    "Extend",
    "Fn",
    "FnMut",
    "FnOnce",
    "Drop",
    "PartialEq",
    "Eq",
    "PartialOrd",
    "Ord",
    "AsRef",
    "AsMut",
    "Into",
    "From",
    "TryFrom",
    "TryInto"
];

/// Accumulates sorted, unique import names.
#[derive(Debug)]
pub struct Imports<'a> {
    generics: &'a Generics,
    names: BTreeSet<String>
}

impl<'a> Imports<'a> {
    /// Start with the struct's own name.
    pub fn new(class: &Ident, generics: &'a Generics) -> Self {
        let mut names = BTreeSet::new();
        names.insert(naming::plain_name(class));
        Self {
            generics,
            names
        }
    }

    /// Record every importable name mentioned by `ty`.
    pub fn add_type(&mut self, ty: &Type) {
        match ty {
            Type::Path(type_path) => {
                if let Some(qself) = &type_path.qself {
                    self.add_type(&qself.ty);
                }
                let path = &type_path.path;
                if type_path.qself.is_none()
                    && path.leading_colon.is_none()
                    && let Some(ident) = single_segment(path)
                {
                    self.add_name(ident);
                }
                for segment in &path.segments {
                    if let PathArguments::AngleBracketed(args) = &segment.arguments {
                        for arg in &args.args {
                            if let GenericArgument::Type(inner) = arg {
                                self.add_type(inner);
                            }
                        }
                    }
                }
            }
            Type::Reference(reference) => self.add_type(&reference.elem),
            Type::Slice(slice) => self.add_type(&slice.elem),
            Type::Array(array) => self.add_type(&array.elem),
            Type::Ptr(ptr) => self.add_type(&ptr.elem),
            Type::Paren(paren) => self.add_type(&paren.elem),
            Type::Group(group) => self.add_type(&group.elem),
            Type::Tuple(tuple) => tuple.elems.iter().for_each(|elem| self.add_type(elem)),
            _ => {}
        }
    }

    fn add_name(&mut self, ident: &Ident) {
        let name = naming::plain_name(ident);
        let capitalized = name.chars().next().is_some_and(char::is_uppercase);
        let generic = self
            .generics
            .type_params()
            .any(|param| param.ident == *ident);
        if capitalized && !generic && !PRELUDE.contains(&name.as_str()) {
            self.names.insert(name);
        }
    }

    /// Sorted, unique names.
    pub fn finish(self) -> Vec<String> {
        self.names.into_iter().collect()
    }
}

/// Identifier of a one-segment path (`Genre`, `Vec<T>`).
fn single_segment(path: &syn::Path) -> Option<&Ident> {
    match path.segments.len() {
        1 => path.segments.first().map(|segment| &segment.ident),
        _ => None
    }
}

#[cfg(test)]
mod tests {
    use proc_macro2::Span;
    use syn::parse_quote;

    use super::*;

    fn collect(types: &[Type], generics: &Generics) -> Vec<String> {
        let class = Ident::new("Song", Span::call_site());
        let mut imports = Imports::new(&class, generics);
        for ty in types {
            imports.add_type(ty);
        }
        imports.finish()
    }

    #[test]
    fn own_name_always_imported() {
        assert_eq!(collect(&[], &Generics::default()), ["Song"]);
    }

    #[test]
    fn nested_names_sorted_and_unique() {
        let types: [Type; 3] = [
            parse_quote!(Collection<Genre>),
            parse_quote!(Option<Shared<Album>>),
            parse_quote!(Vec<Shared<Genre>>)
        ];
        assert_eq!(
            collect(&types, &Generics::default()),
            ["Album", "Collection", "Genre", "Shared", "Song"]
        );
    }

    #[test]
    fn prelude_and_primitives_skipped() {
        let types: [Type; 3] = [
            parse_quote!(Option<String>),
            parse_quote!(Vec<u8>),
            parse_quote!(&'static str)
        ];
        assert_eq!(collect(&types, &Generics::default()), ["Song"]);
    }

    #[test]
    fn qualified_paths_skipped_but_arguments_kept() {
        let types: [Type; 3] = [
            parse_quote!(std::collections::HashSet<Tag>),
            parse_quote!(::accessor_core::Shared<Genre>),
            parse_quote!(<Journal as ::accessor_core::Container>::Item)
        ];
        assert_eq!(
            collect(&types, &Generics::default()),
            ["Genre", "Journal", "Song", "Tag"]
        );
    }

    #[test]
    fn generic_parameters_skipped() {
        let generics: Generics = parse_quote!(<T: Clone, Meta>);
        let types: [Type; 2] = [parse_quote!(Vec<T>), parse_quote!(Option<Meta>)];
        assert_eq!(collect(&types, &generics), ["Song"]);
    }

    #[test]
    fn compound_types() {
        let types: [Type; 3] = [
            parse_quote!((Artist, [Track; 2])),
            parse_quote!(&[Label]),
            parse_quote!(*const Studio)
        ];
        assert_eq!(
            collect(&types, &Generics::default()),
            ["Artist", "Label", "Song", "Studio", "Track"]
        );
    }
}
