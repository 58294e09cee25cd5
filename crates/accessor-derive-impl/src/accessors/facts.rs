// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Annotation fact extraction.
//!
//! Each extractor looks at the raw attributes of one field and reports what
//! it understood as a [`PropertyFact`]. Extractors run in a fixed order and
//! their facts are merged field by field: a later extractor refines an
//! earlier one but never clears what it did not see.
//!
//! # Pipeline
//!
//! ```text
//! #[generate(..)]   ──► GenerateExtractor ─┐
//! #[id] #[auto]                            │
//! #[column(..)]     ──► ColumnExtractor  ──┼──► merge ──► PropertyFact
//! #[relation(..)]   ──► RelationExtractor ─┘
//! ```
//!
//! Extractors never fail. Attributes they do not know, keys they do not
//! know and values of the wrong shape are skipped.

mod column;
mod generate;
mod relation;

pub use column::ColumnExtractor;
pub use generate::GenerateExtractor;
pub use relation::RelationExtractor;
use syn::{
    Attribute, Ident, Lit, LitStr, Token, Type,
    parse::{ParseStream, discouraged::Speculative}
};

/// Access level of a generated accessor.
///
/// `None` is an explicit "do not generate".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Not generated.
    None,

    /// `pub`.
    Public,

    /// `pub(crate)`.
    Crate,

    /// Visible to the module defining the struct.
    Private
}

impl Access {
    /// Parse an access level from its attribute spelling.
    ///
    /// Returns `None` for unrecognized values.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "public" | "pub" | "true" => Some(Self::Public),
            "protected" | "crate" => Some(Self::Crate),
            "private" => Some(Self::Private),
            "none" | "false" => Some(Self::None),
            _ => None
        }
    }

    /// Access level from a boolean flag.
    #[must_use]
    pub fn from_bool(enabled: bool) -> Self {
        if enabled { Self::Public } else { Self::None }
    }

    /// Whether the accessor is generated at all.
    #[must_use]
    pub fn is_enabled(self) -> bool {
        self != Self::None
    }
}

/// Declared default value of a property.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    /// Absent value (`None`).
    Null,

    /// Literal default.
    Literal(Lit)
}

/// Normalized facts about one field, as far as one extractor understood
/// them.
///
/// Every field is tri-state: `None` means "no opinion".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFact {
    /// Generation requested (`Some(true)`) or refused (`Some(false)`).
    pub generate: Option<bool>,

    /// Getter access.
    pub get: Option<Access>,

    /// Setter access.
    pub set: Option<Access>,

    /// `add_*` access.
    pub add: Option<Access>,

    /// `remove_*` access.
    pub remove: Option<Access>,

    /// Value produced by the persistence layer.
    pub is_generated: Option<bool>,

    /// Field holds a collection.
    pub is_collection: Option<bool>,

    /// Field accepts the absent value.
    pub is_nullable: Option<bool>,

    /// Declared default.
    pub default: Option<DefaultValue>,

    /// Explicit type replacing the declared value type.
    pub type_override: Option<Type>,

    /// Name of the inverse property on the related type.
    pub referenced: Option<Ident>,

    /// Singular noun naming `add_*` / `remove_*`.
    pub singular: Option<String>
}

impl PropertyFact {
    /// Merge a later fact into this one.
    ///
    /// Per field, a later `Some` wins and a later `None` keeps the current
    /// value.
    #[must_use]
    pub fn merge(self, later: Self) -> Self {
        Self {
            generate: later.generate.or(self.generate),
            get: later.get.or(self.get),
            set: later.set.or(self.set),
            add: later.add.or(self.add),
            remove: later.remove.or(self.remove),
            is_generated: later.is_generated.or(self.is_generated),
            is_collection: later.is_collection.or(self.is_collection),
            is_nullable: later.is_nullable.or(self.is_nullable),
            default: later.default.or(self.default),
            type_override: later.type_override.or(self.type_override),
            referenced: later.referenced.or(self.referenced),
            singular: later.singular.or(self.singular)
        }
    }
}

/// Source of property facts.
pub trait FactExtractor {
    /// Extract facts from the attributes of one field.
    fn extract(&self, attrs: &[Attribute]) -> PropertyFact;
}

/// The fixed extractor pipeline.
pub fn pipeline() -> [&'static dyn FactExtractor; 3] {
    [&GenerateExtractor, &ColumnExtractor, &RelationExtractor]
}

/// Run `extractors` in order and merge their facts.
pub fn extract_all(extractors: &[&dyn FactExtractor], attrs: &[Attribute]) -> PropertyFact {
    extractors
        .iter()
        .map(|extractor| extractor.extract(attrs))
        .fold(PropertyFact::default(), PropertyFact::merge)
}

/// Run `parse` on the value following a key.
///
/// A value that fails to parse, or that does not end at the next `,`, is
/// skipped up to that `,` and yields `None`. Sibling keys are unaffected.
fn lenient<T>(
    input: ParseStream<'_>,
    parse: impl FnOnce(ParseStream<'_>) -> syn::Result<T>
) -> syn::Result<Option<T>> {
    let fork = input.fork();
    match parse(&fork) {
        Ok(value) if fork.is_empty() || fork.peek(Token![,]) => {
            input.advance_to(&fork);
            Ok(Some(value))
        }
        _ => {
            skip_value(input)?;
            Ok(None)
        }
    }
}

/// Skip whatever follows a key: `= expr`, `(..)` or nothing.
fn skip_value(input: ParseStream<'_>) -> syn::Result<()> {
    while !input.is_empty() && !input.peek(Token![,]) {
        input.parse::<proc_macro2::TokenTree>()?;
    }
    Ok(())
}

/// Parse `= "<string>"`.
fn parse_string(input: ParseStream<'_>) -> syn::Result<LitStr> {
    let _: Token![=] = input.parse()?;
    input.parse()
}

/// Parse `= <lit>` or `= None` after a `default` key.
fn parse_default(input: ParseStream<'_>) -> syn::Result<DefaultValue> {
    let _: Token![=] = input.parse()?;
    if input.peek(Ident) {
        let ident: Ident = input.parse()?;
        return if ident == "None" {
            Ok(DefaultValue::Null)
        } else {
            Err(syn::Error::new(ident.span(), "expected literal or `None`"))
        };
    }
    input.parse().map(DefaultValue::Literal)
}

/// Parse an optional `= <bool>` after a flag key. A bare key is `true`.
fn parse_flag(input: ParseStream<'_>) -> syn::Result<bool> {
    if input.peek(Token![=]) {
        let _: Token![=] = input.parse()?;
        let value: syn::LitBool = input.parse()?;
        Ok(value.value)
    } else {
        Ok(true)
    }
}

/// Parse `= <type>` where the type is given bare or as a string.
fn parse_type(input: ParseStream<'_>) -> syn::Result<Type> {
    let _: Token![=] = input.parse()?;
    if input.peek(LitStr) {
        let value: LitStr = input.parse()?;
        value.parse()
    } else {
        input.parse()
    }
}
