// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Persistence facts: `#[id]`, `#[auto]` and `#[column(...)]`.
//!
//! ```rust,ignore
//! #[id]                                  // is_generated
//! id: u64,
//!
//! #[column(nullable, default = "Unknown")]
//! artist: Option<String>,
//!
//! #[column(type = i64)]                  // setter takes i64
//! play_count: u32,
//! ```

use syn::{Attribute, Meta};

use super::{
    FactExtractor, PropertyFact, lenient, parse_default, parse_flag, parse_type, skip_value
};

/// Extractor for column metadata.
///
/// # Recognized Options
///
/// - `#[id]`, `#[auto]`: value produced by the persistence layer
/// - `nullable` / `nullable = bool`: accepts the absent value
/// - `default = <literal> | None`: declared default
/// - `type = <type>`: setter argument type
/// - `generated`: value produced by the persistence layer
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnExtractor;

impl FactExtractor for ColumnExtractor {
    fn extract(&self, attrs: &[Attribute]) -> PropertyFact {
        let mut fact = PropertyFact::default();

        for attr in attrs {
            if attr.path().is_ident("id") || attr.path().is_ident("auto") {
                fact.is_generated = Some(true);
                continue;
            }
            if !attr.path().is_ident("column") {
                continue;
            }
            let Meta::List(meta_list) = &attr.meta else {
                continue;
            };
            let _ = meta_list.parse_nested_meta(|meta| {
                let input = meta.input;
                if meta.path.is_ident("nullable") {
                    fact.is_nullable = lenient(input, parse_flag)?.or(fact.is_nullable);
                } else if meta.path.is_ident("default") {
                    if let Some(default) = lenient(input, parse_default)? {
                        fact.default = Some(default);
                    }
                } else if meta.path.is_ident("type") {
                    if let Some(ty) = lenient(input, parse_type)? {
                        fact.type_override = Some(ty);
                    }
                } else if meta.path.is_ident("generated") {
                    fact.is_generated = lenient(input, parse_flag)?.or(fact.is_generated);
                } else {
                    skip_value(input)?;
                }
                Ok(())
            });
        }

        fact
    }
}
