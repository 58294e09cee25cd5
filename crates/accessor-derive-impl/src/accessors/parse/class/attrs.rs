// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Struct-level attribute parsing with darling.
//!
//! # Supported Attributes
//!
//! | Attribute | Required | Default | Description |
//! |-----------|----------|---------|-------------|
//! | `module` | No | `{snake}_accessors` | Name of the generated module |
//! | `suffix` | No | `"Methods"` | Suffix of the bidirectional trait |
//! | `default` | No | `false` | Also generate `impl Default` |
//! | `generated_by` | No | `accessor-derive <version>` | Generator named in the marker |

use darling::FromDeriveInput;
use syn::{Generics, Ident, Visibility};

/// Returns the default trait suffix.
///
/// Used by darling for the `suffix` attribute default.
pub fn default_suffix() -> String {
    "Methods".to_string()
}

/// Struct-level attributes parsed from `#[accessors(...)]`.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Accessors)]
/// #[accessors(module = "song_generated", suffix = "Relations", default)]
/// pub struct Song { /* ... */ }
/// ```
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(accessors), supports(struct_named))]
pub struct ClassAttrs {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct visibility.
    pub vis: Visibility,

    /// Struct generics.
    pub generics: Generics,

    /// Name of the generated module.
    #[darling(default)]
    pub module: Option<String>,

    /// Suffix appended to the struct name for the bidirectional trait.
    #[darling(default = "default_suffix")]
    pub suffix: String,

    /// Generate `impl Default` honoring resolved property defaults.
    #[darling(default)]
    pub default: bool,

    /// Generator identity for the marker doc.
    #[darling(default)]
    pub generated_by: Option<String>
}
