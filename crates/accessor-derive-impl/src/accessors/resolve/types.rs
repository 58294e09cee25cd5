// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Type shape inspection.
//!
//! Recognition is by the last path segment, so `Vec<T>`,
//! `std::vec::Vec<T>` and `::alloc::vec::Vec<T>` all match.

use syn::{GenericArgument, PathArguments, Type};

/// Recognized container families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerFamily {
    /// `accessor_core::Collection<T>`, elements are `Shared<T>`.
    Collection,

    /// `Vec<T>`
    Vec,

    /// `VecDeque<T>`
    VecDeque,

    /// `HashSet<T>`
    HashSet,

    /// `BTreeSet<T>`
    BTreeSet
}

impl ContainerFamily {
    /// Detect the family of a declared type.
    #[must_use]
    pub fn of(ty: &Type) -> Option<Self> {
        let name = last_segment_name(ty)?;
        match name.as_str() {
            "Collection" => Some(Self::Collection),
            "Vec" => Some(Self::Vec),
            "VecDeque" => Some(Self::VecDeque),
            "HashSet" => Some(Self::HashSet),
            "BTreeSet" => Some(Self::BTreeSet),
            _ => None
        }
    }

    /// Whether iteration order is insertion order.
    #[must_use]
    pub fn is_ordered(self) -> bool {
        matches!(self, Self::Collection | Self::Vec | Self::VecDeque)
    }
}

/// Integer width tag of a value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerWidth {
    /// `isize` / `usize`: width depends on the target.
    Word {
        /// `isize`
        signed: bool
    },

    /// Fixed width in bits.
    Fixed {
        /// Width in bits.
        bits: u16,
        /// Signed type.
        signed: bool
    }
}

impl IntegerWidth {
    /// Detect the integer width of a type.
    #[must_use]
    pub fn of(ty: &Type) -> Option<Self> {
        let Type::Path(type_path) = ty else {
            return None;
        };
        let ident = type_path.path.get_ident()?.to_string();
        let (signed, width) = match ident.split_at_checked(1)? {
            ("i", width) => (true, width),
            ("u", width) => (false, width),
            _ => return None
        };
        if width == "size" {
            return Some(Self::Word { signed });
        }
        match width.parse::<u16>() {
            Ok(bits @ (8 | 16 | 32 | 64 | 128)) => Some(Self::Fixed { bits, signed }),
            _ => None
        }
    }
}

/// Name of the last path segment of a type.
#[must_use]
pub fn last_segment_name(ty: &Type) -> Option<String> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    type_path
        .path
        .segments
        .last()
        .map(|segment| segment.ident.to_string())
}

/// First generic type argument of a path type.
#[must_use]
pub fn first_type_arg(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let PathArguments::AngleBracketed(args) = &type_path.path.segments.last()?.arguments else {
        return None;
    };
    args.args.iter().find_map(|arg| match arg {
        GenericArgument::Type(inner) => Some(inner),
        _ => None
    })
}

/// Inner type of a wrapper named `wrapper` (`Option<T>` → `T`).
#[must_use]
pub fn wrapped<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    if last_segment_name(ty)? == wrapper {
        first_type_arg(ty)
    } else {
        None
    }
}

/// `T` of `Option<T>`.
#[must_use]
pub fn option_inner(ty: &Type) -> Option<&Type> {
    wrapped(ty, "Option")
}

/// `T` of `Shared<T>`.
#[must_use]
pub fn shared_inner(ty: &Type) -> Option<&Type> {
    wrapped(ty, "Shared")
}
