// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Accessor policy.
//!
//! Turns one [`PropertyInfo`] into the ordered list of accessors to
//! generate, each with an abstract contract the renderers follow.
//!
//! # Order
//!
//! `get`, then `add` and `remove` for collections or `set` for single
//! values.
//!
//! # Receivers
//!
//! | Property | Receiver | Where |
//! |----------|----------|-------|
//! | plain | `&self` / `&mut self` on the struct | inherent `impl` |
//! | bidirectional | `&self` on `Shared<Struct>` | `{Struct}Methods` trait |
//!
//! Bidirectional mutators have to reach the related object's inverse field
//! and hand it a handle to the owner, so they run on the owner's handle
//! rather than on the struct.
//!
//! A bidirectional getter cannot lend `&C` out of the handle. It borrows the
//! container as `Ref<'_, C>` instead, except for `Collection<T>` and single
//! values, where a clone is another handle to the same data.

use syn::{Ident, Type};

use super::{
    facts::{Access, DefaultValue},
    resolve::{ContainerFamily, PropertyInfo}
};
use crate::utils::naming;

/// Kind of accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorKind {
    /// Getter.
    Get,

    /// Setter.
    Set,

    /// Collection insert.
    Add,

    /// Collection removal.
    Remove
}

/// What the accessor is called on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Receiver {
    /// The struct itself.
    Owned,

    /// `Shared<Struct>`.
    Shared
}

/// Abstract contract of one accessor.
#[derive(Debug, Clone, PartialEq)]
pub enum Contract {
    /// Getter returning `&T` (`&C` for collections).
    Reference,

    /// Getter returning `Option<&T>` from optional storage.
    OptionalReference,

    /// Getter returning an owned `T` from optional storage, falling back to
    /// the literal.
    ValueOr(syn::Lit),

    /// Getter returning a clone of the stored value.
    Snapshot,

    /// Getter borrowing the stored container out of the shared handle.
    Borrowed,

    /// Setter storing its argument.
    Assign {
        /// Argument accepts the absent value.
        nullable: bool,

        /// Storage is `Option<_>` but the argument is not.
        wrap_some: bool,

        /// Argument type converted with `TryFrom` before storing.
        coerce_from: Option<Type>
    },

    /// Setter moving the owner between inverse sides.
    Relink {
        /// Inverse property on the related type.
        inverse: Ident
    },

    /// `add_*` / `remove_*` argument and optional inverse side.
    Member {
        /// Argument type.
        item: Type,

        /// Inverse property on the element type.
        inverse: Option<Ident>
    }
}

/// One accessor to generate.
#[derive(Debug, Clone)]
pub struct AccessorSpec {
    /// Accessor kind.
    pub kind: AccessorKind,

    /// Method name.
    pub method: Ident,

    /// Access level.
    pub access: Access,

    /// Receiver.
    pub receiver: Receiver,

    /// Contract.
    pub contract: Contract
}

/// Accessors for one property, in order.
///
/// # Errors
///
/// A `singular` noun that does not form a method name.
pub fn specify(info: &PropertyInfo) -> darling::Result<Vec<AccessorSpec>> {
    let receiver = if info.is_bidirectional() {
        Receiver::Shared
    } else {
        Receiver::Owned
    };
    let name = naming::plain_name(&info.ident);
    let span = info.span();
    let mut specs = Vec::new();

    if info.will_generate_get() {
        specs.push(AccessorSpec {
            kind: AccessorKind::Get,
            method: info.ident.clone(),
            access: info.get,
            receiver,
            contract: get_contract(info, receiver)
        });
    }

    if info.is_collection {
        let contract = Contract::Member {
            item: info.item.clone().unwrap_or_else(|| info.value.clone()),
            inverse: info.referenced.clone()
        };
        if info.will_generate_add() {
            specs.push(AccessorSpec {
                kind: AccessorKind::Add,
                method: naming::method_ident("add", &info.singular, span)?,
                access: info.add,
                receiver,
                contract: contract.clone()
            });
        }
        if info.will_generate_remove() {
            specs.push(AccessorSpec {
                kind: AccessorKind::Remove,
                method: naming::method_ident("remove", &info.singular, span)?,
                access: info.remove,
                receiver,
                contract
            });
        }
    } else if info.will_generate_set() {
        let contract = match &info.referenced {
            Some(inverse) => Contract::Relink {
                inverse: inverse.clone()
            },
            None => Contract::Assign {
                nullable: info.is_nullable,
                wrap_some: info.optional_storage && !info.is_nullable,
                coerce_from: info.coercion.clone()
            }
        };
        specs.push(AccessorSpec {
            kind: AccessorKind::Set,
            method: naming::method_ident("set", &name, span)?,
            access: info.set,
            receiver,
            contract
        });
    }

    Ok(specs)
}

fn get_contract(info: &PropertyInfo, receiver: Receiver) -> Contract {
    if receiver == Receiver::Shared {
        return if info.is_collection && info.container != Some(ContainerFamily::Collection) {
            Contract::Borrowed
        } else {
            Contract::Snapshot
        };
    }
    if !info.optional_storage {
        return Contract::Reference;
    }
    match &info.default {
        DefaultValue::Literal(lit) => Contract::ValueOr(lit.clone()),
        DefaultValue::Null => Contract::OptionalReference
    }
}
