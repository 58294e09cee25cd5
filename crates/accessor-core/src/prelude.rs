// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust
//! use accessor_core::prelude::*;
//!
//! let tags: Collection<String> = Collection::new();
//! assert!(tags.is_empty());
//! ```

pub use crate::{AccessorError, Collection, Container, InverseSide, Shared};
