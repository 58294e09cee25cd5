// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Shared utilities for code generation.
//!
//! # Submodules
//!
//! - [`docs`]: Doc comment extraction from field attributes
//! - [`marker`]: Generated code marker
//! - [`naming`]: Method and module naming (singular nouns, snake case)

pub mod docs;
pub mod marker;
pub mod naming;
