// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types for catalog mutation.

use std::fmt;

/// Catalog mutation failure modes.
///
/// Growth failure is fatal to the whole run: there is no meaningful partial
/// catalog once an append has failed mid-struct, so callers abort instead of
/// serializing past the failure.
#[derive(Debug)]
pub enum CatalogError {
    /// Growing the struct or field sequence failed.
    AllocationFailure {
        /// Which sequence failed to grow (e.g. "struct entries").
        context: &'static str,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::AllocationFailure { context } => {
                write!(f, "allocation failure growing {context}")
            }
        }
    }
}

impl std::error::Error for CatalogError {}
