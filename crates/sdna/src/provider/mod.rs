// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Introspection boundary and catalog build pipeline.
//!
//!
//! The core never inspects a compiler's type system directly. An external
//! provider describes each record type as plain facts — name, total size,
//! and per-field layout numbers plus pointer/array shape — behind the narrow
//! [`RecordProvider`] trait, so the classifier, builder, and encoder can be
//! driven by a synthetic provider in tests just as well as by a real
//! frontend.
//!
//! Data flows one way: provider facts -> classifier -> builder -> catalog.
//! Each record is processed atomically, strictly sequentially.

mod memory;

pub use memory::MemoryProvider;

use crate::catalog::{CatalogError, FieldInfo, StructBuilder, TypeCatalog};
use crate::classify::{classify_field, ClassifyError, FieldFacts};
use std::fmt;

/// Description of one record (struct-like) type, as supplied by a provider.
///
/// The provider's numbers are trusted verbatim; the core never re-derives
/// size, alignment, or offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDescription {
    /// Record type name.
    pub name: String,

    /// Total byte size of the record.
    pub size: u32,

    /// Field facts, in declaration order.
    pub fields: Vec<RecordField>,
}

/// Per-field facts within a [`RecordDescription`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordField {
    /// Field identifier.
    pub name: String,

    /// Byte offset within the record.
    pub offset: u32,

    /// Required alignment in bytes.
    pub align: u32,

    /// Declared type, size, and shape facts for classification.
    pub facts: FieldFacts,
}

/// Narrow interface over a type-introspection source.
pub trait RecordProvider {
    /// The record descriptions of this run, in traversal order.
    fn records(&self) -> &[RecordDescription];
}

/// Catalog build failure modes.
#[derive(Debug)]
pub enum BuildError {
    /// Appending to the catalog failed; the run is aborted.
    Catalog(CatalogError),
    /// A field's facts were internally inconsistent.
    Classify {
        /// Record being processed.
        struct_name: String,
        /// Field being classified.
        field_name: String,
        /// Underlying classification error.
        source: ClassifyError,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::Catalog(e) => write!(f, "catalog build failed: {e}"),
            BuildError::Classify {
                struct_name,
                field_name,
                source,
            } => write!(f, "classifying `{struct_name}.{field_name}`: {source}"),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::Catalog(e) => Some(e),
            BuildError::Classify { source, .. } => Some(source),
        }
    }
}

impl From<CatalogError> for BuildError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

/// Build a catalog from every record the provider describes.
///
/// Records with an empty name are skipped with a warning (compiler builtins
/// and anonymous declarations produce these). Fields whose byte range falls
/// outside the record are passed through but logged; see
/// [`TypeCatalog::validate`].
pub fn build_catalog(provider: &dyn RecordProvider) -> Result<TypeCatalog, BuildError> {
    let mut catalog = TypeCatalog::new();
    let mut builder = StructBuilder::new(&mut catalog);

    for record in provider.records() {
        if record.name.is_empty() {
            log::warn!("skipping record with empty name ({} fields)", record.fields.len());
            continue;
        }

        let struct_handle = builder.add_struct(&record.name)?;
        builder.set_struct_size(struct_handle, record.size);

        for field in &record.fields {
            let classified =
                classify_field(&field.facts).map_err(|source| BuildError::Classify {
                    struct_name: record.name.clone(),
                    field_name: field.name.clone(),
                    source,
                })?;

            let field_handle = builder.add_field(struct_handle, &field.name)?;
            builder.set_field_info(
                field_handle,
                FieldInfo {
                    type_name: classified.type_name,
                    offset: field.offset,
                    size: field.facts.total_size,
                    align: field.align,
                    array: classified.array,
                    flags: classified.flags,
                },
            );
        }
    }

    for violation in catalog.validate() {
        log::warn!(
            "field `{}.{}` ends at byte {} past struct size {}",
            violation.struct_name,
            violation.field_name,
            violation.field_end,
            violation.struct_size
        );
    }

    Ok(catalog)
}
