// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # SDNA - binary struct-layout reflection catalogs
//!
//! Builds a flat, binary "reflection catalog" describing the memory layout
//! of a set of record types — field names, canonical types, byte offsets,
//! sizes, alignments, and array/pointer shape — and serializes it to a
//! compact, fixed-layout file. A catalog lets a separate runtime read and
//! write instances of those structures across builds or architectures
//! without embedding the original type declarations.
//!
//! ## Quick Start
//!
//! ```rust
//! use sdna::{
//!     build_catalog, encode_catalog, FieldFacts, FieldShape, MemoryProvider,
//!     RecordDescription, RecordField,
//! };
//!
//! let provider = MemoryProvider::from_records(vec![RecordDescription {
//!     name: "Vec3".into(),
//!     size: 12,
//!     fields: ["x", "y", "z"]
//!         .iter()
//!         .enumerate()
//!         .map(|(i, name)| RecordField {
//!             name: (*name).into(),
//!             offset: 4 * i as u32,
//!             align: 4,
//!             facts: FieldFacts {
//!                 type_name: "float".into(),
//!                 total_size: 4,
//!                 shape: FieldShape::Scalar,
//!             },
//!         })
//!         .collect(),
//! }]);
//!
//! let catalog = build_catalog(&provider).expect("build");
//! let bytes = encode_catalog(&catalog).expect("encode");
//! assert_eq!(&bytes[..4], b"SDNA");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! provider facts -> classifier -> builder -> catalog -> encoder -> bytes
//! ```
//!
//! One-way pipeline, fully synchronous: one producer builds the entire
//! catalog before any serialization begins. The unit of work is "run to
//! completion or fail" — no retries, no partial output.
//!
//! ## Modules Overview
//!
//! - [`catalog`] - catalog data model, bounded names, append-only builder
//! - [`classify`] - per-field classification from raw introspection facts
//! - [`codec`] - binary encoder, symmetric decoder, file output
//! - [`provider`] - introspection boundary and the build pipeline

/// Catalog data model (entries, flags, handles) and the append-only builder.
pub mod catalog;
/// Field classification from raw facts to normalized records.
pub mod classify;
/// Binary catalog format: encoder, decoder, file output.
pub mod codec;
/// Introspection provider boundary and catalog build pipeline.
pub mod provider;

pub use catalog::{
    BoundedName, CatalogError, ExtentViolation, FieldEntry, FieldFlags, FieldHandle, FieldInfo,
    StructBuilder, StructEntry, StructHandle, TypeCatalog, MAX_NAME_LEN,
};
pub use classify::{
    classify_field, ArrayElement, ClassifiedField, ClassifyError, FieldFacts, FieldShape,
};
pub use codec::{
    decode_catalog, encode_catalog, write_catalog, DecodeError, EncodeError, OutputError,
    CATALOG_MAGIC,
};
pub use provider::{
    build_catalog, BuildError, MemoryProvider, RecordDescription, RecordField, RecordProvider,
};
