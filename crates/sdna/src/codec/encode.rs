// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Single-pass catalog serialization.
//!
//! Walks the catalog in insertion order and appends the exact output byte
//! sequence; purely a formatting concern, no branching on content beyond
//! the walk itself.

use super::CATALOG_MAGIC;
use crate::catalog::{FieldEntry, StructEntry, TypeCatalog};
use std::convert::TryFrom;
use std::fmt;

/// Encoder failure modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// An entry count exceeded the signed 32-bit count column.
    CountOverflow {
        /// Which count overflowed (e.g. "struct count").
        context: &'static str,
    },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::CountOverflow { context } => {
                write!(f, "{context} exceeds the 32-bit count column")
            }
        }
    }
}

impl std::error::Error for EncodeError {}

/// Serialize a finished catalog to its exact byte sequence.
pub fn encode_catalog(catalog: &TypeCatalog) -> Result<Vec<u8>, EncodeError> {
    let mut buf = Vec::new();

    // Can be read back as a 32-bit word to recognize the byte order.
    write_word(&mut buf, &CATALOG_MAGIC);

    write_count(&mut buf, catalog.structs.len(), "struct count")?;
    for entry in &catalog.structs {
        encode_struct(&mut buf, entry)?;
    }

    log::debug!(
        "encoded catalog: {} structs, {} bytes",
        catalog.structs.len(),
        buf.len()
    );
    Ok(buf)
}

fn encode_struct(buf: &mut Vec<u8>, entry: &StructEntry) -> Result<(), EncodeError> {
    write_cstring(buf, entry.name.as_str());
    write_u32(buf, entry.size);

    write_count(buf, entry.fields.len(), "field count")?;
    for field in &entry.fields {
        encode_field(buf, field);
    }
    Ok(())
}

fn encode_field(buf: &mut Vec<u8>, field: &FieldEntry) {
    write_cstring(buf, field.name.as_str());
    write_cstring(buf, field.type_name.as_str());
    write_u32(buf, field.offset);
    write_u32(buf, field.size);
    write_u32(buf, field.align);
    write_u32(buf, field.array);
    write_u32(buf, field.flags.0);
}

/// Append raw bytes with no terminator.
fn write_word(buf: &mut Vec<u8>, word: &[u8]) {
    buf.extend_from_slice(word);
}

/// Append string bytes plus one NUL terminator.
fn write_cstring(buf: &mut Vec<u8>, value: &str) {
    buf.extend_from_slice(value.as_bytes());
    buf.push(0);
}

/// Append a 32-bit word in the producer's native byte order.
fn write_u32(buf: &mut Vec<u8>, value: u32) {
    buf.extend_from_slice(&value.to_ne_bytes());
}

/// Append an entry count, checking it fits the signed count column.
fn write_count(buf: &mut Vec<u8>, len: usize, context: &'static str) -> Result<(), EncodeError> {
    let count = i32::try_from(len).map_err(|_| EncodeError::CountOverflow { context })?;
    write_u32(buf, count as u32);
    Ok(())
}
