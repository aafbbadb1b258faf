// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Symmetric catalog reader.
//!
//! Decodes a byte sequence produced by [`encode_catalog`] back into a
//! [`TypeCatalog`], for round-trip verification and catalog inspection.
//! The reader runs on the producer's byte order: a magic word that matches
//! in the reversed order is reported as a mismatch, not byte-swapped.
//!
//! [`encode_catalog`]: super::encode_catalog

use super::CATALOG_MAGIC;
use crate::catalog::{BoundedName, FieldEntry, FieldFlags, StructEntry, TypeCatalog};
use std::convert::TryFrom;
use std::fmt;

/// Decoder failure modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Input ended before the expected data.
    UnexpectedEof {
        /// What was being read when the input ran out.
        context: &'static str,
    },
    /// The leading word is not the catalog magic in either byte order.
    BadMagic {
        /// The four bytes actually found.
        found: [u8; 4],
    },
    /// The magic matched the reversed byte order: the catalog was produced
    /// on a machine with the opposite endianness.
    ByteOrderMismatch,
    /// A count column held a negative value.
    NegativeCount {
        /// Which count was negative.
        context: &'static str,
    },
    /// A count column exceeded the decoder's sanity cap.
    CountTooLarge {
        /// Which count overflowed.
        context: &'static str,
        /// The decoded value.
        count: usize,
    },
    /// A name was not valid UTF-8.
    InvalidString,
    /// Trailing bytes after the last struct entry.
    TrailingBytes {
        /// Number of unconsumed bytes.
        remaining: usize,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::UnexpectedEof { context } => {
                write!(f, "unexpected end of input reading {context}")
            }
            DecodeError::BadMagic { found } => {
                write!(f, "bad magic {found:02X?}, not a catalog file")
            }
            DecodeError::ByteOrderMismatch => {
                write!(f, "catalog was produced with the opposite byte order")
            }
            DecodeError::NegativeCount { context } => write!(f, "negative {context}"),
            DecodeError::CountTooLarge { context, count } => {
                write!(f, "{context} {count} exceeds decoder limit")
            }
            DecodeError::InvalidString => write!(f, "name is not valid UTF-8"),
            DecodeError::TrailingBytes { remaining } => {
                write!(f, "{remaining} trailing bytes after last struct entry")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Decode a serialized catalog.
pub fn decode_catalog(src: &[u8]) -> Result<TypeCatalog, DecodeError> {
    let mut offset = 0;
    read_magic(src, &mut offset)?;

    let struct_count = read_count(src, &mut offset, "struct count")?;
    let mut catalog = TypeCatalog::new();
    for _ in 0..struct_count {
        let entry = decode_struct(src, &mut offset)?;
        catalog.structs.push(entry);
    }

    if offset != src.len() {
        return Err(DecodeError::TrailingBytes {
            remaining: src.len() - offset,
        });
    }
    Ok(catalog)
}

fn decode_struct(src: &[u8], offset: &mut usize) -> Result<StructEntry, DecodeError> {
    let name = read_cstring(src, offset, "struct name")?;
    let size = read_u32(src, offset, "struct size")?;

    let field_count = read_count(src, offset, "field count")?;
    let mut fields = Vec::with_capacity(field_count);
    for _ in 0..field_count {
        fields.push(decode_field(src, offset)?);
    }

    Ok(StructEntry { name, size, fields })
}

fn decode_field(src: &[u8], offset: &mut usize) -> Result<FieldEntry, DecodeError> {
    Ok(FieldEntry {
        name: read_cstring(src, offset, "field name")?,
        type_name: read_cstring(src, offset, "field type")?,
        offset: read_u32(src, offset, "field offset")?,
        size: read_u32(src, offset, "field size")?,
        align: read_u32(src, offset, "field align")?,
        array: read_u32(src, offset, "field array")?,
        flags: FieldFlags(read_u32(src, offset, "field flags")?),
    })
}

/// Read the magic word, distinguishing a foreign byte order from garbage.
fn read_magic(src: &[u8], offset: &mut usize) -> Result<(), DecodeError> {
    let Some(word) = src.get(*offset..*offset + 4) else {
        return Err(DecodeError::UnexpectedEof { context: "magic" });
    };
    let mut found = [0u8; 4];
    found.copy_from_slice(word);
    *offset += 4;

    if found == CATALOG_MAGIC {
        return Ok(());
    }
    let mut reversed = found;
    reversed.reverse();
    if reversed == CATALOG_MAGIC {
        return Err(DecodeError::ByteOrderMismatch);
    }
    Err(DecodeError::BadMagic { found })
}

/// Read a NUL-terminated string (the terminator is consumed).
fn read_cstring(
    src: &[u8],
    offset: &mut usize,
    context: &'static str,
) -> Result<BoundedName, DecodeError> {
    let rest = &src[*offset..];
    let Some(nul) = rest.iter().position(|&b| b == 0) else {
        return Err(DecodeError::UnexpectedEof { context });
    };
    let s = std::str::from_utf8(&rest[..nul]).map_err(|_| DecodeError::InvalidString)?;
    *offset += nul + 1;
    Ok(BoundedName::new(s))
}

/// Read a 32-bit word in the producer's native byte order.
fn read_u32(src: &[u8], offset: &mut usize, context: &'static str) -> Result<u32, DecodeError> {
    let Some(word) = src.get(*offset..*offset + 4) else {
        return Err(DecodeError::UnexpectedEof { context });
    };
    let bytes = <[u8; 4]>::try_from(word).map_err(|_| DecodeError::UnexpectedEof { context })?;
    *offset += 4;
    Ok(u32::from_ne_bytes(bytes))
}

/// Cap on decoded entry counts; prevents allocation bombs from malformed
/// input while staying far beyond any legitimate catalog.
const MAX_ENTRY_COUNT: usize = 1_000_000;

/// Read a count column, rejecting negative and absurd values.
fn read_count(
    src: &[u8],
    offset: &mut usize,
    context: &'static str,
) -> Result<usize, DecodeError> {
    let raw = read_u32(src, offset, context)? as i32;
    let count = usize::try_from(raw).map_err(|_| DecodeError::NegativeCount { context })?;
    if count > MAX_ENTRY_COUNT {
        return Err(DecodeError::CountTooLarge { context, count });
    }
    Ok(count)
}
