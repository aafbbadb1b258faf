// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Append-only mutation of a [`TypeCatalog`].
//!
//! The builder is the only writer of a catalog: it appends struct entries,
//! appends zero-initialized field entries, and fills field entries with
//! classified info. Handles are indices, so reallocation of the underlying
//! storage during growth never invalidates a handle already handed out.

use super::errors::CatalogError;
use super::model::{FieldEntry, FieldFlags, FieldHandle, StructEntry, StructHandle, TypeCatalog};
use super::name::BoundedName;

/// Classified field info written into a field entry by
/// [`StructBuilder::set_field_info`].
#[derive(Debug, Clone, Copy)]
pub struct FieldInfo<'a> {
    /// Canonical type name (element type for arrays, pointee for pointers).
    pub type_name: &'a str,
    /// Byte offset within the struct.
    pub offset: u32,
    /// Total byte footprint, including all array elements.
    pub size: u32,
    /// Required alignment in bytes.
    pub align: u32,
    /// Element multiplicity (1 for non-array fields).
    pub array: u32,
    /// Shape bits.
    pub flags: FieldFlags,
}

/// Exclusive writer over a [`TypeCatalog`].
pub struct StructBuilder<'a> {
    catalog: &'a mut TypeCatalog,
}

impl<'a> StructBuilder<'a> {
    /// Wrap a catalog for appending.
    pub fn new(catalog: &'a mut TypeCatalog) -> Self {
        Self { catalog }
    }

    /// Append a new zero-initialized struct entry with the given name.
    ///
    /// The name is truncated to the bounded maximum if over-long. Fails only
    /// when the entry sequence cannot grow; the failure must abort the run.
    pub fn add_struct(&mut self, name: &str) -> Result<StructHandle, CatalogError> {
        self.catalog
            .structs
            .try_reserve(1)
            .map_err(|_| CatalogError::AllocationFailure {
                context: "struct entries",
            })?;
        let index = self.catalog.structs.len();
        self.catalog.structs.push(StructEntry {
            name: BoundedName::new(name),
            size: 0,
            fields: Vec::new(),
        });
        Ok(StructHandle(index))
    }

    /// Record the total byte size of a struct entry.
    pub fn set_struct_size(&mut self, handle: StructHandle, size: u32) {
        self.catalog.structs[handle.0].size = size;
    }

    /// Append a new zero-initialized field entry to the given struct.
    ///
    /// The entry starts with multiplicity 1 and empty flags; its remaining
    /// columns are filled later by [`set_field_info`](Self::set_field_info).
    pub fn add_field(
        &mut self,
        handle: StructHandle,
        name: &str,
    ) -> Result<FieldHandle, CatalogError> {
        let entry = &mut self.catalog.structs[handle.0];
        entry
            .fields
            .try_reserve(1)
            .map_err(|_| CatalogError::AllocationFailure {
                context: "field entries",
            })?;
        let field_index = entry.fields.len();
        entry.fields.push(FieldEntry::zeroed(name));
        Ok(FieldHandle {
            struct_index: handle.0,
            field_index,
        })
    }

    /// Write classified info into a field entry.
    ///
    /// No validation happens here; extent checking is a separate, explicit
    /// pass ([`TypeCatalog::validate`]).
    pub fn set_field_info(&mut self, handle: FieldHandle, info: FieldInfo<'_>) {
        let field = &mut self.catalog.structs[handle.struct_index].fields[handle.field_index];
        field.type_name = BoundedName::new(info.type_name);
        field.offset = info.offset;
        field.size = info.size;
        field.align = info.align;
        field.array = info.array;
        field.flags = info.flags;
    }
}
