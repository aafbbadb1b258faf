// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Catalog data model: struct entries, field entries, flags, handles.
//!
//!
//! A [`TypeCatalog`] is the ordered, append-only collection of struct layout
//! records built during one run. Insertion order is serialization order.
//! Handles are plain indices, so growing the underlying vectors never
//! invalidates a handle held by the builder.

use super::name::BoundedName;

// ============================================================================
// Flags
// ============================================================================

/// FieldFlags - shape bits persisted per field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct FieldFlags(pub u32);

impl FieldFlags {
    /// Field is a pointer. On an array field, the *elements* are pointers.
    pub const IS_POINTER: Self = Self(1 << 0);

    /// Reserved: array-ness is carried by the multiplicity column instead,
    /// so classification never sets this bit.
    pub const IS_ARRAY: Self = Self(1 << 1);

    /// Field is a pointer to a function.
    pub const IS_FUNCTION: Self = Self(1 << 2);

    /// Empty flags
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Check if flag is set
    pub const fn contains(self, flag: Self) -> bool {
        (self.0 & flag.0) != 0
    }

    /// Combine two flag sets
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

// ============================================================================
// Entries
// ============================================================================

/// One normalized field record of a struct entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEntry {
    /// Field identifier.
    pub name: BoundedName,

    /// Canonical type name: the element type for arrays, the pointee for
    /// pointers and function pointers, the declared type otherwise.
    pub type_name: BoundedName,

    /// Byte offset within the struct.
    pub offset: u32,

    /// Total byte footprint of the field, including all array elements.
    pub size: u32,

    /// Required alignment in bytes.
    pub align: u32,

    /// Element multiplicity; 1 for non-array fields. All array dimensions
    /// collapse into this one number.
    pub array: u32,

    /// Shape bits ([`FieldFlags`]).
    pub flags: FieldFlags,
}

impl FieldEntry {
    /// A zero-initialized entry with the given name.
    ///
    /// Multiplicity starts at 1 so single items can be multiplied.
    pub(super) fn zeroed(name: &str) -> Self {
        Self {
            name: BoundedName::new(name),
            type_name: BoundedName::new(""),
            offset: 0,
            size: 0,
            align: 0,
            array: 1,
            flags: FieldFlags::empty(),
        }
    }
}

/// One struct layout record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructEntry {
    /// Struct identifier.
    pub name: BoundedName,

    /// Total byte size of the struct.
    pub size: u32,

    /// Ordered field records, in declaration order.
    pub fields: Vec<FieldEntry>,
}

// ============================================================================
// Handles
// ============================================================================

/// Stable index-based handle to a struct entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructHandle(pub(super) usize);

/// Stable index-based handle to a field entry within a struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldHandle {
    pub(super) struct_index: usize,
    pub(super) field_index: usize,
}

// ============================================================================
// Catalog
// ============================================================================

/// A field whose byte range falls outside its struct, as reported by
/// [`TypeCatalog::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtentViolation {
    /// Owning struct name.
    pub struct_name: BoundedName,
    /// Offending field name.
    pub field_name: BoundedName,
    /// End of the field's byte range (`offset + size`).
    pub field_end: u64,
    /// Declared struct size.
    pub struct_size: u32,
}

/// The ordered, append-only catalog of struct layouts for one run.
///
/// Created empty, appended to by the builder, read-only to the encoder.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TypeCatalog {
    /// Struct entries in insertion order (the serialization order).
    pub structs: Vec<StructEntry>,
}

impl TypeCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of struct entries.
    pub fn len(&self) -> usize {
        self.structs.len()
    }

    /// True if no struct has been added yet.
    pub fn is_empty(&self) -> bool {
        self.structs.is_empty()
    }

    /// Look up a struct entry by handle.
    pub fn entry(&self, handle: StructHandle) -> &StructEntry {
        &self.structs[handle.0]
    }

    /// Look up a struct entry by name.
    pub fn find(&self, name: &str) -> Option<&StructEntry> {
        self.structs.iter().find(|s| s.name.as_str() == name)
    }

    /// Report every field whose byte range `[offset, offset + size)` is not
    /// contained in `[0, struct.size)`.
    ///
    /// The catalog passes such fields through unchanged (packed or inherited
    /// layouts from a real frontend can look out-of-range); callers wanting
    /// a strict catalog reject when this is non-empty.
    pub fn validate(&self) -> Vec<ExtentViolation> {
        let mut violations = Vec::new();
        for entry in &self.structs {
            for field in &entry.fields {
                let field_end = u64::from(field.offset) + u64::from(field.size);
                if field_end > u64::from(entry.size) {
                    violations.push(ExtentViolation {
                        struct_name: entry.name.clone(),
                        field_name: field.name.clone(),
                        field_end,
                        struct_size: entry.size,
                    });
                }
            }
        }
        violations
    }
}
