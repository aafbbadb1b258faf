// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Field classification: raw per-field facts to a normalized record.
//!
//!
//! The classifier derives the canonical type name, the element multiplicity,
//! and the flag bits for one field from the facts an introspection provider
//! reports about it. It is a pure computation with no access to the catalog.
//!
//! # Classification rules
//!
//! 1. Default: multiplicity 1, no flags.
//! 2. A field that is itself a pointer (or function pointer) stores the
//!    *pointee* name, never pointer syntax. This branch wins over the array
//!    branch: a pointer whose pointee happens to be an array type is still a
//!    pointer with multiplicity 1.
//! 3. An array unwraps nested dimensions down to the innermost element and
//!    collapses every dimension into one multiplicity number
//!    (`total_size / element_size`). An array of pointers stores the
//!    element's pointee name and sets the pointer flag.
//! 4. Anything else stores its own declared type name verbatim.
//!
//! Storing pointee/element names lets a downstream reader resolve
//! cross-struct references without re-parsing pointer or array syntax; the
//! multiplicity column lets it recompute footprints without re-deriving
//! element sizes.

use crate::catalog::FieldFlags;
use std::fmt;

#[cfg(test)]
mod tests;

/// Raw facts about one field, as reported by the introspection provider.
///
/// The provider's numbers are trusted; the classifier never re-derives
/// sizes, alignments, or offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFacts {
    /// The field's own declared type name.
    pub type_name: String,

    /// Total byte footprint of the field, including all array elements.
    pub total_size: u32,

    /// Pointer/array shape of the field.
    pub shape: FieldShape,
}

/// Shape of a field as declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldShape {
    /// Plain scalar or aggregate value.
    Scalar,

    /// Pointer or function pointer.
    Pointer {
        /// Name of the pointed-to type (or function description).
        pointee: String,
        /// True for pointers to functions.
        function: bool,
    },

    /// Fixed-size array, possibly nested.
    Array {
        /// The element of the outermost dimension.
        element: ArrayElement,
    },
}

/// Element of one array dimension.
///
/// Multi-dimensional arrays nest: `T x[2][3]` is an array whose element is
/// another array dimension whose element is a `T` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayElement {
    /// Innermost element is a plain value of the named type.
    Value {
        /// Element type name.
        type_name: String,
        /// Byte size of one element.
        size: u32,
    },

    /// Innermost element is a pointer.
    Pointer {
        /// Name of the pointed-to type.
        pointee: String,
        /// Byte size of one pointer element.
        size: u32,
    },

    /// A nested array dimension.
    Nested(Box<ArrayElement>),
}

/// Classifier output: the normalized columns of a field record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedField<'a> {
    /// Canonical type name (see module docs).
    pub type_name: &'a str,

    /// Element multiplicity; 1 for non-array fields.
    pub array: u32,

    /// Shape bits.
    pub flags: FieldFlags,
}

/// Internally inconsistent field facts.
///
/// Classification is total over well-formed facts; these arise only when the
/// provider reports numbers that contradict each other, and they abort the
/// run like any other build failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// An array element with byte size zero.
    ZeroElementSize {
        /// Declared type of the offending field.
        type_name: String,
    },
    /// An array whose total size is not a multiple of its element size.
    SizeNotDivisible {
        /// Declared type of the offending field.
        type_name: String,
        /// Reported total field size.
        total_size: u32,
        /// Reported innermost element size.
        element_size: u32,
    },
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifyError::ZeroElementSize { type_name } => {
                write!(f, "array field `{type_name}` reports zero element size")
            }
            ClassifyError::SizeNotDivisible {
                type_name,
                total_size,
                element_size,
            } => write!(
                f,
                "array field `{type_name}` size {total_size} is not a multiple of element size {element_size}"
            ),
        }
    }
}

impl std::error::Error for ClassifyError {}

/// Classify one field from its raw facts.
pub fn classify_field(facts: &FieldFacts) -> Result<ClassifiedField<'_>, ClassifyError> {
    match &facts.shape {
        // A field that is itself a pointer is never treated as an array,
        // even when the pointee is an array type.
        FieldShape::Pointer { pointee, function } => {
            let flags = if *function {
                FieldFlags::IS_POINTER.union(FieldFlags::IS_FUNCTION)
            } else {
                FieldFlags::IS_POINTER
            };
            Ok(ClassifiedField {
                type_name: pointee,
                array: 1,
                flags,
            })
        }
        FieldShape::Array { element } => classify_array(facts, element),
        FieldShape::Scalar => Ok(ClassifiedField {
            type_name: &facts.type_name,
            array: 1,
            flags: FieldFlags::empty(),
        }),
    }
}

/// Array branch: unwrap nested dimensions, collapse to one multiplicity.
fn classify_array<'a>(
    facts: &'a FieldFacts,
    element: &'a ArrayElement,
) -> Result<ClassifiedField<'a>, ClassifyError> {
    let (type_name, element_size, element_is_pointer) = innermost(element);

    // The element check only distinguishes plain pointers; an array of
    // function pointers is recorded with IS_POINTER alone.
    let flags = if element_is_pointer {
        FieldFlags::IS_POINTER
    } else {
        FieldFlags::empty()
    };

    if element_size == 0 {
        return Err(ClassifyError::ZeroElementSize {
            type_name: facts.type_name.clone(),
        });
    }
    if facts.total_size % element_size != 0 {
        return Err(ClassifyError::SizeNotDivisible {
            type_name: facts.type_name.clone(),
            total_size: facts.total_size,
            element_size,
        });
    }

    Ok(ClassifiedField {
        type_name,
        array: facts.total_size / element_size,
        flags,
    })
}

/// Find the simplest element type of nested array dimensions.
fn innermost(element: &ArrayElement) -> (&str, u32, bool) {
    match element {
        ArrayElement::Value { type_name, size } => (type_name, *size, false),
        ArrayElement::Pointer { pointee, size } => (pointee, *size, true),
        ArrayElement::Nested(inner) => innermost(inner),
    }
}
