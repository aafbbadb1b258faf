// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Record manifest: the file format feeding the generator.
//!
//! A manifest is the serialized form of the introspection facts a compiler
//! frontend would report — record names, sizes, and per-field layout plus
//! pointer/array shape. JSON and YAML are both accepted; the format is
//! picked from the file extension, defaulting to JSON.
//!
//! ```json
//! {
//!   "records": [
//!     {
//!       "name": "Node",
//!       "size": 8,
//!       "fields": [
//!         { "name": "next", "type": "Node *", "offset": 0, "size": 8,
//!           "align": 8, "pointer": { "pointee": "Node" } }
//!       ]
//!     }
//!   ]
//! }
//! ```

use anyhow::Context;
use sdna::{ArrayElement, FieldFacts, FieldShape, RecordDescription, RecordField};
use serde::Deserialize;
use std::path::Path;

/// Top-level manifest document.
#[derive(Debug, Deserialize)]
pub struct Manifest {
    /// Record declarations, in the order they should enter the catalog.
    pub records: Vec<ManifestRecord>,
}

/// One record declaration.
#[derive(Debug, Deserialize)]
pub struct ManifestRecord {
    pub name: String,
    pub size: u32,
    #[serde(default)]
    pub fields: Vec<ManifestField>,
}

/// One field declaration.
///
/// `pointer` and `array` mirror the shape facts of the introspection
/// boundary. When both are present the pointer shape wins, matching the
/// classifier's precedence for fields that are themselves pointers.
#[derive(Debug, Deserialize)]
pub struct ManifestField {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub offset: u32,
    pub size: u32,
    pub align: u32,
    #[serde(default)]
    pub pointer: Option<ManifestPointer>,
    #[serde(default)]
    pub array: Option<ManifestArray>,
}

/// Pointer shape facts.
#[derive(Debug, Deserialize)]
pub struct ManifestPointer {
    /// Name of the pointed-to type (or function description).
    pub pointee: String,
    /// True for pointers to functions.
    #[serde(default)]
    pub function: bool,
}

/// Array shape facts, given for the innermost element (the frontend has
/// already unwrapped nested dimensions).
#[derive(Debug, Deserialize)]
pub struct ManifestArray {
    /// Innermost element type name; the pointee name when
    /// `element_is_pointer` is set.
    pub element: String,
    /// Byte size of one innermost element.
    pub element_size: u32,
    /// True when the elements are pointers.
    #[serde(default)]
    pub element_is_pointer: bool,
}

/// Load a manifest from disk, picking the format from the extension.
pub fn load_manifest(path: &Path) -> anyhow::Result<Manifest> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading manifest {}", path.display()))?;

    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    );
    let manifest = if is_yaml {
        serde_yaml::from_str(&text)
            .with_context(|| format!("parsing YAML manifest {}", path.display()))?
    } else {
        serde_json::from_str(&text)
            .with_context(|| format!("parsing JSON manifest {}", path.display()))?
    };
    Ok(manifest)
}

/// Convert a parsed manifest into provider record descriptions.
pub fn to_records(manifest: Manifest) -> Vec<RecordDescription> {
    manifest
        .records
        .into_iter()
        .map(|record| RecordDescription {
            name: record.name,
            size: record.size,
            fields: record.fields.into_iter().map(to_field).collect(),
        })
        .collect()
}

fn to_field(field: ManifestField) -> RecordField {
    let shape = match (field.pointer, field.array) {
        (Some(pointer), _) => FieldShape::Pointer {
            pointee: pointer.pointee,
            function: pointer.function,
        },
        (None, Some(array)) => FieldShape::Array {
            element: if array.element_is_pointer {
                ArrayElement::Pointer {
                    pointee: array.element,
                    size: array.element_size,
                }
            } else {
                ArrayElement::Value {
                    type_name: array.element,
                    size: array.element_size,
                }
            },
        },
        (None, None) => FieldShape::Scalar,
    };

    RecordField {
        name: field.name,
        offset: field.offset,
        align: field.align,
        facts: FieldFacts {
            type_name: field.type_name,
            total_size: field.size,
            shape,
        },
    }
}
