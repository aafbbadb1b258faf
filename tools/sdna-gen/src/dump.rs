// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Human-readable catalog dump.

use anyhow::Context;
use sdna::{decode_catalog, FieldFlags, TypeCatalog};
use std::path::Path;

/// Decode a catalog file and print its contents.
pub fn dump_catalog(path: &Path) -> anyhow::Result<()> {
    let bytes =
        std::fs::read(path).with_context(|| format!("reading catalog {}", path.display()))?;
    let catalog = decode_catalog(&bytes)
        .with_context(|| format!("decoding catalog {}", path.display()))?;

    print_catalog(&catalog, bytes.len());
    Ok(())
}

fn print_catalog(catalog: &TypeCatalog, byte_len: usize) {
    println!("{} structs, {} bytes", catalog.len(), byte_len);

    for entry in &catalog.structs {
        println!();
        println!("{} (size {})", entry.name, entry.size);
        for field in &entry.fields {
            println!(
                "  {:<24} {:<24} off {:>5}  size {:>5}  align {:>3}  array {:>4}  {}",
                field.name.as_str(),
                field.type_name.as_str(),
                field.offset,
                field.size,
                field.align,
                field.array,
                flag_letters(field.flags),
            );
        }
    }
}

fn flag_letters(flags: FieldFlags) -> String {
    let mut letters = String::new();
    if flags.contains(FieldFlags::IS_POINTER) {
        letters.push('P');
    }
    if flags.contains(FieldFlags::IS_ARRAY) {
        letters.push('A');
    }
    if flags.contains(FieldFlags::IS_FUNCTION) {
        letters.push('F');
    }
    if letters.is_empty() {
        letters.push('-');
    }
    letters
}
