// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use super::*;
use crate::catalog::{
    FieldFlags, FieldInfo, StructBuilder, TypeCatalog, MAX_NAME_LEN,
};

fn vec3_catalog() -> TypeCatalog {
    let mut catalog = TypeCatalog::new();
    let mut builder = StructBuilder::new(&mut catalog);

    let s = builder.add_struct("Vec3").expect("add struct");
    builder.set_struct_size(s, 12);
    for (i, name) in ["x", "y", "z"].iter().enumerate() {
        let f = builder.add_field(s, name).expect("add field");
        builder.set_field_info(
            f,
            FieldInfo {
                type_name: "float",
                offset: 4 * i as u32,
                size: 4,
                align: 4,
                array: 1,
                flags: FieldFlags::empty(),
            },
        );
    }
    catalog
}

fn ne(value: u32) -> [u8; 4] {
    value.to_ne_bytes()
}

#[test]
fn encoded_catalog_starts_with_magic_and_count() {
    let bytes = encode_catalog(&vec3_catalog()).expect("encode");
    assert_eq!(&bytes[..4], b"SDNA");
    assert_eq!(&bytes[..4], &[0x53, 0x44, 0x4E, 0x41]);
    assert_eq!(&bytes[4..8], &ne(1));
}

#[test]
fn encoding_is_byte_exact() {
    let bytes = encode_catalog(&vec3_catalog()).expect("encode");

    let mut expected = Vec::new();
    expected.extend_from_slice(b"SDNA");
    expected.extend_from_slice(&ne(1)); // struct count
    expected.extend_from_slice(b"Vec3\0");
    expected.extend_from_slice(&ne(12)); // struct size
    expected.extend_from_slice(&ne(3)); // field count
    for (i, name) in ["x", "y", "z"].iter().enumerate() {
        expected.extend_from_slice(name.as_bytes());
        expected.push(0);
        expected.extend_from_slice(b"float\0");
        expected.extend_from_slice(&ne(4 * i as u32)); // offset
        expected.extend_from_slice(&ne(4)); // size
        expected.extend_from_slice(&ne(4)); // align
        expected.extend_from_slice(&ne(1)); // array
        expected.extend_from_slice(&ne(0)); // flags
    }

    assert_eq!(bytes, expected);
}

#[test]
fn empty_catalog_encodes_magic_and_zero_count() {
    let bytes = encode_catalog(&TypeCatalog::new()).expect("encode");
    assert_eq!(bytes.len(), 8);
    assert_eq!(&bytes[..4], b"SDNA");
    assert_eq!(&bytes[4..8], &ne(0));
}

#[test]
fn round_trip_preserves_every_column() {
    let mut catalog = TypeCatalog::new();
    let mut builder = StructBuilder::new(&mut catalog);

    let s = builder.add_struct("Mixed").expect("add struct");
    builder.set_struct_size(s, 48);
    let f = builder.add_field(s, "next").expect("add field");
    builder.set_field_info(
        f,
        FieldInfo {
            type_name: "Mixed",
            offset: 0,
            size: 8,
            align: 8,
            array: 1,
            flags: FieldFlags::IS_POINTER,
        },
    );
    let f = builder.add_field(s, "hooks").expect("add field");
    builder.set_field_info(
        f,
        FieldInfo {
            type_name: "void ()",
            offset: 8,
            size: 16,
            align: 8,
            array: 2,
            flags: FieldFlags::IS_POINTER.union(FieldFlags::IS_FUNCTION),
        },
    );
    let f = builder.add_field(s, "grid").expect("add field");
    builder.set_field_info(
        f,
        FieldInfo {
            type_name: "int",
            offset: 24,
            size: 24,
            align: 4,
            array: 6,
            flags: FieldFlags::empty(),
        },
    );

    let bytes = encode_catalog(&catalog).expect("encode");
    let decoded = decode_catalog(&bytes).expect("decode");
    assert_eq!(decoded, catalog);
}

#[test]
fn round_trip_preserves_insertion_order() {
    let mut catalog = TypeCatalog::new();
    let mut builder = StructBuilder::new(&mut catalog);
    for name in ["Zeta", "Alpha", "Mu"] {
        let s = builder.add_struct(name).expect("add struct");
        builder.set_struct_size(s, 4);
    }

    let bytes = encode_catalog(&catalog).expect("encode");
    let decoded = decode_catalog(&bytes).expect("decode");

    let names: Vec<&str> = decoded.structs.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Zeta", "Alpha", "Mu"]);
}

#[test]
fn truncated_name_occupies_bounded_slot() {
    let long: String = std::iter::repeat('q').take(200).collect();
    let mut catalog = TypeCatalog::new();
    let mut builder = StructBuilder::new(&mut catalog);
    let s = builder.add_struct(&long).expect("add struct");
    builder.set_struct_size(s, 4);

    let bytes = encode_catalog(&catalog).expect("encode");
    // magic + count, then the truncated name plus its terminator.
    let name_slot = &bytes[8..8 + MAX_NAME_LEN + 1];
    assert_eq!(name_slot[MAX_NAME_LEN], 0);
    assert!(name_slot[..MAX_NAME_LEN].iter().all(|&b| b == b'q'));

    let decoded = decode_catalog(&bytes).expect("decode");
    assert_eq!(decoded.structs[0].name.len(), MAX_NAME_LEN);
}

#[test]
fn decode_rejects_bad_magic() {
    let err = decode_catalog(b"XXXX\0\0\0\0").expect_err("bad magic");
    assert!(matches!(err, DecodeError::BadMagic { found: [b'X', _, _, _] }));
}

#[test]
fn decode_reports_opposite_byte_order() {
    let err = decode_catalog(b"ANDS\0\0\0\0").expect_err("reversed magic");
    assert_eq!(err, DecodeError::ByteOrderMismatch);
}

#[test]
fn decode_rejects_truncated_input() {
    let bytes = encode_catalog(&vec3_catalog()).expect("encode");
    let err = decode_catalog(&bytes[..bytes.len() - 3]).expect_err("truncated");
    assert!(matches!(err, DecodeError::UnexpectedEof { .. }));
}

#[test]
fn decode_rejects_trailing_bytes() {
    let mut bytes = encode_catalog(&vec3_catalog()).expect("encode");
    bytes.extend_from_slice(&[0xAA, 0xBB]);
    let err = decode_catalog(&bytes).expect_err("trailing");
    assert_eq!(err, DecodeError::TrailingBytes { remaining: 2 });
}

#[test]
fn decode_rejects_negative_count() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"SDNA");
    bytes.extend_from_slice(&(-1i32).to_ne_bytes());
    let err = decode_catalog(&bytes).expect_err("negative count");
    assert!(matches!(err, DecodeError::NegativeCount { .. }));
}

#[test]
fn decode_rejects_absurd_count() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"SDNA");
    bytes.extend_from_slice(&0x7FFF_FFFFu32.to_ne_bytes());
    let err = decode_catalog(&bytes).expect_err("absurd count");
    assert!(matches!(err, DecodeError::CountTooLarge { .. }));
}

#[test]
fn write_catalog_puts_exact_bytes_on_disk() {
    let bytes = encode_catalog(&vec3_catalog()).expect("encode");
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("catalog.dna");

    write_catalog(&path, &bytes).expect("write");
    let on_disk = std::fs::read(&path).expect("read back");
    assert_eq!(on_disk, bytes);
}

#[test]
fn write_catalog_overwrites_existing_content() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("catalog.dna");
    std::fs::write(&path, vec![0u8; 4096]).expect("pre-fill");

    let bytes = encode_catalog(&vec3_catalog()).expect("encode");
    write_catalog(&path, &bytes).expect("write");
    let on_disk = std::fs::read(&path).expect("read back");
    assert_eq!(on_disk, bytes);
}

#[test]
fn write_catalog_open_failure_is_distinct() {
    let dir = tempfile::tempdir().expect("tempdir");
    // The directory itself is not openable as a file.
    let err = write_catalog(dir.path(), b"SDNA").expect_err("open failure");
    assert!(matches!(err, OutputError::Open { .. }));
}
