// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use super::*;

fn scalar(type_name: &str, size: u32) -> FieldFacts {
    FieldFacts {
        type_name: type_name.into(),
        total_size: size,
        shape: FieldShape::Scalar,
    }
}

#[test]
fn scalar_field_keeps_declared_type() {
    let facts = scalar("float", 4);
    let classified = classify_field(&facts).expect("classify");
    assert_eq!(classified.type_name, "float");
    assert_eq!(classified.array, 1);
    assert_eq!(classified.flags, FieldFlags::empty());
}

#[test]
fn aggregate_field_is_classified_like_a_scalar() {
    let facts = scalar("Vec3", 12);
    let classified = classify_field(&facts).expect("classify");
    assert_eq!(classified.type_name, "Vec3");
    assert_eq!(classified.array, 1);
    assert_eq!(classified.flags, FieldFlags::empty());
}

#[test]
fn pointer_field_stores_pointee_name() {
    let facts = FieldFacts {
        type_name: "Node *".into(),
        total_size: 8,
        shape: FieldShape::Pointer {
            pointee: "Node".into(),
            function: false,
        },
    };
    let classified = classify_field(&facts).expect("classify");
    assert_eq!(classified.type_name, "Node");
    assert_eq!(classified.array, 1);
    assert!(classified.flags.contains(FieldFlags::IS_POINTER));
    assert!(!classified.flags.contains(FieldFlags::IS_FUNCTION));
}

#[test]
fn function_pointer_sets_both_pointer_flags() {
    let facts = FieldFacts {
        type_name: "void (*)(int)".into(),
        total_size: 8,
        shape: FieldShape::Pointer {
            pointee: "void (int)".into(),
            function: true,
        },
    };
    let classified = classify_field(&facts).expect("classify");
    assert_eq!(classified.type_name, "void (int)");
    assert_eq!(classified.array, 1);
    assert!(classified.flags.contains(FieldFlags::IS_POINTER));
    assert!(classified.flags.contains(FieldFlags::IS_FUNCTION));
}

#[test]
fn pointer_to_array_type_stays_a_pointer() {
    // A pointer whose pointee is an array type must not take the array
    // branch: multiplicity stays 1 even though the pointee is `int[4]`.
    let facts = FieldFacts {
        type_name: "int (*)[4]".into(),
        total_size: 8,
        shape: FieldShape::Pointer {
            pointee: "int[4]".into(),
            function: false,
        },
    };
    let classified = classify_field(&facts).expect("classify");
    assert_eq!(classified.array, 1);
    assert!(classified.flags.contains(FieldFlags::IS_POINTER));
}

#[test]
fn scalar_array_divides_total_by_element_size() {
    let facts = FieldFacts {
        type_name: "int[8]".into(),
        total_size: 32,
        shape: FieldShape::Array {
            element: ArrayElement::Value {
                type_name: "int".into(),
                size: 4,
            },
        },
    };
    let classified = classify_field(&facts).expect("classify");
    assert_eq!(classified.type_name, "int");
    assert_eq!(classified.array, 8);
    assert_eq!(classified.flags, FieldFlags::empty());
}

#[test]
fn multi_dimensional_array_collapses_to_one_multiplicity() {
    // int rows[4][2]: nested dimension, innermost element int of size 4.
    let facts = FieldFacts {
        type_name: "int[4][2]".into(),
        total_size: 32,
        shape: FieldShape::Array {
            element: ArrayElement::Nested(Box::new(ArrayElement::Value {
                type_name: "int".into(),
                size: 4,
            })),
        },
    };
    let classified = classify_field(&facts).expect("classify");
    assert_eq!(classified.type_name, "int");
    assert_eq!(classified.array, 8);
    assert_eq!(classified.flags, FieldFlags::empty());
}

#[test]
fn deeply_nested_dimensions_unwrap_to_innermost() {
    // float grid[2][3][4] -> 24 elements of 4 bytes.
    let facts = FieldFacts {
        type_name: "float[2][3][4]".into(),
        total_size: 96,
        shape: FieldShape::Array {
            element: ArrayElement::Nested(Box::new(ArrayElement::Nested(Box::new(
                ArrayElement::Value {
                    type_name: "float".into(),
                    size: 4,
                },
            )))),
        },
    };
    let classified = classify_field(&facts).expect("classify");
    assert_eq!(classified.type_name, "float");
    assert_eq!(classified.array, 24);
}

#[test]
fn array_of_pointers_stores_element_pointee() {
    let facts = FieldFacts {
        type_name: "char *[4]".into(),
        total_size: 32,
        shape: FieldShape::Array {
            element: ArrayElement::Pointer {
                pointee: "char".into(),
                size: 8,
            },
        },
    };
    let classified = classify_field(&facts).expect("classify");
    assert_eq!(classified.type_name, "char");
    assert_eq!(classified.array, 4);
    assert!(classified.flags.contains(FieldFlags::IS_POINTER));
    assert!(!classified.flags.contains(FieldFlags::IS_FUNCTION));
}

#[test]
fn array_never_sets_the_reserved_array_flag() {
    let facts = FieldFacts {
        type_name: "short[6]".into(),
        total_size: 12,
        shape: FieldShape::Array {
            element: ArrayElement::Value {
                type_name: "short".into(),
                size: 2,
            },
        },
    };
    let classified = classify_field(&facts).expect("classify");
    assert!(!classified.flags.contains(FieldFlags::IS_ARRAY));
}

#[test]
fn zero_element_size_is_rejected() {
    let facts = FieldFacts {
        type_name: "Empty[4]".into(),
        total_size: 0,
        shape: FieldShape::Array {
            element: ArrayElement::Value {
                type_name: "Empty".into(),
                size: 0,
            },
        },
    };
    let err = classify_field(&facts).expect_err("zero element size");
    assert!(matches!(err, ClassifyError::ZeroElementSize { .. }));
}

#[test]
fn indivisible_array_size_is_rejected() {
    let facts = FieldFacts {
        type_name: "odd[3]".into(),
        total_size: 10,
        shape: FieldShape::Array {
            element: ArrayElement::Value {
                type_name: "int".into(),
                size: 4,
            },
        },
    };
    let err = classify_field(&facts).expect_err("indivisible size");
    assert!(matches!(
        err,
        ClassifyError::SizeNotDivisible {
            total_size: 10,
            element_size: 4,
            ..
        }
    ));
}
