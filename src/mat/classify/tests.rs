use crate::mat::{ClassCode, Classification, MatError, MetadataRecord, TypeCode, ValueType, VariableKind, classify, raw_codes, value_type_for};

fn record(dims: &[usize], class: ClassCode, data_type: TypeCode) -> MetadataRecord {
	MetadataRecord::new(dims.to_vec(), class, data_type)
}

fn kind_of(record: &MetadataRecord) -> VariableKind {
	classify(Some(record)).expect("record classifies").kind
}

#[test]
fn missing_record_is_a_hard_error() {
	let err = classify(None).expect_err("absent record must fail");
	assert!(matches!(err, MatError::MissingRecord));
}

#[test]
fn rank_below_two_is_unsupported_regardless_of_codes() {
	for dims in [&[][..], &[1][..], &[7][..]] {
		for (class, data_type) in [
			(ClassCode::Double, TypeCode::Double),
			(ClassCode::Cell, TypeCode::Cell),
			(ClassCode::Struct, TypeCode::Struct),
		] {
			let result = classify(Some(&record(dims, class, data_type))).expect("classifies");
			assert_eq!(result.kind, VariableKind::Unsupported, "dims={dims:?} class={class:?}");
		}
	}
}

#[test]
fn opaque_classes_are_unsupported_for_any_shape() {
	for class in [ClassCode::Object, ClassCode::Sparse, ClassCode::Function, ClassCode::Opaque] {
		for dims in [&[1, 1][..], &[1, 5][..], &[3, 4, 2][..]] {
			let result = classify(Some(&record(dims, class, TypeCode::Double))).expect("classifies");
			assert_eq!(result.kind, VariableKind::Unsupported, "class={class:?} dims={dims:?}");
			assert_eq!(result.value_type, ValueType::Double);
		}
	}
}

#[test]
fn unsupported_data_types_yield_unsupported_verdict() {
	for data_type in [TypeCode::Compressed, TypeCode::Function, TypeCode::Unknown] {
		let result = classify(Some(&record(&[2, 2], ClassCode::Double, data_type))).expect("classifies");
		assert_eq!(result, Classification::new(VariableKind::Unsupported, ValueType::Unsupported));
	}
}

#[test]
fn unrecognized_type_code_is_unsupported() {
	let record = MetadataRecord::from_raw(2, vec![1, 1], ClassCode::Double.raw(), 8).expect("record builds");
	let result = classify(Some(&record)).expect("classifies");
	assert_eq!(result, Classification::new(VariableKind::Unsupported, ValueType::Unsupported));
	assert_eq!(value_type_for(TypeCode::from_raw(99)), ValueType::Unsupported);
}

#[test]
fn unrecognized_class_code_falls_through_to_shape() {
	let record = MetadataRecord::from_raw(2, vec![1, 4], 42, TypeCode::Int32.raw()).expect("record builds");
	assert_eq!(kind_of(&record), VariableKind::Vector);
}

#[test]
fn cell_precedes_scalar_shape() {
	assert_eq!(kind_of(&record(&[1, 1], ClassCode::Cell, TypeCode::Cell)), VariableKind::CellArray);
	assert_eq!(kind_of(&record(&[1, 1], ClassCode::Cell, TypeCode::Double)), VariableKind::CellArray);
	assert_eq!(kind_of(&record(&[1, 1], ClassCode::Double, TypeCode::Cell)), VariableKind::CellArray);
	assert_eq!(kind_of(&record(&[4, 2], ClassCode::Cell, TypeCode::Cell)), VariableKind::CellArray);
}

#[test]
fn scalar_shape_disambiguates_on_type_marker() {
	assert_eq!(kind_of(&record(&[1, 1], ClassCode::Struct, TypeCode::Struct)), VariableKind::Struct);
	assert_eq!(kind_of(&record(&[1, 1], ClassCode::Double, TypeCode::Double)), VariableKind::Element);
	assert_eq!(kind_of(&record(&[1, 1, 1], ClassCode::Int8, TypeCode::Int8)), VariableKind::Element);
}

#[test]
fn scalar_shaped_array_marker_is_variable_array() {
	// Known edge case: a 1x1 record that is neither cell nor struct but wraps an array payload.
	for data_type in [TypeCode::Array, TypeCode::Matrix] {
		let result = classify(Some(&record(&[1, 1], ClassCode::Double, data_type))).expect("classifies");
		assert_eq!(result, Classification::new(VariableKind::VariableArray, ValueType::Variable));
	}
}

#[test]
fn non_scalar_nested_markers_are_variable_arrays() {
	for data_type in [TypeCode::Struct, TypeCode::Array, TypeCode::Matrix] {
		assert_eq!(kind_of(&record(&[1, 3], ClassCode::Struct, data_type)), VariableKind::VariableArray);
		assert_eq!(kind_of(&record(&[2, 2, 2], ClassCode::Struct, data_type)), VariableKind::VariableArray);
	}
}

#[test]
fn detects_vectors_on_either_axis() {
	assert_eq!(kind_of(&record(&[1, 5], ClassCode::Double, TypeCode::Double)), VariableKind::Vector);
	assert_eq!(kind_of(&record(&[5, 1], ClassCode::Double, TypeCode::Double)), VariableKind::Vector);
	assert_eq!(kind_of(&record(&[1, 12], ClassCode::Char, TypeCode::Utf16)), VariableKind::Vector);
}

#[test]
fn detects_multi_dimensional_arrays() {
	assert_eq!(kind_of(&record(&[3, 4], ClassCode::Double, TypeCode::Double)), VariableKind::MultiDimensionalArray);
	assert_eq!(kind_of(&record(&[1, 5, 2], ClassCode::Single, TypeCode::Single)), VariableKind::MultiDimensionalArray);
	assert_eq!(kind_of(&record(&[1, 1, 3], ClassCode::Uint8, TypeCode::Uint8)), VariableKind::MultiDimensionalArray);
}

#[test]
fn empty_dimensions_are_not_scalar() {
	assert_eq!(kind_of(&record(&[0, 0], ClassCode::Double, TypeCode::Double)), VariableKind::MultiDimensionalArray);
	assert_eq!(kind_of(&record(&[1, 0], ClassCode::Double, TypeCode::Double)), VariableKind::Vector);
	assert_eq!(kind_of(&record(&[0, 1], ClassCode::Struct, TypeCode::Struct)), VariableKind::VariableArray);
}

#[test]
fn huge_dimensions_saturate_instead_of_overflowing() {
	let record = record(&[usize::MAX, 2, 3], ClassCode::Double, TypeCode::Double);
	assert_eq!(record.dimensions_product(), usize::MAX);
	assert_eq!(kind_of(&record), VariableKind::MultiDimensionalArray);
}

#[test]
fn forward_mapping_round_trips_through_classifier() {
	let shapes = [
		(VariableKind::Element, &[1, 1][..]),
		(VariableKind::Vector, &[1, 5][..]),
		(VariableKind::MultiDimensionalArray, &[3, 4][..]),
	];

	for (kind, dims) in shapes {
		for value_type in ValueType::SCALARS {
			let codes = raw_codes(kind, value_type).expect("scalar maps");
			let result = classify(Some(&record(dims, codes.class, codes.data_type))).expect("classifies");
			assert_eq!(result, Classification::new(kind, value_type), "{kind}/{value_type}");
		}
	}

	for (kind, dims) in [
		(VariableKind::Struct, &[1, 1][..]),
		(VariableKind::VariableArray, &[1, 3][..]),
		(VariableKind::CellArray, &[2, 2][..]),
		(VariableKind::CellArray, &[1, 1][..]),
	] {
		let codes = raw_codes(kind, ValueType::Variable).expect("container maps");
		let result = classify(Some(&record(dims, codes.class, codes.data_type))).expect("classifies");
		assert_eq!(result, Classification::new(kind, ValueType::Variable), "{kind}");
	}
}

#[test]
fn scalar_shaped_variable_array_is_lossy_on_round_trip() {
	// Known edge case: struct codes cannot tell a 1x1 struct array from a struct.
	let codes = raw_codes(VariableKind::VariableArray, ValueType::Variable).expect("maps");
	let result = classify(Some(&record(&[1, 1], codes.class, codes.data_type))).expect("classifies");
	assert_eq!(result.kind, VariableKind::Struct);
}
