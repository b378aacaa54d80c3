use matvar_testkit::{MI_DOUBLE, MI_INT32, MI_MATRIX, MI_UINT16, MatBuilder, Matrix, f64_bytes, opaque_payload, write_scratch};

use crate::mat::{ClassCode, MatError, MatFile, ScanOptions, TypeCode, ValueType, VariableKind};

fn sample_file() -> Vec<u8> {
	MatBuilder::new("MATLAB 5.0 MAT-file, sample")
		.matrix(&Matrix::new("scalar", ClassCode::Double.raw(), &[1, 1]).data(MI_DOUBLE, &f64_bytes(&[4.0])))
		.matrix(&Matrix::new("row", ClassCode::Int32.raw(), &[1, 4]).data(MI_INT32, &[0; 16]))
		.matrix(&Matrix::new("grid", ClassCode::Single.raw(), &[3, 4]))
		.matrix(&Matrix::new("label", ClassCode::Char.raw(), &[1, 2]).data(MI_UINT16, &[b'o', 0, b'k', 0]))
		.matrix(&Matrix::new("config", ClassCode::Struct.raw(), &[1, 1]))
		.matrix(&Matrix::new("people", ClassCode::Struct.raw(), &[1, 3]))
		.matrix(&Matrix::new("bag", ClassCode::Cell.raw(), &[1, 1]))
		.matrix(&Matrix::new("sp", ClassCode::Sparse.raw(), &[10, 10]).nzmax(3))
		.compressed(&[0x78, 0x9c, 0x01, 0x02, 0x03])
		.matrix(&Matrix::new("after", ClassCode::Uint8.raw(), &[2, 1]))
		.finish()
}

#[test]
fn scans_and_classifies_every_variable() {
	let file = MatFile::from_bytes(sample_file()).expect("file parses");
	let scan = file.variables(&ScanOptions::default()).expect("scan succeeds");

	let got: Vec<_> = scan
		.entries
		.iter()
		.map(|entry| (entry.header.name.as_str(), entry.classification.kind, entry.classification.value_type))
		.collect();

	assert_eq!(
		got,
		vec![
			("scalar", VariableKind::Element, ValueType::Double),
			("row", VariableKind::Vector, ValueType::Int32),
			("grid", VariableKind::MultiDimensionalArray, ValueType::Single),
			("label", VariableKind::Vector, ValueType::Utf16),
			("config", VariableKind::Struct, ValueType::Variable),
			("people", VariableKind::VariableArray, ValueType::Variable),
			("bag", VariableKind::CellArray, ValueType::Variable),
			("sp", VariableKind::Unsupported, ValueType::Unsupported),
			("", VariableKind::Unsupported, ValueType::Unsupported),
			("after", VariableKind::Vector, ValueType::Uint8),
		]
	);
	assert_eq!(scan.skipped, 0);
	assert!(!scan.truncated);
}

#[test]
fn compressed_entries_are_opaque() {
	let file = MatFile::from_bytes(sample_file()).expect("file parses");
	let scan = file.variables(&ScanOptions::default()).expect("scan succeeds");
	let compressed = scan
		.entries
		.iter()
		.find(|entry| entry.element_type == TypeCode::Compressed.raw())
		.expect("compressed entry present");

	assert_eq!(compressed.header.record.rank, 0);
	assert_eq!(compressed.header.record.data_type(), Some(TypeCode::Compressed));
	assert!(compressed.classification.is_unsupported());
}

#[test]
fn element_offsets_start_after_header() {
	let file = MatFile::from_bytes(sample_file()).expect("file parses");
	let first = file.elements().next().expect("one element").expect("element parses");
	assert_eq!(first.file_offset, 128);
	assert_eq!(first.tag.data_type, TypeCode::Matrix.raw());
	assert_eq!(first.file_offset % 8, 0);
}

#[test]
fn skips_non_matrix_elements() {
	let bytes = MatBuilder::new("mixed")
		.element(MI_DOUBLE, &f64_bytes(&[1.0, 2.0]))
		.matrix(&Matrix::new("kept", ClassCode::Double.raw(), &[2, 2]))
		.finish();
	let file = MatFile::from_bytes(bytes).expect("file parses");
	let scan = file.variables(&ScanOptions::default()).expect("scan succeeds");
	assert_eq!(scan.skipped, 1);
	assert_eq!(scan.entries.len(), 1);
	assert_eq!(scan.entries[0].header.name, "kept");
}

#[test]
fn honours_max_elements() {
	let file = MatFile::from_bytes(sample_file()).expect("file parses");
	let scan = file.variables(&ScanOptions { max_elements: 2 }).expect("scan succeeds");
	assert_eq!(scan.entries.len(), 2);
	assert!(scan.truncated);
}

#[test]
fn reports_oversized_element() {
	let bytes = MatBuilder::new("cut")
		.raw(&TypeCode::Matrix.raw().to_le_bytes())
		.raw(&4096_u32.to_le_bytes())
		.raw(&[0; 16])
		.finish();
	let file = MatFile::from_bytes(bytes).expect("header parses");
	let err = file.variables(&ScanOptions::default()).expect_err("oversized element should fail");
	assert!(matches!(err, MatError::ElementLenOutOfRange { at: 128, len: 4096, rem: 16 }));
}

#[test]
fn opens_files_from_disk() {
	let path = write_scratch("file_open_smoke.mat", &sample_file());
	let file = MatFile::open(&path).expect("file opens");
	assert_eq!(file.header.text, "MATLAB 5.0 MAT-file, sample");
	assert_eq!(file.elements().count(), 10);
}

#[test]
fn open_reports_missing_file_as_io() {
	let err = MatFile::open("/nonexistent/matvar/missing.mat").err().expect("missing file should fail");
	assert!(matches!(err, MatError::Io(_)));
}

#[test]
fn opaque_class_matrix_does_not_stop_the_scan() {
	let bytes = MatBuilder::new("opaque")
		.matrix(&Matrix::new("before", ClassCode::Double.raw(), &[1, 1]).data(MI_DOUBLE, &f64_bytes(&[1.0])))
		.element(MI_MATRIX, &opaque_payload("s", "string"))
		.matrix(&Matrix::new("after", ClassCode::Int8.raw(), &[1, 3]))
		.finish();
	let file = MatFile::from_bytes(bytes).expect("file parses");
	let scan = file.variables(&ScanOptions::default()).expect("scan succeeds");

	let got: Vec<_> = scan
		.entries
		.iter()
		.map(|entry| (entry.header.name.as_str(), entry.header.record.class_code, entry.classification.kind))
		.collect();
	assert_eq!(
		got,
		vec![
			("before", ClassCode::Double.raw(), VariableKind::Element),
			("s", ClassCode::Opaque.raw(), VariableKind::Unsupported),
			("after", ClassCode::Int8.raw(), VariableKind::Vector),
		]
	);
}

#[test]
fn malformed_matrix_header_becomes_unsupported_entry() {
	let bytes = MatBuilder::new("malformed")
		.matrix(&Matrix::new("neg", ClassCode::Double.raw(), &[2, -1]))
		.element(MI_MATRIX, &f64_bytes(&[0.0]))
		.matrix(&Matrix::new("ok", ClassCode::Double.raw(), &[2, 2]))
		.finish();
	let file = MatFile::from_bytes(bytes).expect("file parses");
	let scan = file.variables(&ScanOptions::default()).expect("scan succeeds");

	assert_eq!(scan.entries.len(), 3);
	assert!(scan.entries[0].classification.is_unsupported());
	assert!(scan.entries[1].classification.is_unsupported());
	assert_eq!(scan.entries[1].header.record.data_type(), Some(TypeCode::Matrix));
	assert_eq!(scan.entries[2].header.name, "ok");
	assert_eq!(scan.entries[2].classification.kind, VariableKind::MultiDimensionalArray);
}
