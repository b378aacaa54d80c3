use tracing::{debug, trace};

use crate::mat::{ClassCode, MatError, MetadataRecord, Result, TypeCode, ValueType, VariableKind};

/// Semantic reading of one metadata record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Classification {
	/// Inferred variable shape.
	pub kind: VariableKind,
	/// Value type derived from the data type code.
	pub value_type: ValueType,
}

impl Classification {
	/// Pair a kind with a value type.
	pub const fn new(kind: VariableKind, value_type: ValueType) -> Self {
		Self { kind, value_type }
	}

	/// Return true when the reader should skip this record.
	pub fn is_unsupported(&self) -> bool {
		self.kind == VariableKind::Unsupported
	}
}

/// Classify a record header into a variable kind and value type.
///
/// Exotic or malformed records yield an `Unsupported` kind rather than an error;
/// only an absent record is a hard failure.
pub fn classify(record: Option<&MetadataRecord>) -> Result<Classification> {
	let record = record.ok_or(MatError::MissingRecord)?;
	let data_type = record.data_type();
	let value_type = value_type_for(data_type);

	if let Some(reason) = unsupported_reason(record, value_type) {
		debug!(
			reason,
			rank = record.rank,
			class_code = record.class_code,
			data_type_code = record.data_type_code,
			"record classified unsupported"
		);
		return Ok(Classification::new(VariableKind::Unsupported, value_type));
	}

	let kind = shape_kind(record, data_type);
	trace!(%kind, %value_type, dims = ?record.dims, "record classified");
	Ok(Classification::new(kind, value_type))
}

/// Value type carried by a data type code; unknown codes are unsupported.
pub const fn value_type_for(data_type: Option<TypeCode>) -> ValueType {
	let Some(data_type) = data_type else {
		return ValueType::Unsupported;
	};

	match data_type {
		TypeCode::Int8 => ValueType::Int8,
		TypeCode::Uint8 => ValueType::Uint8,
		TypeCode::Int16 => ValueType::Int16,
		TypeCode::Uint16 => ValueType::Uint16,
		TypeCode::Int32 => ValueType::Int32,
		TypeCode::Uint32 => ValueType::Uint32,
		TypeCode::Int64 => ValueType::Int64,
		TypeCode::Uint64 => ValueType::Uint64,
		TypeCode::Single => ValueType::Single,
		TypeCode::Double => ValueType::Double,
		TypeCode::Utf8 => ValueType::Utf8,
		TypeCode::Utf16 => ValueType::Utf16,
		TypeCode::Utf32 => ValueType::Utf32,
		TypeCode::String => ValueType::String,
		TypeCode::Cell | TypeCode::Struct | TypeCode::Array | TypeCode::Matrix => ValueType::Variable,
		TypeCode::Compressed | TypeCode::Function | TypeCode::Unknown => ValueType::Unsupported,
	}
}

fn unsupported_reason(record: &MetadataRecord, value_type: ValueType) -> Option<&'static str> {
	if record.class().is_some_and(|class| class.is_opaque()) {
		return Some("opaque class");
	}
	if value_type == ValueType::Unsupported {
		return Some("unsupported data type");
	}
	// The format requires at least two dimensions.
	if record.rank < 2 {
		return Some("rank below 2");
	}
	None
}

fn shape_kind(record: &MetadataRecord, data_type: Option<TypeCode>) -> VariableKind {
	let is_cell = record.class() == Some(ClassCode::Cell) || data_type == Some(TypeCode::Cell);
	if is_cell {
		return VariableKind::CellArray;
	}

	let nested_array = matches!(data_type, Some(TypeCode::Array | TypeCode::Matrix));
	let is_struct = data_type == Some(TypeCode::Struct);

	if record.dimensions_product() == 1 {
		if is_struct {
			VariableKind::Struct
		} else if nested_array {
			// 1x1, neither cell nor struct, yet wrapping an array payload.
			VariableKind::VariableArray
		} else {
			VariableKind::Element
		}
	} else if is_struct || nested_array {
		VariableKind::VariableArray
	} else if record.rank == 2 && matches!(record.dims.as_slice(), [1, _] | [_, 1]) {
		VariableKind::Vector
	} else {
		VariableKind::MultiDimensionalArray
	}
}

#[cfg(test)]
mod tests;
