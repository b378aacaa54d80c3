use crate::mat::{ClassCode, MatError, Result, TypeCode, ValueType, VariableKind};

/// Raw `(class, type)` pair written into a matrix header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawCodes {
	/// Array class code.
	pub class: ClassCode,
	/// Data type code.
	pub data_type: TypeCode,
}

impl RawCodes {
	const fn new(class: ClassCode, data_type: TypeCode) -> Self {
		Self { class, data_type }
	}
}

const STRUCT_CODES: RawCodes = RawCodes::new(ClassCode::Struct, TypeCode::Struct);
const CELL_CODES: RawCodes = RawCodes::new(ClassCode::Cell, TypeCode::Cell);

/// Resolve the raw codes used to store a variable of `kind` holding `value_type`.
///
/// Struct and variable arrays ignore `value_type`; cell arrays likewise.
pub fn raw_codes(kind: VariableKind, value_type: ValueType) -> Result<RawCodes> {
	match kind {
		VariableKind::Element | VariableKind::Vector | VariableKind::MultiDimensionalArray => {
			scalar_codes(value_type).ok_or(MatError::UnmappableValueType { kind, value_type })
		}
		VariableKind::Struct | VariableKind::VariableArray => Ok(STRUCT_CODES),
		VariableKind::CellArray => Ok(CELL_CODES),
		VariableKind::Unsupported => Err(MatError::UnmappableVariableKind { kind }),
	}
}

/// Raw codes of a scalar value type, `None` for the nested/unsupported sentinels.
pub const fn scalar_codes(value_type: ValueType) -> Option<RawCodes> {
	let codes = match value_type {
		ValueType::Int8 => RawCodes::new(ClassCode::Int8, TypeCode::Int8),
		ValueType::Uint8 => RawCodes::new(ClassCode::Uint8, TypeCode::Uint8),
		ValueType::Int16 => RawCodes::new(ClassCode::Int16, TypeCode::Int16),
		ValueType::Uint16 => RawCodes::new(ClassCode::Uint16, TypeCode::Uint16),
		ValueType::Int32 => RawCodes::new(ClassCode::Int32, TypeCode::Int32),
		ValueType::Uint32 => RawCodes::new(ClassCode::Uint32, TypeCode::Uint32),
		ValueType::Int64 => RawCodes::new(ClassCode::Int64, TypeCode::Int64),
		ValueType::Uint64 => RawCodes::new(ClassCode::Uint64, TypeCode::Uint64),
		ValueType::Single => RawCodes::new(ClassCode::Single, TypeCode::Single),
		ValueType::Double => RawCodes::new(ClassCode::Double, TypeCode::Double),
		ValueType::Utf8 => RawCodes::new(ClassCode::Char, TypeCode::Utf8),
		ValueType::Utf16 => RawCodes::new(ClassCode::Char, TypeCode::Utf16),
		ValueType::Utf32 => RawCodes::new(ClassCode::Char, TypeCode::Utf32),
		ValueType::String => RawCodes::new(ClassCode::Char, TypeCode::String),
		ValueType::Variable | ValueType::Unsupported => return None,
	};
	Some(codes)
}

/// Iterate the scalar wire table in `ValueType::SCALARS` order.
pub fn wire_table() -> impl Iterator<Item = (ValueType, RawCodes)> {
	ValueType::SCALARS
		.into_iter()
		.filter_map(|value_type| scalar_codes(value_type).map(|codes| (value_type, codes)))
}
