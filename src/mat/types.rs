use std::fmt;
use std::str::FromStr;

use crate::mat::{MatError, Result};

/// Scalar storage kind of a variable's payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueType {
	/// Signed 8-bit integer.
	Int8,
	/// Unsigned 8-bit integer.
	Uint8,
	/// Signed 16-bit integer.
	Int16,
	/// Unsigned 16-bit integer.
	Uint16,
	/// Signed 32-bit integer.
	Int32,
	/// Unsigned 32-bit integer.
	Uint32,
	/// Signed 64-bit integer.
	Int64,
	/// Unsigned 64-bit integer.
	Uint64,
	/// Single-precision float.
	Single,
	/// Double-precision float.
	Double,
	/// UTF-8 code units.
	Utf8,
	/// UTF-16 code units.
	Utf16,
	/// UTF-32 code units.
	Utf32,
	/// Multi-character string.
	String,
	/// Payload is itself a nested variable (struct fields, cells, wrapped arrays).
	Variable,
	/// Payload cannot be interpreted.
	Unsupported,
}

impl ValueType {
	/// Every value type, in declaration order.
	pub const ALL: [ValueType; 16] = [
		Self::Int8,
		Self::Uint8,
		Self::Int16,
		Self::Uint16,
		Self::Int32,
		Self::Uint32,
		Self::Int64,
		Self::Uint64,
		Self::Single,
		Self::Double,
		Self::Utf8,
		Self::Utf16,
		Self::Utf32,
		Self::String,
		Self::Variable,
		Self::Unsupported,
	];

	/// Value types with a direct raw encoding for element/vector/array kinds.
	pub const SCALARS: [ValueType; 14] = [
		Self::Int8,
		Self::Uint8,
		Self::Int16,
		Self::Uint16,
		Self::Int32,
		Self::Uint32,
		Self::Int64,
		Self::Uint64,
		Self::Single,
		Self::Double,
		Self::Utf8,
		Self::Utf16,
		Self::Utf32,
		Self::String,
	];

	/// Render as the stable uppercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Int8 => "INT8",
			Self::Uint8 => "UINT8",
			Self::Int16 => "INT16",
			Self::Uint16 => "UINT16",
			Self::Int32 => "INT32",
			Self::Uint32 => "UINT32",
			Self::Int64 => "INT64",
			Self::Uint64 => "UINT64",
			Self::Single => "SINGLE",
			Self::Double => "DOUBLE",
			Self::Utf8 => "UTF8",
			Self::Utf16 => "UTF16",
			Self::Utf32 => "UTF32",
			Self::String => "STRING",
			Self::Variable => "VARIABLE",
			Self::Unsupported => "UNSUPPORTED",
		}
	}

	/// Return true for value types that carry scalar payload.
	pub fn is_scalar(self) -> bool {
		!matches!(self, Self::Variable | Self::Unsupported)
	}
}

impl fmt::Display for ValueType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ValueType {
	type Err = MatError;

	fn from_str(value: &str) -> Result<Self> {
		Self::ALL
			.into_iter()
			.find(|item| item.as_str().eq_ignore_ascii_case(value))
			.ok_or_else(|| MatError::InvalidLabel {
				kind: "value type",
				value: value.to_owned(),
			})
	}
}

/// Semantic shape of a stored variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum VariableKind {
	/// Single scalar value.
	Element,
	/// One-dimensional sequence (rank 2 with a unit axis).
	Vector,
	/// Dense array that is neither scalar nor vector shaped.
	MultiDimensionalArray,
	/// Single named-field record.
	Struct,
	/// Array whose elements are themselves structured variables.
	VariableArray,
	/// Array of heterogeneous opaque variables.
	CellArray,
	/// Record the reader cannot interpret.
	Unsupported,
}

impl VariableKind {
	/// Every variable kind, in declaration order.
	pub const ALL: [VariableKind; 7] = [
		Self::Element,
		Self::Vector,
		Self::MultiDimensionalArray,
		Self::Struct,
		Self::VariableArray,
		Self::CellArray,
		Self::Unsupported,
	];

	/// Render as the stable label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Element => "Element",
			Self::Vector => "Vector",
			Self::MultiDimensionalArray => "MultiDimensionalArray",
			Self::Struct => "Struct",
			Self::VariableArray => "VariableArray",
			Self::CellArray => "CellArray",
			Self::Unsupported => "Unsupported",
		}
	}
}

impl fmt::Display for VariableKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for VariableKind {
	type Err = MatError;

	fn from_str(value: &str) -> Result<Self> {
		Self::ALL
			.into_iter()
			.find(|item| item.as_str().eq_ignore_ascii_case(value))
			.ok_or_else(|| MatError::InvalidLabel {
				kind: "variable kind",
				value: value.to_owned(),
			})
	}
}
