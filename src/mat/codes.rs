//! Raw storage class and data type codes of the MAT v5 container.

/// Array class stored in the low byte of a matrix's array flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ClassCode {
	/// Empty array.
	Empty = 0,
	/// Cell array.
	Cell = 1,
	/// Structure.
	Struct = 2,
	/// MATLAB object.
	Object = 3,
	/// Character array.
	Char = 4,
	/// Sparse array.
	Sparse = 5,
	/// Double-precision array.
	Double = 6,
	/// Single-precision array.
	Single = 7,
	/// Signed 8-bit integer array.
	Int8 = 8,
	/// Unsigned 8-bit integer array.
	Uint8 = 9,
	/// Signed 16-bit integer array.
	Int16 = 10,
	/// Unsigned 16-bit integer array.
	Uint16 = 11,
	/// Signed 32-bit integer array.
	Int32 = 12,
	/// Unsigned 32-bit integer array.
	Uint32 = 13,
	/// Signed 64-bit integer array.
	Int64 = 14,
	/// Unsigned 64-bit integer array.
	Uint64 = 15,
	/// Function handle.
	Function = 16,
	/// Opaque object (`MCOS` classes such as `string`).
	Opaque = 17,
}

impl ClassCode {
	/// Decode a raw class code, returning `None` for values outside the table.
	pub const fn from_raw(raw: u32) -> Option<Self> {
		Some(match raw {
			0 => Self::Empty,
			1 => Self::Cell,
			2 => Self::Struct,
			3 => Self::Object,
			4 => Self::Char,
			5 => Self::Sparse,
			6 => Self::Double,
			7 => Self::Single,
			8 => Self::Int8,
			9 => Self::Uint8,
			10 => Self::Int16,
			11 => Self::Uint16,
			12 => Self::Int32,
			13 => Self::Uint32,
			14 => Self::Int64,
			15 => Self::Uint64,
			16 => Self::Function,
			17 => Self::Opaque,
			_ => return None,
		})
	}

	/// Raw numeric code.
	pub const fn raw(self) -> u32 {
		self as u32
	}

	/// Classes the reader never interprets.
	pub const fn is_opaque(self) -> bool {
		matches!(self, Self::Object | Self::Sparse | Self::Function | Self::Opaque)
	}

	/// Render as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Empty => "empty",
			Self::Cell => "cell",
			Self::Struct => "struct",
			Self::Object => "object",
			Self::Char => "char",
			Self::Sparse => "sparse",
			Self::Double => "double",
			Self::Single => "single",
			Self::Int8 => "int8",
			Self::Uint8 => "uint8",
			Self::Int16 => "int16",
			Self::Uint16 => "uint16",
			Self::Int32 => "int32",
			Self::Uint32 => "uint32",
			Self::Int64 => "int64",
			Self::Uint64 => "uint64",
			Self::Function => "function",
			Self::Opaque => "opaque",
		}
	}
}

/// Data type tag of a data element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum TypeCode {
	/// Unknown or unset type.
	Unknown = 0,
	/// Signed 8-bit integer.
	Int8 = 1,
	/// Unsigned 8-bit integer.
	Uint8 = 2,
	/// Signed 16-bit integer.
	Int16 = 3,
	/// Unsigned 16-bit integer.
	Uint16 = 4,
	/// Signed 32-bit integer.
	Int32 = 5,
	/// Unsigned 32-bit integer.
	Uint32 = 6,
	/// IEEE 754 single precision.
	Single = 7,
	/// IEEE 754 double precision.
	Double = 9,
	/// Signed 64-bit integer.
	Int64 = 12,
	/// Unsigned 64-bit integer.
	Uint64 = 13,
	/// Nested matrix element.
	Matrix = 14,
	/// zlib-compressed element.
	Compressed = 15,
	/// UTF-8 encoded text.
	Utf8 = 16,
	/// UTF-16 encoded text.
	Utf16 = 17,
	/// UTF-32 encoded text.
	Utf32 = 18,
	/// String payload.
	String = 20,
	/// Cell payload marker.
	Cell = 21,
	/// Struct payload marker.
	Struct = 22,
	/// Nested array marker.
	Array = 23,
	/// Function payload.
	Function = 24,
}

impl TypeCode {
	/// Decode a raw type code, returning `None` for values outside the table.
	pub const fn from_raw(raw: u32) -> Option<Self> {
		Some(match raw {
			0 => Self::Unknown,
			1 => Self::Int8,
			2 => Self::Uint8,
			3 => Self::Int16,
			4 => Self::Uint16,
			5 => Self::Int32,
			6 => Self::Uint32,
			7 => Self::Single,
			9 => Self::Double,
			12 => Self::Int64,
			13 => Self::Uint64,
			14 => Self::Matrix,
			15 => Self::Compressed,
			16 => Self::Utf8,
			17 => Self::Utf16,
			18 => Self::Utf32,
			20 => Self::String,
			21 => Self::Cell,
			22 => Self::Struct,
			23 => Self::Array,
			24 => Self::Function,
			_ => return None,
		})
	}

	/// Raw numeric code.
	pub const fn raw(self) -> u32 {
		self as u32
	}

	/// Render as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Unknown => "unknown",
			Self::Int8 => "int8",
			Self::Uint8 => "uint8",
			Self::Int16 => "int16",
			Self::Uint16 => "uint16",
			Self::Int32 => "int32",
			Self::Uint32 => "uint32",
			Self::Single => "single",
			Self::Double => "double",
			Self::Int64 => "int64",
			Self::Uint64 => "uint64",
			Self::Matrix => "matrix",
			Self::Compressed => "compressed",
			Self::Utf8 => "utf8",
			Self::Utf16 => "utf16",
			Self::Utf32 => "utf32",
			Self::String => "string",
			Self::Cell => "cell",
			Self::Struct => "struct",
			Self::Array => "array",
			Self::Function => "function",
		}
	}
}

/// Label a raw class code, falling back to `?` for unknown values.
pub fn class_label(raw: u32) -> &'static str {
	ClassCode::from_raw(raw).map_or("?", ClassCode::as_str)
}

/// Label a raw type code, falling back to `?` for unknown values.
pub fn type_label(raw: u32) -> &'static str {
	TypeCode::from_raw(raw).map_or("?", TypeCode::as_str)
}
