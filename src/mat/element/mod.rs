use crate::mat::bytes::Cursor;
use crate::mat::{ClassCode, MatError, MetadataRecord, Result, TypeCode};

const COMPLEX_BIT: u32 = 0x0800;
const GLOBAL_BIT: u32 = 0x0400;
const LOGICAL_BIT: u32 = 0x0200;

/// Data element tag in full or compact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
	/// Raw data type code.
	pub data_type: u32,
	/// Payload size in bytes, excluding padding.
	pub size: u32,
	/// Payload packed into the tag's second word.
	pub small: bool,
}

/// Read one element tag, detecting the compact small-element form.
pub(crate) fn read_tag(cursor: &mut Cursor<'_>) -> Result<Tag> {
	let first = cursor.read_u32_le()?;
	let upper = first >> 16;
	if upper != 0 {
		return Ok(Tag {
			data_type: first & 0xFFFF,
			size: upper,
			small: true,
		});
	}

	let size = cursor.read_u32_le()?;
	Ok(Tag {
		data_type: first,
		size,
		small: false,
	})
}

/// Flag bits from a matrix's array-flags sub-element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct ArrayFlags {
	/// Imaginary part follows the real part.
	pub complex: bool,
	/// Variable was declared global.
	pub global: bool,
	/// Numeric data holds logical values.
	pub logical: bool,
}

impl ArrayFlags {
	fn from_word(word: u32) -> Self {
		Self {
			complex: word & COMPLEX_BIT != 0,
			global: word & GLOBAL_BIT != 0,
			logical: word & LOGICAL_BIT != 0,
		}
	}
}

/// Metadata read from the front of a matrix element, ahead of its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableHeader {
	/// Array name; empty for nested or anonymous elements.
	pub name: String,
	/// Array flag bits.
	pub flags: ArrayFlags,
	/// Sparse non-zero capacity word.
	pub nzmax: u32,
	/// Record handed to the classifier.
	pub record: MetadataRecord,
}

impl VariableHeader {
	/// Header for an element whose contents are compressed or unreadable.
	pub fn opaque(data_type: TypeCode) -> Self {
		Self {
			name: String::new(),
			flags: ArrayFlags::default(),
			nzmax: 0,
			record: MetadataRecord::new(Vec::new(), ClassCode::Empty, data_type),
		}
	}
}

/// Parse array flags, dimensions, and name from a matrix element payload.
///
/// The data type code is derived from the class, looking at the first data
/// sub-element only to tell character encodings apart.
pub fn parse_matrix_header(payload: &[u8]) -> Result<VariableHeader> {
	if payload.is_empty() {
		// Zero-length matrices mark empty cells.
		return Ok(VariableHeader {
			record: MetadataRecord::new(vec![0, 0], ClassCode::Empty, TypeCode::Unknown),
			..VariableHeader::opaque(TypeCode::Unknown)
		});
	}

	let mut cursor = Cursor::new(payload);

	let (tag, flags_data) = read_sub_element(&mut cursor, "array flags", TypeCode::Uint32)?;
	if tag.size != 8 {
		return Err(MatError::InvalidSubElementSize {
			field: "array flags",
			size: tag.size,
		});
	}
	let mut flag_words = Cursor::new(flags_data);
	let flags_word = flag_words.read_u32_le()?;
	let nzmax = flag_words.read_u32_le()?;
	let class_code = flags_word & 0xFF;

	if ClassCode::from_raw(class_code) == Some(ClassCode::Opaque) {
		// Opaque objects go straight from flags to name, then `MCOS` and a class name.
		let (_, name_data) = read_sub_element(&mut cursor, "name", TypeCode::Int8)?;
		return Ok(VariableHeader {
			name: String::from_utf8_lossy(name_data).into_owned(),
			flags: ArrayFlags::from_word(flags_word),
			nzmax,
			record: MetadataRecord::from_raw(0, Vec::new(), class_code, TypeCode::Unknown.raw())?,
		});
	}

	let (tag, dims_data) = read_sub_element(&mut cursor, "dimensions", TypeCode::Int32)?;
	if tag.size % 4 != 0 {
		return Err(MatError::InvalidSubElementSize {
			field: "dimensions",
			size: tag.size,
		});
	}
	let dims = read_dims(dims_data)?;

	let (_, name_data) = read_sub_element(&mut cursor, "name", TypeCode::Int8)?;
	let name = String::from_utf8_lossy(name_data).into_owned();

	let stored = read_tag(&mut cursor).ok().and_then(|tag| TypeCode::from_raw(tag.data_type));
	let data_type = data_type_for_class(ClassCode::from_raw(class_code), stored);

	Ok(VariableHeader {
		name,
		flags: ArrayFlags::from_word(flags_word),
		nzmax,
		record: MetadataRecord::from_raw(dims.len(), dims, class_code, data_type.raw())?,
	})
}

/// Data type code a reader reports for a matrix of `class`.
///
/// Numeric payloads are widened to their class type on read, so the stored
/// sub-element type only matters for character data.
pub fn data_type_for_class(class: Option<ClassCode>, stored: Option<TypeCode>) -> TypeCode {
	let Some(class) = class else {
		return TypeCode::Unknown;
	};

	match class {
		ClassCode::Double => TypeCode::Double,
		ClassCode::Single => TypeCode::Single,
		ClassCode::Int8 => TypeCode::Int8,
		ClassCode::Uint8 => TypeCode::Uint8,
		ClassCode::Int16 => TypeCode::Int16,
		ClassCode::Uint16 => TypeCode::Uint16,
		ClassCode::Int32 => TypeCode::Int32,
		ClassCode::Uint32 => TypeCode::Uint32,
		ClassCode::Int64 => TypeCode::Int64,
		ClassCode::Uint64 => TypeCode::Uint64,
		ClassCode::Char => match stored {
			Some(TypeCode::Utf8 | TypeCode::Uint8 | TypeCode::Int8) => TypeCode::Utf8,
			Some(TypeCode::Utf32) => TypeCode::Utf32,
			_ => TypeCode::Utf16,
		},
		ClassCode::Struct => TypeCode::Struct,
		ClassCode::Cell => TypeCode::Cell,
		ClassCode::Empty | ClassCode::Object | ClassCode::Sparse | ClassCode::Function | ClassCode::Opaque => TypeCode::Unknown,
	}
}

fn read_sub_element<'a>(cursor: &mut Cursor<'a>, field: &'static str, expected: TypeCode) -> Result<(Tag, &'a [u8])> {
	let at = cursor.pos();
	let tag = read_tag(cursor)?;
	if tag.data_type != expected.raw() {
		return Err(MatError::UnexpectedSubElement {
			field,
			expected: expected.raw(),
			got: tag.data_type,
			at,
		});
	}

	if tag.small {
		if tag.size > 4 {
			return Err(MatError::InvalidSubElementSize { field, size: tag.size });
		}
		let packed = cursor.read_exact(4)?;
		return Ok((tag, &packed[..tag.size as usize]));
	}

	let data = cursor.read_exact(tag.size as usize)?;
	cursor.align8();
	Ok((tag, data))
}

fn read_dims(data: &[u8]) -> Result<Vec<usize>> {
	let mut cursor = Cursor::new(data);
	let mut dims = Vec::with_capacity(data.len() / 4);
	for axis in 0..data.len() / 4 {
		let value = cursor.read_i32_le()?;
		let dim = usize::try_from(value).map_err(|_| MatError::NegativeDimension { axis, value })?;
		dims.push(dim);
	}
	Ok(dims)
}
