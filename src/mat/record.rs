use crate::mat::{ClassCode, MatError, Result, TypeCode};

/// Raw header metadata of one stored variable.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MetadataRecord {
	/// Number of dimensions.
	pub rank: usize,
	/// Extent of each dimension; `dims.len() == rank`.
	pub dims: Vec<usize>,
	/// Raw array class code.
	pub class_code: u32,
	/// Raw data type code.
	pub data_type_code: u32,
}

impl MetadataRecord {
	/// Build a record from known codes, deriving the rank from `dims`.
	pub fn new(dims: Vec<usize>, class: ClassCode, data_type: TypeCode) -> Self {
		Self {
			rank: dims.len(),
			dims,
			class_code: class.raw(),
			data_type_code: data_type.raw(),
		}
	}

	/// Build a record from raw header values, rejecting a rank/dims mismatch.
	pub fn from_raw(rank: usize, dims: Vec<usize>, class_code: u32, data_type_code: u32) -> Result<Self> {
		if dims.len() != rank {
			return Err(MatError::RankMismatch { rank, dims: dims.len() });
		}

		Ok(Self {
			rank,
			dims,
			class_code,
			data_type_code,
		})
	}

	/// Decoded class code, `None` when outside the known table.
	pub fn class(&self) -> Option<ClassCode> {
		ClassCode::from_raw(self.class_code)
	}

	/// Decoded data type code, `None` when outside the known table.
	pub fn data_type(&self) -> Option<TypeCode> {
		TypeCode::from_raw(self.data_type_code)
	}

	/// Total element count; saturates instead of overflowing.
	pub fn dimensions_product(&self) -> usize {
		self.dims.iter().fold(1_usize, |acc, dim| acc.saturating_mul(*dim))
	}
}
