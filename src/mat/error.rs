use thiserror::Error;

use crate::mat::{ValueType, VariableKind};

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, MatError>;

/// Errors produced while mapping, classifying, and reading MAT-file metadata.
#[derive(Debug, Error)]
pub enum MatError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// JSON rendering failure.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Scalar-shaped kind requested with a value type that has no raw encoding.
	#[error("value type {value_type} cannot be stored as {kind}")]
	UnmappableValueType {
		/// Requested variable kind.
		kind: VariableKind,
		/// Offending value type.
		value_type: ValueType,
	},
	/// Variable kind has no raw encoding at all.
	#[error("variable kind {kind} has no raw class/type encoding")]
	UnmappableVariableKind {
		/// Offending variable kind.
		kind: VariableKind,
	},
	/// Classification was requested without a metadata record.
	#[error("missing metadata record")]
	MissingRecord,
	/// Record rank disagrees with the length of its dimension list.
	#[error("rank {rank} does not match {dims} dimensions")]
	RankMismatch {
		/// Declared rank.
		rank: usize,
		/// Number of dimensions supplied.
		dims: usize,
	},
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// File header is missing or malformed.
	#[error("invalid MAT-file header")]
	InvalidHeader,
	/// Header version word is not the level 5 marker.
	#[error("unsupported MAT-file version 0x{version:04x} (expected 0x0100)")]
	UnsupportedVersion {
		/// Parsed version word.
		version: u16,
	},
	/// Endian indicator reads `MI`.
	#[error("unsupported endianness (expected little-endian 'IM')")]
	BigEndianUnsupported,
	/// Data element payload would exceed remaining bytes.
	#[error("element length {len} at offset {at} exceeds remaining {rem}")]
	ElementLenOutOfRange {
		/// Element tag offset.
		at: usize,
		/// Declared payload length.
		len: u32,
		/// Remaining bytes after the tag.
		rem: usize,
	},
	/// Matrix sub-element had an unexpected data type.
	#[error("matrix {field} sub-element at offset {at} has type {got}, expected {expected}")]
	UnexpectedSubElement {
		/// Logical sub-element being read.
		field: &'static str,
		/// Expected raw type code.
		expected: u32,
		/// Actual raw type code.
		got: u32,
		/// Offset of the sub-element tag within the matrix payload.
		at: usize,
	},
	/// Sub-element byte size is not valid for its contents.
	#[error("matrix {field} sub-element has invalid size {size}")]
	InvalidSubElementSize {
		/// Logical sub-element being read.
		field: &'static str,
		/// Declared byte size.
		size: u32,
	},
	/// Dimension entry was negative.
	#[error("negative dimension {value} at axis {axis}")]
	NegativeDimension {
		/// Axis index.
		axis: usize,
		/// Parsed signed value.
		value: i32,
	},
	/// Text label did not name a known enum value.
	#[error("unknown {kind} label: {value}")]
	InvalidLabel {
		/// Enum being parsed.
		kind: &'static str,
		/// User-provided label.
		value: String,
	},
	/// CLI dimension list argument was invalid.
	#[error("invalid dimension list: {value}")]
	InvalidDims {
		/// User-provided dimension text.
		value: String,
	},
}
