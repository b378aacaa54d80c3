//! Shared test helpers: synthetic MAT v5 byte streams and scratch paths.

use std::path::{Path, PathBuf};

/// `miINT8` element type.
pub const MI_INT8: u32 = 1;
/// `miUINT16` element type.
pub const MI_UINT16: u32 = 4;
/// `miINT32` element type.
pub const MI_INT32: u32 = 5;
/// `miUINT32` element type.
pub const MI_UINT32: u32 = 6;
/// `miDOUBLE` element type.
pub const MI_DOUBLE: u32 = 9;
/// `miMATRIX` element type.
pub const MI_MATRIX: u32 = 14;
/// `miCOMPRESSED` element type.
pub const MI_COMPRESSED: u32 = 15;
/// `miUTF8` element type.
pub const MI_UTF8: u32 = 16;

/// Array flag bit marking complex data.
pub const FLAG_COMPLEX: u32 = 0x0800;
/// Array flag bit marking global variables.
pub const FLAG_GLOBAL: u32 = 0x0400;
/// Array flag bit marking logical data.
pub const FLAG_LOGICAL: u32 = 0x0200;

/// Builder for a matrix element's payload.
#[derive(Debug, Clone)]
pub struct Matrix {
	name: String,
	class: u32,
	flags: u32,
	nzmax: u32,
	dims: Vec<i32>,
	subs: Vec<(u32, Vec<u8>)>,
}

impl Matrix {
	/// Start a matrix with a raw class code and dimensions.
	pub fn new(name: &str, class: u32, dims: &[i32]) -> Self {
		Self {
			name: name.to_owned(),
			class,
			flags: 0,
			nzmax: 0,
			dims: dims.to_vec(),
			subs: Vec::new(),
		}
	}

	/// Set array flag bits (`FLAG_*`).
	pub fn flags(mut self, flags: u32) -> Self {
		self.flags = flags;
		self
	}

	/// Set the sparse non-zero capacity word.
	pub fn nzmax(mut self, nzmax: u32) -> Self {
		self.nzmax = nzmax;
		self
	}

	/// Append a data sub-element after the name.
	pub fn data(mut self, data_type: u32, bytes: &[u8]) -> Self {
		self.subs.push((data_type, bytes.to_vec()));
		self
	}

	/// Encode the matrix payload (everything after the `miMATRIX` tag).
	pub fn payload(&self) -> Vec<u8> {
		let mut out = Vec::new();

		let mut flags = Vec::with_capacity(8);
		flags.extend_from_slice(&((self.flags & !0xFF) | (self.class & 0xFF)).to_le_bytes());
		flags.extend_from_slice(&self.nzmax.to_le_bytes());
		push_element(&mut out, MI_UINT32, &flags);

		let dims: Vec<u8> = self.dims.iter().flat_map(|dim| dim.to_le_bytes()).collect();
		push_element(&mut out, MI_INT32, &dims);

		push_element(&mut out, MI_INT8, self.name.as_bytes());

		for (data_type, bytes) in &self.subs {
			push_element(&mut out, *data_type, bytes);
		}
		out
	}
}

/// Encode an opaque-class (17) matrix payload: flags, name, `MCOS`, class name, no dimensions.
pub fn opaque_payload(name: &str, class_name: &str) -> Vec<u8> {
	let mut out = Vec::new();
	let mut flags = Vec::with_capacity(8);
	flags.extend_from_slice(&17_u32.to_le_bytes());
	flags.extend_from_slice(&0_u32.to_le_bytes());
	push_element(&mut out, MI_UINT32, &flags);
	push_element(&mut out, MI_INT8, name.as_bytes());
	push_element(&mut out, MI_INT8, b"MCOS");
	push_element(&mut out, MI_INT8, class_name.as_bytes());
	out
}

/// Builder for a complete little-endian level 5 MAT-file.
#[derive(Debug, Clone)]
pub struct MatBuilder {
	bytes: Vec<u8>,
}

impl MatBuilder {
	/// Start a file with the given descriptive text.
	pub fn new(text: &str) -> Self {
		let mut bytes = vec![b' '; 116];
		let take = text.len().min(116);
		bytes[..take].copy_from_slice(&text.as_bytes()[..take]);
		bytes.extend_from_slice(&[0_u8; 8]);
		bytes.extend_from_slice(&0x0100_u16.to_le_bytes());
		bytes.extend_from_slice(b"IM");
		Self { bytes }
	}

	/// Append a top-level `miMATRIX` element.
	pub fn matrix(mut self, matrix: &Matrix) -> Self {
		let payload = matrix.payload();
		push_full_element(&mut self.bytes, MI_MATRIX, &payload);
		self
	}

	/// Append a top-level `miCOMPRESSED` element; its payload is not padded.
	pub fn compressed(mut self, payload: &[u8]) -> Self {
		self.bytes.extend_from_slice(&MI_COMPRESSED.to_le_bytes());
		self.bytes.extend_from_slice(&(payload.len() as u32).to_le_bytes());
		self.bytes.extend_from_slice(payload);
		self
	}

	/// Append an arbitrary top-level element.
	pub fn element(mut self, data_type: u32, payload: &[u8]) -> Self {
		push_full_element(&mut self.bytes, data_type, payload);
		self
	}

	/// Append raw bytes verbatim.
	pub fn raw(mut self, bytes: &[u8]) -> Self {
		self.bytes.extend_from_slice(bytes);
		self
	}

	/// Return the encoded file bytes.
	pub fn finish(self) -> Vec<u8> {
		self.bytes
	}
}

/// Append an element, using the small form for payloads of at most 4 bytes.
pub fn push_element(out: &mut Vec<u8>, data_type: u32, payload: &[u8]) {
	if !payload.is_empty() && payload.len() <= 4 {
		let word = ((payload.len() as u32) << 16) | data_type;
		out.extend_from_slice(&word.to_le_bytes());
		let mut packed = [0_u8; 4];
		packed[..payload.len()].copy_from_slice(payload);
		out.extend_from_slice(&packed);
		return;
	}
	push_full_element(out, data_type, payload);
}

/// Append an element with a full 8-byte tag and 8-byte padding.
pub fn push_full_element(out: &mut Vec<u8>, data_type: u32, payload: &[u8]) {
	out.extend_from_slice(&data_type.to_le_bytes());
	out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
	out.extend_from_slice(payload);
	let pad = (8 - payload.len() % 8) % 8;
	out.extend(std::iter::repeat_n(0_u8, pad));
}

/// Encode `f64` values as little-endian bytes.
pub fn f64_bytes(values: &[f64]) -> Vec<u8> {
	values.iter().flat_map(|value| value.to_le_bytes()).collect()
}

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}

/// Write `bytes` to a scratch file under the target directory and return its path.
pub fn write_scratch(name: &str, bytes: &[u8]) -> PathBuf {
	let dir = target_dir().join("matvar-scratch");
	std::fs::create_dir_all(&dir).expect("scratch dir is creatable");
	let path = dir.join(name);
	std::fs::write(&path, bytes).expect("scratch file is writable");
	path
}
