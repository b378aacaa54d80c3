use std::fs;
use std::path::Path;

use tracing::{trace, warn};

use crate::mat::bytes::Cursor;
use crate::mat::{Classification, MatError, MatHeader, Result, Tag, TypeCode, VariableHeader, classify, parse_matrix_header, read_tag};

/// Limits applied while scanning top-level elements.
#[derive(Debug, Clone, Copy)]
pub struct ScanOptions {
	/// Maximum number of variables returned before the scan stops.
	pub max_elements: usize,
}

impl Default for ScanOptions {
	fn default() -> Self {
		Self { max_elements: 65_536 }
	}
}

/// Borrowed view over one top-level data element.
#[derive(Debug, Clone, Copy)]
pub struct Element<'a> {
	/// Parsed element tag.
	pub tag: Tag,
	/// Payload bytes without padding.
	pub payload: &'a [u8],
	/// Absolute byte offset of the tag.
	pub file_offset: usize,
}

/// Iterator over contiguous top-level data elements.
pub struct ElementIter<'a> {
	cursor: Cursor<'a>,
	offset_base: usize,
	done: bool,
}

impl<'a> ElementIter<'a> {
	/// Create an element iterator starting at `offset`.
	pub fn new(bytes: &'a [u8], offset: usize) -> Self {
		let slice = bytes.get(offset..).unwrap_or(&[]);
		Self {
			cursor: Cursor::new(slice),
			offset_base: offset,
			done: false,
		}
	}

	fn fail(&mut self, err: MatError) -> Option<Result<Element<'a>>> {
		self.done = true;
		Some(Err(err))
	}
}

impl<'a> Iterator for ElementIter<'a> {
	type Item = Result<Element<'a>>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done || self.cursor.remaining() == 0 {
			self.done = true;
			return None;
		}

		let file_offset = self.offset_base + self.cursor.pos();
		let tag = match read_tag(&mut self.cursor) {
			Ok(value) => value,
			Err(err) => return self.fail(err),
		};

		if tag.small {
			let payload = match self.cursor.read_exact(4) {
				Ok(value) => &value[..(tag.size as usize).min(4)],
				Err(err) => return self.fail(err),
			};
			return Some(Ok(Element { tag, payload, file_offset }));
		}

		let rem = self.cursor.remaining();
		if tag.size as usize > rem {
			return self.fail(MatError::ElementLenOutOfRange {
				at: file_offset,
				len: tag.size,
				rem,
			});
		}

		let payload = match self.cursor.read_exact(tag.size as usize) {
			Ok(value) => value,
			Err(err) => return self.fail(err),
		};

		// Compressed elements are written back to back without padding.
		if tag.data_type != TypeCode::Compressed.raw() {
			self.cursor.align8();
		}

		Some(Ok(Element { tag, payload, file_offset }))
	}
}

/// One top-level variable with its classification.
#[derive(Debug, Clone)]
pub struct VariableEntry {
	/// Absolute byte offset of the element tag.
	pub offset: usize,
	/// Raw type of the enclosing top-level element.
	pub element_type: u32,
	/// Header metadata; opaque for compressed elements.
	pub header: VariableHeader,
	/// Classifier verdict for `header.record`.
	pub classification: Classification,
}

/// Result of a variable scan.
#[derive(Debug, Clone, Default)]
pub struct VariableScan {
	/// Variables in file order.
	pub entries: Vec<VariableEntry>,
	/// Top-level elements that were neither matrices nor compressed.
	pub skipped: usize,
	/// Scan stopped at `ScanOptions::max_elements`.
	pub truncated: bool,
}

/// Level 5 MAT-file held in memory with its parsed header.
pub struct MatFile {
	/// Parsed file header.
	pub header: MatHeader,
	bytes: Vec<u8>,
}

impl MatFile {
	/// Read and parse a MAT-file from disk.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		Self::from_bytes(fs::read(path)?)
	}

	/// Parse a MAT-file already in memory.
	pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
		let header = MatHeader::parse(&bytes)?;
		Ok(Self { header, bytes })
	}

	/// Return raw bytes backing this file.
	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Iterate top-level elements after the header.
	pub fn elements(&self) -> ElementIter<'_> {
		ElementIter::new(&self.bytes, MatHeader::SIZE)
	}

	/// Read and classify every top-level variable header.
	pub fn variables(&self, options: &ScanOptions) -> Result<VariableScan> {
		let mut scan = VariableScan::default();

		for element in self.elements() {
			let element = element?;
			if scan.entries.len() >= options.max_elements {
				warn!(max_elements = options.max_elements, offset = element.file_offset, "variable scan truncated");
				scan.truncated = true;
				break;
			}

			let header = match TypeCode::from_raw(element.tag.data_type) {
				Some(TypeCode::Matrix) => match parse_matrix_header(element.payload) {
					Ok(header) => header,
					Err(err) => {
						warn!(offset = element.file_offset, error = %err, "unreadable matrix header, reporting unsupported");
						VariableHeader::opaque(TypeCode::Matrix)
					}
				},
				Some(TypeCode::Compressed) => VariableHeader::opaque(TypeCode::Compressed),
				_ => {
					warn!(
						data_type = element.tag.data_type,
						offset = element.file_offset,
						"skipping non-matrix top-level element"
					);
					scan.skipped += 1;
					continue;
				}
			};

			let classification = classify(Some(&header.record))?;
			trace!(name = %header.name, offset = element.file_offset, kind = %classification.kind, "scanned variable");
			scan.entries.push(VariableEntry {
				offset: element.file_offset,
				element_type: element.tag.data_type,
				header,
				classification,
			});
		}

		Ok(scan)
	}
}

#[cfg(test)]
mod tests;
