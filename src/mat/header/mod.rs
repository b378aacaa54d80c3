use crate::mat::bytes::Cursor;
use crate::mat::{MatError, Result};

const TEXT_LEN: usize = 116;
const NO_SUBSYS: [u64; 2] = [0, 0x2020_2020_2020_2020];

/// Parsed level 5 MAT-file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatHeader {
	/// Descriptive text with trailing padding removed.
	pub text: String,
	/// Subsystem data offset, `None` when unset.
	pub subsys_offset: Option<u64>,
	/// Version word, always `0x0100` once parsed.
	pub version: u16,
}

impl MatHeader {
	/// Fixed header size in bytes.
	pub const SIZE: usize = 128;
	/// Level 5 version word.
	pub const VERSION: u16 = 0x0100;

	/// Parse the header at the start of `bytes`.
	pub fn parse(bytes: &[u8]) -> Result<Self> {
		let mut cursor = Cursor::new(bytes);
		let header = cursor.read_exact(Self::SIZE)?;

		match &header[126..128] {
			b"IM" => {}
			b"MI" => return Err(MatError::BigEndianUnsupported),
			_ => return Err(MatError::InvalidHeader),
		}

		let mut fields = Cursor::new(&header[TEXT_LEN..]);
		let subsys = fields.read_u64_le()?;
		let version = fields.read_u16_le()?;
		if version != Self::VERSION {
			return Err(MatError::UnsupportedVersion { version });
		}

		let text = &header[..TEXT_LEN];
		let end = text.iter().rposition(|byte| *byte != b' ' && *byte != 0).map_or(0, |idx| idx + 1);

		Ok(Self {
			text: String::from_utf8_lossy(&text[..end]).into_owned(),
			subsys_offset: (!NO_SUBSYS.contains(&subsys)).then_some(subsys),
			version,
		})
	}
}
