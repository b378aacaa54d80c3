use matvar::mat::{MatError, Result, class_label, type_label};

/// Parse a comma- or `x`-separated dimension list such as `1,5` or `3x4x2`.
pub(crate) fn parse_dims(value: &str) -> Result<Vec<usize>> {
	let trimmed = value.trim();
	if trimmed.is_empty() {
		return Ok(Vec::new());
	}

	trimmed
		.split([',', 'x', 'X'])
		.map(|item| item.trim().parse::<usize>())
		.collect::<std::result::Result<Vec<_>, _>>()
		.map_err(|_| MatError::InvalidDims { value: value.to_owned() })
}

/// Render dimensions as `AxBxC`.
pub(crate) fn render_dims(dims: &[usize]) -> String {
	if dims.is_empty() {
		return "-".to_owned();
	}
	dims.iter().map(usize::to_string).collect::<Vec<_>>().join("x")
}

/// Render a raw class code with its label.
pub(crate) fn class_text(raw: u32) -> String {
	format!("{raw} ({})", class_label(raw))
}

/// Render a raw type code with its label.
pub(crate) fn type_text(raw: u32) -> String {
	format!("{raw} ({})", type_label(raw))
}

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	let text = serde_json::to_string_pretty(payload)?;
	println!("{text}");
	Ok(())
}

/// Raw code pair as emitted in JSON output.
#[derive(serde::Serialize)]
pub(crate) struct CodeJson {
	pub(crate) code: u32,
	pub(crate) label: &'static str,
}

impl CodeJson {
	pub(crate) fn class(raw: u32) -> Self {
		Self {
			code: raw,
			label: class_label(raw),
		}
	}

	pub(crate) fn data_type(raw: u32) -> Self {
		Self {
			code: raw,
			label: type_label(raw),
		}
	}
}
