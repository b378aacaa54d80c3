use std::path::PathBuf;

use matvar::mat::{MatFile, Result, ScanOptions, ValueType, VariableKind};

use crate::cmd::util::{CodeJson, class_text, emit_json, render_dims, type_text};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Stop after this many variables.
	#[arg(long)]
	pub max_elements: Option<usize>,
	/// Hide variables classified as unsupported.
	#[arg(long)]
	pub supported_only: bool,
	#[arg(long)]
	pub json: bool,
}

/// List every top-level variable with its raw codes and classification.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		max_elements,
		supported_only,
		json,
	} = args;

	let mut options = ScanOptions::default();
	if let Some(max) = max_elements {
		options.max_elements = max;
	}

	let file = MatFile::open(&path)?;
	let scan = file.variables(&options)?;
	let entries: Vec<_> = scan
		.entries
		.iter()
		.filter(|entry| !supported_only || !entry.classification.is_unsupported())
		.collect();

	if json {
		let payload = InspectJson {
			path: path.display().to_string(),
			text: file.header.text.clone(),
			version: format!("0x{:04x}", file.header.version),
			subsys_offset: file.header.subsys_offset,
			variable_count: entries.len(),
			skipped: scan.skipped,
			truncated: scan.truncated,
			variables: entries
				.iter()
				.map(|entry| VariableJson {
					name: entry.header.name.clone(),
					offset: entry.offset,
					rank: entry.header.record.rank,
					dims: entry.header.record.dims.clone(),
					class: CodeJson::class(entry.header.record.class_code),
					data_type: CodeJson::data_type(entry.header.record.data_type_code),
					complex: entry.header.flags.complex,
					global: entry.header.flags.global,
					logical: entry.header.flags.logical,
					kind: entry.classification.kind,
					value_type: entry.classification.value_type,
				})
				.collect(),
		};
		emit_json(&payload)?;
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("text: {}", file.header.text);
	println!("version: 0x{:04x}", file.header.version);
	match file.header.subsys_offset {
		Some(offset) => println!("subsys_offset: 0x{offset:x}"),
		None => println!("subsys_offset: -"),
	}
	println!("variable_count: {}", entries.len());
	println!("skipped: {}", scan.skipped);
	println!("truncated: {}", scan.truncated);
	println!("variables:");
	for entry in entries {
		let record = &entry.header.record;
		let name = if entry.header.name.is_empty() { "<anon>" } else { entry.header.name.as_str() };
		println!(
			"  {name} @0x{:x}: dims={} class={} type={} -> {} {}",
			entry.offset,
			render_dims(&record.dims),
			class_text(record.class_code),
			type_text(record.data_type_code),
			entry.classification.kind,
			entry.classification.value_type
		);
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct InspectJson {
	path: String,
	text: String,
	version: String,
	subsys_offset: Option<u64>,
	variable_count: usize,
	skipped: usize,
	truncated: bool,
	variables: Vec<VariableJson>,
}

#[derive(serde::Serialize)]
struct VariableJson {
	name: String,
	offset: usize,
	rank: usize,
	dims: Vec<usize>,
	class: CodeJson,
	data_type: CodeJson,
	complex: bool,
	global: bool,
	logical: bool,
	kind: VariableKind,
	value_type: ValueType,
}
