use matvar::mat::{MetadataRecord, Result, ValueType, VariableKind, classify};

use crate::cmd::util::{CodeJson, class_text, emit_json, parse_dims, render_dims, type_text};

#[derive(clap::Args)]
pub struct Args {
	/// Dimensions, e.g. `1,5` or `3x4`.
	#[arg(long, allow_hyphen_values = true)]
	pub dims: String,
	/// Raw array class code.
	#[arg(long = "class")]
	pub class_code: u32,
	/// Raw data type code.
	#[arg(long = "type")]
	pub data_type_code: u32,
	/// Declared rank; defaults to the number of dimensions.
	#[arg(long)]
	pub rank: Option<usize>,
	#[arg(long)]
	pub json: bool,
}

/// Classify a hand-written metadata record.
pub fn run(args: Args) -> Result<()> {
	let Args {
		dims,
		class_code,
		data_type_code,
		rank,
		json,
	} = args;

	let dims = parse_dims(&dims)?;
	let rank = rank.unwrap_or(dims.len());
	let record = MetadataRecord::from_raw(rank, dims, class_code, data_type_code)?;
	let result = classify(Some(&record))?;

	if json {
		emit_json(&ClassifyJson {
			rank: record.rank,
			dims: &record.dims,
			class: CodeJson::class(record.class_code),
			data_type: CodeJson::data_type(record.data_type_code),
			kind: result.kind,
			value_type: result.value_type,
		})?;
		return Ok(());
	}

	println!("rank: {}", record.rank);
	println!("dims: {}", render_dims(&record.dims));
	println!("class: {}", class_text(record.class_code));
	println!("data_type: {}", type_text(record.data_type_code));
	println!("kind: {}", result.kind);
	println!("value_type: {}", result.value_type);
	Ok(())
}

#[derive(serde::Serialize)]
struct ClassifyJson<'a> {
	rank: usize,
	dims: &'a [usize],
	class: CodeJson,
	data_type: CodeJson,
	kind: VariableKind,
	value_type: ValueType,
}
