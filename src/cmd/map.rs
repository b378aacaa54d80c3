use matvar::mat::{Result, ValueType, VariableKind, raw_codes};

use crate::cmd::util::{CodeJson, emit_json};

#[derive(clap::Args)]
pub struct Args {
	/// Variable kind, e.g. `Vector` or `CellArray`.
	pub kind: VariableKind,
	/// Value type, e.g. `DOUBLE` or `UTF16`.
	pub value_type: ValueType,
	#[arg(long)]
	pub json: bool,
}

/// Print the raw codes used to store a variable kind/value type pair.
pub fn run(args: Args) -> Result<()> {
	let Args { kind, value_type, json } = args;
	let codes = raw_codes(kind, value_type)?;

	if json {
		emit_json(&MapJson {
			kind,
			value_type,
			class: CodeJson::class(codes.class.raw()),
			data_type: CodeJson::data_type(codes.data_type.raw()),
		})?;
		return Ok(());
	}

	println!("kind: {kind}");
	println!("value_type: {value_type}");
	println!("class: {} ({})", codes.class.raw(), codes.class.as_str());
	println!("data_type: {} ({})", codes.data_type.raw(), codes.data_type.as_str());
	Ok(())
}

#[derive(serde::Serialize)]
struct MapJson {
	kind: VariableKind,
	value_type: ValueType,
	class: CodeJson,
	data_type: CodeJson,
}
