use matvar::mat::{ClassCode, Result, TypeCode, ValueType, wire_table};

use crate::cmd::util::{CodeJson, emit_json};

#[derive(clap::Args)]
pub struct Args {
	#[arg(long)]
	pub json: bool,
}

/// Print the scalar value type wire table plus the fixed container rows.
pub fn run(args: Args) -> Result<()> {
	let rows: Vec<_> = wire_table()
		.map(|(value_type, codes)| RowJson {
			value_type: Some(value_type),
			kinds: "Element|Vector|MultiDimensionalArray",
			class: CodeJson::class(codes.class.raw()),
			data_type: CodeJson::data_type(codes.data_type.raw()),
		})
		.chain([
			RowJson {
				value_type: None,
				kinds: "Struct|VariableArray",
				class: CodeJson::class(ClassCode::Struct.raw()),
				data_type: CodeJson::data_type(TypeCode::Struct.raw()),
			},
			RowJson {
				value_type: None,
				kinds: "CellArray",
				class: CodeJson::class(ClassCode::Cell.raw()),
				data_type: CodeJson::data_type(TypeCode::Cell.raw()),
			},
		])
		.collect();

	if args.json {
		emit_json(&rows)?;
		return Ok(());
	}

	println!("{:<12} {:<38} {:<14} {}", "value_type", "kinds", "class", "data_type");
	for row in &rows {
		let value_type = row.value_type.map_or("*", ValueType::as_str);
		println!(
			"{:<12} {:<38} {:<14} {}",
			value_type,
			row.kinds,
			format!("{} ({})", row.class.code, row.class.label),
			format!("{} ({})", row.data_type.code, row.data_type.label)
		);
	}
	Ok(())
}

#[derive(serde::Serialize)]
struct RowJson {
	value_type: Option<ValueType>,
	kinds: &'static str,
	class: CodeJson,
	data_type: CodeJson,
}
