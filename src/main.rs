#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "matvar", about = "MAT-file variable type mapping and classification")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Map a variable kind and value type to raw class/type codes.
	Map(cmd::map::Args),
	/// Classify a raw metadata record.
	Classify(cmd::classify::Args),
	/// Print the raw code wire table.
	Table(cmd::table::Args),
	/// Classify every variable stored in a MAT-file.
	Inspect(cmd::inspect::Args),
}

fn main() {
	init_tracing();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run() -> matvar::mat::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Map(args) => cmd::map::run(args),
		Commands::Classify(args) => cmd::classify::run(args),
		Commands::Table(args) => cmd::table::run(args),
		Commands::Inspect(args) => cmd::inspect::run(args),
	}
}
