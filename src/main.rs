#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "jsonbind", about = "Typed JSON document inspection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Reformat a document as pretty or compact text.
	Print(cmd::print::Args),
	/// Resolve a field path and print the addressed subtree.
	Get(cmd::get::Args),
	/// Print per-kind node statistics as JSON.
	Stat(cmd::stat::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> jsonbind::bind::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Print(args) => cmd::print::run(args),
		Commands::Get(args) => cmd::get::run(args),
		Commands::Stat(args) => cmd::stat::run(args),
	}
}
