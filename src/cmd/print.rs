use std::path::PathBuf;

use jsonbind::bind::{Bound, Result, View};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub compact: bool,
}

/// Reformat a document as pretty (default) or compact text.
pub fn run(args: Args) -> Result<()> {
	let Args { path, compact } = args;

	let text = std::fs::read_to_string(&path)?;
	let mut document = View::new();
	document.parse(&text)?;

	if compact {
		println!("{}", document.to_compact());
	} else {
		println!("{}", document.to_pretty());
	}

	Ok(())
}
