use std::path::PathBuf;

use jsonbind::bind::{Bound, FieldPath, Result, View};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	pub field_path: String,
}

/// Resolve a field path against a document and print the subtree.
pub fn run(args: Args) -> Result<()> {
	let Args { path, field_path } = args;

	let text = std::fs::read_to_string(&path)?;
	let mut document = View::new();
	document.parse(&text)?;

	println!("{}", render(&document, &field_path)?);

	Ok(())
}

/// Pretty rendering of the subtree addressed by `field_path`.
fn render(document: &View, field_path: &str) -> Result<String> {
	let parsed = FieldPath::parse(field_path)?;
	let target = View::bind(document.locator().descend(&parsed));
	Ok(target.to_pretty())
}
