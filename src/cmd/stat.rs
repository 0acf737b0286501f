use std::path::PathBuf;

use jsonbind::bind::{Bound, Result, Value, View};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
}

/// Per-kind node counts for a document.
#[derive(Debug, Default, serde::Serialize)]
pub struct NodeStats {
	pub nulls: usize,
	pub bools: usize,
	pub numbers: usize,
	pub strings: usize,
	pub arrays: usize,
	pub objects: usize,
	pub max_depth: usize,
}

/// Print node-kind statistics for a document as JSON.
pub fn run(args: Args) -> Result<()> {
	let Args { path } = args;

	let text = std::fs::read_to_string(&path)?;
	let mut document = View::new();
	document.parse(&text)?;

	let stats = collect(&document.to_node());
	println!("{}", serde_json::to_string_pretty(&stats).unwrap_or_default());

	Ok(())
}

/// Walk `node` and tally every kind it contains.
fn collect(node: &Value) -> NodeStats {
	let mut stats = NodeStats::default();
	tally(node, 1, &mut stats);
	stats
}

fn tally(node: &Value, depth: usize, stats: &mut NodeStats) {
	stats.max_depth = stats.max_depth.max(depth);
	match node {
		Value::Null => stats.nulls += 1,
		Value::Bool(_) => stats.bools += 1,
		Value::Number(_) => stats.numbers += 1,
		Value::String(_) => stats.strings += 1,
		Value::Array(items) => {
			stats.arrays += 1;
			for item in items {
				tally(item, depth + 1, stats);
			}
		}
		Value::Object(members) => {
			stats.objects += 1;
			for member in members.values() {
				tally(member, depth + 1, stats);
			}
		}
	}
}
