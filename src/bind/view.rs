use serde_json::{Map, Value};

use crate::bind::{Locator, Result};

/// Base carried by every bound structure: the address of its subtree.
///
/// A freestanding instance holds a root locator and owns its tree; an
/// instance embedded as a nested field holds a child locator into its
/// enclosing document and owns nothing.
pub struct View {
	locator: Locator,
}

impl View {
	/// Address of this view's subtree.
	pub fn locator(&self) -> &Locator {
		&self.locator
	}
}

impl Default for View {
	fn default() -> Self {
		<Self as Bound>::new()
	}
}

impl Bound for View {
	fn bind(locator: Locator) -> Self {
		Self { locator }
	}

	fn view(&self) -> &View {
		self
	}

	fn view_mut(&mut self) -> &mut View {
		self
	}
}

/// Binding surface for structures whose typed fields live in a document.
///
/// `bind` is the single registration point: it receives the structure's
/// address and wires every embedded field to a child of that address.
/// Nested bound fields are built the same way (`T::bind(locator.child(k))`)
/// and stay live views into the enclosing document. Everything else here is
/// provided in terms of `bind` and the base [`View`].
pub trait Bound: Sized {
	/// Wire a new instance over `locator`.
	fn bind(locator: Locator) -> Self;

	/// Base view carrying this structure's address.
	fn view(&self) -> &View;

	/// Mutable base view.
	fn view_mut(&mut self) -> &mut View;

	/// Freestanding instance owning an empty object.
	fn new() -> Self {
		Self::bind(Locator::root(Value::Object(Map::new())))
	}

	/// Freestanding instance taking ownership of `node`.
	fn from_node(node: Value) -> Self {
		Self::bind(Locator::root(node))
	}

	/// Replace this structure's subtree with parsed `text`.
	///
	/// On failure the previously addressed tree is exactly what the parser
	/// left behind; nothing is rolled back on top of it.
	fn parse(&mut self, text: &str) -> Result<()> {
		let node: Value = serde_json::from_str(text)?;
		*self.view_mut().locator().write() = node;
		Ok(())
	}

	/// Owned snapshot of this structure's subtree.
	fn to_node(&self) -> Value {
		self.view().locator().snapshot()
	}

	/// Compact single-line rendering of the subtree.
	fn to_compact(&self) -> String {
		serde_json::to_string(&*self.view().locator().read()).unwrap_or_default()
	}

	/// Indented rendering of the subtree.
	fn to_pretty(&self) -> String {
		serde_json::to_string_pretty(&*self.view().locator().read()).unwrap_or_default()
	}

	/// Overwrite this structure's subtree with `source`'s resolved tree.
	/// The structure keeps its own address; only the stored data changes.
	fn assign(&mut self, source: &Self) {
		let node = source.to_node();
		self.assign_node(node);
	}

	/// Overwrite this structure's subtree with `node`.
	fn assign_node(&mut self, node: Value) {
		*self.view_mut().locator().write() = node;
	}

	/// Detached deep copy: the copy's fields are rebound over a fresh root
	/// holding a snapshot of this subtree, so the two instances share no
	/// storage.
	fn duplicate(&self) -> Self {
		Self::from_node(self.to_node())
	}

	/// Delete this structure's member from its enclosing container.
	/// No-op for freestanding instances.
	fn remove(&mut self) {
		self.view().locator().remove();
	}

	/// Whether the resolved node is null.
	fn is_null(&self) -> bool {
		self.view().locator().read().is_null()
	}

	/// Whether the resolved node is null or an empty container.
	fn is_empty(&self) -> bool {
		node_is_empty(&self.view().locator().read())
	}
}

/// Container emptiness the way the tree defines it: null counts as empty,
/// scalars do not.
pub(crate) fn node_is_empty(node: &Value) -> bool {
	match node {
		Value::Null => true,
		Value::Array(items) => items.is_empty(),
		Value::Object(members) => members.is_empty(),
		_ => false,
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use crate::bind::{Bound, Field, Locator, View};

	struct Profile {
		view: View,
		name: Field<String>,
		badge: View,
	}

	impl Bound for Profile {
		fn bind(locator: Locator) -> Self {
			Self {
				name: Field::new(locator.child("name")),
				badge: View::bind(locator.child("badge")),
				view: View::bind(locator),
			}
		}

		fn view(&self) -> &View {
			&self.view
		}

		fn view_mut(&mut self) -> &mut View {
			&mut self.view
		}
	}

	#[test]
	fn new_instance_owns_an_empty_object() {
		let profile = Profile::new();
		assert_eq!(profile.to_compact(), "{}");
		assert!(profile.is_empty());
		assert!(!profile.is_null());
	}

	#[test]
	fn parse_replaces_the_tree_wholesale() {
		let mut profile = Profile::new();
		profile.name.set("old");
		profile.parse(r#"{"name": "new"}"#).expect("text parses");
		assert_eq!(profile.name.get(), "new");
		assert_eq!(profile.to_compact(), r#"{"name":"new"}"#);
	}

	#[test]
	fn failed_parse_keeps_the_previous_tree() {
		let mut profile = Profile::new();
		profile.name.set("kept");
		assert!(profile.parse("{\"name\": ").is_err());
		assert_eq!(profile.name.get(), "kept");
	}

	#[test]
	fn nested_raw_view_writes_through_to_the_parent() {
		let mut profile = Profile::new();
		profile.badge.assign_node(json!({"color": "red"}));
		assert_eq!(profile.to_node(), json!({"badge": {"color": "red"}}));
	}

	#[test]
	fn duplicate_rebinds_fields_onto_the_copy() {
		let mut original = Profile::new();
		original.name.set("A");

		let mut copy = original.duplicate();
		copy.name.set("B");
		copy.badge.assign_node(json!({"color": "blue"}));

		assert_eq!(original.to_node(), json!({"name": "A"}));
		assert_eq!(copy.to_node(), json!({"name": "B", "badge": {"color": "blue"}}));
	}

	#[test]
	fn assign_overwrites_data_but_keeps_the_address() {
		let mut left = Profile::new();
		left.name.set("L");
		let mut right = Profile::new();
		right.name.set("R");

		left.assign(&right);
		assert_eq!(left.name.get(), "R");

		// Still bound to its own tree: further writes stay local.
		left.name.set("L2");
		assert_eq!(right.name.get(), "R");
	}

	#[test]
	fn remove_detaches_a_nested_member() {
		let mut profile = Profile::new();
		profile.badge.assign_node(json!({"color": "red"}));
		profile.name.set("A");

		profile.badge.remove();
		assert_eq!(profile.to_node(), json!({"name": "A"}));
	}

	#[test]
	fn view_is_directly_usable_over_arbitrary_documents() {
		let mut doc = View::new();
		doc.parse(r#"{"rows": [1, 2]}"#).expect("text parses");
		assert_eq!(doc.to_compact(), r#"{"rows":[1,2]}"#);
		assert_eq!(doc.to_pretty(), "{\n  \"rows\": [\n    1,\n    2\n  ]\n}");
	}
}
