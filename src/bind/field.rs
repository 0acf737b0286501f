use std::marker::PhantomData;

use serde_json::Value;

use crate::bind::view::node_is_empty;
use crate::bind::{Codec, Locator};

/// Typed conversion-field accessor embedded in a bound structure.
///
/// The field holds only its address. Reads decode the live node on every
/// call and writes encode straight back through it; there is no cached
/// value. `Field` is deliberately not `Clone`: fields are only ever
/// created by their enclosing structure's `bind`, which is what keeps a
/// detached copy from aliasing the structure it was copied from.
pub struct Field<T> {
	locator: Locator,
	marker: PhantomData<fn() -> T>,
}

impl<T: Codec> Field<T> {
	/// Field reading and writing through `locator`.
	pub fn new(locator: Locator) -> Self {
		Self {
			locator,
			marker: PhantomData,
		}
	}

	/// Decode the addressed node.
	///
	/// An absent or kind-mismatched node decodes to the type's default;
	/// the read never creates the addressed member.
	pub fn get(&self) -> T {
		T::decode(&self.locator.read())
	}

	/// Encode `value` and write it through, creating missing parent
	/// containers along the path.
	pub fn set(&mut self, value: impl Into<T>) {
		*self.locator.write() = value.into().encode();
	}

	/// Write a raw node through without conversion.
	pub fn set_node(&mut self, node: Value) {
		*self.locator.write() = node;
	}

	/// Whether the addressed node's tag matches this field's type.
	pub fn is_valid(&self) -> bool {
		T::kind_matches(&self.locator.read())
	}

	/// Whether the addressed node is null.
	pub fn is_null(&self) -> bool {
		self.locator.read().is_null()
	}

	/// Whether the addressed node is null or an empty container.
	pub fn is_empty(&self) -> bool {
		node_is_empty(&self.locator.read())
	}

	/// Delete this field's member from its parent container. No-op if the
	/// member is absent.
	pub fn remove(&mut self) {
		self.locator.remove();
	}

	/// Address of this field's node.
	pub fn locator(&self) -> &Locator {
		&self.locator
	}
}
