use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use serde_json::{Map, Value};

use crate::bind::FieldPath;

/// One step in a document address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
	/// Named object member.
	Member(String),
	/// Zero-based array element.
	Index(usize),
}

impl From<&str> for Key {
	fn from(name: &str) -> Self {
		Self::Member(name.to_owned())
	}
}

impl From<String> for Key {
	fn from(name: String) -> Self {
		Self::Member(name)
	}
}

impl From<usize> for Key {
	fn from(index: usize) -> Self {
		Self::Index(index)
	}
}

enum Anchor {
	Root(RefCell<Value>),
	Child { parent: Locator, key: Key },
}

/// Navigable address into a document tree.
///
/// A root locator owns its tree outright. A child locator holds a handle to
/// its parent plus one key and owns nothing; it cannot outlive the root it
/// hangs off, because the handle chain keeps the root alive. Resolution
/// re-walks from the root on every call, so a mutation of any ancestor is
/// immediately visible through every locator below it.
#[derive(Clone)]
pub struct Locator {
	anchor: Rc<Anchor>,
}

impl Locator {
	/// Root locator taking exclusive ownership of `value`.
	pub fn root(value: Value) -> Self {
		Self {
			anchor: Rc::new(Anchor::Root(RefCell::new(value))),
		}
	}

	/// Child locator addressing `key` below this one.
	pub fn child(&self, key: impl Into<Key>) -> Self {
		Self {
			anchor: Rc::new(Anchor::Child {
				parent: self.clone(),
				key: key.into(),
			}),
		}
	}

	/// Chained child locator for every key of a parsed path.
	pub fn descend(&self, path: &FieldPath) -> Self {
		let mut current = self.clone();
		for key in &path.keys {
			current = current.child(key.clone());
		}
		current
	}

	/// Resolve to the live value at this address.
	///
	/// Absent members and out-of-range indices resolve to the null
	/// sentinel without touching the tree; resolution never fails.
	pub fn read(&self) -> Ref<'_, Value> {
		let (cell, keys) = self.chain();
		Ref::map(cell.borrow(), |root| {
			let mut node = root;
			for key in keys.iter().rev() {
				node = match key {
					Key::Member(name) => &node[name.as_str()],
					Key::Index(index) => &node[*index],
				};
			}
			node
		})
	}

	/// Resolve to the mutable value at this address, creating missing
	/// intermediate containers along the path.
	pub fn write(&self) -> RefMut<'_, Value> {
		let (cell, keys) = self.chain();
		RefMut::map(cell.borrow_mut(), |root| {
			let mut node = root;
			for key in keys.iter().rev() {
				node = match key {
					Key::Member(name) => member_slot(node, name),
					Key::Index(index) => element_slot(node, *index),
				};
			}
			node
		})
	}

	/// Owned deep copy of the resolved subtree.
	pub fn snapshot(&self) -> Value {
		self.read().clone()
	}

	/// Delete this address's member or element from its immediate parent
	/// container. No-op for root locators and absent members; an absent
	/// parent chain is left unwritten.
	pub fn remove(&self) {
		let Anchor::Child { parent, key } = self.anchor.as_ref() else {
			return;
		};

		let present = match (&*parent.read(), key) {
			(Value::Object(members), Key::Member(name)) => members.contains_key(name),
			(Value::Array(items), Key::Index(index)) => *index < items.len(),
			_ => false,
		};
		if !present {
			return;
		}

		match (&mut *parent.write(), key) {
			(Value::Object(members), Key::Member(name)) => {
				members.shift_remove(name);
			}
			(Value::Array(items), Key::Index(index)) => {
				items.remove(*index);
			}
			_ => {}
		}
	}

	fn chain(&self) -> (&RefCell<Value>, Vec<&Key>) {
		let mut keys = Vec::new();
		let mut current = self;
		loop {
			match current.anchor.as_ref() {
				Anchor::Root(cell) => return (cell, keys),
				Anchor::Child { parent, key } => {
					keys.push(key);
					current = parent;
				}
			}
		}
	}
}

/// Mutable slot for an object member. Anything other than an object on the
/// path is replaced by one, matching the tree's assignment semantics.
fn member_slot<'node>(node: &'node mut Value, name: &str) -> &'node mut Value {
	if !node.is_object() && !node.is_null() {
		*node = Value::Object(Map::new());
	}
	&mut node[name]
}

/// Mutable slot for an array element, extending the array with nulls up to
/// `index`. Anything other than an array on the path is replaced by one.
fn element_slot(node: &mut Value, index: usize) -> &mut Value {
	if !node.is_array() {
		*node = Value::Array(Vec::new());
	}
	if let Value::Array(items) = node {
		if items.len() <= index {
			items.resize(index + 1, Value::Null);
		}
	}
	&mut node[index]
}
