use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::bind::Bound;

/// Bidirectional converter between a native type and a document node.
///
/// `encode` builds a directly tagged node with no coercion. `decode`
/// follows the tree's permissive accessors: an absent or kind-mismatched
/// node yields the type's default rather than an error. `kind_matches`
/// checks the exact stored tag, distinguishing integral from fractional
/// numeric representation.
pub trait Codec: Sized {
	/// Build a directly tagged node from this value.
	fn encode(&self) -> Value;
	/// Rebuild a native value from `node`.
	fn decode(node: &Value) -> Self;
	/// Exact tag check for this value kind.
	fn kind_matches(node: &Value) -> bool;
}

impl Codec for String {
	fn encode(&self) -> Value {
		Value::String(self.clone())
	}

	fn decode(node: &Value) -> Self {
		node.as_str().unwrap_or_default().to_owned()
	}

	fn kind_matches(node: &Value) -> bool {
		node.is_string()
	}
}

impl Codec for i64 {
	fn encode(&self) -> Value {
		Value::from(*self)
	}

	fn decode(node: &Value) -> Self {
		node.as_i64().unwrap_or_default()
	}

	fn kind_matches(node: &Value) -> bool {
		node.is_i64()
	}
}

impl Codec for u64 {
	fn encode(&self) -> Value {
		Value::from(*self)
	}

	fn decode(node: &Value) -> Self {
		node.as_u64().unwrap_or_default()
	}

	fn kind_matches(node: &Value) -> bool {
		node.is_u64()
	}
}

impl Codec for bool {
	fn encode(&self) -> Value {
		Value::Bool(*self)
	}

	fn decode(node: &Value) -> Self {
		node.as_bool().unwrap_or_default()
	}

	fn kind_matches(node: &Value) -> bool {
		node.is_boolean()
	}
}

impl Codec for f32 {
	fn encode(&self) -> Value {
		Value::from(*self)
	}

	fn decode(node: &Value) -> Self {
		node.as_f64().unwrap_or_default() as f32
	}

	fn kind_matches(node: &Value) -> bool {
		node.is_f64()
	}
}

impl Codec for f64 {
	fn encode(&self) -> Value {
		Value::from(*self)
	}

	fn decode(node: &Value) -> Self {
		node.as_f64().unwrap_or_default()
	}

	fn kind_matches(node: &Value) -> bool {
		node.is_f64()
	}
}

/// Raw passthrough: the node itself, matching every kind.
impl Codec for Value {
	fn encode(&self) -> Value {
		self.clone()
	}

	fn decode(node: &Value) -> Self {
		node.clone()
	}

	fn kind_matches(_node: &Value) -> bool {
		true
	}
}

impl<T: Codec> Codec for Vec<T> {
	fn encode(&self) -> Value {
		Value::Array(self.iter().map(Codec::encode).collect())
	}

	fn decode(node: &Value) -> Self {
		match node {
			Value::Array(items) => items.iter().map(T::decode).collect(),
			_ => Vec::new(),
		}
	}

	fn kind_matches(node: &Value) -> bool {
		node.is_array()
	}
}

/// Insertion-ordered string-keyed mapping; members encode and decode in
/// the order the tree iterates them.
impl<T: Codec> Codec for IndexMap<String, T> {
	fn encode(&self) -> Value {
		let mut members = Map::new();
		for (name, value) in self {
			members.insert(name.clone(), value.encode());
		}
		Value::Object(members)
	}

	fn decode(node: &Value) -> Self {
		match node {
			Value::Object(members) => members.iter().map(|(name, value)| (name.clone(), T::decode(value))).collect(),
			_ => IndexMap::new(),
		}
	}

	fn kind_matches(node: &Value) -> bool {
		node.is_object()
	}
}

/// Encode a bound structure for storage inside a collection node.
pub fn encode_view<T: Bound>(value: &T) -> Value {
	value.to_node()
}

/// Rebuild a detached bound structure from a collection element node.
pub fn decode_view<T: Bound>(node: &Value) -> T {
	T::from_node(node.clone())
}
