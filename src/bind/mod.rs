mod codec;
mod error;
mod field;
mod locator;
mod path;
mod view;

/// Node conversion trait, collection codecs, and bound-structure helpers.
pub use codec::{Codec, decode_view, encode_view};
/// Error and result aliases.
pub use error::{BindError, Result};
/// Typed conversion-field accessor.
pub use field::Field;
/// Document addresses and their key steps.
pub use locator::{Key, Locator};
/// Field path parser types.
pub use path::FieldPath;
/// Document tree node, re-exported from the underlying value collaborator.
pub use serde_json::Value;
/// Bound-view base type and binding trait.
pub use view::{Bound, View};
