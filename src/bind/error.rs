use thiserror::Error;

/// Errors surfaced while loading documents or parsing path expressions.
///
/// Type mismatches are deliberately not represented here: a field whose
/// stored node has the wrong tag decodes to the type's default and reports
/// `is_valid() == false` instead of failing.
#[derive(Debug, Error)]
pub enum BindError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input text was not a well-formed document.
	#[error("parse: {0}")]
	Parse(#[from] serde_json::Error),
	/// Path expression syntax is invalid.
	#[error("invalid field path: {path}")]
	InvalidFieldPath {
		/// Original user-provided path string.
		path: String,
	},
}

/// Result alias for binding operations.
pub type Result<T> = std::result::Result<T, BindError>;
