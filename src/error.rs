//! Error type shared by every page behavior.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while wiring behaviors to the document.
///
/// Missing markup is not an error: behaviors whose anchors are absent simply
/// do not attach. Only a missing global environment or a failing DOM call
/// surfaces here.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PageError {
	/// `window` is not available (not running in a browser main thread).
	#[error("no global window")]
	NoWindow,

	/// The window has no document.
	#[error("window has no document")]
	NoDocument,

	/// The document has no `<body>`.
	#[error("document has no body")]
	NoBody,

	/// A DOM call threw.
	#[error("dom call failed: {0}")]
	Js(String),
}

impl From<JsValue> for PageError {
	fn from(value: JsValue) -> Self {
		Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}

/// Result alias for attach-time operations.
pub type Result<T> = std::result::Result<T, PageError>;
