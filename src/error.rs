//! Error types for the browser-facing effects.
//!
//! The animation path is pure arithmetic and never fails; only DOM wiring and
//! the contact relay produce errors.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors surfaced by DOM wiring and the message relay.
#[derive(Debug, Error)]
pub enum FxError {
	/// A browser API threw or rejected.
	#[error("browser call failed: {0}")]
	Js(String),
	/// The relay answered with a non-success status.
	#[error("relay returned {status}: {body}")]
	Status {
		/// HTTP status code.
		status: u16,
		/// Response text, for the log.
		body: String,
	},
	/// The request body could not be encoded.
	#[error("failed to encode request: {0}")]
	Encode(#[from] serde_json::Error),
	/// The relay is missing one of its identifiers.
	#[error("contact relay is not configured: {0} is empty")]
	NotConfigured(&'static str),
	/// A required element is absent from the page.
	#[error("missing element: {0}")]
	MissingElement(String),
}

impl From<JsValue> for FxError {
	fn from(value: JsValue) -> Self {
		let message = value
			.as_string()
			.or_else(|| {
				js_sys::Reflect::get(&value, &JsValue::from_str("message"))
					.ok()
					.and_then(|m| m.as_string())
			})
			.unwrap_or_else(|| format!("{:?}", value));
		FxError::Js(message)
	}
}

/// Result defaulting to [`FxError`].
pub type Result<T, E = FxError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn status_error_mentions_code_and_body() {
		let err = FxError::Status {
			status: 400,
			body: "The template ID is invalid".into(),
		};
		assert_eq!(err.to_string(), "relay returned 400: The template ID is invalid");
	}

	#[test]
	fn missing_element_names_the_selector() {
		let err = FxError::MissingElement("#formMessage".into());
		assert_eq!(err.to_string(), "missing element: #formMessage");
	}
}
