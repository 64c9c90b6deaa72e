//! Submission error taxonomy.

use thiserror::Error;

/// Errors produced while submitting the registration form.
#[derive(Debug, Error)]
pub enum SubmitError {
	/// The captured form has no usable anti-forgery token field.
	///
	/// Submission fails fast: a request without the token would be rejected
	/// by the server, so none is sent.
	#[error("registration form has no usable anti-forgery token field")]
	MissingCsrfToken,

	/// The request could not be built or did not complete.
	#[error("registration request failed: {0}")]
	Network(#[from] reqwest::Error),

	/// The response body was not the expected JSON contract.
	#[error("registration response was not understood: {0}")]
	MalformedResponse(String),

	/// A browser-side DOM operation failed.
	#[error("DOM operation failed: {0}")]
	Dom(String),
}

impl SubmitError {
	/// Returns true for failures of the transport itself (DNS, refused
	/// connection, aborted fetch).
	pub fn is_transport(&self) -> bool {
		matches!(self, Self::Network(_))
	}

	/// Returns true when the server answered but outside the JSON contract.
	pub fn is_protocol(&self) -> bool {
		matches!(self, Self::MalformedResponse(_))
	}
}

/// Result alias used across the crate.
pub type SubmitResult<T> = Result<T, SubmitError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_malformed_response_is_protocol() {
		let err = SubmitError::MalformedResponse("not json".to_string());
		assert!(err.is_protocol());
		assert!(!err.is_transport());
	}

	#[rstest]
	fn test_missing_token_is_neither_transport_nor_protocol() {
		let err = SubmitError::MissingCsrfToken;
		assert!(!err.is_transport());
		assert!(!err.is_protocol());
	}
}
