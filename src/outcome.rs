//! The server's JSON verdict and its reconciliation with the page.
//!
//! The registration endpoint answers every asynchronous submission with
//! `{ success, redirect_url?, errors? }`. Exactly one of the two payloads is
//! meaningful, gated by the success flag; [`SubmissionOutcome::into_effect`]
//! turns a well-formed body into the single page mutation the handler applies.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{SubmitError, SubmitResult};

/// Separator between validation messages in the error container.
const MESSAGE_SEPARATOR: &str = "<br>";

/// The JSON body returned by the registration endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionOutcome {
	/// Whether the registration was accepted.
	pub success: bool,
	/// Navigation target after a successful registration.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub redirect_url: Option<String>,
	/// Per-field validation messages, in server order.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub errors: Option<IndexMap<String, String>>,
}

/// What the page should do once a response has been fully parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEffect {
	/// Leave the page via a full navigation.
	Navigate(String),
	/// Replace the error container's content with the given markup.
	RenderErrors(String),
}

impl SubmissionOutcome {
	/// Decides the page effect for this outcome.
	///
	/// A success without a redirect target violates the response contract and
	/// is reported as a malformed response rather than silently ignored. A
	/// failure without messages renders an empty list, discarding whatever
	/// the container held before.
	pub fn into_effect(self) -> SubmitResult<PageEffect> {
		if self.success {
			match self.redirect_url {
				Some(url) => Ok(PageEffect::Navigate(url)),
				None => Err(SubmitError::MalformedResponse(
					"success response without redirect_url".to_string(),
				)),
			}
		} else {
			let joined = self
				.errors
				.unwrap_or_default()
				.into_values()
				.collect::<Vec<_>>()
				.join(MESSAGE_SEPARATOR);
			Ok(PageEffect::RenderErrors(joined))
		}
	}
}
