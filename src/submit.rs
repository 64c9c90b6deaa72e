//! The network stage.
//!
//! One [`Submitter`] lives for the handler's lifetime and performs one POST
//! per submit interaction: multipart body mirroring the captured fields, the
//! anti-forgery token and AJAX marker as headers, JSON decode of whatever
//! comes back. HTTP status codes are deliberately not consulted - the page's
//! contract is body-driven, so an HTML error page surfaces as a malformed
//! response, not a distinct status-code path.

use reqwest::Client;
use reqwest::multipart::Form;

use crate::csrf::{self, AJAX_HEADER_NAME, AJAX_HEADER_VALUE, CSRF_HEADER_NAME};
use crate::error::{SubmitError, SubmitResult};
use crate::form::FormSnapshot;
use crate::outcome::SubmissionOutcome;

/// Performs the asynchronous registration POST.
#[derive(Debug, Clone)]
pub struct Submitter {
	client: Client,
}

impl Submitter {
	/// Creates a submitter with its own HTTP client.
	pub fn new() -> Self {
		Self {
			client: Client::new(),
		}
	}

	/// Submits a captured form and decodes the server's verdict.
	///
	/// Fails fast with [`SubmitError::MissingCsrfToken`] before any request
	/// is issued when the snapshot carries no usable token. Issues exactly
	/// one request otherwise; there is no retry and no timeout beyond the
	/// browser's own.
	pub async fn submit(&self, snapshot: &FormSnapshot) -> SubmitResult<SubmissionOutcome> {
		let token = csrf::extract_token(snapshot)?;

		let mut form = Form::new();
		for (name, value) in snapshot.fields() {
			form = form.text(name.clone(), value.clone());
		}

		let response = self
			.client
			.post(snapshot.action())
			.header(CSRF_HEADER_NAME, token.as_str())
			.header(AJAX_HEADER_NAME, AJAX_HEADER_VALUE)
			.multipart(form)
			.send()
			.await?;

		response.json::<SubmissionOutcome>().await.map_err(|err| {
			if err.is_decode() {
				SubmitError::MalformedResponse(err.to_string())
			} else {
				SubmitError::Network(err)
			}
		})
	}
}

impl Default for Submitter {
	fn default() -> Self {
		Self::new()
	}
}
