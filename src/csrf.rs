//! Django anti-forgery conventions for asynchronous submissions.
//!
//! The server renders a hidden `csrfmiddlewaretoken` input into every form it
//! serves. An asynchronous submission echoes that value twice: once in the
//! form body (the field is forwarded untouched with the rest) and once in the
//! `X-CSRFToken` header, alongside the `X-Requested-With` marker the server
//! uses to recognize AJAX requests.

use crate::error::{SubmitError, SubmitResult};
use crate::form::FormSnapshot;

/// The form field name for CSRF tokens.
pub const CSRF_FORM_FIELD: &str = "csrfmiddlewaretoken";

/// The header name used to send CSRF tokens in AJAX requests.
pub const CSRF_HEADER_NAME: &str = "X-CSRFToken";

/// The header marking a request as asynchronous.
pub const AJAX_HEADER_NAME: &str = "X-Requested-With";

/// The value sent under [`AJAX_HEADER_NAME`].
pub const AJAX_HEADER_VALUE: &str = "XMLHttpRequest";

/// Extracts the anti-forgery token from a captured form.
///
/// The token field must be present and non-empty; otherwise the submission
/// fails fast with [`SubmitError::MissingCsrfToken`] before any request is
/// issued.
pub fn extract_token(snapshot: &FormSnapshot) -> SubmitResult<String> {
	match snapshot.field(CSRF_FORM_FIELD) {
		Some(token) if !token.is_empty() => Ok(token.to_string()),
		_ => Err(SubmitError::MissingCsrfToken),
	}
}
