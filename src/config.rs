//! Attachment configuration.

/// Default id of the registration `<form>` element.
pub const DEFAULT_FORM_ID: &str = "registerForm";

/// Default id of the element that receives validation messages.
pub const DEFAULT_ERROR_CONTAINER_ID: &str = "errorContainer";

/// Where the handler hooks into the page and how it treats overlapping
/// submissions.
///
/// The defaults match the ids the server renders into the registration
/// template; the setters exist so the same handler can serve the
/// application's other Django-rendered forms.
///
/// # Example
///
/// ```
/// use parking_pages::RegistrationConfig;
///
/// let config = RegistrationConfig::new()
///     .form_id("contactForm")
///     .error_container_id("contactErrors")
///     .guard_overlapping(true);
/// assert_eq!(config.form_id, "contactForm");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationConfig {
	/// Id of the `<form>` element to intercept.
	pub form_id: String,
	/// Id of the element whose content is replaced with validation messages.
	pub error_container_id: String,
	/// When true, submit events are ignored while a request is outstanding.
	///
	/// Off by default, preserving the page's historical
	/// one-request-per-interaction behavior.
	pub guard_overlapping: bool,
}

impl Default for RegistrationConfig {
	fn default() -> Self {
		Self {
			form_id: DEFAULT_FORM_ID.to_string(),
			error_container_id: DEFAULT_ERROR_CONTAINER_ID.to_string(),
			guard_overlapping: false,
		}
	}
}

impl RegistrationConfig {
	/// Creates the default configuration.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the form element id.
	pub fn form_id(mut self, id: impl Into<String>) -> Self {
		self.form_id = id.into();
		self
	}

	/// Sets the error container element id.
	pub fn error_container_id(mut self, id: impl Into<String>) -> Self {
		self.error_container_id = id.into();
		self
	}

	/// Enables or disables the overlapping-submission guard.
	pub fn guard_overlapping(mut self, guard: bool) -> Self {
		self.guard_overlapping = guard;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_defaults_match_rendered_template() {
		let config = RegistrationConfig::default();
		assert_eq!(config.form_id, "registerForm");
		assert_eq!(config.error_container_id, "errorContainer");
		assert!(!config.guard_overlapping);
	}

	#[rstest]
	fn test_builder_overrides() {
		let config = RegistrationConfig::new()
			.form_id("loginForm")
			.error_container_id("loginErrors")
			.guard_overlapping(true);
		assert_eq!(config.form_id, "loginForm");
		assert_eq!(config.error_container_id, "loginErrors");
		assert!(config.guard_overlapping);
	}
}
