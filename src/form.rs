//! Form capture.
//!
//! A [`FormSnapshot`] is the submission request's raw material: the field
//! name/value pairs and the declared action URL, read off the live form once
//! per submit interaction. The snapshot is plain data so the rest of the
//! pipeline runs unchanged on native targets.

#[cfg(target_arch = "wasm32")]
use crate::error::{SubmitError, SubmitResult};

/// The field values and action URL of a form at one submit instant.
///
/// Field order is the form's own entry order, which the server's validation
/// and the error display both follow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
	action: String,
	fields: Vec<(String, String)>,
}

impl FormSnapshot {
	/// Creates an empty snapshot posting to `action`.
	pub fn new(action: impl Into<String>) -> Self {
		Self {
			action: action.into(),
			fields: Vec::new(),
		}
	}

	/// Appends a field, builder style.
	pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.push_field(name, value);
		self
	}

	/// Appends a field.
	pub fn push_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.fields.push((name.into(), value.into()));
	}

	/// The URL the form declares as its submission target.
	pub fn action(&self) -> &str {
		&self.action
	}

	/// All fields in entry order.
	pub fn fields(&self) -> &[(String, String)] {
		&self.fields
	}

	/// The first value recorded under `name`, if any.
	pub fn field(&self, name: &str) -> Option<&str> {
		self.fields
			.iter()
			.find(|(field_name, _)| field_name == name)
			.map(|(_, value)| value.as_str())
	}
}

#[cfg(target_arch = "wasm32")]
impl FormSnapshot {
	/// Reads the current field values off a live form element.
	///
	/// Only string entries are carried; the registration form has no file
	/// inputs, and a file part would not survive the snapshot model anyway.
	pub fn capture(form: &web_sys::HtmlFormElement) -> SubmitResult<Self> {
		let data = web_sys::FormData::new_with_form(form)
			.map_err(|err| SubmitError::Dom(format!("form data unavailable: {err:?}")))?;

		let mut snapshot = Self::new(form.action());

		let entries = js_sys::try_iter(&data)
			.map_err(|err| SubmitError::Dom(format!("form entries not iterable: {err:?}")))?
			.ok_or_else(|| SubmitError::Dom("form entries not iterable".to_string()))?;
		for entry in entries {
			let entry =
				entry.map_err(|err| SubmitError::Dom(format!("form entry unreadable: {err:?}")))?;
			let pair = js_sys::Array::from(&entry);
			let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string())
			else {
				continue;
			};
			snapshot.push_field(name, value);
		}

		Ok(snapshot)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_fields_keep_entry_order() {
		let snapshot = FormSnapshot::new("/register")
			.with_field("username", "marguerite")
			.with_field("email", "marguerite@example.com")
			.with_field("password", "hunter2hunter2");
		let names: Vec<_> = snapshot
			.fields()
			.iter()
			.map(|(name, _)| name.as_str())
			.collect();
		assert_eq!(names, vec!["username", "email", "password"]);
	}

	#[rstest]
	fn test_field_lookup_returns_first_match() {
		let snapshot = FormSnapshot::new("/register")
			.with_field("choice", "first")
			.with_field("choice", "second");
		assert_eq!(snapshot.field("choice"), Some("first"));
		assert_eq!(snapshot.field("absent"), None);
	}

	#[rstest]
	fn test_action_is_preserved() {
		let snapshot = FormSnapshot::new("http://testserver/register");
		assert_eq!(snapshot.action(), "http://testserver/register");
		assert!(snapshot.fields().is_empty());
	}
}
