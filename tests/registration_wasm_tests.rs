//! Browser-side tests for form capture and handler attachment.
//!
//! Run with `wasm-pack test --chrome --headless`.

#![cfg(target_arch = "wasm32")]

use parking_pages::csrf::CSRF_FORM_FIELD;
use parking_pages::{FormSnapshot, RegistrationConfig, RegistrationSubmitHandler};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlFormElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
	web_sys::window()
		.expect("window")
		.document()
		.expect("document")
}

fn build_form(document: &Document, id: &str) -> HtmlFormElement {
	let form: HtmlFormElement = document
		.create_element("form")
		.expect("create form")
		.dyn_into()
		.expect("form element");
	form.set_id(id);
	form.set_attribute("action", "/register").expect("action");
	for (name, value) in [
		(CSRF_FORM_FIELD, "tok-123"),
		("username", "marguerite"),
		("email", "marguerite@example.com"),
	] {
		let input: HtmlInputElement = document
			.create_element("input")
			.expect("create input")
			.dyn_into()
			.expect("input element");
		input.set_name(name);
		input.set_value(value);
		form.append_child(&input).expect("append input");
	}
	document
		.body()
		.expect("body")
		.append_child(&form)
		.expect("append form");
	form
}

#[wasm_bindgen_test]
fn capture_reads_fields_in_document_order() {
	let document = document();
	let form = build_form(&document, "captureForm");

	let snapshot = FormSnapshot::capture(&form).expect("capture");
	assert!(snapshot.action().ends_with("/register"));
	let names: Vec<_> = snapshot
		.fields()
		.iter()
		.map(|(name, _)| name.as_str())
		.collect();
	assert_eq!(names, vec![CSRF_FORM_FIELD, "username", "email"]);
	assert_eq!(snapshot.field(CSRF_FORM_FIELD), Some("tok-123"));

	form.remove();
}

#[wasm_bindgen_test]
fn attach_without_form_is_a_no_op() {
	let handler =
		RegistrationSubmitHandler::new(RegistrationConfig::default().form_id("absentForm"));
	assert!(!handler.attach());
}

#[wasm_bindgen_test]
fn attach_installs_listener_when_form_is_present() {
	let document = document();
	let form = build_form(&document, "registerForm");

	let handler = RegistrationSubmitHandler::new(RegistrationConfig::default());
	assert!(handler.attach());

	form.remove();
}
