//! The registration submit handler.
//!
//! Bridges one DOM submit event to one asynchronous network call and
//! reconciles the outcome with the page:
//!
//! ```text
//! submit event ──▶ prevent_default ──▶ gate ──▶ FormSnapshot::capture
//!                                                      │
//!                                              spawn_local(submit)
//!                                                      │
//!                    navigate(url)  ◀── PageEffect ──▶ render_errors(messages)
//! ```
//!
//! Attachment is an explicit call made once by the page's bootstrap code. A
//! page without the registration form is an accepted degenerate mode:
//! [`RegistrationSubmitHandler::attach`] installs nothing and no network
//! traffic can result. Once attached, the listener lives for the page's
//! lifetime; a successful registration ends that lifetime via a full
//! navigation.

use std::cell::Cell;
use std::rc::Rc;

use crate::config::RegistrationConfig;
use crate::submit::Submitter;

#[cfg(target_arch = "wasm32")]
use crate::error::{SubmitError, SubmitResult};
#[cfg(target_arch = "wasm32")]
use crate::form::FormSnapshot;
#[cfg(target_arch = "wasm32")]
use crate::outcome::{PageEffect, SubmissionOutcome};
#[cfg(target_arch = "wasm32")]
use crate::{error_log, info_log, warn_log};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use web_sys::HtmlFormElement;

/// Tracks the Idle ↔ Submitting state shared between submit events.
///
/// With the guard disabled the gate only records state: every submission is
/// admitted, matching the page's historical behavior where a second submit
/// while one is outstanding starts a second request. With the guard enabled,
/// `begin` refuses overlapping submissions until `finish` is called.
#[derive(Clone)]
pub(crate) struct SubmitGate {
	guard: bool,
	pending: Rc<Cell<bool>>,
}

impl SubmitGate {
	pub(crate) fn new(guard: bool) -> Self {
		Self {
			guard,
			pending: Rc::new(Cell::new(false)),
		}
	}

	/// Marks a submission as started. Returns false when the gate refuses it
	/// because an earlier submission is still outstanding.
	pub(crate) fn begin(&self) -> bool {
		if self.guard && self.pending.get() {
			return false;
		}
		self.pending.set(true);
		true
	}

	/// Marks the outstanding submission as settled.
	pub(crate) fn finish(&self) {
		self.pending.set(false);
	}
}

/// Bridges the registration form's submit event to the asynchronous
/// submission pipeline.
pub struct RegistrationSubmitHandler {
	config: RegistrationConfig,
	#[allow(dead_code)] // Read by the WASM attach path only
	submitter: Submitter,
	#[allow(dead_code)] // Read by the WASM attach path only
	gate: SubmitGate,
}

impl RegistrationSubmitHandler {
	/// Creates a handler for the given configuration.
	pub fn new(config: RegistrationConfig) -> Self {
		let gate = SubmitGate::new(config.guard_overlapping);
		Self {
			config,
			submitter: Submitter::new(),
			gate,
		}
	}

	/// The attachment configuration.
	pub fn config(&self) -> &RegistrationConfig {
		&self.config
	}
}

#[cfg(target_arch = "wasm32")]
impl RegistrationSubmitHandler {
	/// Wires the submit listener to the registration form.
	///
	/// Returns `true` when a listener was installed. A document without the
	/// form id is not an error: nothing is registered and the call returns
	/// `false`.
	pub fn attach(self) -> bool {
		let Some(document) = web_sys::window().and_then(|window| window.document()) else {
			return false;
		};
		let Some(element) = document.get_element_by_id(&self.config.form_id) else {
			info_log!(
				"registration form #{} not present; handler not attached",
				self.config.form_id
			);
			return false;
		};
		let form: HtmlFormElement = match element.dyn_into() {
			Ok(form) => form,
			Err(_) => {
				warn_log!(
					"element #{} is not a <form>; handler not attached",
					self.config.form_id
				);
				return false;
			}
		};
		self.install_submit_listener(&form);
		true
	}

	/// Attaches now, or on `DOMContentLoaded` if the document is still
	/// loading.
	pub fn attach_when_ready(self) {
		let Some(document) = web_sys::window().and_then(|window| window.document()) else {
			return;
		};
		if document.ready_state() == "loading" {
			let closure = Closure::once(move |_event: web_sys::Event| {
				self.attach();
			});
			document
				.add_event_listener_with_callback(
					"DOMContentLoaded",
					closure.as_ref().unchecked_ref(),
				)
				.expect("failed to add DOMContentLoaded listener");
			closure.forget();
		} else {
			self.attach();
		}
	}

	fn install_submit_listener(self, form: &HtmlFormElement) {
		let Self {
			config,
			submitter,
			gate,
		} = self;
		let capture_target = form.clone();

		let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
			// The native submission would leave the page synchronously.
			event.prevent_default();

			if !gate.begin() {
				warn_log!("submission already in flight; submit ignored");
				return;
			}

			// Field values are read synchronously, before any interleaving.
			let snapshot = match FormSnapshot::capture(&capture_target) {
				Ok(snapshot) => snapshot,
				Err(err) => {
					error_log!("failed to read registration form: {err}");
					gate.finish();
					return;
				}
			};

			let submitter = submitter.clone();
			let gate = gate.clone();
			let error_container_id = config.error_container_id.clone();
			wasm_bindgen_futures::spawn_local(async move {
				let effect = submitter
					.submit(&snapshot)
					.await
					.and_then(SubmissionOutcome::into_effect);
				gate.finish();
				match effect {
					Ok(PageEffect::Navigate(url)) => {
						if let Err(err) = navigate(&url) {
							error_log!("redirect after registration failed: {err}");
						}
					}
					Ok(PageEffect::RenderErrors(messages)) => {
						render_errors(&error_container_id, &messages);
					}
					Err(err) => error_log!("registration submission failed: {err}"),
				}
			});
		}) as Box<dyn FnMut(_)>);

		form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())
			.expect("failed to add submit listener");
		closure.forget(); // Keep closure alive for the page's lifetime
	}
}

#[cfg(not(target_arch = "wasm32"))]
impl RegistrationSubmitHandler {
	/// Non-WASM stub: there is no DOM to attach to.
	pub fn attach(self) -> bool {
		false
	}

	/// Non-WASM stub.
	pub fn attach_when_ready(self) {}
}

/// Performs the success-path full-page navigation.
#[cfg(target_arch = "wasm32")]
fn navigate(url: &str) -> SubmitResult<()> {
	let window =
		web_sys::window().ok_or_else(|| SubmitError::Dom("window unavailable".to_string()))?;
	window
		.location()
		.set_href(url)
		.map_err(|err| SubmitError::Dom(format!("navigation to {url} rejected: {err:?}")))
}

/// Replaces the error container's content with the joined messages.
///
/// A page without the container drops the messages; the drop is recorded so
/// it is at least visible to operators.
#[cfg(target_arch = "wasm32")]
fn render_errors(container_id: &str, messages: &str) {
	let container = web_sys::window()
		.and_then(|window| window.document())
		.and_then(|document| document.get_element_by_id(container_id));
	match container {
		Some(container) => container.set_inner_html(messages),
		None => warn_log!("error container #{container_id} not present; validation messages dropped"),
	}
}

/// Entry point called once by the page's loader script.
///
/// Installs the optional panic hook and attaches the default-configured
/// handler as soon as the document is ready.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn boot() {
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();

	RegistrationSubmitHandler::new(RegistrationConfig::default()).attach_when_ready();
}
