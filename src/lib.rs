//! parking-pages - asynchronous registration submission
//!
//! The parking application serves its registration page as a classic
//! Django-rendered template. This crate is the page's WASM module: it
//! intercepts the registration form's submit event, posts the form data
//! asynchronously with the Django anti-forgery convention, and reconciles the
//! server's JSON verdict with the page - a full navigation on success, inline
//! validation messages on failure.
//!
//! ## Architecture
//!
//! ```text
//! Browser (wasm32):                      Any target:
//! ┌───────────────────────────┐          ┌────────────────────────────┐
//! │ RegistrationSubmitHandler │  submit  │ Submitter                  │
//! │   attach() / boot()       │─────────▶│   POST multipart + headers │
//! │   navigate / render       │◀─────────│   decode SubmissionOutcome │
//! └───────────────────────────┘  effect  └────────────────────────────┘
//! ```
//!
//! The DOM-facing layer is wasm32-only with non-WASM stubs; the submission
//! pipeline (snapshot → request → outcome → page effect) is target-independent
//! and exercised natively in the integration tests.
//!
//! ## Example
//!
//! ```ignore
//! use parking_pages::{RegistrationConfig, RegistrationSubmitHandler};
//!
//! // Called once by the page's loader script.
//! RegistrationSubmitHandler::new(RegistrationConfig::default()).attach_when_ready();
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod csrf;
pub mod error;
pub mod form;
pub mod handler;
pub mod logging;
pub mod outcome;
pub mod submit;

pub use config::RegistrationConfig;
pub use error::{SubmitError, SubmitResult};
pub use form::FormSnapshot;
pub use handler::RegistrationSubmitHandler;
pub use outcome::{PageEffect, SubmissionOutcome};
pub use submit::Submitter;
