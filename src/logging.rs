//! Logging for WASM and native targets
//!
//! The handler's only observability channel is the browser console (or stderr
//! when compiled natively, e.g. under tests). `info_log!` and `warn_log!`
//! compile to no-ops in release builds; `error_log!` is always active because
//! a failed submission leaves no other operator-visible trace.
//!
//! | Macro | Debug assertions | WASM | Non-WASM |
//! |-------|------------------|------|----------|
//! | `info_log!` | Required | `console.info` | `eprintln!` |
//! | `warn_log!` | Required | `console.warn` | `eprintln!` |
//! | `error_log!` | Not required | `console.error` | `eprintln!` |

/// Logs an info message (requires `debug_assertions`)
///
/// # Example
///
/// ```ignore
/// info_log!("registration form #{} not present", form_id);
/// ```
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		web_sys::console::info_1(&format!($($arg)*).into());
	}};
}

/// Logs an info message (requires `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		eprintln!("[INFO] {}", format!($($arg)*));
	}};
}

/// No-op info_log in release builds
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! info_log {
	($($arg:tt)*) => {{}};
}

/// Logs a warning message (requires `debug_assertions`)
///
/// # Example
///
/// ```ignore
/// warn_log!("submission already in flight; submit ignored");
/// ```
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		web_sys::console::warn_1(&format!($($arg)*).into());
	}};
}

/// Logs a warning message (requires `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		eprintln!("[WARN] {}", format!($($arg)*));
	}};
}

/// No-op warn_log in release builds
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! warn_log {
	($($arg:tt)*) => {{}};
}

/// Logs an error message
///
/// Active in all build profiles: transport and parse failures are reported
/// nowhere else.
///
/// # Example
///
/// ```ignore
/// error_log!("registration submission failed: {err}");
/// ```
#[macro_export]
#[cfg(target_arch = "wasm32")]
macro_rules! error_log {
	($($arg:tt)*) => {{
		web_sys::console::error_1(&format!($($arg)*).into());
	}};
}

/// Logs an error message
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		eprintln!("[ERROR] {}", format!($($arg)*));
	}};
}
