//! Schema validators that report problems as [`Diagnostics`] instead of errors.
//!
//! Every validator has the shape `fn(&str, &AttributePath) -> Diagnostics` ([`StringValidator`])
//! so it can be composed, reused across resources, and tested in isolation. The schema framework
//! hands attribute values over untyped; [`validate_string_value`] performs the type check before
//! delegating to a string validator.

pub mod strings;

pub use strings::*;

// self
use crate::diag::{AttributePath, Diagnostic, Diagnostics};

/// Signature shared by all string validators.
pub type StringValidator = fn(&str, &AttributePath) -> Diagnostics;

/// Runs `validator` against an untyped attribute value.
///
/// Non-string values produce a single "Expected a string value" error and the validator is not
/// invoked.
pub fn validate_string_value(
	value: &serde_json::Value,
	path: &AttributePath,
	validator: StringValidator,
) -> Diagnostics {
	match value.as_str() {
		Some(view) => validator(view, path),
		None => Diagnostic::error("Expected a string value", path)
			.with_detail(format!("{path} must be a string, got {value}."))
			.into(),
	}
}

/// Runs every validator against `value` and concatenates their diagnostics in order.
pub fn all_of(validators: &[StringValidator], value: &str, path: &AttributePath) -> Diagnostics {
	validators.iter().flat_map(|validator| validator(value, path)).collect()
}
