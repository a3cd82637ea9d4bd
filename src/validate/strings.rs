//! String-shaped attribute validators.

// std
use std::sync::LazyLock;
// crates.io
use regex::Regex;
// self
use crate::diag::{AttributePath, Diagnostic, Diagnostics};

const EMAIL_MAX_LEN: usize = 254;
// Dot-atom local part (no quoting, no `$` or `/`) followed by a DNS host name with an
// alphabetic top-level label.
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9_%+'-]+(?:\.[A-Za-z0-9_%+'-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}$";

static EMAIL_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN must compile."));

/// Rejects values that are empty or consist only of whitespace.
///
/// Whitespace follows the Unicode `White_Space` property, so tabs, line breaks, form feeds,
/// vertical tabs, and non-breaking spaces all count. Any other character anywhere in the value
/// is enough to pass; `" 1"` and `"1 "` are both accepted.
pub fn no_empty_strings(value: &str, path: &AttributePath) -> Diagnostics {
	if value.trim().is_empty() {
		return Diagnostic::error("Value must not be empty", path)
			.with_detail(format!("{path} must contain at least one non-whitespace character."))
			.into();
	}

	Diagnostics::new()
}

/// Rejects values that are not a plain `local@domain` email address.
pub fn string_is_email_address(value: &str, path: &AttributePath) -> Diagnostics {
	if value.len() > EMAIL_MAX_LEN || !EMAIL_REGEX.is_match(value) {
		return Diagnostic::error("Value must be a valid email address", path)
			.with_detail(format!("{path} must be a valid email address, got {value:?}."))
			.into();
	}

	Diagnostics::new()
}
