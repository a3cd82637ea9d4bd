//! Optional observability helpers for Graph client requests.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `directory_provider.request` with the `client`
//!   (service client kind) and `operation` fields, plus a debug event whenever the client factory
//!   applies an API version override.
//! - Enable `metrics` to increment the `directory_provider_request_total` counter for every
//!   attempt/success/failure, labeled by `client` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestOutcome {
	/// Entry to a client operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl RequestOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RequestOutcome::Attempt => "attempt",
			RequestOutcome::Success => "success",
			RequestOutcome::Failure => "failure",
		}
	}
}
impl Display for RequestOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
