//! Client-level error types shared across the typed Graph clients.
//!
//! Schema validators never produce these errors; they report through
//! [`Diagnostics`](crate::diag::Diagnostics) instead.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by the typed Graph clients.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Response body could not be decoded.
	#[error(transparent)]
	Decode(#[from] DecodeError),

	/// Graph API answered with a non-success status.
	#[error("Graph API returned status {status}: {message}.")]
	Api {
		/// HTTP status code.
		status: u16,
		/// Graph error code (`error.code`), when the body carried one.
		code: Option<String>,
		/// Graph error message or a body preview.
		message: String,
	},
}
impl Error {
	/// Returns the HTTP status for [`Error::Api`] failures.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Api { status, .. } => Some(*status),
			_ => None,
		}
	}

	/// Returns `true` when the Graph API reported that the object does not exist.
	pub fn is_not_found(&self) -> bool {
		self.status() == Some(404)
	}
}

/// Configuration failures raised before a request leaves the process.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Configured endpoint cannot carry a resource path (e.g. a `mailto:` URL).
	#[error("Endpoint `{endpoint}` cannot carry a resource path.")]
	InvalidEndpoint {
		/// Endpoint that was configured on the client.
		endpoint: String,
	},
	/// Resource path segment would be dropped or reinterpreted by URL normalization.
	#[error("Path segment `{segment}` is not a valid resource name.")]
	InvalidPathSegment {
		/// Offending segment.
		segment: String,
	},
	/// Authorizer could not produce an `Authorization` header.
	#[error("Authorizer failed to produce credentials.")]
	Authorizer {
		/// Authorizer-specific failure.
		#[source]
		source: BoxError,
	},
	/// Header value contains characters HTTP does not allow.
	#[error("The {header} header contains invalid characters.")]
	InvalidHeader {
		/// Header name that failed validation.
		header: &'static str,
	},
}
impl ConfigError {
	/// Wraps an authorizer failure inside [`ConfigError`].
	pub fn authorizer(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Authorizer { source: Box::new(src) }
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the Graph API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Response decoding failures.
#[derive(Debug, ThisError)]
pub enum DecodeError {
	/// Graph API responded with JSON that does not match the expected model.
	#[error("Graph API returned malformed JSON.")]
	Json {
		/// Structured parsing failure, including the offending path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the response.
		status: u16,
	},
}
