// self
use crate::{
	_prelude::*,
	environment::MsGraphEndpoint,
	msgraph::{ApiVersion, ClientKind},
};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedRequest<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedRequest<F> = F;

/// A span builder used by the typed Graph clients.
#[derive(Clone, Debug)]
pub struct RequestSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl RequestSpan {
	/// Creates a new span tagged with the client kind + operation.
	pub fn new(kind: ClientKind, operation: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span =
				tracing::info_span!("directory_provider.request", client = kind.as_str(), operation);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, operation);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedRequest<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Emits a debug event when the client factory forces an API version for an endpoint.
pub fn record_api_version_override(
	kind: ClientKind,
	endpoint: MsGraphEndpoint,
	api_version: ApiVersion,
) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(
			client = kind.as_str(),
			endpoint = endpoint.as_str(),
			api_version = api_version.as_str(),
			"Overriding API version for endpoint."
		);
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (kind, endpoint, api_version);
	}
}
