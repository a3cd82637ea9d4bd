//! Shared request plumbing for every Graph service client.

// crates.io
use reqwest::{
	Method, RequestBuilder, Response, StatusCode,
	header::{AUTHORIZATION, HeaderValue, USER_AGENT},
};
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	auth::{Authorizer, TenantId},
	environment::MsGraphEndpoint,
	error::{ConfigError, DecodeError, TransportError},
	msgraph::{ApiVersion, ClientKind},
	obs::{self, RequestOutcome, RequestSpan},
};

const ERROR_PREVIEW_LIMIT: usize = 256;

/// Connection settings shared by all service clients.
///
/// Fields are public so configuration callbacks can adjust them between construction and first
/// use. Cloning is cheap; the underlying [`ReqwestClient`] shares its connection pool.
#[derive(Clone)]
pub struct BaseClient {
	/// Tenant the client is scoped to.
	pub tenant_id: TenantId,
	/// API version segment inserted before every resource path.
	pub api_version: ApiVersion,
	/// Base URL of the Graph API (scheme + host, optionally a path prefix).
	pub endpoint: Url,
	/// `User-Agent` header sent with every request.
	pub user_agent: Option<String>,
	/// Credential source for the `Authorization` header.
	pub authorizer: Option<Arc<dyn Authorizer>>,
	/// HTTP transport.
	pub http: ReqwestClient,
}
impl BaseClient {
	/// Creates a client for `tenant_id` targeting the public endpoint on `v1.0` with a fresh
	/// HTTP transport.
	pub fn new(tenant_id: TenantId) -> Self {
		Self::with_http_client(tenant_id, ReqwestClient::new())
	}

	/// Creates a client for `tenant_id` that sends requests through `http`.
	///
	/// Clones of one [`ReqwestClient`] share a connection pool, so factories pass the same
	/// transport to every client they build.
	pub fn with_http_client(tenant_id: TenantId, http: ReqwestClient) -> Self {
		Self {
			tenant_id,
			api_version: ApiVersion::default(),
			endpoint: MsGraphEndpoint::Global.url(),
			user_agent: None,
			authorizer: None,
			http,
		}
	}

	/// Appends `{api_version}/{segments...}` to the endpoint path.
	///
	/// Each segment is percent-encoded on its own, so identifiers containing `/`, `?` or `#`
	/// stay inside their segment. Empty and dot segments are rejected.
	pub fn build_uri(&self, segments: &[&str]) -> Result<Url> {
		if let Some(segment) = segments.iter().find(|s| matches!(**s, "" | "." | "..")) {
			return Err(ConfigError::InvalidPathSegment { segment: (*segment).to_owned() }.into());
		}

		let mut uri = self.endpoint.clone();

		uri.path_segments_mut()
			.map_err(|_| ConfigError::InvalidEndpoint { endpoint: self.endpoint.to_string() })?
			.pop_if_empty()
			.push(self.api_version.as_str())
			.extend(segments);

		Ok(uri)
	}

	/// Starts a request with the user agent and authorization headers applied.
	pub fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
		let mut builder = self.http.request(method, self.build_uri(segments)?);

		if let Some(user_agent) = &self.user_agent {
			let value = HeaderValue::from_str(user_agent)
				.map_err(|_| ConfigError::InvalidHeader { header: "User-Agent" })?;

			builder = builder.header(USER_AGENT, value);
		}
		if let Some(authorizer) = &self.authorizer {
			let mut value = HeaderValue::from_str(&authorizer.token()?.bearer())
				.map_err(|_| ConfigError::InvalidHeader { header: "Authorization" })?;

			value.set_sensitive(true);
			builder = builder.header(AUTHORIZATION, value);
		}

		Ok(builder)
	}

	/// Sends `builder` and decodes a JSON success body into `T`.
	pub async fn execute<T>(&self, builder: RequestBuilder) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let response = send(builder).await?;
		let status = response.status().as_u16();
		let bytes = response.bytes().await.map_err(TransportError::from)?;
		let mut deserializer = serde_json::Deserializer::from_slice(&bytes);

		serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|source| DecodeError::Json { source, status }.into())
	}

	/// Sends `builder` and discards the success body (e.g. `204 No Content`).
	pub async fn execute_empty(&self, builder: RequestBuilder) -> Result<()> {
		send(builder).await.map(|_| ())
	}
}
impl Debug for BaseClient {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("BaseClient")
			.field("tenant_id", &self.tenant_id)
			.field("api_version", &self.api_version)
			.field("endpoint", &self.endpoint.as_str())
			.field("user_agent", &self.user_agent)
			.field("authorizer", &self.authorizer.as_ref().map(|_| "<authorizer>"))
			.finish()
	}
}

/// Runs one client operation inside a request span and records its outcome.
pub(crate) async fn observe<T, Fut>(
	kind: ClientKind,
	operation: &'static str,
	fut: Fut,
) -> Result<T>
where
	Fut: Future<Output = Result<T>>,
{
	let span = RequestSpan::new(kind, operation);

	obs::record_request_outcome(kind, RequestOutcome::Attempt);

	let result = span.instrument(fut).await;
	let outcome = if result.is_ok() { RequestOutcome::Success } else { RequestOutcome::Failure };

	obs::record_request_outcome(kind, outcome);

	result
}

async fn send(builder: RequestBuilder) -> Result<Response> {
	let response = builder.send().await.map_err(TransportError::from)?;
	let status = response.status();

	if status.is_success() {
		return Ok(response);
	}

	let body = response.text().await.map_err(TransportError::from)?;

	Err(api_error(status, &body))
}

#[derive(Deserialize)]
struct GraphErrorEnvelope {
	error: GraphErrorBody,
}
#[derive(Deserialize)]
struct GraphErrorBody {
	code: Option<String>,
	message: Option<String>,
}

fn api_error(status: StatusCode, body: &str) -> Error {
	let parsed = serde_json::from_str::<GraphErrorEnvelope>(body).ok().map(|env| env.error);
	let (code, message) = match parsed {
		Some(GraphErrorBody { code, message: Some(message) }) => (code, message),
		Some(GraphErrorBody { code, message: None }) => (code, preview(body)),
		None => (None, preview(body)),
	};
	let message = if message.is_empty() {
		status.canonical_reason().unwrap_or("unknown status").to_owned()
	} else {
		message
	};

	Error::Api { status: status.as_u16(), code, message }
}

fn preview(body: &str) -> String {
	let trimmed = body.trim();

	if trimmed.chars().count() <= ERROR_PREVIEW_LIMIT {
		return trimmed.to_owned();
	}

	let mut buf = trimmed.chars().take(ERROR_PREVIEW_LIMIT).collect::<String>();

	buf.push('…');

	buf
}
